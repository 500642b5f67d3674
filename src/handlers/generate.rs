use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::{ApiError, INVALID_BODY_MESSAGE, INVALID_IMAGE_MESSAGE};
use crate::llm::{InlineImage, ModelRequest};
use crate::profile::{clean_json_reply, fallback_profile, InfluencerProfile};
use crate::prompts::{
    fashion, influencer, pets, pov, scenario, script, showcase, split_options, thumbnail,
    MediaType, Tone,
};
use crate::state::AppState;
use crate::utils::fields::{loose_string, present, scalar_text};
use crate::utils::timing::{complete_request_timer, start_request_timer};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Preencha todos os campos obrigatórios";
pub const SCRIPT_FIELDS_MESSAGE: &str = "Preencha todos os campos do roteiro";
pub const FASHION_IMAGE_MESSAGE: &str = "Faça o upload da roupa";
pub const POV_IMAGE_MESSAGE: &str = "Faça o upload da imagem do produto";
pub const SHOWCASE_IMAGE_MESSAGE: &str = "Faça o upload do produto";
pub const THUMBNAIL_FIELDS_MESSAGE: &str = "Preencha a expressão e o texto da thumbnail";
pub const PETS_FIELDS_MESSAGE: &str = "Preencha o tipo de pet e a raça/descrição";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabType {
    Influencer,
    Script,
    Fashion,
    Pov,
    Showcase,
    Scenario,
    Thumbnail,
    Pets,
}

impl TabType {
    pub fn parse(value: &str) -> Option<TabType> {
        match value {
            "influencer" => Some(TabType::Influencer),
            "script" => Some(TabType::Script),
            "fashion" => Some(TabType::Fashion),
            "pov" => Some(TabType::Pov),
            "showcase" => Some(TabType::Showcase),
            "scenario" => Some(TabType::Scenario),
            "thumbnail" => Some(TabType::Thumbnail),
            "pets" => Some(TabType::Pets),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TabType::Influencer => "influencer",
            TabType::Script => "script",
            TabType::Fashion => "fashion",
            TabType::Pov => "pov",
            TabType::Showcase => "showcase",
            TabType::Scenario => "scenario",
            TabType::Thumbnail => "thumbnail",
            TabType::Pets => "pets",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub prompt: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl GenerateResponse {
    fn prompt(prompt: String) -> Self {
        GenerateResponse {
            prompt,
            options: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InfluencerRequest {
    #[serde(default, deserialize_with = "loose_string")]
    gender: Option<String>,
    /// Kept as sent so the fallback profile echoes a numeric age as a number.
    #[serde(default)]
    age: Option<Value>,
    #[serde(default, deserialize_with = "loose_string")]
    ethnicity: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    hair_color: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    eye_color: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    location: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    extra_details: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    reference_photo: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScriptRequest {
    #[serde(default, deserialize_with = "loose_string")]
    product_name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    main_benefit: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    tone: Option<String>,
}

/// Shared by the fashion, pov and showcase tabs.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisualRequest {
    #[serde(default, deserialize_with = "loose_string")]
    image: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    product_image: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    media_type: Option<String>,
    #[serde(default, rename = "influencerJSON", deserialize_with = "loose_string")]
    influencer_json: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    custom_script: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    tone: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioRequest {
    #[serde(default, deserialize_with = "loose_string")]
    environment_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    visual_style: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    lighting: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    details: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThumbnailRequest {
    #[serde(default, deserialize_with = "loose_string")]
    expression: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    content_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    thumbnail_text: Option<String>,
    #[serde(default, rename = "influencerJSON", deserialize_with = "loose_string")]
    influencer_json: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    reference_image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PetsRequest {
    #[serde(default, deserialize_with = "loose_string")]
    pet_type: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    breed: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    action: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    scenario: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    personality: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pet_photo: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    details: Option<String>,
}

pub async fn generate(State(state): State<AppState>, body: Bytes) -> Response {
    let parsed = serde_json::from_slice::<Value>(&body);
    let tab_label = parsed
        .as_ref()
        .ok()
        .and_then(|value| value.get("tabType"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let mut timer = start_request_timer("/api/generate", tab_label.as_deref());

    let result = match parsed {
        Ok(value) => dispatch(&state, value).await,
        Err(err) => {
            warn!("Rejecting unparseable generate body: {err}");
            Err(ApiError::validation(INVALID_BODY_MESSAGE))
        }
    };

    match result {
        Ok(response) => {
            complete_request_timer(&mut timer, 200, None);
            Json(response).into_response()
        }
        Err(err) => {
            let status = err.status();
            if status.is_server_error() {
                error!(tab_type = ?tab_label, "Erro ao gerar prompt: {err}");
            } else {
                info!(tab_type = ?tab_label, "Rejected generate request: {err}");
            }
            complete_request_timer(&mut timer, status.as_u16(), Some(err.to_string()));
            err.into_response()
        }
    }
}

async fn dispatch(state: &AppState, body: Value) -> Result<GenerateResponse, ApiError> {
    if !state.model.is_configured() {
        return Err(ApiError::MissingApiKey);
    }

    let tab = body
        .get("tabType")
        .and_then(Value::as_str)
        .and_then(TabType::parse)
        .ok_or(ApiError::InvalidTab)?;

    match tab {
        TabType::Influencer => generate_influencer(state, fields(body)?).await,
        TabType::Script => generate_script(state, fields(body)?).await,
        TabType::Fashion => generate_fashion(state, fields(body)?).await,
        TabType::Pov => generate_pov(state, fields(body)?).await,
        TabType::Showcase => generate_showcase(state, fields(body)?).await,
        TabType::Scenario => generate_scenario(state, fields(body)?).await,
        TabType::Thumbnail => generate_thumbnail(state, fields(body)?).await,
        TabType::Pets => generate_pets(state, fields(body)?).await,
    }
}

fn fields<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|err| {
        warn!("Generate body did not match its tab fields: {err}");
        ApiError::validation(INVALID_BODY_MESSAGE)
    })
}

fn decode_image(raw: &str) -> Result<InlineImage, ApiError> {
    InlineImage::from_data_url(raw).map_err(|err| {
        warn!("Rejecting uploaded image: {err}");
        ApiError::validation(INVALID_IMAGE_MESSAGE)
    })
}

fn influencer_description(
    raw: &Option<String>,
    tab: TabType,
    render: impl FnOnce(&InfluencerProfile) -> anyhow::Result<String>,
) -> Option<String> {
    let text = present(raw)?;
    match InfluencerProfile::parse(text).and_then(|profile| render(&profile)) {
        Ok(description) => Some(description),
        Err(err) => {
            info!(tab_type = tab.as_str(), "Ignoring influencer JSON: {err}");
            None
        }
    }
}

async fn ask_model(state: &AppState, request: ModelRequest) -> Result<String, ApiError> {
    state
        .model
        .generate(request)
        .await
        .map_err(ApiError::upstream)
}

async fn generate_influencer(
    state: &AppState,
    req: InfluencerRequest,
) -> Result<GenerateResponse, ApiError> {
    let age_text = scalar_text(req.age.as_ref());
    let (Some(gender), Some(age), Some(ethnicity), Some(hair_color), Some(eye_color)) = (
        present(&req.gender),
        age_text.as_deref().map(str::trim),
        present(&req.ethnicity),
        present(&req.hair_color),
        present(&req.eye_color),
    ) else {
        return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
    };
    let raw_age = req.age.clone().unwrap_or_default();

    let prompt = influencer::profile_request(&influencer::InfluencerInput {
        gender,
        age,
        ethnicity,
        hair_color,
        eye_color,
        location: present(&req.location),
        extra_details: present(&req.extra_details),
        has_reference_photo: present(&req.reference_photo).is_some(),
    });
    let reply = ask_model(state, ModelRequest::text(prompt, "influencer_profile")).await?;

    match clean_json_reply(&reply) {
        Some(profile) => Ok(GenerateResponse::prompt(profile)),
        None => {
            warn!("Gemini generated invalid JSON for influencer; using fallback profile");
            Ok(GenerateResponse::prompt(fallback_profile(
                gender, &raw_age, ethnicity, hair_color,
            )))
        }
    }
}

async fn generate_script(
    state: &AppState,
    req: ScriptRequest,
) -> Result<GenerateResponse, ApiError> {
    let (Some(product_name), Some(main_benefit)) =
        (present(&req.product_name), present(&req.main_benefit))
    else {
        return Err(ApiError::validation(SCRIPT_FIELDS_MESSAGE));
    };

    let prompt = script::script_request(&script::ScriptInput {
        product_name,
        main_benefit,
        tone: Tone::parse(present(&req.tone)),
    });
    let reply = ask_model(state, ModelRequest::text(prompt, "script")).await?;
    let options = split_options(&reply);

    Ok(GenerateResponse {
        prompt: reply,
        options,
    })
}

async fn generate_fashion(
    state: &AppState,
    req: VisualRequest,
) -> Result<GenerateResponse, ApiError> {
    let Some(raw_image) = present(&req.image) else {
        return Err(ApiError::validation(FASHION_IMAGE_MESSAGE));
    };
    let image = decode_image(raw_image)?;

    let clothing = ask_model(
        state,
        ModelRequest::with_images(fashion::OUTFIT_VISION_PROMPT, "fashion_vision", vec![image]),
    )
    .await?;
    let influencer = influencer_description(&req.influencer_json, TabType::Fashion, |profile| {
        profile.fashion_description()
    });

    Ok(GenerateResponse::prompt(fashion::final_prompt(
        &fashion::FashionInput {
            clothing_description: &clothing,
            influencer: influencer.as_deref(),
            media_type: MediaType::parse(present(&req.media_type)),
            custom_script: present(&req.custom_script),
            tone: Tone::parse(present(&req.tone)),
        },
    )))
}

async fn generate_pov(state: &AppState, req: VisualRequest) -> Result<GenerateResponse, ApiError> {
    let Some(raw_image) = present(&req.image) else {
        return Err(ApiError::validation(POV_IMAGE_MESSAGE));
    };
    let image = decode_image(raw_image)?;

    let product = ask_model(
        state,
        ModelRequest::with_images(pov::PRODUCT_VISION_PROMPT, "pov_vision", vec![image]),
    )
    .await?;

    Ok(GenerateResponse::prompt(pov::final_prompt(&pov::PovInput {
        product_description: &product,
        media_type: MediaType::parse(present(&req.media_type)),
        custom_script: present(&req.custom_script),
        tone: Tone::parse(present(&req.tone)),
    })))
}

async fn generate_showcase(
    state: &AppState,
    req: VisualRequest,
) -> Result<GenerateResponse, ApiError> {
    let Some(raw_image) = present(&req.product_image) else {
        return Err(ApiError::validation(SHOWCASE_IMAGE_MESSAGE));
    };
    let image = decode_image(raw_image)?;

    let product = ask_model(
        state,
        ModelRequest::with_images(
            showcase::PRODUCT_VISION_PROMPT,
            "showcase_vision",
            vec![image],
        ),
    )
    .await?;
    let influencer = influencer_description(&req.influencer_json, TabType::Showcase, |profile| {
        profile.showcase_description()
    });

    Ok(GenerateResponse::prompt(showcase::final_prompt(
        &showcase::ShowcaseInput {
            product_description: &product,
            influencer: influencer.as_deref(),
            media_type: MediaType::parse(present(&req.media_type)),
            custom_script: present(&req.custom_script),
            tone: Tone::parse(present(&req.tone)),
        },
    )))
}

async fn generate_scenario(
    state: &AppState,
    req: ScenarioRequest,
) -> Result<GenerateResponse, ApiError> {
    let (Some(environment_type), Some(visual_style), Some(lighting)) = (
        present(&req.environment_type),
        present(&req.visual_style),
        present(&req.lighting),
    ) else {
        return Err(ApiError::validation(REQUIRED_FIELDS_MESSAGE));
    };

    let prompt = scenario::scenario_request(&scenario::ScenarioInput {
        environment_type,
        visual_style,
        lighting,
        details: present(&req.details),
    });
    let reply = ask_model(state, ModelRequest::text(prompt, "scenario")).await?;
    Ok(GenerateResponse::prompt(reply))
}

async fn generate_thumbnail(
    state: &AppState,
    req: ThumbnailRequest,
) -> Result<GenerateResponse, ApiError> {
    let (Some(expression), Some(thumbnail_text)) =
        (present(&req.expression), present(&req.thumbnail_text))
    else {
        return Err(ApiError::validation(THUMBNAIL_FIELDS_MESSAGE));
    };

    let influencer = influencer_description(&req.influencer_json, TabType::Thumbnail, |profile| {
        Ok(profile.thumbnail_description())
    });
    let images = match present(&req.reference_image) {
        Some(raw) => vec![decode_image(raw)?],
        None => Vec::new(),
    };

    let prompt = thumbnail::thumbnail_request(&thumbnail::ThumbnailInput {
        expression,
        content_type: present(&req.content_type),
        thumbnail_text,
        influencer: influencer.as_deref(),
        has_reference_image: !images.is_empty(),
    });
    let reply = ask_model(state, ModelRequest::with_images(prompt, "thumbnail", images)).await?;
    Ok(GenerateResponse::prompt(reply))
}

async fn generate_pets(state: &AppState, req: PetsRequest) -> Result<GenerateResponse, ApiError> {
    let (Some(pet_type), Some(breed)) = (present(&req.pet_type), present(&req.breed)) else {
        return Err(ApiError::validation(PETS_FIELDS_MESSAGE));
    };

    let images = match present(&req.pet_photo) {
        Some(raw) => vec![decode_image(raw)?],
        None => Vec::new(),
    };

    let prompt = pets::pets_request(&pets::PetsInput {
        pet_type,
        breed,
        action: present(&req.action),
        scenario: present(&req.scenario),
        personality: present(&req.personality),
        details: present(&req.details),
        has_pet_photo: !images.is_empty(),
    });
    let reply = ask_model(state, ModelRequest::with_images(prompt, "pets", images)).await?;
    Ok(GenerateResponse::prompt(reply))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;

    use super::*;
    use crate::handlers::testing::{
        post_json, scripted_state, send, unconfigured_state, PNG_DATA_URL,
    };

    const PROFILE_JSON: &str = r#"{"subject":{"gender":"Female","age":27,"ethnicity":"Japanese",
        "hair":{"color":"Platinum Blonde","style":"bob"},"eyes":{"color":"Brown"},
        "body_type":"slim"}}"#;

    const BROKEN_IMAGE: &str = "data:image/png;base64,%%%";

    #[test]
    fn tab_names_round_trip() {
        for name in [
            "influencer",
            "script",
            "fashion",
            "pov",
            "showcase",
            "scenario",
            "thumbnail",
            "pets",
        ] {
            assert_eq!(TabType::parse(name).unwrap().as_str(), name);
        }
        assert!(TabType::parse("Influencer").is_none());
    }

    #[tokio::test]
    async fn each_tab_rejects_missing_required_fields() {
        let cases = [
            (
                json!({
                    "tabType": "influencer",
                    "gender": "F",
                    "age": 20,
                    "ethnicity": "X",
                    "hairColor": "Y"
                }),
                REQUIRED_FIELDS_MESSAGE,
            ),
            (
                json!({"tabType": "script", "productName": "Glow"}),
                SCRIPT_FIELDS_MESSAGE,
            ),
            (
                json!({"tabType": "fashion", "mediaType": "photo"}),
                FASHION_IMAGE_MESSAGE,
            ),
            (json!({"tabType": "pov", "image": ""}), POV_IMAGE_MESSAGE),
            (
                json!({"tabType": "showcase", "image": PNG_DATA_URL}),
                SHOWCASE_IMAGE_MESSAGE,
            ),
            (
                json!({
                    "tabType": "scenario",
                    "environmentType": "Loft",
                    "visualStyle": "Boho"
                }),
                REQUIRED_FIELDS_MESSAGE,
            ),
            (
                json!({
                    "tabType": "thumbnail",
                    "expression": "shocked",
                    "thumbnailText": "   "
                }),
                THUMBNAIL_FIELDS_MESSAGE,
            ),
            (
                json!({"tabType": "pets", "petType": "Gato", "breed": null}),
                PETS_FIELDS_MESSAGE,
            ),
        ];

        for (body, message) in cases {
            let (state, model) = scripted_state(vec![]);
            let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(reply["error"], message, "body: {body}");
            assert!(model.calls().is_empty(), "model called for {body}");
        }
    }

    #[tokio::test]
    async fn unknown_tab_is_rejected() {
        let (state, _) = scripted_state(vec![]);
        let body = json!({"tabType": "podcast"});
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["error"], "Tipo de tab inválido");

        let body = json!({"productName": "x"});
        let (status, _) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_api_key_is_a_server_error() {
        let (state, _) = unconfigured_state();
        let body = json!({"tabType": "script", "productName": "a", "mainBenefit": "b"});
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply["error"], "Chave API do Gemini não configurada");
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let (state, _) = scripted_state(vec![]);
        let request = Request::post("/api/generate")
            .header("content-type", "application/json")
            .body(Body::from("{tabType:"))
            .unwrap();
        let (status, reply) = send(&state, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["error"], "Corpo da requisição inválido");
    }

    #[tokio::test]
    async fn influencer_returns_model_json_without_fences() {
        let (state, model) = scripted_state(vec![Ok(
            "```json\n{\"subject\":{\"gender\":\"Female\"}}\n```",
        )]);
        let body = json!({
            "tabType": "influencer",
            "gender": "Feminino",
            "age": 24,
            "ethnicity": "Asiática",
            "hairColor": "Loira",
            "eyeColor": "Castanhos",
            "location": "praia",
            "influencerData": {"ignored": true}
        });
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply["prompt"], "{\"subject\":{\"gender\":\"Female\"}}");
        assert!(reply.get("options").is_none());

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].text.contains("- Age: 24\n"));
        assert!(calls[0].text.contains("- Location/Setting: praia"));
        assert!(calls[0].images.is_empty());
    }

    #[tokio::test]
    async fn influencer_falls_back_when_reply_is_not_json() {
        let (state, _) = scripted_state(vec![Ok("Claro! Aqui está o perfil: {gender: F")]);
        let body = json!({
            "tabType": "influencer",
            "gender": "Feminino",
            "age": "24",
            "ethnicity": "Asiática",
            "hairColor": "Loira",
            "eyeColor": "Castanhos"
        });
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        let profile: Value = serde_json::from_str(reply["prompt"].as_str().unwrap()).unwrap();
        let expected = json!({
            "subject": {
                "gender": "Feminino",
                "age": "24",
                "ethnicity": "Asiática",
                "hair": {"color": "Loira"}
            }
        });
        assert_eq!(profile, expected);
    }

    #[tokio::test]
    async fn fallback_profile_echoes_numeric_age() {
        let (state, model) = scripted_state(vec![Ok("not json at all")]);
        let body = json!({
            "tabType": "influencer",
            "gender": "Feminino",
            "age": 24,
            "ethnicity": "Asiática",
            "hairColor": "Loira",
            "eyeColor": "Castanhos"
        });
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        let profile: Value = serde_json::from_str(reply["prompt"].as_str().unwrap()).unwrap();
        assert_eq!(profile["subject"]["age"], json!(24));
        assert!(model.calls()[0].text.contains("- Age: 24\n"));
    }

    #[tokio::test]
    async fn upstream_failure_surfaces_message() {
        let (state, _) = scripted_state(vec![Err("Gemini request failed with status 429: quota")]);
        let body = json!({
            "tabType": "scenario",
            "environmentType": "Loft",
            "visualStyle": "Boho",
            "lighting": "Neon"
        });
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply["error"], "Gemini request failed with status 429: quota");
    }

    #[tokio::test]
    async fn script_reply_is_split_into_options() {
        let (state, model) = scripted_state(vec![Ok("Opção 1\n---\nOpção 2\n---\nOpção 3")]);
        let body = json!({
            "tabType": "script",
            "productName": "Glow",
            "mainBenefit": "brilho",
            "tone": "asmr"
        });
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply["prompt"], "Opção 1\n---\nOpção 2\n---\nOpção 3");
        assert_eq!(reply["options"], json!(["Opção 1", "Opção 2", "Opção 3"]));
        assert!(model.calls()[0].text.contains("- Product: \"Glow\""));
        assert!(model.calls()[0].text.contains("🌿 Vibe"));
    }

    #[tokio::test]
    async fn fashion_captions_outfit_then_renders_template() {
        let (state, model) = scripted_state(vec![Ok("Black leather trench coat")]);
        let body = json!({
            "tabType": "fashion",
            "image": PNG_DATA_URL,
            "mediaType": "photo",
            "influencerJSON": PROFILE_JSON,
            "tone": "urgent"
        });
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        let prompt = reply["prompt"].as_str().unwrap();
        assert!(prompt.contains("wearing:\nBlack leather trench coat\n"));
        assert!(prompt.contains(
            "(Female, 27y, Japanese, Platinum Blonde bob, Brown eyes, slim body)."
        ));
        assert!(prompt.contains("- Lighting: Contrast heavy, neon accents, flashing effect."));

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].text, fashion::OUTFIT_VISION_PROMPT);
        assert_eq!(calls[0].images.len(), 1);
        assert_eq!(calls[0].images[0].mime_type, "image/png");
    }

    #[tokio::test]
    async fn invalid_influencer_json_is_ignored() {
        let (state, _) = scripted_state(vec![Ok("Red dress")]);
        let body = json!({
            "tabType": "fashion",
            "image": PNG_DATA_URL,
            "mediaType": "video",
            "influencerJSON": "{not json"
        });
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(reply["prompt"]
            .as_str()
            .unwrap()
            .contains("**CHARACTER:**\nA stylish fashion influencer."));
    }

    #[tokio::test]
    async fn undecodable_image_is_rejected_before_model_call() {
        let (state, model) = scripted_state(vec![]);
        let body = json!({"tabType": "pov", "image": BROKEN_IMAGE});
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["error"], "Imagem inválida");
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn undecodable_optional_images_are_rejected_before_model_call() {
        let cases = [
            json!({
                "tabType": "thumbnail",
                "expression": "shocked",
                "thumbnailText": "É GOLPE?",
                "referenceImage": BROKEN_IMAGE
            }),
            json!({
                "tabType": "pets",
                "petType": "Gato",
                "breed": "Siamês",
                "petPhoto": BROKEN_IMAGE
            }),
        ];

        for body in cases {
            let (state, model) = scripted_state(vec![Ok("unused")]);
            let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(reply["error"], "Imagem inválida", "body: {body}");
            assert!(model.calls().is_empty(), "model called for {body}");
        }
    }

    #[tokio::test]
    async fn pov_video_uses_product_caption() {
        let (state, _) = scripted_state(vec![Ok("Blue tube, 'AquaGel'")]);
        let body = json!({"tabType": "pov", "image": PNG_DATA_URL, "customScript": "Amei!"});
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        let prompt = reply["prompt"].as_str().unwrap();
        assert!(prompt.starts_with("**VIDEO PROMPT (POV UNBOXING - FLOW/KLING)**"));
        assert!(prompt.contains("A realistic hand holding: Blue tube, 'AquaGel'."));
        assert!(prompt.contains("\"Amei!\""));
    }

    #[tokio::test]
    async fn showcase_reads_product_image_field() {
        let (state, model) = scripted_state(vec![Ok("Pink jar")]);
        let body = json!({
            "tabType": "showcase",
            "productImage": PNG_DATA_URL,
            "mediaType": "photo",
            "influencerJSON": PROFILE_JSON
        });
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        let prompt = reply["prompt"].as_str().unwrap();
        assert!(prompt.contains(
            "Specific Influencer: (Female, 27y, Japanese, Platinum Blonde, Brown eyes)"
        ));
        assert!(prompt.contains("Holding product: Pink jar."));
        assert_eq!(model.calls()[0].text, showcase::PRODUCT_VISION_PROMPT);
    }

    #[tokio::test]
    async fn thumbnail_sends_reference_image_with_prompt() {
        let (state, model) = scripted_state(vec![Ok("close-up, shocked face")]);
        let body = json!({
            "tabType": "thumbnail",
            "expression": "shocked",
            "thumbnailText": "É GOLPE?",
            "contentType": "Review",
            "referenceImage": PNG_DATA_URL,
            "influencerJSON": PROFILE_JSON
        });
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply["prompt"], "close-up, shocked face");

        let calls = model.calls();
        assert_eq!(calls[0].images.len(), 1);
        assert!(calls[0].text.starts_with("Analyze this reference image"));
        assert!(calls[0].text.contains(
            "Specific person: Female, 27 years old, Japanese, Platinum Blonde hair, Brown eyes."
        ));
    }

    #[tokio::test]
    async fn pets_without_photo_uses_creator_template() {
        let (state, model) = scripted_state(vec![Ok("corgi surfing")]);
        let body = json!({
            "tabType": "pets",
            "petType": "Cachorro",
            "breed": "Corgi",
            "action": "surfando",
            "scenario": "praia",
            "personality": "derpy"
        });
        let (status, reply) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply["prompt"], "corgi surfing");

        let calls = model.calls();
        assert!(calls[0].images.is_empty());
        assert!(calls[0].text.starts_with("ACT AS A VIRAL PET CONTENT CREATOR."));
        assert!(calls[0].text.contains("- Camera: Weird angle, tongue out"));
    }

    #[tokio::test]
    async fn pets_personality_is_passed_through_verbatim() {
        let (state, model) = scripted_state(vec![Ok("ok")]);
        let body = json!({
            "tabType": "pets",
            "petType": "Gato",
            "breed": "Siamês",
            "personality": "brincalhão"
        });
        let (status, _) = send(&state, post_json("/api/generate", &body)).await;
        assert_eq!(status, StatusCode::OK);

        let text = &model.calls()[0].text;
        assert!(text.contains("- Personality/Vibe: brincalhão\n"));
        assert!(text.contains("- Camera: Slightly from above (cute angle)"));
    }
}
