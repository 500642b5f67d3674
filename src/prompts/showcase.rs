use super::{audio_script, MediaType, Tone, BASE_NEGATIVE_PROMPT};

pub const PRODUCT_VISION_PROMPT: &str = r#"Analyze this product image.
Output a comma-separated description focusing on:
1. PRODUCT TYPE (Bottle, Box, Jar, Device)
2. BRAND COLORS (Exact hex vibes)
3. MATERIAL (Matte plastic, clear glass, metallic)
4. LABEL TEXT (What is written on it?)"#;

struct ShowcaseVisuals {
    mood: &'static str,
    expression: &'static str,
    audio: &'static str,
}

fn visuals(tone: Tone) -> ShowcaseVisuals {
    let (mood, expression, audio) = match tone {
        Tone::Energetic => (
            "Vibrant, Pop Art",
            "Wide smile, surprised eyes (Pog face)",
            "Shocked",
        ),
        Tone::Professional => ("Clean, Clinical, White", "Confident, soft smile", "Expert"),
        Tone::Humorous => ("Playful, Colorful", "Winking or making a funny face", "Joking"),
        Tone::Emotional => (
            "Warm, Golden, Cozy",
            "Soft smile, looking lovingly at product",
            "Loving",
        ),
        Tone::Urgent => ("Intense, High Contrast", "Serious, pointing urgently", "Warning"),
        Tone::Asmr => ("Dim, Bedroom, RGB", "Relaxed, closed eyes smell test", "Soft"),
    };
    ShowcaseVisuals {
        mood,
        expression,
        audio,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ShowcaseInput<'a> {
    pub product_description: &'a str,
    pub influencer: Option<&'a str>,
    pub media_type: MediaType,
    pub custom_script: Option<&'a str>,
    pub tone: Tone,
}

pub fn final_prompt(input: &ShowcaseInput<'_>) -> String {
    let visuals = visuals(input.tone);
    let product = input.product_description.trim();

    match input.media_type {
        MediaType::Photo => {
            let subject = match input.influencer {
                Some(description) => format!("Specific Influencer: {description}"),
                None => "A stunning model".to_string(),
            };
            format!(
                r#"**BEAUTY/LIFESTYLE PORTRAIT**

**SUBJECT:**
{subject}
Holding product: {product}.

**POSE:**
- Product Placement: Held next to face/cheek (Beauty Youtuber Thumbnail style).
- Label Visibility: 100% visible to camera.
- Expression: {expression}.

**AESTHETIC:**
- Lighting: Ring Light + Softbox (E-commerce standard).
- Mood: {mood}.
- Camera: Canon R5, 85mm f/1.2 Portrait Lens.
- Quality: Magazine retouching, sharp eyes, readable product label."#,
                expression = visuals.expression,
                mood = visuals.mood,
            )
        }
        MediaType::Video => {
            let character = input.influencer.unwrap_or("Influencer");
            let audio = audio_script(
                input.custom_script,
                format!("(Write a {} reaction in PT-BR)", visuals.audio),
            );
            format!(
                r#"**VIDEO PROMPT (TESTIMONIAL - FLOW/KLING)**

**CHARACTER:**
{character} reviewing a product.

**ACTION:**
1. Influencer defines {expression}.
2. Holds {product} up to the camera lens (Macro shot).
3. Pulls back and points to the product.

**ATMOSPHERE:**
- Mood: {mood}.
- Background: Aesthetic bedroom or studio.

**AUDIO (PT-BR):**
{audio}

**TECH SPECS:**
- 4k Resolution.
- No hand clipping.
- Accurate product scale.

**NEGATIVE PROMPT:**
{negative}, distorted face."#,
                expression = visuals.expression,
                mood = visuals.mood,
                negative = BASE_NEGATIVE_PROMPT,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(media_type: MediaType) -> ShowcaseInput<'static> {
        ShowcaseInput {
            product_description: "white matte jar, pink lid, 'Hydra Boost'",
            influencer: None,
            media_type,
            custom_script: None,
            tone: Tone::Emotional,
        }
    }

    #[test]
    fn photo_prompt_uses_generic_model_without_profile() {
        let prompt = final_prompt(&input(MediaType::Photo));
        assert!(prompt.contains("**SUBJECT:**\nA stunning model\nHolding product: "));
        assert!(prompt.contains("Holding product: white matte jar, pink lid, 'Hydra Boost'."));
        assert!(prompt.contains("- Expression: Soft smile, looking lovingly at product."));
        assert!(prompt.contains("- Mood: Warm, Golden, Cozy."));
    }

    #[test]
    fn photo_prompt_names_specific_influencer() {
        let prompt = final_prompt(&ShowcaseInput {
            influencer: Some("(Female, 31y, Brazilian, Brown, Green eyes)"),
            ..input(MediaType::Photo)
        });
        assert!(
            prompt.contains("Specific Influencer: (Female, 31y, Brazilian, Brown, Green eyes)\n")
        );
    }

    #[test]
    fn video_prompt_is_testimonial() {
        let prompt = final_prompt(&input(MediaType::Video));
        assert!(prompt.contains("**CHARACTER:**\nInfluencer reviewing a product."));
        assert!(prompt
            .contains("2. Holds white matte jar, pink lid, 'Hydra Boost' up to the camera lens"));
        assert!(prompt.contains("(Write a Loving reaction in PT-BR)"));
        assert!(prompt.ends_with("bad physics, distorted face."));
    }
}
