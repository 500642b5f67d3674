use super::{audio_script, MediaType, Tone, BASE_NEGATIVE_PROMPT};

pub const PRODUCT_VISION_PROMPT: &str = r#"Describe this product for a video generation prompt.
Focus on:
1. OBJECT PERMANENCE: Exact text on labels, logo placement, specific colors.
2. MATERIAL: Glass reflection, plastic matte, paper texture?
3. SHAPE: Bottle, Box, Tube?

Write a dense, comma-separated description."#;

struct PovVisuals {
    lighting: &'static str,
    movement: &'static str,
    audio_type: &'static str,
}

fn visuals(tone: Tone) -> PovVisuals {
    let (lighting, movement, audio_type) = match tone {
        Tone::Energetic => ("Daylight, bright window", "Quick unboxing, fast hands", "Excited"),
        Tone::Professional => ("Studio softbox", "Precise, slow handling", "Educational"),
        Tone::Humorous => ("Home living room", "Casual, maybe a bit clumsy/real", "Funny"),
        Tone::Emotional => ("Warm lamp, evening", "Gentle caress of packaging", "Grateful"),
        Tone::Urgent => ("Bright, high contrast", "Rushed, bringing close to camera", "Urgent"),
        Tone::Asmr => ("Dark room, RGB accent", "Tapping, scratching, slow rotation", "Whisper"),
    };
    PovVisuals {
        lighting,
        movement,
        audio_type,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PovInput<'a> {
    pub product_description: &'a str,
    pub media_type: MediaType,
    pub custom_script: Option<&'a str>,
    pub tone: Tone,
}

pub fn final_prompt(input: &PovInput<'_>) -> String {
    let visuals = visuals(input.tone);
    let product = input.product_description.trim();

    match input.media_type {
        MediaType::Photo => format!(
            r#"**MACRO POV PHOTOGRAPHY**

**SUBJECT:**
First-person view (POV) of a hand holding: {product}.

**FIDELITY CHECK:**
- The product MUST match the description 100%. No hallucinated text.
- Label text must be legible and sharp.

**HAND DETAILS:**
- Skin texture: Hyper-realistic, visible knuckles and veins.
- Nails: Manicured, natural look.

**SCENE:**
- Lighting: {lighting}.
- Background: High quality gaussian blur (Bokeh). Focus solely on product.
- Lens: 105mm Macro f/2.8."#,
            lighting = visuals.lighting,
        ),
        MediaType::Video => {
            let audio = audio_script(
                input.custom_script,
                format!("(Write a {} mini-review in PT-BR)", visuals.audio_type),
            );
            format!(
                r#"**VIDEO PROMPT (POV UNBOXING - FLOW/KLING)**

**SCENE:**
First-person view (POV). A realistic hand holding: {product}.

**ACTION:**
{movement}. The hand rotates the product to show the label, then tilts it to show the texture/cap.

**TECHNICAL:**
- Stabilization: Cinematic Gimbal (No shaky cam unless intended).
- Lighting: {lighting}.
- Focus: Rack focus on the product label.

**AUDIO (PT-BR):**
{audio}

**SAFETY:**
NO morphing labels. NO melting fingers. The product must remain solid rigid object.

**NEGATIVE PROMPT:**
{negative}, low resolution, blurry."#,
                movement = visuals.movement,
                lighting = visuals.lighting,
                negative = BASE_NEGATIVE_PROMPT,
            )
        }
    }
}
