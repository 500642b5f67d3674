use super::{audio_script, MediaType, Tone, BASE_NEGATIVE_PROMPT};

pub const OUTFIT_VISION_PROMPT: &str = r#"Analyze this outfit for a Generative AI prompt. Focus on VISUAL FIDELITY.
Describe:
1. The Garment: Exact cut, length, neckline, sleeve style.
2. Fabric Physics: Weight (heavy/light), texture (satin/knit/denim), how it reflects light.
3. Colors/Patterns: Specific hex-code vibes (e.g. "Pastel Sage Green" instead of "Green").
4. Fit: Oversized, bodycon, tailored?

Output ONLY the description. No intro."#;

struct FashionVisuals {
    lighting: &'static str,
    camera: &'static str,
    vibe: &'static str,
    script_style: &'static str,
}

fn visuals(tone: Tone) -> FashionVisuals {
    match tone {
        Tone::Energetic => FashionVisuals {
            lighting: "High-key, bright sunlight, vibrant saturation",
            camera: "Dynamic movement, slight handheld shake for realism, fast cuts",
            vibe: "Trendy, Pop, TikTok Viral",
            script_style: "Excited and fast",
        },
        Tone::Professional => FashionVisuals {
            lighting: "Soft studio 3-point lighting, clean white balance",
            camera: "Stable tripod shot, slow cinematic dolly push",
            vibe: "Luxury, E-commerce, Clean Girl Aesthetic",
            script_style: "Educational and calm",
        },
        Tone::Humorous => FashionVisuals {
            lighting: "Natural everyday lighting, slightly unpolished",
            camera: "Front camera selfie angle (fisheye distortion effect), handheld",
            vibe: "Relatable, Casual, Meme-ready",
            script_style: "Funny and casual",
        },
        Tone::Emotional => FashionVisuals {
            lighting: "Golden hour (warm sunset), lens flares, soft contrast",
            camera: "Slow motion (60fps), tight close-ups on details",
            vibe: "Cinematic, Dreamy, Inspiring",
            script_style: "Soft and storytelling",
        },
        Tone::Urgent => FashionVisuals {
            lighting: "Contrast heavy, neon accents, flashing effect",
            camera: "Snap zooms, erratic movement",
            vibe: "Sale, FOMO, Breaking News",
            script_style: "Fast and loud",
        },
        Tone::Asmr => FashionVisuals {
            lighting: "Dim, cozy warm light (2700K), soft shadows",
            camera: "Macro lens, extremely stable, very slow movement",
            vibe: "Cozy, Sensory, Texture-focused",
            script_style: "Whispered",
        },
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FashionInput<'a> {
    pub clothing_description: &'a str,
    /// Rendered influencer description, when a usable profile was supplied.
    pub influencer: Option<&'a str>,
    pub media_type: MediaType,
    pub custom_script: Option<&'a str>,
    pub tone: Tone,
}

pub fn final_prompt(input: &FashionInput<'_>) -> String {
    let visuals = visuals(input.tone);
    let clothing = input.clothing_description.trim();

    match input.media_type {
        MediaType::Photo => format!(
            r#"**PROMPT FOR FLUX/MIDJOURNEY V6 (REALISM MODE)**

**SUBJECT:**
Beautiful influencer {influencer} wearing:
{clothing}

**ENVIRONMENT & LIGHTING:**
- Location: Modern luxury boutique fitting room.
- Lighting: {lighting}.
- Atmosphere: {vibe}.

**PHOTOGRAPHY SPECS:**
- Camera: Sony A7R V, 35mm f/1.4 GM Lens.
- Quality: 8k, Raw Photo, Hyper-detailed skin texture (pores, vellus hair), Ray-traced reflections.
- Framing: Full body mirror selfie (Mirror reflection visible).
- Style: Influencer Instagram Story aesthetic."#,
            influencer = input.influencer.unwrap_or_default(),
            lighting = visuals.lighting,
            vibe = visuals.vibe,
        ),
        MediaType::Video => {
            let character = match input.influencer {
                Some(description) => format!("STRICT FACE CONSISTENCY: {description}"),
                None => "A stylish fashion influencer.".to_string(),
            };
            let audio = audio_script(
                input.custom_script,
                format!(
                    "(Create a {} script in PT-BR about this look)",
                    visuals.script_style
                ),
            );
            format!(
                r#"**VIDEO PROMPT (KLING/LUMA/RUNWAY/FLOW)**

**KEYFRAMES:**
1. Start: Influencer stands in front of mirror, phone covering face slightly.
2. Action: She lowers phone to chest level, does the "fit check" spin (30 degrees).
3. Physics: {clothing} moves naturally. Pay attention to fabric weight.

**CHARACTER:**
{character}

**CINEMATOGRAPHY:**
- Camera Movement: {camera}.
- Lighting: {lighting}.
- Color Grade: {vibe}.

**AUDIO SCRIPT (PT-BR):**
{audio}

**NEGATIVE PROMPT:**
{negative}."#,
                camera = visuals.camera,
                lighting = visuals.lighting,
                vibe = visuals.vibe,
                negative = BASE_NEGATIVE_PROMPT,
            )
        }
    }
}
