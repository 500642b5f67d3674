#[derive(Debug, Clone, Copy)]
pub struct InfluencerInput<'a> {
    pub gender: &'a str,
    pub age: &'a str,
    pub ethnicity: &'a str,
    pub hair_color: &'a str,
    pub eye_color: &'a str,
    pub location: Option<&'a str>,
    pub extra_details: Option<&'a str>,
    pub has_reference_photo: bool,
}

/// Meta-prompt asking the model for a Flux/Midjourney-ready JSON profile.
pub fn profile_request(input: &InfluencerInput<'_>) -> String {
    let location = input.location.unwrap_or("random");
    let extra_details = input.extra_details.unwrap_or("None");
    let reference = if input.has_reference_photo { "Yes" } else { "No" };

    format!(
        r#"ACT AS A WORLD-CLASS AI PROMPT ENGINEER.
Create a high-fidelity JSON profile for an influencer.

**INPUT DATA:**
- Gender: {gender}
- Age: {age}
- Ethnicity: {ethnicity}
- Hair: {hair} (CRITICAL: Enforce this strictly. If "Loira" or "Blonde" with Asian ethnicity, FORCE "Dyed Blonde" or "Platinum Blonde")
- Eyes: {eyes}
- Location/Setting: {location} (If "random", choose an appropriate location. Otherwise translate to English, e.g., "cafe" -> "Coffee Shop Interior", "praia" -> "Beach", "casa" -> "Cozy Home Interior")
- Extra Details: {extra_details}
- Reference Photo Provided: {reference}

**TASK:**
Generate a JSON object compatible with Flux/Midjourney logic.
Translate all Portuguese inputs to English specifically for image generation (e.g., "Morena" -> "Brown Hair", "Loira" -> "Blonde").

**JSON STRUCTURE:**
{{
    "image_type": "portrait",
    "style": "high-end lifestyle photography",
    "realism_level": "hyper realistic 8k",
    "subject": {{
        "gender": "...",
        "age": "...",
        "ethnicity": "...",
        "features_description": "...",
        "hair": {{
            "color": "...",
            "style": "stylish modern cut",
            "physics": "natural flow",
            "texture": "individual strands visible"
        }},
        "eyes": {{
            "color": "...",
            "style": "sharp focus, reflections of ring light"
        }},
        "skin_texture": {{
            "style": "raw photography",
            "details": ["visible pores", "micro-imperfections", "subsurface scattering"]
        }},
        "face": {{
            "proportions": "golden ratio",
            "expression": "approachable soft confidence"
        }},
        "body_type": "..."
    }},
    "environment": {{
        "background": "... (Use the Location/Setting input to determine the background scene. Be specific and descriptive)",
        "lighting": {{
            "type": "Rembrandt lighting",
            "style": "cinematic softbox (adjust based on location - e.g., natural sunlight for beach, warm interior lights for cafe)"
        }}
    }},
    "camera": {{
        "sensor": "Sony A7R IV",
        "lens": "85mm G Master",
        "quality": "raw photo"
    }}
}}
Add makeup details inside "subject" for a female subject, grooming details for a male subject.

**IMPORTANT:**
- JSON ONLY. No markdown, no intro.
- Enforce the HAIR COLOR provided in the input, even if it contradicts the ethnicity stereotype (e.g., Asian + Blonde)."#,
        gender = input.gender,
        age = input.age,
        ethnicity = input.ethnicity,
        hair = input.hair_color,
        eyes = input.eye_color,
    )
}
