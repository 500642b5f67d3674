#[derive(Debug, Clone, Copy)]
pub struct ScenarioInput<'a> {
    pub environment_type: &'a str,
    pub visual_style: &'a str,
    pub lighting: &'a str,
    pub details: Option<&'a str>,
}

/// Meta-prompt for an environment-only scene with no people in it.
pub fn scenario_request(input: &ScenarioInput<'_>) -> String {
    format!(
        r#"ACT AS A PROFESSIONAL ENVIRONMENT/SCENE DESIGNER FOR AI IMAGE GENERATION.

**OBJECTIVE:** Create a highly detailed prompt for generating ONLY an environment/background scene with NO people.

**INPUT DATA:**
- Environment Type: {environment}
- Visual Style: {style}
- Lighting: {lighting}
- Extra Details: {details}

**TASK:**
Generate a comprehensive prompt optimized for Flux/Midjourney/Stable Diffusion.

**REQUIRED ELEMENTS:**
1. **Scene Description:** Detailed view of the {environment}. Be specific about architecture, furniture, objects.
2. **Visual Style:** Apply {style} aesthetic throughout (colors, mood, composition).
3. **Lighting:** {lighting} - describe how light interacts with surfaces, creates shadows, highlights textures.
4. **Textures & Materials:** Specify materials (wood grain, metal finish, fabric weave, glass reflections).
5. **Color Palette:** Exact color descriptions (avoid generic "blue", use "Deep Navy" or "Powder Blue").
6. **Depth & Composition:** Foreground, midground, background elements to create depth.
7. **Atmosphere:** Mood, feeling, ambiance of the space.

**CRITICAL RULES:**
- NO people, NO human figures, NO body parts visible.
- Focus on the SPACE itself as the subject.
- High level of photorealistic detail.
- Mention camera specs: (e.g., "Shot on Sony A7R IV, 24mm wide angle, f/2.8").

**OUTPUT FORMAT:**
Provide a single, comma-separated prompt ready for image generation. No explanations, just the prompt."#,
        environment = input.environment_type,
        style = input.visual_style,
        lighting = input.lighting,
        details = input.details.unwrap_or("None"),
    )
}
