const DEFAULT_ACTION: &str = "Posing naturally";
const DEFAULT_SCENARIO: &str = "Cozy home setting";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Personality {
    Cute,
    Funny,
    Elegant,
    Energetic,
    Lazy,
    Curious,
    Dramatic,
    Sassy,
    Majestic,
    Derpy,
}

struct PersonalityStyle {
    mood: &'static str,
    camera: &'static str,
    lighting: &'static str,
}

impl Personality {
    /// Unknown personalities fall back to cute.
    pub fn parse(value: Option<&str>) -> Personality {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("funny") => Personality::Funny,
            Some("elegant") => Personality::Elegant,
            Some("energetic") => Personality::Energetic,
            Some("lazy") => Personality::Lazy,
            Some("curious") => Personality::Curious,
            Some("dramatic") => Personality::Dramatic,
            Some("sassy") => Personality::Sassy,
            Some("majestic") => Personality::Majestic,
            Some("derpy") => Personality::Derpy,
            _ => Personality::Cute,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Personality::Cute => "cute",
            Personality::Funny => "funny",
            Personality::Elegant => "elegant",
            Personality::Energetic => "energetic",
            Personality::Lazy => "lazy",
            Personality::Curious => "curious",
            Personality::Dramatic => "dramatic",
            Personality::Sassy => "sassy",
            Personality::Majestic => "majestic",
            Personality::Derpy => "derpy",
        }
    }

    fn style(self) -> PersonalityStyle {
        let (mood, camera, lighting) = match self {
            Personality::Cute => (
                "Heartwarming, adorable",
                "Slightly from above (cute angle)",
                "Soft, flattering natural light",
            ),
            Personality::Funny => (
                "Comedic, meme-worthy",
                "Unexpected angle or close-up",
                "Bright, clear",
            ),
            Personality::Elegant => (
                "Sophisticated, regal",
                "Eye level, portrait style",
                "Studio lighting, dramatic",
            ),
            Personality::Energetic => (
                "Dynamic, action-packed",
                "Fast shutter, motion blur acceptable",
                "Bright, vibrant",
            ),
            Personality::Lazy => (
                "Chill, relaxed vibes",
                "Wide shot showing comfortable position",
                "Warm, cozy afternoon light",
            ),
            Personality::Curious => (
                "Inquisitive, exploratory",
                "Close-up on eyes/face",
                "Natural, clear",
            ),
            Personality::Dramatic => (
                "Over-the-top, theatrical",
                "Low angle for grandeur",
                "Cinematic, high contrast",
            ),
            Personality::Sassy => ("Attitude, sass", "Side eye angle", "Bold, confident"),
            Personality::Majestic => (
                "Epic, powerful",
                "Low angle hero shot",
                "Golden hour, backlit",
            ),
            Personality::Derpy => ("Goofy, silly", "Weird angle, tongue out", "Fun, unstaged"),
        };
        PersonalityStyle {
            mood,
            camera,
            lighting,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PetsInput<'a> {
    pub pet_type: &'a str,
    pub breed: &'a str,
    pub action: Option<&'a str>,
    pub scenario: Option<&'a str>,
    /// Shown verbatim; unknown values still pick the cute style table.
    pub personality: Option<&'a str>,
    pub details: Option<&'a str>,
    pub has_pet_photo: bool,
}

pub fn pets_request(input: &PetsInput<'_>) -> String {
    let style = Personality::parse(input.personality).style();
    let personality = input.personality.unwrap_or(Personality::Cute.name());
    let pet_type = input.pet_type;
    let breed = input.breed;
    let action = input.action.unwrap_or(DEFAULT_ACTION);
    let scenario = input.scenario.unwrap_or(DEFAULT_SCENARIO);
    let details_line = input
        .details
        .map(|details| format!("- Extra Details: {details}\n"))
        .unwrap_or_default();
    let mood = style.mood;
    let camera = style.camera;
    let lighting = style.lighting;

    if input.has_pet_photo {
        return format!(
            r#"Analyze this pet photo and create a viral TikTok/Instagram prompt.

**PET SPECS:**
- Type: {pet_type}
- Breed/Description: {breed}
- Action: {action}
- Scenario: {scenario}
- Personality: {personality} ({mood})
{details_line}
**REQUIREMENTS:**
1. Analyze the photo to capture the pet's unique features
2. {camera}
3. Lighting: {lighting}
4. Focus on cuteness/viral factors (big eyes, fluffy fur, adorable expression)
5. Natural pet behavior, realistic poses
6. High-quality photography: Sony A7III, 50mm f/1.8

**OUTPUT:** Detailed prompt for generating this pet in the specified action/scenario, matching the photo's characteristics."#
        );
    }

    format!(
        r#"ACT AS A VIRAL PET CONTENT CREATOR.

**OBJECTIVE:** Create a prompt for generating adorable, shareable pet content for TikTok/Instagram.

**PET DETAILS:**
- Type: {pet_type}
- Breed/Description: {breed}
- Action: {action}
- Scenario: {scenario}
- Personality/Vibe: {personality}
{details_line}
**PROMPT REQUIREMENTS:**

1. **Pet Description:**
   - Specific breed characteristics ({breed})
   - Adorable features (big expressive eyes, fluffy fur/feathers, cute nose/mouth)
   - Natural, healthy appearance
   - Age-appropriate look (puppy/kitten vs adult)

2. **Action/Pose:**
   - Engaged in: {action}
   - Natural pet behavior (no forced/uncomfortable poses)
   - Capture the {personality} personality

3. **Environment:**
   - Setting: {scenario}
   - Background should complement but not distract from pet
   - Appropriate props if relevant to action

4. **Photography Specs:**
   - Camera: {camera}
   - Lighting: {lighting}
   - Quality: High-resolution, sharp focus on pet's eyes
   - Mood: {mood}
   - Sensor: Pet portrait specialist camera (Sony A7 series, 50mm or 85mm lens)

5. **Viral Factors:**
   - Maximize "aww factor"
   - Relatable pet moments
   - Shareable/meme potential
   - Clear emotional connection

**NEGATIVE PROMPT:**
Deformed animals, extra limbs, unnatural anatomy, sad/sick appearance, scary, aggressive, poor lighting, blurry, low quality, watermark.

**OUTPUT:**
Single detailed prompt optimized for Flux/Midjourney/DALL-E 3. Comma-separated format."#
    )
}
