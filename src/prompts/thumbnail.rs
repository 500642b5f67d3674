const DEFAULT_EXPRESSION: &str = "Expressive face";
const DEFAULT_CONTENT_TYPE: &str = "General";

pub fn expression_detail(expression: &str) -> &'static str {
    match expression.trim().to_ascii_lowercase().as_str() {
        "shocked" => {
            "Wide open mouth, raised eyebrows, eyes fully open showing whites, hands on cheeks (Home Alone pose)"
        }
        "amazed" => "Sparkling eyes, slight smile, eyebrows raised in wonder, leaning forward",
        "mindblown" => "Head tilted back, mouth open in awe, both hands on head, eyes wide",
        "determined" => "Intense eye contact, jaw clenched, eyebrows furrowed, confident posture",
        "emotional" => {
            "Glassy eyes, soft smile or slight frown, hand on heart, vulnerable expression"
        }
        "smirk" => "Half smile, one eyebrow raised, knowing look, arms crossed confidently",
        "excited" => "Huge smile, eyes sparkling, possibly jumping or energetic pose",
        "skeptical" => "One eyebrow raised, slight frown, arms crossed, judging look",
        "laughing" => "Big genuine laugh, eyes squinted, head thrown back, mouth wide open",
        "serious" => "Stern face, direct eye contact, no smile, focused intense stare",
        _ => DEFAULT_EXPRESSION,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThumbnailInput<'a> {
    pub expression: &'a str,
    pub content_type: Option<&'a str>,
    pub thumbnail_text: &'a str,
    pub influencer: Option<&'a str>,
    pub has_reference_image: bool,
}

pub fn thumbnail_request(input: &ThumbnailInput<'_>) -> String {
    let detail = expression_detail(input.expression);
    let content_type = input.content_type.unwrap_or(DEFAULT_CONTENT_TYPE);
    let text = input.thumbnail_text;

    if input.has_reference_image {
        let subject = match input.influencer {
            Some(description) => format!("- Subject: {description}"),
            None => "- Subject: Attractive content creator".to_string(),
        };
        return format!(
            r#"Analyze this reference image and create a thumbnail prompt matching this expression.

**THUMBNAIL SPECS:**
- Expression: {detail}
- Content Type: {content_type}
- Text Overlay: "{text}"
{subject}

Create a prompt for a HIGH-CTR YouTube/TikTok thumbnail following these rules:
1. EXTREME CLOSE-UP of face (face fills 70% of frame)
2. Crystal clear expression matching the reference
3. High contrast, vibrant saturation
4. Background: Blurred or simple gradient
5. Perfect lighting on face (no harsh shadows)
6. Text space reserved on thirds
7. 16:9 aspect ratio, 1920x1080px

Output format: Detailed prompt for thumbnail generation."#
        );
    }

    let subject = match input.influencer {
        Some(description) => format!("- Subject: {description}"),
        None => {
            "- Subject: Attractive content creator (neutral ethnicity, 25-30 years old)".to_string()
        }
    };
    let expression = input.expression;
    format!(
        r#"ACT AS A VIRAL THUMBNAIL DESIGNER.

**OBJECTIVE:** Create a prompt for a HIGH-CTR YouTube/TikTok thumbnail.

**SPECS:**
- Expression: {detail}
- Content Type: {content_type}
- Text Overlay: "{text}"
{subject}

**THUMBNAIL REQUIREMENTS:**
1. **Framing:** EXTREME close-up portrait. Face fills 70% of the frame. Direct eye contact with camera.
2. **Expression:** {detail}. Make it EXAGGERATED and CLEAR from a distance.
3. **Lighting:** Ring light or 3-point studio lighting. Face must be brightly lit, no harsh shadows.
4. **Colors:** High saturation, high contrast. Pop off the screen.
5. **Background:** Simple blurred background or solid gradient. Don't compete with face.
6. **Text Space:** Leave clear space on top or bottom third for text overlay: "{text}"
7. **Quality:** 16:9 aspect ratio, 1920x1080px, hyper-realistic, sharp focus on eyes.
8. **Emotion Clarity:** The {expression} expression must be instantly readable even at small size.

**NEGATIVE PROMPT:**
Low contrast, dim lighting, blurry, multiple people, cluttered background, face too small, generic expression.

**OUTPUT:**
Provide a single detailed prompt optimized for Midjourney/Flux/DALL-E 3 for thumbnail generation. Comma-separated format."#
    )
}
