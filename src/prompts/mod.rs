pub mod fashion;
pub mod influencer;
pub mod pets;
pub mod pov;
pub mod scenario;
pub mod script;
pub mod showcase;
pub mod thumbnail;

/// Separator between alternatives in multi-option replies.
pub const OPTION_SEPARATOR: &str = "---";

pub(crate) const BASE_NEGATIVE_PROMPT: &str =
    "Morphing, melting hands, text glitches, extra fingers, cartoon, drawing, painting, bad physics";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Energetic,
    Professional,
    Humorous,
    Emotional,
    Urgent,
    Asmr,
}

impl Tone {
    /// Unknown or absent tones fall back to energetic.
    pub fn parse(value: Option<&str>) -> Tone {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("professional") => Tone::Professional,
            Some("humorous") => Tone::Humorous,
            Some("emotional") => Tone::Emotional,
            Some("urgent") => Tone::Urgent,
            Some("asmr") => Tone::Asmr,
            _ => Tone::Energetic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Photo,
    Video,
}

impl MediaType {
    /// Anything other than `photo` renders the video template.
    pub fn parse(value: Option<&str>) -> MediaType {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("photo") => MediaType::Photo,
            _ => MediaType::Video,
        }
    }
}

/// Quotes a user-supplied script verbatim, otherwise asks the downstream
/// model to write one.
pub fn audio_script(custom: Option<&str>, fallback_instruction: String) -> String {
    match custom.map(str::trim).filter(|text| !text.is_empty()) {
        Some(script) => format!("\"{script}\""),
        None => fallback_instruction,
    }
}

/// Splits a multi-option reply on [`OPTION_SEPARATOR`], dropping blank segments.
pub fn split_options(text: &str) -> Vec<String> {
    text.split(OPTION_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_defaults_to_energetic() {
        assert_eq!(Tone::parse(None), Tone::Energetic);
        assert_eq!(Tone::parse(Some("sarcastic")), Tone::Energetic);
        assert_eq!(Tone::parse(Some("ASMR")), Tone::Asmr);
        assert_eq!(Tone::parse(Some("professional")), Tone::Professional);
    }

    #[test]
    fn only_photo_selects_photo_template() {
        assert_eq!(MediaType::parse(Some("photo")), MediaType::Photo);
        assert_eq!(MediaType::parse(Some("video")), MediaType::Video);
        assert_eq!(MediaType::parse(None), MediaType::Video);
    }

    #[test]
    fn custom_script_is_quoted() {
        assert_eq!(
            audio_script(Some("Olha isso!"), "(fallback)".to_string()),
            "\"Olha isso!\""
        );
        assert_eq!(audio_script(Some("  "), "(fallback)".to_string()), "(fallback)");
        assert_eq!(audio_script(None, "(fallback)".to_string()), "(fallback)");
    }

    #[test]
    fn three_option_reply_splits_into_three_segments() {
        let reply = "**OPTION 1**\nA\n\n---\n\n**OPTION 2**\nB\n\n---\n\n**OPTION 3**\nC";
        let options = split_options(reply);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], "**OPTION 1**\nA");
        assert_eq!(options[2], "**OPTION 3**\nC");
    }

    #[test]
    fn blank_segments_are_dropped() {
        assert_eq!(split_options("---\nonly\n---\n   \n---"), vec!["only".to_string()]);
        assert!(split_options("").is_empty());
        assert_eq!(split_options("single").len(), 1);
    }
}
