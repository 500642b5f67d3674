use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

use crate::utils::fields::scalar_text;

const UNSPECIFIED: &str = "unspecified";

static CODE_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?").expect("valid fence regex"));

/// Removes every markdown code fence marker and trims the remainder.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE_RE.replace_all(text, "").trim().to_string()
}

/// Returns the cleaned reply when it is valid JSON.
pub fn clean_json_reply(reply: &str) -> Option<String> {
    let cleaned = strip_code_fences(reply);
    serde_json::from_str::<Value>(&cleaned).ok().map(|_| cleaned)
}

/// Minimal profile used when the model does not return valid JSON. `age`
/// is echoed with the JSON type the client sent.
pub fn fallback_profile(gender: &str, age: &Value, ethnicity: &str, hair_color: &str) -> String {
    let profile = json!({
        "subject": {
            "gender": gender,
            "age": age,
            "ethnicity": ethnicity,
            "hair": { "color": hair_color }
        }
    });
    serde_json::to_string_pretty(&profile).unwrap_or_else(|_| profile.to_string())
}

#[derive(Debug, Clone)]
pub struct InfluencerProfile {
    subject: Value,
}

impl InfluencerProfile {
    pub fn parse(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text.trim())?;
        let subject = root
            .get("subject")
            .filter(|value| value.is_object())
            .cloned()
            .ok_or_else(|| anyhow!("profile has no subject object"))?;
        Ok(InfluencerProfile { subject })
    }

    fn field(&self, pointer: &str) -> String {
        scalar_text(self.subject.pointer(pointer)).unwrap_or_else(|| UNSPECIFIED.to_string())
    }

    fn optional_field(&self, pointer: &str) -> Option<String> {
        scalar_text(self.subject.pointer(pointer))
    }

    fn require_object(&self, key: &str) -> Result<()> {
        if self.subject.get(key).is_some_and(Value::is_object) {
            Ok(())
        } else {
            Err(anyhow!("profile subject has no {key} object"))
        }
    }

    /// `(gender, agey, ethnicity, color style, color eyes, type body).`
    pub fn fashion_description(&self) -> Result<String> {
        self.require_object("hair")?;
        self.require_object("eyes")?;
        Ok(format!(
            "({}, {}y, {}, {} {}, {} eyes, {} body).",
            self.field("/gender"),
            self.field("/age"),
            self.field("/ethnicity"),
            self.field("/hair/color"),
            self.field("/hair/style"),
            self.field("/eyes/color"),
            self.field("/body_type"),
        ))
    }

    pub fn showcase_description(&self) -> Result<String> {
        self.require_object("hair")?;
        self.require_object("eyes")?;
        Ok(format!(
            "({}, {}y, {}, {}, {} eyes)",
            self.field("/gender"),
            self.field("/age"),
            self.field("/ethnicity"),
            self.field("/hair/color"),
            self.field("/eyes/color"),
        ))
    }

    pub fn thumbnail_description(&self) -> String {
        format!(
            "Specific person: {}, {} years old, {}, {} hair, {} eyes.",
            self.field("/gender"),
            self.field("/age"),
            self.field("/ethnicity"),
            self.optional_field("/hair/color")
                .unwrap_or_else(|| "styled".to_string()),
            self.optional_field("/eyes/color")
                .unwrap_or_else(|| "expressive".to_string()),
        )
    }
}
