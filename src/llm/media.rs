use anyhow::{anyhow, Result};
use base64::{engine::general_purpose, Engine as _};

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// An image forwarded to the model as an `inlineData` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64 payload without the `data:` prefix.
    pub data: String,
}

pub fn detect_mime_type(data: &[u8]) -> Option<String> {
    if data.len() > 12 {
        let ftyp = &data[4..12];
        if ftyp.starts_with(b"ftyp") {
            let brand = &ftyp[4..8];
            if brand == b"heic" || brand == b"heif" || brand == b"hevc" {
                return Some("image/heic".to_string());
            }
        }
    }

    infer::get(data).map(|kind| kind.mime_type().to_string())
}

pub fn normalize_image_mime_type(mime_type: &str) -> String {
    let lowered = mime_type.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "image/jpg" | "image/pjpeg" => "image/jpeg".to_string(),
        _ => lowered,
    }
}

fn split_data_url(raw: &str) -> (Option<&str>, &str) {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("data:") else {
        return (None, trimmed);
    };
    let Some((header, payload)) = rest.split_once(',') else {
        return (None, rest);
    };
    let mime = header
        .split(';')
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());
    (mime, payload)
}

impl InlineImage {
    /// Accepts a `data:<mime>;base64,<payload>` URL or bare base64.
    pub fn from_data_url(raw: &str) -> Result<Self> {
        let (declared_mime, payload) = split_data_url(raw);
        let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        if payload.is_empty() {
            return Err(anyhow!("image payload is empty"));
        }

        let bytes = general_purpose::STANDARD
            .decode(payload.as_bytes())
            .map_err(|err| anyhow!("image payload is not valid base64: {err}"))?;

        let mime_type = declared_mime
            .map(normalize_image_mime_type)
            .filter(|mime| mime.starts_with("image/"))
            .or_else(|| detect_mime_type(&bytes))
            .unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());

        Ok(InlineImage {
            mime_type,
            data: payload,
        })
    }
}
