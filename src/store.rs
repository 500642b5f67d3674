use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::utils::fields::{loose_string, present, scalar_text};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedInfluencer {
    #[serde(default, deserialize_with = "loose_string")]
    pub gender: Option<String>,
    /// Stored as sent, so a numeric age reads back as a number.
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default, deserialize_with = "loose_string")]
    pub ethnicity: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub hair_color: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub eye_color: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub extra_details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_config: Option<String>,
}

impl SavedInfluencer {
    /// Names of identity fields that are missing or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let age = scalar_text(self.age.as_ref());
        [
            ("gender", &self.gender),
            ("age", &age),
            ("ethnicity", &self.ethnicity),
            ("hairColor", &self.hair_color),
            ("eyeColor", &self.eye_color),
        ]
        .into_iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug)]
pub struct InfluencerStore {
    path: Option<PathBuf>,
    slot: Mutex<Option<SavedInfluencer>>,
}

impl InfluencerStore {
    pub fn in_memory() -> Self {
        InfluencerStore {
            path: None,
            slot: Mutex::new(None),
        }
    }

    /// Opens the store backed by `path`. An unreadable or corrupt file is
    /// logged and treated as empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let saved = match read_saved(&path).await {
            Ok(saved) => saved,
            Err(err) => {
                warn!("Ignoring saved influencer at {}: {err:#}", path.display());
                None
            }
        };
        if saved.is_some() {
            info!("Loaded saved influencer from {}", path.display());
        }
        InfluencerStore {
            path: Some(path),
            slot: Mutex::new(saved),
        }
    }

    pub fn get(&self) -> Option<SavedInfluencer> {
        self.slot.lock().clone()
    }

    pub async fn save(&self, influencer: SavedInfluencer) -> Result<SavedInfluencer> {
        if let Some(path) = &self.path {
            let body = serde_json::to_vec_pretty(&influencer)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            tokio::fs::write(path, body)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
        }
        *self.slot.lock() = Some(influencer.clone());
        Ok(influencer)
    }

    /// Returns whether a profile was stored.
    pub async fn clear(&self) -> Result<bool> {
        let had_profile = self.slot.lock().take().is_some();
        if let Some(path) = &self.path {
            match tokio::fs::remove_file(path).await {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => {
                    return Err(err).with_context(|| format!("removing {}", path.display()))
                }
            }
        }
        Ok(had_profile)
    }
}

async fn read_saved(path: &Path) -> Result<Option<SavedInfluencer>> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let saved = serde_json::from_slice::<SavedInfluencer>(&raw)?;
    Ok(Some(saved))
}
