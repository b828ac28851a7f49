use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    assets::thumbnail::normalize_upload_path,
    foundation::error::{VaultError, VaultResult},
};

/// Music service a playlist link comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Spotify,
}

impl Platform {
    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Spotify => "spotify",
        }
    }

    /// Human-facing service name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Youtube => "YouTube",
            Self::Spotify => "Spotify",
        }
    }

    /// Musical glyph drawn at the top of the share card.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Youtube => "\u{1F3B5}",
            Self::Spotify => "\u{1F3A7}",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "youtube" => Ok(Self::Youtube),
            "spotify" => Ok(Self::Spotify),
            other => Err(VaultError::validation(format!(
                "unknown platform \"{other}\" (expected youtube or spotify)"
            ))),
        }
    }
}

/// Where a playlist thumbnail lives.
///
/// Parsed from the string form the storage layer keeps: a `data:` URI, an `/uploads/...` path, or a
/// remote URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThumbnailRef {
    /// `data:<mime>;base64,<payload>`. The payload is decoded lazily at resolve time.
    Inline { mime: String, payload: String },
    /// Server-local upload, relative to the uploads root.
    Upload { rel_path: String },
    /// Remote URL. Never fetched by this crate.
    Remote { url: String },
    /// Anything else; kept verbatim and resolves to nothing.
    Unsupported { raw: String },
}

impl ThumbnailRef {
    /// Parse a stored thumbnail reference. Returns `Ok(None)` for empty input.
    pub fn parse(raw: &str) -> VaultResult<Option<Self>> {
        let s = raw.trim();
        if s.is_empty() {
            return Ok(None);
        }

        if let Some(rest) = s.strip_prefix("data:") {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| VaultError::validation("data uri is missing ',' separator"))?;
            let mime = header.strip_suffix(";base64").ok_or_else(|| {
                VaultError::validation("only base64 data uris are supported for thumbnails")
            })?;
            return Ok(Some(Self::Inline {
                mime: mime.to_owned(),
                payload: payload.to_owned(),
            }));
        }

        if let Some(rest) = s
            .strip_prefix("/uploads/")
            .or_else(|| s.strip_prefix("uploads/"))
        {
            return Ok(Some(Self::Upload {
                rel_path: normalize_upload_path(rest)?,
            }));
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Some(Self::Remote { url: s.to_owned() }));
        }

        Ok(Some(Self::Unsupported { raw: s.to_owned() }))
    }

    /// Stored string form.
    pub fn to_ref_string(&self) -> String {
        match self {
            Self::Inline { mime, payload } => format!("data:{mime};base64,{payload}"),
            Self::Upload { rel_path } => format!("/uploads/{rel_path}"),
            Self::Remote { url } => url.clone(),
            Self::Unsupported { raw } => raw.clone(),
        }
    }
}

impl Serialize for ThumbnailRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_ref_string())
    }
}

/// A saved playlist as handed to the renderer by the storage collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRecord {
    pub id: String,
    pub title: String,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub vibe: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub kick_music: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_thumbnail",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail: Option<ThumbnailRef>,
}

impl PlaylistRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, platform: Platform) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            platform,
            link: None,
            vibe: None,
            kick_music: None,
            thumbnail: None,
        }
    }

    pub fn with_vibe(mut self, vibe: impl Into<String>) -> Self {
        self.vibe = non_blank(vibe.into());
        self
    }

    pub fn with_kick_music(mut self, kick_music: impl Into<String>) -> Self {
        self.kick_music = non_blank(kick_music.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: ThumbnailRef) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Parse a record from JSON and validate it.
    pub fn from_json(json: &str) -> VaultResult<Self> {
        let record: Self = serde_json::from_str(json)?;
        record.validate()?;
        Ok(record)
    }

    /// Boundary checks applied before a record reaches the renderer.
    pub fn validate(&self) -> VaultResult<()> {
        if self.id.trim().is_empty() {
            return Err(VaultError::validation("playlist id must be non-empty"));
        }
        if self.title.trim().is_empty() {
            return Err(VaultError::validation("playlist title must be non-empty"));
        }
        if self.id.contains(['/', '\\']) {
            return Err(VaultError::validation(
                "playlist id must not contain path separators",
            ));
        }
        Ok(())
    }
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(non_blank))
}

fn de_opt_thumbnail<'de, D>(deserializer: D) -> Result<Option<ThumbnailRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    // A bad reference only costs the card its underlay, never the record.
    match ThumbnailRef::parse(&raw) {
        Ok(thumb) => Ok(thumb),
        Err(err) => {
            tracing::warn!(reference = %raw.trim(), error = %err, "unusable thumbnail reference");
            Ok(Some(ThumbnailRef::Unsupported {
                raw: raw.trim().to_owned(),
            }))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/playlist.rs"]
mod tests;
