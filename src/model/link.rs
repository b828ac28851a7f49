use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::{
    foundation::error::{VaultError, VaultResult},
    model::playlist::Platform,
};

/// What can be read off a playlist link without calling the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkInfo {
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
}

/// Detect the platform of a playlist link and pull out its id.
///
/// A recognised host with an unrecognised path still yields the platform, with no id.
pub fn parse_link(link: &str) -> VaultResult<LinkInfo> {
    let link = link.trim();
    if link.is_empty() {
        return Err(VaultError::validation("link must be non-empty"));
    }

    if link.contains("youtube.com") || link.contains("youtu.be") {
        return Ok(LinkInfo {
            platform: Platform::Youtube,
            video_id: youtube_video_id(link),
            playlist_id: None,
        });
    }

    if link.contains("spotify.com") {
        return Ok(LinkInfo {
            platform: Platform::Spotify,
            video_id: None,
            playlist_id: spotify_playlist_id(link),
        });
    }

    Err(VaultError::validation(format!(
        "unsupported link \"{link}\" (expected a YouTube or Spotify url)"
    )))
}

fn youtube_video_id(link: &str) -> Option<String> {
    static YOUTUBE_RE: OnceLock<Regex> = OnceLock::new();
    let re = YOUTUBE_RE.get_or_init(|| {
        Regex::new(
            r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
        )
        .expect("youtube regex should compile")
    });
    re.captures(link)
        .and_then(|capture| capture.get(1))
        .map(|m| m.as_str().to_owned())
}

fn spotify_playlist_id(link: &str) -> Option<String> {
    static SPOTIFY_RE: OnceLock<Regex> = OnceLock::new();
    let re = SPOTIFY_RE.get_or_init(|| {
        Regex::new(r"spotify\.com/playlist/([a-zA-Z0-9]+)").expect("spotify regex should compile")
    });
    re.captures(link)
        .and_then(|capture| capture.get(1))
        .map(|m| m.as_str().to_owned())
}

#[cfg(test)]
#[path = "../../tests/unit/model/link.rs"]
mod tests;
