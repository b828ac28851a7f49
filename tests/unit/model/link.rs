use super::*;

#[test]
fn youtube_watch_short_and_embed_links() {
    let cases = [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://www.youtube.com/watch?list=PL1&v=dQw4w9WgXcQ&t=3",
        "https://youtu.be/dQw4w9WgXcQ?si=abc",
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "https://www.youtube.com/v/dQw4w9WgXcQ",
    ];
    for link in cases {
        let info = parse_link(link).unwrap();
        assert_eq!(info.platform, Platform::Youtube, "{link}");
        assert_eq!(info.video_id.as_deref(), Some("dQw4w9WgXcQ"), "{link}");
        assert_eq!(info.playlist_id, None);
    }
}

#[test]
fn youtube_playlist_page_has_platform_but_no_video_id() {
    let info = parse_link("https://www.youtube.com/playlist?list=PLabc").unwrap();
    assert_eq!(info.platform, Platform::Youtube);
    assert_eq!(info.video_id, None);
}

#[test]
fn spotify_playlist_link() {
    let info = parse_link("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=x").unwrap();
    assert_eq!(info.platform, Platform::Spotify);
    assert_eq!(info.playlist_id.as_deref(), Some("37i9dQZF1DXcBWIGoYBM5M"));
    assert_eq!(info.video_id, None);

    let album = parse_link("https://open.spotify.com/album/1A2B").unwrap();
    assert_eq!(album.platform, Platform::Spotify);
    assert_eq!(album.playlist_id, None);
}

#[test]
fn unsupported_and_empty_links_fail() {
    assert!(parse_link("https://soundcloud.com/someone").is_err());
    assert!(parse_link("   ").is_err());
}

#[test]
fn link_info_serializes_camel_case() {
    let info = parse_link("https://youtu.be/dQw4w9WgXcQ").unwrap();
    let v = serde_json::to_value(&info).unwrap();
    assert_eq!(v["platform"], "youtube");
    assert_eq!(v["videoId"], "dQw4w9WgXcQ");
    assert!(v.get("playlistId").is_none());
}
