use std::path::PathBuf;

use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_thumbnail").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn normalize_upload_path_rules() {
    assert_eq!(normalize_upload_path("a/./b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_upload_path("a\\b.png").unwrap(), "a/b.png");
    assert!(normalize_upload_path("").is_err());
    assert!(normalize_upload_path("/etc/passwd").is_err());
    assert!(normalize_upload_path("a/../../b").is_err());
    assert!(normalize_upload_path("./.").is_err());
    assert!(normalize_upload_path("C:/Windows/win.ini").is_err());
    assert_eq!(normalize_upload_path(" covers//x.png ").unwrap(), "covers/x.png");
}

#[test]
fn inline_thumbnail_decodes_base64() {
    let store = ThumbnailStore::new("unused");
    let thumb = ThumbnailRef::Inline {
        mime: "image/png".to_string(),
        payload: "aGVsbG8=".to_string(),
    };
    assert_eq!(store.resolve(&thumb).as_deref(), Some(b"hello".as_slice()));
}

#[test]
fn inline_thumbnail_with_bad_base64_resolves_to_none() {
    let store = ThumbnailStore::new("unused");
    let thumb = ThumbnailRef::Inline {
        mime: "image/png".to_string(),
        payload: "!!not base64!!".to_string(),
    };
    assert_eq!(store.resolve(&thumb), None);
}

#[test]
fn upload_thumbnail_reads_from_root() {
    let root = scratch_dir("upload");
    std::fs::write(root.join("thumbnail-1.jpg"), b"jpeg-ish").unwrap();

    let store = ThumbnailStore::new(&root);

    let present = ThumbnailRef::Upload {
        rel_path: "thumbnail-1.jpg".to_string(),
    };
    assert_eq!(store.resolve(&present).as_deref(), Some(b"jpeg-ish".as_slice()));

    let missing = ThumbnailRef::Upload {
        rel_path: "missing.jpg".to_string(),
    };
    assert_eq!(store.resolve(&missing), None);
}

#[test]
fn remote_and_unsupported_resolve_to_none() {
    let store = ThumbnailStore::new("unused");
    let remote = ThumbnailRef::Remote {
        url: "https://example.com/a.jpg".to_string(),
    };
    let other = ThumbnailRef::Unsupported {
        raw: "cover.png".to_string(),
    };
    assert_eq!(store.resolve(&remote), None);
    assert_eq!(store.resolve(&other), None);
}
