use std::io::Cursor;

use super::*;
use crate::{model::playlist::Platform, render::composite::over};

fn bare_renderer() -> CardRenderer {
    CardRenderer::with_fontdb(Arc::new(usvg::fontdb::Database::new()))
}

fn pixel(frame: &CardFrame, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[idx],
        frame.data[idx + 1],
        frame.data[idx + 2],
        frame.data[idx + 3],
    ]
}

fn white_png(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn frame_has_card_dimensions_and_gradient_corners() {
    let rec = PlaylistRecord::new("p", "Corners", Platform::Youtube);
    let frame = bare_renderer().render_frame(&rec, None).unwrap();
    assert_eq!((frame.width, frame.height), (1080, 1920));
    assert_eq!(frame.data.len(), 1080 * 1920 * 4);
    assert_eq!(pixel(&frame, 0, 0), GRADIENT_TOP.to_premul());
    assert_eq!(pixel(&frame, 1079, 1919), GRADIENT_BOTTOM.to_premul());
}

#[test]
fn thumbnail_is_dimmed_under_overlay() {
    let rec = PlaylistRecord::new("p", "Thumb", Platform::Spotify);
    let frame = bare_renderer()
        .render_frame(&rec, Some(&white_png(30, 40)))
        .unwrap();

    let expected = over(
        over(GRADIENT_TOP.to_premul(), [255, 255, 255, 255], THUMBNAIL_OPACITY),
        Rgba8::BLACK.to_premul(),
        OVERLAY_OPACITY,
    );
    assert_eq!(pixel(&frame, 0, 0), expected);
    assert!(pixel(&frame, 0, 0)[0] < GRADIENT_TOP.r);
}

#[test]
fn undecodable_thumbnail_matches_no_thumbnail() {
    let rec = PlaylistRecord::new("p", "Fallback", Platform::Youtube).with_vibe("calm");
    let r = bare_renderer();
    let plain = r.render(&rec, None).unwrap();
    let garbage = r.render(&rec, Some(b"\x89PNG but not really")).unwrap();
    let empty = r.render(&rec, Some(&[])).unwrap();
    assert_eq!(plain, garbage);
    assert_eq!(plain, empty);
}

#[test]
fn renderer_layout_matches_default_layout() {
    let rec = PlaylistRecord::new("p", "Same layout either way", Platform::Spotify);
    assert_eq!(bare_renderer().layout(&rec), CardLayout::compute(&rec));
}

#[test]
fn debug_reports_face_count() {
    let s = format!("{:?}", bare_renderer());
    assert!(s.contains("font_faces: 0"));
}

#[test]
fn extreme_aspect_thumbnails_render() {
    let rec = PlaylistRecord::new("p", "Thin Cover", Platform::Youtube);
    let r = bare_renderer();
    let plain = r.render_frame(&rec, None).unwrap();
    for (w, h) in [(1u32, 20000u32), (20000, 1)] {
        let frame = r.render_frame(&rec, Some(&white_png(w, h))).unwrap();
        assert_eq!((frame.width, frame.height), (1080, 1920), "{w}x{h}");
        assert_ne!(frame.data, plain.data, "{w}x{h}");
    }
}
