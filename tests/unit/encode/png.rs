use super::*;

fn gradient_rgb(w: u32, h: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity((w * h * 3) as usize);
    for y in 0..h {
        for x in 0..w {
            out.extend_from_slice(&[(x * 7 % 256) as u8, (y * 5 % 256) as u8, ((x + y) % 256) as u8]);
        }
    }
    out
}

#[test]
fn quantize_step_tracks_quality() {
    assert_eq!(quantize_step(100), 1);
    assert_eq!(quantize_step(90), 3);
    assert_eq!(quantize_step(1), 25);
}

#[test]
fn quantize_rounds_and_clamps() {
    assert_eq!(quantize(7, 1), 7);
    assert_eq!(quantize(4, 3), 3);
    assert_eq!(quantize(5, 3), 6);
    assert_eq!(quantize(255, 25), 255);
    assert_eq!(quantize(0, 25), 0);
}

#[test]
fn lossless_quality_round_trips_pixels() {
    let rgb = gradient_rgb(16, 9);
    let png = encode_png(&rgb, 16, 9, 100).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (16, 9));
    assert_eq!(decoded.as_raw(), &rgb);
}

#[test]
fn default_quality_stays_close_to_source() {
    let rgb = gradient_rgb(32, 32);
    let png = encode_png(&rgb, 32, 32, PNG_QUALITY).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
    for (a, b) in decoded.as_raw().iter().zip(&rgb) {
        assert!(a.abs_diff(*b) <= 2, "{a} vs {b}");
    }
}

#[test]
fn rejects_bad_inputs() {
    let rgb = gradient_rgb(4, 4);
    assert!(matches!(encode_png(&rgb, 4, 4, 0), Err(VaultError::Encode(_))));
    assert!(matches!(encode_png(&rgb, 4, 4, 101), Err(VaultError::Encode(_))));
    assert!(matches!(encode_png(&rgb, 5, 4, 90), Err(VaultError::Encode(_))));
    assert!(matches!(encode_png(&[], 0, 4, 90), Err(VaultError::Encode(_))));
}
