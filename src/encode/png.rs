use image::{
    ExtendedColorType, ImageEncoder,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::foundation::error::{VaultError, VaultResult};

/// Quality used for every share card.
pub const PNG_QUALITY: u8 = 90;

/// Encode tightly packed RGB8 pixels as PNG at `quality` (1..=100).
///
/// Quality below 100 quantizes each channel to a coarser step before encoding, which shrinks the
/// deflate stream. Higher quality also selects stronger compression.
#[tracing::instrument(skip(rgb), fields(len = rgb.len()))]
pub fn encode_png(rgb: &[u8], width: u32, height: u32, quality: u8) -> VaultResult<Vec<u8>> {
    if !(1..=100).contains(&quality) {
        return Err(VaultError::encode(format!(
            "png quality must be in 1..=100, got {quality}"
        )));
    }
    if width == 0 || height == 0 {
        return Err(VaultError::encode("png dimensions must be non-zero"));
    }
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| VaultError::encode("png dimensions overflow"))?;
    if rgb.len() != expected {
        return Err(VaultError::encode(format!(
            "rgb8 buffer is {} bytes, expected {expected} for {width}x{height}",
            rgb.len()
        )));
    }

    let step = quantize_step(quality);
    let quantized;
    let pixels = if step > 1 {
        quantized = rgb.iter().map(|&v| quantize(v, step)).collect::<Vec<u8>>();
        quantized.as_slice()
    } else {
        rgb
    };

    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, compression_for(quality), FilterType::Adaptive)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| VaultError::encode(format!("png encode failed: {e}")))?;
    Ok(out)
}

/// Channel step for `quality`; 1 means lossless.
pub(crate) fn quantize_step(quality: u8) -> u8 {
    1 + (100 - quality.min(100)) / 4
}

pub(crate) fn quantize(v: u8, step: u8) -> u8 {
    if step <= 1 {
        return v;
    }
    let step = u16::from(step);
    let q = ((u16::from(v) + step / 2) / step) * step;
    q.min(255) as u8
}

fn compression_for(quality: u8) -> CompressionType {
    match quality {
        80.. => CompressionType::Best,
        40..=79 => CompressionType::Default,
        _ => CompressionType::Fast,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
