use image::{DynamicImage, imageops::FilterType};

use crate::foundation::{
    core::Canvas,
    error::{VaultError, VaultResult},
};

/// Raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

/// Source rectangle `(x, y, width, height)` with the aspect ratio of `canvas`, centered in a
/// `src_w`×`src_h` image. Never empty.
pub(crate) fn cover_crop_rect(src_w: u32, src_h: u32, canvas: Canvas) -> (u32, u32, u32, u32) {
    let (sw, sh) = (u64::from(src_w), u64::from(src_h));
    let (cw, ch) = (u64::from(canvas.width), u64::from(canvas.height));

    if sw * ch > sh * cw {
        // Wider than the canvas: trim the sides.
        let w = ((sh * cw + ch / 2) / ch).clamp(1, sw) as u32;
        ((src_w - w) / 2, 0, w, src_h)
    } else {
        let h = ((sw * ch + cw / 2) / cw).clamp(1, sh) as u32;
        (0, (src_h - h) / 2, src_w, h)
    }
}

/// Decode a thumbnail and scale-to-cover it so it exactly fills `canvas`.
///
/// The overflow is cropped in source pixels before resampling, so the working set never exceeds
/// the source plus one canvas-sized buffer.
pub fn decode_cover(bytes: &[u8], canvas: Canvas) -> VaultResult<PreparedImage> {
    let src = image::load_from_memory(bytes)
        .map_err(|e| VaultError::thumbnail_decode(e.to_string()))?;
    if src.width() == 0 || src.height() == 0 {
        return Err(VaultError::thumbnail_decode("thumbnail has zero size"));
    }

    let (x, y, w, h) = cover_crop_rect(src.width(), src.height(), canvas);
    let cropped: DynamicImage = src.crop_imm(x, y, w, h);
    let filled = cropped.resize_exact(canvas.width, canvas.height, FilterType::Triangle);

    let mut rgba8_premul = filled.to_rgba8().into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width: canvas.width,
        height: canvas.height,
        rgba8_premul,
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = crate::foundation::math::mul_div255_u8(u16::from(*c), a);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
