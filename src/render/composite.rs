use crate::foundation::error::{VaultError, VaultResult};
use crate::foundation::math::{mul_div255_u8, opacity_to_u8};

pub type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel, with `src` additionally scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let op = u16::from(opacity_to_u8(opacity));
    if op == 0 || src[3] == 0 {
        return dst;
    }

    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Composite a whole premultiplied buffer over `dst`.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> VaultResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(VaultError::canvas(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite a single solid premultiplied color over every pixel of `dst`.
pub fn fill_over_in_place(dst: &mut [u8], src: PremulRgba8, opacity: f32) -> VaultResult<()> {
    if !dst.len().is_multiple_of(4) {
        return Err(VaultError::canvas("fill_over_in_place expects rgba8 buffer"));
    }
    for d in dst.chunks_exact_mut(4) {
        let out = over([d[0], d[1], d[2], d[3]], src, opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Undo premultiplication for one pixel.
pub fn demultiply(px: PremulRgba8) -> PremulRgba8 {
    let a = px[3];
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let a16 = u16::from(a);
    let un = |c: u8| -> u8 { ((u16::from(c) * 255 + a16 / 2) / a16).min(255) as u8 };
    [un(px[0]), un(px[1]), un(px[2]), a]
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
