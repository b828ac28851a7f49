use resvg::tiny_skia;

use crate::{
    assets::decode::PreparedImage,
    foundation::{
        core::{Canvas, Rgba8},
        error::{VaultError, VaultResult},
    },
    render::composite::{demultiply, fill_over_in_place, over_in_place},
};

/// Premultiplied RGBA8 drawing target for one card.
pub struct Surface {
    canvas: Canvas,
    pixmap: tiny_skia::Pixmap,
}

impl Surface {
    /// Allocate a transparent surface. Fails if the pixmap cannot be allocated.
    pub fn new(canvas: Canvas) -> VaultResult<Self> {
        let pixmap = tiny_skia::Pixmap::new(canvas.width, canvas.height).ok_or_else(|| {
            VaultError::canvas(format!(
                "failed to allocate {}x{} surface",
                canvas.width, canvas.height
            ))
        })?;
        Ok(Self { canvas, pixmap })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Premultiplied RGBA8, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut tiny_skia::Pixmap {
        &mut self.pixmap
    }

    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let idx = ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4;
        let d = self.pixmap.data();
        Some([d[idx], d[idx + 1], d[idx + 2], d[idx + 3]])
    }

    /// Fill with a top-to-bottom gradient. Row 0 is exactly `top`, the last row exactly `bottom`.
    pub fn fill_vertical_gradient(&mut self, top: Rgba8, bottom: Rgba8) {
        let width = self.canvas.width as usize;
        let last_row = self.canvas.height.saturating_sub(1).max(1) as f32;
        let data = self.pixmap.data_mut();

        for (y, row) in data.chunks_exact_mut(width * 4).enumerate() {
            let px = top.lerp(bottom, y as f32 / last_row).to_premul();
            for dst in row.chunks_exact_mut(4) {
                dst.copy_from_slice(&px);
            }
        }
    }

    /// Composite a canvas-sized image over the surface at `opacity`.
    pub fn composite_image(&mut self, image: &PreparedImage, opacity: f32) -> VaultResult<()> {
        if image.width != self.canvas.width || image.height != self.canvas.height {
            return Err(VaultError::canvas(format!(
                "image {}x{} does not match surface {}x{}",
                image.width, image.height, self.canvas.width, self.canvas.height
            )));
        }
        over_in_place(self.pixmap.data_mut(), &image.rgba8_premul, opacity)
    }

    /// Composite a solid color over the whole surface at `opacity`.
    pub fn fill_overlay(&mut self, color: Rgba8, opacity: f32) -> VaultResult<()> {
        fill_over_in_place(self.pixmap.data_mut(), color.to_premul(), opacity)
    }

    /// Straight-alpha RGB8 copy, alpha discarded. Used for the opaque final card.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.canvas.pixel_count() * 3);
        for px in self.pixmap.data().chunks_exact(4) {
            let [r, g, b, _] = demultiply([px[0], px[1], px[2], px[3]]);
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
