use std::sync::Arc;

use crate::{
    assets::{
        decode::decode_cover,
        fonts::{FontConfig, build_fontdb},
    },
    encode::png::{PNG_QUALITY, encode_png},
    foundation::{
        core::{Canvas, Rgba8},
        error::VaultResult,
    },
    layout::{
        card::{
            CardLayout, GRADIENT_BOTTOM, GRADIENT_TOP, OVERLAY_OPACITY, THUMBNAIL_OPACITY,
        },
        wrap::AdvanceTable,
    },
    model::playlist::PlaylistRecord,
    render::{surface::Surface, text::draw_text_overlay},
};

/// A composited card before encoding.
#[derive(Clone, Debug)]
pub struct CardFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

/// Renders playlist share cards.
///
/// Holds only an immutable font database, so one renderer can serve concurrent `render` calls.
#[derive(Clone)]
pub struct CardRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
    measure: AdvanceTable,
}

impl std::fmt::Debug for CardRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardRenderer")
            .field("font_faces", &self.fontdb.len())
            .field("measure", &self.measure)
            .finish()
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(&FontConfig::default())
    }
}

impl CardRenderer {
    /// Build a renderer, loading fonts per `config`.
    pub fn new(config: &FontConfig) -> Self {
        Self::with_fontdb(build_fontdb(config))
    }

    /// Build a renderer around an existing font database.
    pub fn with_fontdb(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self {
            fontdb,
            measure: AdvanceTable::BOLD,
        }
    }

    /// Layout the renderer would use for `record`.
    pub fn layout(&self, record: &PlaylistRecord) -> CardLayout {
        CardLayout::compute_with(record, &self.measure)
    }

    /// Render `record` to PNG bytes.
    ///
    /// `thumbnail` is the raw encoded image, if any. Undecodable thumbnails are logged and the card
    /// falls back to the plain gradient.
    #[tracing::instrument(skip_all, fields(id = %record.id, platform = %record.platform))]
    pub fn render(&self, record: &PlaylistRecord, thumbnail: Option<&[u8]>) -> VaultResult<Vec<u8>> {
        let layout = self.layout(record);
        let surface = self.compose(&layout, thumbnail)?;
        let canvas = surface.canvas();
        let png = encode_png(&surface.to_rgb8(), canvas.width, canvas.height, PNG_QUALITY)?;
        tracing::debug!(
            bytes = png.len(),
            title_lines = layout.title_line_count(),
            "card rendered"
        );
        Ok(png)
    }

    /// Composite `record` without encoding.
    pub fn render_frame(
        &self,
        record: &PlaylistRecord,
        thumbnail: Option<&[u8]>,
    ) -> VaultResult<CardFrame> {
        let layout = self.layout(record);
        let surface = self.compose(&layout, thumbnail)?;
        let canvas = surface.canvas();
        Ok(CardFrame {
            width: canvas.width,
            height: canvas.height,
            data: surface.data().to_vec(),
        })
    }

    fn compose(&self, layout: &CardLayout, thumbnail: Option<&[u8]>) -> VaultResult<Surface> {
        let mut surface = Surface::new(layout.canvas)?;
        surface.fill_vertical_gradient(GRADIENT_TOP, GRADIENT_BOTTOM);

        if let Some(bytes) = thumbnail {
            underlay_thumbnail(&mut surface, layout.canvas, bytes)?;
        }

        draw_text_overlay(&mut surface, layout, &self.fontdb)?;
        Ok(surface)
    }
}

fn underlay_thumbnail(surface: &mut Surface, canvas: Canvas, bytes: &[u8]) -> VaultResult<()> {
    let image = match decode_cover(bytes, canvas) {
        Ok(image) => image,
        Err(err) => {
            tracing::warn!(error = %err, len = bytes.len(), "thumbnail skipped");
            return Ok(());
        }
    };

    surface.composite_image(&image, THUMBNAIL_OPACITY)?;
    surface.fill_overlay(Rgba8::BLACK, OVERLAY_OPACITY)
}

#[cfg(test)]
#[path = "../../tests/unit/render/card.rs"]
mod tests;
