use crate::{
    foundation::core::{Canvas, Rgba8},
    layout::wrap::{AdvanceTable, TextMeasure, wrap_words},
    model::playlist::PlaylistRecord,
};

pub const CANVAS_WIDTH: u32 = 1080;
pub const CANVAS_HEIGHT: u32 = 1920;
pub const CARD_CANVAS: Canvas = Canvas {
    width: CANVAS_WIDTH,
    height: CANVAS_HEIGHT,
};

pub const GRADIENT_TOP: Rgba8 = Rgba8::rgb(0x66, 0x7e, 0xea);
pub const GRADIENT_BOTTOM: Rgba8 = Rgba8::rgb(0x76, 0x4b, 0xa2);
pub const TEXT_COLOR: Rgba8 = Rgba8::WHITE;

pub const THUMBNAIL_OPACITY: f32 = 0.3;
pub const OVERLAY_OPACITY: f32 = 0.5;

pub const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

pub const GLYPH_Y: f32 = 200.0;
pub const GLYPH_SIZE: f32 = 48.0;

pub const TITLE_Y: f32 = 400.0;
pub const TITLE_SIZE: f32 = 64.0;
pub const TITLE_LINE_HEIGHT: f32 = 1.2;
pub const TITLE_MAX_WIDTH: f32 = 1000.0;

pub const META_SIZE: f32 = 36.0;
/// Distance from the last title line to the vibe slot.
pub const VIBE_GAP: f32 = 200.0;
/// Distance from the vibe slot to the kick slot.
pub const KICK_GAP: f32 = 100.0;

pub const CAPTION_SIZE: f32 = 28.0;
/// Distance from the kick slot to the platform caption.
pub const CAPTION_GAP: f32 = 200.0;

pub const BRAND_TEXT: &str = "VAULT";
pub const BRAND_Y: f32 = 1700.0;
pub const BRAND_SIZE: f32 = 48.0;

pub const CTA_TEXT: &str = "\u{1F4AB} Add a link sticker to your story!";
pub const CTA_Y: f32 = 1800.0;
pub const CTA_SIZE: f32 = 24.0;

/// What a text item on the card represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    Glyph,
    Title,
    Vibe,
    Kick,
    Platform,
    Brand,
    CallToAction,
}

/// One horizontally centered line of text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub role: TextRole,
    pub text: String,
    /// Vertical middle of the line, in canvas pixels.
    pub y: f32,
    pub font_size: f32,
    pub bold: bool,
}

/// Positioned text for one card. Pure function of the record.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    pub canvas: Canvas,
    pub items: Vec<TextItem>,
}

impl CardLayout {
    /// Lay out `record` with the default advance model.
    pub fn compute(record: &PlaylistRecord) -> Self {
        Self::compute_with(record, &AdvanceTable::BOLD)
    }

    /// Lay out `record`, measuring title lines with `measure`.
    pub fn compute_with(record: &PlaylistRecord, measure: &dyn TextMeasure) -> Self {
        let mut items = Vec::with_capacity(8);

        items.push(TextItem {
            role: TextRole::Glyph,
            text: record.platform.glyph().to_owned(),
            y: GLYPH_Y,
            font_size: GLYPH_SIZE,
            bold: true,
        });

        let lines = title_lines(&record.title, measure);
        let line_step = TITLE_SIZE * TITLE_LINE_HEIGHT;
        let mut last_title_y = TITLE_Y;
        for (i, line) in lines.into_iter().enumerate() {
            let y = TITLE_Y + (i as f32) * line_step;
            last_title_y = y;
            items.push(TextItem {
                role: TextRole::Title,
                text: line,
                y,
                font_size: TITLE_SIZE,
                bold: true,
            });
        }

        let vibe_y = last_title_y + VIBE_GAP;
        let kick_y = vibe_y + KICK_GAP;
        let caption_y = kick_y + CAPTION_GAP;

        if let Some(vibe) = present(record.vibe.as_deref()) {
            items.push(TextItem {
                role: TextRole::Vibe,
                text: format!("Vibe: {vibe}"),
                y: vibe_y,
                font_size: META_SIZE,
                bold: false,
            });
        }

        if let Some(kick) = present(record.kick_music.as_deref()) {
            items.push(TextItem {
                role: TextRole::Kick,
                text: format!("Kick: {kick}"),
                y: kick_y,
                font_size: META_SIZE,
                bold: false,
            });
        }

        items.push(TextItem {
            role: TextRole::Platform,
            text: record.platform.as_str().to_uppercase(),
            y: caption_y,
            font_size: CAPTION_SIZE,
            bold: true,
        });

        items.push(TextItem {
            role: TextRole::Brand,
            text: BRAND_TEXT.to_owned(),
            y: BRAND_Y,
            font_size: BRAND_SIZE,
            bold: true,
        });

        items.push(TextItem {
            role: TextRole::CallToAction,
            text: CTA_TEXT.to_owned(),
            y: CTA_Y,
            font_size: CTA_SIZE,
            bold: true,
        });

        Self {
            canvas: CARD_CANVAS,
            items,
        }
    }

    pub fn items_with_role(&self, role: TextRole) -> impl Iterator<Item = &TextItem> {
        self.items.iter().filter(move |item| item.role == role)
    }

    pub fn title_line_count(&self) -> usize {
        self.items_with_role(TextRole::Title).count()
    }
}

fn title_lines(title: &str, measure: &dyn TextMeasure) -> Vec<String> {
    let lines = wrap_words(title, measure, TITLE_SIZE, TITLE_MAX_WIDTH);
    if lines.is_empty() {
        // Validation rejects blank titles; keep a single (empty) slot so positions stay defined.
        return vec![String::new()];
    }
    lines
}

fn present(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/card.rs"]
mod tests;
