use std::sync::Arc;

use resvg::tiny_skia;

use crate::{
    assets::fonts::fallback_font_resolver,
    foundation::error::{VaultError, VaultResult},
    layout::card::{CardLayout, FONT_FAMILY, TEXT_COLOR},
    render::surface::Surface,
};

/// Build the SVG markup for every text item of `layout` on a transparent canvas.
///
/// Lines are centered on the canvas midline and positioned by their vertical middle.
pub fn overlay_markup(layout: &CardLayout) -> String {
    let canvas = layout.canvas;
    let mut svg = String::with_capacity(256 + layout.items.len() * 200);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    ));

    let fill = TEXT_COLOR.to_hex_rgb();
    let x = canvas.center_x();
    for item in &layout.items {
        let weight = if item.bold { "bold" } else { "normal" };
        svg.push_str(&format!(
            r#"<text x="{x:.1}" y="{y:.2}" font-family="{family}" font-size="{size:.1}" font-weight="{weight}" text-anchor="middle" dominant-baseline="middle" fill="{fill}">{text}</text>"#,
            y = item.y,
            family = FONT_FAMILY,
            size = item.font_size,
            text = escape_xml_text(&item.text),
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Escape text for element content/attribute use and drop control characters.
pub fn escape_xml_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Rasterize the text overlay for `layout` onto `surface`.
pub fn draw_text_overlay(
    surface: &mut Surface,
    layout: &CardLayout,
    fontdb: &Arc<usvg::fontdb::Database>,
) -> VaultResult<()> {
    let markup = overlay_markup(layout);
    let opts = usvg::Options {
        fontdb: Arc::clone(fontdb),
        font_resolver: fallback_font_resolver(),
        ..Default::default()
    };

    let tree = usvg::Tree::from_str(&markup, &opts)
        .map_err(|e| VaultError::canvas(format!("parse text overlay: {e}")))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::identity(),
        &mut surface.pixmap_mut().as_mut(),
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
