use super::*;
use crate::{
    foundation::core::Rgba8,
    layout::card::CARD_CANVAS,
    model::playlist::{Platform, PlaylistRecord},
};

fn count_text_nodes(group: &usvg::Group) -> usize {
    let mut n = 0usize;
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => n += count_text_nodes(g.as_ref()),
            usvg::Node::Text(_) => n += 1,
            usvg::Node::Path(_) | usvg::Node::Image(_) => {}
        }
    }
    n
}

#[test]
fn escape_handles_markup_and_controls() {
    assert_eq!(
        escape_xml_text(r#"Rock & <Roll> "live" 'n'"#),
        "Rock &amp; &lt;Roll&gt; &quot;live&quot; &apos;n&apos;"
    );
    assert_eq!(escape_xml_text("a\u{0}b\nc"), "abc");
    assert_eq!(escape_xml_text("밤 드라이브 🎧"), "밤 드라이브 🎧");
}

#[test]
fn markup_contains_one_text_element_per_item() {
    let rec = PlaylistRecord::new("p", "Late Night Drive Mix", Platform::Spotify).with_vibe("chill");
    let layout = CardLayout::compute(&rec);
    let svg = overlay_markup(&layout);

    assert_eq!(svg.matches("<text ").count(), layout.items.len());
    assert!(svg.contains(r#"width="1080" height="1920""#));
    assert!(svg.contains(">Vibe: chill</text>"));
    assert!(svg.contains(">SPOTIFY</text>"));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(!svg.contains("Kick:"));
}

#[test]
fn hostile_title_is_escaped_and_parses() {
    let rec = PlaylistRecord::new("p", "</text><script>x</script> & more", Platform::Youtube);
    let layout = CardLayout::compute(&rec);
    let svg = overlay_markup(&layout);
    assert!(!svg.contains("<script>"));

    // Parsing with an empty font database must still succeed; text nodes without faces are
    // dropped by usvg but the document stays valid.
    let opts = usvg::Options::default();
    assert!(usvg::Tree::from_str(&svg, &opts).is_ok());
}

#[test]
fn overlay_without_fonts_leaves_background_untouched() {
    let rec = PlaylistRecord::new("p", "Quiet", Platform::Youtube);
    let layout = CardLayout::compute(&rec);

    let mut surface = Surface::new(CARD_CANVAS).unwrap();
    surface.fill_vertical_gradient(Rgba8::BLACK, Rgba8::BLACK);
    let before = surface.data().to_vec();

    let fontdb = Arc::new(usvg::fontdb::Database::new());
    draw_text_overlay(&mut surface, &layout, &fontdb).unwrap();
    assert_eq!(surface.data(), before.as_slice());
}

#[test]
fn overlay_tree_has_text_nodes_when_fonts_exist() {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if db.is_empty() {
        // Nothing to shape with on this host.
        return;
    }

    let rec = PlaylistRecord::new("p", "Quiet", Platform::Youtube);
    let layout = CardLayout::compute(&rec);
    let opts = usvg::Options {
        fontdb: Arc::new(db),
        font_resolver: fallback_font_resolver(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&overlay_markup(&layout), &opts).unwrap();
    assert!(count_text_nodes(tree.root()) >= 1);
}
