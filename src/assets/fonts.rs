use std::{path::PathBuf, sync::Arc};

/// Font sources used for card text.
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Load the host's installed fonts.
    pub load_system_fonts: bool,
    /// Extra directories scanned (non-recursively) for `.ttf`, `.otf` and `.ttc` files.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

/// Build the immutable font database shared by every render.
pub fn build_fontdb(config: &FontConfig) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    if config.load_system_fonts {
        db.load_system_fonts();
    }
    for dir in &config.font_dirs {
        load_fonts_from_dir(&mut db, dir);
    }

    tracing::debug!(faces = db.len(), "font database ready");
    if db.is_empty() {
        tracing::warn!("no font faces available; card text will not be drawn");
    }
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &std::path::Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory unreadable");
        return;
    };

    // Sorted so face ids (and therefore fallback picks) are stable across runs.
    let mut paths: Vec<PathBuf> = rd.flatten().map(|entry| entry.path()).collect();
    paths.sort();

    for path in paths {
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %err, "skipping unreadable font");
        }
    }
}

/// Font resolver that always lands on some installed face.
///
/// Named families from the markup are tried first, then the generic sans-serif face, then the
/// first face in the database. Card text is always upright at normal stretch, so only weight is
/// carried into the query.
pub fn fallback_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

    usvg::FontResolver {
        select_font: Box::new(|font, fontdb| {
            let families: Vec<Family<'_>> = font
                .families()
                .iter()
                .filter_map(|family| match family {
                    usvg::FontFamily::Named(name) => Some(Family::Name(name)),
                    _ => None,
                })
                .chain(std::iter::once(Family::SansSerif))
                .collect();

            let query = Query {
                families: &families,
                weight: Weight(font.weight()),
                stretch: Stretch::Normal,
                style: Style::Normal,
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|face| face.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
