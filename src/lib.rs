//! Vault share cards: fixed-size story images for saved playlists.
//!
//! A card is a vertical gradient, an optional dimmed thumbnail underlay, and centered text
//! describing the playlist. The public API is small:
//!
//! - Build a [`PlaylistRecord`] (or load one with [`PlaylistRecord::from_json`])
//! - Create a [`CardRenderer`] once and call [`CardRenderer::render`] for PNG bytes
//! - Or use [`export_share_card`] to get a named download and notify a [`ShareSink`]
#![forbid(unsafe_code)]

mod assets;
mod encode;
mod foundation;
mod layout;
mod model;
mod render;
mod share;

pub use crate::foundation::core::{Canvas, Rgba8};
pub use crate::foundation::error::{VaultError, VaultResult};

pub use crate::model::link::{LinkInfo, parse_link};
pub use crate::model::playlist::{Platform, PlaylistRecord, ThumbnailRef};

pub use crate::assets::decode::{PreparedImage, decode_cover};
pub use crate::assets::fonts::{FontConfig, build_fontdb};
pub use crate::assets::thumbnail::{ThumbnailStore, normalize_upload_path};

pub use crate::layout::card::{
    BRAND_TEXT, CANVAS_HEIGHT, CANVAS_WIDTH, CARD_CANVAS, CTA_TEXT, CardLayout, FONT_FAMILY,
    GRADIENT_BOTTOM, GRADIENT_TOP, OVERLAY_OPACITY, TITLE_MAX_WIDTH, TITLE_SIZE,
    THUMBNAIL_OPACITY, TextItem, TextRole,
};
pub use crate::layout::wrap::{AdvanceTable, TextMeasure, wrap_words};

pub use crate::encode::png::{PNG_QUALITY, encode_png};
pub use crate::render::card::{CardFrame, CardRenderer};
pub use crate::render::surface::Surface;
pub use crate::render::text::overlay_markup;
pub use crate::share::export::{
    SHARE_CONTENT_TYPE, ShareCardExport, ShareCounter, ShareSink, export_share_card,
    share_filename,
};
