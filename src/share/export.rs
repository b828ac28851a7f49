use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    foundation::error::VaultResult, model::playlist::PlaylistRecord, render::card::CardRenderer,
};

pub const SHARE_CONTENT_TYPE: &str = "image/png";

/// Receives a notification for every card that was exported successfully.
pub trait ShareSink: Send + Sync {
    fn record_share(&self, record: &PlaylistRecord);
}

/// Sink that only counts shares.
#[derive(Debug, Default)]
pub struct ShareCounter {
    shares: AtomicU64,
}

impl ShareCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.shares.load(Ordering::Relaxed)
    }
}

impl ShareSink for ShareCounter {
    fn record_share(&self, _record: &PlaylistRecord) {
        self.shares.fetch_add(1, Ordering::Relaxed);
    }
}

/// A rendered card ready to hand to a share target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareCardExport {
    pub content_type: &'static str,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Suggested download name for `record`'s card.
pub fn share_filename(record: &PlaylistRecord) -> String {
    format!("vault-story-{}.png", record.id)
}

/// Validate, render and package `record`, then notify `sink`.
///
/// The sink is not called when validation or rendering fails.
#[tracing::instrument(skip_all, fields(id = %record.id))]
pub fn export_share_card(
    renderer: &CardRenderer,
    record: &PlaylistRecord,
    thumbnail: Option<&[u8]>,
    sink: &dyn ShareSink,
) -> VaultResult<ShareCardExport> {
    record.validate()?;
    let bytes = renderer.render(record, thumbnail)?;
    sink.record_share(record);
    tracing::info!(bytes = bytes.len(), "share card exported");
    Ok(ShareCardExport {
        content_type: SHARE_CONTENT_TYPE,
        filename: share_filename(record),
        bytes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/share/export.rs"]
mod tests;
