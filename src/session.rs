//! Pipeline orchestration: one loaded file plus the two toggleable views.

use crate::convert::convert;
use crate::geometry::GeometryCollection;
use crate::length::{DetailRecord, compute_lengths};
use crate::read_kml;
use crate::summary::{Summary, summarize};
use std::path::Path;

/// Parse and convert raw markup. Malformed text gives an empty collection.
pub fn load(content: &str) -> GeometryCollection {
    convert(&read_kml::parse(content))
}

/// Handed out when a file read starts; only the newest ticket may publish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Default)]
pub struct Session {
    collection: Option<GeometryCollection>,
    summary: Option<Summary>,
    details: Option<Vec<DetailRecord>>,
    generation: u64,
    completed: Option<LoadTicket>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(&self) -> Option<&GeometryCollection> {
        self.collection.as_ref()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn details(&self) -> Option<&[DetailRecord]> {
        self.details.as_deref()
    }

    /// Replace the current collection and hide both views.
    pub fn load(&mut self, content: &str) -> &GeometryCollection {
        self.generation += 1;
        self.publish(load(content))
    }

    /// Read and load a `.kml` file. Input errors leave the session untouched.
    pub fn load_file(&mut self, path: &Path) -> Option<&GeometryCollection> {
        match read_kml::read_file(path) {
            Ok(content) => Some(self.load(&content)),
            Err(e) => {
                log::warn!("session: ignoring {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Start a file read. A later ticket supersedes this one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Publish the text read for `ticket`. Returns false when a newer read
    /// started in the meantime, or the ticket was already used, and the text
    /// was dropped.
    pub fn complete_load(&mut self, ticket: LoadTicket, content: &str) -> bool {
        if ticket.0 != self.generation || self.completed == Some(ticket) {
            log::debug!(
                "session: dropping stale load {} (current {})",
                ticket.0,
                self.generation
            );
            return false;
        }
        self.completed = Some(ticket);
        self.publish(load(content));
        true
    }

    fn publish(&mut self, collection: GeometryCollection) -> &GeometryCollection {
        log::info!("session: loaded {} features", collection.len());
        if let Some(bbox) = collection.wgsbbox() {
            log::debug!("session: {}", bbox);
        }
        self.summary = None;
        self.details = None;
        self.collection.insert(collection)
    }

    /// Show or hide the per-kind counts. Nothing is shown before a load.
    pub fn toggle_summary(&mut self) -> Option<&Summary> {
        self.summary = match (self.summary.take(), &self.collection) {
            (Some(_), _) | (None, None) => None,
            (None, Some(gc)) => Some(summarize(gc)),
        };
        self.summary.as_ref()
    }

    /// Show or hide the line lengths. Nothing is shown before a load.
    pub fn toggle_details(&mut self) -> Option<&[DetailRecord]> {
        self.details = match (self.details.take(), &self.collection) {
            (Some(_), _) | (None, None) => None,
            (None, Some(gc)) => Some(compute_lengths(gc)),
        };
        self.details.as_deref()
    }
}
