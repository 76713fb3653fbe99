use crate::geometry::{GeometryCollection, GeometryKind};
use std::collections::BTreeMap;

/// Occurrence count per geometry kind.
pub type Summary = BTreeMap<GeometryKind, usize>;

pub fn summarize(gc: &GeometryCollection) -> Summary {
    let mut summary = Summary::new();
    for feature in gc {
        *summary.entry(feature.kind()).or_insert(0) += 1;
    }
    log::trace!("summary: {:?}", summary);
    summary
}
