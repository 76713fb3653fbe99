//! Placemark (KML) ingestion and analysis.
//!
//! Raw markup is parsed into a document tree, flattened into a
//! [`GeometryCollection`], and analysed into a per-kind [`Summary`] and
//! geodesic line lengths ([`DetailRecord`]).

pub mod convert;
pub mod error;
pub mod export;
pub mod geometry;
pub mod length;
pub mod overlay;
pub mod point;
pub mod read_kml;
pub mod session;
pub mod summary;
pub mod svg;

pub use error::{KmlError, Result};
pub use geometry::{Feature, Geometry, GeometryCollection, GeometryKind};
pub use length::{DetailRecord, compute_lengths};
pub use session::{LoadTicket, Session, load};
pub use summary::{Summary, summarize};
