//! Map overlay items for a renderer that expects (lat, lon) positions.

use crate::geometry::{Geometry, GeometryCollection};
use crate::point::WGS84Point;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Marker((f64, f64)),
    Polyline(Vec<(f64, f64)>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    /// Index of the source feature in the collection.
    pub index: usize,
    pub label: String,
    pub shape: Shape,
}

impl Overlay {
    pub fn positions(&self) -> &[(f64, f64)] {
        match &self.shape {
            Shape::Marker(p) => std::slice::from_ref(p),
            Shape::Polyline(ps) => ps,
        }
    }
}

fn polyline(path: &[WGS84Point]) -> Shape {
    Shape::Polyline(path.iter().map(WGS84Point::lat_lon).collect())
}

/// Points become markers, each line part a polyline; other kinds are not drawn.
pub fn overlays(gc: &GeometryCollection) -> Vec<Overlay> {
    let mut ret = Vec::new();
    for (index, feature) in gc.iter().enumerate() {
        let label = feature
            .name()
            .unwrap_or(feature.kind().as_str())
            .to_string();
        let shapes = match &feature.geometry {
            Geometry::Point(p) => vec![Shape::Marker(p.lat_lon())],
            g if g.is_linelike() => g.lines().into_iter().map(polyline).collect(),
            _ => Vec::new(),
        };
        ret.extend(shapes.into_iter().map(|shape| Overlay {
            index,
            label: label.clone(),
            shape,
        }));
    }
    log::trace!("overlays: {} items for {} features", ret.len(), gc.len());
    ret
}
