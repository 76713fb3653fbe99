//! Normalized geometry model shared by every analysis step.

use crate::point::{WGS84BoundingBox, WGS84Point};
use core::fmt;
use std::collections::BTreeMap;

/// Geometry type tag. Displays as the canonical type name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }

    /// True for the single and multi-part line kinds.
    pub fn is_linelike(&self) -> bool {
        matches!(self, GeometryKind::LineString | GeometryKind::MultiLineString)
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(WGS84Point),
    MultiPoint(Vec<WGS84Point>),
    LineString(Vec<WGS84Point>),
    MultiLineString(Vec<Vec<WGS84Point>>),
    /// Outer ring first, then holes.
    Polygon(Vec<Vec<WGS84Point>>),
    MultiPolygon(Vec<Vec<Vec<WGS84Point>>>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    pub fn is_linelike(&self) -> bool {
        self.kind().is_linelike()
    }

    /// Line parts of a line-like geometry, empty for every other kind.
    pub fn lines(&self) -> Vec<&[WGS84Point]> {
        match self {
            Geometry::LineString(line) => vec![line.as_slice()],
            Geometry::MultiLineString(lines) => lines.iter().map(Vec::as_slice).collect(),
            _ => Vec::new(),
        }
    }

    /// Every coordinate, depth first.
    pub fn points(&self) -> Vec<&WGS84Point> {
        match self {
            Geometry::Point(p) => vec![p],
            Geometry::MultiPoint(ps) | Geometry::LineString(ps) => ps.iter().collect(),
            Geometry::MultiLineString(rings) | Geometry::Polygon(rings) => {
                rings.iter().flatten().collect()
            }
            Geometry::MultiPolygon(polygons) => polygons.iter().flatten().flatten().collect(),
            Geometry::GeometryCollection(members) => {
                members.iter().flat_map(|g| g.points()).collect()
            }
        }
    }
}

/// A geometry with the attributes of the placemark it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: BTreeMap<String, String>,
}

impl Feature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            properties: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> GeometryKind {
        self.geometry.kind()
    }

    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").map(String::as_str)
    }
}

/// Flat, ordered list of features in source document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryCollection {
    pub features: Vec<Feature>,
}

impl GeometryCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Extent of every coordinate in the collection, `None` when it has none.
    pub fn wgsbbox(&self) -> Option<WGS84BoundingBox> {
        WGS84BoundingBox::around(self.iter().flat_map(|f| f.geometry.points()))
    }
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Feature::new).collect())
    }
}

impl<'a> IntoIterator for &'a GeometryCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
