use crate::geometry::{Feature, Geometry, GeometryCollection};
use crate::point::WGS84Point;
use kml::Kml;
use kml::types::{Coord, Geometry as KmlGeometry, LinearRing, Placemark};

/// Flatten every placemark of the document into one ordered collection.
///
/// Folders and documents may nest to any depth; their structure is dropped.
/// Placemarks without a supported geometry are skipped.
pub fn convert(kml: &Kml) -> GeometryCollection {
    let mut features = Vec::new();
    collect(kml, &mut features);
    log::debug!("convert: {} features", features.len());
    GeometryCollection::new(features)
}

fn collect(kml: &Kml, features: &mut Vec<Feature>) {
    match kml {
        Kml::KmlDocument(doc) => doc.elements.iter().for_each(|e| collect(e, features)),
        Kml::Document { elements, .. } => elements.iter().for_each(|e| collect(e, features)),
        Kml::Folder(z) => z.elements.iter().for_each(|e| collect(e, features)),
        Kml::Placemark(p) => {
            if let Some(feature) = placemark(p) {
                features.push(feature);
            }
        }
        _ => {}
    }
}

fn placemark(p: &Placemark) -> Option<Feature> {
    let Some(kml_geometry) = &p.geometry else {
        log::debug!("convert: skipping placemark {:?} without geometry", p.name);
        return None;
    };
    let Some(geometry) = geometry(kml_geometry) else {
        log::debug!("convert: skipping placemark {:?}, unsupported geometry", p.name);
        return None;
    };
    let mut feature = Feature::new(geometry);
    if let Some(name) = &p.name {
        feature.properties.insert("name".to_string(), name.clone());
    }
    if let Some(description) = &p.description {
        feature
            .properties
            .insert("description".to_string(), description.clone());
    }
    Some(feature)
}

fn geometry(g: &KmlGeometry) -> Option<Geometry> {
    match g {
        KmlGeometry::Point(p) => Some(Geometry::Point(WGS84Point::from(&p.coord))),
        KmlGeometry::LineString(ls) => Some(Geometry::LineString(coords(&ls.coords))),
        KmlGeometry::LinearRing(ring) => Some(Geometry::LineString(coords(&ring.coords))),
        KmlGeometry::Polygon(polygon) => Some(Geometry::Polygon(rings(
            &polygon.outer,
            &polygon.inner,
        ))),
        KmlGeometry::MultiGeometry(multi) => {
            multi_geometry(multi.geometries.iter().filter_map(geometry).collect())
        }
        _ => None,
    }
}

fn coords(c: &[Coord]) -> Vec<WGS84Point> {
    c.iter().map(WGS84Point::from).collect()
}

fn rings(outer: &LinearRing, inner: &[LinearRing]) -> Vec<Vec<WGS84Point>> {
    std::iter::once(outer)
        .chain(inner)
        .map(|r| coords(&r.coords))
        .collect()
}

/// Homogeneous members collapse into the matching multi-part geometry.
fn multi_geometry(mut members: Vec<Geometry>) -> Option<Geometry> {
    if members.len() <= 1 {
        return members.pop();
    }
    if members.iter().all(|m| matches!(m, Geometry::Point(_))) {
        return Some(Geometry::MultiPoint(
            members
                .into_iter()
                .filter_map(|m| match m {
                    Geometry::Point(p) => Some(p),
                    _ => None,
                })
                .collect(),
        ));
    }
    if members.iter().all(|m| matches!(m, Geometry::LineString(_))) {
        return Some(Geometry::MultiLineString(
            members
                .into_iter()
                .filter_map(|m| match m {
                    Geometry::LineString(line) => Some(line),
                    _ => None,
                })
                .collect(),
        ));
    }
    if members.iter().all(|m| matches!(m, Geometry::Polygon(_))) {
        return Some(Geometry::MultiPolygon(
            members
                .into_iter()
                .filter_map(|m| match m {
                    Geometry::Polygon(rings) => Some(rings),
                    _ => None,
                })
                .collect(),
        ));
    }
    Some(Geometry::GeometryCollection(members))
}
