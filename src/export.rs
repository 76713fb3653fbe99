use crate::geometry::{Geometry, GeometryCollection};
use crate::point::WGS84Point;
use geojson::{Feature, FeatureCollection, JsonObject, Value};

fn position(p: &WGS84Point) -> Vec<f64> {
    match p.ele {
        Some(z) => vec![p.lon, p.lat, z],
        None => vec![p.lon, p.lat],
    }
}

fn path(ps: &[WGS84Point]) -> Vec<Vec<f64>> {
    ps.iter().map(position).collect()
}

fn paths(rings: &[Vec<WGS84Point>]) -> Vec<Vec<Vec<f64>>> {
    rings.iter().map(|r| path(r)).collect()
}

fn value(g: &Geometry) -> Value {
    match g {
        Geometry::Point(p) => Value::Point(position(p)),
        Geometry::MultiPoint(ps) => Value::MultiPoint(path(ps)),
        Geometry::LineString(ps) => Value::LineString(path(ps)),
        Geometry::MultiLineString(lines) => Value::MultiLineString(paths(lines)),
        Geometry::Polygon(rings) => Value::Polygon(paths(rings)),
        Geometry::MultiPolygon(polygons) => {
            Value::MultiPolygon(polygons.iter().map(|rings| paths(rings)).collect())
        }
        Geometry::GeometryCollection(members) => Value::GeometryCollection(
            members
                .iter()
                .map(|m| geojson::Geometry::new(value(m)))
                .collect(),
        ),
    }
}

/// GeoJSON view of the collection, one feature per entry, same order.
pub fn to_feature_collection(gc: &GeometryCollection) -> FeatureCollection {
    let features = gc
        .iter()
        .map(|f| {
            let properties: JsonObject = f
                .properties
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect();
            Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(value(&f.geometry))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::load;

    #[test]
    fn exports_types_properties_and_altitude() {
        let gc = load(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Camp</name>
      <Point><coordinates>7.5,46.1,2100</coordinates></Point>
    </Placemark>
    <Placemark>
      <LineString><coordinates>0,0 0,1</coordinates></LineString>
    </Placemark>
  </Document>
</kml>"#,
        );
        let fc = to_feature_collection(&gc);
        let json: serde_json::Value = serde_json::from_str(&fc.to_string()).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        let features = json["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["geometry"]["type"], "Point");
        assert_eq!(
            features[0]["geometry"]["coordinates"],
            serde_json::json!([7.5, 46.1, 2100.0])
        );
        assert_eq!(features[0]["properties"]["name"], "Camp");
        assert_eq!(features[1]["geometry"]["type"], "LineString");
    }

    #[test]
    fn empty_collection_exports_no_features() {
        let fc = to_feature_collection(&GeometryCollection::default());
        assert!(fc.features.is_empty());
    }
}
