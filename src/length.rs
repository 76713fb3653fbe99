use crate::geometry::{Geometry, GeometryCollection, GeometryKind};
use crate::point::WGS84Point;
use core::fmt;
use geo::{Distance, Haversine};

/// Length of one line-like feature of the collection.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRecord {
    pub kind: GeometryKind,
    pub length_km: f64,
}

impl fmt::Display for DetailRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2} km", self.kind, self.length_km)
    }
}

/// Cumulative great-circle distance along the path, in kilometers.
///
/// Paths with fewer than two points have length zero.
pub fn path_length_km(path: &[WGS84Point]) -> f64 {
    let meters: f64 = path
        .windows(2)
        .map(|w| Haversine.distance(w[0].geo(), w[1].geo()))
        .sum();
    meters / 1000.0
}

impl Geometry {
    /// Geodesic length for line-like geometries, `None` otherwise.
    ///
    /// The parts of a multi-line are measured separately and added up.
    pub fn length_km(&self) -> Option<f64> {
        if !self.is_linelike() {
            return None;
        }
        Some(self.lines().into_iter().map(path_length_km).sum())
    }
}

/// One record per line-like feature, in collection order.
pub fn compute_lengths(gc: &GeometryCollection) -> Vec<DetailRecord> {
    gc.iter()
        .filter_map(|feature| {
            let length_km = feature.geometry.length_km()?;
            Some(DetailRecord {
                kind: feature.kind(),
                length_km,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lon: f64, lat: f64) -> WGS84Point {
        WGS84Point::new(lon, lat)
    }

    #[test]
    fn one_degree_of_latitude() {
        let gc: GeometryCollection = vec![Geometry::LineString(vec![p(0.0, 0.0), p(0.0, 1.0)])]
            .into_iter()
            .collect();
        let details = compute_lengths(&gc);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].kind, GeometryKind::LineString);
        assert!((details[0].length_km - 111.19).abs() < 0.5, "{}", details[0].length_km);
    }

    #[test]
    fn multilinestring_is_sum_of_parts() {
        let a = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)];
        let b = vec![p(30.0, 40.0), p(31.0, 41.0)];
        let multi = Geometry::MultiLineString(vec![a.clone(), b.clone()]);
        let expected = path_length_km(&a) + path_length_km(&b);
        let got = multi.length_km().unwrap();
        assert!((got - expected).abs() < 1e-9);
        // the gap between the two parts is not measured
        let joined: Vec<_> = a.into_iter().chain(b).collect();
        assert!(path_length_km(&joined) > got);
    }

    #[test]
    fn degenerate_paths_are_zero() {
        assert_eq!(path_length_km(&[]), 0.0);
        assert_eq!(path_length_km(&[p(10.0, 10.0)]), 0.0);
        let gc: GeometryCollection = vec![
            Geometry::LineString(vec![]),
            Geometry::MultiLineString(vec![vec![p(1.0, 1.0)], vec![]]),
        ]
        .into_iter()
        .collect();
        let details = compute_lengths(&gc);
        assert_eq!(details.len(), 2);
        assert!(details.iter().all(|d| d.length_km == 0.0));
    }

    #[test]
    fn only_linelike_features_are_reported() {
        let gc: GeometryCollection = vec![
            Geometry::Point(p(0.0, 0.0)),
            Geometry::LineString(vec![p(0.0, 0.0), p(1.0, 0.0)]),
            Geometry::Polygon(vec![vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)]]),
            Geometry::MultiLineString(vec![vec![p(0.0, 0.0), p(0.0, 2.0)]]),
        ]
        .into_iter()
        .collect();
        let details = compute_lengths(&gc);
        let kinds: Vec<_> = details.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![GeometryKind::LineString, GeometryKind::MultiLineString]
        );
        assert_eq!(details, compute_lengths(&gc));
    }

    #[test]
    fn display_rounds_to_two_decimals() {
        let record = DetailRecord {
            kind: GeometryKind::LineString,
            length_km: 111.19492664,
        };
        assert_eq!(record.to_string(), "LineString: 111.19 km");
    }
}
