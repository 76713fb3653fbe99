use core::fmt;

/// One geographic coordinate in degrees, as stored in the placemark file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WGS84Point {
    pub lon: f64,
    pub lat: f64,
    pub ele: Option<f64>,
}

impl WGS84Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            ele: None,
        }
    }

    /// Render order for map widgets. Returns a fresh pair; the point is left as is.
    pub fn lat_lon(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    pub fn geo(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }
}

impl From<&kml::types::Coord> for WGS84Point {
    fn from(c: &kml::types::Coord) -> Self {
        WGS84Point {
            lon: c.x,
            lat: c.y,
            ele: c.z,
        }
    }
}

impl fmt::Display for WGS84Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = match self.ele {
            Some(z) => format!("{:.1}", z),
            None => "None".to_string(),
        };
        write!(
            f,
            "wgs(lat: {:.5}, lon: {:.5}, ele: {})",
            self.lat, self.lon, e
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WGS84BoundingBox {
    pub min: WGS84Point,
    pub max: WGS84Point,
}

impl WGS84BoundingBox {
    pub fn from(p1: &WGS84Point, p2: &WGS84Point) -> Self {
        let min = WGS84Point::new(p1.lon.min(p2.lon), p1.lat.min(p2.lat));
        let max = WGS84Point::new(p1.lon.max(p2.lon), p1.lat.max(p2.lat));
        Self { min, max }
    }

    /// Smallest box holding every point, or `None` for an empty input.
    pub fn around<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a WGS84Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from(first, first), |bbox, curr| bbox.extend(curr)))
    }

    pub fn extend(&self, w: &WGS84Point) -> Self {
        WGS84BoundingBox {
            min: WGS84Point::new(self.min.lon.min(w.lon), self.min.lat.min(w.lat)),
            max: WGS84Point::new(self.max.lon.max(w.lon), self.max.lat.max(w.lat)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.lon - self.min.lon
    }

    pub fn height(&self) -> f64 {
        self.max.lat - self.min.lat
    }
}

impl fmt::Display for WGS84BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wgsbbox(min: {}, max: {})", self.min, self.max)
    }
}
