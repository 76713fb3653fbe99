use crate::{
    overlay::{Overlay, Shape},
    point::{WGS84BoundingBox, WGS84Point},
};

pub struct SVG {
    wgs_bbox: WGS84BoundingBox,
    padding: f64,
    items: Vec<String>,
}

impl SVG {
    pub fn init(b: &WGS84BoundingBox) -> Self {
        Self {
            wgs_bbox: b.clone(),
            padding: 0.1,
            items: Vec::new(),
        }
    }

    /// Canvas covering every overlay position, `None` when there is nothing to draw.
    pub fn around(overlays: &[Overlay]) -> Option<Self> {
        let points: Vec<WGS84Point> = overlays
            .iter()
            .flat_map(|o| o.positions())
            .map(|&(lat, lon)| WGS84Point::new(lon, lat))
            .collect();
        WGS84BoundingBox::around(&points).map(|b| Self::init(&b))
    }

    pub fn add_overlay(&mut self, overlay: &Overlay) {
        let item = match &overlay.shape {
            Shape::Marker((lat, lon)) => {
                let (x, y) = self.transform(*lat, *lon);
                format!(
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="4" fill="red"><title>{}</title></circle>"#,
                    x,
                    y,
                    escape(&overlay.label)
                )
            }
            Shape::Polyline(positions) => {
                let s = positions
                    .iter()
                    .map(|(lat, lon)| {
                        let (x, y) = self.transform(*lat, *lon);
                        format!("{:.2},{:.2}", x, y)
                    })
                    .collect::<Vec<String>>()
                    .join(" ");
                format!(
                    r#"  <polyline points="{}" fill="none" stroke="blue" stroke-width="2"><title>{}</title></polyline>"#,
                    s,
                    escape(&overlay.label)
                )
            }
        };
        self.items.push(item);
    }

    pub fn render(&self) -> String {
        let mut svg =
            String::from(r#"<svg width="500" height="500" xmlns="http://www.w3.org/2000/svg">"#);
        svg.push('\n');
        for p in &self.items {
            svg.push_str(p);
            svg.push('\n');
        }
        svg.push_str("</svg>");
        svg
    }

    pub fn scale(&self) -> f64 {
        let padded_width = self.wgs_bbox.width() * (1.0 + 2.0 * self.padding);
        let padded_height = self.wgs_bbox.height() * (1.0 + 2.0 * self.padding);
        let extent = padded_width.max(padded_height);
        // a single marker has no extent
        if extent > 0.0 { 500.0 / extent } else { 1.0 }
    }

    fn transform(&self, lat: f64, lon: f64) -> (f64, f64) {
        let svg_x =
            (lon - self.wgs_bbox.min.lon + self.wgs_bbox.width() * self.padding) * self.scale();
        let svg_y = 500.0
            - (lat - self.wgs_bbox.min.lat + self.wgs_bbox.height() * self.padding) * self.scale();
        (svg_x, svg_y)
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
