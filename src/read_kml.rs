use crate::error::{KmlError, Result};
use kml::{Kml, KmlDocument};
use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Parse placemark markup into a document tree.
///
/// Malformed markup never surfaces as an error: the parse failure is logged
/// and an empty document is returned, so the rest of the pipeline sees an
/// empty collection instead of a fault. This includes panics raised inside
/// the `kml` reader, e.g. on a `<Point>` with empty coordinates.
pub fn parse(content: &str) -> Kml {
    match panic::catch_unwind(AssertUnwindSafe(|| content.parse::<Kml>())) {
        Ok(Ok(kml)) => kml,
        Ok(Err(e)) => {
            log::warn!("kml: unreadable markup, using empty document: {}", e);
            empty_document()
        }
        Err(payload) => {
            log::warn!(
                "kml: reader panicked, using empty document: {}",
                panic_message(payload.as_ref())
            );
            empty_document()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic"
    }
}

pub fn empty_document() -> Kml {
    Kml::KmlDocument(KmlDocument::default())
}

/// Read a whole `.kml` file as UTF-8 text.
pub fn read_file(path: &Path) -> Result<String> {
    let is_kml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("kml"));
    if !is_kml {
        return Err(KmlError::UnsupportedExtension {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| KmlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("kml: read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_yields_no_geometry() {
        for content in ["", "not valid xml", "<kml><Document><Placemark>", "<<>>"] {
            let doc = parse(content);
            assert!(crate::convert::convert(&doc).is_empty(), "{:?}", content);
        }
    }

    #[test]
    fn empty_point_coordinates_do_not_panic() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark><Point><coordinates>1,1</coordinates></Point></Placemark>
    <Placemark><Point><coordinates></coordinates></Point></Placemark>
  </Document>
</kml>"#,
        );
        assert!(crate::convert::convert(&doc).is_empty());
    }

    #[test]
    fn non_numeric_coordinate_drops_whole_document() {
        let doc = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark><Point><coordinates>1,1</coordinates></Point></Placemark>
    <Placemark><Point><coordinates>abc,def</coordinates></Point></Placemark>
  </Document>
</kml>"#,
        );
        assert!(crate::convert::convert(&doc).is_empty());
    }

    #[test]
    fn empty_document_has_no_elements() {
        match empty_document() {
            Kml::KmlDocument(doc) => assert!(doc.elements.is_empty()),
            other => panic!("unexpected tree: {:?}", other),
        }
    }

    #[test]
    fn parses_document() {
        let kml = parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <Point><coordinates>1,2</coordinates></Point>
    </Placemark>
  </Document>
</kml>"#,
        );
        match kml {
            Kml::KmlDocument(doc) => assert_eq!(doc.elements.len(), 1),
            other => panic!("unexpected tree: {:?}", other),
        }
    }

    #[test]
    fn read_file_rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.gpx");
        fs::write(&path, "<gpx/>").unwrap();
        assert!(matches!(
            read_file(&path),
            Err(KmlError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn read_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.KML");
        assert!(matches!(read_file(&path), Err(KmlError::Io { .. })));
    }
}
