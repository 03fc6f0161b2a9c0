use geo_types::{Coord, LineString, Point, Polygon, Rect};

/// Builds the axis-aligned extent of a sheet from its lower-left corner and
/// size in meters.
pub fn sheet_rect(sw: &Point<f64>, width: f64, height: f64) -> Rect<f64> {
    Rect::new(
        Coord {
            x: sw.x(),
            y: sw.y(),
        },
        Coord {
            x: sw.x() + width,
            y: sw.y() + height,
        },
    )
}

/// Builds a closed polygon ring for a sheet extent, wound counter-clockwise
/// from the lower-left corner.
pub fn sheet_polygon(sw: &Point<f64>, width: f64, height: f64) -> Polygon<f64> {
    let (x, y) = (sw.x(), sw.y());
    let coords = vec![
        Coord { x, y },
        Coord { x: x + width, y },
        Coord {
            x: x + width,
            y: y + height,
        },
        Coord { x, y: y + height },
        Coord { x, y },
    ];

    Polygon::new(LineString::from(coords), vec![])
}
