use crate::coord::Coordinate;
use crate::error::Tm35Error;
use crate::geom::{sheet_polygon, sheet_rect};
use crate::grid::constants::{LEVEL_SIZES, MAX_LEVEL};
use crate::grid::xy_to_tile;
use crate::tile::{tile_level, tile_to_xy, tile_variants};
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

/// A single map sheet in the ETRS-TM35FIN sheet division.
///
/// Each `MapSheet` is one rectangular sheet of the national hierarchy, with
/// its name, hierarchy level (0-9) and lower-left corner in TM35FIN planar
/// coordinates.
///
/// # Example
///
/// ```
/// use tm35fin_rs::MapSheet;
///
/// # fn main() -> Result<(), tm35fin_rs::Tm35Error> {
/// // The sheet covering a point in Turku at full precision
/// let sheet = MapSheet::from_xy(&(239645.0, 6712052.0), 9)?;
/// assert_eq!(sheet.name, "L3324B4");
///
/// let polygon = sheet.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSheet {
    /// Sheet name, e.g. "L3324B4"
    pub name: String,
    /// Hierarchy level (0-9), where higher values mean smaller sheets
    pub level: u8,
    /// Lower-left (south-west) corner in TM35FIN coordinates (EPSG:3067)
    pub sw: Point<f64>,
}

impl MapSheet {
    /// Create a MapSheet from a sheet name
    ///
    /// # Example
    /// ```
    /// use tm35fin_rs::MapSheet;
    ///
    /// # fn main() -> Result<(), tm35fin_rs::Tm35Error> {
    /// let sheet = MapSheet::from_name("L3324")?;
    /// assert_eq!(sheet.level, 6);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_name(name: &str) -> Result<Self, Tm35Error> {
        let level = tile_level(name)?;
        let sw = tile_to_xy(name, "sw")?;

        Ok(Self {
            name: name.to_string(),
            level,
            sw,
        })
    }

    /// Create a MapSheet covering a TM35FIN coordinate at the given level
    ///
    /// # Example
    /// ```
    /// use tm35fin_rs::MapSheet;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), tm35fin_rs::Tm35Error> {
    /// // From tuple
    /// let sheet = MapSheet::from_xy(&(239645.0, 6712052.0), 6)?;
    /// // From Point
    /// let sheet = MapSheet::from_xy(&Point::new(239645.0, 6712052.0), 6)?;
    /// assert_eq!(sheet.name, "L3324");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_xy(coord: &impl Coordinate, level: u8) -> Result<Self, Tm35Error> {
        let name = xy_to_tile(coord, level)?;
        Self::from_name(&name)
    }

    /// Returns the easting (x-coordinate) of the lower-left corner in meters.
    pub fn easting(&self) -> f64 {
        self.sw.x()
    }

    /// Returns the northing (y-coordinate) of the lower-left corner in meters.
    pub fn northing(&self) -> f64 {
        self.sw.y()
    }

    /// Returns the sheet size (east, north) in meters.
    pub fn size(&self) -> (f64, f64) {
        LEVEL_SIZES[self.level as usize]
    }

    /// Returns the sheet width (east extent) in meters.
    pub fn width(&self) -> f64 {
        self.size().0
    }

    /// Returns the sheet height (north extent) in meters.
    pub fn height(&self) -> f64 {
        self.size().1
    }

    /// Returns the printed scale denominator in thousands for this sheet's
    /// level (e.g. 25 for a 1:25000 sheet), or `None` for the odd levels
    /// below 7 that have no printed counterpart.
    pub fn scale_denominator(&self) -> Option<u32> {
        match self.level {
            0 => Some(200),
            2 => Some(100),
            4 => Some(50),
            6 => Some(25),
            7 => Some(20),
            8 => Some(10),
            9 => Some(5),
            _ => None,
        }
    }

    /// Returns the center point of the sheet.
    pub fn center(&self) -> Point<f64> {
        let (width, height) = self.size();
        Point::new(self.sw.x() + width / 2.0, self.sw.y() + height / 2.0)
    }

    /// Returns the coordinate of a named anchor within the sheet.
    ///
    /// Accepts both compass keys (sw/n/ne/c/...) and grid keys (ll/u/ur/0/...).
    pub fn anchor(&self, key: &str) -> Result<Point<f64>, Tm35Error> {
        tile_to_xy(&self.name, key)
    }

    /// Whether a coordinate falls within the sheet.
    ///
    /// The extent is half-open (west/south edges in, east/north edges out),
    /// matching the encoder's partition.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        let (width, height) = self.size();
        coord.x() >= self.sw.x()
            && coord.x() < self.sw.x() + width
            && coord.y() >= self.sw.y()
            && coord.y() < self.sw.y() + height
    }

    /// Converts this sheet's extent to an axis-aligned rectangle.
    pub fn to_rect(&self) -> Rect<f64> {
        let (width, height) = self.size();
        sheet_rect(&self.sw, width, height)
    }

    /// Converts this sheet's extent to a polygon.
    ///
    /// Returns a `geo_types::Polygon` representing the sheet boundary,
    /// suitable for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let (width, height) = self.size();
        sheet_polygon(&self.sw, width, height)
    }

    /// Converts this sheet's extent to a GeoJSON geometry.
    pub fn to_geojson(&self) -> geojson::Geometry {
        geojson::Geometry::new(geojson::Value::from(&self.to_polygon()))
    }

    /// Converts this sheet's extent to a WKT polygon string.
    pub fn to_wkt(&self) -> String {
        self.to_polygon().wkt_string()
    }

    /// Returns the ten-sheet generalization chain of a full-precision sheet,
    /// coarsest first; entry `i` is the level-`i` ancestor.
    ///
    /// Fails with `InvalidLevel` for sheets below level 9.
    pub fn ancestors(&self) -> Result<Vec<MapSheet>, Tm35Error> {
        if self.level != MAX_LEVEL {
            return Err(Tm35Error::InvalidLevel(self.level));
        }

        tile_variants(&self.name)?
            .iter()
            .map(|name| MapSheet::from_name(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xy_tuple() -> Result<(), Tm35Error> {
        let sheet = MapSheet::from_xy(&(239645.0, 6712052.0), 9)?;

        assert_eq!(sheet.name, "L3324B4");
        assert_eq!(sheet.level, 9);
        assert_eq!((sheet.easting(), sheet.northing()), (239000.0, 6711000.0));
        Ok(())
    }

    #[test]
    fn test_from_xy_point() -> Result<(), Tm35Error> {
        let point = Point::new(239645.0, 6712052.0);
        let sheet = MapSheet::from_xy(&point, 9)?;

        assert_eq!(sheet.name, "L3324B4");
        Ok(())
    }

    #[test]
    fn test_from_name_matches_from_xy() -> Result<(), Tm35Error> {
        let direct = MapSheet::from_name("L3324B4")?;
        let encoded = MapSheet::from_xy(&(239645.0, 6712052.0), 9)?;

        assert_eq!(direct, encoded);
        Ok(())
    }

    #[test]
    fn test_contains_is_half_open() -> Result<(), Tm35Error> {
        let sheet = MapSheet::from_name("L3324B4")?;

        assert!(sheet.contains(&(239645.0, 6712052.0)));
        assert!(sheet.contains(&sheet.sw));
        // The north-east corner belongs to the neighbouring sheets.
        assert!(!sheet.contains(&sheet.anchor("ne")?));
        assert!(!sheet.contains(&(242000.0, 6711000.0)));
        Ok(())
    }

    #[test]
    fn test_center_and_anchor_agree() -> Result<(), Tm35Error> {
        let sheet = MapSheet::from_name("L3324")?;
        assert_eq!(sheet.center(), sheet.anchor("c")?);
        assert_eq!(sheet.sw, sheet.anchor("ll")?);
        Ok(())
    }

    #[test]
    fn test_scale_denominator() -> Result<(), Tm35Error> {
        assert_eq!(MapSheet::from_name("L3")?.scale_denominator(), Some(200));
        assert_eq!(MapSheet::from_name("L3324")?.scale_denominator(), Some(25));
        assert_eq!(MapSheet::from_name("L3324L")?.scale_denominator(), Some(20));
        assert_eq!(MapSheet::from_name("L3R")?.scale_denominator(), None);
        Ok(())
    }

    #[test]
    fn test_geometry_conversions() -> Result<(), Tm35Error> {
        let sheet = MapSheet::from_name("L3324B4")?;

        let rect = sheet.to_rect();
        assert_eq!(rect.width(), 3000.0);
        assert_eq!(rect.height(), 3000.0);

        let polygon = sheet.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);

        let wkt = sheet.to_wkt();
        assert!(wkt.starts_with("POLYGON"));

        match sheet.to_geojson().value {
            geojson::Value::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                assert_eq!(rings[0].len(), 5);
            }
            other => panic!("expected Polygon, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_ancestors_chain() -> Result<(), Tm35Error> {
        let sheet = MapSheet::from_xy(&(239645.0, 6712052.0), 9)?;
        let ancestors = sheet.ancestors()?;

        assert_eq!(ancestors.len(), 10);
        assert_eq!(ancestors[9], sheet);
        for (level, ancestor) in ancestors.iter().enumerate() {
            assert_eq!(ancestor.level, level as u8);
            // Every ancestor's region contains the finest sheet's corner.
            assert!(ancestor.contains(&sheet.sw), "level {}", level);
        }
        Ok(())
    }

    #[test]
    fn test_ancestors_rejects_coarse_sheets() -> Result<(), Tm35Error> {
        let sheet = MapSheet::from_name("L3324")?;
        assert_eq!(sheet.ancestors(), Err(Tm35Error::InvalidLevel(6)));
        Ok(())
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), Tm35Error> {
        let sheet = MapSheet::from_name("L3324B4")?;
        let json = serde_json::to_string(&sheet).expect("serialize");
        let back: MapSheet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(sheet, back);
        Ok(())
    }
}
