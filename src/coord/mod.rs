use geo_types::Point;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// Coordinates are always ETRS-TM35FIN planar meters: x is the easting,
/// y is the northing.
pub trait Coordinate {
    /// Returns the x-coordinate (easting in meters).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (northing in meters).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (239645.0, 6712052.0);
        assert_eq!(tuple.x(), 239645.0);
        assert_eq!(tuple.y(), 6712052.0);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(239645.0, 6712052.0);
        assert_eq!(point.x(), 239645.0);
        assert_eq!(point.y(), 6712052.0);
    }
}
