use crate::coord::Coordinate;
use crate::error::Tm35Error;
use crate::grid::constants::{
    BLOCK_GRID, GRID_ORIGIN, MAX_LEVEL, QUAD_GRID, ROW_LETTERS, SIZE_5K, SIZE_10K, SIZE_25K,
    SIZE_50K, SIZE_100K, SIZE_200K,
};
use crate::tile::tile_variants;

/// Floor-division quotient with its non-negative remainder.
pub(crate) fn divmod(a: f64, b: f64) -> (f64, f64) {
    let q = (a / b).floor();
    (q, a - q * b)
}

/// Converts a TM35FIN coordinate to the seven symbols of its full-precision
/// sheet name, coarsest first.
///
/// The offsets from the grid origin are partitioned through six nested
/// divmod steps (200k, 100k, 50k, 25k, 10k, 5k); each quotient selects a
/// symbol and each remainder feeds the next finer step.
///
/// Returns `CoordinateOutOfBounds` when the 200k row or column index falls
/// outside its alphabet. The finer quadrant/block indices are always in
/// range: remainders are non-negative and every divisor halves exactly.
pub fn xy_to_tile_parts(coord: &impl Coordinate) -> Result<[char; 7], Tm35Error> {
    let north = coord.y() - GRID_ORIGIN.1;
    let east = coord.x() - GRID_ORIGIN.0;

    let (row, north) = divmod(north, SIZE_200K.1);
    let (col, east) = divmod(east, SIZE_200K.0);

    if row < 0.0 || row >= ROW_LETTERS.len() as f64 || col < 2.0 || col > 6.0 {
        return Err(Tm35Error::CoordinateOutOfBounds {
            easting: coord.x(),
            northing: coord.y(),
        });
    }

    let (n100, north) = divmod(north, SIZE_100K.1);
    let (e100, east) = divmod(east, SIZE_100K.0);

    let (n50, north) = divmod(north, SIZE_50K.1);
    let (e50, east) = divmod(east, SIZE_50K.0);

    let (n25, north) = divmod(north, SIZE_25K.1);
    let (e25, east) = divmod(east, SIZE_25K.0);

    let (n10, north) = divmod(north, SIZE_10K.1);
    let (e10, east) = divmod(east, SIZE_10K.0);

    let (n5, _) = divmod(north, SIZE_5K.1);
    let (e5, _) = divmod(east, SIZE_5K.0);

    Ok([
        ROW_LETTERS[row as usize],
        (b'0' + col as u8) as char,
        QUAD_GRID[e100 as usize][n100 as usize],
        QUAD_GRID[e50 as usize][n50 as usize],
        QUAD_GRID[e25 as usize][n25 as usize],
        BLOCK_GRID[e10 as usize][n10 as usize],
        QUAD_GRID[e5 as usize][n5 as usize],
    ])
}

/// Converts a TM35FIN coordinate to the sheet name covering it at the given
/// hierarchy level (0 coarsest, 9 finest).
///
/// # Example
/// ```
/// use tm35fin_rs::xy_to_tile;
///
/// # fn main() -> Result<(), tm35fin_rs::Tm35Error> {
/// assert_eq!(xy_to_tile(&(239645.0, 6712052.0), 9)?, "L3324B4");
/// assert_eq!(xy_to_tile(&(239645.0, 6712052.0), 6)?, "L3324");
/// # Ok(())
/// # }
/// ```
pub fn xy_to_tile(coord: &impl Coordinate, level: u8) -> Result<String, Tm35Error> {
    if level > MAX_LEVEL {
        return Err(Tm35Error::InvalidLevel(level));
    }

    let name: String = xy_to_tile_parts(coord)?.iter().collect();
    if level < MAX_LEVEL {
        let variants = tile_variants(&name)?;
        Ok(variants[level as usize].clone())
    } else {
        Ok(name)
    }
}
