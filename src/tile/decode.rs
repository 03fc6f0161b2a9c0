use crate::error::Tm35Error;
use crate::grid::constants::{
    GRID_ORIGIN, LEVEL_SIZES, ROW_LETTERS, SIZE_5K, SIZE_10K, SIZE_25K, SIZE_50K, SIZE_100K,
    SIZE_200K,
};
use crate::tile::anchor::anchor_fractions;
use crate::tile::level::tile_level;
use geo_types::Point;

/// Converts a sheet name to the coordinate of a named anchor within it.
///
/// The name is walked coarsest to finest, accumulating easting/northing
/// offsets from the grid origin; a trailing `R` half-suffix contributes the
/// east half-offset of its step, `L` contributes nothing. The accumulated
/// point is the lower-left corner of the sheet, and the anchor fractions
/// then move it within the sheet's extent.
///
/// # Example
/// ```
/// use tm35fin_rs::tile_to_xy;
///
/// # fn main() -> Result<(), tm35fin_rs::Tm35Error> {
/// let sw = tile_to_xy("L3324B4", "sw")?;
/// assert_eq!((sw.x(), sw.y()), (239000.0, 6711000.0));
/// # Ok(())
/// # }
/// ```
pub fn tile_to_xy(tile: &str, anchor: &str) -> Result<Point<f64>, Tm35Error> {
    let level = tile_level(tile)?;
    let (fx, fy) = anchor_fractions(anchor)?;

    let chars: Vec<char> = tile.chars().collect();

    let row = ROW_LETTERS
        .iter()
        .position(|&r| r == chars[0])
        .ok_or(Tm35Error::IllegalCharacter {
            character: chars[0],
            position: 0,
        })?;
    let col = chars[1].to_digit(10).ok_or(Tm35Error::IllegalCharacter {
        character: chars[1],
        position: 1,
    })?;

    let mut x = GRID_ORIGIN.0 + col as f64 * SIZE_200K.0;
    let mut y = GRID_ORIGIN.1 + row as f64 * SIZE_200K.1;

    // Quadrant digits at the 100k/50k/25k steps: 3 and 4 sit in the east
    // column, 2 and 4 in the north row. A trailing R halves the step east.
    for (position, size) in [SIZE_100K, SIZE_50K, SIZE_25K].iter().enumerate() {
        if let Some(&c) = chars.get(position + 2) {
            if matches!(c, '3' | '4' | 'R') {
                x += size.0;
            }
            if matches!(c, '2' | '4') {
                y += size.1;
            }
        }
    }

    // Block letter at the 10k step: four east sub-columns, odd letters on
    // the north row. R here is the east half of the 25k sheet.
    if let Some(&c) = chars.get(5) {
        let sub_col = match c {
            'C' | 'D' => 1.0,
            'E' | 'F' | 'R' => 2.0,
            'G' | 'H' => 3.0,
            _ => 0.0,
        };
        x += SIZE_10K.0 * sub_col;
        if matches!(c, 'B' | 'D' | 'F' | 'H') {
            y += SIZE_10K.1;
        }
    }

    // Final quadrant digit at the 5k step; full-precision names never carry
    // a suffix here.
    if let Some(&c) = chars.get(6) {
        if matches!(c, '3' | '4') {
            x += SIZE_5K.0;
        }
        if matches!(c, '2' | '4') {
            y += SIZE_5K.1;
        }
    }

    let (width, height) = LEVEL_SIZES[level as usize];
    Ok(Point::new(x + width * fx, y + height * fy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turku_lower_left() -> Result<(), Tm35Error> {
        let sw = tile_to_xy("L3324B4", "sw")?;
        assert_eq!((sw.x(), sw.y()), (239000.0, 6711000.0));
        Ok(())
    }

    #[test]
    fn test_anchors_span_the_sheet() -> Result<(), Tm35Error> {
        // 5k sheets are 3000 x 3000 meters.
        let sw = tile_to_xy("L3324B4", "sw")?;
        let ne = tile_to_xy("L3324B4", "ne")?;
        let c = tile_to_xy("L3324B4", "c")?;

        assert_eq!((ne.x() - sw.x(), ne.y() - sw.y()), (3000.0, 3000.0));
        assert_eq!((c.x(), c.y()), (sw.x() + 1500.0, sw.y() + 1500.0));
        Ok(())
    }

    #[test]
    fn test_axes_resolve_independently() -> Result<(), Tm35Error> {
        let sw = tile_to_xy("L3324B4", "sw")?;
        let nw = tile_to_xy("L3324B4", "nw")?;
        let se = tile_to_xy("L3324B4", "se")?;

        assert_eq!(nw.x(), sw.x());
        assert_eq!(nw.y(), sw.y() + 3000.0);
        assert_eq!(se.x(), sw.x() + 3000.0);
        assert_eq!(se.y(), sw.y());
        Ok(())
    }

    #[test]
    fn test_grid_aliases_match_compass() -> Result<(), Tm35Error> {
        assert_eq!(tile_to_xy("L3324B4", "ll")?, tile_to_xy("L3324B4", "sw")?);
        assert_eq!(tile_to_xy("L3324B4", "ur")?, tile_to_xy("L3324B4", "ne")?);
        assert_eq!(tile_to_xy("L3324B4", "0")?, tile_to_xy("L3324B4", "c")?);
        Ok(())
    }

    #[test]
    fn test_coarse_sheet_corner() -> Result<(), Tm35Error> {
        // Row L is one 200k row up, column 3 three sheet widths east.
        let sw = tile_to_xy("L3", "sw")?;
        assert_eq!((sw.x(), sw.y()), (116000.0, 6666000.0));
        Ok(())
    }

    #[test]
    fn test_half_suffix_offsets() -> Result<(), Tm35Error> {
        // R on a level-0 sheet selects its east half (96000 m wide).
        let whole = tile_to_xy("L3", "sw")?;
        let east_half = tile_to_xy("L3R", "sw")?;
        assert_eq!(east_half.x(), whole.x() + 96000.0);
        assert_eq!(east_half.y(), whole.y());

        // L leaves the corner in place but halves the sheet width.
        let west_half = tile_to_xy("L3L", "ne")?;
        assert_eq!(west_half.x(), whole.x() + 96000.0);
        assert_eq!(west_half.y(), whole.y() + 96000.0);

        // R on a level-6 sheet is the east half at the 10k step.
        let sheet = tile_to_xy("L3324", "sw")?;
        let east = tile_to_xy("L3324R", "sw")?;
        assert_eq!(east.x(), sheet.x() + 12000.0);
        Ok(())
    }

    #[test]
    fn test_block_letter_offsets() -> Result<(), Tm35Error> {
        let base = tile_to_xy("L3324A", "sw")?;
        let north = tile_to_xy("L3324B", "sw")?;
        let east = tile_to_xy("L3324G", "sw")?;

        assert_eq!((north.x(), north.y()), (base.x(), base.y() + 6000.0));
        assert_eq!((east.x(), east.y()), (base.x() + 18000.0, base.y()));
        Ok(())
    }

    #[test]
    fn test_invalid_anchor() {
        assert_eq!(
            tile_to_xy("L3324B4", "north"),
            Err(Tm35Error::InvalidAnchor("north".to_string()))
        );
    }

    #[test]
    fn test_propagates_classifier_errors() {
        assert_eq!(
            tile_to_xy("Y3324B4", "sw"),
            Err(Tm35Error::IllegalCharacter {
                character: 'Y',
                position: 0,
            })
        );
    }
}
