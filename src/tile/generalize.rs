use crate::error::Tm35Error;
use crate::grid::constants::MAX_LEVEL;
use crate::tile::level::tile_level;

/// Replaces a quadrant digit or block letter with the half-suffix marker for
/// the west (`L`) or east (`R`) half of its parent sheet.
fn half_marker(c: char) -> char {
    match c {
        // Quadrant digits 1/2 label the west column of the 2x2 grid.
        '1' | '2' => 'L',
        // Block letters A-D label the west half of the 4x2 grid.
        'A'..='D' => 'L',
        _ => 'R',
    }
}

/// Generates the ten increasingly precise variants of a full-precision
/// sheet name, indexed by hierarchy level 0..9.
///
/// Even levels are prefix truncations of the name; odd levels replace the
/// last character of the next even level's truncation with an `L`/`R`
/// half-suffix.
///
/// # Example
/// ```
/// use tm35fin_rs::tile_variants;
///
/// # fn main() -> Result<(), tm35fin_rs::Tm35Error> {
/// let variants = tile_variants("L3324B4")?;
/// assert_eq!(variants[0], "L3");
/// assert_eq!(variants[5], "L332R");
/// assert_eq!(variants[9], "L3324B4");
/// # Ok(())
/// # }
/// ```
pub fn tile_variants(tile: &str) -> Result<[String; 10], Tm35Error> {
    let level = tile_level(tile)?;
    if level != MAX_LEVEL {
        return Err(Tm35Error::InvalidLevel(level));
    }

    Ok(std::array::from_fn(|level| variant_at(tile, level)))
}

/// The level-`level` variant of a validated full-precision name.
fn variant_at(tile: &str, level: usize) -> String {
    if level == 9 {
        return tile.to_string();
    }

    // Even levels 0,2,4,6,8 truncate to lengths 2..6.
    let truncated_len = level / 2 + 2;
    if level % 2 == 0 {
        return tile[..truncated_len].to_string();
    }

    // Odd levels halve the next even level's sheet: take its truncation and
    // swap the final symbol for the half marker.
    let parent = &tile[..truncated_len + 1];
    let last = parent.chars().next_back().unwrap_or('1');
    let mut variant = parent[..parent.len() - 1].to_string();
    variant.push(half_marker(last));
    variant
}
