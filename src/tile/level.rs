use crate::error::Tm35Error;
use crate::grid::constants::{LEVEL_SIZES, ROW_LETTERS};

/// Hierarchy level for a stripped name length of 2..7 characters.
fn base_level(len: usize) -> Option<u8> {
    match len {
        2 => Some(0),
        3 => Some(2),
        4 => Some(4),
        5 => Some(6),
        6 => Some(8),
        7 => Some(9),
        _ => None,
    }
}

/// Whether `c` belongs to the alphabet of name position `position`.
fn legal_at(position: usize, c: char) -> bool {
    match position {
        0 => ROW_LETTERS.contains(&c),
        1 => matches!(c, '2'..='6'),
        2 | 3 | 4 | 6 => matches!(c, '1'..='4'),
        5 => matches!(c, 'A'..='H'),
        _ => false,
    }
}

/// Validates a sheet name and returns its hierarchy level (0-9).
///
/// An optional trailing `L`/`R` half-suffix raises the level of the stripped
/// name by one. Suffix legality is judged on the stripped length: the suffix
/// replaces a quadrant digit (lengths 3-5) or the block letter (length 6),
/// so a stripped length of 6 or 7 fails `InvalidSuffixPosition` (level-8 and
/// level-9 sheets cannot be halved into an odd level).
///
/// # Example
/// ```
/// use tm35fin_rs::tile_level;
///
/// # fn main() -> Result<(), tm35fin_rs::Tm35Error> {
/// assert_eq!(tile_level("L3324")?, 6);
/// assert_eq!(tile_level("L3324B4")?, 9);
/// assert_eq!(tile_level("L332R")?, 5);
/// # Ok(())
/// # }
/// ```
pub fn tile_level(tile: &str) -> Result<u8, Tm35Error> {
    let mut chars: Vec<char> = tile.chars().collect();

    let half = matches!(chars.last(), Some('L') | Some('R'));
    if half {
        chars.pop();
        if chars.len() == 6 || chars.len() == 7 {
            return Err(Tm35Error::InvalidSuffixPosition);
        }
    }

    let base = base_level(chars.len()).ok_or(Tm35Error::InvalidLength(chars.len()))?;

    for (position, &character) in chars.iter().enumerate() {
        if !legal_at(position, character) {
            return Err(Tm35Error::IllegalCharacter {
                character,
                position,
            });
        }
    }

    Ok(base + half as u8)
}

/// Returns the sheet size (east, north) in meters for a sheet name.
pub fn tile_size(tile: &str) -> Result<(f64, f64), Tm35Error> {
    let level = tile_level(tile)?;
    Ok(LEVEL_SIZES[level as usize])
}
