use crate::error::Tm35Error;

/// Fraction of the sheet width added for each anchor key (west edge 0,
/// center 0.5, east edge 1). Keys mix the compass family (sw/n/ne/...) and
/// the grid family (ll/u/ur/...); both are accepted everywhere.
const X_FRACTIONS: [(&str, f64); 18] = [
    ("ll", 0.0),
    ("l", 0.0),
    ("ul", 0.0),
    ("sw", 0.0),
    ("w", 0.0),
    ("nw", 0.0),
    ("u", 0.5),
    ("c", 0.5),
    ("d", 0.5),
    ("n", 0.5),
    ("0", 0.5),
    ("s", 0.5),
    ("lr", 1.0),
    ("r", 1.0),
    ("ur", 1.0),
    ("se", 1.0),
    ("e", 1.0),
    ("ne", 1.0),
];

/// Fraction of the sheet height added for each anchor key (south edge 0,
/// center 0.5, north edge 1). Kept separate from the x table: the two axes
/// resolve independently from the same key.
const Y_FRACTIONS: [(&str, f64); 18] = [
    ("ll", 0.0),
    ("d", 0.0),
    ("lr", 0.0),
    ("sw", 0.0),
    ("s", 0.0),
    ("se", 0.0),
    ("l", 0.5),
    ("c", 0.5),
    ("r", 0.5),
    ("w", 0.5),
    ("0", 0.5),
    ("e", 0.5),
    ("ul", 1.0),
    ("u", 1.0),
    ("ur", 1.0),
    ("nw", 1.0),
    ("n", 1.0),
    ("ne", 1.0),
];

fn lookup(table: &[(&str, f64)], key: &str) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolves an anchor key to its (x, y) fractions of the sheet size.
///
/// Keys are case-sensitive exact matches; a key must resolve on both axes
/// or the anchor is invalid.
pub fn anchor_fractions(anchor: &str) -> Result<(f64, f64), Tm35Error> {
    match (lookup(&X_FRACTIONS, anchor), lookup(&Y_FRACTIONS, anchor)) {
        (Some(fx), Some(fy)) => Ok((fx, fy)),
        _ => Err(Tm35Error::InvalidAnchor(anchor.to_string())),
    }
}
