/// Row letters for the 200k-scale sheet rows, south to north.
///
/// "I" and "O" are skipped by the national scheme to avoid confusion with
/// digits; row indexing starts at "K" on the southern edge.
pub const ROW_LETTERS: [char; 13] = [
    'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X',
];

/// Sheet sizes (east, north) in meters for each printed map scale.
pub const SIZE_200K: (f64, f64) = (192000.0, 96000.0);
pub const SIZE_100K: (f64, f64) = (96000.0, 48000.0);
pub const SIZE_50K: (f64, f64) = (48000.0, 24000.0);
pub const SIZE_25K: (f64, f64) = (24000.0, 12000.0);
pub const SIZE_20K: (f64, f64) = (12000.0, 12000.0);
pub const SIZE_10K: (f64, f64) = (6000.0, 6000.0);
pub const SIZE_5K: (f64, f64) = (3000.0, 3000.0);

/// Sheet size (east, north) in meters for a printed scale denominator in
/// thousands (200, 100, 50, 25, 20, 10, 5).
pub fn scale_size(scale: u32) -> Option<(f64, f64)> {
    match scale {
        200 => Some(SIZE_200K),
        100 => Some(SIZE_100K),
        50 => Some(SIZE_50K),
        25 => Some(SIZE_25K),
        20 => Some(SIZE_20K),
        10 => Some(SIZE_10K),
        5 => Some(SIZE_5K),
        _ => None,
    }
}

/// Sheet sizes (east, north) in meters indexed by hierarchy level (0-9).
///
/// Each odd level is the east/west half of the even level below it, so the
/// east size halves on odd steps and the north size on even steps.
pub const LEVEL_SIZES: [(f64, f64); 10] = [
    (192000.0, 96000.0),
    (96000.0, 96000.0),
    (96000.0, 48000.0),
    (48000.0, 48000.0),
    (48000.0, 24000.0),
    (24000.0, 24000.0),
    (24000.0, 12000.0),
    (12000.0, 12000.0),
    (6000.0, 6000.0),
    (3000.0, 3000.0),
];

/// 2x2 quadrant labels indexed by (east, north) sub-cell.
pub const QUAD_GRID: [[char; 2]; 2] = [['1', '2'], ['3', '4']];

/// 4x2 block labels for the 10k step, indexed by (east, north) sub-cell.
pub const BLOCK_GRID: [[char; 2]; 4] = [['A', 'B'], ['C', 'D'], ['E', 'F'], ['G', 'H']];

/// Lower-right reference point of sheet K4.
pub const K4_LOWER_RIGHT: (f64, f64) = (500000.0, 6570000.0);

/// Grid origin: the lower-left of the notional sheet "K0", five 200k sheet
/// widths west of the K4 reference. Every sheet name is addressed relative
/// to this point; it is a fixed constant of the scheme, not configuration.
pub const GRID_ORIGIN: (f64, f64) = (K4_LOWER_RIGHT.0 - 5.0 * SIZE_200K.0, K4_LOWER_RIGHT.1);

/// Maximum hierarchy level (full 7-character precision).
pub const MAX_LEVEL: u8 = 9;
