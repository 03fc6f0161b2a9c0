/// Error type for tm35fin-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Tm35Error {
    /// The sheet name length (after stripping a half-suffix) is outside 2..7.
    InvalidLength(usize),
    /// A full-precision (7-character) sheet name carries an L/R half-suffix.
    InvalidSuffixPosition,
    /// A character does not belong to the alphabet of its name position.
    IllegalCharacter { character: char, position: usize },
    /// The anchor key is not a recognized corner/edge/center name.
    InvalidAnchor(String),
    /// The sheet level is outside the valid range (0-9), or an operation
    /// required a full-precision (level-9) name.
    InvalidLevel(u8),
    /// The coordinate falls outside the addressable national grid extent.
    CoordinateOutOfBounds { easting: f64, northing: f64 },
}

impl std::fmt::Display for Tm35Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tm35Error::InvalidLength(len) => {
                write!(f, "Sheet name length {} must be 2..7", len)
            }
            Tm35Error::InvalidSuffixPosition => {
                write!(f, "Sheet names of length 7 may not end in L or R")
            }
            Tm35Error::IllegalCharacter {
                character,
                position,
            } => {
                write!(f, "Illegal character {} (position {})", character, position)
            }
            Tm35Error::InvalidAnchor(key) => write!(f, "Invalid anchor: {}", key),
            Tm35Error::InvalidLevel(level) => write!(f, "Invalid sheet level: {}", level),
            Tm35Error::CoordinateOutOfBounds { easting, northing } => {
                write!(
                    f,
                    "Coordinate ({}, {}) is outside the addressable grid",
                    easting, northing
                )
            }
        }
    }
}

impl std::error::Error for Tm35Error {}
