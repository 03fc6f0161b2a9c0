mod anchor;
mod decode;
mod generalize;
mod level;

pub use anchor::anchor_fractions;
pub use decode::tile_to_xy;
pub use generalize::tile_variants;
pub use level::{tile_level, tile_size};
