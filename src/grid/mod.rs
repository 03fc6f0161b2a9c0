pub mod constants;
mod partition;

pub use constants::{
    BLOCK_GRID, GRID_ORIGIN, LEVEL_SIZES, MAX_LEVEL, QUAD_GRID, ROW_LETTERS, scale_size,
};
pub use partition::{xy_to_tile, xy_to_tile_parts};
