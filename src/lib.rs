//! # tm35fin-rs
//!
//! The ETRS-TM35FIN map sheet division (karttalehtijako): conversion between
//! planar TM35FIN coordinates and the hierarchical sheet names used for
//! Finnish printed and digital map sheets, across ten precision levels from
//! the 192 km x 96 km rows down to 3 km x 3 km sheets.
//!
//! There are two main entry points.
//!
//! ### 1. `MapSheet` - Sheet value type
//!
//! ```
//! use tm35fin_rs::MapSheet;
//!
//! # fn main() -> Result<(), tm35fin_rs::Tm35Error> {
//! let sheet = MapSheet::from_xy(&(239645.0, 6712052.0), 9)?;
//! println!("{}", sheet.name);
//! let polygon = sheet.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Free conversion functions
//!
//! ```
//! use tm35fin_rs::{tile_level, tile_to_xy, xy_to_tile};
//! use geo_types::point;
//!
//! # fn main() -> Result<(), tm35fin_rs::Tm35Error> {
//! let pt = point! { x: 239645.0, y: 6712052.0 };
//! let name = xy_to_tile(&pt, 6)?;
//! assert_eq!(name, "L3324");
//! assert_eq!(tile_level(&name)?, 6);
//!
//! let sw = tile_to_xy(&name, "sw")?;
//! println!("({}, {})", sw.x(), sw.y());
//! # Ok(())
//! # }
//! ```
//!

pub mod coord;
pub mod error;
pub mod geom;
pub mod grid;
mod sheet;
pub mod tile;

pub use coord::Coordinate;
pub use error::Tm35Error;
pub use geom::{sheet_polygon, sheet_rect};
pub use grid::{
    BLOCK_GRID, GRID_ORIGIN, LEVEL_SIZES, MAX_LEVEL, QUAD_GRID, ROW_LETTERS, scale_size,
    xy_to_tile, xy_to_tile_parts,
};
pub use sheet::MapSheet;
pub use tile::{anchor_fractions, tile_level, tile_size, tile_to_xy, tile_variants};

pub use geo_types;
