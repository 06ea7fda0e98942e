//! Edgemap computes Sobel edge-magnitude maps for 8-bit grayscale images.
//!
//! The pipeline convolves the two fixed 3x3 Sobel kernels over every interior
//! pixel, combines the directional responses into a per-pixel magnitude, and
//! linearly rescales the result into the display range `[0, 255]`. Traversal
//! order (row-major bands or cache-sized tiles) and worker count are runtime
//! configuration; every strategy produces bit-identical output. Parallel
//! execution is available via the `rayon` feature.

pub mod engine;
pub mod image;
pub mod kernel;
pub mod normalize;
pub mod pgm;
pub mod util;

mod trace;

pub use engine::{compute_gradients, edge_map, EngineConfig, Traversal, DEFAULT_TILE_SIZE};
pub use normalize::{max_interior, normalize};
pub use self::image::{GradientPlane, ImageView, OwnedImage};
pub use util::{EdgeMapError, EdgeMapResult};

#[cfg(feature = "image-io")]
pub use self::image::io;
