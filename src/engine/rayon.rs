//! Rayon-parallel traversal strategies (feature-gated).
//!
//! The interior is split into disjoint bands of output rows via
//! `par_chunks_mut`, so each worker writes only its own cells and the phase
//! needs no locks. Partitioning never changes results; both strategies are
//! bit-identical to their sequential counterparts.

use crate::image::ImageView;
use crate::kernel;
use crate::util::{EdgeMapError, EdgeMapResult};
use rayon::prelude::*;

/// Runs `op` inside a dedicated pool of exactly `threads` workers.
pub(crate) fn install<T: Send>(
    threads: usize,
    op: impl FnOnce() -> T + Send,
) -> EdgeMapResult<T> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|err| EdgeMapError::WorkerPool {
            reason: err.to_string(),
        })?;
    Ok(pool.install(op))
}

/// Row-parallel traversal: each worker takes a contiguous run of interior
/// rows and processes them end-to-end across the full width.
pub(crate) fn rows(image: ImageView<'_, u8>, out: &mut [u16]) {
    let width = image.width();
    let height = image.height();

    let interior = &mut out[width..width * (height - 1)];
    interior
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(i, dst)| {
            let y = i + 1;
            let [above, row, below] = image.neighborhood_rows(y).expect("interior row in bounds");
            for x in 1..width - 1 {
                let (sum_x, sum_y) = kernel::response_at(above, row, below, x);
                dst[x] = kernel::magnitude(sum_x, sum_y);
            }
        });
}

/// Tile-parallel traversal: workers take bands of `tile_size` interior rows;
/// within a band, each tile's rows are visited before the next tile.
pub(crate) fn tiles(image: ImageView<'_, u8>, out: &mut [u16], tile_size: usize) {
    let width = image.width();
    let height = image.height();

    // Clamping the band height avoids an overflowing chunk length for
    // larger-than-image tile sizes; traversal order is unaffected.
    let band_rows = tile_size.min(height - 2);

    let interior = &mut out[width..width * (height - 1)];
    interior
        .par_chunks_mut(width * band_rows)
        .enumerate()
        .for_each(|(band, dst)| {
            let y0 = 1 + band * band_rows;
            let rows_in_band = dst.len() / width;
            for tx in (1..width - 1).step_by(tile_size) {
                let x_end = (tx + tile_size).min(width - 1);
                for dy in 0..rows_in_band {
                    let [above, row, below] = image
                        .neighborhood_rows(y0 + dy)
                        .expect("interior row in bounds");
                    let base = dy * width;
                    for x in tx..x_end {
                        let (sum_x, sum_y) = kernel::response_at(above, row, below, x);
                        dst[base + x] = kernel::magnitude(sum_x, sum_y);
                    }
                }
            }
        });
}
