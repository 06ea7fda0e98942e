//! Sequential traversal strategies.

use crate::image::ImageView;
use crate::kernel;

/// Row-major traversal: every interior row end-to-end across the full width.
///
/// The row base offset is hoisted out of the inner loop; the three
/// neighborhood row slices are fetched once per row.
pub(crate) fn rows(image: ImageView<'_, u8>, out: &mut [u16]) {
    let width = image.width();
    let height = image.height();

    for y in 1..height - 1 {
        let [above, row, below] = image.neighborhood_rows(y).expect("interior row in bounds");
        let base = y * width;
        for x in 1..width - 1 {
            let (sum_x, sum_y) = kernel::response_at(above, row, below, x);
            out[base + x] = kernel::magnitude(sum_x, sum_y);
        }
    }
}

/// Tiled traversal: `tile_size` x `tile_size` tiles, rows within a tile
/// visited before the next tile. Edge tiles are clipped to the interior.
pub(crate) fn tiles(image: ImageView<'_, u8>, out: &mut [u16], tile_size: usize) {
    let width = image.width();
    let height = image.height();

    for ty in (1..height - 1).step_by(tile_size) {
        let y_end = (ty + tile_size).min(height - 1);
        for tx in (1..width - 1).step_by(tile_size) {
            let x_end = (tx + tile_size).min(width - 1);
            for y in ty..y_end {
                let [above, row, below] =
                    image.neighborhood_rows(y).expect("interior row in bounds");
                let base = y * width;
                for x in tx..x_end {
                    let (sum_x, sum_y) = kernel::response_at(above, row, below, x);
                    out[base + x] = kernel::magnitude(sum_x, sum_y);
                }
            }
        }
    }
}
