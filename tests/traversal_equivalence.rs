use edgemap::kernel::{GX, GY};
use edgemap::{compute_gradients, EngineConfig, ImageView, Traversal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    data
}

/// Direct nested-loop evaluation of the gradient contract, used as the
/// reference for every traversal strategy.
fn brute_force(data: &[u8], width: usize, height: usize) -> Vec<u16> {
    let mut out = vec![0u16; width * height];
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut sum_x = 0i32;
            let mut sum_y = 0i32;
            for p in 0..3 {
                for q in 0..3 {
                    let pixel = i32::from(data[(y + p - 1) * width + (x + q - 1)]);
                    sum_x += pixel * GX[p][q];
                    sum_y += pixel * GY[p][q];
                }
            }
            let squares = sum_x * sum_x + sum_y * sum_y;
            out[y * width + x] = f64::from(squares).sqrt() as u16;
        }
    }
    out
}

fn gradients(data: &[u8], width: usize, height: usize, traversal: Traversal) -> Vec<u16> {
    let view = ImageView::from_slice(data, width, height).unwrap();
    let config = EngineConfig {
        threads: 1,
        traversal,
    };
    compute_gradients(view, &config).unwrap().as_slice().to_vec()
}

#[test]
fn row_major_matches_brute_force() {
    let (width, height) = (23, 17);
    let data = make_image(width, height);
    assert_eq!(
        gradients(&data, width, height, Traversal::RowMajor),
        brute_force(&data, width, height)
    );
}

#[test]
fn tiled_matches_row_major_for_all_tile_sizes() {
    let (width, height) = (64, 48);
    let data = make_image(width, height);
    let reference = gradients(&data, width, height, Traversal::RowMajor);

    for tile_size in [1, 5, 16, 32, 1000] {
        let tiled = gradients(&data, width, height, Traversal::Tiled { tile_size });
        assert_eq!(tiled, reference, "tile_size = {tile_size}");
    }
}

#[test]
fn clipped_edge_tiles_lose_no_pixels() {
    // Dimensions chosen so the interior is not a multiple of the tile size.
    let (width, height) = (37, 29);
    let data = make_image(width, height);
    let reference = brute_force(&data, width, height);

    for tile_size in [4, 8, 32] {
        let tiled = gradients(&data, width, height, Traversal::Tiled { tile_size });
        assert_eq!(tiled, reference, "tile_size = {tile_size}");
    }
}

#[test]
fn borders_are_zero_for_random_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let (width, height) = (31, 19);
    let data: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();

    let plane = compute_gradients(
        ImageView::from_slice(&data, width, height).unwrap(),
        &EngineConfig::default(),
    )
    .unwrap();

    for x in 0..width {
        assert_eq!(plane.get(x, 0).unwrap(), 0);
        assert_eq!(plane.get(x, height - 1).unwrap(), 0);
    }
    for y in 0..height {
        assert_eq!(plane.get(0, y).unwrap(), 0);
        assert_eq!(plane.get(width - 1, y).unwrap(), 0);
    }
}

#[test]
fn degenerate_geometry_yields_all_zero_plane() {
    for (width, height) in [(2, 5), (5, 2), (1, 1)] {
        let data = vec![200u8; width * height];
        let plane = compute_gradients(
            ImageView::from_slice(&data, width, height).unwrap(),
            &EngineConfig::default(),
        )
        .unwrap();
        assert_eq!(plane.width(), width);
        assert_eq!(plane.height(), height);
        assert!(plane.as_slice().iter().all(|&v| v == 0));
    }
}

#[test]
fn smallest_valid_image_has_one_interior_pixel() {
    // A 3x3 vertical step edge: the single interior pixel sees the
    // closed-form Sobel response 4 * 255 = 1020.
    let data = [0u8, 255, 255, 0, 255, 255, 0, 255, 255];
    let plane = compute_gradients(
        ImageView::from_slice(&data, 3, 3).unwrap(),
        &EngineConfig::default(),
    )
    .unwrap();
    assert_eq!(plane.get(1, 1).unwrap(), 1020);
    assert_eq!(plane.as_slice().iter().filter(|&&v| v != 0).count(), 1);
}
