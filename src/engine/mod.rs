//! Gradient engine: per-pixel Sobel convolution under a swappable execution
//! strategy.
//!
//! The engine is an embarrassingly parallel map: every interior output cell
//! depends only on the read-only 3x3 input neighborhood, so partitions of the
//! interior can run in any order, sequentially or across workers, and must
//! produce bit-identical planes. Traversal order and worker count only change
//! wall-clock behavior, never results.

use crate::image::{GradientPlane, ImageView};
use crate::trace::trace_span;
use crate::util::{EdgeMapError, EdgeMapResult};

pub(crate) mod scalar;

#[cfg(feature = "rayon")]
pub(crate) mod rayon;

/// Default tile edge length, sized for L1/L2 cache line reuse of the three
/// input rows a tile touches.
pub const DEFAULT_TILE_SIZE: usize = 32;

/// Traversal order for the interior region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Contiguous bands of full-width rows, visited end-to-end.
    RowMajor,
    /// Fixed-size square tiles; rows within a tile are visited before the
    /// next tile. Tiles at interior-region edges are clipped, never skipped.
    Tiled { tile_size: usize },
}

impl Default for Traversal {
    fn default() -> Self {
        Traversal::RowMajor
    }
}

/// Runtime execution configuration for the gradient and normalization phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Worker count; 1 means strictly sequential execution.
    pub threads: usize,
    /// Interior traversal order.
    pub traversal: Traversal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threads: 1,
            traversal: Traversal::default(),
        }
    }
}

impl EngineConfig {
    /// Checks the configuration ranges: at least one worker, non-zero tiles.
    pub fn validate(&self) -> EdgeMapResult<()> {
        if self.threads == 0 {
            return Err(EdgeMapError::InvalidConfig("worker count must be at least 1"));
        }
        if let Traversal::Tiled { tile_size } = self.traversal {
            if tile_size == 0 {
                return Err(EdgeMapError::InvalidConfig("tile size must be at least 1"));
            }
        }
        Ok(())
    }
}

/// Computes the raw (unnormalized) gradient magnitude plane for `image`.
///
/// Interior cells receive `floor(sqrt(sum_x^2 + sum_y^2))` of the two kernel
/// responses; border cells stay 0. Images with no interior (width or height
/// below 3) yield an all-zero plane of the input shape.
pub fn compute_gradients(
    image: ImageView<'_, u8>,
    config: &EngineConfig,
) -> EdgeMapResult<GradientPlane> {
    config.validate()?;
    let _guard = trace_span!(
        "compute_gradients",
        width = image.width(),
        height = image.height(),
        threads = config.threads,
    )
    .entered();

    let mut plane = GradientPlane::zeroed(image.width(), image.height())?;
    if image.width() < 3 || image.height() < 3 {
        return Ok(plane);
    }

    fill(image, plane.as_mut_slice(), config)?;
    Ok(plane)
}

/// Runs the full pipeline: gradient computation followed by normalization
/// into `[0, 255]`.
///
/// The two phases are separated by a barrier: normalization reads the global
/// maximum, so it cannot start until every gradient partition has completed.
pub fn edge_map(image: ImageView<'_, u8>, config: &EngineConfig) -> EdgeMapResult<GradientPlane> {
    config.validate()?;
    let mut plane = compute_gradients(image, config)?;
    crate::normalize::normalize(&mut plane, config)?;
    Ok(plane)
}

fn fill(image: ImageView<'_, u8>, out: &mut [u16], config: &EngineConfig) -> EdgeMapResult<()> {
    #[cfg(feature = "rayon")]
    {
        if config.threads > 1 {
            return self::rayon::install(config.threads, || match config.traversal {
                Traversal::RowMajor => self::rayon::rows(image, out),
                Traversal::Tiled { tile_size } => self::rayon::tiles(image, out, tile_size),
            });
        }
    }

    // Single worker, or parallel support compiled out: sequential strategies.
    match config.traversal {
        Traversal::RowMajor => scalar::rows(image, out),
        Traversal::Tiled { tile_size } => scalar::tiles(image, out, tile_size),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{EngineConfig, Traversal};
    use crate::util::EdgeMapError;

    #[test]
    fn config_rejects_zero_workers() {
        let cfg = EngineConfig {
            threads: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            cfg.validate().err().unwrap(),
            EdgeMapError::InvalidConfig(_)
        ));
    }

    #[test]
    fn config_rejects_zero_tile_size() {
        let cfg = EngineConfig {
            threads: 1,
            traversal: Traversal::Tiled { tile_size: 0 },
        };
        assert!(matches!(
            cfg.validate().err().unwrap(),
            EdgeMapError::InvalidConfig(_)
        ));
    }

    #[test]
    fn default_config_is_sequential_row_major() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.threads, 1);
        assert_eq!(cfg.traversal, Traversal::RowMajor);
        cfg.validate().unwrap();
    }
}
