//! Normalization: global max reduction, then linear rescale into `[0, 255]`.
//!
//! This is the pipeline's synchronization point. The rescale factor depends
//! on the maximum magnitude over the whole interior, so the stage runs only
//! after every gradient partition has completed. The max itself is a
//! commutative, associative reduction and combines per-worker partial maxima
//! in any order with an identical result.

use crate::engine::EngineConfig;
use crate::image::GradientPlane;
use crate::trace::{trace_event, trace_span};
use crate::util::EdgeMapResult;

/// Returns the maximum magnitude over the interior region, 0 if the plane
/// has no interior.
pub fn max_interior(plane: &GradientPlane) -> u16 {
    let width = plane.width();
    let height = plane.height();
    if width < 3 || height < 3 {
        return 0;
    }

    let mut max = 0;
    for y in 1..height - 1 {
        let row = plane.row(y).expect("interior row in bounds");
        for &v in &row[1..width - 1] {
            max = max.max(v);
        }
    }
    max
}

/// Rescales every interior cell by `v * 255 / max` with truncating integer
/// division, in place. Border cells stay at 0.
///
/// A zero maximum (flat image, no gradient anywhere) leaves the plane
/// unchanged; this is an explicit policy, not an error. Planes without an
/// interior are left untouched.
pub fn normalize(plane: &mut GradientPlane, config: &EngineConfig) -> EdgeMapResult<()> {
    config.validate()?;
    let width = plane.width();
    let height = plane.height();
    if width < 3 || height < 3 {
        return Ok(());
    }
    let _guard = trace_span!("normalize", width = width, height = height).entered();

    #[cfg(feature = "rayon")]
    {
        if config.threads > 1 {
            return crate::engine::rayon::install(config.threads, || {
                let max = par_max_interior(plane);
                trace_event!("normalize_max", max = max);
                if max == 0 {
                    return;
                }
                par_rescale(plane, max);
            });
        }
    }

    let max = max_interior(plane);
    trace_event!("normalize_max", max = max);
    if max == 0 {
        return Ok(());
    }
    rescale(plane, max);
    Ok(())
}

fn rescale(plane: &mut GradientPlane, max: u16) {
    let width = plane.width();
    let height = plane.height();
    let max = u32::from(max);
    let data = plane.as_mut_slice();
    for y in 1..height - 1 {
        let row = &mut data[y * width..(y + 1) * width];
        for v in &mut row[1..width - 1] {
            *v = (u32::from(*v) * 255 / max) as u16;
        }
    }
}

#[cfg(feature = "rayon")]
fn par_max_interior(plane: &GradientPlane) -> u16 {
    use rayon::prelude::*;

    let width = plane.width();
    let height = plane.height();
    (1..height - 1)
        .into_par_iter()
        .map(|y| {
            let row = plane.row(y).expect("interior row in bounds");
            row[1..width - 1].iter().copied().max().unwrap_or(0)
        })
        .reduce(|| 0, u16::max)
}

#[cfg(feature = "rayon")]
fn par_rescale(plane: &mut GradientPlane, max: u16) {
    use rayon::prelude::*;

    let width = plane.width();
    let height = plane.height();
    let max = u32::from(max);
    let interior = &mut plane.as_mut_slice()[width..width * (height - 1)];
    interior.par_chunks_mut(width).for_each(|row| {
        for v in &mut row[1..width - 1] {
            *v = (u32::from(*v) * 255 / max) as u16;
        }
    });
}
