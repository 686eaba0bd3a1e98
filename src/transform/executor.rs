use std::{ops::Range, sync::OnceLock};

use crate::{
    error::{LumabenchError, Result},
    texture::{TextureMutSlice, TextureRef, TextureSlice},
};

/// Maximum number of concurrently executing worker tasks.
pub const FANOUT: usize = 8;

/// The bounded pool shared by all parallel scans, built on first use.
fn pool() -> &'static rayon::ThreadPool {
    static POOL: OnceLock<rayon::ThreadPool> = OnceLock::new();
    POOL.get_or_init(|| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(FANOUT)
            .thread_name(|idx| format!("lumabench-worker-{idx}"))
            .build()
            .expect("worker pool construction failed")
    })
}

/// Split `[0, len)` into at most `workers` contiguous disjoint ranges.
///
/// Every index is covered by exactly one range; an empty `len` yields no
/// ranges at all.
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    debug_assert!(workers > 0);
    let chunk = len.div_ceil(workers).max(1);
    (0..len)
        .step_by(chunk)
        .map(|start| start..usize::min(start + chunk, len))
        .collect()
}

/// Validate buffer lengths against the declared shapes, once, before any
/// dispatch. Per-pixel work never re-checks.
pub(crate) fn check_shapes(
    input: &TextureSlice<'_, u8>,
    output: &TextureMutSlice<'_, u8>,
) -> Result<()> {
    let expected = input.pixel_count() * input.planes() as usize;
    if input.as_ref().len() != expected {
        return Err(LumabenchError::SizeMismatch {
            expected,
            actual: input.as_ref().len(),
        });
    }

    let expected = input.pixel_count();
    if output.as_ref().len() != expected {
        return Err(LumabenchError::SizeMismatch {
            expected,
            actual: output.as_ref().len(),
        });
    }

    Ok(())
}

/// Partitioned fan-out/fan-in scan: one task per partition on the bounded
/// pool, each worker writing only the output sub-slice it owns. The scope is
/// a join barrier and re-raises any worker panic.
pub(crate) fn scan_partitioned<K>(in_buf: &[u8], planes: usize, out_buf: &mut [u8], kernel: K)
where
    K: Fn(u8, u8, u8) -> u8 + Sync,
{
    debug_assert!(planes == 3 || planes == 4);
    let pixels = out_buf.len();
    let kernel = &kernel;

    pool().scope(move |scope| {
        let mut tail = out_buf;
        for range in partition(pixels, FANOUT) {
            let (own, rest) = tail.split_at_mut(range.len());
            tail = rest;
            let start = range.start;

            scope.spawn(move |_| {
                for (idx, dst) in own.iter_mut().enumerate() {
                    let base = (start + idx) * planes;
                    *dst = kernel(in_buf[base], in_buf[base + 1], in_buf[base + 2]);
                }
            });
        }
    });
}

/// [scan_partitioned] with the bounds checks stripped from the hot loop.
///
/// Unchecked access stays inside the worker's own range: disjointness is
/// enforced by the `split_at_mut` handout, and shape validation ran before
/// dispatch.
pub(crate) fn scan_partitioned_unchecked<K>(
    in_buf: &[u8],
    planes: usize,
    out_buf: &mut [u8],
    kernel: K,
) where
    K: Fn(u8, u8, u8) -> u8 + Sync,
{
    debug_assert!(planes == 3 || planes == 4);
    debug_assert!(in_buf.len() >= out_buf.len() * planes);
    let pixels = out_buf.len();
    let kernel = &kernel;

    pool().scope(move |scope| {
        let mut tail = out_buf;
        for range in partition(pixels, FANOUT) {
            let (own, rest) = tail.split_at_mut(range.len());
            tail = rest;
            let start = range.start;

            scope.spawn(move |_| {
                // SAFETY: this worker owns output pixels [start, start + own.len())
                // and reads only the matching input pixels, all in bounds by the
                // pre-dispatch shape check.
                for idx in 0..own.len() {
                    unsafe {
                        let base = (start + idx) * planes;
                        *own.get_unchecked_mut(idx) = kernel(
                            *in_buf.get_unchecked(base),
                            *in_buf.get_unchecked(base + 1),
                            *in_buf.get_unchecked(base + 2),
                        );
                    }
                }
            });
        }
    });
}
