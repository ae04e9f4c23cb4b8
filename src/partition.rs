//! Static partitioning of update work across a fixed worker pool.
//!
//! The kernels split the outer grid axis into contiguous blocks, one per
//! worker at most, and run the same per-block closure everywhere. Block
//! boundaries depend only on the span and the thread count, never on
//! execution order, so a given input produces the same partition on every
//! run.

use crate::{Error, Result};
use rayon::prelude::*;
use std::ops::Range;

/// Split `span` into at most `blocks` contiguous ranges of near-equal size.
///
/// The ranges cover `span` without gaps or overlap and their lengths differ
/// by at most one. Spans shorter than `blocks` produce fewer blocks.
pub fn split_span(span: Range<usize>, blocks: usize) -> Vec<Range<usize>> {
    let len = span.end.saturating_sub(span.start);
    if len == 0 {
        return Vec::new();
    }
    let blocks = blocks.clamp(1, len);
    let base = len / blocks;
    let extra = len % blocks;

    let mut out = Vec::with_capacity(blocks);
    let mut start = span.start;
    for b in 0..blocks {
        let size = base + usize::from(b < extra);
        out.push(start..start + size);
        start += size;
    }
    out
}

/// Fixed worker pool for the update kernels.
///
/// A pool is built once by the driver and reused for every kernel call.
/// The serial pool executes blocks inline on the calling thread; results
/// are bit-identical either way because every cell's update is
/// self-contained.
#[derive(Debug)]
pub struct WorkerPool {
    nthreads: usize,
    pool: Option<rayon::ThreadPool>,
}

impl WorkerPool {
    /// Pool that runs inline on the calling thread.
    pub fn serial() -> Self {
        Self {
            nthreads: 1,
            pool: None,
        }
    }

    /// Dedicated pool with exactly `nthreads` threads.
    ///
    /// # Arguments
    /// * `nthreads` - Number of worker threads; must be at least 1
    pub fn new(nthreads: usize) -> Result<Self> {
        if nthreads == 0 {
            return Err(Error::Config("worker pool needs at least one thread".into()));
        }
        if nthreads == 1 {
            return Ok(Self::serial());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(nthreads)
            .build()?;
        log::debug!("worker pool: {} threads", nthreads);
        Ok(Self {
            nthreads,
            pool: Some(pool),
        })
    }

    /// Number of blocks the outer axis is split into.
    pub fn nthreads(&self) -> usize {
        self.nthreads
    }

    /// Run `work` on every block of `span`, returning once all blocks are
    /// done.
    pub(crate) fn run<F>(&self, span: Range<usize>, work: F)
    where
        F: Fn(Range<usize>) + Send + Sync,
    {
        match &self.pool {
            None => work(span),
            Some(pool) => {
                let blocks = split_span(span, self.nthreads);
                pool.install(|| blocks.into_par_iter().for_each(|block| work(block)));
            }
        }
    }
}
