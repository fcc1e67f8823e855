use crate::core::{CoefficientEstimate, Sample};
use crate::regressors::{BivariateRegressor, IncrementalRegressor, RegressionError};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared view of how often a [`SpyRegressor`] was driven.
#[derive(Clone, Default)]
pub struct SpyHandle {
    updates: Arc<AtomicU64>,
    resets: Arc<AtomicU64>,
}

impl SpyHandle {
    pub fn updates(&self) -> u64 {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn resets(&self) -> u64 {
        self.resets.load(Ordering::SeqCst)
    }
}

/// Reference regressor that counts calls, optionally never reset.
pub struct SpyRegressor {
    inner: BivariateRegressor,
    handle: SpyHandle,
    ignore_reset: bool,
}

impl SpyRegressor {
    pub fn new() -> (Self, SpyHandle) {
        let handle = SpyHandle::default();
        (
            Self {
                inner: BivariateRegressor::default(),
                handle: handle.clone(),
                ignore_reset: false,
            },
            handle,
        )
    }

    /// A regressor whose `reset` is a no-op, so every update fails.
    pub fn stuck_uninitialized() -> (Self, SpyHandle) {
        let (mut spy, handle) = Self::new();
        spy.ignore_reset = true;
        (spy, handle)
    }
}

impl IncrementalRegressor for SpyRegressor {
    fn name(&self) -> &'static str {
        "spy"
    }

    fn reset(&mut self) {
        self.handle.resets.fetch_add(1, Ordering::SeqCst);
        if !self.ignore_reset {
            self.inner.reset();
        }
    }

    fn update(&mut self, sample: &Sample) -> Result<CoefficientEstimate, RegressionError> {
        self.handle.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(sample)
    }

    fn samples_seen(&self) -> u64 {
        self.inner.samples_seen()
    }

    fn latest(&self) -> Option<CoefficientEstimate> {
        self.inner.latest()
    }

    fn determinant(&self) -> Option<f64> {
        self.inner.determinant()
    }
}
