use std::ops::{Add, AddAssign, Div, Mul, Sub};

use tracing::debug;

use crate::accelerator::{AcceleratorError, PrefixEstimates, ReferenceAccelerator};
use crate::core::{CoefficientEstimate, SampleColumns};

/// Arithmetic width of the emulated pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// `f32`, as the dataflow engine computes.
    #[default]
    Single,
    Double,
}

/// Software emulation of the dataflow engine the regressor is compared with.
///
/// Input arrives in bursts of `lane_width` samples, so the column length must
/// be a multiple of it. Within the pipeline the samples are processed one at a
/// time in order, so the width never changes the estimates. The pipeline
/// keeps running sums rather than running means
/// (`mean = sum / count`) and applies the same current-mean centering and
/// divide-by-current-count accumulation as the reference regressor. It emits
/// one estimate per sample.
#[derive(Debug, Clone)]
pub struct SoftwareAccelerator {
    lane_width: usize,
    precision: Precision,
}

impl SoftwareAccelerator {
    pub const DEFAULT_LANE_WIDTH: usize = 4;

    pub fn new(lane_width: usize, precision: Precision) -> Result<Self, AcceleratorError> {
        if lane_width == 0 {
            return Err(AcceleratorError::InvalidLaneWidth);
        }
        Ok(Self {
            lane_width,
            precision,
        })
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }
}

impl Default for SoftwareAccelerator {
    fn default() -> Self {
        Self {
            lane_width: Self::DEFAULT_LANE_WIDTH,
            precision: Precision::Single,
        }
    }
}

impl ReferenceAccelerator for SoftwareAccelerator {
    fn name(&self) -> &str {
        match self.precision {
            Precision::Single => "software-f32",
            Precision::Double => "software-f64",
        }
    }

    fn lane_width(&self) -> usize {
        self.lane_width
    }

    fn run(&mut self, columns: &SampleColumns) -> Result<PrefixEstimates, AcceleratorError> {
        let len = columns
            .checked_len()
            .ok_or(AcceleratorError::LengthMismatch)?;
        if len == 0 {
            return Err(AcceleratorError::Empty);
        }
        if len % self.lane_width != 0 {
            return Err(AcceleratorError::UnalignedLength {
                len,
                lane_width: self.lane_width,
            });
        }

        debug!(
            len,
            bursts = len / self.lane_width,
            precision = ?self.precision,
            "streaming columns through software pipeline"
        );

        Ok(match self.precision {
            Precision::Single => stream::<f32>(columns),
            Precision::Double => stream::<f64>(columns),
        })
    }
}

trait Lane:
    Copy
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
{
    fn narrow(v: f64) -> Self;
    fn widen(self) -> f64;
}

impl Lane for f32 {
    #[inline]
    fn narrow(v: f64) -> Self {
        v as f32
    }
    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

impl Lane for f64 {
    #[inline]
    fn narrow(v: f64) -> Self {
        v
    }
    #[inline]
    fn widen(self) -> f64 {
        self
    }
}

#[derive(Default)]
struct Pipeline<T> {
    count: u64,
    sum_x1: T,
    sum_x2: T,
    sum_y: T,
    x1x1: T,
    x1x2: T,
    x2x2: T,
    yx1: T,
    yx2: T,
}

impl<T: Lane> Pipeline<T> {
    fn step(&mut self, x1: T, x2: T, y: T) -> CoefficientEstimate {
        self.count += 1;
        let n = T::narrow(self.count as f64);

        self.sum_x1 += x1;
        self.sum_x2 += x2;
        self.sum_y += y;
        let (m1, m2, my) = (self.sum_x1 / n, self.sum_x2 / n, self.sum_y / n);

        let (d1, d2, dy) = (x1 - m1, x2 - m2, y - my);
        self.yx1 += d1 * dy / n;
        self.yx2 += d2 * dy / n;
        self.x1x2 += d2 * d1 / n;
        self.x1x1 += d1 * d1 / n;
        self.x2x2 += d2 * d2 / n;

        let (b1, b2) = if self.count == 1 {
            (T::default(), T::default())
        } else {
            let k = self.x1x1 * self.x2x2 - self.x1x2 * self.x1x2;
            (
                (self.yx1 * self.x2x2 - self.x1x2 * self.yx2) / k,
                (self.x1x1 * self.yx2 - self.yx1 * self.x1x2) / k,
            )
        };
        let a = my - b1 * m1 - b2 * m2;

        CoefficientEstimate::new(a.widen(), b1.widen(), b2.widen())
    }
}

fn stream<T: Lane>(columns: &SampleColumns) -> PrefixEstimates {
    let mut pipeline = Pipeline::<T>::default();
    columns
        .x1
        .iter()
        .zip(&columns.x2)
        .zip(&columns.y)
        .map(|((&x1, &x2), &y)| pipeline.step(T::narrow(x1), T::narrow(x2), T::narrow(y)))
        .collect()
}
