mod estimate_curve;
mod snapshot;

pub use estimate_curve::{CurveFormat, EstimateCurve};
pub use snapshot::Snapshot;
