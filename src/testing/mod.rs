pub mod fixtures;
pub mod stubs;

pub use stubs::{FailingAccelerator, PanickingAccelerator, ScriptedDriver, SpyRegressor, VecStream};
