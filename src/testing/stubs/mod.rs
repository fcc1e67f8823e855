pub mod accelerators;
pub mod scripted_driver;
pub mod spy_regressor;
pub mod vec_stream;

pub use accelerators::{FailingAccelerator, PanickingAccelerator};
pub use scripted_driver::{Answer, ScriptedDriver};
pub use spy_regressor::{SpyHandle, SpyRegressor};
pub use vec_stream::VecStream;
