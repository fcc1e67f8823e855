pub mod args;
pub mod config;
pub mod drivers;
pub mod report;
pub mod wizard;
