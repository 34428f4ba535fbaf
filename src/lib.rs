pub mod config;
pub mod demo;
pub mod overflow;

pub use config::DemoConfig;
pub use demo::{add, Demo};
pub use overflow::{OverflowError, OverflowPolicy, ParsePolicyError};
