pub mod config;
pub mod point;
pub mod task;

pub use config::*;
pub use point::*;
pub use task::*;
