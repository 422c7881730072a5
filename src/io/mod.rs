pub mod config_io;
pub mod lock;
pub mod logging;
pub mod persist;
pub mod store;
