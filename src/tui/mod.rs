pub mod app;
pub mod input;
pub mod layout;
pub mod panels;
pub mod render;
pub mod theme;
pub mod timer;
pub mod window;

pub use app::run;
