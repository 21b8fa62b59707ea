pub mod config;
pub mod intent;
pub mod logging;
pub mod render;
pub mod session;
pub mod simulate;
