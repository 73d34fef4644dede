#[cfg(feature = "desktop")]
pub mod commands;
pub mod log_buffer;
#[cfg(feature = "desktop")]
pub mod logger;
