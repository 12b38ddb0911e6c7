//! Win32 platform layer.

pub mod handlers;
pub mod pump;
pub mod window;
