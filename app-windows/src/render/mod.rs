//! GDI rendering.

pub mod gdi;
