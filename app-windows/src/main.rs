//! Double-buffered GDI window template.
//!
//! One window, a non-blocking message loop and a rectangle that slides right
//! every time the message queue runs dry.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(windows)]
mod app;
#[cfg(windows)]
mod error;
#[cfg(windows)]
mod platform;
#[cfg(windows)]
mod render;

use std::ffi::OsStr;
use std::process::ExitCode;

use gdi_template_core::AppConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match load_config(std::env::args_os().skip(1)) {
        Ok(config) => run(config),
        Err(message) => fail(&message),
    }
}

fn load_config<I>(args: I) -> Result<AppConfig, String>
where
    I: Iterator,
    I::Item: AsRef<OsStr>,
{
    AppConfig::from_args(args).map_err(|e| format!("Failed to load config: {e}"))
}

/// Reports a fatal error and yields the failure exit code.
///
/// Release builds have no console, so on Windows the message is also shown
/// in a dialog.
fn fail(message: &str) -> ExitCode {
    log::error!("{message}");
    #[cfg(windows)]
    platform::window::show_error(message);
    ExitCode::FAILURE
}

#[cfg(windows)]
fn run(config: AppConfig) -> ExitCode {
    match platform::window::run(config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => fail(&format!("Startup failed: {e}")),
    }
}

#[cfg(not(windows))]
fn run(_config: AppConfig) -> ExitCode {
    fail("gdi_template needs the Win32 API and only runs on Windows")
}
