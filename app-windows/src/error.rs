use thiserror::Error;

/// Failures that stop the application before the message loop starts.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("failed to get module handle: {0}")]
    ModuleHandle(windows::core::Error),

    #[error("failed to register window class: {0}")]
    RegisterClass(windows::core::Error),

    #[error("failed to create window: {0}")]
    CreateWindow(windows::core::Error),

    #[error("failed to query client area: {0}")]
    ClientRect(windows::core::Error),
}
