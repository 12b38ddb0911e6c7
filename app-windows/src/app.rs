//! Per-window application data.

use std::cell::RefCell;
use std::rc::Rc;

use gdi_template_core::{
    AppState, RenderError,
    config::SceneConfig,
    paint::{FrameReport, compose_frame},
};
use windows::Win32::Foundation::HWND;

use crate::render::gdi::{GdiBackend, PaintSession};

/// Data reachable from the window procedure.
pub struct App {
    /// Shared with the message loop, which advances the position.
    state: Rc<RefCell<AppState>>,
    scene: SceneConfig,
}

impl App {
    pub fn new(state: Rc<RefCell<AppState>>, scene: SceneConfig) -> Self {
        Self { state, scene }
    }

    /// Paints one double-buffered frame. The visible surface is released when
    /// the paint session ends, after every off-screen resource.
    pub fn paint(&self, hwnd: HWND) -> Result<FrameReport, RenderError> {
        let session = PaintSession::begin(hwnd)?;
        let backend = GdiBackend::new(session.hdc());

        let report = compose_frame(&backend, &self.state.borrow(), &self.scene)?;
        self.state.borrow_mut().record_frame();

        Ok(report)
    }
}
