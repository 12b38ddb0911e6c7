//! `PeekMessageW` based message pump.

use gdi_template_core::pump::{MessagePump, PumpStatus};
use windows::Win32::{
    Foundation::HWND,
    Graphics::Gdi::InvalidateRect,
    UI::WindowsAndMessaging::{
        DispatchMessageW, MSG, PM_REMOVE, PeekMessageW, TranslateMessage, WM_QUIT,
    },
};

/// Polls the thread queue without blocking.
pub struct Win32Pump {
    hwnd: HWND,
    msg: MSG,
}

impl Win32Pump {
    pub fn new(hwnd: HWND) -> Self {
        Self {
            hwnd,
            msg: MSG::default(),
        }
    }
}

impl MessagePump for Win32Pump {
    fn pump(&mut self) -> PumpStatus {
        unsafe {
            if !PeekMessageW(&mut self.msg, None, 0, 0, PM_REMOVE).as_bool() {
                return PumpStatus::Idle;
            }
            let _ = TranslateMessage(&self.msg);
            DispatchMessageW(&self.msg);
        }

        if self.msg.message == WM_QUIT {
            PumpStatus::Quit(self.msg.wParam.0 as i32)
        } else {
            PumpStatus::Dispatched
        }
    }

    fn request_repaint(&mut self) {
        // WM_PAINT is generated once the queue is empty again
        let _ = unsafe { InvalidateRect(Some(self.hwnd), None, true) };
    }
}
