//! Window procedure and message handlers.

use gdi_template_core::{
    RenderError,
    events::{Handled, WindowEvent, WindowOps, handle_event},
    paint::FrameReport,
};
use windows::Win32::{
    Foundation::{HWND, LPARAM, LRESULT, WPARAM},
    UI::WindowsAndMessaging::{
        DefWindowProcW, GWLP_USERDATA, GetWindowLongPtrW, PostQuitMessage, SetWindowLongPtrW,
        WM_CLOSE, WM_DESTROY, WM_ERASEBKGND, WM_PAINT,
    },
};

use crate::app::App;

/// Stores the App in the window's user data. Ownership moves to the window
/// and is reclaimed on WM_DESTROY.
pub fn attach_app(hwnd: HWND, app: App) {
    let app_ptr = Box::into_raw(Box::new(app));
    unsafe {
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, app_ptr as isize);
    }
}

/// Gets the App instance from the window's user data.
fn get_app(hwnd: HWND) -> Option<&'static App> {
    unsafe {
        let ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const App;
        if ptr.is_null() { None } else { Some(&*ptr) }
    }
}

fn detach_app(hwnd: HWND) {
    unsafe {
        let ptr = SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) as *mut App;
        if !ptr.is_null() {
            drop(Box::from_raw(ptr));
        }
    }
}

fn classify(msg: u32) -> WindowEvent {
    match msg {
        WM_PAINT => WindowEvent::Paint,
        WM_ERASEBKGND => WindowEvent::EraseBackground,
        WM_CLOSE => WindowEvent::Close,
        _ => WindowEvent::Other,
    }
}

/// A window and its App for the duration of one message.
struct WindowContext<'a> {
    hwnd: HWND,
    app: &'a App,
}

impl WindowOps for WindowContext<'_> {
    fn paint(&mut self) -> Result<FrameReport, RenderError> {
        self.app.paint(self.hwnd)
    }

    fn post_quit(&mut self, exit_code: i32) {
        unsafe { PostQuitMessage(exit_code) };
    }
}

pub extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if msg == WM_DESTROY {
        detach_app(hwnd);
        return LRESULT(0);
    }

    // Messages sent during CreateWindowExW arrive before the App is attached
    let Some(app) = get_app(hwnd) else {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    };

    let mut window = WindowContext { hwnd, app };
    match handle_event(classify(msg), &mut window) {
        Handled::Consumed => LRESULT(0),
        Handled::Default => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
