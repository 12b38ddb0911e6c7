//! Window creation and the main loop.

use std::cell::RefCell;
use std::rc::Rc;

use gdi_template_core::{
    AppConfig, AppState, ClientSize,
    pump::run_loop_with_stats,
    state::Animation,
};
use windows::{
    Win32::{
        Foundation::RECT,
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, DestroyWindow, GetClientRect, IDC_ARROW, LoadCursorW, MB_ICONERROR,
            MB_OK, MessageBoxW, RegisterClassW, SW_SHOWDEFAULT, ShowWindow, WINDOW_EX_STYLE,
            WNDCLASSW, WS_OVERLAPPEDWINDOW,
        },
    },
    core::{Error, HSTRING, PCWSTR, w},
};

use crate::app::App;
use crate::error::StartupError;
use crate::platform::{handlers::attach_app, handlers::wndproc, pump::Win32Pump};

/// Creates the window and runs the message loop until quit.
///
/// Returns the exit code carried by the quit message.
pub fn run(config: AppConfig) -> Result<i32, StartupError> {
    unsafe {
        let instance = GetModuleHandleW(None).map_err(StartupError::ModuleHandle)?;
        let class_name = w!("Win32GDITemplate");

        // No background brush: WM_ERASEBKGND is never passed to DefWindowProcW
        let wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW).map_err(StartupError::RegisterClass)?,
            lpszClassName: class_name,
            ..Default::default()
        };

        if RegisterClassW(&wc) == 0 {
            return Err(StartupError::RegisterClass(Error::from_thread()));
        }

        let window = &config.window;
        let title = HSTRING::from(window.title.as_str());
        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW,
            window.x,
            window.y,
            window.width,
            window.height,
            None,
            None,
            Some(instance.into()),
            None,
        )
        .map_err(StartupError::CreateWindow)?;

        // Recorded once; WM_SIZE is left to DefWindowProcW
        let mut rect = RECT::default();
        if let Err(e) = GetClientRect(hwnd, &mut rect) {
            let _ = DestroyWindow(hwnd);
            return Err(StartupError::ClientRect(e));
        }
        let client = ClientSize::from_edges(rect.left, rect.top, rect.right, rect.bottom);
        log::info!("client area {}x{}", client.width, client.height);

        let state = Rc::new(RefCell::new(AppState::new(
            client,
            Animation::from(config.animation),
        )));
        attach_app(hwnd, App::new(Rc::clone(&state), config.scene));

        let _ = ShowWindow(hwnd, SW_SHOWDEFAULT);

        let mut pump = Win32Pump::new(hwnd);
        let outcome = run_loop_with_stats(&mut pump, &state);

        let stats = outcome.stats;
        log::info!(
            "exiting with code {}: {} frames painted, {} idle iterations, {} messages",
            outcome.exit_code,
            state.borrow().frames_painted(),
            stats.idle,
            stats.dispatched
        );

        // WM_DESTROY drops the App
        let _ = DestroyWindow(hwnd);

        Ok(outcome.exit_code)
    }
}

/// Shows a fatal error in a modal dialog with no owner window.
pub fn show_error(message: &str) {
    let text = HSTRING::from(message);
    unsafe {
        MessageBoxW(None, &text, w!("gdi_template"), MB_OK | MB_ICONERROR);
    }
}
