//! GDI implementation of the frame backend.

use gdi_template_core::{
    ClientSize, RenderError,
    paint::{FrameRect, GraphicsBackend, Rgb},
};
use windows::Win32::{
    Foundation::{COLORREF, HWND},
    Graphics::Gdi::{
        BeginPaint, BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, CreateSolidBrush,
        DeleteDC, DeleteObject, EndPaint, HBITMAP, HBRUSH, HDC, HGDIOBJ, PAINTSTRUCT, Rectangle,
        SRCCOPY, SelectObject, ValidateRect,
    },
};

/// The visible surface for one WM_PAINT, between BeginPaint and EndPaint.
pub struct PaintSession {
    hwnd: HWND,
    ps: PAINTSTRUCT,
    hdc: HDC,
}

impl PaintSession {
    pub fn begin(hwnd: HWND) -> Result<Self, RenderError> {
        let mut ps = PAINTSTRUCT::default();
        let hdc = unsafe { BeginPaint(hwnd, &mut ps) };
        if hdc.is_invalid() {
            // Without validation the same WM_PAINT would be delivered forever
            let _ = unsafe { ValidateRect(Some(hwnd), None) };
            return Err(RenderError::VisibleSurface);
        }
        Ok(Self { hwnd, ps, hdc })
    }

    pub fn hdc(&self) -> HDC {
        self.hdc
    }
}

impl Drop for PaintSession {
    fn drop(&mut self) {
        let _ = unsafe { EndPaint(self.hwnd, &self.ps) };
    }
}

/// Draws into memory DCs compatible with a visible device context.
pub struct GdiBackend {
    front: HDC,
}

impl GdiBackend {
    pub fn new(front: HDC) -> Self {
        Self { front }
    }
}

fn extent(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn delete_object(object: HGDIOBJ, kind: &str) {
    if !unsafe { DeleteObject(object) }.as_bool() {
        log::warn!("DeleteObject failed for {kind}");
    }
}

impl GraphicsBackend for GdiBackend {
    type Surface = HDC;
    type Bitmap = HBITMAP;
    type Brush = HBRUSH;
    type Selection = HGDIOBJ;

    fn create_surface(&self) -> Result<HDC, RenderError> {
        let dc = unsafe { CreateCompatibleDC(Some(self.front)) };
        if dc.is_invalid() {
            return Err(RenderError::Surface);
        }
        Ok(dc)
    }

    fn create_bitmap(&self, size: ClientSize) -> Result<HBITMAP, RenderError> {
        // Compatible with the window DC, not the memory DC, which starts
        // with a 1x1 monochrome bitmap.
        let bitmap =
            unsafe { CreateCompatibleBitmap(self.front, extent(size.width), extent(size.height)) };
        if bitmap.is_invalid() {
            return Err(RenderError::Bitmap {
                width: size.width,
                height: size.height,
            });
        }
        Ok(bitmap)
    }

    fn create_brush(&self, color: Rgb) -> Result<HBRUSH, RenderError> {
        let brush = unsafe { CreateSolidBrush(COLORREF(color.to_colorref())) };
        if brush.is_invalid() {
            return Err(RenderError::Brush);
        }
        Ok(brush)
    }

    fn select_bitmap(&self, surface: &HDC, bitmap: &HBITMAP) -> Result<HGDIOBJ, RenderError> {
        let previous = unsafe { SelectObject(*surface, (*bitmap).into()) };
        if previous.is_invalid() {
            return Err(RenderError::Select("bitmap"));
        }
        Ok(previous)
    }

    fn select_brush(&self, surface: &HDC, brush: &HBRUSH) -> Result<HGDIOBJ, RenderError> {
        let previous = unsafe { SelectObject(*surface, (*brush).into()) };
        if previous.is_invalid() {
            return Err(RenderError::Select("brush"));
        }
        Ok(previous)
    }

    fn restore(&self, surface: &HDC, previous: HGDIOBJ) {
        unsafe {
            SelectObject(*surface, previous);
        }
    }

    fn draw_rect(&self, surface: &HDC, rect: FrameRect) -> Result<(), RenderError> {
        unsafe { Rectangle(*surface, rect.left, rect.top, rect.right, rect.bottom) }
            .ok()
            .map_err(|e| RenderError::Draw(e.to_string()))
    }

    fn present(&self, surface: &HDC, size: ClientSize) -> Result<(), RenderError> {
        unsafe {
            BitBlt(
                self.front,
                0,
                0,
                extent(size.width),
                extent(size.height),
                Some(*surface),
                0,
                0,
                SRCCOPY,
            )
        }
        .map_err(|e| RenderError::Present(e.to_string()))
    }

    fn release_bitmap(&self, bitmap: HBITMAP) {
        delete_object(bitmap.into(), "bitmap");
    }

    fn release_brush(&self, brush: HBRUSH) {
        delete_object(brush.into(), "brush");
    }

    fn release_surface(&self, surface: HDC) {
        if !unsafe { DeleteDC(surface) }.as_bool() {
            log::warn!("DeleteDC failed for off-screen surface");
        }
    }
}
