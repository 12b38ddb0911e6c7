//! Double-buffered frame composition.
//!
//! A frame is drawn into an off-screen surface backed by a bitmap of the
//! recorded client size, then copied to the visible surface in one blit.
//! Every resource lives for exactly one frame. Each acquisition is wrapped in
//! a guard, so an error at any step skips the rest of the frame and still
//! releases what was acquired.

mod geometry;

use std::ops::Deref;

pub use geometry::{FrameRect, Rgb};

use crate::config::SceneConfig;
use crate::error::RenderError;
use crate::state::{AppState, ClientSize};

/// Drawing primitives needed to compose one frame.
///
/// Surfaces, bitmaps and brushes are created per frame and handed back
/// through the matching `release_*` method. Selecting an object into a
/// surface yields the object it displaced, which must be restored before the
/// selected object is released.
pub trait GraphicsBackend {
    type Surface;
    type Bitmap;
    type Brush;
    type Selection;

    /// Creates an off-screen surface compatible with the visible one.
    fn create_surface(&self) -> Result<Self::Surface, RenderError>;
    fn create_bitmap(&self, size: ClientSize) -> Result<Self::Bitmap, RenderError>;
    fn create_brush(&self, color: Rgb) -> Result<Self::Brush, RenderError>;

    fn select_bitmap(
        &self,
        surface: &Self::Surface,
        bitmap: &Self::Bitmap,
    ) -> Result<Self::Selection, RenderError>;
    fn select_brush(
        &self,
        surface: &Self::Surface,
        brush: &Self::Brush,
    ) -> Result<Self::Selection, RenderError>;
    fn restore(&self, surface: &Self::Surface, previous: Self::Selection);

    /// Fills and outlines `rect` with the selected brush and pen.
    fn draw_rect(&self, surface: &Self::Surface, rect: FrameRect) -> Result<(), RenderError>;

    /// Copies `size` pixels from the surface origin to the visible surface.
    fn present(&self, surface: &Self::Surface, size: ClientSize) -> Result<(), RenderError>;

    fn release_bitmap(&self, bitmap: Self::Bitmap);
    fn release_brush(&self, brush: Self::Brush);
    fn release_surface(&self, surface: Self::Surface);
}

/// What a successfully presented frame contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub rect: FrameRect,
    pub size: ClientSize,
}

/// Composes and presents one frame for the current state.
pub fn compose_frame<B: GraphicsBackend>(
    backend: &B,
    state: &AppState,
    scene: &SceneConfig,
) -> Result<FrameReport, RenderError> {
    let size = state.client();
    let rect = FrameRect::from_position(state.position(), scene).normalized();

    // Guards drop in reverse declaration order: selections are restored, then
    // the bitmap, brush and surface are released. `brush` is declared ahead of
    // `bitmap` so that order holds on every early return too.
    let surface = Scoped::new(backend, backend.create_surface()?, B::release_surface);
    let brush;
    let bitmap = Scoped::new(backend, backend.create_bitmap(size)?, B::release_bitmap);
    let _bitmap_selection =
        Selected::new(backend, &*surface, backend.select_bitmap(&*surface, &*bitmap)?);
    brush = Scoped::new(backend, backend.create_brush(scene.color)?, B::release_brush);
    let _brush_selection =
        Selected::new(backend, &*surface, backend.select_brush(&*surface, &*brush)?);

    backend.draw_rect(&*surface, rect)?;
    backend.present(&*surface, size)?;

    Ok(FrameReport { rect, size })
}

/// Owns one per-frame resource and releases it on drop.
struct Scoped<'a, B, T> {
    backend: &'a B,
    value: Option<T>,
    release: fn(&B, T),
}

impl<'a, B, T> Scoped<'a, B, T> {
    fn new(backend: &'a B, value: T, release: fn(&B, T)) -> Self {
        Self {
            backend,
            value: Some(value),
            release,
        }
    }
}

impl<B, T> Deref for Scoped<'_, B, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.value {
            Some(value) => value,
            None => unreachable!("resource accessed after release"),
        }
    }
}

impl<B, T> Drop for Scoped<'_, B, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            (self.release)(self.backend, value);
        }
    }
}

/// Restores a surface's previous selection on drop.
struct Selected<'a, B: GraphicsBackend> {
    backend: &'a B,
    surface: &'a B::Surface,
    previous: Option<B::Selection>,
}

impl<'a, B: GraphicsBackend> Selected<'a, B> {
    fn new(backend: &'a B, surface: &'a B::Surface, previous: B::Selection) -> Self {
        Self {
            backend,
            surface,
            previous: Some(previous),
        }
    }
}

impl<B: GraphicsBackend> Drop for Selected<'_, B> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.backend.restore(self.surface, previous);
        }
    }
}
