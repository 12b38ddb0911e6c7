use serde::Deserialize;

use crate::config::SceneConfig;

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs as `0x00BBGGRR`, the COLORREF layout.
    pub const fn to_colorref(self) -> u32 {
        self.r as u32 | (self.g as u32) << 8 | (self.b as u32) << 16
    }
}

/// Rectangle edges in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl FrameRect {
    /// Rectangle for the given horizontal position. The position truncates
    /// toward zero, saturating at the `i32` range.
    pub fn from_position(position: f32, scene: &SceneConfig) -> Self {
        let left = position as i32;
        Self {
            left,
            top: scene.top,
            right: left.saturating_add(scene.width),
            bottom: scene.bottom,
        }
    }

    /// Orders each pair of edges so that `left <= right` and `top <= bottom`.
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    pub fn is_inverted(self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    pub fn width(self) -> u32 {
        self.left.abs_diff(self.right)
    }

    pub fn height(self) -> u32 {
        self.top.abs_diff(self.bottom)
    }
}
