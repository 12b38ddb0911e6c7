//! Optional TOML overrides for window geometry, animation and scene.
//!
//! Defaults reproduce the fixed template exactly; nothing is read unless a
//! config path is given on the command line.


use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use crate::paint::Rgb;

/// Application configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

impl AppConfig {
    /// Loads config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolves config from process arguments (program name already skipped).
    ///
    /// The first argument, if any, is a config file path. Invalid values are
    /// logged and replaced by their defaults.
    pub fn from_args<I>(mut args: I) -> Result<Self, ConfigError>
    where
        I: Iterator,
        I::Item: AsRef<std::ffi::OsStr>,
    {
        let Some(path) = args.next() else {
            return Ok(Self::default());
        };
        let path = Path::new(path.as_ref());
        log::info!("loading config from {}", path.display());

        let config = Self::load(path)?;
        let errors = config.validate();
        if errors.is_empty() {
            return Ok(config);
        }
        for error in &errors {
            log::warn!("config: {error}, using default");
        }
        Ok(config.with_defaults_for_invalid())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.window.width <= 0 {
            errors.push("window.width must be positive".to_string());
        }
        if self.window.height <= 0 {
            errors.push("window.height must be positive".to_string());
        }
        if !(self.animation.step.is_finite() && self.animation.step > 0.0) {
            errors.push("animation.step must be a positive number".to_string());
        }
        if self.scene.width < 0 {
            errors.push("scene.width must not be negative".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let step = self.animation.step;
        Self {
            window: WindowConfig {
                title: self.window.title.clone(),
                x: self.window.x,
                y: self.window.y,
                width: if self.window.width <= 0 {
                    defaults.window.width
                } else {
                    self.window.width
                },
                height: if self.window.height <= 0 {
                    defaults.window.height
                } else {
                    self.window.height
                },
            },
            animation: AnimationConfig {
                step: if step.is_finite() && step > 0.0 {
                    step
                } else {
                    defaults.animation.step
                },
                pacing: self.animation.pacing,
            },
            scene: SceneConfig {
                width: if self.scene.width < 0 {
                    defaults.scene.width
                } else {
                    self.scene.width
                },
                ..self.scene
            },
        }
    }
}

/// Window class and geometry settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WindowConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_window_x")]
    pub x: i32,
    #[serde(default = "default_window_y")]
    pub y: i32,
    #[serde(default = "default_window_width")]
    pub width: i32,
    #[serde(default = "default_window_height")]
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            x: default_window_x(),
            y: default_window_y(),
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

fn default_window_x() -> i32 {
    100
}

fn default_window_y() -> i32 {
    100
}

fn default_window_width() -> i32 {
    1000
}

fn default_window_height() -> i32 {
    700
}

/// How far the rectangle moves and what drives it.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct AnimationConfig {
    /// Distance per idle iteration, or per second with [`Pacing::PerSecond`].
    #[serde(default = "default_step")]
    pub step: f32,
    #[serde(default)]
    pub pacing: Pacing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            pacing: Pacing::default(),
        }
    }
}

fn default_step() -> f32 {
    1.0
}

/// Animation pacing mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// One step per idle loop iteration. Speed follows the scheduler.
    #[default]
    PerIteration,
    /// Step scaled by elapsed wall-clock seconds.
    PerSecond,
}

/// What a frame draws.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default = "default_top")]
    pub top: i32,
    #[serde(default = "default_bottom")]
    pub bottom: i32,
    #[serde(default = "default_rect_width")]
    pub width: i32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            top: default_top(),
            bottom: default_bottom(),
            width: default_rect_width(),
        }
    }
}

fn default_color() -> Rgb {
    Rgb::new(0, 0, 255)
}

fn default_top() -> i32 {
    50
}

fn default_bottom() -> i32 {
    40
}

fn default_rect_width() -> i32 {
    40
}
