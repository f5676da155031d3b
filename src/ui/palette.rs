//! Colors per display mode

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use super::{ColorMode, DisplayMode};
use crate::system::config::FaceConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: ColorMode,
    pub text: ColorMode,
    pub hour: ColorMode,
    pub minute: ColorMode,
}

impl Palette {
    /// Flat white on black, used in ambient mode.
    pub const AMBIENT: Self = Self {
        background: Rgb565::BLACK,
        text: Rgb565::WHITE,
        hour: Rgb565::WHITE,
        minute: Rgb565::WHITE,
    };

    pub fn for_mode(mode: DisplayMode, config: &FaceConfig) -> Self {
        let normal = Self {
            background: config.background,
            text: config.text_color,
            hour: config.hour_color,
            minute: config.minute_color,
        };

        match mode {
            DisplayMode::Ambient | DisplayMode::AmbientLowFidelity => Self::AMBIENT,
            DisplayMode::Muted => normal.dimmed(),
            DisplayMode::Normal => normal,
        }
    }

    /// Same palette at half intensity. The background is left alone.
    pub fn dimmed(self) -> Self {
        Self {
            background: self.background,
            text: dim(self.text),
            hour: dim(self.hour),
            minute: dim(self.minute),
        }
    }
}

fn dim(color: ColorMode) -> ColorMode {
    Rgb565::new(color.r() / 2, color.g() / 2, color.b() / 2)
}
