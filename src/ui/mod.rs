//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use chrono::NaiveDateTime;
use embedded_graphics::{geometry::Size, pixelcolor::Rgb565};

pub mod canvas;
pub mod engine;
pub mod holy_watchface;
pub mod layout;
pub mod palette;
pub mod words;

pub use canvas::{Canvas, Surface, TextMeasure};
pub use engine::FaceEngine;
pub use holy_watchface::{DrawError, HolyWatchface};

/// Color type of the display
pub type ColorMode = Rgb565;

/// Draw callbacks a host drives the watch face with.
pub trait WatchFace {
    /// Screen size became known or changed
    fn on_surface_changed(&mut self, size: Size);

    /// Device properties were reported
    fn on_properties_changed(&mut self, properties: Properties);

    /// Entered or left ambient mode. Returns whether a redraw is needed.
    fn on_ambient_mode_changed(&mut self, ambient: bool) -> bool;

    /// Notification filter changed. Returns whether a redraw is needed.
    fn on_interruption_filter_changed(&mut self, filter: InterruptionFilter) -> bool;

    /// Draw the face for the given local time
    fn draw<C>(&self, canvas: &mut C, time: &NaiveDateTime) -> Result<(), DrawError<C::Error>>
    where
        C: Canvas;
}

/// State for the watch face
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceState {
    pub ambient: bool,
    pub low_bit_ambient: bool,
    pub burn_in_protection: bool,
    pub muted: bool,
}

impl FaceState {
    pub fn mode(&self) -> DisplayMode {
        if self.ambient && (self.low_bit_ambient || self.burn_in_protection) {
            DisplayMode::AmbientLowFidelity
        } else if self.ambient {
            DisplayMode::Ambient
        } else if self.muted {
            DisplayMode::Muted
        } else {
            DisplayMode::Normal
        }
    }
}

/// How the face is colored. Never affects text or layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    Normal,
    Ambient,
    AmbientLowFidelity,
    Muted,
}

/// Screen capabilities reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Properties {
    /// Ambient mode must not use anti-aliasing
    pub low_bit_ambient: bool,
    pub burn_in_protection: bool,
}

/// Which notifications may interrupt the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptionFilter {
    All,
    Priority,
    None,
    Alarms,
}

impl InterruptionFilter {
    pub fn is_mute(self) -> bool {
        self == InterruptionFilter::None
    }
}
