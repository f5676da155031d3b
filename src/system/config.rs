//! General system configuration

use embedded_graphics::{
    mono_font::MonoFont,
    pixelcolor::{Rgb565, RgbColor},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

/// Look of the watch face
#[derive(Clone, Copy)]
pub struct FaceConfig {
    /// Background fill
    pub background: Rgb565,
    /// Color of the fixed lines
    pub text_color: Rgb565,
    /// Accent color of the hour word
    pub hour_color: Rgb565,
    /// Accent color of the minute word
    pub minute_color: Rgb565,
    /// Font of the fixed lines
    pub filler_font: &'static MonoFont<'static>,
    /// Font of the hour and minute words
    pub accent_font: &'static MonoFont<'static>,
    /// Distance between two lines, derived from the screen height if unset
    pub line_pitch: Option<u32>,
    /// Moves the whole text block down (positive) or up (negative)
    pub vertical_shift: i32,
}

impl FaceConfig {
    pub const DEFAULT: Self = Self {
        background: Rgb565::BLACK,
        text_color: Rgb565::WHITE,
        // #50D5D3
        hour_color: Rgb565::new(0x50 >> 3, 0xD5 >> 2, 0xD3 >> 3),
        // #5D84E1
        minute_color: Rgb565::new(0x5D >> 3, 0x84 >> 2, 0xE1 >> 3),
        filler_font: &PROFONT_18_POINT,
        accent_font: &PROFONT_24_POINT,
        line_pitch: None,
        vertical_shift: 0,
    };
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Backlight and ambient mode timing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerConfig {
    /// Seconds without a button press before entering ambient mode
    pub idle_timeout_secs: u32,
    /// Backlight level while awake (0-7)
    pub awake_brightness: u8,
    /// Backlight level in ambient mode (0-7)
    pub ambient_brightness: u8,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 15,
            awake_brightness: 5,
            ambient_brightness: 1,
        }
    }
}

#[cfg(feature = "pinetime")]
pub use self::nrf::SystemConfig;

#[cfg(feature = "pinetime")]
mod nrf {
    use embassy_nrf::{
        config::{Config, Debug, HfclkSource, LfclkSource},
        interrupt::Priority,
    };

    pub struct SystemConfig {}

    impl SystemConfig {
        /// Create new system configuration
        pub fn new() -> Config {
            // Generate default config, required because Config is set as
            // `non_exhaustive`
            let mut config = Config::default();

            // Set high-frequency and low-frequency clock sources to external
            config.hfclk_source = HfclkSource::ExternalXtal;
            config.lfclk_source = LfclkSource::ExternalXtal;

            // Enable DC/DC regulator to massively reduce runtime current consumption
            config.dcdc.reg1 = true;

            // Keep the RTC and GPIOTE interrupts below the executor
            config.gpiote_interrupt_priority = Priority::P2;
            config.time_interrupt_priority = Priority::P2;

            // Allow debugging
            config.debug = Debug::Allowed;

            config
        }
    }
}
