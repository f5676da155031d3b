//! PineTime peripherals the watch face needs

pub mod backlight;
pub mod button;
pub mod display;
