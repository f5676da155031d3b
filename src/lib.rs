//! Holy Tic Face: a watch face that tells the time the way you feel about it.
//!
//! The library is `no_std` and host agnostic. The PineTime firmware in
//! `main.rs` is one host; the `FaceEngine` in [`ui::engine`] is the part of
//! the lifecycle every host shares.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

#[cfg(feature = "pinetime")]
pub mod peripherals;
pub mod system;
pub mod ui;
