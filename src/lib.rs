//! Driver library for the Solomon Systech SSD1351 dot matrix OLED display driver.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate core;

extern crate embedded_hal as hal;
#[macro_use]
extern crate itertools;
#[cfg(feature = "log")]
extern crate log;

pub mod color;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod interface;

// Re-exports for primary API.
pub use crate::command::{
    ColorDepth, ColorSequence, ComLayout, ComScanDirection, DisplayMode, ScrollInterval,
    NUM_PIXEL_COLS, NUM_PIXEL_ROWS,
};
pub use crate::config::Config;
pub use crate::display::{info, Display, DriverInfo};
pub use crate::error::Error;
pub use crate::font::Font;
pub use crate::interface::spi::SpiInterface;
