#![no_std]

mod eeprom;

pub mod adapters;
pub mod config;

pub use adapters::counting::CountingAdapter;
pub use adapters::ram::{MemoryAdapter, RefMemoryAdapter};
pub use adapters::EepromAdapter;
pub use eeprom::*;

pub type Address = usize;
