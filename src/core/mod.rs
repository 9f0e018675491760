//! Core conversion logic

mod converter;
mod time_slots;

pub use converter::{Conversion, ConvertOptions, Converter, ShortSheetPolicy};
pub use time_slots::{time_slot_label, translate_time_slots, UNKNOWN_SLOT};
