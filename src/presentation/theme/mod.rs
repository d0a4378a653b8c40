//! Colors and styles.

pub mod adapter;
mod service;

pub use service::{EventPalette, Theme};
