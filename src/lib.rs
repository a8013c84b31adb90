//! Color codec and contrast helpers behind the `hexsync` terminal picker.

pub mod color;
