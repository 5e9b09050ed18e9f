// SPDX-License-Identifier: MIT
//
// rotor-color: the color distance model behind hue-rotor.
//
// Themes are ordered by where their primary color sits on the hue wheel.
// This crate turns catalog hex strings into that position and measures
// the circular distance between two positions. Everything here is a pure
// function over plain values; nothing allocates except error messages
// and the `triple`/`to_hex` formatters.

pub mod color;

pub use color::{
    ColorError, Hsl, Rgb, hex_to_hsl, hex_to_hue, hue_difference, hue_distance, normalize_hue,
};
