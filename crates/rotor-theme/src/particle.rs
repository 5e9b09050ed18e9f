//! Per-particle color choice.
//!
//! The registry hands hosts a [`StyleValue::Palette`](crate::StyleValue)
//! for the particle layer; each particle then takes one color from it. The
//! picker is a seeded xorshift so a given seed colors the same particles
//! the same way on every run.

use rotor_color::Rgb;

/// Deterministic palette picker.
#[derive(Debug, Clone)]
pub struct ParticlePicker {
    state: u32,
}

impl ParticlePicker {
    /// A zero seed is bumped to 1; xorshift never leaves zero.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// One color from `palette`, or `None` if it is empty.
    pub fn pick(&mut self, palette: &[Rgb]) -> Option<Rgb> {
        if palette.is_empty() {
            return None;
        }
        let idx = self.next_u32() as usize % palette.len();
        Some(palette[idx])
    }

    /// Colors for `count` particles.
    pub fn assign(&mut self, palette: &[Rgb], count: usize) -> Vec<Rgb> {
        (0..count).map_while(|_| self.pick(palette)).collect()
    }
}
