// SPDX-License-Identifier: MIT
//
// Terminal surface: one truecolor line per applied theme.
//
// The terminal has no style registry, so this surface listens for the
// handful of keys that say the most about a theme and paints them as
// colored cells when the frame ends:
//
//   梦幻紫    ██ ██ ██ ██  ● ● ● ● ● ●   #8b5cf6  258.3°
//   └ name   └ primary,   └ particles  └ primary hex and hue
//              light, secondary, accent
//
// The line background is the theme's page background. Everything else
// the registry writes is accepted and ignored.

use std::io::{self, Write};

use rotor_color::Rgb;
use rotor_engine::{Surface, SurfaceError};
use rotor_theme::{CssVar, ParticlePicker, Property, StyleValue, Target, Theme};
use unicode_width::UnicodeWidthStr;

/// Display columns reserved for the theme name.
pub const NAME_COLUMNS: usize = 10;

// ─── ANSI ───────────────────────────────────────────────────────────────────

fn fg(w: &mut impl Write, c: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", c.r, c.g, c.b)
}

fn bg(w: &mut impl Write, c: Rgb) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", c.r, c.g, c.b)
}

fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Pad `s` with spaces to `columns` display columns.
///
/// Double-width glyphs count as two. Names wider than `columns` are
/// returned unpadded.
#[must_use]
pub fn pad_to(s: &str, columns: usize) -> String {
    let width = UnicodeWidthStr::width(s);
    let mut out = String::with_capacity(s.len() + columns.saturating_sub(width));
    out.push_str(s);
    for _ in width..columns {
        out.push(' ');
    }
    out
}

// ─── Frame state ────────────────────────────────────────────────────────────

/// What one frame has collected so far.
#[derive(Debug, Default)]
struct Pending {
    name: String,
    hue: f64,
    page: Option<Rgb>,
    swatches: [Option<Rgb>; 4],
    palette: Vec<Rgb>,
}

/// Renders each applied theme as a swatch line on a writer.
pub struct TerminalSurface<W: Write> {
    out: W,
    picker: ParticlePicker,
    particles: usize,
    pending: Pending,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, seed: u32, particles: usize) -> Self {
        Self {
            out,
            picker: ParticlePicker::new(seed),
            particles,
            pending: Pending::default(),
        }
    }

    /// The underlying writer.
    #[cfg(test)]
    pub const fn writer(&self) -> &W {
        &self.out
    }

    fn paint(&mut self) -> io::Result<()> {
        let p = std::mem::take(&mut self.pending);
        let w = &mut self.out;

        if let Some(page) = p.page {
            bg(w, page)?;
        }
        write!(w, " {} ", pad_to(&p.name, NAME_COLUMNS))?;

        for c in p.swatches.iter().flatten() {
            fg(w, *c)?;
            w.write_all("██ ".as_bytes())?;
        }

        w.write_all(b" ")?;
        for c in self.picker.assign(&p.palette, self.particles) {
            fg(w, c)?;
            w.write_all("●".as_bytes())?;
        }

        if let Some(primary) = p.swatches[0] {
            fg(w, primary)?;
            write!(w, "  {primary}  {:5.1}°", p.hue)?;
        }
        w.write_all(b" ")?;
        reset(w)?;
        writeln!(w)?;
        w.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn begin_frame(&mut self, theme: &Theme) -> Result<(), SurfaceError> {
        self.pending = Pending {
            name: theme.name().to_string(),
            hue: theme.hue(),
            ..Pending::default()
        };
        Ok(())
    }

    fn set_style(
        &mut self,
        target: Target,
        property: Property,
        value: &StyleValue,
    ) -> Result<(), SurfaceError> {
        let slot = match (target, property) {
            (Target::Root, Property::Var(CssVar::ColorPrimary)) => Some(0),
            (Target::Root, Property::Var(CssVar::ColorPrimaryLight)) => Some(1),
            (Target::Root, Property::Var(CssVar::ColorSecondary)) => Some(2),
            (Target::Root, Property::Var(CssVar::ColorAccent)) => Some(3),
            (Target::Body, Property::BackgroundColor) => {
                self.pending.page = value.dominant_color();
                None
            }
            (Target::Particles, Property::Background) => {
                if let StyleValue::Palette(colors) = value {
                    self.pending.palette.clone_from(colors);
                }
                None
            }
            _ => None,
        };
        if let Some(i) = slot {
            self.pending.swatches[i] = value.dominant_color();
        }
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), SurfaceError> {
        self.paint().map_err(SurfaceError::from)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
