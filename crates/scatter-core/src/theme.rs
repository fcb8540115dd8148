// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart chrome; marker colors are fixed across themes.

use std::fmt;

/// Backend-neutral 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        let byte = |i: usize| hex.get(i..i + 2).and_then(|h| u8::from_str_radix(h, 16).ok());
        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => None,
        }
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub const ROSE: Rgba = Rgba::rgb(0xe3, 0x86, 0x71);
pub const GREEN: Rgba = Rgba::rgb(0x49, 0xd1, 0x9b);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub title: Rgba,
    pub legend_label: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_border: Rgba,
    pub tooltip_text: Rgba,
    pub error_banner: Rgba,
    pub no_doping: Rgba,
    pub doping: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            axis_line: Rgba::rgb(0, 0, 0),
            axis_label: Rgba::rgb(0, 0, 0),
            title: Rgba::rgb(0, 0, 0),
            legend_label: Rgba::rgb(20, 20, 30),
            tooltip_background: Rgba::rgb(0xf4, 0xf1, 0xe8),
            tooltip_border: Rgba::rgb(0x99, 0x99, 0x99),
            tooltip_text: Rgba::rgb(20, 20, 30),
            error_banner: Rgba::rgb(0xb0, 0x30, 0x30),
            no_doping: GREEN,
            doping: ROSE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            title: Rgba::rgb(235, 235, 245),
            legend_label: Rgba::rgb(210, 210, 220),
            tooltip_background: Rgba::rgb(40, 40, 45),
            tooltip_border: Rgba::rgb(90, 90, 100),
            tooltip_text: Rgba::rgb(235, 235, 245),
            error_banner: Rgba::rgb(220, 80, 80),
            no_doping: GREEN,
            doping: ROSE,
        }
    }

    /// Marker fill for a rider: rose when an allegation is present, green otherwise.
    pub fn marker_fill(&self, alleged: bool) -> Rgba {
        if alleged { self.doping } else { self.no_doping }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
