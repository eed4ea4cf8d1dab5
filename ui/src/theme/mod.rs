//! Light/dark color scheme shared by the whole app.

mod style;
pub use style::*;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown color scheme `{0}`")]
pub struct UnknownColorScheme(String);

impl FromStr for ColorScheme {
    type Err = UnknownColorScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(UnknownColorScheme(other.to_string())),
        }
    }
}

/// Handle to the app-wide color scheme, provided through context.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    scheme: Signal<ColorScheme>,
}

impl Theme {
    pub fn new(scheme: Signal<ColorScheme>) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read()
    }

    /// Flips the scheme for every component reading it.
    pub fn toggle(&mut self) {
        let next = self.scheme.peek().toggled();
        self.scheme.set(next);
        debug!("Color scheme switched to {next}");
    }
}

pub fn use_theme() -> Theme {
    use_context::<Theme>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_once() {
        let mut scheme = ColorScheme::Light;
        scheme.toggle();
        assert_eq!(scheme, ColorScheme::Dark);
        scheme.toggle();
        assert_eq!(scheme, ColorScheme::Light);
    }

    #[test]
    fn parses_stored_values() {
        assert_eq!("dark".parse(), Ok(ColorScheme::Dark));
        assert_eq!(" light\n".parse(), Ok(ColorScheme::Light));
        assert_eq!(
            "sepia".parse::<ColorScheme>(),
            Err(UnknownColorScheme("sepia".into()))
        );
    }

    #[test]
    fn display_matches_stored_value() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            assert_eq!(scheme.to_string().parse(), Ok(scheme));
        }
    }
}
