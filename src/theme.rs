use std::{fmt, str::FromStr};

use thiserror::Error;

/// Local storage key holding the user's theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Classes applied to the wrapper around the whole page.
    pub fn wrapper_class(self) -> &'static str {
        match self {
            Theme::Light => "bg-background-light text-gray-900",
            Theme::Dark => "dark bg-background-dark text-gray-100",
        }
    }

    /// Gradient of the main element.
    pub fn main_background(self) -> &'static str {
        match self {
            Theme::Light => "from-slate-100 via-slate-50 to-slate-100 text-slate-900",
            Theme::Dark => "from-black via-zinc-950 to-black text-gray-100",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}
