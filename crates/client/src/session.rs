//! The explicit session context.
//!
//! Session identity and UI preferences used to be read from ambient storage
//! by whichever component needed them. They are hoisted here into one
//! explicit object with a single construction entry point
//! ([`SessionContext::establish`]) and a single mutation entry point
//! ([`SessionContext::set_theme`]); components receive it by reference.
//!
//! Authentication itself stays out of scope: the HTTP client carries the
//! session cookie ambiently, and an expired session is an ordinary failure
//! path through the error taxonomy.

use std::fmt;
use std::str::FromStr;

/// UI color theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("unknown theme: {s}")),
        }
    }
}

/// Per-session identity and preferences, passed to every screen that needs
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    member_id: String,
    display_name: Option<String>,
    theme: Theme,
}

impl SessionContext {
    /// Establishes the session context once, at sign-in.
    pub fn establish(member_id: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            member_id: member_id.into(),
            display_name,
            theme: Theme::default(),
        }
    }

    /// The signed-in member's id.
    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// The signed-in member's display name, when known.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// The current theme preference.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The one mutation entry point: switches the theme preference.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
