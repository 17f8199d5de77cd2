//! Browser backend selection.

use std::fmt;

use thirtyfour::{Capabilities, ChromiumLikeCapabilities, DesiredCapabilities};
use tracing::warn;

use crate::error::Result;

/// The closed set of supported browser engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Chrome,
    Firefox,
}

impl Backend {
    /// Resolve a backend from a user-supplied name, case-insensitively.
    /// Unrecognized names warn once and fall back to Firefox.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "chrome" => Backend::Chrome,
            "firefox" => Backend::Firefox,
            _ => {
                warn!(browser = name, "browser not recognized, defaulting to Firefox");
                Backend::Firefox
            }
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Backend::Chrome => "Chrome",
            Backend::Firefox => "Firefox",
        }
    }

    /// The engine's own headless toggle. Geckodriver takes a single dash.
    pub fn headless_arg(self) -> &'static str {
        match self {
            Backend::Chrome => "--headless=new",
            Backend::Firefox => "-headless",
        }
    }

    /// Build the WebDriver capability object for this engine with the given
    /// argument strings injected.
    pub fn capabilities(self, args: &[String]) -> Result<Capabilities> {
        match self {
            Backend::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                for arg in args {
                    caps.add_arg(arg)?;
                }
                Ok(caps.into())
            }
            Backend::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                for arg in args {
                    caps.add_arg(arg)?;
                }
                Ok(caps.into())
            }
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
