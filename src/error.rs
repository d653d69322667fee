use thiserror::Error;

/// Error types for hovertip's configuration layer
///
/// The tooltip state machine never fails; only loading and rendering the
/// configuration can.
#[derive(Debug, Error)]
pub enum HovertipError {
    #[error("No configuration directory could be determined for this user")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Could not render configuration: {0}")]
    ConfigRender(#[from] toml::ser::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
