//! Crate-level error types.

use std::fmt;

use crate::sync::ViewportRole;

/// Errors produced by the viewcube crate.
///
/// Nothing on the per-frame path returns these: sync and transitions
/// degrade to no-ops instead. They surface from configuration I/O and
/// from parsing user-supplied zone names.
#[derive(Debug)]
pub enum CubeError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A zone identifier outside the 26 known names.
    UnknownZone(String),
    /// A viewport has no orbit controller attached.
    MissingController(ViewportRole),
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownZone(name) => write!(f, "unknown zone: {name:?}"),
            Self::MissingController(role) => {
                write!(f, "no orbit controller attached to {role} viewport")
            }
        }
    }
}

impl std::error::Error for CubeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CubeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_zone() {
        let err = CubeError::UnknownZone("upside".to_owned());
        assert_eq!(err.to_string(), "unknown zone: \"upside\"");
    }

    #[test]
    fn missing_controller_names_the_viewport() {
        let err = CubeError::MissingController(ViewportRole::Primary);
        assert_eq!(
            err.to_string(),
            "no orbit controller attached to primary viewport"
        );
    }

    #[test]
    fn io_errors_expose_their_source() {
        use std::error::Error;
        let err: CubeError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
    }
}
