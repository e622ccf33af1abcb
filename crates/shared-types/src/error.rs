use std::fmt;

/// Categorization of portal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalErrorKind {
    /// The embedded configuration could not be parsed.
    InvalidConfig,
    /// A path does not belong to any known portal screen.
    UnknownPath,
}

impl fmt::Display for PortalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
            PortalErrorKind::UnknownPath => write!(f, "UnknownPath"),
        }
    }
}

/// Structured error shared by the portal crates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalError {
    pub kind: PortalErrorKind,
    pub message: String,
}

impl PortalError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: PortalErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    pub fn unknown_path(path: &str) -> Self {
        Self {
            kind: PortalErrorKind::UnknownPath,
            message: format!("no screen is mapped to `{path}`"),
        }
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PortalError {}

impl From<toml::de::Error> for PortalError {
    fn from(err: toml::de::Error) -> Self {
        PortalError::invalid_config(err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = PortalError::invalid_config("bad value");
        assert_eq!(err.to_string(), "InvalidConfig: bad value");
    }

    #[test]
    fn unknown_path_mentions_the_path() {
        let err = PortalError::unknown_path("/garagem");
        assert_eq!(err.kind, PortalErrorKind::UnknownPath);
        assert!(err.message.contains("/garagem"));
    }

    #[test]
    fn toml_errors_convert_to_invalid_config() {
        let err: PortalError = toml::from_str::<toml::Value>("= nope")
            .unwrap_err()
            .into();
        assert_eq!(err.kind, PortalErrorKind::InvalidConfig);
    }
}
