use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine config directory")]
    NoConfigDir,
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileKitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width must be 200-8192".into());
        assert_eq!(
            err.to_string(),
            "config validation error: window.width must be 200-8192"
        );

        let err = ConfigError::NoConfigDir;
        assert_eq!(err.to_string(), "could not determine config directory");
    }

    #[test]
    fn config_io_error_keeps_path_and_source() {
        use std::error::Error;

        let err = ConfigError::Io {
            path: PathBuf::from("/etc/profilekit/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "config I/O error at /etc/profilekit/config.toml: denied"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn profilekit_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ProfileKitError = config_err.into();
        assert!(matches!(err, ProfileKitError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn profilekit_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "avatar.png");
        let err: ProfileKitError = io_err.into();
        assert!(matches!(err, ProfileKitError::Io(_)));
        assert!(err.to_string().contains("avatar.png"));
    }

    #[test]
    fn profilekit_error_other_variants() {
        let err = ProfileKitError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");

        let err = ProfileKitError::WebView("engine refused child".into());
        assert_eq!(err.to_string(), "webview error: engine refused child");

        let err = ProfileKitError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
