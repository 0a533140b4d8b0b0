//! Message-only errors that carry their source location.

macro_rules! located_error {
    ($(#[$meta:meta])* $name:ident, $fmt:tt) => {
        $(#[$meta])*
        #[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
        #[display($fmt, message, line, file)]
        pub struct $name {
            /// What went wrong
            pub message: String,
            /// Line number where the error was raised
            pub line: u32,
            /// File where the error was raised
            pub file: &'static str,
        }

        impl $name {
            /// Create the error, recording the caller's location.
            #[track_caller]
            pub fn new(message: impl Into<String>) -> Self {
                let location = std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: location.line(),
                    file: location.file(),
                }
            }
        }
    };
}

located_error!(
    /// Failure encoding or decoding a JSON payload.
    JsonError,
    "JSON Error: {} at line {} in {}"
);

located_error!(
    /// Failure loading or validating configuration.
    ///
    /// ```
    /// use storygrid_error::ConfigError;
    ///
    /// let err = ConfigError::new("lead_ins must be a list");
    /// assert!(err.message.contains("lead_ins"));
    /// ```
    ConfigError,
    "Configuration Error: {} at line {} in {}"
);
