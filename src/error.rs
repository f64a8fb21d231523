/// Error type for instance limit lookups and table construction
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed instance type: {0:?} (expected \"<family>.<subtype>\")")]
    MalformedInstanceType(String),

    #[error("Unknown family: {0}")]
    UnknownFamily(String),

    #[error("Unknown subtype for family {family}: {subtype}")]
    UnknownSubtype { family: String, subtype: String },

    #[error("Invalid limits record: {0}")]
    InvalidRecord(String),

    #[error("Invalid limits for {instance_type}: {reason}")]
    InvalidLimits {
        instance_type: String,
        reason: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed<S: Into<String>>(input: S) -> Self {
        Error::MalformedInstanceType(input.into())
    }

    pub(crate) fn unknown_family<S: Into<String>>(family: S) -> Self {
        Error::UnknownFamily(family.into())
    }

    pub(crate) fn unknown_subtype<F, S>(family: F, subtype: S) -> Self
    where
        F: Into<String>,
        S: Into<String>,
    {
        Error::UnknownSubtype {
            family: family.into(),
            subtype: subtype.into(),
        }
    }

    pub(crate) fn invalid_record<S: Into<String>>(reason: S) -> Self {
        Error::InvalidRecord(reason.into())
    }

    pub(crate) fn invalid_limits<T, R>(instance_type: T, reason: R) -> Self
    where
        T: Into<String>,
        R: Into<String>,
    {
        Error::InvalidLimits {
            instance_type: instance_type.into(),
            reason: reason.into(),
        }
    }

    /// True for the three lookup failures (malformed input, unknown family,
    /// unknown subtype), false for table construction errors.
    pub fn is_unknown_instance_type(&self) -> bool {
        matches!(
            self,
            Error::MalformedInstanceType(_)
                | Error::UnknownFamily(_)
                | Error::UnknownSubtype { .. }
        )
    }
}

/// Result type for instance-limits operations
pub type Result<T> = std::result::Result<T, Error>;
