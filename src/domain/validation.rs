use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing { field: &'static str },
    MissingContent { fields: &'static [&'static str] },
    InvalidPhoneNumber { input: String },
    UnknownEnvironment { input: String },
    UnknownModuleId { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required parameter: {field}"),
            Self::MissingContent { fields } => {
                write!(f, "at least one of {} is required", fields.join(", "))
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::UnknownEnvironment { input } => {
                write!(
                    f,
                    "unknown environment: {input} (expected production, sandbox or mock)"
                )
            }
            Self::UnknownModuleId { input } => write!(f, "unknown module id: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
