use thiserror::Error;

/// Errors emitted while parsing a tab bar parameter bag.
#[derive(Debug, Error)]
pub enum TabBarError {
    /// A required key is absent or has no usable value.
    #[error("missing required parameter: {field}")]
    MissingRequiredParameter { field: String },
    /// A key holds a value outside its recognized set.
    #[error(
        "invalid value `{value}` for `{field}`; expected one of: default, compact, floating, minimal"
    )]
    InvalidEnumValue { field: String, value: String },
    /// A key is present but its value has the wrong shape.
    #[error("invalid parameter: {field}")]
    InvalidParameter { field: String },
    /// The JSON document could not be decoded.
    #[error("tab bar parameters JSON failed")]
    Json(#[from] serde_json::Error),
}

impl TabBarError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingRequiredParameter {
            field: field.to_owned(),
        }
    }

    pub(crate) fn invalid_enum(field: &str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            field: field.to_owned(),
            value: value.into(),
        }
    }

    pub(crate) fn invalid(field: &str) -> Self {
        Self::InvalidParameter {
            field: field.to_owned(),
        }
    }
}
