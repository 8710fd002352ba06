/// Errors from the fallible edges of the crate: typed extraction and option loading.
///
/// Conversion itself never fails; unsupported input becomes `DynamicValue::Null`.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: String },

    #[error("options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("options: tag label must not be empty")]
    EmptyTagLabel,
}
