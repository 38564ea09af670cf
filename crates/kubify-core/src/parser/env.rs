use crate::error::{ValidationError, ValidationResult, rules};
use crate::model::EnvVar;

const OPERATION: &str = "parse_env_var";

/// `key=value` をパースする
///
/// 最初の `=` でのみ分割するので、値に `=` を含めてよい。
pub fn parse_env_var(text: &str) -> ValidationResult<EnvVar> {
    if text.is_empty() {
        return Err(ValidationError::EmptyInput {
            operation: OPERATION,
            parameter: "envVarText",
            rule: rules::TEXT_IS_NOT_EMPTY,
        });
    }

    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| ValidationError::MalformedAssignment {
            operation: OPERATION,
            parameter: "envVarText",
            rule: rules::ASSIGNMENT_HAS_DELIMITER,
            input: text.to_string(),
        })?;

    if key.is_empty() {
        return Err(ValidationError::MalformedAssignment {
            operation: OPERATION,
            parameter: "key",
            rule: rules::KEY_IS_NOT_EMPTY,
            input: text.to_string(),
        });
    }

    Ok(EnvVar::new(key, value))
}
