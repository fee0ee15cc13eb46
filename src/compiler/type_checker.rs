use crate::compiler::ast::DataType;
use crate::compiler::error::{SizeViolation, TypeError};
use crate::types::VARCHAR_PREFIX;

/// Validate every type token and collect all errors instead of stopping at the first one.
pub fn check_types<'a, I>(types: I) -> Result<Vec<DataType>, Vec<TypeError>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut resolved = Vec::new();
    let mut errors = Vec::new();

    for token in types {
        match check_type(token) {
            Ok(data_type) => resolved.push(data_type),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(resolved)
    } else {
        Err(errors)
    }
}

/**
type := INT | FLOAT | CHAR | VARCHAR | VARCHAR ( digits )
 */
pub fn check_type(token: &str) -> Result<DataType, TypeError> {
    let upper = token.to_ascii_uppercase();
    if let Some(data_type) = DataType::from_base(&upper) {
        return Ok(data_type);
    }

    let size = upper
        .strip_prefix(VARCHAR_PREFIX)
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| TypeError::UnknownType(token.to_string()))?;

    parse_varchar_size(size)
        .map(|n| DataType::Varchar(Some(n)))
        .map_err(|reason| TypeError::InvalidVarcharSize {
            token: token.to_string(),
            size: size.to_string(),
            reason,
        })
}

fn parse_varchar_size(size: &str) -> Result<u32, SizeViolation> {
    if size.is_empty() {
        return Err(SizeViolation::Empty);
    }
    if size.starts_with('-') {
        return Err(SizeViolation::Negative);
    }
    if !size.chars().all(|c| c.is_ascii_digit()) {
        return Err(SizeViolation::NonDigit);
    }
    // only digits left, so the only failure is overflow
    size.parse::<u32>().map_err(|_| SizeViolation::TooLarge)
}
