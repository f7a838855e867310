use crate::error::ParseError;
use crate::list::IntegerList;
use std::num::IntErrorKind;

const DELIMITER: char = ',';

/// Parse a comma-separated list such as `"1, 2, 3"` or `"5,3,1"`.
///
/// Whitespace around each value is ignored and empty tokens are skipped, but
/// at least two values must remain.
pub fn parse_list(input: &str) -> Result<IntegerList, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    if !input.contains(DELIMITER) {
        return Err(ParseError::MissingDelimiter);
    }

    let values = input
        .split(DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_token)
        .collect::<Result<Vec<i64>, ParseError>>()?;

    if values.len() < 2 {
        return Err(ParseError::TooFewValues {
            found: values.len(),
        });
    }

    Ok(IntegerList::new(values))
}

fn parse_token(token: &str) -> Result<i64, ParseError> {
    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::Overflow {
            token: token.to_string(),
        },
        _ => ParseError::InvalidNumber {
            token: token.to_string(),
        },
    })
}
