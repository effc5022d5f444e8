//! Length limits for entity attributes

/// Minimum length for park names (3 chars)
pub const MIN_PARK_NAME_LEN: usize = 3;

/// Minimum length for visitor names (1 char)
pub const MIN_VISITOR_NAME_LEN: usize = 1;

/// Maximum length for visitor names (15 chars)
pub const MAX_VISITOR_NAME_LEN: usize = 15;

/// Minimum length for trip dates (7 chars, e.g. "May 1st")
pub const MIN_DATE_LEN: usize = 7;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    ParkNameTooShort {
        len: usize,
        min: usize,
    },
    VisitorNameOutOfRange {
        len: usize,
        min: usize,
        max: usize,
    },
    DateTooShort {
        field: &'static str,
        len: usize,
        min: usize,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParkNameTooShort { len, min } => {
                write!(f, "Park name too short: {} chars (min {})", len, min)
            }
            Self::VisitorNameOutOfRange { len, min, max } => {
                write!(
                    f,
                    "Visitor name must be between {} and {} chars: got {}",
                    min, max, len
                )
            }
            Self::DateTooShort { field, len, min } => {
                write!(f, "{} too short: {} chars (min {})", field, len, min)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Length in characters, not bytes
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validate park name
pub fn validate_park_name(name: &str) -> Result<(), ValidationError> {
    let len = char_len(name);
    if len < MIN_PARK_NAME_LEN {
        return Err(ValidationError::ParkNameTooShort {
            len,
            min: MIN_PARK_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate visitor name
pub fn validate_visitor_name(name: &str) -> Result<(), ValidationError> {
    let len = char_len(name);
    if !(MIN_VISITOR_NAME_LEN..=MAX_VISITOR_NAME_LEN).contains(&len) {
        return Err(ValidationError::VisitorNameOutOfRange {
            len,
            min: MIN_VISITOR_NAME_LEN,
            max: MAX_VISITOR_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate a trip date; `field` names the date in the error
pub fn validate_date(field: &'static str, date: &str) -> Result<(), ValidationError> {
    let len = char_len(date);
    if len < MIN_DATE_LEN {
        return Err(ValidationError::DateTooShort {
            field,
            len,
            min: MIN_DATE_LEN,
        });
    }
    Ok(())
}
