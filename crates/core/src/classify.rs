use serde::{Deserialize, Serialize};

use crate::number::{digit_sum, is_armstrong, is_even, is_perfect, is_prime};

/// Largest magnitude accepted for classification
pub const MAX_MAGNITUDE: i64 = 1_000_000_000;

pub const MISSING_MESSAGE: &str = "The 'number' query parameter is required.";
pub const NOT_NUMERIC_MESSAGE: &str = "Input is not a valid base-10 integer.";
pub const TOO_LARGE_MESSAGE: &str = "Number is too large to process.";

/// Tag attached to a classified number
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Even,
    Odd,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Armstrong => "armstrong",
            Property::Even => "even",
            Property::Odd => "odd",
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Successful classification payload
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

/// Why an input could not be classified
///
/// Every variant is a client error: the caller sent something that is not a
/// classifiable integer, so retrying the same input never helps.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("{}", MISSING_MESSAGE)]
    Missing,

    #[error("{msg} Got: {0:?}", msg = NOT_NUMERIC_MESSAGE)]
    NotNumeric(String),

    /// Parsed, but outside `[-MAX_MAGNITUDE, MAX_MAGNITUDE]`
    #[error("{msg} Got: {0}", msg = TOO_LARGE_MESSAGE)]
    TooLarge(i64),

    /// A digit string that does not even fit in an `i64`
    #[error("{msg} Got: {0:?}", msg = TOO_LARGE_MESSAGE)]
    Overflow(String),
}

/// Echo of the offending input inside an error payload
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RejectedNumber {
    Parsed(i64),
    Raw(String),
}

/// JSON body returned for a rejected input
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorPayload {
    pub number: RejectedNumber,
    /// Always `true`; lets clients detect a rejection without inspecting status
    pub error: bool,
    pub message: String,
}

impl ClassifyError {
    pub fn message(&self) -> &'static str {
        match self {
            ClassifyError::Missing => MISSING_MESSAGE,
            ClassifyError::NotNumeric(_) => NOT_NUMERIC_MESSAGE,
            ClassifyError::TooLarge(_) | ClassifyError::Overflow(_) => TOO_LARGE_MESSAGE,
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        let number = match self {
            ClassifyError::Missing => RejectedNumber::Raw(String::new()),
            ClassifyError::NotNumeric(raw) | ClassifyError::Overflow(raw) => {
                RejectedNumber::Raw(raw.clone())
            }
            ClassifyError::TooLarge(n) => RejectedNumber::Parsed(*n),
        };

        ErrorPayload {
            number,
            error: true,
            message: self.message().to_string(),
        }
    }
}

/// Validate and parse the raw `number` query parameter
///
/// Accepts an optional single leading `-` followed by one or more ASCII
/// digits. Anything else (a `+` sign, whitespace, decimal points, trailing
/// letters) is rejected rather than truncated.
pub fn parse_number_param(raw: Option<&str>) -> Result<i64, ClassifyError> {
    let raw = match raw {
        None | Some("") => return Err(ClassifyError::Missing),
        Some(raw) => raw,
    };

    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClassifyError::NotNumeric(raw.to_string()));
    }

    // Only digits and an optional sign remain, so the sole failure mode is overflow.
    let n: i64 = raw
        .parse()
        .map_err(|_| ClassifyError::Overflow(raw.to_string()))?;

    if n.unsigned_abs() > MAX_MAGNITUDE as u64 {
        return Err(ClassifyError::TooLarge(n));
    }

    Ok(n)
}

/// Validate every value supplied for the `number` key of a query string
///
/// No value at all is missing input. More than one value is ambiguous and is
/// rejected as non-numeric, echoing the values joined with `,`.
pub fn parse_number_values(values: &[&str]) -> Result<i64, ClassifyError> {
    match values {
        [] => Err(ClassifyError::Missing),
        [value] => parse_number_param(Some(*value)),
        values => Err(ClassifyError::NotNumeric(values.join(","))),
    }
}

/// Property tags in response order: `armstrong` (when it holds), then parity
pub fn properties(n: i64) -> Vec<Property> {
    let mut properties = Vec::with_capacity(2);

    if is_armstrong(n) {
        properties.push(Property::Armstrong);
    }
    properties.push(if is_even(n) {
        Property::Even
    } else {
        Property::Odd
    });

    properties
}

/// Build the full classification for an already validated number
pub fn classify(n: i64, fun_fact: impl Into<String>) -> Classification {
    Classification {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties: properties(n),
        digit_sum: digit_sum(n),
        fun_fact: fun_fact.into(),
    }
}
