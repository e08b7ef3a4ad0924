//! Validation engine
//!
//! Classifies pair rows and gates submission: a single half-filled row
//! blocks the whole list, and at least one complete pair is mandatory.

use crate::error::{Error, Result};
use crate::pairs::{PairList, PairRow, PairValues};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // http:// or https://, then at least one character that is not
    // whitespace, '/' or '.', then any run of non-whitespace.
    static ref REMOTE_SOURCE_RE: Regex =
        Regex::new(r"^https?://[^\s/.]+\S*$").unwrap();
}

/// Classification of a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairClass {
    /// Both fields blank
    Empty,
    /// Both fields non-blank
    Complete,
    /// Exactly one field non-blank
    Incomplete,
}

pub fn classify(row: &PairRow) -> PairClass {
    match (row.landing.trim().is_empty(), row.front.trim().is_empty()) {
        (true, true) => PairClass::Empty,
        (false, false) => PairClass::Complete,
        _ => PairClass::Incomplete,
    }
}

/// Derive the submission set from the current list state.
///
/// Fails on the first half-filled row, on node names that would collide
/// with the `:`/`,` pair delimiters, and when no complete pair remains.
pub fn validate_for_submission(list: &PairList) -> Result<Vec<PairValues>> {
    let mut submission = Vec::new();
    for (index, row) in list.rows().iter().enumerate() {
        match classify(row) {
            PairClass::Incomplete => return Err(Error::IncompletePair(index + 1)),
            PairClass::Complete => submission.push(row.trimmed()),
            PairClass::Empty => {}
        }
    }
    for pair in &submission {
        for name in [&pair.landing, &pair.front] {
            if name.contains(':') || name.contains(',') {
                return Err(Error::ReservedDelimiter(name.clone()));
            }
        }
    }
    if submission.is_empty() {
        return Err(Error::NoCompletePair);
    }
    Ok(submission)
}

/// Validate the original subscription link.
///
/// Returns the trimmed value on success.
pub fn validate_remote_source(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingSource);
    }
    if !REMOTE_SOURCE_RE.is_match(trimmed) {
        return Err(Error::MalformedSource);
    }
    Ok(trimmed.to_string())
}
