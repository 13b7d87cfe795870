//! Form-field validation rules and error-message lookup.
//!
//! Rules are pure predicates over the candidate value, evaluated in a
//! fixed declared order. The first violated rule's code selects the
//! message the view displays; codes missing from the message table
//! fall back to a literal `Unknown error`.

/// Names assumed to already exist server-side (stand-in for a real
/// uniqueness check), rejected case-insensitively.
const TAKEN_NAMES: [&str; 2] = ["abc123", "123abc"];

/// A single field-level validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Value must be non-empty.
    Required,
    /// Value must be at least this many characters.
    MinLength(usize),
    /// Value must be at most this many characters.
    MaxLength(usize),
    /// Value must not be one of the taken names.
    ExistingName,
}

impl FieldRule {
    /// The error code this rule reports when violated.
    pub fn code(self) -> &'static str {
        match self {
            FieldRule::Required => "required",
            FieldRule::MinLength(_) => "minlength",
            FieldRule::MaxLength(_) => "maxlength",
            FieldRule::ExistingName => "existingName",
        }
    }

    /// Whether `value` violates this rule.
    ///
    /// Length rules do not enforce presence; an absent value is the
    /// `required` rule's concern.
    pub fn is_violated_by(self, value: &str) -> bool {
        match self {
            FieldRule::Required => value.is_empty(),
            FieldRule::MinLength(min) => !value.is_empty() && value.chars().count() < min,
            FieldRule::MaxLength(max) => value.chars().count() > max,
            FieldRule::ExistingName => {
                TAKEN_NAMES.iter().any(|taken| value.eq_ignore_ascii_case(taken))
            }
        }
    }
}

/// Rule set for the required text fields on the add-hunt form
/// (`title`, `hostid`, `description`).
pub const NAME_FIELD_RULES: &[FieldRule] = &[
    FieldRule::Required,
    FieldRule::MinLength(2),
    FieldRule::MaxLength(50),
    FieldRule::ExistingName,
];

/// Message table for the add-form's required text fields. Table order
/// fixes display precedence.
const FIELD_MESSAGES: [(&str, &str); 4] = [
    ("required", "Name is required"),
    ("minlength", "Name must be at least 2 characters long"),
    ("maxlength", "Name cannot be more than 50 characters long"),
    ("existingName", "Name has already been taken"),
];

/// Fallback for error codes missing from the table.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Evaluate `rules` against `value` in declared order, collecting the
/// codes of every violated rule.
pub fn violated_codes(value: &str, rules: &[FieldRule]) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| rule.is_violated_by(value))
        .map(|rule| rule.code())
        .collect()
}

/// Pick the message to display for a field's reported error codes.
///
/// Returns `None` for a clean field. The first table entry matching
/// any reported code wins; a field reporting only codes absent from
/// the table displays [`UNKNOWN_ERROR_MESSAGE`].
pub fn error_message(codes: &[&str]) -> Option<&'static str> {
    if codes.is_empty() {
        return None;
    }
    for (code, message) in FIELD_MESSAGES {
        if codes.contains(&code) {
            return Some(message);
        }
    }
    Some(UNKNOWN_ERROR_MESSAGE)
}
