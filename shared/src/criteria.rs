//! Password criteria checklist
//!
//! The create-user form shows five independent rules under the password
//! field. Each rule is re-evaluated on every keystroke and rendered as a
//! passed/failed row. The checklist is advisory only: submission is never
//! blocked on it, the signup API rejects unacceptable passwords with HTTP 400.

use serde::Serialize;

/// Characters accepted by the "special character" rule
pub const SPECIAL_CHARACTERS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>',
];

/// Minimum password length in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A single password rule shown in the checklist
#[derive(Debug, Clone, Copy)]
pub struct PasswordCriterion {
    /// Text rendered next to the pass/fail mark
    pub label: &'static str,
    /// Returns true when the password satisfies this rule
    pub predicate: fn(&str) -> bool,
}

impl PasswordCriterion {
    /// Evaluate this rule against a password
    pub fn check(&self, password: &str) -> CriterionStatus {
        CriterionStatus {
            label: self.label,
            satisfied: (self.predicate)(password),
        }
    }
}

/// Result of evaluating one criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CriterionStatus {
    pub label: &'static str,
    pub satisfied: bool,
}

fn has_min_length(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(&c))
}

/// The checklist, in display order
pub static PASSWORD_CRITERIA: [PasswordCriterion; 5] = [
    PasswordCriterion {
        label: "At least 8 characters",
        predicate: has_min_length,
    },
    PasswordCriterion {
        label: "Contains uppercase letter",
        predicate: has_uppercase,
    },
    PasswordCriterion {
        label: "Contains lowercase letter",
        predicate: has_lowercase,
    },
    PasswordCriterion {
        label: "Contains number",
        predicate: has_digit,
    },
    PasswordCriterion {
        label: "Contains special character",
        predicate: has_special,
    },
];

/// Evaluate every criterion against the password, in display order
pub fn evaluate(password: &str) -> Vec<CriterionStatus> {
    PASSWORD_CRITERIA
        .iter()
        .map(|criterion| criterion.check(password))
        .collect()
}
