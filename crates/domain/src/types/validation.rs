//! Outcomes of the appointment date rule chain

use std::fmt;

use crate::errors::RemoteError;

/// Result of validating a candidate appointment date.
///
/// Produced per call, never persisted. `LookupFailed` means the holiday
/// source could not be consulted; it is never collapsed into `Valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    PastDate,
    Weekend,
    Holiday,
    LookupFailed(RemoteError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The user-facing rejection for domain failures, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::PastDate => Some(Rejection::PastDate),
            Self::Weekend => Some(Rejection::Weekend),
            Self::Holiday => Some(Rejection::Holiday),
            Self::Valid | Self::LookupFailed(_) => None,
        }
    }
}

/// Expected, user-facing reasons a booking is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    PastDate,
    Weekend,
    Holiday,
    DuplicateDate,
}

impl Rejection {
    /// Stable label for structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PastDate => "past_date",
            Self::Weekend => "weekend",
            Self::Holiday => "holiday",
            Self::DuplicateDate => "duplicate_date",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PastDate => "Visit date cannot be in the past",
            Self::Weekend => "Visit date is a weekend",
            Self::Holiday => "Visit date is a public holiday",
            Self::DuplicateDate => "An appointment already exists for this date",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}
