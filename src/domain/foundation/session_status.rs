//! SessionStatus enum for tracking the lifecycle of interview practice sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{DomainError, StateMachine};

/// Lifecycle status of an interview practice session.
///
/// Serialized by canonical name (`"Started"`, `"InProgress"`, ...). Deserializing
/// any other name fails with `UnknownStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SessionStatus {
    /// Session created, interview not yet begun.
    Started,
    /// Interview underway.
    InProgress,
    /// Interview scored. Terminal.
    Completed,
    /// Interview abandoned. Terminal.
    Cancelled,
}

impl SessionStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [SessionStatus; 4] = [
        SessionStatus::Started,
        SessionStatus::InProgress,
        SessionStatus::Completed,
        SessionStatus::Cancelled,
    ];

    /// Canonical name used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Started => "Started",
            SessionStatus::InProgress => "InProgress",
            SessionStatus::Completed => "Completed",
            SessionStatus::Cancelled => "Cancelled",
        }
    }
}

impl StateMachine for SessionStatus {
    /// Valid transitions:
    /// - Started -> InProgress | Cancelled
    /// - InProgress -> Completed | Cancelled
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Started, InProgress)
                | (Started, Cancelled)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::unknown_status(s))
    }
}

impl TryFrom<String> for SessionStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use proptest::prelude::*;
    use SessionStatus::*;

    /// The transition table, written out in full.
    const TABLE: [(SessionStatus, SessionStatus, bool); 16] = [
        (Started, Started, false),
        (Started, InProgress, true),
        (Started, Completed, false),
        (Started, Cancelled, true),
        (InProgress, Started, false),
        (InProgress, InProgress, false),
        (InProgress, Completed, true),
        (InProgress, Cancelled, true),
        (Completed, Started, false),
        (Completed, InProgress, false),
        (Completed, Completed, false),
        (Completed, Cancelled, false),
        (Cancelled, Started, false),
        (Cancelled, InProgress, false),
        (Cancelled, Completed, false),
        (Cancelled, Cancelled, false),
    ];

    #[test]
    fn can_transition_to_matches_table_for_all_pairs() {
        for (from, to, expected) in TABLE {
            assert_eq!(
                from.can_transition_to(&to),
                expected,
                "{} -> {} should be {}",
                from,
                to,
                expected
            );
        }
    }

    #[test]
    fn terminal_states_have_no_exits() {
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Started.is_terminal());
        assert!(!InProgress.is_terminal());
    }

    #[test]
    fn valid_transitions_follow_the_table() {
        assert_eq!(Started.valid_transitions(), vec![InProgress, Cancelled]);
        assert_eq!(InProgress.valid_transitions(), vec![Completed, Cancelled]);
        assert!(Completed.valid_transitions().is_empty());
        assert!(Cancelled.valid_transitions().is_empty());
    }

    #[test]
    fn self_transitions_are_rejected() {
        for status in SessionStatus::ALL {
            assert!(!status.can_transition_to(&status));
        }
    }

    #[test]
    fn transition_to_rejects_leaving_cancelled() {
        let err = Cancelled.transition_to(InProgress).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn parses_canonical_names() {
        let status: SessionStatus = "Completed".parse().unwrap();
        assert_eq!(status, Completed);
        for status in SessionStatus::ALL {
            assert_eq!(status.as_str().parse::<SessionStatus>().unwrap(), status);
        }
    }

    #[test]
    fn parsing_unknown_name_fails_with_unknown_status() {
        let err = "Finished".parse::<SessionStatus>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownStatus);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("completed".parse::<SessionStatus>().is_err());
        assert!("IN_PROGRESS".parse::<SessionStatus>().is_err());
    }

    #[test]
    fn serializes_to_canonical_name() {
        assert_eq!(serde_json::to_string(&InProgress).unwrap(), "\"InProgress\"");
        assert_eq!(serde_json::to_string(&Cancelled).unwrap(), "\"Cancelled\"");
    }

    #[test]
    fn deserialization_rejects_unknown_name() {
        let ok: SessionStatus = serde_json::from_str("\"Started\"").unwrap();
        assert_eq!(ok, Started);

        let err = serde_json::from_str::<SessionStatus>("\"Finished\"").unwrap_err();
        assert!(err.to_string().contains("Finished"));
    }

    fn any_status() -> impl Strategy<Value = SessionStatus> {
        proptest::sample::select(SessionStatus::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn can_transition_to_agrees_with_valid_transitions(
            from in any_status(),
            to in any_status(),
        ) {
            prop_assert_eq!(
                from.can_transition_to(&to),
                from.valid_transitions().contains(&to)
            );
        }

        #[test]
        fn transition_to_is_ok_exactly_when_allowed(
            from in any_status(),
            to in any_status(),
        ) {
            prop_assert_eq!(from.transition_to(to).is_ok(), from.can_transition_to(&to));
        }
    }
}
