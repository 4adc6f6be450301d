//! Phases of a single dependency check.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Invalid transition from {from:?} to {to:?}")]
    InvalidTransition { from: GuardPhase, to: GuardPhase },
    #[error("Cannot transition from terminal phase {phase:?}")]
    FromTerminalPhase { phase: GuardPhase },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardPhase {
    #[default]
    Idle,
    Checking,
    /// Dependents exist; the node stays.
    Blocked,
    /// No dependents; the node may be removed.
    Allowed,
}

impl GuardPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Blocked | Self::Allowed)
    }

    pub fn validate(from: GuardPhase, to: GuardPhase) -> Result<(), TransitionError> {
        if from.is_terminal() {
            return Err(TransitionError::FromTerminalPhase { phase: from });
        }
        let ok = matches!(
            (from, to),
            (GuardPhase::Idle, GuardPhase::Checking)
                | (GuardPhase::Checking, GuardPhase::Blocked)
                | (GuardPhase::Checking, GuardPhase::Allowed)
        );
        if ok {
            Ok(())
        } else {
            Err(TransitionError::InvalidTransition { from, to })
        }
    }
}

/// Tracks one check through its phases.
#[derive(Debug, Default)]
pub struct DependencyCheck {
    phase: GuardPhase,
}

impl DependencyCheck {
    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    pub fn advance(&mut self, to: GuardPhase) -> Result<(), TransitionError> {
        GuardPhase::validate(self.phase, to)?;
        self.phase = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths() {
        for end in [GuardPhase::Blocked, GuardPhase::Allowed] {
            let mut check = DependencyCheck::default();
            assert!(check.advance(GuardPhase::Checking).is_ok());
            assert!(check.advance(end).is_ok());
            assert_eq!(check.phase(), end);
        }
    }

    #[test]
    fn test_cannot_skip_checking() {
        assert!(GuardPhase::validate(GuardPhase::Idle, GuardPhase::Allowed).is_err());
        assert!(GuardPhase::validate(GuardPhase::Idle, GuardPhase::Blocked).is_err());
    }

    #[test]
    fn test_terminal_phases_are_final() {
        assert!(matches!(
            GuardPhase::validate(GuardPhase::Blocked, GuardPhase::Allowed),
            Err(TransitionError::FromTerminalPhase { .. })
        ));
        assert!(GuardPhase::validate(GuardPhase::Allowed, GuardPhase::Checking).is_err());
    }
}
