//! State machine trait for status enums.
//!
//! Gives lifecycle enums (such as a hub section's fetch status) one way to
//! declare and check their legal transitions.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for SectionStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (_, Idle) | (_, Loading) | (Loading, Loaded) | (Loading, Failed))
///     }
///     // ...
/// }
///
/// let next = status.transition_to(SectionStatus::Loaded)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
