use super::{
    errors::{StateMachineError, StateMachineResult},
    events::TaskEvent,
    states::TaskState,
};
use tracing::debug;

/// Per-execution task state machine
///
/// Holds no shared state; each executor run creates its own instance starting
/// at `submitted`.
#[derive(Debug, Clone, Default)]
pub struct TaskStateMachine {
    current: TaskState,
}

impl TaskStateMachine {
    /// Create a new state machine in the `submitted` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state of the task
    pub fn current_state(&self) -> TaskState {
        self.current
    }

    /// Attempt to transition the task state
    pub fn transition(&mut self, event: &TaskEvent) -> StateMachineResult<TaskState> {
        let target = Self::determine_target_state(self.current, event)?;
        debug!(
            from = %self.current,
            to = %target,
            event = event.event_type(),
            "Task state transition"
        );
        self.current = target;
        Ok(target)
    }

    /// Determine the target state based on current state and event
    fn determine_target_state(
        current_state: TaskState,
        event: &TaskEvent,
    ) -> StateMachineResult<TaskState> {
        let target = match (current_state, event) {
            (TaskState::Submitted, TaskEvent::Start) => TaskState::Working,

            (TaskState::Working, TaskEvent::Complete) => TaskState::Completed,

            // Precondition failures happen before the task starts working
            (TaskState::Submitted, TaskEvent::Fail(_)) => TaskState::Failed,
            (TaskState::Working, TaskEvent::Fail(_)) => TaskState::Failed,

            (from_state, _) => {
                return Err(StateMachineError::InvalidTransition {
                    from: from_state.to_string(),
                    event: event.event_type().to_string(),
                })
            }
        };

        Ok(target)
    }

    /// Check if the task is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let mut sm = TaskStateMachine::new();
        assert_eq!(sm.current_state(), TaskState::Submitted);

        assert_eq!(sm.transition(&TaskEvent::Start).unwrap(), TaskState::Working);
        assert!(!sm.is_terminal());
        assert_eq!(
            sm.transition(&TaskEvent::Complete).unwrap(),
            TaskState::Completed
        );
        assert!(sm.is_terminal());
    }

    #[test]
    fn test_failure_from_submitted_and_working() {
        let mut sm = TaskStateMachine::new();
        assert_eq!(
            sm.transition(&TaskEvent::fail_with_error("no message"))
                .unwrap(),
            TaskState::Failed
        );

        let mut sm = TaskStateMachine::new();
        sm.transition(&TaskEvent::Start).unwrap();
        assert_eq!(
            sm.transition(&TaskEvent::fail_with_error("boom")).unwrap(),
            TaskState::Failed
        );
    }

    #[test]
    fn test_invalid_transitions() {
        // Cannot complete before working
        let mut sm = TaskStateMachine::new();
        assert!(sm.transition(&TaskEvent::Complete).is_err());
        assert_eq!(sm.current_state(), TaskState::Submitted);

        // Terminal states accept nothing further
        sm.transition(&TaskEvent::Start).unwrap();
        sm.transition(&TaskEvent::Complete).unwrap();
        let err = sm
            .transition(&TaskEvent::fail_with_error("late"))
            .unwrap_err();
        assert_eq!(
            err,
            StateMachineError::InvalidTransition {
                from: "completed".to_string(),
                event: "fail".to_string(),
            }
        );
        assert!(sm.transition(&TaskEvent::Start).is_err());
    }
}
