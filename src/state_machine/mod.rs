// Task lifecycle state machine for one bridge execution.
//
// Every status event the executor publishes is routed through a
// `TaskStateMachine`, so the `final` flag always follows from the target state.

pub mod errors;
pub mod events;
pub mod states;
pub mod task_state_machine;

pub use errors::{StateMachineError, StateMachineResult};
pub use events::TaskEvent;
pub use states::TaskState;
pub use task_state_machine::TaskStateMachine;
