//! Run state machine

use std::fmt;

/// Lifecycle of a single run
///
/// `Init -> Partitioned -> Dispatched -> Running -> {Completed | Interrupted}`,
/// plus `Init -> Interrupted` for a signal that lands while input is still
/// being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing done yet
    Init,
    /// Chunks computed
    Partitioned,
    /// Worker tasks spawned
    Dispatched,
    /// Waiting on the completion barrier and the interrupt listener
    Running,
    /// Every worker signalled completion
    Completed,
    /// An interrupt arrived before the barrier released
    Interrupted,
}

impl RunState {
    /// Whether no further transition is possible
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Completed | RunState::Interrupted)
    }

    /// Whether `self -> next` is a legal step
    pub fn can_transition_to(self, next: RunState) -> bool {
        use RunState::*;
        matches!(
            (self, next),
            (Init, Partitioned)
                | (Init, Interrupted)
                | (Partitioned, Dispatched)
                | (Dispatched, Running)
                | (Running, Completed)
                | (Running, Interrupted)
        )
    }

    /// Process exit status for a terminal state
    pub fn exit_code(self) -> i32 {
        match self {
            RunState::Interrupted => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Init => "init",
            RunState::Partitioned => "partitioned",
            RunState::Dispatched => "dispatched",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Interrupted => "interrupted",
        };
        f.write_str(name)
    }
}
