//! Timed couples question game.

mod budget;
mod feedback;
mod session;
mod tasks;

pub use budget::{LOW_TIME_SECS, TimeBudget, TimeBudgetError, format_clock};
pub use feedback::{SessionSummary, feedback_message};
pub use session::{
    FEEDBACK_DELAY, FastTalkSession, GlowEffect, ResetPolicy, SessionError, SessionEvent,
    SessionPhase, TICK,
};
pub use tasks::{TaskId, TaskQueue};
