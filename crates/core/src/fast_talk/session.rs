use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::model::{QuestionError, QuestionText};

use super::budget::TimeBudget;
use super::feedback::SessionSummary;
use super::tasks::{TaskId, TaskQueue};

/// Countdown resolution.
pub const TICK: Duration = Duration::from_secs(1);

/// How long answer/skip/expiry feedback stays up before the next question.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

//
// ─── TYPES ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Configuring,
    Active,
    Completed,
}

/// Transient highlight on the question card after it was resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlowEffect {
    #[default]
    None,
    Positive,
    Negative,
}

/// What happens to the authored questions on reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    #[default]
    KeepQuestions,
    ClearQuestions,
}

/// Observable transitions, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started { total: usize, budget_secs: u32 },
    Tick { index: usize, remaining: u32 },
    Answered { index: usize, score: u32 },
    Skipped { index: usize },
    Expired { index: usize },
    Advanced { index: usize },
    Completed { score: u32, total: usize },
    Reset,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("questions can only be changed before the session starts")]
    NotConfiguring,
    #[error("no session is running")]
    NotActive,
    #[error("session has not started")]
    NotStarted,
    #[error("please add at least one question before starting")]
    NoQuestions,
    #[error("no question at position {index}")]
    QuestionIndexOutOfRange { index: usize },
    #[error("the current question was already answered")]
    AlreadyAnswered,
    #[error("waiting for the next question")]
    FeedbackPending,
    #[error(transparent)]
    Question(#[from] QuestionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionTask {
    CountdownTick,
    Advance { index: usize },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One Fast-Talk game: configuration, the timed run, and its result.
///
/// All timing goes through an owned [`TaskQueue`]: a one-second countdown while a
/// question is open and a single deferred advance after feedback. Leaving a
/// question or the active phase cancels whatever is pending, and deferred
/// advances also check that the question they were scheduled for is still current.
#[derive(Clone)]
pub struct FastTalkSession {
    questions: Vec<QuestionText>,
    budget: TimeBudget,
    reset_policy: ResetPolicy,
    phase: SessionPhase,
    current: usize,
    time_remaining: u32,
    answered: BTreeSet<usize>,
    failed: BTreeSet<usize>,
    score: u32,
    expired: bool,
    glow: GlowEffect,
    tasks: TaskQueue<SessionTask>,
    countdown: Option<TaskId>,
    pending_advance: Option<TaskId>,
}

impl Default for FastTalkSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FastTalkSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            budget: TimeBudget::default(),
            reset_policy: ResetPolicy::default(),
            phase: SessionPhase::Configuring,
            current: 0,
            time_remaining: 0,
            answered: BTreeSet::new(),
            failed: BTreeSet::new(),
            score: 0,
            expired: false,
            glow: GlowEffect::None,
            tasks: TaskQueue::new(),
            countdown: None,
            pending_advance: None,
        }
    }

    #[must_use]
    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn questions(&self) -> &[QuestionText] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn budget(&self) -> TimeBudget {
        self.budget
    }

    #[must_use]
    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The open question while active.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionText> {
        if self.phase == SessionPhase::Active {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn answered(&self) -> &BTreeSet<usize> {
        &self.answered
    }

    #[must_use]
    pub fn failed(&self) -> &BTreeSet<usize> {
        &self.failed
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    #[must_use]
    pub fn glow(&self) -> GlowEffect {
        self.glow
    }

    /// True while feedback is showing and the next question is queued.
    #[must_use]
    pub fn feedback_pending(&self) -> bool {
        self.pending_advance.is_some()
    }

    /// Number of timers still waiting to fire.
    #[must_use]
    pub fn scheduled_tasks(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            total: self.questions.len(),
            answered: self.answered.len(),
            failed: self.failed.len(),
        }
    }

    // ── configuring ───────────────────────────────────────────────────────────

    /// Append a question and return its position.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotConfiguring` once a run started and
    /// `SessionError::Question` for blank text.
    pub fn add_question(&mut self, text: impl Into<String>) -> Result<usize, SessionError> {
        self.ensure_configuring()?;
        let question = QuestionText::new(text)?;
        self.questions.push(question);
        Ok(self.questions.len() - 1)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotConfiguring` once a run started and
    /// `SessionError::QuestionIndexOutOfRange` for a bad position.
    pub fn remove_question(&mut self, index: usize) -> Result<QuestionText, SessionError> {
        self.ensure_configuring()?;
        if index >= self.questions.len() {
            return Err(SessionError::QuestionIndexOutOfRange { index });
        }
        Ok(self.questions.remove(index))
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotConfiguring` once a run started.
    pub fn set_budget(&mut self, budget: TimeBudget) -> Result<(), SessionError> {
        self.ensure_configuring()?;
        self.budget = budget;
        Ok(())
    }

    /// Begin the timed run at the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotConfiguring` if a run is already going or finished,
    /// and `SessionError::NoQuestions` when nothing was added. Neither changes state.
    pub fn start(&mut self) -> Result<SessionEvent, SessionError> {
        self.ensure_configuring()?;
        if self.questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        self.clear_run();
        self.phase = SessionPhase::Active;
        self.open_question(0);

        Ok(SessionEvent::Started {
            total: self.questions.len(),
            budget_secs: self.budget.secs(),
        })
    }

    // ── active ────────────────────────────────────────────────────────────────

    /// Score the current question and queue the next one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside a run, `SessionError::FeedbackPending`
    /// while the previous result is still showing and `SessionError::AlreadyAnswered`
    /// if this question already scored.
    pub fn mark_answered(&mut self) -> Result<SessionEvent, SessionError> {
        self.ensure_active()?;
        if self.feedback_pending() {
            return Err(SessionError::FeedbackPending);
        }
        let index = self.current;
        if self.answered.contains(&index) {
            return Err(SessionError::AlreadyAnswered);
        }

        self.score += 1;
        self.answered.insert(index);
        self.failed.remove(&index);
        self.resolve(GlowEffect::Positive);

        Ok(SessionEvent::Answered {
            index,
            score: self.score,
        })
    }

    /// Give up on the current question.
    ///
    /// An open question is recorded as failed and the next one follows after the
    /// feedback delay. A question that is already resolved moves on right away.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside a run and
    /// `SessionError::FeedbackPending` while the previous result is still showing.
    pub fn skip(&mut self) -> Result<SessionEvent, SessionError> {
        self.ensure_active()?;
        if self.feedback_pending() {
            return Err(SessionError::FeedbackPending);
        }
        let index = self.current;
        if self.answered.contains(&index) || self.failed.contains(&index) {
            return Ok(self.go_next());
        }

        self.failed.insert(index);
        self.resolve(GlowEffect::Negative);
        Ok(SessionEvent::Skipped { index })
    }

    /// Move virtual time forward, firing every timer that comes due.
    pub fn advance_clock(&mut self, elapsed: Duration) -> Vec<SessionEvent> {
        let until = self.tasks.now() + elapsed;
        let mut events = Vec::new();
        while let Some((id, task)) = self.tasks.pop_due(until) {
            match task {
                SessionTask::CountdownTick => self.on_tick(&mut events),
                SessionTask::Advance { index } => self.on_advance(id, index, &mut events),
            }
        }
        self.tasks.advance_to(until);
        events
    }

    /// Abort a run or leave the results screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` while still configuring.
    pub fn reset(&mut self) -> Result<SessionEvent, SessionError> {
        if self.phase == SessionPhase::Configuring {
            return Err(SessionError::NotStarted);
        }
        self.clear_run();
        self.phase = SessionPhase::Configuring;
        if self.reset_policy == ResetPolicy::ClearQuestions {
            self.questions.clear();
        }
        Ok(SessionEvent::Reset)
    }

    // ── internals ─────────────────────────────────────────────────────────────

    fn ensure_configuring(&self) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Configuring {
            Ok(())
        } else {
            Err(SessionError::NotConfiguring)
        }
    }

    fn ensure_active(&self) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Active {
            Ok(())
        } else {
            Err(SessionError::NotActive)
        }
    }

    fn clear_run(&mut self) {
        self.tasks.cancel_all();
        self.countdown = None;
        self.pending_advance = None;
        self.current = 0;
        self.time_remaining = 0;
        self.answered.clear();
        self.failed.clear();
        self.score = 0;
        self.expired = false;
        self.glow = GlowEffect::None;
    }

    fn open_question(&mut self, index: usize) {
        self.current = index;
        self.time_remaining = self.budget.secs();
        self.expired = false;
        self.glow = GlowEffect::None;
        self.countdown = Some(self.tasks.schedule_every(TICK, SessionTask::CountdownTick));
    }

    /// Stop the countdown, show feedback and queue the advance.
    fn resolve(&mut self, glow: GlowEffect) {
        self.stop_countdown();
        self.glow = glow;
        let index = self.current;
        self.pending_advance = Some(
            self.tasks
                .schedule_once(FEEDBACK_DELAY, SessionTask::Advance { index }),
        );
    }

    fn stop_countdown(&mut self) {
        if let Some(id) = self.countdown.take() {
            self.tasks.cancel(id);
        }
    }

    fn on_tick(&mut self, events: &mut Vec<SessionEvent>) {
        if self.phase != SessionPhase::Active || self.time_remaining == 0 {
            self.stop_countdown();
            return;
        }
        self.time_remaining -= 1;
        events.push(SessionEvent::Tick {
            index: self.current,
            remaining: self.time_remaining,
        });
        if self.time_remaining == 0 {
            let index = self.current;
            self.expired = true;
            if !self.answered.contains(&index) {
                self.failed.insert(index);
            }
            self.resolve(GlowEffect::Negative);
            events.push(SessionEvent::Expired { index });
        }
    }

    fn on_advance(&mut self, id: TaskId, index: usize, events: &mut Vec<SessionEvent>) {
        if self.pending_advance != Some(id) {
            return;
        }
        self.pending_advance = None;
        if self.phase != SessionPhase::Active || index != self.current {
            return;
        }
        events.push(self.go_next());
    }

    fn go_next(&mut self) -> SessionEvent {
        self.stop_countdown();
        let next = self.current + 1;
        if next < self.questions.len() {
            self.open_question(next);
            SessionEvent::Advanced { index: next }
        } else {
            self.complete()
        }
    }

    fn complete(&mut self) -> SessionEvent {
        self.tasks.cancel_all();
        self.countdown = None;
        self.pending_advance = None;
        self.phase = SessionPhase::Completed;
        self.glow = GlowEffect::None;
        self.expired = false;
        SessionEvent::Completed {
            score: self.score,
            total: self.questions.len(),
        }
    }
}

impl fmt::Debug for FastTalkSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastTalkSession")
            .field("phase", &self.phase)
            .field("questions_len", &self.questions.len())
            .field("budget", &self.budget.secs())
            .field("current", &self.current)
            .field("time_remaining", &self.time_remaining)
            .field("score", &self.score)
            .field("answered", &self.answered)
            .field("failed", &self.failed)
            .field("glow", &self.glow)
            .field("scheduled_tasks", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
