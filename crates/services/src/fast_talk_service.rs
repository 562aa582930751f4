use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

use couple_core::fast_talk::{
    FastTalkSession, ResetPolicy, SessionError, SessionEvent, SessionPhase, SessionSummary,
    TimeBudget,
};

use crate::Clock;
use crate::error::FastTalkError;

/// Prompts offered while authoring a Fast-Talk list.
pub static SUGGESTIONS: [&str; 8] = [
    "What's your favorite memory of us together?",
    "What small thing do I do that makes you smile?",
    "If we could travel anywhere right now, where would you want to go?",
    "What's one thing you want us to try together this year?",
    "What was your first impression of me?",
    "What's something I do that you find adorable?",
    "If you could change one thing about our relationship, what would it be?",
    "What's one thing you've always wanted to tell me but haven't?",
];

/// How many suggestions are shown as quick-add chips.
pub const FEATURED_SUGGESTIONS: usize = 4;

/// Drives a `FastTalkSession` for the UI and logs what happens.
#[derive(Debug, Clone)]
pub struct FastTalkService {
    clock: Clock,
    session: FastTalkSession,
    budget_input: String,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl FastTalkService {
    #[must_use]
    pub fn new(clock: Clock, policy: ResetPolicy) -> Self {
        let session = FastTalkSession::new().with_reset_policy(policy);
        Self {
            clock,
            budget_input: session.budget().secs().to_string(),
            session,
            started_at: None,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &FastTalkSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    /// Raw text of the time-per-question field.
    #[must_use]
    pub fn budget_input(&self) -> &str {
        &self.budget_input
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        self.session.summary()
    }

    // ── configuring ───────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns `FastTalkError::Session` for blank text or outside configuration.
    pub fn add_question(&mut self, text: &str) -> Result<usize, FastTalkError> {
        let index = self.session.add_question(text)?;
        debug!(index, "question added");
        Ok(index)
    }

    /// # Errors
    ///
    /// Returns `FastTalkError::UnknownSuggestion` for a bad position.
    pub fn add_suggestion(&mut self, position: usize) -> Result<usize, FastTalkError> {
        let text = SUGGESTIONS
            .get(position)
            .ok_or(FastTalkError::UnknownSuggestion(position))?;
        self.add_question(text)
    }

    /// # Errors
    ///
    /// Returns `FastTalkError::Session` outside configuration.
    pub fn add_random_suggestion<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<usize, FastTalkError> {
        let text = SUGGESTIONS
            .choose(rng)
            .ok_or(FastTalkError::UnknownSuggestion(0))?;
        self.add_question(text)
    }

    /// # Errors
    ///
    /// Returns `FastTalkError::Session` for a bad index or outside configuration.
    pub fn remove_question(&mut self, index: usize) -> Result<(), FastTalkError> {
        self.session.remove_question(index)?;
        debug!(index, "question removed");
        Ok(())
    }

    /// Store the field text as typed; it is validated on start.
    pub fn set_budget_input(&mut self, raw: impl Into<String>) {
        self.budget_input = raw.into();
    }

    /// # Errors
    ///
    /// Returns `FastTalkError::Session` outside configuration.
    pub fn choose_preset(&mut self, budget: TimeBudget) -> Result<(), FastTalkError> {
        self.session.set_budget(budget)?;
        self.budget_input = budget.secs().to_string();
        Ok(())
    }

    // ── running ───────────────────────────────────────────────────────────────

    /// Validate the questions and time field, then start the run.
    ///
    /// # Errors
    ///
    /// Returns `FastTalkError::Session` with `NoQuestions` for an empty list and
    /// `FastTalkError::Budget` for an invalid time. Both leave the session as it was.
    pub fn start(&mut self) -> Result<(), FastTalkError> {
        if self.session.questions().is_empty() {
            return Err(SessionError::NoQuestions.into());
        }
        let budget = TimeBudget::parse(&self.budget_input)?;
        self.session.set_budget(budget)?;
        let event = self.session.start()?;
        self.started_at = Some(self.clock.now());
        self.completed_at = None;
        self.log(&event);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `FastTalkError::Session` outside a run or while feedback is showing.
    pub fn mark_answered(&mut self) -> Result<(), FastTalkError> {
        let event = self.session.mark_answered()?;
        self.log(&event);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `FastTalkError::Session` outside a run or while feedback is showing.
    pub fn skip(&mut self) -> Result<(), FastTalkError> {
        let event = self.session.skip()?;
        self.log(&event);
        if matches!(event, SessionEvent::Completed { .. }) {
            self.completed_at = Some(self.clock.now());
        }
        Ok(())
    }

    /// Feed real elapsed time into the session clock.
    pub fn pump(&mut self, elapsed: Duration) -> Vec<SessionEvent> {
        if self.session.phase() != SessionPhase::Active {
            return Vec::new();
        }
        let events = self.session.advance_clock(elapsed);
        for event in &events {
            self.log(event);
            if matches!(event, SessionEvent::Completed { .. }) {
                self.completed_at = Some(self.clock.now());
            }
        }
        events
    }

    /// # Errors
    ///
    /// Returns `FastTalkError::Session` while still configuring.
    pub fn reset(&mut self) -> Result<(), FastTalkError> {
        let event = self.session.reset()?;
        self.started_at = None;
        self.completed_at = None;
        self.log(&event);
        Ok(())
    }

    fn log(&self, event: &SessionEvent) {
        match *event {
            SessionEvent::Started { total, budget_secs } => {
                info!(total, budget_secs, "fast-talk started");
            }
            SessionEvent::Completed { score, total } => {
                let summary = self.session.summary();
                info!(
                    score,
                    total,
                    percentage = summary.percentage(),
                    "fast-talk completed"
                );
            }
            SessionEvent::Reset => info!("fast-talk reset"),
            SessionEvent::Tick { index, remaining } => debug!(index, remaining, "tick"),
            SessionEvent::Answered { index, score } => debug!(index, score, "answered"),
            SessionEvent::Skipped { index } => debug!(index, "skipped"),
            SessionEvent::Expired { index } => debug!(index, "time expired"),
            SessionEvent::Advanced { index } => debug!(index, "next question"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use couple_core::fast_talk::{FEEDBACK_DELAY, TimeBudgetError};
    use couple_core::time::fixed_clock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn service() -> FastTalkService {
        FastTalkService::new(fixed_clock(), ResetPolicy::KeepQuestions)
    }

    #[test]
    fn start_requires_questions() {
        let mut svc = service();
        let err = svc.start().unwrap_err();
        assert!(matches!(
            err,
            FastTalkError::Session(SessionError::NoQuestions)
        ));
        assert_eq!(
            err.to_string(),
            "please add at least one question before starting"
        );
        assert_eq!(svc.phase(), SessionPhase::Configuring);
    }

    #[test]
    fn start_rejects_bad_time_field() {
        let mut svc = service();
        svc.add_suggestion(0).unwrap();
        svc.set_budget_input("soon");
        assert!(matches!(
            svc.start(),
            Err(FastTalkError::Budget(TimeBudgetError::NotANumber { .. }))
        ));
        svc.set_budget_input("0");
        assert!(matches!(
            svc.start(),
            Err(FastTalkError::Budget(TimeBudgetError::NotPositive { .. }))
        ));
        assert_eq!(svc.phase(), SessionPhase::Configuring);
    }

    #[test]
    fn typed_budget_is_used_on_start() {
        let mut svc = service();
        svc.add_question("Q1").unwrap();
        svc.set_budget_input(" 45 ");
        svc.start().unwrap();
        assert_eq!(svc.session().time_remaining(), 45);
        assert!(svc.started_at().is_some());
    }

    #[test]
    fn random_suggestion_comes_from_the_list() {
        let mut svc = service();
        let mut rng = StdRng::seed_from_u64(9);
        svc.add_random_suggestion(&mut rng).unwrap();
        let added = svc.session().questions()[0].as_str();
        assert!(SUGGESTIONS.contains(&added));
    }

    #[test]
    fn unknown_suggestion_is_rejected() {
        let mut svc = service();
        assert!(matches!(
            svc.add_suggestion(SUGGESTIONS.len()),
            Err(FastTalkError::UnknownSuggestion(8))
        ));
    }

    #[test]
    fn pump_runs_the_game_to_completion() {
        let mut svc = service();
        svc.add_question("Q1").unwrap();
        svc.choose_preset(TimeBudget::from_secs(15).unwrap()).unwrap();
        svc.start().unwrap();
        svc.mark_answered().unwrap();

        let events = svc.pump(FEEDBACK_DELAY);
        assert_eq!(events, vec![SessionEvent::Completed { score: 1, total: 1 }]);
        assert_eq!(svc.phase(), SessionPhase::Completed);
        assert!(svc.completed_at().is_some());
        assert_eq!(svc.summary().percentage(), 100);

        assert!(svc.pump(Duration::from_secs(30)).is_empty());
    }

    #[test]
    fn reset_returns_to_configuring_with_questions() {
        let mut svc = service();
        svc.add_question("Q1").unwrap();
        svc.start().unwrap();
        svc.reset().unwrap();
        assert_eq!(svc.phase(), SessionPhase::Configuring);
        assert_eq!(svc.session().total(), 1);
        assert!(svc.started_at().is_none());
    }
}
