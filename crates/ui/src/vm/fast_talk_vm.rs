use couple_core::fast_talk::{GlowEffect, LOW_TIME_SECS, SessionPhase, TimeBudget};
use services::{FEATURED_SUGGESTIONS, FastTalkService, SUGGESTIONS};

use crate::vm::time_fmt::format_timer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetVm {
    pub secs: u32,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigureVm {
    pub questions: Vec<String>,
    pub suggestions: Vec<(usize, &'static str)>,
    pub budget_input: String,
    pub presets: Vec<PresetVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveVm {
    pub question: String,
    pub progress: String,
    pub timer: String,
    pub low_time: bool,
    pub card_class: &'static str,
    pub feedback: Option<&'static str>,
    pub score: String,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedVm {
    pub score: String,
    pub percentage: String,
    pub message: &'static str,
    pub answered: String,
    pub failed: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FastTalkVm {
    Configuring(ConfigureVm),
    Active(ActiveVm),
    Completed(CompletedVm),
}

#[must_use]
pub fn map_fast_talk(service: &FastTalkService) -> FastTalkVm {
    match service.phase() {
        SessionPhase::Configuring => FastTalkVm::Configuring(map_configure(service)),
        SessionPhase::Active => FastTalkVm::Active(map_active(service)),
        SessionPhase::Completed => FastTalkVm::Completed(map_completed(service)),
    }
}

fn map_configure(service: &FastTalkService) -> ConfigureVm {
    let session = service.session();
    let typed = service.budget_input().trim();
    ConfigureVm {
        questions: session
            .questions()
            .iter()
            .map(|q| q.as_str().to_owned())
            .collect(),
        suggestions: SUGGESTIONS
            .iter()
            .copied()
            .enumerate()
            .take(FEATURED_SUGGESTIONS)
            .collect(),
        budget_input: service.budget_input().to_owned(),
        presets: TimeBudget::PRESETS
            .iter()
            .map(|&secs| PresetVm {
                secs,
                label: format!("{secs}s"),
                selected: typed == secs.to_string(),
            })
            .collect(),
    }
}

fn map_active(service: &FastTalkService) -> ActiveVm {
    let session = service.session();
    let remaining = session.time_remaining();
    let feedback = match session.glow() {
        GlowEffect::Positive => Some("Nice one!"),
        GlowEffect::Negative if session.is_expired() => Some("Time's up!"),
        GlowEffect::Negative => Some("Skipped"),
        GlowEffect::None => None,
    };
    ActiveVm {
        question: session
            .current_question()
            .map(|q| q.as_str().to_owned())
            .unwrap_or_default(),
        progress: format!(
            "Question {} of {}",
            session.current_index() + 1,
            session.total()
        ),
        timer: format_timer(remaining),
        low_time: remaining <= LOW_TIME_SECS,
        card_class: match session.glow() {
            GlowEffect::Positive => "question-card green-glow",
            GlowEffect::Negative => "question-card red-glow",
            GlowEffect::None => "question-card",
        },
        feedback,
        score: format!("Score: {}", session.score()),
        locked: session.feedback_pending(),
    }
}

fn map_completed(service: &FastTalkService) -> CompletedVm {
    let summary = service.summary();
    CompletedVm {
        score: format!("{} / {}", summary.score, summary.total),
        percentage: format!("{}%", summary.percentage()),
        message: summary.message(),
        answered: format!("Answered: {}", summary.answered),
        failed: format!("Missed: {}", summary.failed),
    }
}
