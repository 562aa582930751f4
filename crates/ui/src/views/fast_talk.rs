use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;
use tokio::time::Instant;
use tracing::debug;

use couple_core::fast_talk::{SessionPhase, TimeBudget};
use services::{FastTalkError, FastTalkService};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ActiveVm, CompletedVm, ConfigureVm, FastTalkVm, map_fast_talk};

/// How often real time is fed into the session clock.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Real time spent in the Active phase between polls.
///
/// Measuring restarts whenever the session leaves Active, so a new run never
/// inherits time from before it started.
#[derive(Debug, Default)]
struct ActiveTimeMeter {
    last: Option<Instant>,
}

impl ActiveTimeMeter {
    fn measure(&mut self, active: bool, now: Instant) -> Option<Duration> {
        if !active {
            self.last = None;
            return None;
        }
        let elapsed = self.last.map(|last| now.duration_since(last));
        self.last = Some(now);
        elapsed.filter(|elapsed| !elapsed.is_zero())
    }
}

#[component]
pub fn FastTalkView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = use_signal(|| ctx.services().fast_talk());

    // Dropped with the view, which drops every pending session timer.
    use_future(move || async move {
        let mut service = service;
        let mut meter = ActiveTimeMeter::default();
        loop {
            tokio::time::sleep(POLL_INTERVAL).await;
            let active = service.peek().phase() == SessionPhase::Active;
            if let Some(elapsed) = meter.measure(active, Instant::now()) {
                service.write().pump(elapsed);
            }
        }
    });

    let vm = map_fast_talk(&service.read());

    rsx! {
        div { class: "page fast-talk-page",
            header { class: "view-header",
                Link { class: "back-link", to: Route::Dashboard {}, "Back to Dashboard" }
                h2 { class: "view-title", "Couples Fast Talk" }
            }
            match vm {
                FastTalkVm::Configuring(vm) => rsx! { ConfigurePanel { vm, service } },
                FastTalkVm::Active(vm) => rsx! { ActivePanel { vm, service } },
                FastTalkVm::Completed(vm) => rsx! { CompletedPanel { vm, service } },
            }
        }
    }
}

#[component]
fn ConfigurePanel(vm: ConfigureVm, service: Signal<FastTalkService>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut service = service;
    let mut rng = use_signal(|| ctx.rng());
    let mut draft = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);

    let mut report = move |result: Result<(), FastTalkError>| match result {
        Ok(()) => notice.set(None),
        Err(err) => {
            debug!(error = %err, "fast-talk input rejected");
            notice.set(Some(err.to_string()));
        }
    };

    let mut submit_draft = move || {
        let text = draft();
        let result = service.write().add_question(&text).map(|_| ());
        if result.is_ok() {
            draft.set(String::new());
        }
        report(result);
    };

    let count = vm.questions.len();

    rsx! {
        p { class: "view-subtitle",
            "Add questions for your partner to answer. Deepen your connection with quick, meaningful conversations."
        }

        section { class: "panel",
            h3 { class: "panel-title", "Create Your Questions" }
            div { class: "input-row",
                input {
                    r#type: "text",
                    placeholder: "Type a question...",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit_draft();
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| submit_draft(),
                    "Add"
                }
            }
            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }

            h4 { "Need inspiration? Try these questions:" }
            div { class: "suggestion-container",
                for (position, text) in vm.suggestions {
                    button {
                        key: "{position}",
                        class: "suggestion",
                        r#type: "button",
                        onclick: move |_| report(service.write().add_suggestion(position).map(|_| ())),
                        "{text}"
                    }
                }
                button {
                    class: "suggestion suggestion--random",
                    r#type: "button",
                    onclick: move |_| {
                        let mut rng = rng.write();
                        report(service.write().add_random_suggestion(&mut *rng).map(|_| ()));
                    },
                    "Surprise me"
                }
            }
        }

        section { class: "panel",
            h3 { class: "panel-title", "Your Questions ({count})" }
            if vm.questions.is_empty() {
                div { class: "empty-state",
                    p { "No questions yet" }
                    p { class: "muted", "Add questions above or select from our suggestions" }
                }
            } else {
                ol { class: "question-list",
                    for (index, text) in vm.questions.into_iter().enumerate() {
                        li { key: "{index}-{text}",
                            span { "{text}" }
                            button {
                                class: "btn-icon",
                                r#type: "button",
                                title: "Remove question",
                                onclick: move |_| report(service.write().remove_question(index)),
                                "×"
                            }
                        }
                    }
                }
            }
        }

        section { class: "panel",
            h3 { class: "panel-title", "Time Per Question" }
            div { class: "input-row",
                input {
                    r#type: "number",
                    min: "1",
                    value: "{vm.budget_input}",
                    oninput: move |evt| service.write().set_budget_input(evt.value()),
                }
                span { class: "muted", "seconds to answer each question" }
            }
            div { class: "choice-row",
                for preset in vm.presets {
                    button {
                        key: "{preset.secs}",
                        class: if preset.selected { "choice selected" } else { "choice" },
                        r#type: "button",
                        onclick: move |_| {
                            if let Ok(budget) = TimeBudget::from_secs(preset.secs) {
                                report(service.write().choose_preset(budget));
                            }
                        },
                        "{preset.label}"
                    }
                }
            }
        }

        div { class: "generate-row",
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| report(service.write().start()),
                "Start Couples Fast Talk"
            }
        }
    }
}

#[component]
fn ActivePanel(vm: ActiveVm, service: Signal<FastTalkService>) -> Element {
    let mut service = service;
    let timer_class = if vm.low_time { "timer low-time" } else { "timer" };

    let mut act = move |result: Result<(), FastTalkError>| {
        if let Err(err) = result {
            debug!(error = %err, "fast-talk action ignored");
        }
    };

    rsx! {
        section { class: "panel active-panel",
            div { class: "active-header",
                span { class: "progress", "{vm.progress}" }
                span { class: "score", "{vm.score}" }
            }
            div { class: "{timer_class}",
                span { class: "muted", "Time Remaining" }
                strong { "{vm.timer}" }
            }
            div { class: "{vm.card_class}",
                p { class: "question-text", "{vm.question}" }
                if let Some(feedback) = vm.feedback {
                    p { class: "feedback", "{feedback}" }
                }
            }
            div { class: "action-row",
                button {
                    class: "btn btn-success",
                    r#type: "button",
                    disabled: vm.locked,
                    onclick: move |_| act(service.write().mark_answered()),
                    "Correct Answer"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: vm.locked,
                    onclick: move |_| act(service.write().skip()),
                    "Skip Question"
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| act(service.write().reset()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn CompletedPanel(vm: CompletedVm, service: Signal<FastTalkService>) -> Element {
    let mut service = service;
    rsx! {
        section { class: "panel completed-panel",
            h3 { class: "panel-title", "Game Completed!" }
            p { class: "final-score", "{vm.score}" }
            p { class: "percentage", "{vm.percentage}" }
            p { class: "feedback-message", "{vm.message}" }
            div { class: "result-row",
                span { "{vm.answered}" }
                span { "{vm.failed}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    if let Err(err) = service.write().reset() {
                        debug!(error = %err, "reset ignored");
                    }
                },
                "Play Again"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_ignores_time_before_the_run() {
        let t0 = Instant::now();
        let mut meter = ActiveTimeMeter::default();
        assert_eq!(meter.measure(false, t0), None);
        assert_eq!(meter.measure(false, t0 + Duration::from_millis(100)), None);
        // First poll after start only anchors the clock.
        assert_eq!(meter.measure(true, t0 + Duration::from_millis(150)), None);
        assert_eq!(
            meter.measure(true, t0 + Duration::from_millis(250)),
            Some(Duration::from_millis(100))
        );
    }

    #[test]
    fn meter_restarts_after_leaving_active() {
        let t0 = Instant::now();
        let mut meter = ActiveTimeMeter::default();
        meter.measure(true, t0);
        assert_eq!(meter.measure(false, t0 + Duration::from_secs(5)), None);
        assert_eq!(meter.measure(true, t0 + Duration::from_secs(6)), None);
        assert_eq!(
            meter.measure(true, t0 + Duration::from_millis(6100)),
            Some(Duration::from_millis(100))
        );
    }
}
