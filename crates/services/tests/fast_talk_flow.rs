use std::time::Duration;

use couple_core::fast_talk::{FEEDBACK_DELAY, ResetPolicy, SessionEvent, SessionPhase};
use couple_core::time::fixed_now;
use services::{AppServices, Clock, ServicesConfig};

fn services(policy: ResetPolicy) -> AppServices {
    AppServices::new(
        ServicesConfig {
            reset_policy: policy,
            ..ServicesConfig::default()
        },
        Clock::fixed(fixed_now()),
    )
}

#[test]
fn full_game_with_answer_skip_and_timeout() {
    let mut fast_talk = services(ResetPolicy::KeepQuestions).fast_talk();
    fast_talk.add_question("What made you laugh today?").unwrap();
    fast_talk.add_suggestion(1).unwrap();
    fast_talk.add_question("Where should we go next?").unwrap();
    fast_talk.set_budget_input("5");
    fast_talk.start().unwrap();

    fast_talk.mark_answered().unwrap();
    fast_talk.pump(FEEDBACK_DELAY);
    fast_talk.skip().unwrap();
    fast_talk.pump(FEEDBACK_DELAY);

    // Small real-time slices, like the UI polling loop.
    let mut events = Vec::new();
    for _ in 0..70 {
        events.extend(fast_talk.pump(Duration::from_millis(100)));
    }

    assert!(events.contains(&SessionEvent::Expired { index: 2 }));
    assert_eq!(events.last(), Some(&SessionEvent::Completed { score: 1, total: 3 }));
    assert_eq!(fast_talk.phase(), SessionPhase::Completed);

    let summary = fast_talk.summary();
    assert_eq!(summary.answered, 1);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.percentage(), 33);
    assert_eq!(
        summary.message(),
        "Keep connecting! Every conversation brings you closer!"
    );
}

#[test]
fn reset_policy_comes_from_config() {
    let keep_services = services(ResetPolicy::KeepQuestions);
    assert_eq!(keep_services.reset_policy(), ResetPolicy::KeepQuestions);
    let mut keep = keep_services.fast_talk();
    keep.add_question("Q1").unwrap();
    keep.start().unwrap();
    keep.reset().unwrap();
    assert_eq!(keep.session().total(), 1);

    let mut clear = services(ResetPolicy::ClearQuestions).fast_talk();
    clear.add_question("Q1").unwrap();
    clear.start().unwrap();
    clear.reset().unwrap();
    assert_eq!(clear.session().total(), 0);
}

#[tokio::test]
async fn builtin_source_loads_without_network() {
    let services = services(ResetPolicy::KeepQuestions);
    let generator = services.card_generator().await.unwrap();
    assert_eq!(generator.catalog().categories().count(), 5);
}
