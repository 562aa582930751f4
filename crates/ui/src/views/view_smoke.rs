use std::sync::Arc;

use couple_core::model::CategoryId;
use services::{QuestionSet, QuestionSource, QuestionSourceError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_source};

struct BrokenSource;

#[async_trait::async_trait]
impl QuestionSource for BrokenSource {
    async fn fetch_questions(
        &self,
        category: CategoryId,
    ) -> Result<QuestionSet, QuestionSourceError> {
        Err(QuestionSourceError::CategoryMismatch {
            expected: category,
            got: CategoryId::Memories,
        })
    }

    fn describe(&self) -> String {
        "broken".into()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_offers_both_widgets() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Couple Cards"), "missing cards option in {html}");
    assert!(html.contains("Fast Talk"), "missing fast talk option in {html}");
    assert!(html.contains("Get Started"), "missing get started in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn cards_view_smoke_renders_categories_after_load() {
    let mut harness = setup_view_harness(ViewKind::Cards);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question Type"), "missing categories in {html}");
    assert!(html.contains("Deep Connection"), "missing category name in {html}");
    assert!(html.contains("Generate Cards"), "missing generate button in {html}");
    assert!(html.contains("Number of Questions: 3"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn cards_view_smoke_shows_retry_when_nothing_loads() {
    let mut harness =
        setup_view_harness_with_source(ViewKind::Cards, Arc::new(BrokenSource), false);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Failed to load questions"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn cards_view_smoke_falls_back_when_source_fails() {
    let mut harness =
        setup_view_harness_with_source(ViewKind::Cards, Arc::new(BrokenSource), true);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("built-in questions"),
        "missing fallback note in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn fast_talk_view_smoke_starts_in_configuration() {
    let mut harness = setup_view_harness(ViewKind::FastTalk);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Create Your Questions"), "missing title in {html}");
    assert!(html.contains("No questions yet"), "missing empty state in {html}");
    assert!(
        !html.contains("What was your first impression of me?"),
        "only featured suggestions are shown: {html}"
    );
    assert!(
        html.contains("Start Couples Fast Talk"),
        "missing start button in {html}"
    );
    assert!(
        !html.contains("disabled"),
        "start stays clickable so an empty list can be reported: {html}"
    );
}
