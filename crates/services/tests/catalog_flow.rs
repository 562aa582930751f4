use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use couple_core::fast_talk::ResetPolicy;
use couple_core::model::{CategoryId, QuestionCount};
use couple_core::time::fixed_now;
use rand::SeedableRng;
use rand::rngs::StdRng;
use reqwest::StatusCode;
use services::{
    AppServices, CatalogError, Clock, QuestionCatalogService, QuestionSet, QuestionSource,
    QuestionSourceError,
};

/// Serves a fixed pool per category and fails the listed ones.
struct FakeSource {
    failing: HashSet<CategoryId>,
    calls: Mutex<Vec<CategoryId>>,
}

impl FakeSource {
    fn new(failing: &[CategoryId]) -> Self {
        Self {
            failing: failing.iter().copied().collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<CategoryId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionSource for FakeSource {
    async fn fetch_questions(
        &self,
        category: CategoryId,
    ) -> Result<QuestionSet, QuestionSourceError> {
        self.calls.lock().unwrap().push(category);
        if self.failing.contains(&category) {
            return Err(QuestionSourceError::HttpStatus(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(QuestionSet::from_raw(
            category,
            [
                format!("{category} one"),
                format!("{category} two"),
                format!("{category} one"),
            ],
        ))
    }

    fn describe(&self) -> String {
        "fake".into()
    }
}

#[tokio::test]
async fn loads_every_category_once_in_order() {
    let source = Arc::new(FakeSource::new(&[]));
    let service = QuestionCatalogService::new(source.clone());

    let catalog = service.load_all().await.unwrap();

    assert_eq!(source.calls(), CategoryId::ALL.to_vec());
    assert_eq!(catalog.pool(CategoryId::Fun).len(), 3);
    assert!(catalog.fallbacks().is_empty());
}

#[tokio::test]
async fn failed_category_falls_back_to_builtin_bank() {
    let source = Arc::new(FakeSource::new(&[CategoryId::Deep]));
    let catalog = QuestionCatalogService::new(source)
        .load_all()
        .await
        .unwrap();

    assert_eq!(catalog.pool(CategoryId::Deep).len(), 20);
    assert_eq!(catalog.pool(CategoryId::Romantic).len(), 3);
    assert_eq!(catalog.fallbacks(), &[CategoryId::Deep]);
}

#[tokio::test]
async fn without_fallback_failed_categories_are_left_out() {
    let source = Arc::new(FakeSource::new(&[CategoryId::Deep, CategoryId::Future]));
    let catalog = QuestionCatalogService::new(source)
        .without_fallback()
        .load_all()
        .await
        .unwrap();

    assert!(!catalog.contains(CategoryId::Deep));
    assert!(!catalog.contains(CategoryId::Future));
    assert_eq!(catalog.categories().count(), 3);
}

#[tokio::test]
async fn nothing_loaded_is_an_error() {
    let source = Arc::new(FakeSource::new(&CategoryId::ALL));
    let result = QuestionCatalogService::new(source)
        .without_fallback()
        .load_all()
        .await;

    assert!(matches!(result, Err(CatalogError::NothingLoaded)));
}

#[tokio::test]
async fn generator_never_repeats_within_a_batch() {
    let source = Arc::new(FakeSource::new(&[]));
    let services = AppServices::with_source(
        source,
        true,
        ResetPolicy::KeepQuestions,
        Clock::fixed(fixed_now()),
    );
    let mut generator = services.card_generator().await.unwrap();
    generator.select_category(CategoryId::Memories);
    generator.options_mut().question_count = QuestionCount::new(10).unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let cards = generator.generate(&mut rng);

    // The fake pool holds two distinct questions plus one duplicate.
    assert_eq!(cards.len(), 2);
    assert_ne!(cards[0].question, cards[1].question);
    assert_eq!(generator.viewer().position_label().as_deref(), Some("1 / 2"));
}

/// Answers every category with whitespace only.
struct BlankSource;

#[async_trait]
impl QuestionSource for BlankSource {
    async fn fetch_questions(
        &self,
        category: CategoryId,
    ) -> Result<QuestionSet, QuestionSourceError> {
        Ok(QuestionSet::from_raw(category, ["   ", ""]))
    }

    fn describe(&self) -> String {
        "blank".into()
    }
}

#[tokio::test]
async fn blank_only_payload_falls_back_to_builtin_bank() {
    let catalog = QuestionCatalogService::new(Arc::new(BlankSource))
        .load_all()
        .await
        .unwrap();

    assert_eq!(catalog.pool(CategoryId::Romantic).len(), 20);
    assert_eq!(catalog.fallbacks(), &CategoryId::ALL);
}

#[tokio::test]
async fn blank_only_payload_without_fallback_loads_nothing() {
    let result = QuestionCatalogService::new(Arc::new(BlankSource))
        .without_fallback()
        .load_all()
        .await;

    assert!(matches!(result, Err(CatalogError::NothingLoaded)));
}
