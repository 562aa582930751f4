use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::info;

use couple_core::model::{Card, CardIdSequence, CategoryId, CustomizationOptions};
use couple_core::sampler::generate_cards;
use couple_core::viewer::{CardViewer, DismissReason};

use crate::Clock;
use crate::catalog_service::QuestionCatalog;

/// Card generator state: catalog, selection, options and the viewer.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    clock: Clock,
    catalog: QuestionCatalog,
    category: CategoryId,
    options: CustomizationOptions,
    viewer: CardViewer,
    ids: CardIdSequence,
    generated_at: Option<DateTime<Utc>>,
}

impl CardGenerator {
    #[must_use]
    pub fn new(clock: Clock, catalog: QuestionCatalog) -> Self {
        Self {
            clock,
            catalog,
            category: CategoryId::Romantic,
            options: CustomizationOptions::default(),
            viewer: CardViewer::new(),
            ids: CardIdSequence::new(),
            generated_at: None,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn select_category(&mut self, category: CategoryId) {
        self.category = category;
    }

    #[must_use]
    pub fn options(&self) -> &CustomizationOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut CustomizationOptions {
        &mut self.options
    }

    pub fn set_options(&mut self, options: CustomizationOptions) {
        self.options = options;
    }

    #[must_use]
    pub fn viewer(&self) -> &CardViewer {
        &self.viewer
    }

    /// When the last batch was generated.
    #[must_use]
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    /// Sample a new batch for the selected category and open it in the viewer.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[Card] {
        let category = self.category.descriptor();
        let pool = self.catalog.pool(self.category);
        let cards = generate_cards(category, pool, &self.options, &mut self.ids, rng);

        let now = self.clock.now();
        info!(
            category = %self.category,
            requested = self.options.question_count.get(),
            pool = pool.len(),
            generated = cards.len(),
            style = self.options.card_style.as_str(),
            "generated cards"
        );

        self.generated_at = Some(now);
        self.viewer.open(cards);
        self.viewer.cards()
    }

    pub fn next_card(&mut self) {
        self.viewer.next();
    }

    pub fn previous_card(&mut self) {
        self.viewer.previous();
    }

    pub fn close_viewer(&mut self, reason: DismissReason) {
        self.viewer.close(reason);
    }

    pub fn reopen_viewer(&mut self) {
        self.viewer.reopen();
    }
}
