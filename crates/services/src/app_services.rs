use std::sync::Arc;

use couple_core::fast_talk::ResetPolicy;

use crate::Clock;
use crate::card_service::CardGenerator;
use crate::catalog_service::{QuestionCatalog, QuestionCatalogService};
use crate::error::CatalogError;
use crate::fast_talk_service::FastTalkService;
use crate::question_source::{
    HttpQuestionSource, HttpSourceConfig, QuestionSource, StaticQuestionSource,
};

/// Settings the binary resolves from flags and environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServicesConfig {
    /// Remote question API; `None` serves the built-in bank only.
    pub questions: Option<HttpSourceConfig>,
    pub fallback: bool,
    pub reset_policy: ResetPolicy,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            questions: None,
            fallback: true,
            reset_policy: ResetPolicy::KeepQuestions,
        }
    }
}

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    reset_policy: ResetPolicy,
    catalog: Arc<QuestionCatalogService>,
}

impl AppServices {
    #[must_use]
    pub fn new(config: ServicesConfig, clock: Clock) -> Self {
        let source: Arc<dyn QuestionSource> = match config.questions {
            Some(http) => Arc::new(HttpQuestionSource::new(http)),
            None => Arc::new(StaticQuestionSource),
        };
        Self::with_source(source, config.fallback, config.reset_policy, clock)
    }

    /// Build services around any question source.
    #[must_use]
    pub fn with_source(
        source: Arc<dyn QuestionSource>,
        fallback: bool,
        reset_policy: ResetPolicy,
        clock: Clock,
    ) -> Self {
        let mut catalog = QuestionCatalogService::new(source);
        if !fallback {
            catalog = catalog.without_fallback();
        }
        Self {
            clock,
            reset_policy,
            catalog: Arc::new(catalog),
        }
    }

    #[must_use]
    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    #[must_use]
    pub fn catalog_service(&self) -> Arc<QuestionCatalogService> {
        Arc::clone(&self.catalog)
    }

    /// Load the catalog and wrap it in a fresh generator.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NothingLoaded` when no category could be loaded.
    pub async fn card_generator(&self) -> Result<CardGenerator, CatalogError> {
        let catalog = self.catalog.load_all().await?;
        Ok(self.card_generator_with(catalog))
    }

    #[must_use]
    pub fn card_generator_with(&self, catalog: QuestionCatalog) -> CardGenerator {
        CardGenerator::new(self.clock, catalog)
    }

    #[must_use]
    pub fn fast_talk(&self) -> FastTalkService {
        FastTalkService::new(self.clock, self.reset_policy)
    }
}
