use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use couple_core::model::{CategoryId, QuestionText};

use crate::error::CatalogError;
use crate::question_source::{QuestionSet, QuestionSource};

/// Question pools by category, as loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionCatalog {
    pools: BTreeMap<CategoryId, Vec<QuestionText>>,
    fallbacks: Vec<CategoryId>,
}

impl QuestionCatalog {
    /// Catalog built entirely from the built-in bank.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for category in CategoryId::ALL {
            catalog.insert(QuestionSet::fallback(category));
        }
        catalog
    }

    pub fn insert(&mut self, set: QuestionSet) {
        self.pools.insert(set.category, set.questions);
    }

    /// Pool for `category`; empty when it was not loaded.
    #[must_use]
    pub fn pool(&self, category: CategoryId) -> &[QuestionText] {
        self.pools.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, category: CategoryId) -> bool {
        self.pools.contains_key(&category)
    }

    /// Loaded categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.pools.keys().copied()
    }

    /// Categories that were served from the built-in bank after a failed fetch.
    #[must_use]
    pub fn fallbacks(&self) -> &[CategoryId] {
        &self.fallbacks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

/// Loads every category once from a `QuestionSource`.
#[derive(Clone)]
pub struct QuestionCatalogService {
    source: Arc<dyn QuestionSource>,
    fallback: bool,
}

impl QuestionCatalogService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            fallback: true,
        }
    }

    /// Leave failed categories out instead of using the built-in bank.
    #[must_use]
    pub fn without_fallback(mut self) -> Self {
        self.fallback = false;
        self
    }

    /// Fetch all categories in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NothingLoaded` when no category could be loaded.
    pub async fn load_all(&self) -> Result<QuestionCatalog, CatalogError> {
        let mut catalog = QuestionCatalog::default();

        for category in CategoryId::ALL {
            let err = match self.source.fetch_questions(category).await {
                Ok(set) if !set.questions.is_empty() => {
                    info!(
                        category = %category,
                        count = set.questions.len(),
                        source = %self.source.describe(),
                        "loaded questions"
                    );
                    catalog.insert(set);
                    continue;
                }
                Ok(_) => "no usable questions".to_string(),
                Err(err) => err.to_string(),
            };

            if self.fallback {
                warn!(category = %category, error = %err, "question fetch failed, using built-in questions");
                catalog.insert(QuestionSet::fallback(category));
                catalog.fallbacks.push(category);
            } else {
                warn!(category = %category, error = %err, "question fetch failed, skipping category");
            }
        }

        if catalog.is_empty() {
            return Err(CatalogError::NothingLoaded);
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_every_category() {
        let catalog = QuestionCatalog::builtin();
        assert_eq!(catalog.categories().count(), 5);
        assert_eq!(catalog.pool(CategoryId::Fun).len(), 20);
        assert!(catalog.fallbacks().is_empty());
    }

    #[test]
    fn missing_category_has_empty_pool() {
        let catalog = QuestionCatalog::default();
        assert!(catalog.pool(CategoryId::Deep).is_empty());
        assert!(!catalog.contains(CategoryId::Deep));
    }
}
