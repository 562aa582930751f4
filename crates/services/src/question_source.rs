
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use couple_core::model::{CategoryId, QuestionText};
use couple_core::question_bank::fallback_questions;

use crate::error::{ConfigError, QuestionSourceError};

/// Questions served for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    pub category: CategoryId,
    pub questions: Vec<QuestionText>,
}

impl QuestionSet {
    /// Build a set from raw strings, dropping blank entries.
    #[must_use]
    pub fn from_raw<I, S>(category: CategoryId, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions = raw
            .into_iter()
            .filter_map(|text| QuestionText::new(text).ok())
            .collect();
        Self {
            category,
            questions,
        }
    }

    /// The built-in questions for `category`.
    #[must_use]
    pub fn fallback(category: CategoryId) -> Self {
        Self::from_raw(category, fallback_questions(category).iter().copied())
    }
}

/// Where question pools come from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the pool for one category.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` if the source cannot produce the set.
    async fn fetch_questions(&self, category: CategoryId)
    -> Result<QuestionSet, QuestionSourceError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

//
// ─── STATIC ────────────────────────────────────────────────────────────────────
//

/// Serves the built-in question bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticQuestionSource;

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch_questions(
        &self,
        category: CategoryId,
    ) -> Result<QuestionSet, QuestionSourceError> {
        Ok(QuestionSet::fallback(category))
    }

    fn describe(&self) -> String {
        "built-in question bank".into()
    }
}

//
// ─── HTTP ──────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSourceConfig {
    pub base_url: Url,
}

impl HttpSourceConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if `raw` is not an absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
            raw: raw.to_string(),
            source,
        })?;
        match base_url.scheme() {
            "http" | "https" => Ok(Self { base_url }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// `{base}/api/questions/{category}`.
    #[must_use]
    pub fn endpoint(&self, category: CategoryId) -> String {
        format!(
            "{}/api/questions/{}",
            self.base_url.as_str().trim_end_matches('/'),
            category.as_str()
        )
    }
}

/// Fetches question pools from a JSON endpoint.
#[derive(Clone, Debug)]
pub struct HttpQuestionSource {
    client: Client,
    config: HttpSourceConfig,
}

impl HttpQuestionSource {
    #[must_use]
    pub fn new(config: HttpSourceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &HttpSourceConfig {
        &self.config
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_questions(
        &self,
        category: CategoryId,
    ) -> Result<QuestionSet, QuestionSourceError> {
        let response = self
            .client
            .get(self.config.endpoint(category))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let body: QuestionsResponse = response.json().await?;
        body.into_set(category)
    }

    fn describe(&self) -> String {
        self.config.base_url.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    category: Option<CategoryId>,
    questions: Vec<String>,
}

impl QuestionsResponse {
    fn into_set(self, expected: CategoryId) -> Result<QuestionSet, QuestionSourceError> {
        match self.category {
            Some(got) if got != expected => {
                Err(QuestionSourceError::CategoryMismatch { expected, got })
            }
            _ => Ok(QuestionSet::from_raw(expected, self.questions)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_category() {
        let config = HttpSourceConfig::parse("http://localhost:8080/").unwrap();
        assert_eq!(
            config.endpoint(CategoryId::Deep),
            "http://localhost:8080/api/questions/deep"
        );
    }

    #[test]
    fn config_rejects_relative_and_non_http_urls() {
        assert!(matches!(
            HttpSourceConfig::parse("/api"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            HttpSourceConfig::parse("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn response_body_is_validated() {
        let body: QuestionsResponse = serde_json::from_str(
            r#"{"category":"fun","questions":["Why?","  ","Why not?"]}"#,
        )
        .unwrap();
        let set = body.into_set(CategoryId::Fun).unwrap();
        assert_eq!(set.questions.len(), 2);

        let body: QuestionsResponse =
            serde_json::from_str(r#"{"category":"deep","questions":[]}"#).unwrap();
        assert!(matches!(
            body.into_set(CategoryId::Fun),
            Err(QuestionSourceError::CategoryMismatch { .. })
        ));
    }

    #[test]
    fn fallback_set_has_twenty_questions() {
        let set = QuestionSet::fallback(CategoryId::Memories);
        assert_eq!(set.category, CategoryId::Memories);
        assert_eq!(set.questions.len(), 20);
    }
}
