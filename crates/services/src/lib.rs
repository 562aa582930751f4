#![forbid(unsafe_code)]

pub mod app_services;
pub mod card_service;
pub mod catalog_service;
pub mod error;
pub mod fast_talk_service;
pub mod question_source;

pub use couple_core::Clock;

pub use app_services::{AppServices, ServicesConfig};
pub use card_service::CardGenerator;
pub use catalog_service::{QuestionCatalog, QuestionCatalogService};
pub use error::{CatalogError, ConfigError, FastTalkError, QuestionSourceError};
pub use fast_talk_service::{FEATURED_SUGGESTIONS, FastTalkService, SUGGESTIONS};
pub use question_source::{
    HttpQuestionSource, HttpSourceConfig, QuestionSet, QuestionSource, StaticQuestionSource,
};
