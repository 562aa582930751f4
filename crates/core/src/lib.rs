//! Domain model and pure logic for the couple cards app.

pub mod appearance;
pub mod error;
pub mod fast_talk;
pub mod model;
pub mod question_bank;
pub mod sampler;
pub mod time;
pub mod viewer;

pub use error::Error;
pub use time::Clock;
