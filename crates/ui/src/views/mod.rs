mod cards;
mod dashboard;
mod fast_talk;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use cards::CardsView;
pub use dashboard::DashboardView;
pub use fast_talk::FastTalkView;
pub use state::{ViewError, ViewState, view_state_from_resource};
