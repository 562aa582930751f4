use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use rand::SeedableRng;
use rand::rngs::StdRng;
use services::AppServices;

use crate::routes::Route;

/// Which screen the window opens on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartView {
    #[default]
    Dashboard,
    Cards,
    FastTalk,
}

impl StartView {
    #[must_use]
    pub fn route(self) -> Route {
        match self {
            StartView::Dashboard => Route::Dashboard {},
            StartView::Cards => Route::Cards {},
            StartView::FastTalk => Route::FastTalk {},
        }
    }
}

pub trait UiApp: Send + Sync {
    fn services(&self) -> AppServices;
    fn start_view(&self) -> StartView;
    /// Fixed RNG seed for card sampling; `None` seeds from the OS.
    fn rng_seed(&self) -> Option<u64>;
}

#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
    start_view: StartView,
    start_view_once: Arc<AtomicBool>,
    rng_seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let start_view = app.start_view();
        Self {
            services: app.services(),
            start_view,
            start_view_once: Arc::new(AtomicBool::new(start_view != StartView::Dashboard)),
            rng_seed: app.rng_seed(),
        }
    }

    #[must_use]
    pub fn services(&self) -> AppServices {
        self.services.clone()
    }

    /// The configured start view, handed out once per launch.
    #[must_use]
    pub fn take_start_view(&self) -> Option<StartView> {
        self.start_view_once
            .swap(false, Ordering::AcqRel)
            .then_some(self.start_view)
    }

    #[must_use]
    pub fn start_view(&self) -> StartView {
        self.start_view
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
