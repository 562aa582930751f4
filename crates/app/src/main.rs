use std::sync::Arc;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;

use couple_core::fast_talk::ResetPolicy;
use services::{AppServices, Clock, HttpSourceConfig, ServicesConfig};
use ui::{App, StartView, UiApp, build_app_context};

/// Conversation cards and timed Fast Talk games for couples.
#[derive(Parser, Debug)]
#[command(name = "couple-connect", version, about)]
struct Cli {
    /// Base URL of the question API; the built-in questions are used when absent
    #[arg(long, env = "COUPLE_QUESTIONS_URL")]
    questions_url: Option<String>,

    /// Leave out categories whose fetch fails instead of using built-in questions
    #[arg(long, env = "COUPLE_NO_FALLBACK", value_parser = FalseyValueParser::new())]
    no_fallback: bool,

    /// Also clear the Fast Talk question list when a game is reset
    #[arg(long, env = "COUPLE_CLEAR_QUESTIONS_ON_RESET", value_parser = FalseyValueParser::new())]
    clear_questions_on_reset: bool,

    /// Screen shown at launch
    #[arg(long, value_enum, default_value_t = StartArg::Dashboard, env = "COUPLE_START_VIEW")]
    start_view: StartArg,

    /// Seed for card sampling, for reproducible decks
    #[arg(long, env = "COUPLE_SEED")]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StartArg {
    Dashboard,
    Cards,
    FastTalk,
}

impl From<StartArg> for StartView {
    fn from(value: StartArg) -> Self {
        match value {
            StartArg::Dashboard => StartView::Dashboard,
            StartArg::Cards => StartView::Cards,
            StartArg::FastTalk => StartView::FastTalk,
        }
    }
}

impl Cli {
    fn services_config(&self) -> Result<ServicesConfig, services::ConfigError> {
        let questions = match self.questions_url.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(HttpSourceConfig::parse(raw)?),
            _ => None,
        };
        Ok(ServicesConfig {
            questions,
            fallback: !self.no_fallback,
            reset_policy: if self.clear_questions_on_reset {
                ResetPolicy::ClearQuestions
            } else {
                ResetPolicy::KeepQuestions
            },
        })
    }
}

struct DesktopApp {
    services: AppServices,
    start_view: StartView,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn start_view(&self) -> StartView {
        self.start_view
    }

    fn rng_seed(&self) -> Option<u64> {
        self.seed
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.services_config()?;
    info!(
        questions = config
            .questions
            .as_ref()
            .map_or("built-in", |q| q.base_url.as_str()),
        fallback = config.fallback,
        reset_policy = ?config.reset_policy,
        start_view = ?cli.start_view,
        "starting couple connect"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: AppServices::new(config, Clock::default()),
        start_view: cli.start_view.into(),
        seed: cli.seed,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Couple Connect")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("couple-connect").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_use_builtin_questions() {
        let cli = parse(&[]);
        let config = cli.services_config().unwrap();
        assert_eq!(config.questions, None);
        assert!(config.fallback);
        assert_eq!(config.reset_policy, ResetPolicy::KeepQuestions);
        assert_eq!(cli.start_view, StartArg::Dashboard);
    }

    #[test]
    fn flags_map_onto_services_config() {
        let cli = parse(&[
            "--questions-url",
            "http://localhost:3000",
            "--no-fallback",
            "--clear-questions-on-reset",
            "--start-view",
            "fast-talk",
            "--seed",
            "42",
        ]);
        let config = cli.services_config().unwrap();
        assert!(config.questions.is_some());
        assert!(!config.fallback);
        assert_eq!(config.reset_policy, ResetPolicy::ClearQuestions);
        assert_eq!(StartView::from(cli.start_view), StartView::FastTalk);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn invalid_questions_url_is_rejected() {
        let cli = parse(&["--questions-url", "not a url"]);
        assert!(cli.services_config().is_err());
    }
}
