use std::fmt;
use std::sync::Arc;

use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dioxus::LaunchBuilder;
use services::{LessonPlanConfig, LessonPlanService, DEFAULT_BASE_URL, DEMO_SESSION_ID};
use tracing_subscriber::EnvFilter;
use ui::{build_app_context, App, UiApp};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    lesson_plans: Arc<LessonPlanService>,
}

impl UiApp for DesktopApp {
    fn lesson_plans(&self) -> Arc<LessonPlanService> {
        Arc::clone(&self.lesson_plans)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--session-id <id>] [--fixture]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {DEFAULT_BASE_URL}");
    eprintln!("  --session-id {DEMO_SESSION_ID}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TUTOR_API_URL, TUTOR_SESSION_ID, TUTOR_USE_FIXTURE");
}

fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<LessonPlanConfig, ArgsError> {
    // Flags layer over the environment, which layers over the defaults.
    let mut config = LessonPlanConfig::from_env();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--api-url" => {
                let value = require_value(args, "--api-url")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidBaseUrl { raw: value });
                }
                config.base_url = value;
            }
            "--session-id" => {
                config.session_id = require_value(args, "--session-id")?;
            }
            "--fixture" => config.use_fixture = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(config)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config = parse_args(&mut args).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing::info!(
        base_url = %config.base_url,
        fixture = config.use_fixture,
        "starting lesson plan viewer"
    );

    let lesson_plans = Arc::new(config.into_service()?);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { lesson_plans });
    let context = build_app_context(&app);

    // Explicitly opt out of always-on-top; some dev setups default to it.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Tutor")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
