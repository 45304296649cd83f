use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use roadmap_core::{ChecklistItem, RoadmapState, SkillCategory, Tab};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context, render_static};

const WINDOW_TITLE: &str = "Career Roadmap";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidValue {
        flag: &'static str,
        source: roadmap_core::Error,
    },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidValue { flag, source } => write!(f, "invalid {flag} value: {source}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidValue { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_value<T>(raw: &str, flag: &'static str) -> Result<T, ArgsError>
where
    T: std::str::FromStr<Err = roadmap_core::Error>,
{
    raw.parse()
        .map_err(|source| ArgsError::InvalidValue { flag, source })
}

struct DesktopApp {
    start_tab: Tab,
}

impl UiApp for DesktopApp {
    fn window_title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn initial_state(&self) -> RoadmapState {
        RoadmapState::with_active_tab(self.start_tab)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--tab <tab>]");
    eprintln!("  cargo run -p app -- render [--tab <tab>] [--expand <section>] [--done <item>]... [--json]");
    eprintln!();
    eprintln!("Tabs:     overview, skills, learning, projects, linkedin, checklist");
    eprintln!("Sections: technical, soft, domain");
    eprintln!("Items:    reviewResume, updateLinkedIn, ... (camelCase keys)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ROADMAP_TAB  starting tab (overridden by --tab)");
    eprintln!("  RUST_LOG     log filter (default: info)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Render,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "render" => Some(Self::Render),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
struct UiArgs {
    start_tab: Tab,
}

impl UiArgs {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_tab: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut tab_flag: Option<Tab> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tab" => {
                    let value = require_value(args, "--tab")?;
                    tab_flag = Some(parse_value(&value, "--tab")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let start_tab = resolve_start_tab(tab_flag, env_tab)?;
        Ok(Self { start_tab })
    }
}

#[derive(Debug, PartialEq)]
struct RenderArgs {
    state: RoadmapState,
    json: bool,
}

impl RenderArgs {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_tab: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut state = RoadmapState::new();
        let mut tab_flag: Option<Tab> = None;
        let mut json = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tab" => {
                    let value = require_value(args, "--tab")?;
                    tab_flag = Some(parse_value(&value, "--tab")?);
                }
                "--expand" => {
                    let value = require_value(args, "--expand")?;
                    let section: SkillCategory = parse_value(&value, "--expand")?;
                    if !state.is_expanded(section) {
                        state.toggle_expanded(section);
                    }
                }
                "--done" => {
                    let value = require_value(args, "--done")?;
                    let item: ChecklistItem = parse_value(&value, "--done")?;
                    if !state.is_done(item) {
                        state.toggle_checklist_item(item);
                    }
                }
                "--json" => json = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        state.select_tab(resolve_start_tab(tab_flag, env_tab)?);
        Ok(Self { state, json })
    }
}

/// `--tab` wins; `ROADMAP_TAB` is only consulted when the flag is absent.
fn resolve_start_tab(tab_flag: Option<Tab>, env_tab: Option<String>) -> Result<Tab, ArgsError> {
    match (tab_flag, env_tab) {
        (Some(tab), _) => Ok(tab),
        (None, Some(raw)) => parse_value(&raw, "ROADMAP_TAB"),
        (None, None) => Ok(Tab::default()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let env_tab = std::env::var("ROADMAP_TAB").ok();
    let mut iter = argv.into_iter();

    match cmd {
        Command::Ui => {
            let parsed = UiArgs::parse(&mut iter, env_tab).inspect_err(|e| {
                eprintln!("{e}");
                print_usage();
            })?;
            tracing::info!(tab = %parsed.start_tab, "launching desktop window");

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                start_tab: parsed.start_tab,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(context.window_title())
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Render => {
            let parsed = RenderArgs::parse(&mut iter, env_tab).inspect_err(|e| {
                eprintln!("{e}");
                print_usage();
            })?;
            let ratio = parsed.state.completion_ratio();
            tracing::debug!(
                tab = %parsed.state.active_tab(),
                done = ratio.done,
                json = parsed.json,
                "rendering static page"
            );

            if parsed.json {
                println!("{}", serde_json::to_string_pretty(&parsed.state)?);
            } else {
                println!("{}", render_static(&parsed.state));
            }
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
