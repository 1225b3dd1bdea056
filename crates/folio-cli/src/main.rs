//! folio - a terminal portfolio
//!
//! A single scrolling page with:
//! - A timeline line that draws itself as you scroll past the experience and projects
//! - Typewriter hero, fade-in sections and a parallax dot grid
//! - Content and tuning from TOML files under ~/.folio

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{paths, FolioConfig, Portfolio};

mod tui;

/// folio - terminal portfolio
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A terminal portfolio with a scroll-synchronized timeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.folio/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Portfolio content file (defaults to ~/.folio/portfolio.toml)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Theme name, overrides the config file
    #[arg(short, long)]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the portfolio
    View,

    /// List available themes
    Themes,

    /// Print the built-in sample portfolio as TOML
    Sample,

    /// Validate config and content, then print a summary
    Check,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to ~/.folio/logs/folio.log; stdout belongs to the TUI
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = std::fs::File::create(log_dir.join("folio.log"))
        .or_else(|_| std::fs::File::create(null_device));
    let Ok(log_file) = log_file else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<FolioConfig> {
    let path = cli.config.clone().unwrap_or_else(paths::config_file);
    let mut config = FolioConfig::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
    }
    Ok(config)
}

fn load_content(cli: &Cli) -> Result<Portfolio> {
    match &cli.content {
        // An explicit path has to exist
        Some(path) => Portfolio::load(path)
            .with_context(|| format!("Failed to load content from {}", path.display())),
        None => {
            let path = paths::content_file();
            Portfolio::load_or_default(&path)
                .with_context(|| format!("Failed to load content from {}", path.display()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Sample) => {
            print!("{}", Portfolio::default().to_toml()?);
        }
        Some(Commands::Check) => {
            let config = load_config(&cli)?;
            let portfolio = load_content(&cli)?;
            let theme = tui::THEME_REGISTRY.get_or_default(&config.theme);
            if theme.name != config.theme {
                println!("  ⚠ Unknown theme '{}', using {}", config.theme, theme.name);
            }
            println!("  ✓ Config ok (theme: {})", theme.display_name);
            println!(
                "  ✓ Content ok: {} - {} experience entries, {} projects",
                portfolio.profile.name,
                portfolio.experience.len(),
                portfolio.projects.len()
            );
            println!("  ✓ Timeline markers: {}", portfolio.marker_count());
        }
        Some(Commands::View) | None => {
            let config = load_config(&cli)?;
            let portfolio = load_content(&cli)?;
            let theme = tui::THEME_REGISTRY.get_or_default(&config.theme);
            tracing::info!("Using theme: {} ({})", theme.display_name, theme.name);

            let mut app = tui::App::new(config, portfolio);
            app.run().await?;
        }
    }

    Ok(())
}
