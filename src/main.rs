//! a2a-docs: A terminal viewer for the A2A Publisher documentation.
#![allow(clippy::multiple_crate_versions)]

use a2a_docs::{
    app_state::AppState,
    clipboard::{ClipboardSink, SystemClipboard},
    config::Config,
    content,
    highlight::{CodeBlockRenderer, Highlighter},
    keymap, logging, section,
    theme::{ColorScheme, Theme},
    ui,
};
use clap::Parser;
use ratatui::crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long to wait for input before redrawing, so copy indicators expire on time.
const TICK: Duration = Duration::from_millis(200);

#[derive(Parser)]
#[command(name = "a2a-docs")]
#[command(about = "Browse the A2A Publisher documentation", long_about = None)]
struct Args {
    /// Section to open, e.g. installation
    #[arg(long, short = 's', value_name = "ID")]
    section: Option<String>,

    /// Colour theme
    #[arg(long, short = 't', value_enum)]
    theme: Option<Theme>,

    /// Configuration file (default: ./a2a-docs.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the sections and exit
    #[arg(long)]
    list: bool,

    /// Print the selected section as JSON and exit
    #[arg(long)]
    export: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    if let Some(path) = args.log_file.clone().or_else(|| cfg.log_path()) {
        if let Err(e) = logging::init(&path) {
            eprintln!("Logging disabled: {e}");
        }
    }

    // Command line overrides config
    let initial = args
        .section
        .unwrap_or_else(|| cfg.default_section.clone());
    let theme = args.theme.unwrap_or_else(|| cfg.theme());

    if args.list {
        for (i, descriptor) in section::list_sections().iter().enumerate() {
            println!("{:>2}. {:<16} {}", i + 1, descriptor.id.as_str(), descriptor.label);
        }
        return Ok(());
    }

    if args.export {
        let page = content::resolve(&initial);
        let json = serde_json::to_string_pretty(&page).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    let app = AppState::new(&initial, theme, ColorScheme::detect());
    let renderer = CodeBlockRenderer::new(Highlighter::with_themes(
        &cfg.dark_syntax_theme,
        &cfg.light_syntax_theme,
    ));
    run_tui(app, renderer, &cfg)
}

fn run_tui(mut app: AppState, mut renderer: CodeBlockRenderer, cfg: &Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Held for the whole session so copied text outlives the copy.
    let mut clipboard = SystemClipboard::new();
    tracing::info!(section = app.current_id(), theme = %app.theme, "viewer started");

    let result = run_app(&mut terminal, &mut app, &mut renderer, cfg, &mut clipboard);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(%e, "viewer stopped");
        eprintln!("Error: {e}");
    } else {
        tracing::info!(section = app.current_id(), "viewer closed");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    renderer: &mut CodeBlockRenderer,
    cfg: &Config,
    clipboard: &mut dyn ClipboardSink,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, renderer, cfg, Instant::now()))?;

        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if keymap::handle_key(app, clipboard, key, Instant::now()) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => keymap::handle_mouse(app, clipboard, mouse, Instant::now()),
            _ => {}
        }
    }
}
