//! synopsis: a live table of contents for documents under edit.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};
use synopsis::document::{DocumentId, DocumentManager, FileDocumentManager};
use synopsis::generator::GeneratorRegistry;
use synopsis::panel::Panel;
use synopsis::typeset::RenderRegistry;
use synopsis::watch::DocumentWatcher;
use synopsis::{app_state, config, formats, heading, input, ui};

#[derive(Parser)]
#[command(name = "synopsis")]
#[command(about = "Live table of contents for documents under edit", long_about = None)]
struct Args {
    /// Files or directories to outline
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Print each document's outline as JSON and exit
    #[arg(long)]
    once: bool,
}

fn main() -> io::Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let registry = default_registry();
    let manager = Rc::new(FileDocumentManager::new());
    let opened: Vec<(DocumentId, PathBuf)> = documents
        .iter()
        .map(|path| (manager.open(path), path.clone()))
        .collect();

    if args.once {
        return dump_outlines(&manager, &registry, &opened);
    }

    let renderers = if cfg.math_unicode {
        RenderRegistry::with_unicode_math()
    } else {
        RenderRegistry::plain()
    };
    let panel = Panel::new(manager.clone(), renderers);

    let mut watcher = DocumentWatcher::new()?;
    for (_, path) in &opened {
        watcher.watch(path)?;
    }

    let mut state = app_state::AppState::new(manager, registry, opened, panel);
    state.activate(0).map_err(io::Error::other)?;

    run_tui(state, watcher)
}

/// Logs would corrupt the alternate screen, so a subscriber is only installed
/// when RUST_LOG asks for one; it writes to stderr, which can be redirected.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

fn default_registry() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    registry.register(&["md", "markdown"], Rc::new(formats::markdown::MarkdownToc));
    registry.register(&["txt", "text"], Rc::new(formats::plain::PlainToc));
    registry
}

#[derive(serde::Serialize)]
struct OutlineDump {
    file: String,
    headings: Vec<heading::Heading>,
}

fn dump_outlines(
    manager: &FileDocumentManager,
    registry: &GeneratorRegistry,
    opened: &[(DocumentId, PathBuf)],
) -> io::Result<()> {
    let mut dumps = Vec::new();
    for (id, path) in opened {
        let Some(generator) = registry.find(path) else {
            continue;
        };
        let Some(context) = manager.resolve(id) else {
            continue;
        };
        dumps.push(OutlineDump {
            file: path.display().to_string(),
            headings: generator.generate(&context),
        });
    }

    let json = serde_json::to_string_pretty(&dumps).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn run_tui(mut app: app_state::AppState, watcher: DocumentWatcher) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &watcher);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Poll granularity of the event loop; also bounds how soon after the quiet
/// period a deferred render can fire.
const TICK: Duration = Duration::from_millis(100);

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    watcher: &DocumentWatcher,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        for path in watcher.drain() {
            app.dispatch_change(&path);
        }
        app.pump(Instant::now());

        if !event::poll(TICK)? {
            continue;
        }

        match event::read()? {
            Event::FocusGained => app.panel.on_after_show(),
            Event::Key(key) => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('r') => {
                    app.panel.on_update_request();
                    app.message = Some("Refreshed".to_string());
                }
                KeyCode::Tab => {
                    app.message = None;
                    app.activate_next().map_err(io::Error::other)?;
                }
                KeyCode::BackTab => {
                    app.message = None;
                    app.activate_prev().map_err(io::Error::other)?;
                }
                KeyCode::Up => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.panel.tree_mut().select_prev_sibling();
                    } else {
                        app.panel.tree_mut().select_prev();
                    }
                }
                KeyCode::Down => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.panel.tree_mut().select_next_sibling();
                    } else {
                        app.panel.tree_mut().select_next();
                    }
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    app.panel.tree_mut().select_parent();
                }
                KeyCode::Home => app.panel.tree_mut().select_first(),
                KeyCode::End => app.panel.tree_mut().select_last(),
                KeyCode::Enter => app.locate_selected(),
                _ => {}
            },
            _ => {}
        }
    }
}
