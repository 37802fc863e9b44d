mod action;
mod app;
mod catalog;
mod config;
mod error;
mod movie;
mod render;
mod source;
mod ui;

use action::{Action, action_for_key};
use app::{App, View};
use catalog::Catalog;
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use error::{CatalogError, CatalogResult};
use render::{HtmlRenderer, Renderer, TextRenderer};
use source::Source;
use std::path::PathBuf;

/// Browse a movie catalog: filter by genre, order by title or release date
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Movie data: a JSON file path or an http(s) URL
    #[arg(short, long, global = true)]
    source: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the TUI browser (default)
    Run,
    /// Print the movies without starting the TUI
    List {
        /// Only movies of this genre (case-insensitive)
        #[arg(short, long)]
        genre: Option<String>,
        /// Order the result
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Download the movie data for offline use
    Fetch {
        /// URL of the movie JSON resource
        #[arg(short, long)]
        url: String,
        /// Where to save it (defaults to the cache directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Title,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);

    let result = match command {
        Commands::Run => {
            init_logging(true);
            run(cli.source).await
        }
        Commands::List { genre, sort, format } => {
            init_logging(false);
            list(cli.source, genre, sort, format).await
        }
        Commands::Fetch { url, output } => {
            init_logging(false);
            fetch(&url, output).await
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr, or to a file in the cache dir while the TUI owns the terminal.
fn init_logging(tui: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if tui {
        let file = config::cache_dir().and_then(|dir| {
            std::fs::create_dir_all(&dir)?;
            Ok(std::fs::File::create(dir.join(config::LOG_FILE))?)
        });
        match file {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                // Nowhere safe to write while the TUI runs
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }
    builder.init();
}

/// `--source`, then the config file, then a previously fetched copy.
fn resolve_source(cli_source: Option<String>, config: &Config) -> CatalogResult<Source> {
    if let Some(s) = cli_source.or_else(|| config.source.clone()) {
        return Ok(Source::parse(&s));
    }
    let cached = config::cached_movies_path()?;
    if cached.exists() {
        return Ok(Source::File(cached));
    }
    Err(CatalogError::NoSource)
}

async fn load_catalog(cli_source: Option<String>, config: &Config) -> CatalogResult<Catalog> {
    let source = resolve_source(cli_source, config)?;
    let movies = source.load().await?;
    Ok(Catalog::new(movies))
}

async fn run(cli_source: Option<String>) -> CatalogResult<()> {
    let config = Config::load()?;
    // Load before touching the terminal so a failure prints cleanly
    let catalog = load_catalog(cli_source, &config).await?;
    let mut app = App::new(catalog, &config.poster_dir);

    let mut terminal = ratatui::init();
    let result = terminal
        .size()
        .map(|size| app.update_page_size(size.height))
        .and_then(|_| run_app(&mut terminal, &mut app));
    ratatui::restore();

    result?;
    Ok(())
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if event::poll(std::time::Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_key(app, key);
                }
                Event::Resize(_, height) => {
                    app.update_page_size(height);
                }
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Help toggle (global)
    if key.code == KeyCode::Char('?') && app.view != View::Genres {
        app.show_help = !app.show_help;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.view {
        View::List => handle_list_key(app, key),
        View::Detail => handle_detail_key(app, key),
        View::Genres => handle_genres_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if let Some(action) = action_for_key(key) {
        app.dispatch(action);
        return;
    }
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.list_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.list_prev();
        }
        KeyCode::PageDown => {
            app.list_page_down();
        }
        KeyCode::PageUp => {
            app.list_page_up();
        }
        KeyCode::Char('g') => {
            app.list_first();
        }
        KeyCode::Char('G') => {
            app.list_last();
        }
        KeyCode::Char('f') => {
            app.open_genre_picker();
        }
        KeyCode::Enter => {
            app.open_detail();
        }
        KeyCode::Esc => {
            if app.catalog.active_genre().is_some() || app.catalog.sort_order().is_some() {
                app.dispatch(Action::ShowAll);
            }
        }
        KeyCode::Char('y') => {
            if let Some(link) = app.selected_card().map(|c| c.link.clone()) {
                app.status_msg = copy_link(&link);
            }
        }
        KeyCode::Char('o') => {
            if let Some(link) = app.selected_card().map(|c| c.link.clone()) {
                app.status_msg = open_link(&link);
            }
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_detail();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_down();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_up();
        }
        KeyCode::Char('y') => {
            if let Some(link) = app.detail.as_ref().map(|c| c.link.clone()) {
                app.status_msg = copy_link(&link);
            }
        }
        KeyCode::Char('o') => {
            if let Some(link) = app.detail.as_ref().map(|c| c.link.clone()) {
                app.status_msg = open_link(&link);
            }
        }
        _ => {}
    }
}

fn handle_genres_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.view = View::List;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.genre_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.genre_prev();
        }
        KeyCode::Enter => {
            app.confirm_genre();
        }
        _ => {}
    }
}

/// Copy a link with xclip or wl-copy; returns the status line to show.
fn copy_link(link: &str) -> String {
    if link.is_empty() {
        return "No link for this movie".to_string();
    }
    let candidates: [(&str, &[&str]); 2] = [("xclip", &["-selection", "clipboard"]), ("wl-copy", &[])];
    for (program, args) in candidates {
        if let Ok(mut child) = std::process::Command::new(program)
            .args(args)
            .stdin(std::process::Stdio::piped())
            .spawn()
        {
            use std::io::Write;
            if let Some(mut stdin) = child.stdin.take() {
                let _ = stdin.write_all(link.as_bytes());
            }
            let _ = child.wait();
            return format!("Copied: {}", link);
        }
    }
    format!("Link: {} (clipboard not available)", link)
}

fn open_link(link: &str) -> String {
    if link.is_empty() {
        return "No link for this movie".to_string();
    }
    match std::process::Command::new("xdg-open").arg(link).spawn() {
        Ok(_) => format!("Opening: {}", link),
        Err(e) => {
            log::warn!("xdg-open failed: {}", e);
            format!("Link: {} (could not open browser)", link)
        }
    }
}

async fn list(
    cli_source: Option<String>,
    genre: Option<String>,
    sort: Option<SortArg>,
    format: Format,
) -> CatalogResult<()> {
    let config = Config::load()?;
    let mut catalog = load_catalog(cli_source, &config).await?;

    for action in list_actions(genre, sort) {
        log::debug!("Action: {}", action.label());
        catalog.apply(&action);
    }

    match format {
        Format::Html => {
            let mut renderer = HtmlRenderer::new(config.poster_dir.as_str());
            renderer.render(catalog.current());
            println!("{}", renderer.html());
        }
        Format::Text => {
            let stdout = std::io::stdout();
            let mut renderer = TextRenderer::new(stdout.lock(), config.poster_dir.as_str());
            renderer.render(catalog.current());
            renderer.finish()?;
        }
    }
    Ok(())
}

/// Filter first, then sort what the filter left.
fn list_actions(genre: Option<String>, sort: Option<SortArg>) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Some(genre) = genre {
        actions.push(Action::SelectGenre(genre));
    }
    match sort {
        Some(SortArg::Title) => actions.push(Action::OrderByTitle),
        Some(SortArg::Date) => actions.push(Action::OrderByDate),
        None => {}
    }
    actions
}

async fn fetch(url: &str, output: Option<PathBuf>) -> CatalogResult<()> {
    let output = match output {
        Some(path) => path,
        None => config::cached_movies_path()?,
    };
    eprintln!("Downloading {} -> {} ...", url, output.display());
    let count = source::download(url, &output).await?;
    eprintln!("Done. {} movies saved.", count);
    Ok(())
}
