mod app;
mod dump;
mod labels;
mod render;

use anyhow::{Context, Result, bail};
use blockpad_config::Config;
use blockpad_engine::EngineOptions;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

use crate::app::App;
use crate::labels::BlockStoreLabels;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    View { path: PathBuf },
    InitConfig,
    Dump { path: PathBuf, cursor: usize },
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [flag] if flag == "--init-config" => Ok(Command::InitConfig),
        [path] if !path.starts_with("--") => Ok(Command::View {
            path: PathBuf::from(path),
        }),
        [flag, path] if flag == "--dump" => Ok(Command::Dump {
            path: PathBuf::from(path),
            cursor: 0,
        }),
        [flag, path, cursor_flag, cursor] if flag == "--dump" && cursor_flag == "--cursor" => {
            let cursor = cursor
                .parse()
                .with_context(|| format!("Invalid cursor offset '{cursor}'"))?;
            Ok(Command::Dump {
                path: PathBuf::from(path),
                cursor,
            })
        }
        _ => bail!("unrecognised arguments"),
    }
}

fn engine_options(config: &Config) -> EngineOptions {
    EngineOptions {
        prescan_limit: config.editor.prescan_limit,
        block_icon: config.editor.block_icon.clone(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("blockpad-cli");
    let command = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!("Usage: {program} <file.md>");
            eprintln!("       {program} --dump <file.md> [--cursor <offset>]");
            eprintln!("       {program} --init-config");
            process::exit(1);
        }
    };

    match command {
        Command::InitConfig => init_config(),
        Command::Dump { path, cursor } => {
            let config = load_config();
            let labels = block_labels(&config);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let set = dump::decorate_all(&text, cursor, &labels, &engine_options(&config));
            print!("{}", dump::format_decorations(&set));
            Ok(())
        }
        Command::View { path } => {
            let config = load_config();
            let labels = block_labels(&config);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            log::info!("opening {}", path.display());
            let app = App::new(
                path,
                &text,
                engine_options(&config),
                config.editor.live_preview,
                labels,
            );
            run_terminal(app)
        }
    }
}

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn block_labels(config: &Config) -> BlockStoreLabels {
    BlockStoreLabels::new(config.block_labels.clone(), config.blocks_path.clone())
}

fn init_config() -> Result<()> {
    let path = Config::config_path();
    if path.exists() {
        bail!("Config file already exists at {}", path.display());
    }
    Config::default()
        .save()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn run_terminal(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                KeyCode::Left | KeyCode::Char('h') => app.move_left(),
                KeyCode::Right | KeyCode::Char('l') => app.move_right(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::PageUp => app.page_up(),
                KeyCode::Enter => app.open_block_on_caret_line(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(f.area());

    // Borders take two rows
    app.resize(chunks[0].height.saturating_sub(2) as usize);

    let title = format!(
        "{}{}",
        app.path.display(),
        if app.live_preview() { "" } else { " (raw)" }
    );
    let content = Paragraph::new(render::visible_lines(app))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, chunks[0]);

    let status = Line::from(vec![
        Span::styled(
            format!(
                " Ln {}/{}, Col {} ",
                app.caret_line() + 1,
                app.line_count(),
                app.caret_column() + 1
            ),
            Style::default().bg(Color::Blue).fg(Color::White),
        ),
        Span::raw(" "),
        Span::raw(app.status.clone()),
    ]);
    f.render_widget(Paragraph::new(status), chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑↓/jk: Line | "),
        Span::raw("←→/hl: Column | "),
        Span::raw("PgUp/PgDn: Scroll | "),
        Span::raw("Enter: Open block"),
    ]);
    f.render_widget(Paragraph::new(help_text), chunks[2]);
}
