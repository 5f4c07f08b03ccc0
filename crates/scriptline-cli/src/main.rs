mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use relative_path::RelativePathBuf;
use scriptline_config::Config;
use scriptline_engine::{DocumentSettings, Screenplay, ScriptFile, io, parsing::snapshot};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

struct App {
    scripts_path: PathBuf,
    config: Option<Config>,
    scripts: Vec<ScriptFile>,
    file_list_state: ListState,
    current: Option<(Screenplay, DocumentSettings)>,
    error: Option<String>,
    scroll: u16,
}

impl App {
    fn new(scripts_path: PathBuf, config: Option<Config>) -> Result<Self> {
        let scripts = io::list_scripts(&scripts_path)?;

        let mut app = Self {
            scripts_path,
            config,
            scripts,
            file_list_state: ListState::default(),
            current: None,
            error: None,
            scroll: 0,
        };

        if !app.scripts.is_empty() {
            app.file_list_state.select(Some(0));
            app.load_selected();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.scripts.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.scripts.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.load_selected();
    }

    fn previous_file(&mut self) {
        if self.scripts.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.scripts.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.load_selected();
    }

    fn load_selected(&mut self) {
        self.scroll = 0;
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|i| self.scripts.get(i))
        else {
            return;
        };

        match io::load_script(file.relative_path(), &self.scripts_path) {
            Ok((script, mut settings)) => {
                if let Some(config) = &self.config {
                    config.apply_defaults(&mut settings);
                }
                log::info!(
                    "opened {} ({} lines)",
                    file.relative_path(),
                    script.lines().len()
                );
                self.current = Some((script, settings));
                self.error = None;
            }
            Err(e) => {
                log::warn!("failed to open {}: {e}", file.relative_path());
                self.current = None;
                self.error = Some(format!("Error reading file: {e}"));
            }
        }
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(5);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(5);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() == 3 && args[1] == "--dump" {
        return dump(Path::new(&args[2]));
    }

    let config_path = Config::config_path();
    let loaded_config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} [scripts-folder-path]", args[0]);
            process::exit(1);
        }
    };

    let (scripts_path, from_config) = match (args.len(), &loaded_config) {
        (2, _) => (PathBuf::from(&args[1]), false),
        (1, Some(config)) => (config.scripts_path.clone(), true),
        (1, None) => {
            eprintln!("Error: No scripts path provided and no config file found");
            eprintln!("Usage: {} <scripts-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        _ => {
            eprintln!("Usage: {} [scripts-folder-path]", args[0]);
            eprintln!("       {} --dump <script-file>", args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_scripts_dir(&scripts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Scripts path '{}'{} is invalid: {e}",
            scripts_path.display(),
            source
        );
        process::exit(1);
    }

    let mut app = App::new(scripts_path, loaded_config)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

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

/// Prints the JSON snapshot of one script file.
fn dump(path: &Path) -> Result<()> {
    let root = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("not a file path: {}", path.display()))?;

    let (script, _settings) = io::load_script(&RelativePathBuf::from(file_name), root)
        .with_context(|| format!("loading {}", path.display()))?;
    let snap = snapshot::normalize(script.lines());
    println!("{}", serde_json::to_string_pretty(&snap)?);
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(),
                KeyCode::PageUp | KeyCode::Char('b') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints(
            [
                Constraint::Percentage(20),
                Constraint::Percentage(55),
                Constraint::Percentage(25),
            ]
            .as_ref(),
        )
        .split(rows[0]);

    // Script list panel
    let file_items: Vec<ListItem> = app
        .scripts
        .iter()
        .map(|script| ListItem::new(Line::from(Span::raw(script.display_name().to_string()))))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Scripts"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Screenplay panel
    let script_text = match (&app.current, &app.error) {
        (_, Some(error)) => vec![Line::from(error.clone())],
        (Some((script, settings)), None) => render::script_lines(script, settings),
        (None, None) => vec![Line::from("Select a script to view it")],
    };

    let page_size = app
        .current
        .as_ref()
        .map_or("", |(_, settings)| settings.page_size());
    let content = Paragraph::new(script_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Screenplay {page_size}")),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    // Outline and characters panel
    let mut outline: Vec<Line> = vec![];
    if let Some((script, _)) = &app.current {
        outline.extend(render::outline_rows(script).into_iter().map(Line::from));
        outline.push(Line::from(""));
        outline.push(Line::from(Span::styled(
            "Characters",
            Style::default().fg(Color::Green),
        )));
        outline.extend(script.character_names().into_iter().map(Line::from));
    }

    let outline_panel = Paragraph::new(outline)
        .block(Block::default().borders(Borders::ALL).title("Outline"))
        .wrap(Wrap { trim: true });

    f.render_widget(outline_panel, chunks[2]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("Space/PgDn: Scroll down | b/PgUp: Scroll up"),
    ]);

    f.render_widget(Paragraph::new(help_text), rows[1]);
}
