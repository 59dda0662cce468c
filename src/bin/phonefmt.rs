//! CLI tool for US phone number formatting.
//!
//! # Usage
//!
//! ```bash
//! # Print every rendering
//! phonefmt format 5852826396
//!
//! # Print one rendering
//! phonefmt format "(585) 282-6396" --variant e164
//!
//! # JSON output
//! phonefmt format 5852826396 --output json
//!
//! # Interactive session: type a number, arrows to select, Ctrl+C to copy
//! phonefmt interactive
//! ```

use std::error::Error;
use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use phone_formatter::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use phone_formatter::input::{Key, KeyPress, Modifiers};
use phone_formatter::{format, Controller, CopySource, FormatVariant};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, Paragraph};
use ratatui::{DefaultTerminal, Frame};
use tracing_subscriber::EnvFilter;

/// Longest the interactive loop waits for input before re-checking timers.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "phonefmt")]
#[command(author, version, about = "Reformat US phone numbers every common way")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the renderings of a phone number
    Format {
        /// Phone number, in any common notation
        number: String,

        /// Print only this rendering
        #[arg(long)]
        variant: Option<VariantArg>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Type a number and browse/copy its renderings
    Interactive {
        /// Start with this number already entered
        #[arg(short, long)]
        initial: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    International,
    National,
    E164,
    Dots,
}

impl From<VariantArg> for FormatVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::International => FormatVariant::International,
            VariantArg::National => FormatVariant::National,
            VariantArg::E164 => FormatVariant::E164,
            VariantArg::Dots => FormatVariant::InternationalWithDots,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // The interactive screen owns the terminal; only log there when asked to.
    let interactive = matches!(cli.command, Commands::Interactive { .. });
    if let Err(e) = init_tracing(cli.verbose, cli.log_file.as_deref(), interactive) {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    match cli.command {
        Commands::Format {
            number,
            variant,
            output,
        } => {
            cmd_format(&number, variant.map(|v| v.into()), output);
        }
        Commands::Interactive { initial } => {
            if let Err(e) = cmd_interactive(initial) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn init_tracing(verbose: u8, log_file: Option<&Path>, interactive: bool) -> Result<(), Box<dyn Error>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn cmd_format(number: &str, variant: Option<FormatVariant>, output: OutputFormat) {
    let formats = format(number);

    match output {
        OutputFormat::Text => {
            if formats.is_empty() {
                eprintln!("Error: not a valid US phone number");
                std::process::exit(1);
            }
            match variant {
                Some(v) => {
                    if let Some(value) = formats.get(v) {
                        println!("{}", value);
                    }
                }
                None => {
                    for (v, value) in formats.iter() {
                        println!("{:<14} {}", format!("{}:", v.label()), value);
                    }
                }
            }
        }
        OutputFormat::Json => {
            let json = match variant {
                Some(v) => serde_json::json!({
                    "valid": !formats.is_empty(),
                    "variant": v.key(),
                    "value": formats.get(v),
                }),
                None => serde_json::json!({
                    "valid": !formats.is_empty(),
                    "formats": formats,
                }),
            };
            match serde_json::to_string_pretty(&json) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(2);
                }
            }
            if formats.is_empty() {
                std::process::exit(1);
            }
        }
    }
}

fn cmd_interactive(initial: Option<String>) -> Result<(), Box<dyn Error>> {
    let mut clipboard: Box<dyn Clipboard> = match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            // Copies will fail quietly, so no confirmation is ever shown.
            tracing::warn!(error = %e, "system clipboard unavailable");
            Box::new(MemoryClipboard::failing())
        }
    };

    let mut controller = Controller::new();
    if let Some(initial) = initial {
        controller.on_input_changed(initial);
    }

    let mut terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(Box::<dyn Error>::from)
        .and_then(|()| run(&mut terminal, &mut controller, clipboard.as_mut()));
    let released = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;
    released?;
    Ok(())
}

fn run(
    terminal: &mut DefaultTerminal,
    controller: &mut Controller,
    clipboard: &mut dyn Clipboard,
) -> Result<(), Box<dyn Error>> {
    loop {
        let mut list_area = Rect::default();
        terminal.draw(|frame| list_area = draw(frame, controller))?;

        let timeout = controller
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Esc {
                        return Ok(());
                    }
                    if !controller.handle_key(key_press(&key), clipboard, Instant::now()) {
                        edit_input(controller, &key);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(row) = row_at(list_area, mouse.column, mouse.row) {
                        controller.copy(clipboard, CopySource::Row(row), Instant::now());
                    }
                }
                _ => {}
            }
        }

        controller.tick(Instant::now());
    }
}

fn key_press(key: &KeyEvent) -> KeyPress {
    let code = match key.code {
        KeyCode::Down => Key::Down,
        KeyCode::Up => Key::Up,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    let modifiers = Modifiers {
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        meta: key.modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };
    KeyPress::new(code, modifiers)
}

fn edit_input(controller: &mut Controller, key: &KeyEvent) {
    let mut input = controller.input().to_string();
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            input.push(c);
        }
        KeyCode::Backspace => {
            input.pop();
        }
        _ => return,
    }
    controller.on_input_changed(input);
}

/// Renders the session and returns the area holding the rendering rows.
fn draw(frame: &mut Frame, controller: &Controller) -> Rect {
    let [title, input, list, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from("USA Number Formatter").style(
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        title,
    );

    frame.render_widget(
        Paragraph::new(controller.input()).block(Block::bordered().title("Enter Phone Number")),
        input,
    );

    let items: Vec<ListItem> = controller
        .formats()
        .iter()
        .enumerate()
        .map(|(i, (variant, value))| {
            let line = Line::from(format!("{:<14} {}", format!("{}:", variant.label()), value));
            if controller.cursor() == Some(i) {
                ListItem::new(line.style(Style::default().fg(Color::Black).bg(Color::Cyan)))
            } else {
                ListItem::new(line)
            }
        })
        .collect();
    frame.render_widget(
        List::new(items).block(Block::bordered().title("Formatted Numbers")),
        list,
    );

    let status_line = match controller.feedback() {
        Some(message) => Line::from(message.to_string())
            .style(Style::default().fg(Color::White).bg(Color::Green)),
        None => Line::from("↑/↓ select · Ctrl+C or click to copy · Esc to quit")
            .style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(status_line), status);

    list
}

/// Maps a click position to a row of the bordered list.
fn row_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner_top = area.y.checked_add(1)?;
    let inner_bottom = area.bottom().checked_sub(1)?;
    if column <= area.x
        || column >= area.right().saturating_sub(1)
        || row < inner_top
        || row >= inner_bottom
    {
        return None;
    }
    Some(usize::from(row - inner_top))
}
