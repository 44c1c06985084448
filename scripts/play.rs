//! brownian-play - animate a Brownian motion sample path in the terminal.
//!
//! Keys: `space` start/pause, `r` new path, arrows change μ and σ,
//! `+`/`-` double or halve the step count, `q` quits.

use anyhow::{Context as _, Result};
use brownian_play::playback::{Phase, PlaybackConfig, PlaybackController};
use brownian_play::render::{Point, Renderer, Rgb, Stroke, Surface, Theme};
use brownian_play::SimulationParameters;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::{Frame, Terminal};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Animate a Brownian motion sample path
#[derive(Parser, Debug)]
#[command(name = "brownian-play")]
#[command(version, about = "Animate dX = μ dt + σ dW in the terminal", long_about = None)]
struct Cli {
    /// Drift μ
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    drift: String,

    /// Diffusion σ (non-negative)
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    diffusion: String,

    /// Number of Euler steps n
    #[arg(short = 'n', long, default_value = "1000", allow_hyphen_values = true)]
    steps: String,

    /// Interval length k
    #[arg(short = 'k', long, default_value = "10", allow_hyphen_values = true)]
    interval: String,

    /// Minimum milliseconds between revealed samples (0 = one per frame)
    #[arg(long, default_value_t = 0)]
    tick_ms: u64,

    /// Host frame rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Start playing immediately
    #[arg(long)]
    autostart: bool,

    /// Fail on malformed parameters instead of falling back to defaults
    #[arg(long)]
    strict: bool,
}

/// Log output held back while the alternate screen is up, replayed to
/// stderr once the terminal is restored.
#[derive(Clone, Default)]
struct SessionLog(Arc<Mutex<Vec<u8>>>);

impl SessionLog {
    fn drain(&self) -> Vec<u8> {
        match self.0.lock() {
            Ok(mut buf) => std::mem::take(&mut *buf),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Write for SessionLog {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "session log poisoned"))?;
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `warn` by default, never styled, written into `sink` instead of the tty.
fn session_logger(sink: &SessionLog) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Warn)
        .write_style(env_logger::WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(sink.clone())));
    builder
}

/// Adapts a ratatui canvas context to the library's top-left-origin surface.
struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    width: f64,
    height: f64,
}

impl CanvasSurface<'_, '_> {
    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Surface for CanvasSurface<'_, '_> {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    // The terminal keeps its own background.
    fn clear(&mut self, _color: Rgb) {}

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let shape = CanvasLine {
            x1: from.x,
            y1: self.flip(from.y),
            x2: to.x,
            y2: self.flip(to.y),
            color: color(stroke.color),
        };
        self.ctx.draw(&shape);
    }

    fn circle(&mut self, center: Point, radius: f64, rgb: Rgb) {
        let shape = Circle {
            x: center.x,
            y: self.flip(center.y),
            radius,
            color: color(rgb),
        };
        self.ctx.draw(&shape);
    }

    fn text(&mut self, at: Point, text: &str, rgb: Rgb) {
        let y = self.flip(at.y);
        self.ctx
            .print(at.x, y, Line::styled(text.to_string(), Style::default().fg(color(rgb))));
    }
}

struct App {
    player: PlaybackController,
    renderer: Renderer,
    status: String,
}

impl App {
    fn new(params: SimulationParameters, config: &PlaybackConfig) -> Result<Self> {
        let player = PlaybackController::new(params, config)?;
        let renderer = Renderer {
            margin: 8.0,
            marker_radius: 1.5,
            grid_divisions: 6,
            theme: Theme {
                grid: Rgb(60, 60, 60),
                axis: Rgb(200, 200, 200),
                label: Rgb(150, 150, 150),
                ..Theme::default()
            },
            ..Renderer::default()
        };
        Ok(App {
            player,
            renderer,
            status: String::from("space: start/pause  r: reset  ←→: σ  ↑↓: μ  +/-: steps  q: quit"),
        })
    }

    fn adjust(&mut self, f: impl FnOnce(&mut SimulationParameters)) {
        let mut params = *self.player.params();
        f(&mut params);
        match self.player.set_params(params) {
            Ok(()) => {
                self.status = format!(
                    "μ = {:.2}  σ = {:.2}  n = {}  k = {}",
                    params.drift, params.diffusion, params.step_count, params.interval_length
                );
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    /// Returns `false` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char(' ') => {
                self.player.toggle();
            }
            KeyCode::Char('s') => {
                self.player.start();
            }
            KeyCode::Char('p') => {
                self.player.pause();
            }
            KeyCode::Char('r') => self.player.reset(),
            KeyCode::Up => self.adjust(|p| p.drift += 0.1),
            KeyCode::Down => self.adjust(|p| p.drift -= 0.1),
            KeyCode::Right => self.adjust(|p| p.diffusion += 0.1),
            KeyCode::Left => self.adjust(|p| p.diffusion = (p.diffusion - 0.1).max(0.0)),
            KeyCode::Char('+') => self.adjust(|p| p.step_count = p.step_count.saturating_mul(2)),
            KeyCode::Char('-') => self.adjust(|p| p.step_count = (p.step_count / 2).max(1)),
            _ => {}
        }
        true
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let params = app.player.params();
    let title = format!(
        " dX = {:.2} dt + {:.2} dW   n = {}   k = {} ",
        params.drift, params.diffusion, params.step_count, params.interval_length
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(chunks[0]);
    // Braille cells are 2x4 dots.
    let width = f64::from(inner.width) * 2.0;
    let height = f64::from(inner.height) * 4.0;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            let mut surface = CanvasSurface {
                ctx,
                width,
                height,
            };
            app.renderer.draw_controller(&mut surface, &app.player);
        });
    frame.render_widget(canvas, chunks[0]);

    let (revealed, total) = app.player.progress();
    let current = app.player.current();
    let phase = match app.player.phase() {
        Phase::Stopped => "stopped",
        Phase::Running => "running",
        Phase::Finished => "finished",
    };
    let readout = format!(
        "t = {:>8.3}   X = {:>9.4}   step {}/{}   [{}]",
        current.time,
        current.value,
        revealed - 1,
        total - 1,
        phase
    );
    frame.render_widget(
        Paragraph::new(readout).style(Style::default().add_modifier(Modifier::BOLD)),
        chunks[1],
    );

    let ratio = if total > 1 {
        (revealed - 1) as f64 / (total - 1) as f64
    } else {
        1.0
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue))
            .ratio(ratio.clamp(0.0, 1.0)),
        chunks[2],
    );
    frame.render_widget(Paragraph::new(app.status.as_str()), chunks[3]);
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    frame_time: Duration,
) -> Result<()> {
    let mut last_frame = Instant::now();
    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = frame_time.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }

        if last_frame.elapsed() >= frame_time {
            last_frame = Instant::now();
            app.player.update(last_frame);
        }
    }
}

fn main() -> Result<()> {
    let session_log = SessionLog::default();
    session_logger(&session_log).parse_default_env().init();
    let cli = Cli::parse();

    let params = if cli.strict {
        SimulationParameters::parse_inputs(&cli.drift, &cli.diffusion, &cli.steps, &cli.interval)
            .context("invalid simulation parameters")?
    } else {
        SimulationParameters::from_inputs(&cli.drift, &cli.diffusion, &cli.steps, &cli.interval)
    };
    let config = PlaybackConfig::from_millis(cli.tick_ms);
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(cli.fps.max(1)));

    let mut app = App::new(params, &config)?;
    if cli.autostart {
        app.player.start();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut app, frame_time);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let (revealed, total) = app.player.progress();
    println!("exited at {}/{} samples", revealed, total);
    io::stderr().write_all(&session_log.drain())?;
    result
}
