use crate::command::Command;
use crate::config::Config;
use crate::display::BoardDisplay;
use crate::game::{Direction, Game, InputLines};
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{poll, read, Event};
use ratatui::{backend::Backend, style::Style, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Drives the controller from a terminal: one cycle per period of the
/// wall-clock pacer, with key presses asserted as input lines for the
/// following cycle.  A key press is the closest a terminal gets to a
/// level-held input, so each press holds its line high for exactly one
/// cycle.
#[derive(Clone, Debug)]
pub(crate) struct App {
    game: Game,
    cell_style: Style,
    cycle_period: Duration,
    lines: InputLines,
    reset_line: bool,
    next_cycle: Option<Instant>,
    warning: Option<Warning>,
    quitting: bool,
}

impl App {
    pub(crate) fn new(config: &Config, warning: Option<Warning>) -> App {
        App {
            game: Game::new(),
            cell_style: Style::from(config.display.cell.clone()),
            cycle_period: Duration::from_secs(1) / config.timing.cycles_per_second.get(),
            lines: InputLines::default(),
            reset_line: false,
            next_cycle: None,
            warning,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| self.render_frame(frame))?;
        Ok(())
    }

    fn render_frame(&self, frame: &mut Frame<'_>) {
        frame.render_widget(
            BoardDisplay {
                frame: self.game.frame(),
                game_over: self.game.game_over(),
                cell_style: self.cell_style,
            },
            frame.area(),
        );
        if let Some(ref warning) = self.warning {
            frame.render_widget(warning, frame.area());
        }
    }

    fn process_input(&mut self) -> io::Result<()> {
        let when = *self
            .next_cycle
            .get_or_insert_with(|| Instant::now() + self.cycle_period);
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.cycle();
            self.next_cycle = None;
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    /// Run one clock cycle: feed the sampled lines to the controller
    /// and clear them for the next sampling window.
    fn cycle(&mut self) {
        if self.reset_line {
            self.game.reset();
        } else {
            self.game.step(self.lines);
        }
        self.lines = InputLines::default();
        self.reset_line = false;
    }

    fn handle_event(&mut self, event: Event) {
        let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        else {
            return;
        };
        if let Some(ref warning) = self.warning {
            match warning.handle_command(cmd) {
                Some(WarningOutcome::Dismissed) => self.warning = None,
                Some(WarningOutcome::Quit) => self.quitting = true,
                None => (),
            }
            return;
        }
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Up => self.lines.raise(Direction::Up),
            Command::Down => self.lines.raise(Direction::Down),
            Command::Left => self.lines.raise(Direction::Left),
            Command::Right => self.lines.raise(Direction::Right),
            Command::Reset => self.reset_line = true,
            Command::Enter => (),
        }
    }
}
