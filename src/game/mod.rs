mod board;
mod direction;
mod frame;
mod lfsr;
mod tick;
use self::board::{Advance, Board};
use self::direction::DirectionLatch;
pub(crate) use self::direction::{Direction, InputLines};
pub(crate) use self::frame::FrameBuffer;
use self::lfsr::Lfsr;
use self::tick::TickDivider;
use crate::consts;

/// The whole controller.
///
/// Every component re-evaluates once per [`step()`](Game::step) call,
/// which models one clock cycle; the free-running parts (tick divider,
/// LFSR, pending-direction latch) advance in every state, while the
/// state machine and board only move on a tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game {
    ticker: TickDivider,
    lfsr: Lfsr,
    latch: DirectionLatch,
    state: GameState,
    board: Board,
    frame: FrameBuffer,
}

impl Game {
    pub(crate) fn new() -> Game {
        let mut game = Game {
            ticker: TickDivider::new(consts::CYCLES_PER_TICK),
            lfsr: Lfsr::new(),
            latch: DirectionLatch::new(),
            state: GameState::Idle,
            board: Board::new(),
            frame: FrameBuffer::new(),
        };
        game.frame.render(&game.board);
        game
    }

    /// Run one clock cycle.
    ///
    /// The tick divider and LFSR always advance, and the direction
    /// latch samples the input lines; when the tick fires in play, the
    /// board advances and collisions end the round.  The occupancy
    /// image is recomputed at the end of every cycle, tick or not.
    pub(crate) fn step(&mut self, lines: InputLines) {
        let tick = self.ticker.step();
        self.lfsr.step();
        let apply = tick && self.state == GameState::Playing;
        let direction = self.latch.update(lines, apply);
        match self.state {
            GameState::Idle => {
                if lines.any() {
                    self.state = GameState::Playing;
                }
            }
            GameState::Playing => {
                if tick && self.board.advance(direction, &self.lfsr) == Advance::Collided {
                    self.state = GameState::GameOver;
                }
            }
            GameState::GameOver => (),
        }
        self.frame.render(&self.board);
    }

    /// The synchronous reset line: reinitialize every register
    pub(crate) fn reset(&mut self) {
        *self = Game::new();
    }

    /// The occupancy image computed by the last cycle
    pub(crate) fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// The terminal flag: true from the colliding tick until reset
    pub(crate) fn game_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    /// Awaiting the first input
    Idle,
    /// Active simulation
    Playing,
    /// Terminal until the reset line is asserted
    GameOver,
}
