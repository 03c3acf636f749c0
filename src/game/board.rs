use super::direction::Direction;
use super::lfsr::Lfsr;
use crate::consts;

/// A cell coordinate.
///
/// Both fields are five-bit registers: 0–19 is on the grid, 20–31 is
/// off-grid.  Stepping over an edge wraps within the five-bit range,
/// and the wall check catches the resulting out-of-range value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Coord {
    pub(crate) x: u8,
    pub(crate) y: u8,
}

impl Coord {
    pub(crate) const fn new(x: u8, y: u8) -> Coord {
        Coord { x, y }
    }

    /// Is this coordinate on the 20×20 grid?
    pub(crate) fn in_bounds(self) -> bool {
        self.x < consts::GRID_WIDTH && self.y < consts::GRID_HEIGHT
    }
}

/// The snake & apple model.
///
/// `body[0]` is the head cell, and only the first `length` slots are
/// live.  Slots past `length` keep whatever stale coordinates the shift
/// last pushed into them and are never rendered.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Board {
    /// The head register; the body adopts this coordinate whenever the
    /// snake moves
    pub(super) head: Coord,

    /// Fixed-capacity body storage, ordered head to tail
    pub(super) body: [Coord; consts::CELL_COUNT],

    /// Number of live body slots; grows by one per apple, never shrinks
    /// within a round
    pub(super) length: usize,

    /// The apple's coordinate, always on the grid
    pub(super) apple: Coord,
}

/// Outcome of one movement step
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Advance {
    Moved,
    Ate,
    Collided,
}

impl Board {
    pub(super) fn new() -> Board {
        let head = Coord::new(consts::INITIAL_HEAD.0, consts::INITIAL_HEAD.1);
        let mut body = [Coord::default(); consts::CELL_COUNT];
        for (i, slot) in body[..consts::INITIAL_LENGTH].iter_mut().enumerate() {
            let offset = u8::try_from(i).expect("initial snake length should fit in u8");
            *slot = Coord::new(head.x - offset, head.y);
        }
        Board {
            head,
            body,
            length: consts::INITIAL_LENGTH,
            apple: Coord::new(consts::INITIAL_APPLE.0, consts::INITIAL_APPLE.1),
        }
    }

    /// The live portion of the body
    pub(super) fn segments(&self) -> &[Coord] {
        &self.body[..self.length]
    }

    /// Advance the head one cell in `direction`.
    ///
    /// Collision is judged against the pre-move body, so stepping onto
    /// the tail cell counts even though the tail is about to vacate it.
    /// Apple consumption is evaluated independently of collision, and
    /// the replacement apple is drawn from `lfsr` with no occupancy
    /// check: it may land on the snake.
    pub(super) fn advance(&mut self, direction: Direction, lfsr: &Lfsr) -> Advance {
        let candidate = direction.step(self.head);
        let collided = !candidate.in_bounds() || self.segments().contains(&candidate);
        let ate = candidate == self.apple;
        if ate {
            self.length = (self.length + 1).min(consts::CELL_COUNT);
            self.apple = lfsr.coord();
        }
        if collided {
            return Advance::Collided;
        }
        // Full-array shift toward the tail: every slot moves every
        // tick, live or not, so the cost is independent of `length`.
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = candidate;
        self.head = candidate;
        if ate {
            Advance::Ate
        } else {
            Advance::Moved
        }
    }
}
