use super::board::Coord;
use crate::consts;
use enum_map::{Enum, EnumMap};

/// The four directions of travel, in input-priority order: when more
/// than one input line is asserted in the same cycle, the earliest
/// variant wins.
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180° opposite, which the latch refuses to turn into
    pub(super) fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Step one cell from `pos`, wrapping within the five-bit
    /// coordinate range.  Stepping up from row 0 yields row 31, which
    /// is off-grid and gets caught by the wall check.
    pub(super) fn step(self, pos: Coord) -> Coord {
        let Coord { mut x, mut y } = pos;
        match self {
            Direction::Up => y = y.wrapping_sub(1) & consts::COORD_MASK,
            Direction::Down => y = y.wrapping_add(1) & consts::COORD_MASK,
            Direction::Left => x = x.wrapping_sub(1) & consts::COORD_MASK,
            Direction::Right => x = x.wrapping_add(1) & consts::COORD_MASK,
        }
        Coord { x, y }
    }
}

/// The four level-held direction input lines, as sampled for one cycle
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct InputLines(EnumMap<Direction, bool>);

impl InputLines {
    /// Assert the line for `direction`
    pub(crate) fn raise(&mut self, direction: Direction) {
        self.0[direction] = true;
    }

    /// Is any line asserted?
    pub(crate) fn any(self) -> bool {
        self.0.values().any(|&on| on)
    }

    /// The requested direction, resolved by priority order when more
    /// than one line is asserted
    fn requested(self) -> Option<Direction> {
        self.0.iter().find_map(|(direction, &on)| on.then_some(direction))
    }
}

/// Two-stage direction register.
///
/// `pending` follows the input lines every cycle; `applied` takes over
/// pending's value only on a tick while the game is in play.  The
/// application happens before this cycle's input is latched, so a
/// same-cycle request can never be applied on the same tick, and the
/// reversal check always runs against the direction that will actually
/// govern the next movement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct DirectionLatch {
    pending: Direction,
    applied: Direction,
}

impl DirectionLatch {
    /// The reset state faces right
    pub(super) fn new() -> DirectionLatch {
        DirectionLatch {
            pending: Direction::Right,
            applied: Direction::Right,
        }
    }

    /// Run one cycle of the resolver.  `apply` is true on a tick while
    /// the game is in play; the return value is the direction governing
    /// that tick's movement.
    ///
    /// A requested direction equal to the exact opposite of the
    /// currently applied one is rejected, leaving `pending` unchanged.
    pub(super) fn update(&mut self, lines: InputLines, apply: bool) -> Direction {
        if apply {
            self.applied = self.pending;
        }
        if let Some(direction) = lines
            .requested()
            .filter(|&d| d != self.applied.opposite())
        {
            self.pending = direction;
        }
        self.applied
    }
}
