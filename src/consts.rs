//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Width of the game grid in cells
pub(crate) const GRID_WIDTH: u8 = 20;

/// Height of the game grid in cells
pub(crate) const GRID_HEIGHT: u8 = 20;

/// Total number of grid cells, which also bounds the snake's length
pub(crate) const CELL_COUNT: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Coordinate registers are five bits wide; 0–19 is on the grid, 20–31
/// is off-grid.
pub(crate) const COORD_MASK: u8 = 0x1F;

/// Number of clock cycles per game tick.  At the nominal
/// [`CYCLES_PER_SECOND`] clock rate, the game advances twice per second.
pub(crate) const CYCLES_PER_TICK: u32 = 30;

/// Nominal rate of the cycle clock driving the controller
pub(crate) const CYCLES_PER_SECOND: u32 = 60;

/// Value loaded into the pseudo-random register on reset.  Any non-zero
/// seed works; this one is fixed so that runs are reproducible.
pub(crate) const LFSR_SEED: u8 = 0xA5;

/// Snake length after reset
pub(crate) const INITIAL_LENGTH: usize = 3;

/// Head coordinate after reset; the body trails west of it
pub(crate) const INITIAL_HEAD: (u8, u8) = (10, 10);

/// Apple coordinate after reset
pub(crate) const INITIAL_APPLE: (u8, u8) = (15, 10);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyph for an occupied grid cell
pub(crate) const CELL_SYMBOL: char = '█';

/// Style for occupied grid cells when the configuration does not
/// override it
pub(crate) const DEFAULT_CELL_STYLE: &str = "bold green";

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the title bar at the top of the screen
pub(crate) const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the "GAME OVER" marker in the status line
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);
