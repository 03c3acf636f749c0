use crate::consts;
use crate::game::FrameBuffer;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
};

/// The display driver: renders the controller's externally visible
/// surface, namely the occupancy grid inside a border plus title and
/// status lines.  It reads nothing but the frame buffer and the
/// game-over flag.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BoardDisplay<'a> {
    pub(crate) frame: &'a FrameBuffer,
    pub(crate) game_over: bool,
    pub(crate) cell_style: Style,
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [title_area, board_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(" gridsnake", consts::TITLE_STYLE).render(title_area, buf);

        let block_area = center_rect(
            board_area,
            Size {
                width: u16::from(consts::GRID_WIDTH).saturating_add(2),
                height: u16::from(consts::GRID_HEIGHT).saturating_add(2),
            },
        );
        let block = Block::bordered();
        let cells_area = block.inner(block_area);
        block.render(block_area, buf);
        for y in 0..consts::GRID_HEIGHT {
            for x in 0..consts::GRID_WIDTH {
                if self.frame.get(x, y) {
                    self.draw_cell(cells_area, x, y, buf);
                }
            }
        }

        let status = if self.game_over {
            Line::from_iter([
                Span::raw(" "),
                Span::styled("GAME OVER", consts::GAME_OVER_STYLE),
                Span::raw("    Reset ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(")    Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
        } else {
            Line::from_iter([
                Span::raw(" Move: arrows / wasd / hjkl    Reset ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(")    Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
        };
        status.render(status_area, buf);
    }
}

impl BoardDisplay<'_> {
    fn draw_cell(&self, cells_area: Rect, x: u8, y: u8, buf: &mut Buffer) {
        let Some(cx) = cells_area.x.checked_add(u16::from(x)) else {
            return;
        };
        let Some(cy) = cells_area.y.checked_add(u16::from(y)) else {
            return;
        };
        if let Some(cell) = buf.cell_mut((cx, cy)) {
            cell.set_char(consts::CELL_SYMBOL);
            cell.set_style(Style::reset().patch(self.cell_style));
        }
    }
}
