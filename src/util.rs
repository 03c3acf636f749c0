use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height]).flex(Flex::Center).areas(rect);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Rect::new(0, 0, 80, 24))]
    #[case(Rect::new(0, 0, 100, 30), Rect::new(10, 3, 80, 24))]
    #[case(Rect::new(5, 5, 90, 26), Rect::new(10, 6, 80, 24))]
    fn test_get_display_area(#[case] buffer_area: Rect, #[case] display: Rect) {
        assert_eq!(get_display_area(buffer_area), display);
    }

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(22, 22), Rect::new(29, 1, 22, 22))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(80, 24), Rect::new(0, 0, 80, 24))]
    #[case(Rect::new(10, 2, 60, 20), Size::new(20, 10), Rect::new(30, 7, 20, 10))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }
}
