//! Clickable regions registered while drawing.

use ratatui::layout::Rect;

use crate::input::Input;

/// Rectangles drawn this frame and the input a click on each one stands for.
#[derive(Debug, Clone, Default)]
pub struct ButtonMap {
    buttons: Vec<(Rect, Input)>,
}

impl ButtonMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, area: Rect, input: Input) {
        if area.width > 0 && area.height > 0 {
            self.buttons.push((area, input));
        }
    }

    /// Input for a click at terminal cell (`column`, `row`). Later
    /// registrations sit on top.
    pub fn hit(&self, column: u16, row: u16) -> Option<Input> {
        self.buttons
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|(_, input)| *input)
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_inside_and_outside() {
        let mut map = ButtonMap::new();
        map.register(Rect::new(2, 3, 10, 3), Input::Char('1'));

        assert_eq!(map.hit(2, 3), Some(Input::Char('1')));
        assert_eq!(map.hit(11, 5), Some(Input::Char('1')));
        assert_eq!(map.hit(12, 5), None);
        assert_eq!(map.hit(5, 6), None);
    }

    #[test]
    fn test_topmost_wins() {
        let mut map = ButtonMap::new();
        map.register(Rect::new(0, 0, 20, 10), Input::Escape);
        map.register(Rect::new(5, 5, 4, 1), Input::Enter);

        assert_eq!(map.hit(6, 5), Some(Input::Enter));
        assert_eq!(map.hit(1, 1), Some(Input::Escape));
    }

    #[test]
    fn test_empty_area_ignored() {
        let mut map = ButtonMap::new();
        map.register(Rect::new(0, 0, 0, 4), Input::Enter);
        assert!(map.is_empty());
    }
}
