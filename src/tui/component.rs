use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as struct fields ("props"), may borrow
/// persistent state from `TuiState`, and render into a `Rect`.
///
/// `render` takes `&mut self` so stateful wrappers can update list offsets
/// and cursor positions while drawing, like ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

/// Focus ring shared by the form components: a cursor over `len` slots
/// that wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub index: usize,
    len: usize,
}

impl Focus {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Change the number of slots, clamping the cursor.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn is(&self, index: usize) -> bool {
        self.index == index
    }
}
