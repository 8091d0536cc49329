//! Component trait - Interface for UI components
//!
//! Components are self-contained units that handle their own events,
//! keep local state, and render themselves. They communicate through
//! Actions rather than direct state mutation: events become Actions in
//! the `handle_*` methods, state changes happen in `update`, and `draw`
//! is pure rendering.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Called once when the component is created, for state that depends
    /// on runtime information.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Convert a key event into an Action. No state changes here.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Convert a mouse event into an Action.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Apply an Action to component state. May return a follow-up Action.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render the component into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
