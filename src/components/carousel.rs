//! Carousel component - featured items rotation
//!
//! Renders the current slide, one dot indicator per slide, and the
//! autoplay progress gauge. Owns the mouse drag tracking: a horizontal
//! drag across the section navigates, a plain click on a dot jumps to
//! that slide. The rotation state itself lives in `model::carousel`.

use crate::action::Action;
use crate::component::Component;
use crate::components::card::slide_lines;
use crate::model::carousel::CarouselState;
use crate::model::item::NewsItem;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use std::time::Instant;

/// Minimum horizontal movement, in columns, for a drag to count as a
/// swipe rather than a click.
pub const DRAG_MIN_COLUMNS: u16 = 5;

/// Direction of a completed horizontal drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

/// Classify a completed drag. Movements at or below the threshold are
/// clicks, not swipes.
pub fn classify_drag(start_col: u16, end_col: u16) -> Option<Swipe> {
    let delta = i32::from(end_col) - i32::from(start_col);
    if delta.unsigned_abs() <= u32::from(DRAG_MIN_COLUMNS) {
        return None;
    }
    Some(if delta < 0 { Swipe::Left } else { Swipe::Right })
}

/// Carousel component
#[derive(Debug, Default)]
pub struct CarouselComponent {
    /// Column where an in-flight drag began
    drag_start: Option<u16>,

    /// Section area, recorded at draw time for hit-testing
    area: Rect,

    /// Dot indicator strip, recorded at draw time
    dots_area: Rect,

    /// Number of dots currently rendered
    dot_count: usize,
}

impl CarouselComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Dot indicator index under a click, if any. Dots occupy two columns
    /// each ("● " / "○ ") starting at the strip origin.
    fn dot_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.dots_area.contains(Position::new(column, row)) {
            return None;
        }
        let index = usize::from(column - self.dots_area.x) / 2;
        (index < self.dot_count).then_some(index)
    }
}

impl Component for CarouselComponent {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left)
                if self.contains(mouse.column, mouse.row) =>
            {
                self.drag_start = Some(mouse.column);
                Ok(None)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = match self.drag_start.take() {
                    Some(start) => start,
                    None => return Ok(None),
                };
                let action = match classify_drag(start, mouse.column) {
                    Some(Swipe::Left) => Some(Action::NextSlide),
                    Some(Swipe::Right) => Some(Action::PrevSlide),
                    None => self.dot_at(mouse.column, mouse.row).map(Action::GoToSlide),
                };
                Ok(action)
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_carousel, which takes the state
        Ok(())
    }
}

/// Draw the carousel section: current slide, dots, progress gauge.
pub fn draw_carousel(
    frame: &mut Frame,
    area: Rect,
    carousel: &mut CarouselComponent,
    state: &CarouselState,
    featured: &[NewsItem],
    now: Instant,
) {
    carousel.area = area;
    carousel.dot_count = state.total();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Destacadas ({}/{}) ", state.current() + 1, state.total()))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    if let Some(item) = featured.get(state.current()) {
        let slide = Paragraph::new(slide_lines(item, chunks[0].width));
        frame.render_widget(slide, chunks[0]);
    }

    render_dots(frame, chunks[1], carousel, state);
    render_progress(frame, chunks[2], state, now);
}

/// One indicator per slide, the current one filled.
fn render_dots(
    frame: &mut Frame,
    area: Rect,
    carousel: &mut CarouselComponent,
    state: &CarouselState,
) {
    let strip_width = (state.total() * 2).saturating_sub(1) as u16;
    let x = area.x + area.width.saturating_sub(strip_width) / 2;
    let strip = Rect::new(x, area.y, strip_width.min(area.width), 1);
    carousel.dots_area = strip;

    let spans: Vec<Span> = (0..state.total())
        .map(|i| {
            let symbol = if i + 1 < state.total() { "● " } else { "●" };
            let style = if i == state.current() {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(
                if i == state.current() {
                    symbol.to_string()
                } else {
                    symbol.replace('●', "○")
                },
                style,
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), strip);
}

/// Time remaining until the next auto-advance, as a filling bar.
fn render_progress(frame: &mut Frame, area: Rect, state: &CarouselState, now: Instant) {
    if !state.autoplay_armed() {
        return;
    }

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Yellow).bg(Color::DarkGray))
        .ratio(state.progress(now))
        .label("");
    frame.render_widget(gauge, area);
}
