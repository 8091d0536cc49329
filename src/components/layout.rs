//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    /// Absent when there are no featured items (section stays hidden)
    pub carousel: Option<Rect>,
    pub filters: Rect,
    pub grid: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, show_carousel: bool) -> MainLayout {
    let chunks = if show_carousel {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(11),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area)
    };

    if show_carousel {
        MainLayout {
            carousel: Some(chunks[0]),
            filters: chunks[1],
            grid: chunks[2],
            status: chunks[3],
            help: chunks[4],
        }
    } else {
        MainLayout {
            carousel: None,
            filters: chunks[0],
            grid: chunks[1],
            status: chunks[2],
            help: chunks[3],
        }
    }
}
