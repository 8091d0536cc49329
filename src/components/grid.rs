//! Blog grid component - the main card list
//!
//! Owns the active category filter and list navigation. Filtering and
//! ordering are plain functions over the immutable item collection.

use crate::action::Action;
use crate::component::Component;
use crate::components::card::card_lines;
use crate::components::filter_bar::CATEGORY_ALL;
use crate::model::item::NewsItem;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Items visible under a filter: everything for "Todos", otherwise an
/// exact category match. Featured items sort first; the sort is stable,
/// so each group keeps its original relative order.
pub fn filter_items<'a>(items: &'a [NewsItem], filter: &str) -> Vec<&'a NewsItem> {
    let mut visible: Vec<&NewsItem> = items
        .iter()
        .filter(|item| filter == CATEGORY_ALL || item.tipo == filter)
        .collect();
    visible.sort_by_key(|item| !item.destacada);
    visible
}

/// Grid component for the card list
pub struct GridComponent {
    /// Currently active category filter
    pub active_filter: String,

    /// List selection state
    pub list_state: ListState,
}

impl Default for GridComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GridComponent {
    pub fn new() -> Self {
        Self {
            active_filter: CATEGORY_ALL.to_string(),
            list_state: ListState::default(),
        }
    }

    pub fn visible<'a>(&self, items: &'a [NewsItem]) -> Vec<&'a NewsItem> {
        filter_items(items, &self.active_filter)
    }

    /// Switch the active filter and reset the selection.
    pub fn set_filter(&mut self, filter: String, items: &[NewsItem]) {
        self.active_filter = filter;
        self.select_first(items);
    }

    pub fn next(&mut self, items: &[NewsItem]) {
        let count = self.visible(items).len();
        if count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % count));
    }

    pub fn previous(&mut self, items: &[NewsItem]) {
        let count = self.visible(items).len();
        if count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { count - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, items: &[NewsItem]) {
        if self.visible(items).is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self, items: &[NewsItem]) {
        let count = self.visible(items).len();
        if count > 0 {
            self.list_state.select(Some(count - 1));
        }
    }
}

impl Component for GridComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Grid navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Category filter
            KeyCode::Tab => Some(Action::NextFilter),
            KeyCode::BackTab => Some(Action::PrevFilter),

            // Carousel
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextSlide),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevSlide),
            KeyCode::Char(c @ '1'..='9') => {
                Some(Action::GoToSlide(c as usize - '1' as usize))
            }

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through render_grid, which takes the item collection
        Ok(())
    }
}

/// Draw the card list, or the empty-state message when the filter
/// matches nothing.
pub fn render_grid(frame: &mut Frame, area: Rect, grid: &mut GridComponent, items: &[NewsItem]) {
    let visible = grid.visible(items);

    let mut title = format!(" Noticias ({}) ", visible.len());
    if grid.active_filter != CATEGORY_ALL {
        title = format!(" Noticias ({}) [{}] ", visible.len(), grid.active_filter);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    if visible.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No hay noticias en esta categoría.",
            Style::default().fg(Color::Yellow),
        )))
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let card_width = area.width.saturating_sub(4);
    let rows: Vec<ListItem> = visible
        .iter()
        .map(|item| ListItem::new(card_lines(item, card_width)))
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut grid.list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, tipo: &str, destacada: bool) -> NewsItem {
        NewsItem {
            id,
            titulo: format!("noticia {}", id),
            extracto: String::new(),
            imagen: None,
            tipo: tipo.to_string(),
            destacada,
            fecha_inicio: "2024-01-01".to_string(),
            fecha_fin: None,
        }
    }

    fn sample() -> Vec<NewsItem> {
        vec![
            item(1, "Noticia", false),
            item(2, "Clase", true),
            item(3, "Noticia", true),
            item(4, "Evento", false),
            item(5, "Clase", false),
        ]
    }

    #[test]
    fn test_all_filter_includes_every_item_once() {
        let items = sample();
        let visible = filter_items(&items, CATEGORY_ALL);

        assert_eq!(visible.len(), items.len());
        let mut ids: Vec<i64> = visible.iter().map(|n| n.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_filter_matches_only_that_category() {
        let items = sample();
        let visible = filter_items(&items, "Clase");

        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|n| n.tipo == "Clase"));
    }

    #[test]
    fn test_featured_precede_non_featured_stably() {
        let items = sample();
        let visible = filter_items(&items, CATEGORY_ALL);

        let ids: Vec<i64> = visible.iter().map(|n| n.id).collect();
        // Featured (2, 3) first in original order, the rest follow in order.
        assert_eq!(ids, vec![2, 3, 1, 4, 5]);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let items = sample();
        assert!(filter_items(&items, "Torneo").is_empty());
    }

    #[test]
    fn test_navigation_wraps() {
        let items = sample();
        let mut grid = GridComponent::new();
        grid.select_first(&items);
        assert_eq!(grid.list_state.selected(), Some(0));

        grid.select_last(&items);
        assert_eq!(grid.list_state.selected(), Some(4));

        grid.next(&items);
        assert_eq!(grid.list_state.selected(), Some(0));

        grid.previous(&items);
        assert_eq!(grid.list_state.selected(), Some(4));
    }

    #[test]
    fn test_set_filter_resets_selection() {
        let items = sample();
        let mut grid = GridComponent::new();
        grid.select_last(&items);

        grid.set_filter("Evento".to_string(), &items);
        assert_eq!(grid.list_state.selected(), Some(0));

        grid.set_filter("Torneo".to_string(), &items);
        assert_eq!(grid.list_state.selected(), None);
    }
}
