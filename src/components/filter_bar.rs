//! Category filter bar
//!
//! Categories are free-form labels discovered from the data at load time;
//! the bar is rebuilt from scratch on every draw.

use crate::model::item::NewsItem;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};
use std::collections::HashSet;

/// Label of the unfiltered view
pub const CATEGORY_ALL: &str = "Todos";

/// Derive the filter categories: "Todos" plus the distinct item
/// categories in first-seen order.
pub fn filter_categories(items: &[NewsItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = vec![CATEGORY_ALL.to_string()];
    for item in items {
        if seen.insert(item.tipo.as_str()) {
            categories.push(item.tipo.clone());
        }
    }
    categories
}

/// Render the bar with the active category highlighted.
pub fn render_filter_bar(frame: &mut Frame, area: Rect, categories: &[String], active: &str) {
    let titles: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
    let selected = categories.iter().position(|c| c == active).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Categorías ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tipo: &str) -> NewsItem {
        NewsItem {
            id: 0,
            titulo: String::new(),
            extracto: String::new(),
            imagen: None,
            tipo: tipo.to_string(),
            destacada: false,
            fecha_inicio: "2024-01-01".to_string(),
            fecha_fin: None,
        }
    }

    #[test]
    fn test_categories_first_seen_order() {
        let items = vec![
            item("Clase"),
            item("Noticia"),
            item("Clase"),
            item("Evento"),
            item("Noticia"),
        ];

        let categories = filter_categories(&items);
        assert_eq!(categories, vec!["Todos", "Clase", "Noticia", "Evento"]);
    }

    #[test]
    fn test_empty_items_yield_only_all() {
        assert_eq!(filter_categories(&[]), vec!["Todos"]);
    }
}
