//! Card construction for news items
//!
//! Cards and carousel slides are built from the same pieces: a category
//! chip, an optional featured badge, the date label, title, and excerpt.

use crate::model::dates::build_date_label;
use crate::model::item::NewsItem;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Chip colors for a category as (background, foreground).
/// Unrecognized categories fall back to the default scheme.
pub fn category_color(tipo: &str) -> (Color, Color) {
    match tipo {
        "Noticia" => (Color::Cyan, Color::Black),
        "Clase" => (Color::Rgb(0, 200, 150), Color::Black),
        "Concurso" => (Color::Rgb(255, 215, 0), Color::Black),
        "Evento" => (Color::Magenta, Color::White),
        _ => (Color::Blue, Color::Black),
    }
}

/// Category chip plus the featured badge when the item carries one.
fn meta_spans(item: &NewsItem) -> Vec<Span<'static>> {
    let (bg, fg) = category_color(&item.tipo);
    let mut spans = vec![
        Span::raw(format!("{} ", item.image())),
        Span::styled(
            format!(" {} ", item.tipo),
            Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
        ),
    ];
    if item.destacada {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            "★ Destacada",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans
}

/// Build the display lines for one grid card.
pub fn card_lines(item: &NewsItem, width: u16) -> Vec<Line<'static>> {
    vec![
        Line::from(meta_spans(item)),
        Line::from(Span::styled(
            build_date_label(item),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            truncate_to_width(&item.titulo, width),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&item.extracto, width),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ]
}

/// Build the display lines for one carousel slide.
pub fn slide_lines(item: &NewsItem, width: u16) -> Vec<Line<'static>> {
    vec![
        Line::from(meta_spans(item)),
        Line::from(Span::styled(
            build_date_label(item),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            truncate_to_width(&item.titulo, width),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&item.extracto, width),
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate_to_width(text: &str, width: u16) -> String {
    let max = width as usize;
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
