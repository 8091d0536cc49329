//! Help dialog component
//!
//! Displays the keyboard and mouse bindings.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Help dialog showing all bindings
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Atajos de teclado ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        Ok(())
    }
}

/// Build the help content
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Noticias");
    add_shortcut(&mut lines, "j / ↓", "Siguiente noticia");
    add_shortcut(&mut lines, "k / ↑", "Noticia anterior");
    add_shortcut(&mut lines, "g", "Primera noticia");
    add_shortcut(&mut lines, "G", "Última noticia");

    add_section(&mut lines, "Categorías");
    add_shortcut(&mut lines, "Tab", "Siguiente categoría");
    add_shortcut(&mut lines, "Shift+Tab", "Categoría anterior");

    add_section(&mut lines, "Carrusel");
    add_shortcut(&mut lines, "l / →", "Siguiente destacada");
    add_shortcut(&mut lines, "h / ←", "Destacada anterior");
    add_shortcut(&mut lines, "1-9", "Ir a la destacada n");
    add_shortcut(&mut lines, "ratón", "Arrastre horizontal para pasar");

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "?", "Mostrar esta ayuda");
    add_shortcut(&mut lines, "q", "Salir");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Pulsa q, Esc o ? para cerrar",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}
