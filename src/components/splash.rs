//! Splash screen component
//!
//! Shows the club banner briefly before the browse screen. Any key skips it.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1500),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn logo() -> Vec<&'static str> {
        vec![
            "███╗   ██╗ ██████╗ ████████╗██╗ ██████╗██╗ █████╗ ███████╗",
            "████╗  ██║██╔═══██╗╚══██╔══╝██║██╔════╝██║██╔══██╗██╔════╝",
            "██╔██╗ ██║██║   ██║   ██║   ██║██║     ██║███████║███████╗",
            "██║╚██╗██║██║   ██║   ██║   ██║██║     ██║██╔══██║╚════██║",
            "██║ ╚████║╚██████╔╝   ██║   ██║╚██████╗██║██║  ██║███████║",
            "╚═╝  ╚═══╝ ╚═════╝    ╚═╝   ╚═╝ ╚═════╝╚═╝╚═╝  ╚═╝╚══════╝",
        ]
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let logo_lines = Self::logo();
        let logo_height = logo_lines.len() as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length((area.height.saturating_sub(logo_height + 4)) / 2),
                Constraint::Length(logo_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo: Vec<Line> = logo_lines
            .iter()
            .map(|line| Line::from(Span::styled(*line, Style::default().fg(Color::Yellow))))
            .collect();

        frame.render_widget(
            Paragraph::new(logo).alignment(ratatui::layout::Alignment::Center),
            chunks[1],
        );

        let title = Line::from(vec![
            Span::styled(
                "noticias",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "-tui",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(title).alignment(ratatui::layout::Alignment::Center),
            chunks[3],
        );

        let subtitle = Line::from(Span::styled(
            "Las noticias del club en tu terminal",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(
            Paragraph::new(subtitle).alignment(ratatui::layout::Alignment::Center),
            chunks[4],
        );

        Ok(())
    }
}
