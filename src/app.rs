//! Root application component
//!
//! The App struct implements the Component trait, acting as the root that
//! delegates event handling and rendering to child components. Business
//! logic lives in the model and components; App only coordinates.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_carousel, filter_categories, render_filter_bar, render_grid,
    CarouselComponent, GridComponent, HelpDialog, QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::carousel::CarouselState;
use crate::model::item::NewsItem;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::AppMode;
use crate::services;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Loaded item collection. `None` when the load failed; everything
    /// that depends on it stays hidden in that case.
    pub items: Option<Vec<NewsItem>>,

    /// Filter categories derived from the full item set at load
    pub categories: Vec<String>,

    /// Featured subset, in document order, backing the carousel
    pub featured: Vec<NewsItem>,

    /// Carousel rotation state; absent when there are no featured items
    pub carousel_state: Option<CarouselState>,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display in the status line
    pub error: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub grid: GridComponent,
    pub carousel: CarouselComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create the App and perform the one-shot data load.
    pub fn new() -> App {
        let config = Config::load();

        let mut app = App {
            mode: AppMode::Splash,
            items: None,
            categories: Vec::new(),
            featured: Vec::new(),
            carousel_state: None,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            splash: SplashComponent::new(),
            grid: GridComponent::new(),
            carousel: CarouselComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        };

        match services::load_blog(&config.data_path) {
            Ok(items) => {
                info!(count = items.len(), path = %config.data_path, "blog data loaded");

                app.categories = filter_categories(&items);
                app.featured = items.iter().filter(|i| i.destacada).cloned().collect();
                app.carousel_state = CarouselState::new(
                    app.featured.len(),
                    Duration::from_secs(config.autoplay_secs),
                    Instant::now(),
                );
                app.grid.select_first(&items);
                app.items = Some(items);
            }
            Err(e) => {
                // Not retried; the dependent sections stay blank.
                error!(error = %e, path = %config.data_path, "failed to load blog data");
                app.error = Some(e);
            }
        }

        app
    }

    /// Category adjacent to the active filter, wrapping at both ends.
    fn adjacent_category(&self, forward: bool) -> Option<String> {
        if self.items.is_none() || self.categories.is_empty() {
            return None;
        }

        let current = self
            .categories
            .iter()
            .position(|c| *c == self.grid.active_filter)
            .unwrap_or(0);
        let len = self.categories.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };

        Some(self.categories[next].clone())
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Browse => match self.modals.top() {
                Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
                Some(Modal::Help) => self.help_dialog.handle_key_event(key),
                None => self.grid.handle_key_event(key),
            },
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Mouse input only drives the carousel, and only on the main screen.
        if self.mode == AppMode::Browse && self.modals.is_empty() && self.carousel_state.is_some()
        {
            return self.carousel.handle_mouse_event(mouse);
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash && self.splash.is_complete() {
                    return Ok(Some(Action::SplashComplete));
                }
                if let Some(ref mut state) = self.carousel_state {
                    state.tick(Instant::now());
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Browse;
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Grid Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => {
                if let Some(ref items) = self.items {
                    self.grid.next(items);
                }
            }
            Action::PrevItem => {
                if let Some(ref items) = self.items {
                    self.grid.previous(items);
                }
            }
            Action::FirstItem => {
                if let Some(ref items) = self.items {
                    self.grid.select_first(items);
                }
            }
            Action::LastItem => {
                if let Some(ref items) = self.items {
                    self.grid.select_last(items);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Category Filter
            // ─────────────────────────────────────────────────────────────────
            // Cycling resolves to a SetFilter carrying the chosen label,
            // processed as a follow-up action.
            Action::NextFilter => return Ok(self.adjacent_category(true).map(Action::SetFilter)),
            Action::PrevFilter => return Ok(self.adjacent_category(false).map(Action::SetFilter)),
            Action::SetFilter(tipo) => {
                if let Some(ref items) = self.items {
                    self.grid.set_filter(tipo, items);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Carousel
            // ─────────────────────────────────────────────────────────────────
            Action::NextSlide => {
                if let Some(ref mut state) = self.carousel_state {
                    state.next(Instant::now());
                }
            }
            Action::PrevSlide => {
                if let Some(ref mut state) = self.carousel_state {
                    state.prev(Instant::now());
                }
            }
            Action::GoToSlide(index) => {
                if let Some(ref mut state) = self.carousel_state {
                    if index < state.total() {
                        state.go_to(index as isize, Instant::now());
                    }
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Browse => {
                let now = Instant::now();
                let layout = calculate_main_layout(area, self.carousel_state.is_some());

                if let Some(ref items) = self.items {
                    if let (Some(state), Some(carousel_area)) =
                        (&self.carousel_state, layout.carousel)
                    {
                        draw_carousel(
                            frame,
                            carousel_area,
                            &mut self.carousel,
                            state,
                            &self.featured,
                            now,
                        );
                    }

                    render_filter_bar(
                        frame,
                        layout.filters,
                        &self.categories,
                        &self.grid.active_filter,
                    );
                    render_grid(frame, layout.grid, &mut self.grid, items);
                }

                render_status_bar(frame, layout.status, self);
                render_help_bar(frame, layout.help);

                if let Some(modal) = self.modals.top().copied() {
                    match modal {
                        Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                        Modal::Help => self.help_dialog.draw(frame, area)?,
                    }
                }
            }
        }
        Ok(())
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let spans = if let Some(ref error) = app.error {
        vec![Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        )]
    } else if let Some(ref items) = app.items {
        vec![
            Span::styled(
                " noticias-tui ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} noticias · {} destacadas", items.len(), app.featured.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]
    } else {
        Vec::new()
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let help_spans = vec![
        Span::styled(
            " q ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Salir "),
        Span::styled(
            " j/k ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Noticias "),
        Span::styled(
            " Tab ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Categoría "),
        Span::styled(
            " ←/→ ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Carrusel "),
        Span::styled(
            " 1-9 ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Destacada "),
        Span::styled(
            " ? ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Ayuda"),
    ];

    let paragraph =
        Paragraph::new(Line::from(help_spans)).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CATEGORY_ALL;

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

    fn app_with_items(items: Vec<NewsItem>) -> App {
        let mut app = App {
            mode: AppMode::Browse,
            items: None,
            categories: Vec::new(),
            featured: Vec::new(),
            carousel_state: None,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            splash: SplashComponent::new(),
            grid: GridComponent::new(),
            carousel: CarouselComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        };

        app.categories = filter_categories(&items);
        app.featured = items.iter().filter(|i| i.destacada).cloned().collect();
        app.carousel_state = CarouselState::new(
            app.featured.len(),
            crate::model::carousel::AUTOPLAY_INTERVAL,
            Instant::now(),
        );
        app.grid.select_first(&items);
        app.items = Some(items);
        app
    }

    /// Process an action and its follow-ups, like the main loop does.
    fn drive(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    #[test]
    fn test_filter_cycle_wraps_both_ways() {
        let mut app = app_with_items(vec![
            item(1, "Noticia", false),
            item(2, "Clase", false),
        ]);
        assert_eq!(app.grid.active_filter, CATEGORY_ALL);

        drive(&mut app, Action::NextFilter);
        assert_eq!(app.grid.active_filter, "Noticia");
        drive(&mut app, Action::NextFilter);
        assert_eq!(app.grid.active_filter, "Clase");
        drive(&mut app, Action::NextFilter);
        assert_eq!(app.grid.active_filter, CATEGORY_ALL);

        drive(&mut app, Action::PrevFilter);
        assert_eq!(app.grid.active_filter, "Clase");
    }

    #[test]
    fn test_cycle_resolves_to_set_filter_with_label() {
        let mut app = app_with_items(vec![item(1, "Evento", false)]);

        let follow = app.update(Action::NextFilter).unwrap();
        assert_eq!(follow, Some(Action::SetFilter("Evento".to_string())));
    }

    #[test]
    fn test_zero_featured_items_create_no_carousel() {
        let app = app_with_items(vec![item(1, "Noticia", false)]);
        assert!(app.carousel_state.is_none());
    }

    #[test]
    fn test_slide_actions_ignored_without_carousel() {
        let mut app = app_with_items(vec![item(1, "Noticia", false)]);
        app.update(Action::NextSlide).unwrap();
        app.update(Action::GoToSlide(2)).unwrap();
        assert!(app.carousel_state.is_none());
    }

    #[test]
    fn test_go_to_slide_out_of_range_is_ignored() {
        let mut app = app_with_items(vec![
            item(1, "Noticia", true),
            item(2, "Clase", true),
        ]);

        app.update(Action::GoToSlide(5)).unwrap();
        assert_eq!(app.carousel_state.as_ref().unwrap().current(), 0);

        app.update(Action::GoToSlide(1)).unwrap();
        assert_eq!(app.carousel_state.as_ref().unwrap().current(), 1);
    }

    #[test]
    fn test_quit_flow_via_modal() {
        let mut app = app_with_items(vec![item(1, "Noticia", false)]);

        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        assert!(!app.should_quit);

        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }
}
