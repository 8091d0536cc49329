//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod card;
pub mod carousel;
pub mod filter_bar;
pub mod grid;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;
pub mod splash;

pub use carousel::{draw_carousel, CarouselComponent};
pub use filter_bar::{filter_categories, render_filter_bar, CATEGORY_ALL};
pub use grid::{render_grid, GridComponent};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
