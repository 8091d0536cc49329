//! Model layer - centralized state management
//!
//! - `item` - The news item data model loaded from blog.json
//! - `dates` - Date-range display labels
//! - `carousel` - Rotation state for the featured-items carousel
//! - `modal` - Modal overlay management
//! - `ui` - Presentation state

pub mod carousel;
pub mod dates;
pub mod item;
pub mod modal;
pub mod ui;

pub use carousel::CarouselState;
pub use item::NewsItem;
pub use modal::{Modal, ModalStack};
pub use ui::AppMode;
