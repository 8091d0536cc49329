//! Action enum - All possible application actions
//!
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Transition from splash to the browse screen
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Grid Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next card
    NextItem,
    /// Move to the previous card
    PrevItem,
    /// Jump to the first card
    FirstItem,
    /// Jump to the last card
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Category Filter
    // ─────────────────────────────────────────────────────────────────────────
    /// Cycle to the next category
    NextFilter,
    /// Cycle to the previous category
    PrevFilter,
    /// Select a category by label
    SetFilter(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Carousel
    // ─────────────────────────────────────────────────────────────────────────
    /// Advance the carousel one slide
    NextSlide,
    /// Move the carousel back one slide
    PrevSlide,
    /// Jump to a slide by indicator index
    GoToSlide(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Open the keyboard shortcuts overlay
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::NextFilter => write!(f, "NextFilter"),
            Action::PrevFilter => write!(f, "PrevFilter"),
            Action::SetFilter(tipo) => write!(f, "SetFilter({})", tipo),
            Action::NextSlide => write!(f, "NextSlide"),
            Action::PrevSlide => write!(f, "PrevSlide"),
            Action::GoToSlide(index) => write!(f, "GoToSlide({})", index),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
