//! HTML templates and styling for the citation chaining pages.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constant
//! - `components` - Escaping, base template, paper cards, messages
//! - `sidebar` - Viewing history sidebar
//! - `pages` - Landing, results and details pages

mod styles;
mod components;
mod sidebar;
mod pages;

pub use styles::STYLE;
pub use components::{base_html, html_escape, message, paper_card, truncate, MessageKind};
pub use sidebar::history_sidebar;
pub use pages::{
    page_title, render, Rendered, APP_TITLE, NOT_FOUND_MESSAGE, NO_CITATIONS_MESSAGE,
};
