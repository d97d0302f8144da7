//! Server-rendered form.
//!
//! - `view`: page state and the result of an action
//! - `actions`: the Play and View Generation Info actions
//! - `render`: HTML output

pub mod actions;
pub mod render;
pub mod view;

pub use actions::{play, view_generation_info};
pub use render::{escape_html, render_page};
pub use view::{Outcome, PageView, VALIDATION_WARNING};
