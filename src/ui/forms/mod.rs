//! Form rendering module
//!
//! UI components for rendering the two forms:
//! - `field_renderer`: field, error line, and multi-select rendering
//! - `invite_form`: Slack invite / newsletter signup
//! - `project_form`: project create/edit

mod field_renderer;
mod invite_form;
mod project_form;

pub use invite_form::draw_invite_form;
pub use project_form::draw_project_form;
