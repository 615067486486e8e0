//! UI Components
//!
//! One Leptos component per dashboard widget.

mod install;
mod links;
mod notes;
mod todos;

pub use install::InstallButton;
pub use links::LinkWidget;
pub use notes::NotesWidget;
pub use todos::TodoWidget;
