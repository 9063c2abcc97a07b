//! UI model
//!
//! This module describes the host's control hierarchy, finds the text in it
//! that may be translated, and keeps the registry of forms the plugin can build.

pub mod control;
pub mod forms;
pub mod walker;

// Re-export commonly used UI components
pub use control::{Control, ControlKind, MenuItem, MenuStrip, Node, ToolStripItem};
pub use forms::{FormFactory, FormRegistry, load_layout_file};
pub use walker::{for_each_translatable_mut, menu_items, translatable_controls, Translatable};
