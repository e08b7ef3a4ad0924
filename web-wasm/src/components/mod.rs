//! UI components

pub mod action_buttons;
pub mod feedback_panel;
pub mod header;
pub mod pair_editor;
pub mod result_panel;
pub mod source_panel;
