//! UI panel rendering for the Lightswitch GUI.

pub mod header;
pub mod panel_manager;
