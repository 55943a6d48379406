//! This module acts as a central router for all component and modal
//! interactions. `handler.rs` delegates here by custom-id family, keeping the
//! main event handler clean.

pub mod composer_handler;
pub mod ids;
pub mod modal_handler;
pub mod util;
