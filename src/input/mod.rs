//! Input adapters for the explorer.
//!
//! Platform events are reduced to logical [`translator::Key`]s, then turned
//! into view commands by the [`translator::InputTranslator`].

pub mod translator;

#[cfg(feature = "gui")]
pub mod gui;
