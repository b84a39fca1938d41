//! One-shot render of a configured view to a file.

mod controller;

pub use controller::{HeadlessController, HeadlessError};
