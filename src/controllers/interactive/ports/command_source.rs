use crate::core::view::command::ViewCommand;

pub trait CommandSource {
    /// Every command queued since the last call, oldest first.
    fn drain_commands(&mut self) -> Vec<ViewCommand>;
}
