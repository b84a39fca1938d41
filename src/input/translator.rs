use std::collections::VecDeque;

use crate::controllers::interactive::ports::CommandSource;
use crate::core::view::command::ViewCommand;

/// Keys the explorer responds to, independent of any windowing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    E,
    Q,
    R,
    F,
    C,
    Space,
    Backspace,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was closed.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

#[must_use]
pub const fn translate_key(key: Key) -> ViewCommand {
    match key {
        Key::W => ViewCommand::PanUp,
        Key::S => ViewCommand::PanDown,
        Key::A => ViewCommand::PanLeft,
        Key::D => ViewCommand::PanRight,
        Key::E => ViewCommand::ZoomIn,
        Key::Q => ViewCommand::ZoomOut,
        Key::R => ViewCommand::IncreaseDetail,
        Key::F => ViewCommand::DecreaseDetail,
        Key::Space => ViewCommand::ToggleResolution,
        Key::C => ViewCommand::CycleColouring,
        Key::Backspace => ViewCommand::ResetView,
        Key::Escape => ViewCommand::Quit,
    }
}

/// Queues one command per key-down until the frame loop drains them.
///
/// Held keys are not tracked: OS auto-repeat arrives as further key-downs.
#[derive(Debug, Default)]
pub struct InputTranslator {
    pending: VecDeque<ViewCommand>,
}

impl InputTranslator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.pending.push_back(ViewCommand::Quit),
            InputEvent::KeyDown(key) => self.pending.push_back(translate_key(key)),
            InputEvent::KeyUp(_) => {}
        }
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl CommandSource for InputTranslator {
    fn drain_commands(&mut self) -> Vec<ViewCommand> {
        self.pending.drain(..).collect()
    }
}
