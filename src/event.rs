use crossterm::event::KeyEvent;

use crate::model::section::TopicId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

#[derive(Clone, Debug)]
pub enum AppMsg {
    Tick,
    Key(KeyEvent),
    Wheel(WheelDirection),
    PointerMoved(u16, u16),
    Quit,

    // Topic selection
    OpenTopic(TopicId),
    PopupDismissed,

    // General
    LogMessage(String),
    ErrorOccurred(String),
}
