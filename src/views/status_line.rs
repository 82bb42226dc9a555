use iced::widget::text::Wrapping;
use iced::widget::{button, row, text};
use iced::{Alignment, Element, Length, Theme};

use crate::message::Message;
use crate::model::RunState;

/// Text for the current run state, plus a cancel button while running.
pub fn status_line(state: &RunState) -> Option<Element<'static, Message>> {
    let status = state.status_text()?;

    let style: fn(&Theme) -> text::Style = match state {
        RunState::Finished(outcome) if outcome.is_success() => text::success,
        RunState::Finished(_) | RunState::LaunchFailed(_) => text::danger,
        RunState::Blocked(_) | RunState::Cancelled => text::secondary,
        RunState::Idle | RunState::Running => text::default,
    };

    let mut line = row![text(status)
        .size(16)
        .wrapping(Wrapping::Word)
        .width(Length::Fill)
        .style(style)]
    .spacing(12)
    .align_y(Alignment::Center);

    if state.is_running() {
        line = line.push(
            button("Cancel")
                .on_press(Message::CancelSegmentation)
                .style(button::danger),
        );
    }

    Some(line.into())
}
