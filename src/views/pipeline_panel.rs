use iced::widget::text::Wrapping;
use iced::widget::{button, column, text, Column};
use iced::Length;

use crate::message::Message;
use crate::model::{Controller, SelectionKind};

pub fn pipeline_panel(controller: &Controller) -> Column<'static, Message> {
    let actions = [
        (
            "Import Tomograms to segment",
            Some(Message::Pick(SelectionKind::Tomograms)),
        ),
        (
            "Import Model PATH",
            Some(Message::Pick(SelectionKind::Models)),
        ),
        (
            "Segment with MemBrain",
            controller.can_run().then_some(Message::RunSegmentation),
        ),
    ];

    let buttons = actions
        .into_iter()
        .fold(column![], |column, (label, message)| {
            column.push(
                button(text(label).size(15))
                    .padding([5, 10])
                    .width(Length::Fill)
                    .on_press_maybe(message),
            )
        })
        .spacing(10);

    let labels = [SelectionKind::Tomograms, SelectionKind::Models]
        .into_iter()
        .fold(column![], |column, kind| {
            column.push(text(controller.label(kind)).wrapping(Wrapping::Word))
        })
        .spacing(6);

    column![buttons, labels].spacing(20)
}
