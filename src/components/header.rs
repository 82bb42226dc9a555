use iced::border::{Border, Radius};
use iced::font::Weight;
use iced::widget::text::Wrapping;
use iced::widget::{container, text, Container};
use iced::{Alignment, Background, Color, Font, Length, Shadow, Theme};

use crate::message::Message;

// chartreuse2
const BANNER_GREEN: Color = Color::from_rgb(0.463, 0.933, 0.0);

/// Full-width title strip across the top of the window.
pub fn title_banner(title: &'static str) -> Container<'static, Message> {
    let label = text(title)
        .size(20)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        })
        .wrapping(Wrapping::Word);

    container(label)
        .padding([10, 10])
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .style(banner_style)
}

/// A lone notebook-style tab sitting on top of [`tab_body_style`].
pub fn tab_header(title: &'static str) -> Container<'static, Message> {
    let label = text(title).size(14).wrapping(Wrapping::None);

    container(
        container(label)
            .padding([6, 16])
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .style(tab_style),
    )
    .width(Length::Fill)
}

fn banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(BANNER_GREEN)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius::new(6.0),
        },
        shadow: Shadow::default(),
    }
}

fn tab_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        text_color: Some(palette.primary.strong.text),
        background: Some(Background::Color(palette.primary.strong.color)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: Radius {
                top_left: 10.0,
                top_right: 10.0,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
        },
        ..Default::default()
    }
}

pub fn tab_body_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color.scale_alpha(0.4))),
        border: Border {
            color: palette.primary.strong.color,
            width: 1.0,
            radius: Radius {
                top_left: 0.0,
                top_right: 10.0,
                bottom_right: 10.0,
                bottom_left: 10.0,
            },
        },
        ..Default::default()
    }
}
