//! Confirmation screen shown after a successful signup

use iced::{
    alignment::Horizontal,
    widget::{button, column, container, text},
    Alignment, Element, Length,
};

use crate::ui::theme::{
    button_styles, container_styles, utils,
    utils::typography::{self, SEMIBOLD},
    HEADING_TEXT, LABEL_TEXT, SUCCESS_GREEN,
};

#[derive(Debug, Clone)]
pub enum UserCreatedMessage {
    CreateAnother,
}

pub fn view<'a>() -> Element<'a, UserCreatedMessage> {
    let content = column![
        text("✔").size(48).color(SUCCESS_GREEN),
        text("User Created")
            .size(typography::HEADING_SIZE)
            .color(HEADING_TEXT),
        text("The account was created successfully.")
            .size(typography::INPUT_SIZE)
            .color(LABEL_TEXT)
            .align_x(Horizontal::Center),
        button(text("Create Another User").font(SEMIBOLD))
            .on_press(UserCreatedMessage::CreateAnother)
            .padding(utils::button_padding())
            .style(button_styles::secondary()),
    ]
    .spacing(utils::form_spacing())
    .align_x(Alignment::Center);

    container(
        container(content)
            .padding(utils::card_padding())
            .max_width(utils::card_max_width())
            .style(container_styles::card()),
    )
    .center(Length::Fill)
    .into()
}
