//! Theme and styling for the Create User app
//!
//! Brand colors and the style functions used by the form. All style
//! functions follow the Iced 0.13 closure form `Fn(&Theme, Status) -> Style`,
//! so focus and hover are read from the widget status instead of being
//! tracked by hand.

use iced::{
    widget::{button, container, text_input},
    Background, Border, Color, Shadow, Theme, Vector,
};

/// Primary accent (#6a4de8)
pub const ACCENT_PURPLE: Color = Color::from_rgb(0.416, 0.302, 0.910);

/// Accent hover state (#5636d7)
pub const ACCENT_PURPLE_HOVER: Color = Color::from_rgb(0.337, 0.212, 0.843);

/// Accent while a request is in flight (#a39ddf)
pub const ACCENT_PURPLE_BUSY: Color = Color::from_rgb(0.639, 0.616, 0.875);

/// Focus glow around inputs
pub const FOCUS_GLOW: Color = Color::from_rgba(0.416, 0.302, 0.910, 0.4);

/// Button glow on hover
pub const HOVER_GLOW: Color = Color::from_rgba(0.416, 0.302, 0.910, 0.5);

/// Satisfied checklist row (#4caf50)
pub const SUCCESS_GREEN: Color = Color::from_rgb(0.298, 0.686, 0.314);

/// Failed checklist row and error text (#d93025)
pub const ERROR_RED: Color = Color::from_rgb(0.851, 0.188, 0.145);

/// Input border at rest (#cccccc)
pub const INPUT_BORDER: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Card background (#d3d3d3)
pub const CARD_BACKGROUND: Color = Color::from_rgb(0.827, 0.827, 0.827);

/// Heading text (#4a4a4a)
pub const HEADING_TEXT: Color = Color::from_rgb(0.290, 0.290, 0.290);

/// Label text (#333333)
pub const LABEL_TEXT: Color = Color::from_rgb(0.2, 0.2, 0.2);

/// Outer colors of the animated background (#757f9a)
pub const GRADIENT_EDGE: Color = Color::from_rgb(0.459, 0.498, 0.604);

/// Middle color of the animated background (#d7dde8)
pub const GRADIENT_CENTER: Color = Color::from_rgb(0.843, 0.867, 0.910);

pub const WHITE: Color = Color::WHITE;

/// Card shadow (black at 10%)
pub const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.1);

/// Creates the app theme
pub fn create_app_theme() -> Theme {
    Theme::custom(
        "Create User".to_string(),
        iced::theme::Palette {
            background: GRADIENT_CENTER,
            text: LABEL_TEXT,
            primary: ACCENT_PURPLE,
            success: SUCCESS_GREEN,
            danger: ERROR_RED,
        },
    )
}

/// Button styles
pub mod button_styles {
    use super::*;

    fn submit_style(background: Color, shadow: Shadow) -> button::Style {
        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: utils::button_radius().into(),
            },
            shadow,
        }
    }

    /// Submit button. Glows while the pointer is over it, including while
    /// pressed; the disabled state is the busy color.
    pub fn submit() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| match status {
            button::Status::Active => submit_style(ACCENT_PURPLE, Shadow::default()),
            button::Status::Hovered | button::Status::Pressed => submit_style(
                ACCENT_PURPLE_HOVER,
                Shadow {
                    color: HOVER_GLOW,
                    offset: Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                },
            ),
            button::Status::Disabled => submit_style(ACCENT_PURPLE_BUSY, Shadow::default()),
        }
    }

    /// Outlined button for secondary actions
    pub fn secondary() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| {
            let (background, text_color) = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    (Color { a: 0.1, ..ACCENT_PURPLE }, ACCENT_PURPLE_HOVER)
                }
                button::Status::Disabled => (Color::TRANSPARENT, INPUT_BORDER),
                button::Status::Active => (Color::TRANSPARENT, ACCENT_PURPLE),
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border {
                    color: ACCENT_PURPLE,
                    width: 1.0,
                    radius: utils::button_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }
    }
}

/// Text input styles
pub mod text_input_styles {
    use super::*;

    /// Form input: grey border at rest, accent border when focused
    pub fn form_field() -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
        |_theme, status| {
            let (border_color, border_width, background) = match status {
                text_input::Status::Focused => (ACCENT_PURPLE, 2.0, WHITE),
                text_input::Status::Active | text_input::Status::Hovered => {
                    (INPUT_BORDER, 1.8, WHITE)
                }
                text_input::Status::Disabled => (INPUT_BORDER, 1.8, Color::from_rgb(0.95, 0.95, 0.95)),
            };

            text_input::Style {
                background: Background::Color(background),
                border: Border {
                    color: border_color,
                    width: border_width,
                    radius: utils::input_radius().into(),
                },
                icon: LABEL_TEXT,
                placeholder: Color::from_rgb(0.5, 0.5, 0.5),
                value: LABEL_TEXT,
                selection: FOCUS_GLOW,
            }
        }
    }
}

/// Container styles
pub mod container_styles {
    use super::*;

    /// The grey card holding the form
    pub fn card() -> impl Fn(&Theme) -> container::Style {
        |_theme| container::Style {
            text_color: Some(LABEL_TEXT),
            background: Some(Background::Color(CARD_BACKGROUND)),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: utils::card_radius().into(),
            },
            shadow: Shadow {
                color: SHADOW_COLOR,
                offset: Vector::new(0.0, 8.0),
                blur_radius: 24.0,
            },
        }
    }

    /// Full-window backdrop painted with the given background
    pub fn backdrop(background: Background) -> impl Fn(&Theme) -> container::Style {
        move |_theme| container::Style {
            background: Some(background),
            ..container::Style::default()
        }
    }
}

/// Sizes and spacing
pub mod utils {
    use iced::Padding;

    /// Vertical gap between form rows
    pub fn form_spacing() -> u16 {
        16
    }

    pub fn card_padding() -> Padding {
        Padding::from(32)
    }

    pub fn input_padding() -> Padding {
        Padding::from([12, 16])
    }

    pub fn button_padding() -> Padding {
        Padding::from([12, 20])
    }

    pub fn card_max_width() -> f32 {
        480.0
    }

    pub fn card_radius() -> f32 {
        12.0
    }

    pub fn input_radius() -> f32 {
        6.0
    }

    pub fn button_radius() -> f32 {
        8.0
    }

    pub mod typography {
        use iced::{font::Weight, Font};

        pub const BOLD: Font = Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        };

        pub const SEMIBOLD: Font = Font {
            weight: Weight::Semibold,
            ..Font::DEFAULT
        };

        pub const HEADING_SIZE: f32 = 28.8;
        pub const INPUT_SIZE: f32 = 16.0;
        pub const LABEL_SIZE: f32 = 14.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_button_states() {
        let style = button_styles::submit();
        let theme = create_app_theme();

        let active = style(&theme, button::Status::Active);
        let hovered = style(&theme, button::Status::Hovered);
        let pressed = style(&theme, button::Status::Pressed);
        let disabled = style(&theme, button::Status::Disabled);

        assert_eq!(active.background, Some(Background::Color(ACCENT_PURPLE)));
        assert_eq!(hovered.background, Some(Background::Color(ACCENT_PURPLE_HOVER)));
        assert_eq!(disabled.background, Some(Background::Color(ACCENT_PURPLE_BUSY)));

        // Pressing keeps the pointer over the button
        assert_eq!(pressed, hovered);

        // Glow only when hovered and enabled
        assert_eq!(hovered.shadow.color, HOVER_GLOW);
        assert_eq!(disabled.shadow, Shadow::default());
        assert_eq!(active.shadow, Shadow::default());
    }

    #[test]
    fn test_input_focus_border() {
        let style = text_input_styles::form_field();
        let theme = create_app_theme();

        assert_eq!(
            style(&theme, text_input::Status::Focused).border.color,
            ACCENT_PURPLE
        );
        assert_eq!(
            style(&theme, text_input::Status::Active).border.color,
            INPUT_BORDER
        );

        // Hovering alone leaves the border at rest
        assert_eq!(
            style(&theme, text_input::Status::Hovered),
            style(&theme, text_input::Status::Active)
        );
    }
}
