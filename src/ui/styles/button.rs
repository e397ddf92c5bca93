// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn bordered(background: Color, text_color: Color, border_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style pour bouton désactivé (grayed out, non-interactif).
fn disabled(theme: &Theme) -> button::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };
    bordered(background, palette::GRAY_400, palette::GRAY_400)
}

/// Style for the active tool and brush width in a toggle group.
/// Uses the brand colors in both light and dark themes.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            shadow: shadow::SM,
            ..bordered(palette::PRIMARY_500, WHITE, palette::PRIMARY_600)
        },
        button::Status::Hovered => button::Style {
            shadow: shadow::MD,
            ..bordered(palette::PRIMARY_400, WHITE, palette::PRIMARY_500)
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Style for plain toolbar actions and inactive toggles.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            bordered(bg_color, text_color, palette::GRAY_400)
        }
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                shadow: shadow::SM,
                ..bordered(hover_bg, text_color, palette::PRIMARY_500)
            }
        }
        button::Status::Disabled => disabled(theme),
    }
}

/// Borderless style for thumbnail entries; the selection is highlighted
/// with the brand color.
pub fn list_entry(is_selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = theme.palette().text;
        let border_color = match (is_selected, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::GRAY_400,
            (false, _) => Color::TRANSPARENT,
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
