// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface behind the toolbar and the thumbnail column.
///
/// The color is derived from the active Iced `Theme` background so panels
/// stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Status bar at the bottom of the window.
pub fn status_bar(theme: &Theme) -> container::Style {
    let text = theme.palette().text;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        text_color: Some(text),
        ..Default::default()
    }
}
