// SPDX-License-Identifier: MPL-2.0
//! Toolbar module for file, tool and zoom actions.
//!
//! The toolbar is stateless: it renders from a [`ViewContext`] and the
//! application applies the [`Message`]s it emits to the session.

use crate::domain::canvas::{BrushWidth, CanvasMode};
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, Button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mode: CanvasMode,
    pub brush: BrushWidth,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    /// Whether an image is shown (enables the fit actions).
    pub has_image: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Open,
    SetMode(CanvasMode),
    SetBrush(BrushWidth),
    ZoomIn,
    ZoomOut,
    FitWindow,
    FitWidth,
    FillWindow,
}

/// i18n key of the toolbar label for a canvas mode.
#[must_use]
pub fn mode_label_key(mode: CanvasMode) -> &'static str {
    match mode {
        CanvasMode::Pointer => "toolbar-pointer",
        CanvasMode::Draw => "toolbar-pencil",
        CanvasMode::Erase => "toolbar-eraser",
        CanvasMode::Fill => "toolbar-area-fill",
    }
}

/// Render the toolbar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let open = action(ctx.i18n.tr("toolbar-open"), Some(Message::Open));

    let modes = CanvasMode::ALL.into_iter().map(|mode| {
        toggle(
            ctx.i18n.tr(mode_label_key(mode)),
            mode == ctx.mode,
            Message::SetMode(mode),
        )
    });

    let brushes = BrushWidth::ALL.into_iter().map(|brush| {
        toggle(
            ctx.i18n
                .tr_with_args("toolbar-brush", &[("width", &brush.pixels().to_string())]),
            brush == ctx.brush,
            Message::SetBrush(brush),
        )
    });

    let zoom_in = action(
        ctx.i18n.tr("toolbar-zoom-in"),
        ctx.can_zoom_in.then_some(Message::ZoomIn),
    );
    let zoom_out = action(
        ctx.i18n.tr("toolbar-zoom-out"),
        ctx.can_zoom_out.then_some(Message::ZoomOut),
    );
    let fits = [
        ("toolbar-normal-size", Message::FitWindow),
        ("toolbar-fit-width", Message::FitWidth),
        ("toolbar-fill-window", Message::FillWindow),
    ]
    .into_iter()
    .map(|(key, message)| action(ctx.i18n.tr(key), ctx.has_image.then_some(message)));

    let row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(open)
        .push(separator())
        .extend(modes.map(Element::from))
        .push(separator())
        .extend(brushes.map(Element::from))
        .push(separator())
        .push(zoom_in)
        .push(zoom_out)
        .extend(fits.map(Element::from));

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::panel)
        .into()
}

/// Plain button; disabled when `message` is `None`.
fn action<'a>(label: String, message: Option<Message>) -> Button<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .on_press_maybe(message)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::unselected)
}

fn toggle<'a>(label: String, active: bool, message: Message) -> Button<'a, Message> {
    let style = if active {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    button(Text::new(label).size(typography::BODY_SM))
        .on_press(message)
        .padding([spacing::XXS, spacing::XS])
        .style(style)
}

fn separator<'a>() -> Element<'a, Message> {
    Container::new(rule::vertical(1))
        .height(Length::Fixed(typography::BODY * 2.0))
        .into()
}
