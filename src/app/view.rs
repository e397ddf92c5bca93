// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout: toolbar on top, thumbnail column and canvas in the middle, status
//! bar at the bottom, toasts stacked over everything.

use super::{Message, Status};
use crate::i18n::I18n;
use crate::session::Session;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::{canvas_view, styles, thumbnail_list, toolbar};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub status: Status,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let session = ctx.session;

    let toolbar = toolbar::view(toolbar::ViewContext {
        i18n: ctx.i18n,
        mode: session.mode(),
        brush: session.brush(),
        can_zoom_in: session.can_zoom_in(),
        can_zoom_out: session.can_zoom_out(),
        has_image: session.rendition().is_some(),
    })
    .map(Message::Toolbar);

    let list = thumbnail_list::view(session.list(), ctx.i18n).map(Message::List);

    let body = Row::new()
        .push(list)
        .push(view_canvas(session, ctx.i18n))
        .height(Length::Fill);

    let content = Column::new()
        .push(toolbar)
        .push(body)
        .push(view_status_bar(&ctx));

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_canvas<'a>(session: &'a Session, i18n: &'a I18n) -> Element<'a, Message> {
    let canvas = canvas_view::view(session).map(Message::Canvas);
    if session.rendition().is_some() {
        return canvas;
    }

    // The canvas stays in the tree so it keeps reporting its size
    let hint = Container::new(Text::new(i18n.tr("canvas-empty")).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new().push(canvas).push(hint).into()
}

/// Status text, e.g. "Ready" or "Reading... 2/5".
pub(super) fn status_text(i18n: &I18n, status: Status) -> String {
    match status {
        Status::Ready => i18n.tr("status-ready"),
        Status::Reading { done, total } => i18n.tr_with_args(
            "status-reading",
            &[("done", &done.to_string()), ("total", &total.to_string())],
        ),
    }
}

/// Absolute display scale as a rounded percentage.
pub(super) fn zoom_percent(scale: f32) -> String {
    format!("{:.0}", scale * 100.0)
}

fn view_status_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::XS])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(
            Text::new(status_text(ctx.i18n, ctx.status))
                .size(typography::CAPTION)
                .width(Length::Fill),
        );

    if let Some(rendition) = ctx.session.rendition() {
        let size = rendition.size;
        row = row
            .push(
                Text::new(ctx.i18n.tr_with_args(
                    "status-size",
                    &[
                        ("width", &size.width.to_string()),
                        ("height", &size.height.to_string()),
                    ],
                ))
                .size(typography::CAPTION),
            )
            .push(
                Text::new(ctx.i18n.tr_with_args(
                    "status-zoom",
                    &[("percent", &zoom_percent(ctx.session.transform().scale()))],
                ))
                .size(typography::CAPTION),
            );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STATUS_BAR_HEIGHT))
        .style(styles::container::status_bar)
        .into()
}
