// SPDX-License-Identifier: MPL-2.0
//! Scrollable column of thumbnails, one per loaded image.

use crate::i18n::I18n;
use crate::library::ImageList;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, image, Column, Container, Scrollable, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select(usize),
}

/// Render the list; the selected entry is outlined.
pub fn view<'a>(list: &'a ImageList, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = if list.is_empty() {
        Container::new(Text::new(i18n.tr("list-empty")).size(typography::CAPTION))
            .width(Length::Fill)
            .padding(spacing::XS)
            .align_x(Horizontal::Center)
            .into()
    } else {
        let entries = list.entries().iter().enumerate().map(|(index, entry)| {
            let thumbnail = entry.thumbnail();
            #[allow(clippy::cast_precision_loss)]
            let preview = image(thumbnail.handle.clone())
                .width(Length::Fixed(thumbnail.width as f32))
                .height(Length::Fixed(thumbnail.height as f32));
            let label = Text::new(entry.label()).size(typography::CAPTION);

            button(
                Column::new()
                    .spacing(spacing::XXS)
                    .align_x(Horizontal::Center)
                    .push(preview)
                    .push(label),
            )
            .on_press(Message::Select(index))
            .padding(spacing::XXS)
            .style(styles::button::list_entry(list.selected() == Some(index)))
            .into()
        });

        Scrollable::new(
            Column::with_children(entries)
                .spacing(spacing::XS)
                .padding(spacing::XS)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .height(Length::Fill)
        .into()
    };

    Container::new(content)
        .width(Length::Fixed(sizing::LIST_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}
