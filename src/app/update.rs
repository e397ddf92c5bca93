// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every handler runs a session operation to completion; the resulting
//! [`SessionEvent`]s only need logging since the next `view` reads the
//! session directly.

use super::{Message, Status};
use crate::i18n::I18n;
use crate::media::{FileDecoder, IMAGE_EXTENSIONS};
use crate::session::{Session, SessionEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::{canvas_view, thumbnail_list, toolbar};
use iced::Task;
use std::path::PathBuf;

/// Mutable slices of the application state touched by `update`.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a mut Session,
    pub status: &'a mut Status,
    pub notifications: &'a mut notifications::Manager,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Toolbar(message) => handle_toolbar(ctx, message),
        Message::Canvas(message) => {
            handle_canvas(ctx, message);
            Task::none()
        }
        Message::List(thumbnail_list::Message::Select(index)) => {
            // Re-clicking the current entry keeps the view as it is
            if ctx.session.list().selected() != Some(index) {
                trace_events(&ctx.session.select(Some(index)));
            }
            Task::none()
        }
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::FilesPicked(paths) => {
            if paths.is_empty() {
                return Task::none();
            }
            *ctx.status = Status::Reading {
                done: 0,
                total: paths.len(),
            };
            Task::done(Message::LoadFiles(paths))
        }
        Message::LoadFiles(paths) => {
            load_files(ctx, &paths);
            Task::none()
        }
        Message::Tick(_) => {
            ctx.notifications.tick();
            Task::none()
        }
    }
}

fn handle_toolbar(ctx: &mut UpdateContext<'_>, message: toolbar::Message) -> Task<Message> {
    let events = match message {
        toolbar::Message::Open => return open_dialog(ctx.i18n),
        toolbar::Message::SetMode(mode) => {
            ctx.session.set_mode(mode);
            Vec::new()
        }
        toolbar::Message::SetBrush(brush) => {
            ctx.session.set_brush(brush);
            Vec::new()
        }
        toolbar::Message::ZoomIn => ctx.session.zoom_in(),
        toolbar::Message::ZoomOut => ctx.session.zoom_out(),
        toolbar::Message::FitWindow => ctx.session.fit_to_window(),
        toolbar::Message::FitWidth => ctx.session.fit_width(),
        toolbar::Message::FillWindow => ctx.session.fill_window(),
    };
    trace_events(&events);
    Task::none()
}

fn handle_canvas(ctx: &mut UpdateContext<'_>, message: canvas_view::Message) {
    match message {
        canvas_view::Message::Pointer { event, viewport } => {
            let mut events = ctx.session.set_viewport(viewport);
            events.extend(ctx.session.handle_pointer(event));
            trace_events(&events);
        }
        canvas_view::Message::Resized(viewport) => {
            trace_events(&ctx.session.set_viewport(viewport));
        }
    }
}

fn load_files(ctx: &mut UpdateContext<'_>, paths: &[PathBuf]) {
    let status = &mut *ctx.status;
    let (report, events) = ctx.session.load_files(paths, &FileDecoder, |progress| {
        *status = Status::Reading {
            done: progress.done,
            total: progress.total,
        };
    });

    for failure in &report.failures {
        ctx.notifications
            .push(Notification::load_failed(&failure.path, &failure.error));
    }
    *ctx.status = Status::Ready;
    trace_events(&events);
}

/// Opens the native multi-file picker filtered to decodable images.
fn open_dialog(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("dialog-open-title");
    let filter_name = i18n.tr("dialog-filter-images");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, IMAGE_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
                .unwrap_or_default()
        },
        Message::FilesPicked,
    )
}

fn trace_events(events: &[SessionEvent]) {
    if !events.is_empty() {
        log::trace!("Session events: {events:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::canvas::BrushWidth;
    use crate::ui::notifications::LOAD_ERROR_KEY;
    use iced::Size;
    use tempfile::tempdir;

    struct Fixture {
        i18n: I18n,
        session: Session,
        status: Status,
        notifications: notifications::Manager,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                i18n: I18n::default(),
                session: Session::default(),
                status: Status::Ready,
                notifications: notifications::Manager::new(),
            }
        }

        fn update(&mut self, message: Message) -> Task<Message> {
            let mut ctx = UpdateContext {
                i18n: &self.i18n,
                session: &mut self.session,
                status: &mut self.status,
                notifications: &mut self.notifications,
            };
            update(&mut ctx, message)
        }
    }

    #[test]
    fn empty_pick_is_a_noop() {
        let mut fixture = Fixture::new();
        let _ = fixture.update(Message::FilesPicked(Vec::new()));

        assert_eq!(fixture.status, Status::Ready);
        assert!(fixture.session.list().is_empty());
    }

    #[test]
    fn picked_files_switch_status_to_reading() {
        let mut fixture = Fixture::new();
        let _ = fixture.update(Message::FilesPicked(vec![PathBuf::from("a.png")]));

        assert_eq!(fixture.status, Status::Reading { done: 0, total: 1 });
    }

    #[test]
    fn failed_files_raise_error_toasts() {
        let dir = tempdir().expect("temp dir");
        let bogus = dir.path().join("bogus.png");
        std::fs::write(&bogus, b"not an image").expect("write file");

        let mut fixture = Fixture::new();
        let _ = fixture.update(Message::LoadFiles(vec![bogus.clone()]));

        assert_eq!(fixture.status, Status::Ready);
        assert_eq!(fixture.notifications.visible_count(), 1);
        let toast = fixture.notifications.visible().next().expect("toast");
        assert_eq!(toast.message_key(), LOAD_ERROR_KEY);
        assert_eq!(toast.arg("path"), Some(bogus.display().to_string().as_str()));
    }

    #[test]
    fn clicking_selected_entry_keeps_view() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("a.png");
        image_rs::RgbaImage::from_pixel(100, 60, image_rs::Rgba([255, 255, 255, 255]))
            .save(&path)
            .expect("write image");

        let mut fixture = Fixture::new();
        let _ = fixture.update(Message::Canvas(canvas_view::Message::Resized(Size::new(
            400.0, 300.0,
        ))));
        let _ = fixture.update(Message::LoadFiles(vec![path]));
        let _ = fixture.update(Message::Toolbar(toolbar::Message::ZoomIn));
        let zoomed = fixture.session.transform().scale();

        let _ = fixture.update(Message::List(thumbnail_list::Message::Select(0)));

        assert_eq!(fixture.session.list().selected(), Some(0));
        assert_eq!(fixture.session.transform().scale(), zoomed);
    }

    #[test]
    fn brush_selection_reaches_session() {
        let mut fixture = Fixture::new();
        let _ = fixture.update(Message::Toolbar(toolbar::Message::SetBrush(BrushWidth::Px12)));

        assert_eq!(fixture.session.brush(), BrushWidth::Px12);
    }
}
