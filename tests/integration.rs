// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::widget::image::Handle;
use iced::{Point, Rectangle, Size};
use image_rs::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use tiffany::canvas::{PointerButton, PointerEvent};
use tiffany::config::{self, Config};
use tiffany::domain::canvas::{zoom_bounds, BrushWidth, CanvasMode, PaintColor};
use tiffany::i18n::I18n;
use tiffany::media::{FileDecoder, PixelFormat};
use tiffany::session::{Session, SessionEvent};

const VIEWPORT: Size = Size {
    width: 400.0,
    height: 300.0,
};

fn write_image(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(&path)
        .expect("Failed to write test image");
    path
}

/// Session with two white 100x60 PNGs loaded, entry 1 selected.
fn two_white_images() -> (TempDir, Session) {
    let dir = tempdir().expect("Failed to create temporary directory");
    let paths = [
        write_image(dir.path(), "a.png", 100, 60, [255, 255, 255, 255]),
        write_image(dir.path(), "b.png", 100, 60, [255, 255, 255, 255]),
    ];

    let mut session = Session::default();
    session.set_viewport(VIEWPORT);
    session.load_files(&paths, &FileDecoder, |_| {});
    (dir, session)
}

fn drag(session: &mut Session, from: Point, to: Point) -> Vec<SessionEvent> {
    let mut events = session.handle_pointer(PointerEvent::Pressed {
        button: PointerButton::Primary,
        position: from,
    });
    events.extend(session.handle_pointer(PointerEvent::Moved { position: to }));
    events.extend(session.handle_pointer(PointerEvent::Released {
        button: PointerButton::Primary,
        position: to,
    }));
    events
}

fn selected_pixel(session: &Session, x: u32, y: u32) -> [u8; 4] {
    session
        .list()
        .selected_entry()
        .and_then(|entry| entry.raster().pixel(x, y))
        .expect("pixel of the selected image")
}

fn rendition_pixel(session: &Session, x: u32, y: u32) -> [u8; 4] {
    let rendition = session.rendition().expect("rendition");
    let Handle::Rgba { width, pixels, .. } = &rendition.handle else {
        panic!("Expected an RGBA handle");
    };
    let start = ((y * width + x) * 4) as usize;
    [
        pixels[start],
        pixels[start + 1],
        pixels[start + 2],
        pixels[start + 3],
    ]
}

#[test]
fn batch_load_reports_failures_and_selects_first_entry() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let broken = dir.path().join("broken.png");
    std::fs::write(&broken, b"definitely not a png").expect("Failed to write file");
    let paths = vec![
        write_image(dir.path(), "one.png", 40, 30, [10, 20, 30, 255]),
        broken.clone(),
        write_image(dir.path(), "two.png", 30, 40, [10, 20, 30, 255]),
        write_image(dir.path(), "three.png", 20, 20, [10, 20, 30, 255]),
    ];

    let mut session = Session::default();
    session.set_viewport(VIEWPORT);
    let mut progress = Vec::new();
    let (report, events) = session.load_files(&paths, &FileDecoder, |p| progress.push(p.done));

    assert_eq!(session.list().len(), 3);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, broken);
    assert_eq!(progress, vec![1, 2, 3, 4]);

    let labels: Vec<&str> = session.list().entries().iter().map(|e| e.label()).collect();
    assert_eq!(labels, vec!["1", "2", "3"]);
    assert_eq!(session.list().selected(), Some(0));
    assert!(events.contains(&SessionEvent::SelectionRendered));
}

#[test]
fn fill_survives_reselection() {
    let (_dir, mut session) = two_white_images();
    session.set_mode(CanvasMode::Fill);
    session.set_background(PaintColor::rgb(200, 0, 0));

    let center = session.transform().scene_to_viewport(Point::new(50.0, 30.0));
    let events = drag(
        &mut session,
        Point::new(center.x - 15.0, center.y - 15.0),
        Point::new(center.x + 15.0, center.y + 15.0),
    );
    assert_eq!(events, vec![SessionEvent::ImageChanged]);

    session.select(Some(1));
    assert_eq!(selected_pixel(&session, 50, 30), [255, 255, 255, 255]);

    session.select(Some(0));
    assert_eq!(selected_pixel(&session, 50, 30), [200, 0, 0, 255]);
    assert_eq!(rendition_pixel(&session, 50, 30), [200, 0, 0, 255]);
    assert_eq!(selected_pixel(&session, 0, 0), [255, 255, 255, 255]);
}

#[test]
fn rubber_band_zoom_fills_viewport_and_keeps_aspect() {
    let (_dir, mut session) = two_white_images();
    assert_eq!(session.mode(), CanvasMode::Pointer);

    let target = Rectangle::new(Point::new(40.0, 25.0), Size::new(20.0, 10.0));
    let band = session.transform().scene_rect_to_viewport(target);
    let factor_before = session.transform().factor();

    let events = drag(
        &mut session,
        band.position(),
        Point::new(band.x + band.width, band.y + band.height),
    );
    assert_eq!(events, vec![SessionEvent::ZoomChanged]);

    let shown = session.transform().scene_rect_to_viewport(target);
    assert_abs_diff_eq!(shown.width, VIEWPORT.width, epsilon = 1e-2);
    assert_abs_diff_eq!(shown.width / shown.height, 2.0, epsilon = 1e-3);
    assert_abs_diff_eq!(shown.center_x(), VIEWPORT.width / 2.0, epsilon = 1e-2);
    assert_abs_diff_eq!(shown.center_y(), VIEWPORT.height / 2.0, epsilon = 1e-2);
    assert_eq!(session.transform().factor(), factor_before);
}

#[test]
fn erasing_a_stroke_restores_the_image() {
    for brush in BrushWidth::ALL {
        let (_dir, mut session) = two_white_images();
        session.set_brush(brush);
        let original = session
            .list()
            .selected_entry()
            .map(|entry| entry.raster().clone())
            .expect("selected image");

        let a = session.transform().scene_to_viewport(Point::new(20.3, 19.7));
        let b = session.transform().scene_to_viewport(Point::new(80.6, 40.2));

        session.set_mode(CanvasMode::Draw);
        assert_eq!(drag(&mut session, a, b), vec![SessionEvent::ImageChanged]);
        let drawn = session.list().selected_entry().map(|entry| entry.raster());
        assert_ne!(drawn, Some(&original), "{brush:?}");

        session.set_mode(CanvasMode::Erase);
        assert_eq!(drag(&mut session, b, a), vec![SessionEvent::ImageChanged]);
        let restored = session.list().selected_entry().map(|entry| entry.raster());
        assert_eq!(restored, Some(&original), "{brush:?}");
    }
}

#[test]
fn zoom_steps_compose() {
    let (_dir, mut session) = two_white_images();
    let base = session.transform().scale();

    for n in 1..=3 {
        assert_eq!(session.zoom_in(), vec![SessionEvent::ZoomChanged]);
        assert_abs_diff_eq!(
            session.transform().factor().value(),
            zoom_bounds::IN_STEP.powi(n),
            epsilon = 1e-5
        );
    }
    assert_abs_diff_eq!(
        session.transform().scale(),
        base * zoom_bounds::IN_STEP.powi(3),
        epsilon = 1e-4
    );

    for _ in 0..3 {
        session.zoom_out();
    }
    assert_abs_diff_eq!(session.transform().factor().value(), 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(session.transform().scale(), base, epsilon = 1e-4);
}

#[test]
fn fit_to_window_never_exceeds_viewport() {
    let (_dir, mut session) = two_white_images();
    session.fill_window();
    session.fit_to_window();

    let shown = session
        .transform()
        .scene_rect_to_viewport(session.rendition().expect("rendition").bounds());
    assert!(shown.width <= VIEWPORT.width);
    assert!(shown.height <= VIEWPORT.height);
}

#[test]
fn palette_images_stay_gray_when_painted() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let gif = write_image(dir.path(), "scan.gif", 32, 32, [255, 255, 255, 255]);

    let mut session = Session::default();
    session.set_viewport(VIEWPORT);
    session.load_files(&[gif], &FileDecoder, |_| {});
    let format = session
        .list()
        .selected_entry()
        .map(|entry| entry.raster().format());
    assert_eq!(format, Some(PixelFormat::Gray8));

    session.set_foreground(PaintColor::rgb(255, 0, 0));
    session.set_brush(BrushWidth::Px8);
    session.set_mode(CanvasMode::Draw);
    let a = session.transform().scene_to_viewport(Point::new(4.0, 16.0));
    let b = session.transform().scene_to_viewport(Point::new(28.0, 16.0));
    drag(&mut session, a, b);

    let [r, g, bl, _] = selected_pixel(&session, 16, 16);
    assert_eq!((r, g), (g, bl));
    assert_ne!(r, 255);
}

#[test]
fn language_follows_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config.canvas.brush_width = Some(7);
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(loaded.canvas.brush(), BrushWidth::Px8);

    let session = Session::new(&loaded.canvas);
    assert_eq!(session.brush(), BrushWidth::Px8);
}
