//! End-to-end form workflows driven through key handling.

mod common;

use common::*;
use crossterm::event::KeyCode;
use descgen::catalog::{find_language, LengthChoice};
use descgen::generation::LanguageDescription;
use descgen::ui::app::{Field, InputMode, UiCommand};
use descgen::ui::generation::GenerationState;
use descgen::ui::input::handle_key;
use descgen::ui::presenter::{present, ResultView, EMPTY_MESSAGE};
use std::path::PathBuf;

fn press(app: &mut descgen::ui::app::App, code: KeyCode) {
    handle_key(app, press_key(code));
}

fn type_text(app: &mut descgen::ui::app::App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn keyboard_selects_at_most_three_languages() {
    let (mut app, _rx) = make_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.focus(), Field::Languages);

    for _ in 0..4 {
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
    }

    assert_eq!(app.selection().languages(), ["en", "es", "fr"]);
    assert!(!app.selection().is_selected("de"));
}

#[test]
fn submit_requires_image_and_language() {
    let (mut app, mut rx) = make_app();
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.generation(), &GenerationState::Idle);

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.generation(), &GenerationState::Idle);
    assert!(rx.try_recv().is_err());

    assert!(app.toggle_language("es"));
    press(&mut app, KeyCode::Char('g'));
    assert!(app.generation().is_loading());
    assert!(matches!(rx.try_recv(), Ok(UiCommand::Generate { .. })));
}

#[test]
fn double_submit_issues_one_request() {
    let (mut app, mut rx) = make_app();
    app.use_sample_image();
    app.toggle_language("en");

    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char('g'));
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
    }

    let mut generates = 0;
    while let Ok(command) = rx.try_recv() {
        if matches!(command, UiCommand::Generate { .. }) {
            generates += 1;
        }
    }
    assert_eq!(generates, 1);
}

#[test]
fn loading_shows_placeholders_per_language() {
    let mut config = descgen::config::Config::default();
    config.defaults.length = LengthChoice::Long;
    let (mut app, _rx) = make_app_with(&config);
    app.use_sample_image();
    app.toggle_language("en");
    app.toggle_language("fr");
    app.submit();

    match present(app.generation()) {
        ResultView::Loading { placeholders } => {
            let languages: Vec<_> = placeholders.iter().map(|p| p.language.as_str()).collect();
            assert_eq!(languages, ["en", "fr"]);
        }
        other => panic!("Expected Loading view, got {:?}", other),
    }
}

#[test]
fn echoed_codes_resolve_to_selection_labels() {
    let (mut app, mut rx) = make_app();
    app.use_sample_image();
    for code in ["ja", "pt", "ko"] {
        app.toggle_language(code);
    }
    let selected_labels: Vec<&str> = app
        .selection()
        .languages()
        .iter()
        .map(|code| find_language(code).unwrap().display_name)
        .collect();

    app.submit();
    let Ok(UiCommand::Generate {
        request_id,
        request,
    }) = rx.try_recv()
    else {
        panic!("Expected Generate command");
    };

    let echoed = request
        .languages
        .iter()
        .map(|code| LanguageDescription::new(code.clone(), "..."))
        .collect();
    app.on_generation_finished(request_id, Ok(echoed));

    let ResultView::Descriptions { blocks } = present(app.generation()) else {
        panic!("Expected Descriptions view");
    };
    let shown: Vec<&str> = blocks.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(shown, selected_labels);
}

#[test]
fn failure_can_be_dismissed_with_d() {
    let (mut app, mut rx) = make_app();
    app.use_sample_image();
    app.toggle_language("it");
    app.submit();
    let Ok(UiCommand::Generate { request_id, .. }) = rx.try_recv() else {
        panic!("Expected Generate command");
    };

    app.on_generation_finished(request_id, Err("Could not reach the generation service".into()));
    assert!(matches!(present(app.generation()), ResultView::Failed { .. }));
    assert!(app.can_submit());

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(
        present(app.generation()),
        ResultView::Empty {
            message: EMPTY_MESSAGE
        }
    );
}

#[test]
fn stale_result_after_retry_is_ignored() {
    let (mut app, mut rx) = make_app();
    app.use_sample_image();
    app.toggle_language("en");

    app.submit();
    let Ok(UiCommand::Generate { request_id: first, .. }) = rx.try_recv() else {
        panic!("Expected Generate command");
    };
    app.on_generation_finished(first, Err("timed out".into()));

    app.submit();
    let Ok(UiCommand::Generate { request_id: second, .. }) = rx.try_recv() else {
        panic!("Expected Generate command");
    };

    app.on_generation_finished(first, Ok(vec![LanguageDescription::new("en", "old")]));
    assert_eq!(app.generation().request_id(), Some(second));

    app.on_generation_finished(second, Ok(vec![LanguageDescription::new("en", "new")]));
    let ResultView::Descriptions { blocks } = present(app.generation()) else {
        panic!("Expected Descriptions view");
    };
    assert_eq!(blocks[0].description, "new");
}

#[test]
fn path_prompt_uploads_and_escape_cancels() {
    let (mut app, mut rx) = make_app();

    press(&mut app, KeyCode::Char('u'));
    type_text(&mut app, "/tmp/nope");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode(), &InputMode::Normal);
    assert!(!app.should_quit());
    assert!(rx.try_recv().is_err());

    press(&mut app, KeyCode::Char('u'));
    type_text(&mut app, "/tmp/shoe.png");
    press(&mut app, KeyCode::Enter);
    assert!(app.upload().is_uploading());
    match rx.try_recv() {
        Ok(UiCommand::Upload { path }) => assert_eq!(path, PathBuf::from("/tmp/shoe.png")),
        other => panic!("Expected Upload command, got {:?}", other),
    }
}

#[test]
fn failed_upload_retries_same_path() {
    let (mut app, mut rx) = make_app();
    let path = PathBuf::from("/tmp/shoe.png");
    app.start_upload(path.clone());
    let _ = rx.try_recv();
    app.on_upload_finished(path.clone(), Err("Could not reach the image storage".into()));
    assert_eq!(app.upload().error_message(), Some("Could not reach the image storage"));

    press(&mut app, KeyCode::Char('r'));
    match rx.try_recv() {
        Ok(UiCommand::Upload { path: retried }) => assert_eq!(retried, path),
        other => panic!("Expected Upload command, got {:?}", other),
    }
}

#[test]
fn clear_image_reenables_upload() {
    let (mut app, _rx) = make_app();
    press(&mut app, KeyCode::Char('s'));
    assert!(app.selection().image().is_some());

    press(&mut app, KeyCode::Char('u'));
    assert_eq!(app.input_mode(), &InputMode::Normal);

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.selection().image(), None);
    press(&mut app, KeyCode::Char('u'));
    assert!(matches!(app.input_mode(), InputMode::ImagePath { .. }));
}

#[test]
fn quit_keys() {
    let (mut app, _rx) = make_app();
    handle_key(&mut app, ctrl_key('c'));
    assert!(app.should_quit());

    let (mut app, _rx) = make_app();
    press(&mut app, KeyCode::Char('u'));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    handle_key(&mut app, ctrl_key('q'));
    assert!(app.should_quit());
}
