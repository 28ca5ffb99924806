use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use docsurface::router::Focus;
use docsurface::searchable::KeyDisposition;
use docsurface::signals::SurfaceSignal;
use docsurface::{Config, RenderingEngine, SearchableSurface, TextEngine};

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn fixture_surface() -> SearchableSurface<TextEngine> {
    let mut surface = SearchableSurface::new(TextEngine::new(), &Config::default());
    surface.resize(Rect::new(0, 0, 80, 24));
    surface.load(&format!("file://{}", fixture_path("iterators.txt").display()));
    surface.pump_engine_events();
    surface
}

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page not found: nonexistent.txt"));
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal documentation viewer"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("docsurface"));
}

#[test]
fn test_fixture_page_loads() {
    let surface = fixture_surface();

    assert_eq!(surface.title(), "Iterators");
    assert!(surface.url().ends_with("iterators.txt"));
    assert!(!surface.can_go_back());
}

#[test]
fn test_find_session_on_fixture() {
    let mut surface = fixture_surface();

    assert_eq!(surface.handle_key(key(KeyCode::Char('/'))), KeyDisposition::Accepted);
    assert_eq!(surface.focus_state(), Focus::Overlay);

    for ch in "iterator".chars() {
        surface.handle_key(key(KeyCode::Char(ch)));
    }
    let first = surface.page().current_match().copied();
    assert!(surface.page().matches().len() >= 4);
    assert_eq!(first.map(|m| m.line), Some(0));

    surface.handle_key(key(KeyCode::Enter));
    assert_ne!(surface.page().current_match().copied(), first);

    surface.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
    assert_eq!(surface.page().current_match().copied(), first);

    surface.handle_key(key(KeyCode::Esc));
    assert!(!surface.is_search_visible());
    assert!(surface.page().matches().is_empty());
}

#[test]
fn test_navigation_signals_on_fixture() {
    let mut surface = fixture_surface();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    surface.subscribe(move |signal| sink.borrow_mut().push(signal.clone()));

    surface.load("qrc:/help");
    surface.pump_engine_events();
    surface.back();
    surface.pump_engine_events();

    let seen = seen.borrow();
    assert!(seen.contains(&SurfaceSignal::TitleChanged("docsurface help".to_string())));
    assert_eq!(
        seen.last(),
        Some(&SurfaceSignal::LoadFinished { ok: true })
    );
    assert_eq!(surface.title(), "Iterators");
    assert!(surface.page().can_go_forward());
}
