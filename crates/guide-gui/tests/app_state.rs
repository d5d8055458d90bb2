//! Integration tests for viewer state transitions.

use std::fs;
use std::path::Path;

use guide_gui::settings::Settings;
use guide_gui::state::AppState;
use guide_model::ChapterId;
use guide_session::{ExercisesTab, Page, Tab};

fn write_chapter(dir: &Path, id: u32, exercises: usize) {
    let items: Vec<String> = (1..=exercises)
        .map(|n| format!(r#"{{"enunciado_markdown": "Problema {n}", "solucion_markdown": "Solución {n}"}}"#))
        .collect();
    let json = format!(
        r#"{{"capitulo_id": {id}, "titulo": "Capítulo {id}", "secciones": [
            {{"tipo": "teoria", "titulo": "Teoría", "contenido_markdown": "Texto"}},
            {{"tipo": "ejercicios", "titulo": "Ejercicios", "ejercicios": [{}]}}
        ]}}"#,
        items.join(",")
    );
    fs::write(dir.join(ChapterId::new(id).json_file_name()), json).unwrap();
}

fn settings_for(dir: &Path) -> Settings {
    Settings {
        content_dir: dir.to_path_buf(),
        ..Settings::default()
    }
}

fn expanded_flags(state: &AppState) -> Vec<bool> {
    match state.page() {
        Page::Chapter(page) => match &page.exercises {
            ExercisesTab::Items { items, .. } => items.iter().map(|item| item.expanded).collect(),
            ExercisesTab::Empty { .. } => Vec::new(),
        },
        Page::Error { .. } => Vec::new(),
    }
}

#[test]
fn starts_on_the_first_chapter_without_a_saved_position() {
    let dir = tempfile::tempdir().unwrap();
    write_chapter(dir.path(), 1, 1);
    let mut state = AppState::new(settings_for(dir.path()));
    assert_eq!(state.navigation().chapter(), ChapterId::new(1));
    assert!(!state.page().is_error());
    assert!(!state.take_settings_dirty());
}

#[test]
fn restores_the_saved_position() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        last_part: Some("waves".to_string()),
        last_chapter: Some(ChapterId::new(17)),
        ..settings_for(dir.path())
    };
    let state = AppState::new(settings);
    assert_eq!(state.navigation().chapter(), ChapterId::new(17));
    assert!(state.page().is_error());
}

#[test]
fn part_change_records_the_new_position() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::new(settings_for(dir.path()));
    state.select_part(2);

    assert_eq!(state.navigation().chapter(), ChapterId::new(19));
    assert_eq!(state.settings.last_part.as_deref(), Some("thermodynamics"));
    assert_eq!(state.settings.last_chapter, Some(ChapterId::new(19)));
    assert!(state.take_settings_dirty());
    assert!(!state.take_settings_dirty());
}

#[test]
fn chapters_of_other_parts_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::new(settings_for(dir.path()));
    state.select_chapter(ChapterId::new(20));
    assert_eq!(state.navigation().chapter(), ChapterId::new(1));
}

#[test]
fn exercise_toggles_show_up_in_the_page() {
    let dir = tempfile::tempdir().unwrap();
    write_chapter(dir.path(), 1, 3);
    let mut state = AppState::new(settings_for(dir.path()));

    state.toggle_exercise(1);
    assert_eq!(expanded_flags(&state), vec![false, true, false]);
    state.expand_all();
    assert_eq!(expanded_flags(&state), vec![true, true, true]);
    state.collapse_all();
    assert_eq!(expanded_flags(&state), vec![false, false, false]);
}

#[test]
fn tab_cycling_stops_at_the_ends() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::new(settings_for(dir.path()));
    state.cycle_tab(false);
    assert_eq!(state.navigation().tab(), Tab::Theory);
    state.cycle_tab(true);
    state.cycle_tab(true);
    assert_eq!(state.navigation().tab(), Tab::Exercises);
}

#[test]
fn stepping_stays_inside_the_part() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::new(settings_for(dir.path()));
    state.select_part(1);
    state.step_chapter(false);
    assert_eq!(state.navigation().chapter(), ChapterId::new(15));
    state.step_chapter(true);
    assert_eq!(state.navigation().chapter(), ChapterId::new(16));
}

#[test]
fn switching_content_directory_reloads() {
    let empty = tempfile::tempdir().unwrap();
    let filled = tempfile::tempdir().unwrap();
    write_chapter(filled.path(), 1, 1);

    let mut state = AppState::new(settings_for(empty.path()));
    assert!(state.page().is_error());
    state.set_content_dir(filled.path().to_path_buf());
    assert!(!state.page().is_error());
    assert_eq!(state.settings.content_dir, filled.path());
    assert!(state.take_settings_dirty());
}
