//! Docking, undocking and persistence across restarts.

use dockd_lib::{DockEvent, Lifecycle};

use crate::common::{Fixture, ids};

#[test]
fn test_fresh_start_has_empty_list() {
    let fixture = Fixture::new();
    let manager = fixture.open();

    assert_eq!(manager.lifecycle(), Lifecycle::Ready);
    assert!(manager.docked_app_list().is_empty());
}

#[test]
fn test_dock_persists_and_survives_restart() {
    let mut fixture = Fixture::new();
    fixture.install("firefox");
    fixture.install("terminal");

    let manager = fixture.open();
    assert!(manager.request_dock("firefox", "", "", ""));
    assert!(manager.request_dock("terminal", "", "", ""));
    assert_eq!(fixture.persisted(), Some(ids(&["firefox", "terminal"])));
    assert_eq!(fixture.events(), vec![
        DockEvent::Docked("firefox".into()),
        DockEvent::Docked("terminal".into()),
    ]);
    manager.destroy();

    let reopened = fixture.open();
    assert_eq!(reopened.docked_app_list(), ids(&["firefox", "terminal"]));
    assert!(reopened.is_docked("terminal"));
    assert!(fixture.events().is_empty());
}

#[test]
fn test_dock_uninstalled_app_synthesizes_entry() {
    let mut fixture = Fixture::new();
    let manager = fixture.open();

    assert!(manager.request_dock("z", "Z App", "z.png", "/opt/z/bin/z --flag"));
    assert_eq!(manager.docked_app_list(), ids(&["z"]));
    assert_eq!(fixture.events(), vec![DockEvent::Docked("z".into())]);

    let entry = std::fs::read_to_string(fixture.scratch_dir().join("z.desktop")).unwrap();
    assert!(entry.contains("Name=Z App"));
    assert!(entry.contains("Exec=/opt/z/bin/z --flag"));
    assert!(entry.contains("Type=Application"));
}

#[test]
fn test_dock_unknown_app_without_command_is_rejected() {
    let mut fixture = Fixture::new();
    let manager = fixture.open();

    assert!(!manager.request_dock("ghost", "Ghost", "", ""));
    assert!(manager.docked_app_list().is_empty());
    assert!(fixture.persisted().is_none());
    assert!(fixture.events().is_empty());
}

#[test]
fn test_undock_persists_removal() {
    let mut fixture = Fixture::new();
    fixture.install("a");
    fixture.install("b");
    fixture.write_settings(&["a", "b"]);

    let manager = fixture.open();
    assert!(manager.request_undock("a"));
    assert_eq!(fixture.persisted(), Some(ids(&["b"])));
    assert_eq!(fixture.events(), vec![DockEvent::Undocked("a".into())]);

    assert!(!manager.request_undock("a"));
    assert!(fixture.events().is_empty());
}

#[test]
fn test_duplicates_on_disk_are_removed_at_startup() {
    let fixture = Fixture::new();
    fixture.write_settings(&["a", "b", "a", "c", "b"]);

    let manager = fixture.open();
    assert_eq!(manager.docked_app_list(), ids(&["a", "b", "c"]));
    assert_eq!(fixture.persisted(), Some(ids(&["a", "b", "c"])));
}

#[test]
fn test_unchanged_list_is_not_rewritten() {
    let fixture = Fixture::new();
    fixture.write_settings(&["a", "b"]);
    let before = std::fs::metadata(fixture.settings_path()).unwrap().modified().unwrap();
    let content = std::fs::read_to_string(fixture.settings_path()).unwrap();

    let manager = fixture.open();
    assert!(!manager.sync_from_dock_state());
    manager.destroy();

    assert_eq!(std::fs::read_to_string(fixture.settings_path()).unwrap(), content);
    assert_eq!(std::fs::metadata(fixture.settings_path()).unwrap().modified().unwrap(), before);
}

#[test]
fn test_destroyed_manager_ignores_requests() {
    let mut fixture = Fixture::new();
    fixture.install("a");
    let manager = fixture.open();
    manager.destroy();

    assert_eq!(manager.lifecycle(), Lifecycle::Destroyed);
    assert!(!manager.request_dock("a", "", "", ""));
    assert!(fixture.persisted().is_none());
    assert!(fixture.events().is_empty());
}
