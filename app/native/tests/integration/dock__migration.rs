//! One-time import of the legacy key-file configuration.

use dockd_lib::DockEvent;

use crate::common::{Fixture, ids};

const LEGACY: &str = "\
[__Config__]
inited=false
Position=firefox;z;firefox;

[z]
Name=Z App
Icon=z.png
CmdLine=/opt/z/bin/z
";

#[test]
fn test_migration_imports_legacy_list() {
    let mut fixture = Fixture::new();
    fixture.install("firefox");
    fixture.write_legacy(LEGACY);

    let manager = fixture.open();

    assert_eq!(manager.docked_app_list(), ids(&["firefox", "z"]));
    assert_eq!(fixture.persisted(), Some(ids(&["firefox", "z"])));
    assert!(fixture.scratch_dir().join("z.desktop").is_file());
    assert!(fixture.legacy().contains("inited=true"));
    assert!(fixture.events().is_empty());
}

#[test]
fn test_migration_preserves_unrelated_legacy_content() {
    let fixture = Fixture::new();
    fixture.install("firefox");
    fixture.write_legacy(LEGACY);

    let _manager = fixture.open();

    let legacy = fixture.legacy();
    assert!(legacy.contains("Position=firefox;z;firefox;"));
    assert!(legacy.contains("[z]"));
    assert!(legacy.contains("CmdLine=/opt/z/bin/z"));
}

#[test]
fn test_migration_runs_once_across_restarts() {
    let mut fixture = Fixture::new();
    fixture.install("firefox");
    fixture.install("b");
    fixture.write_legacy(LEGACY);

    let manager = fixture.open();
    assert!(manager.request_undock("firefox"));
    assert!(manager.request_dock("b", "", "", ""));
    assert_eq!(fixture.events(), vec![
        DockEvent::Undocked("firefox".into()),
        DockEvent::Docked("b".into()),
    ]);
    manager.destroy();

    let reopened = fixture.open();
    assert_eq!(reopened.docked_app_list(), ids(&["z", "b"]));
}

#[test]
fn test_already_migrated_legacy_file_is_ignored() {
    let fixture = Fixture::new();
    fixture.install("firefox");
    fixture.write_legacy(&LEGACY.replace("inited=false", "inited=true"));
    fixture.write_settings(&["firefox"]);

    let manager = fixture.open();
    assert_eq!(manager.docked_app_list(), ids(&["firefox"]));
    assert!(!fixture.scratch_dir().join("z.desktop").exists());
}

#[test]
fn test_missing_legacy_file_leaves_list_untouched() {
    let fixture = Fixture::new();
    fixture.write_settings(&["a"]);

    let manager = fixture.open();
    assert_eq!(manager.docked_app_list(), ids(&["a"]));
    assert!(!fixture.legacy_path().exists());
}

#[test]
fn test_unresolvable_legacy_entries_are_skipped() {
    let fixture = Fixture::new();
    fixture.install("firefox");
    fixture.write_legacy("[__Config__]\nPosition=ghost;firefox;\n");

    let manager = fixture.open();
    assert_eq!(manager.docked_app_list(), ids(&["firefox"]));
    assert!(fixture.legacy().contains("inited=true"));
}
