//! Living Dex command tests
//!
//! Run the command against an in-memory save file and a scripted host.

mod helpers;

use alm_plugins::plugins::{build_plugin_menu, default_plugins, LivingDex, LivingDexOutcome};
use alm_plugins::config::FeaturesConfig;
use alm_plugins::ui::{Control, MenuStrip};
use alm_plugins::AlmError;
use assert_matches::assert_matches;
use helpers::*;

#[test]
fn test_declined_prompt_leaves_save_untouched() {
    init_test_env();
    let mut save = TestSave::new(4, 3);
    let mut host = ScriptedHost::new(&[false], None);

    let outcome = LivingDex.generate(&mut save, &mut host).unwrap();

    assert_eq!(outcome, LivingDexOutcome::Cancelled);
    assert!(save.boxes.iter().all(|slot| *slot == TestEntity::empty()));
    assert_eq!(host.reloads, 0);
    assert_eq!(host.prompts.len(), 1);
}

#[test]
fn test_fitting_dex_fills_slots_in_order() {
    init_test_env();
    let mut save = TestSave::new(5, 3);
    let mut host = ScriptedHost::new(&[true], None);

    let outcome = LivingDex.generate(&mut save, &mut host).unwrap();

    assert_eq!(
        outcome,
        LivingDexOutcome::Generated { placed: 3, overflow: 0, exported: 0 }
    );
    assert_eq!(save.boxes.len(), 5);
    assert_eq!(save.boxes[..3], save.dex[..]);
    assert_eq!(save.boxes[3], TestEntity::empty());
    assert_eq!(host.reloads, 1);
    // No export prompt without extras
    assert_eq!(host.prompts.len(), 1);
    assert_eq!(host.folder_requests, 0);
}

#[test]
fn test_overflow_exports_exactly_the_extras() {
    let ctx = SimpleTestContext::new().unwrap();
    let folder = ctx.temp_path().join("export");
    std::fs::create_dir_all(&folder).unwrap();

    let mut save = TestSave::new(4, 6);
    let mut host = ScriptedHost::new(&[true, true], Some(folder.clone()));

    let outcome = LivingDex.generate(&mut save, &mut host).unwrap();

    assert_eq!(
        outcome,
        LivingDexOutcome::Generated { placed: 4, overflow: 2, exported: 2 }
    );
    assert_eq!(save.boxes.len(), 4);
    assert_eq!(save.boxes[..], save.dex[..4]);

    let mut written: Vec<String> = std::fs::read_dir(&folder)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["mon004.pk8", "mon005.pk8"]);
    assert_eq!(std::fs::read(folder.join("mon005.pk8")).unwrap(), b"mon005");
}

#[test]
fn test_export_keeps_host_file_names() {
    let ctx = SimpleTestContext::new().unwrap();
    let folder = ctx.temp_path().join("export");
    std::fs::create_dir_all(&folder).unwrap();

    let mut save = TestSave::new(1, 0);
    save.dex = vec![
        TestEntity::new("001 - Bulbasaur"),
        TestEntity::new("029 - Nidoran\u{2640} \u{2605} - 1A2B3C4D"),
    ];
    let mut host = ScriptedHost::new(&[true, true], Some(folder.clone()));

    LivingDex.generate(&mut save, &mut host).unwrap();

    let exported = folder.join("029 - Nidoran\u{2640} \u{2605} - 1A2B3C4D.pk8");
    assert!(exported.is_file());
    assert_eq!(std::fs::read_dir(&folder).unwrap().count(), 1);
}

#[test]
fn test_overflow_export_declined() {
    init_test_env();
    let mut save = TestSave::new(2, 3);
    let mut host = ScriptedHost::new(&[true, false], None);

    let outcome = LivingDex.generate(&mut save, &mut host).unwrap();

    assert_eq!(
        outcome,
        LivingDexOutcome::Generated { placed: 2, overflow: 1, exported: 0 }
    );
    assert_eq!(host.prompts.len(), 2);
    assert_eq!(host.folder_requests, 0);
    assert_eq!(host.reloads, 1);
}

#[test]
fn test_overflow_folder_cancelled() {
    init_test_env();
    let mut save = TestSave::new(2, 3);
    let mut host = ScriptedHost::new(&[true, true], None);

    let outcome = LivingDex.generate(&mut save, &mut host).unwrap();

    assert_eq!(
        outcome,
        LivingDexOutcome::Generated { placed: 2, overflow: 1, exported: 0 }
    );
    assert_eq!(host.folder_requests, 1);
}

#[test]
fn test_missing_export_folder_is_an_error() {
    let ctx = SimpleTestContext::new().unwrap();
    let mut save = TestSave::new(1, 2);
    let mut host = ScriptedHost::new(&[true, true], Some(ctx.temp_path().join("missing")));

    let result = LivingDex.generate(&mut save, &mut host);

    assert_matches!(result, Err(AlmError::Plugin(_)));
    // Boxes were already written before the export step
    assert_eq!(save.boxes, save.dex[..1]);
}

#[test]
fn test_plugin_menu_is_translatable() {
    let ctx = SimpleTestContext::new().unwrap();
    let menu = build_plugin_menu(&default_plugins(&FeaturesConfig { living_dex: true }));
    let mut main = Control::new("Main", "Save Editor").with_child(MenuStrip::new("MS_Main").with_item(menu));

    let mut registry = ctx.registry();
    registry.translate_interface(&mut main, "de");

    assert_eq!(main.find_text("Menu_AutoLegality"), Some("Auto-Legalitäts-Mod"));
    assert_eq!(main.find_text("Menu_LivingDex"), Some("Living Dex erstellen"));
}
