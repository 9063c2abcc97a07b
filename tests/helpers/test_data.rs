//! Test data and host stand-ins

use std::collections::VecDeque;
use std::path::PathBuf;

use alm_plugins::plugins::{Entity, PluginHost, SaveFile};
use alm_plugins::ui::{Control, ControlKind, MenuItem, MenuStrip};

/// A settings form with a menu, a context menu and excluded controls
pub fn sample_form() -> Control {
    Control::new("Settings", "Settings")
        .with_child(
            MenuStrip::new("MS_Settings").with_item(
                MenuItem::new("Menu_File", "File").with_drop_down(MenuItem::new("Menu_Close", "Close")),
            ),
        )
        .with_child(
            Control::new("GB_Options", "Options")
                .with_kind(ControlKind::ContainerControl)
                .with_child(Control::new("L_Level", "Level"))
                .with_child(Control::new("NUD_Level", "100").with_kind(ControlKind::NumericInput)),
        )
        .with_child(Control::new("TB_Name", "typed").with_kind(ControlKind::TextInput))
        .with_child(
            Control::new("B_Apply", "Apply")
                .with_context_menu(MenuStrip::new("CM_Apply").with_item(MenuItem::new("Menu_Reset", "Reset"))),
        )
}

/// Exported entity; the payload is its name as bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntity {
    pub name: String,
}

impl TestEntity {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }

    pub fn empty() -> Self {
        Self::new("")
    }
}

impl Entity for TestEntity {
    fn file_name(&self) -> String {
        format!("{}.pk8", self.name)
    }

    fn encrypted_party_data(&self) -> Vec<u8> {
        self.name.as_bytes().to_vec()
    }
}

/// Save file with a fixed number of box slots
#[derive(Debug, Clone)]
pub struct TestSave {
    pub boxes: Vec<TestEntity>,
    pub dex: Vec<TestEntity>,
}

impl TestSave {
    pub fn new(slots: usize, dex_size: usize) -> Self {
        Self {
            boxes: vec![TestEntity::empty(); slots],
            dex: (0..dex_size).map(|i| TestEntity::new(&format!("mon{:03}", i))).collect(),
        }
    }
}

impl SaveFile for TestSave {
    type Entity = TestEntity;

    fn generate_living_dex(&self) -> Vec<TestEntity> {
        self.dex.clone()
    }

    fn box_data(&self) -> Vec<TestEntity> {
        self.boxes.clone()
    }

    fn set_box_data(&mut self, data: Vec<TestEntity>) {
        self.boxes = data;
    }
}

/// Host answering prompts from a script and recording what was asked
#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub answers: VecDeque<bool>,
    pub folder: Option<PathBuf>,
    pub prompts: Vec<String>,
    pub folder_requests: usize,
    pub reloads: usize,
}

impl ScriptedHost {
    pub fn new(answers: &[bool], folder: Option<PathBuf>) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            folder,
            ..Self::default()
        }
    }
}

impl PluginHost for ScriptedHost {
    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn choose_folder(&mut self) -> Option<PathBuf> {
        self.folder_requests += 1;
        self.folder.clone()
    }

    fn reload_slots(&mut self) {
        self.reloads += 1;
    }
}
