//! Plugin commands module
//!
//! This module contains the menu commands the plugin adds to the host editor
//! and the host-side interfaces they work against.

pub mod living_dex;

use std::path::PathBuf;
use crate::config::FeaturesConfig;
use crate::ui::MenuItem;

pub use living_dex::{LivingDex, LivingDexOutcome};

/// Name of the menu item all plugin commands are attached to
pub const ROOT_MENU_NAME: &str = "Menu_AutoLegality";

/// Default caption of the plugin root menu
pub const ROOT_MENU_TEXT: &str = "Auto-Legality Mod";

/// A command contributed to the host's menu
pub trait Plugin {
    /// Caption of the command
    fn name(&self) -> &str;

    /// Lower values are attached first
    fn priority(&self) -> i32;

    /// Add the command's menu entry below `menu`
    fn add_plugin_control(&self, menu: &mut MenuItem);
}

/// An entity stored in a save file slot
pub trait Entity {
    /// File name used when the entity is exported
    fn file_name(&self) -> String;

    /// Encrypted party-format bytes written on export
    fn encrypted_party_data(&self) -> Vec<u8>;
}

/// The save file currently open in the host
pub trait SaveFile {
    type Entity: Entity + Clone;

    /// One entity per obtainable species and form
    fn generate_living_dex(&self) -> Vec<Self::Entity>;

    /// Contents of every box slot, in slot order
    fn box_data(&self) -> Vec<Self::Entity>;

    fn set_box_data(&mut self, data: Vec<Self::Entity>);
}

/// Dialogs and view updates provided by the host application
pub trait PluginHost {
    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Let the user pick a folder; `None` when cancelled
    fn choose_folder(&mut self) -> Option<PathBuf>;

    /// Refresh the box view after the save file changed
    fn reload_slots(&mut self);
}

/// Plugins enabled by the feature flags
pub fn default_plugins(features: &FeaturesConfig) -> Vec<Box<dyn Plugin>> {
    let mut plugins: Vec<Box<dyn Plugin>> = Vec::new();
    if features.living_dex {
        plugins.push(Box::new(LivingDex));
    }
    plugins
}

/// Attach plugins below `menu` in ascending priority order
///
/// Plugins with equal priority keep their relative order.
pub fn attach_plugins(plugins: &[Box<dyn Plugin>], menu: &mut MenuItem) {
    let mut ordered: Vec<&dyn Plugin> = plugins.iter().map(|plugin| plugin.as_ref()).collect();
    ordered.sort_by_key(|plugin| plugin.priority());
    for plugin in ordered {
        plugin.add_plugin_control(menu);
    }
}

/// Build the plugin root menu with every plugin attached
pub fn build_plugin_menu(plugins: &[Box<dyn Plugin>]) -> MenuItem {
    let mut menu = MenuItem::new(ROOT_MENU_NAME, ROOT_MENU_TEXT);
    attach_plugins(plugins, &mut menu);
    menu
}
