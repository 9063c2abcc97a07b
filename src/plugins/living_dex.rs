//! Living Dex command
//!
//! Fills the boxes of the open save file with one entity per obtainable
//! species and form. Entities that do not fit can be exported to a folder.

use std::fs;
use tracing::info;
use crate::ui::MenuItem;
use crate::utils::errors::{AlmError, Result};
use crate::utils::helpers::sanitize_filename;
use crate::utils::logging::log_plugin_action;
use super::{Entity, Plugin, PluginHost, SaveFile};

/// Menu item name used as translation key
pub const MENU_NAME: &str = "Menu_LivingDex";

/// Result of running the command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LivingDexOutcome {
    /// The user declined the initial prompt
    Cancelled,
    Generated {
        /// Entities written into box slots
        placed: usize,
        /// Entities that did not fit into the boxes
        overflow: usize,
        /// Overflow entities written to disk
        exported: usize,
    },
}

/// "Generate Living Dex" menu command
#[derive(Debug, Clone, Copy, Default)]
pub struct LivingDex;

impl Plugin for LivingDex {
    fn name(&self) -> &str {
        "Generate Living Dex"
    }

    fn priority(&self) -> i32 {
        1
    }

    fn add_plugin_control(&self, menu: &mut MenuItem) {
        menu.drop_down.push(MenuItem::new(MENU_NAME, self.name()).into());
    }
}

impl LivingDex {
    /// Run the command against the open save file
    pub fn generate<S, H>(&self, save: &mut S, host: &mut H) -> Result<LivingDexOutcome>
    where
        S: SaveFile,
        H: PluginHost,
    {
        if !host.confirm("Generate a Living Dex?") {
            return Ok(LivingDexOutcome::Cancelled);
        }

        let mut generated = save.generate_living_dex();
        let mut boxes = save.box_data();
        let extras = if generated.len() > boxes.len() {
            generated.split_off(boxes.len())
        } else {
            Vec::new()
        };

        let placed = generated.len();
        for (slot, entity) in boxes.iter_mut().zip(generated) {
            *slot = entity;
        }
        save.set_box_data(boxes);
        host.reload_slots();

        let mut exported = 0;
        if !extras.is_empty()
            && host.confirm("This Living Dex does not fit in all boxes. Save the extra pkms to a folder?")
        {
            if let Some(folder) = host.choose_folder() {
                if !folder.is_dir() {
                    return Err(AlmError::Plugin(format!(
                        "Export folder not found: {}",
                        folder.display()
                    )));
                }
                for entity in &extras {
                    let path = folder.join(sanitize_filename(&entity.file_name()));
                    fs::write(&path, entity.encrypted_party_data())?;
                    exported += 1;
                }
                log_plugin_action(self.name(), "export", Some(&folder.display().to_string()));
            }
        }

        info!("Generated Living Dex with {} entries.", placed);
        Ok(LivingDexOutcome::Generated {
            placed,
            overflow: extras.len(),
            exported,
        })
    }
}
