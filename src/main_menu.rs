//! Main-menu command table exposed to the host.
//!
//! Indices passed in by the host must be below [`MainMenuCommands::count`];
//! anything else is a contract violation and panics.

use std::sync::Arc;

use log::debug;
use uuid::Uuid;

use crate::command_id::command_identifier;
use crate::component::MAIN_MENU_GROUP_ID;
use crate::playlist::PlaylistService;
use crate::random_pick::RandomIndexSource;
use crate::resolver::{is_applicable, resolve_target, PlaylistSnapshot};
use crate::slot::{Revision, Slot};

/// Menu label plus enabled state for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDisplay {
    pub name: String,
    pub enabled: bool,
}

/// Static registration data for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCommand {
    pub index: u32,
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

pub struct MainMenuCommands {
    component_name: String,
    revision: Revision,
    playlist: Arc<dyn PlaylistService>,
    random: RandomIndexSource,
}

impl MainMenuCommands {
    pub fn new(
        component_name: &str,
        revision: Revision,
        playlist: Arc<dyn PlaylistService>,
        random: RandomIndexSource,
    ) -> Self {
        Self {
            component_name: component_name.to_string(),
            revision,
            playlist,
            random,
        }
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn count(&self) -> u32 {
        self.revision.command_count()
    }

    pub fn parent(&self) -> Uuid {
        MAIN_MENU_GROUP_ID
    }

    fn slot(&self, index: u32) -> Slot {
        match self.revision.slot_at(index) {
            Some(slot) => slot,
            None => panic!(
                "main menu command index {} out of range (count {})",
                index,
                self.count()
            ),
        }
    }

    fn snapshot(&self) -> PlaylistSnapshot {
        PlaylistSnapshot {
            item_count: self.playlist.item_count(),
            focused_index: self.playlist.focused_index(),
        }
    }

    pub fn identifier(&self, index: u32) -> Uuid {
        self.slot(index);
        command_identifier(
            &self.component_name,
            index,
            self.revision.identifier_scheme(),
        )
    }

    pub fn name(&self, index: u32) -> String {
        self.slot(index).name()
    }

    pub fn description(&self, index: u32) -> String {
        let slot = self.slot(index);
        if self.revision.has_sentence_descriptions() {
            slot.sentence()
        } else {
            slot.name()
        }
    }

    pub fn display(&self, index: u32) -> CommandDisplay {
        let slot = self.slot(index);
        CommandDisplay {
            name: slot.name(),
            enabled: is_applicable(slot, self.snapshot()),
        }
    }

    /// Activates the resolved playlist item; does nothing when the command does not apply.
    pub fn execute(&self, index: u32) {
        let slot = self.slot(index);
        let snapshot = self.snapshot();
        match resolve_target(slot, snapshot, &self.random) {
            Some(target) => {
                debug!(
                    "MainMenuCommands: {:?} -> playlist index {} of {}",
                    slot, target, snapshot.item_count
                );
                self.playlist.execute_default_action(target);
            }
            None => {
                debug!(
                    "MainMenuCommands: {:?} not applicable (items={}, focused={:?})",
                    slot, snapshot.item_count, snapshot.focused_index
                );
            }
        }
    }

    /// Registration records for every command, in index order.
    pub fn commands(&self) -> Vec<MenuCommand> {
        (0..self.count())
            .map(|index| MenuCommand {
                index,
                id: self.identifier(index),
                name: self.name(index),
                description: self.description(index),
            })
            .collect()
    }

    /// Looks up a command index by its stable identifier.
    pub fn find_by_identifier(&self, id: Uuid) -> Option<u32> {
        (0..self.count()).find(|&index| self.identifier(index) == id)
    }
}
