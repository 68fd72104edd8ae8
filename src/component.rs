//! Component metadata and the menu group the commands are registered under.

use std::path::Path;

use uuid::Uuid;

pub const COMPONENT_NAME: &str = "Play Track";
pub const COMPONENT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COMPONENT_ABOUT: &str = "Copyright (C) 2023 marc2003";
pub const COMPONENT_FILENAME: &str = "foo_play_track.dll";

/// Popup group holding the play-track commands.
pub const MAIN_MENU_GROUP_ID: Uuid = Uuid::from_u128(0xef2b8edd_dad4_4291_b228_a26fbf8b051d);

/// Host's base sort priority for menu groups and commands.
pub const SORT_PRIORITY_BASE: u32 = 0x10000;

/// Built-in host menu groups a component can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMenuGroup {
    PlaybackControls,
}

impl HostMenuGroup {
    pub fn label(self) -> &'static str {
        match self {
            Self::PlaybackControls => "Playback Controls",
        }
    }
}

/// Registration record for a popup group in the host's main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub id: Uuid,
    pub parent: HostMenuGroup,
    pub sort_priority: u32,
    pub label: String,
}

impl MenuGroup {
    pub fn play_track(label: &str) -> Self {
        Self {
            id: MAIN_MENU_GROUP_ID,
            parent: HostMenuGroup::PlaybackControls,
            sort_priority: SORT_PRIORITY_BASE,
            label: label.to_string(),
        }
    }
}

/// Version block shown in the host's component list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
    pub name: String,
    pub version: String,
    pub about: String,
}

impl ComponentInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: COMPONENT_VERSION.to_string(),
            about: COMPONENT_ABOUT.to_string(),
        }
    }

    /// "Name vX.Y.Z" line used in startup logs.
    pub fn display_line(&self) -> String {
        format!("{} v{}", self.name, self.version)
    }
}

/// Host refuses to load a component module that has been renamed.
pub fn validate_module_filename(module_path: &Path) -> Result<(), String> {
    let file_name = module_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("Invalid component module path: {}", module_path.display()))?;

    if file_name.eq_ignore_ascii_case(COMPONENT_FILENAME) {
        Ok(())
    } else {
        Err(format!(
            "Component module must be named {}, found {}",
            COMPONENT_FILENAME, file_name
        ))
    }
}
