//! Builds the services the component registers with the host.

use std::sync::Arc;

use log::info;

use crate::commandline::{CommandLineDispatcher, PlayTrackCommandLine};
use crate::component::{ComponentInfo, MenuGroup};
use crate::config::ComponentConfig;
use crate::main_menu::MainMenuCommands;
use crate::playlist::PlaylistService;
use crate::random_pick::RandomIndexSource;

pub struct ComponentServices {
    pub info: ComponentInfo,
    pub menu_group: MenuGroup,
    pub main_menu: MainMenuCommands,
    pub commandline: CommandLineDispatcher,
}

impl ComponentServices {
    /// Wires every service against one playlist and a caller-supplied random source.
    pub fn with_random(
        config: &ComponentConfig,
        playlist: Arc<dyn PlaylistService>,
        random: RandomIndexSource,
    ) -> Self {
        let info = ComponentInfo::new(&config.name);
        let menu_group = MenuGroup::play_track(&config.name);
        let main_menu =
            MainMenuCommands::new(&config.name, config.revision, playlist.clone(), random);

        let mut commandline = CommandLineDispatcher::new();
        commandline.register(Box::new(PlayTrackCommandLine::new(playlist)));

        info!(
            "{} registered: {} menu commands ({:?}) under '{}'",
            info.display_line(),
            main_menu.count(),
            config.revision,
            menu_group.parent.label()
        );

        Self {
            info,
            menu_group,
            main_menu,
            commandline,
        }
    }

    /// Same as [`ComponentServices::with_random`] with an entropy-seeded source.
    pub fn new(config: &ComponentConfig, playlist: Arc<dyn PlaylistService>) -> Result<Self, String> {
        let random = RandomIndexSource::from_entropy()?;
        Ok(Self::with_random(config, playlist, random))
    }
}
