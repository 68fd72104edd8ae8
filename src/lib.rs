//! "Play track N" commands for the active playlist of a media player host.
//!
//! The host enumerates [`main_menu::MainMenuCommands`] for its menu and feeds
//! startup tokens to [`commandline::CommandLineDispatcher`]. Both act on the
//! host's playlist through [`playlist::PlaylistService`].

pub mod command_id;
pub mod commandline;
pub mod component;
pub mod config;
pub mod main_menu;
pub mod playlist;
pub mod random_pick;
pub mod resolver;
pub mod services;
pub mod slot;

pub use commandline::{CommandLineHandler, TokenResult};
pub use main_menu::{CommandDisplay, MainMenuCommands};
pub use playlist::PlaylistService;
pub use slot::{Revision, Slot};
