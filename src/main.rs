//! Minimal stand-in for the media player host.
//!
//! Usage: `play_track_host [--config=PATH] [--module=PATH] [--list] [--exec=INDEX|NAME|ID] [TOKEN]...`
//! Tokens not claimed by the component are reported and skipped.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};
use uuid::Uuid;

use play_track::component::validate_module_filename;
use play_track::config::{load_or_create, Config};
use play_track::playlist::Playlist;
use play_track::services::ComponentServices;
use play_track::{MainMenuCommands, Slot};

const CONFIG_FILE_NAME: &str = "play_track.toml";

#[derive(Debug, Default)]
struct HostArgs {
    config_file: Option<PathBuf>,
    module_path: Option<PathBuf>,
    list: bool,
    exec: Vec<String>,
    tokens: Vec<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<HostArgs, String> {
    let mut parsed = HostArgs::default();
    for arg in args {
        if let Some(path) = arg.strip_prefix("--config=") {
            parsed.config_file = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--module=") {
            parsed.module_path = Some(PathBuf::from(path));
        } else if arg == "--list" {
            parsed.list = true;
        } else if let Some(command) = arg.strip_prefix("--exec=") {
            if command.is_empty() {
                return Err("--exec needs a command index, name or identifier".to_string());
            }
            parsed.exec.push(command.to_string());
        } else {
            parsed.tokens.push(arg);
        }
    }
    Ok(parsed)
}

fn default_config_file() -> Result<PathBuf, String> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| "Could not determine config directory".to_string())?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

fn build_playlist(config: &Config) -> Playlist {
    let playlist = Playlist::from_paths(config.playlist.tracks.iter());
    playlist.set_focused_index(config.playlist.focused);
    playlist
}

/// Problem with the component module the host was asked to load, if any.
fn module_problem(module_path: Option<&Path>) -> Option<String> {
    validate_module_filename(module_path?).err()
}

/// Accepts a flat command index, a command identifier or one of the special command names.
fn resolve_exec_command(menu: &MainMenuCommands, command: &str) -> Option<u32> {
    if let Ok(index) = command.parse::<u32>() {
        return (index < menu.count()).then_some(index);
    }
    if let Ok(id) = Uuid::parse_str(command) {
        return menu.find_by_identifier(id);
    }
    let slot = match command.to_ascii_lowercase().as_str() {
        "last" => Slot::Last,
        "random" => Slot::Random,
        "focused" => Slot::Focused,
        _ => return None,
    };
    menu.revision().index_of(slot)
}

fn print_menu(menu: &MainMenuCommands) {
    println!("parent group {}", menu.parent());
    for command in menu.commands() {
        let display = menu.display(command.index);
        println!(
            "{:>2} {} {:<8} {}{}",
            command.index,
            command.id,
            display.name,
            command.description,
            if display.enabled { "" } else { " (disabled)" }
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Trace);
    clog.init();
    log::set_max_level(log::LevelFilter::Info);

    std::panic::set_hook(Box::new(|panic_info| {
        let current_thread = std::thread::current();
        let thread_name = current_thread.name().unwrap_or("unnamed");
        log::error!("panic in thread '{}': {}", thread_name, panic_info);
    }));

    let args = parse_args(std::env::args().skip(1))?;

    let config_file = match args.config_file.clone() {
        Some(path) => path,
        None => default_config_file()?,
    };
    let config = load_or_create(&config_file)?;
    log::set_max_level(config.logging.level.to_level_filter());

    if let Some(problem) = module_problem(args.module_path.as_deref()) {
        warn!("{}", problem);
    }

    let playlist = Arc::new(build_playlist(&config));
    let services = ComponentServices::new(&config.component, playlist.clone())?;
    info!(
        "Active playlist: {} items, focused={:?}",
        playlist.num_tracks(),
        config.playlist.focused
    );

    let unclaimed = services
        .commandline
        .dispatch_all(args.tokens.iter().map(String::as_str));
    for token in unclaimed {
        warn!("Unhandled command-line token: {}", token);
    }

    for command in &args.exec {
        match resolve_exec_command(&services.main_menu, command) {
            Some(index) => services.main_menu.execute(index),
            None => warn!(
                "Ignoring --exec={}: not one of the {} commands",
                command,
                services.main_menu.count()
            ),
        }
    }

    if args.list {
        print_menu(&services.main_menu);
    }

    match playlist.get_playing_track_index() {
        Some(index) => info!(
            "Now playing #{}: {}",
            index + 1,
            playlist
                .track_path(index)
                .map(|path| path.display().to_string())
                .unwrap_or_default()
        ),
        None => info!("Nothing was played"),
    }

    Ok(())
}
