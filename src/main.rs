use std::{error::Error, process::ExitCode, sync::Arc};
use teamroster::{
    errors::AppError,
    logging::logger::{init_logger, log_info},
    ops::{add_player, create_group, list_groups, list_players, remove_group, remove_player},
    providers::{
        fs::{
            path::{get_base_path, get_log_file_path},
            settings_reader::FileSystemSettingsReader,
            store::FileSystemStore,
        },
        kv::{group_repository::GroupRepository, player_repository::PlayerRepository},
        settings_reader::SettingsReader,
    },
    shapes::settings::{current_settings, init_settings, Settings},
};

const USAGE: &str = "usage:
  teamroster group list
  teamroster group create <name>
  teamroster group remove <name>
  teamroster player list <group> [team]
  teamroster player add <group> <team> <name>
  teamroster player remove <group> <name>
  teamroster --version";

enum Command {
    GroupList,
    GroupCreate(String),
    GroupRemove(String),
    PlayerList { group: String, team: Option<String> },
    PlayerAdd { group: String, team: String, name: String },
    PlayerRemove { group: String, name: String },
}

// recognized only as the first argument
fn asks_for_version(args: &[String]) -> bool {
    matches!(args.first().map(String::as_str), Some("--version" | "-V"))
}

fn parse(args: &[String]) -> Option<Command> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let command = match args.as_slice() {
        ["group", "list"] => Command::GroupList,
        ["group", "create", name] => Command::GroupCreate(name.to_string()),
        ["group", "remove", name] => Command::GroupRemove(name.to_string()),
        ["player", "list", group] => Command::PlayerList {
            group: group.to_string(),
            team: None,
        },
        ["player", "list", group, team] => Command::PlayerList {
            group: group.to_string(),
            team: Some(team.to_string()),
        },
        ["player", "add", group, team, name] => Command::PlayerAdd {
            group: group.to_string(),
            team: team.to_string(),
            name: name.to_string(),
        },
        ["player", "remove", group, name] => Command::PlayerRemove {
            group: group.to_string(),
            name: name.to_string(),
        },
        _ => return None,
    };
    Some(command)
}

async fn run(
    command: Command,
    settings: &Settings,
    groups: &GroupRepository<FileSystemStore>,
    players: &PlayerRepository<FileSystemStore>,
) -> Result<(), AppError> {
    match command {
        Command::GroupList => {
            for group in list_groups(groups).await? {
                println!("{}", group);
            }
        }
        Command::GroupCreate(name) => {
            let name = create_group(groups, &name).await?;
            println!("group '{}' created", name);
        }
        Command::GroupRemove(name) => {
            remove_group(groups, &name).await?;
            println!("group '{}' removed", name);
        }
        Command::PlayerList { group, team } => {
            let team = match team.as_deref().or(settings.default_team()) {
                Some(team) => team.to_string(),
                None => return Err(AppError::InvalidInput("no team configured".to_string())),
            };
            let found = list_players(players, settings, &group, &team).await?;
            for player in &found {
                println!("{}", player.name);
            }
            println!("{} player(s) in '{}' / '{}'", found.len(), group, team);
        }
        Command::PlayerAdd { group, team, name } => {
            let player = add_player(players, settings, &name, &team, &group).await?;
            println!("player {} added to '{}'", player, group);
        }
        Command::PlayerRemove { group, name } => {
            remove_player(players, &name, &group).await?;
            println!("player '{}' removed from '{}'", name, group);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if asks_for_version(&args) {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }
    let Some(command) = parse(&args) else {
        eprintln!("{}", USAGE);
        return Ok(ExitCode::from(2));
    };
    let base_dir = get_base_path()?;

    // default level until the config has been read
    init_logger(get_log_file_path(&base_dir), Settings::default().log_level);
    let settings = FileSystemSettingsReader::new(&base_dir)
        .read_or_default()
        .await;
    init_logger(get_log_file_path(&base_dir), settings.log_level);
    init_settings(settings);
    log_info(&format!("running '{}'", args.join(" ")));

    let store = Arc::new(FileSystemStore::new(&base_dir));
    let groups = GroupRepository::new(Arc::clone(&store));
    let players = PlayerRepository::new(store);
    match run(command, &current_settings(), &groups, &players).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_storage() => {
            eprintln!("could not complete the operation, see the log for details");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
