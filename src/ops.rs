use crate::{
    errors::AppError,
    logging::logger::log_error,
    providers::{
        group_reader::GroupReader, group_writer::GroupWriter, player_reader::PlayerReader,
        player_writer::PlayerWriter,
    },
    shapes::{player::PlayerEntry, settings::Settings},
};

fn required(value: &str, what: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(format!("{} name cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

fn known_team(settings: &Settings, team: &str) -> Result<(), AppError> {
    if settings.is_known_team(team) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "unknown team '{}', expected one of: {}",
            team,
            settings.teams.join(", ")
        )))
    }
}

// storage faults are logged once here, business errors are left to the caller
fn logged<T>(result: Result<T, AppError>, action: &str) -> Result<T, AppError> {
    if let Err(e) = &result {
        if e.is_storage() {
            log_error(&format!("{} failed: {}", action, e));
        }
    }
    result
}

pub async fn list_groups<G: GroupReader + ?Sized>(groups: &G) -> Result<Vec<String>, AppError> {
    logged(groups.get_all().await, "listing groups")
}

/// Creates a group from user input; the stored name is the trimmed one.
/// Every other operation trims its group argument the same way.
pub async fn create_group<G: GroupWriter + ?Sized>(
    groups: &G,
    name: &str,
) -> Result<String, AppError> {
    let name = required(name, "group")?;
    logged(groups.create(&name).await, "creating group")?;
    Ok(name)
}

pub async fn remove_group<G: GroupWriter + ?Sized>(groups: &G, name: &str) -> Result<(), AppError> {
    let name = required(name, "group")?;
    logged(groups.remove_by_name(&name).await, "removing group")
}

pub async fn add_player<P: PlayerWriter + ?Sized>(
    players: &P,
    settings: &Settings,
    name: &str,
    team: &str,
    group: &str,
) -> Result<PlayerEntry, AppError> {
    let name = required(name, "player")?;
    let group = required(group, "group")?;
    known_team(settings, team)?;
    let player = PlayerEntry::new(name, team);
    logged(
        players.add_by_group(player.clone(), &group).await,
        "adding player",
    )?;
    Ok(player)
}

pub async fn list_players<P: PlayerReader + ?Sized>(
    players: &P,
    settings: &Settings,
    group: &str,
    team: &str,
) -> Result<Vec<PlayerEntry>, AppError> {
    let group = required(group, "group")?;
    known_team(settings, team)?;
    logged(
        players.get_by_group_and_team(&group, team).await,
        "listing players",
    )
}

pub async fn remove_player<P: PlayerWriter + ?Sized>(
    players: &P,
    name: &str,
    group: &str,
) -> Result<(), AppError> {
    let name = required(name, "player")?;
    let group = required(group, "group")?;
    logged(
        players.remove_by_group(&name, &group).await,
        "removing player",
    )
}
