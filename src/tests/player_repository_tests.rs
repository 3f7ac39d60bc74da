#[cfg(test)]
mod tests {
    use crate::{
        errors::{AppError, PlayerError},
        providers::{
            kv::{key::player_list_key, player_repository::PlayerRepository},
            memory::store::MemoryStore,
            player_reader::PlayerReader,
            player_writer::PlayerWriter,
            store::KeyValueStore,
        },
        shapes::player::PlayerEntry,
    };
    use std::sync::Arc;

    fn repository() -> (Arc<MemoryStore>, PlayerRepository<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (Arc::clone(&store), PlayerRepository::new(store))
    }

    async fn add(players: &PlayerRepository<MemoryStore>, name: &str, team: &str, group: &str) {
        players
            .add_by_group(PlayerEntry::new(name, team), group)
            .await
            .expect("expected a new player");
    }

    #[tokio::test]
    async fn unknown_group_has_no_players() {
        let (_, players) = repository();
        assert!(players
            .get_by_group_and_team("G1", "Time A")
            .await
            .expect("expected players")
            .is_empty());
    }

    #[tokio::test]
    async fn duplicates_are_checked_per_team() {
        let (_, players) = repository();
        add(&players, "Ana", "Time A", "G1").await;
        let err = players
            .add_by_group(PlayerEntry::new("Ana", "Time A"), "G1")
            .await
            .expect_err("expected a duplicate");
        assert!(matches!(
            err,
            AppError::Player(PlayerError::AlreadyExists { ref name, ref team, ref group })
                if name == "Ana" && team == "Time A" && group == "G1"
        ));
        assert!(err.is_duplicate());
        add(&players, "Ana", "Time B", "G1").await;
        add(&players, "Ana", "Time A", "G2").await;
        assert_eq!(players.get_by_group("G1").await.expect("expected players").len(), 2);
    }

    #[tokio::test]
    async fn team_filter_preserves_insertion_order() {
        let (_, players) = repository();
        add(&players, "Zeca", "Time A", "G1").await;
        add(&players, "Bia", "Time B", "G1").await;
        add(&players, "Ana", "Time A", "G1").await;
        add(&players, "Caio", "Time B", "G1").await;
        add(&players, "Duda", "Time A", "G1").await;
        assert_eq!(
            players
                .get_by_group_and_team("G1", "Time A")
                .await
                .expect("expected players"),
            vec![
                PlayerEntry::new("Zeca", "Time A"),
                PlayerEntry::new("Ana", "Time A"),
                PlayerEntry::new("Duda", "Time A"),
            ]
        );
        assert!(players
            .get_by_group_and_team("G1", "Time C")
            .await
            .expect("expected players")
            .is_empty());
    }

    #[tokio::test]
    async fn remove_drops_every_team_entry_with_that_name() {
        let (_, players) = repository();
        add(&players, "Ana", "Time A", "G1").await;
        add(&players, "Bia", "Time A", "G1").await;
        add(&players, "Ana", "Time B", "G1").await;
        add(&players, "Ana", "Time A", "G2").await;

        players
            .remove_by_group("Ana", "G1")
            .await
            .expect("expected a removal");
        assert_eq!(
            players.get_by_group("G1").await.expect("expected players"),
            vec![PlayerEntry::new("Bia", "Time A")]
        );
        players
            .remove_by_group("Ana", "G1")
            .await
            .expect("expected a silent no-op");
        assert_eq!(
            players.get_by_group("G2").await.expect("expected players"),
            vec![PlayerEntry::new("Ana", "Time A")]
        );
    }

    #[tokio::test]
    async fn remove_without_match_does_not_write() {
        let (store, players) = repository();
        players
            .remove_by_group("Ana", "G1")
            .await
            .expect("expected a silent no-op");
        assert!(store.keys().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_player_records_are_skipped() {
        let (store, players) = repository();
        store
            .set(
                &player_list_key("G1"),
                br#"[{"name":"Ana","team":"Time A"},{"team":"Time A"},{"name":"Bia","team":"Time A"}]"#
                    .to_vec(),
            )
            .await
            .expect("expected a write");
        assert_eq!(
            players
                .get_by_group_and_team("G1", "Time A")
                .await
                .expect("expected players"),
            vec![
                PlayerEntry::new("Ana", "Time A"),
                PlayerEntry::new("Bia", "Time A")
            ]
        );
        add(&players, "Caio", "Time A", "G1").await;
        assert_eq!(players.get_by_group("G1").await.expect("expected players").len(), 3);
    }
}
