use crate::constants::{GROUP_COLLECTION, KEY_SEPARATOR, PLAYER_COLLECTION};

pub fn group_index_key() -> String {
    GROUP_COLLECTION.to_string()
}

/// Key of the player list owned by `group`.
///
/// The group name is escaped so that the separator (and the escape character
/// itself) can never appear raw after the prefix: distinct group names always
/// yield distinct keys, none of which equals the group index key.
pub fn player_list_key(group: &str) -> String {
    format!(
        "{}{}{}",
        PLAYER_COLLECTION,
        KEY_SEPARATOR,
        escape_segment(group)
    )
}

fn escape_segment(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            KEY_SEPARATOR => escaped.push_str("%2F"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn player_key_is_prefixed_by_collection() {
        assert_eq!(player_list_key("G1"), "@teamroster:players/G1");
    }

    #[test]
    fn separator_and_escape_are_escaped() {
        assert_eq!(player_list_key("a/b"), "@teamroster:players/a%2Fb");
        assert_eq!(player_list_key("100%"), "@teamroster:players/100%25");
    }

    #[test]
    fn distinct_groups_get_distinct_keys() {
        let groups = [
            "a/b", "a%2Fb", "a", "b", "a%b", "", "/", "%", "%25", "groups", "Turma 1",
        ];
        let keys: HashSet<String> = groups.iter().map(|g| player_list_key(g)).collect();
        assert_eq!(keys.len(), groups.len());
        assert!(!keys.contains(&group_index_key()));
    }
}
