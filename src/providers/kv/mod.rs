pub mod codec;
pub mod group_repository;
pub mod key;
pub mod player_repository;
