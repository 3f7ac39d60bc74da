pub mod group;
pub mod player;
pub mod settings;
