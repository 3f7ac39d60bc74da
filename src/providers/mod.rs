pub mod fs;
pub mod group_reader;
pub mod group_writer;
pub mod kv;
pub mod memory;
pub mod player_reader;
pub mod player_writer;
pub mod settings_reader;
pub mod store;
