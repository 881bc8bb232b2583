use std::path::Path;

pub mod game;
pub mod log;
pub mod service;

const CONFIG_PATH: &str = "config";

pub fn config_dir_path() -> &'static Path {
    Path::new(CONFIG_PATH)
}
