use crate::config::config_dir_path;
use crate::error::GameResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// A toml config file under the config directory.
///
/// Missing files are created from `default_config`, unreadable ones are
/// copied to `<name>.toml.bak` and replaced by the default.
pub struct ServiceConfig<T> {
    path: PathBuf,
    service_name: &'static str,
    default_config: &'static [u8],
    _mark: PhantomData<T>,
}

impl<T> ServiceConfig<T>
where
    for<'a> T: Serialize + Deserialize<'a>,
    T: Default,
{
    pub fn new(name: &'static str, default: &'static [u8]) -> Self {
        Self::with_dir(config_dir_path(), name, default)
    }

    pub fn with_dir<P: AsRef<Path>>(dir: P, name: &'static str, default: &'static [u8]) -> Self {
        Self {
            path: dir.as_ref().join(format!("{name}.toml")),
            default_config: default,
            service_name: name,
            _mark: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> T {
        if !self.path.is_file() {
            return self.write_default();
        }

        match self.load() {
            Ok(data) => data,
            Err(e) => {
                error!("读取配置文件({:?})失败: {}", self.path, e);
                let _ = fs::copy(&self.path, self.backup_path());
                self.write_default()
            }
        }
    }

    fn load(&self) -> GameResult<T> {
        let file = fs::read(&self.path)?;
        Ok(toml::from_slice(&file)?)
    }

    fn backup_path(&self) -> PathBuf {
        let mut path = self.path.clone();
        path.pop();
        let mut name = self.service_name.to_owned();
        name.push_str(".toml.bak");
        path.push(name);
        path
    }

    fn write_default(&self) -> T {
        let default = T::default();
        if let Some(dir) = self.path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if let Err(e) = fs::write(&self.path, self.default_config) {
            warn!("无法写入默认配置({:?}): {}", self.path, e);
        }
        default
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceConfig;
    use crate::config::game::{self, GameConfig};
    use std::fs;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "number_guesser_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_is_created_with_default() {
        let dir = temp_dir("missing");
        let service = ServiceConfig::<GameConfig>::with_dir(&dir, "game", game::DEFAULT_CONFIG);

        let config = service.read();
        assert_eq!(config, GameConfig::default());
        assert_eq!(fs::read(service.path()).unwrap(), game::DEFAULT_CONFIG);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn existing_file_is_read() {
        let dir = temp_dir("existing");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("game.toml"), "tries = 5\ncolor = false\n").unwrap();

        let config = ServiceConfig::<GameConfig>::with_dir(&dir, "game", game::DEFAULT_CONFIG).read();
        assert_eq!(config.tries, 5);
        assert!(!config.color);
        assert_eq!(config.ranges, GameConfig::default().ranges);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn broken_file_is_backed_up() {
        let dir = temp_dir("broken");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("game.toml"), "tries = \"many\"").unwrap();

        let service = ServiceConfig::<GameConfig>::with_dir(&dir, "game", game::DEFAULT_CONFIG);
        assert_eq!(service.read(), GameConfig::default());
        assert_eq!(
            fs::read_to_string(dir.join("game.toml.bak")).unwrap(),
            "tries = \"many\""
        );
        assert_eq!(fs::read(service.path()).unwrap(), game::DEFAULT_CONFIG);

        let _ = fs::remove_dir_all(dir);
    }
}
