use std::{
    fs::{self, File},
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{cmd::recipe::OutputFormat, GlobalArgs, APP_NAME, UTF8_PATH_PANIC};

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output format of `recipe` when none is given or inferred
    pub default_format: OutputFormat,
    /// Pretty print JSON output
    pub pretty: bool,
    /// Reject vegetables outside the known list
    pub strict_vegetables: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Human,
            pretty: false,
            strict_vegetables: false,
        }
    }
}

impl Config {
    pub fn read(path: &Utf8Path) -> Result<Self> {
        tracing::debug!("Loading config from {path}");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file: '{path}'"))?;
        let config = toml::from_str(&content).context("Bad TOML data")?;
        Ok(config)
    }

    /// Loads the global config, creating it with the defaults if missing
    pub fn read_global() -> Result<Self> {
        global_load(CONFIG_FILE, true)
    }

    pub fn override_with_args(&mut self, args: &GlobalArgs) {
        if args.strict_vegetables {
            self.strict_vegetables = true;
        }
    }
}

pub fn global_file_path(name: &str) -> Result<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Could not determine home directory path")?;
    let config = Utf8Path::from_path(dirs.config_dir()).expect(UTF8_PATH_PANIC);
    let path = config.join(name);
    Ok(path)
}

pub fn global_load<T: DeserializeOwned + Serialize + Default>(
    name: &str,
    create: bool,
) -> Result<T> {
    let path = global_file_path(name)?;
    match File::open(&path) {
        Ok(mut f) => {
            let mut content = String::new();
            f.read_to_string(&mut content)?;
            toml::from_str(&content).context("Bad TOML data")
        }
        Err(e) if create && e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("Creating default config at {path}");
            let val = T::default();
            store_at_path(&path, &val)?;
            Ok(val)
        }
        Err(e) => Err(e).context("Failed to load config file"),
    }
}

pub fn store_at_path<T: Serialize>(path: impl AsRef<Path>, val: T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let toml_str = toml::to_string_pretty(&val)?;
    fs::write(path, toml_str)?;
    Ok(())
}
