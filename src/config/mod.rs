use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// User configuration, stored as YAML under the platform config directory.
///
/// These are the only fixed paths the tool knows about; core logic receives
/// them from here and never hard-codes a default on its own.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite database the sync command writes to.
    pub database: String,
    /// Default parent directory for newly provisioned study folders.
    pub destination_dir: String,
    /// Path of the template workbook copied into each new study folder.
    pub template_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            destination_dir: Self::studies_dir().to_string_lossy().to_string(),
            template_file: Self::template_file_path().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timestudy")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timestudy")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timestudy.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timestudy.sqlite")
    }

    /// Default parent directory for new study folders
    pub fn studies_dir() -> PathBuf {
        Self::config_dir().join("studies")
    }

    /// Default location of the template workbook
    pub fn template_file_path() -> PathBuf {
        Self::config_dir().join("template.xlsx")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file and the paths it points to.
    ///
    /// In test mode nothing is written outside the (overridden) database
    /// path, so test runs never touch the user's home directory.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            fs::create_dir_all(Self::studies_dir())?;

            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialize: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
