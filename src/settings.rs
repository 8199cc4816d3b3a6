use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        let serialized = Config::builder()
            .add_source(File::with_name(path))
            .build();

        match serialized {
            Ok(res) => res.try_deserialize(),
            Err(_) => {
                println!(
                    "There was an error reading the configuration file, or the configuration file was not found. Reverting to default configuration and overwriting previous configuration file."
                );

                let mut file = OpenOptions::new()
                    .read(true)
                    .write(true)
                    .create(true)
                    .open(path)
                    .unwrap();

                let default = Settings::default();

                let pretty_default = toml::ser::to_string_pretty(&default).unwrap();

                file.write_all(pretty_default.as_bytes()).unwrap();

                Ok(default)
            }
        }
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8080,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            static_directory: "static".to_owned(),
            server: Server::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub static_directory: String,
    pub server: Server,
}
