mod config {
    use super::{GeneralConfig, ThemeConfig};

    use std::fmt::{Display, Formatter, Result as FormatResult};
    use std::fs::File;
    use std::io::{Error as IOError, ErrorKind as IOErrorKind};
    use std::path::{Path, PathBuf};

    use serde::Deserialize;
    use serde_yaml::Error as YamlParseError;

    lazy_static! {
        /// The file that configuration is loaded from when no other file is given. This is `None`
        /// if the home directory of the user cannot be determined.
        static ref DEFAULT_PATH: Option<PathBuf> = {
            dirs::home_dir().map(|mut path| {
                path.push(".fman-config.yaml");
                path
            })
        };
    }

    #[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
    #[serde(deny_unknown_fields)]
    pub struct Config {
        #[serde(default)]
        general: GeneralConfig,
        #[serde(default)]
        theme: ThemeConfig,
    }

    impl Config {
        /// Load the configuration.
        ///
        /// If `path` is given, the file must exist. Otherwise the default file is used if it
        /// exists and the default configuration if it does not.
        pub fn load(path: Option<&Path>) -> ConfigLoadResult {
            let (path, required): (PathBuf, bool) = match path {
                Some(path) => (path.to_path_buf(), true),
                None => match &*DEFAULT_PATH {
                    Some(path) => (path.clone(), false),
                    None => {
                        #[cfg(feature = "logging")]
                        log::warn!("Cannot determine the home directory, using the default configuration.");
                        return Ok(Config::default());
                    }
                },
            };

            let file: File = match File::open(&path) {
                Ok(file) => file,
                Err(error) => match error.kind() {
                    IOErrorKind::NotFound if !required => {
                        return Ok(Config::default());
                    }
                    IOErrorKind::NotFound => {
                        return Err(ConfigLoadError::DoesNotExist(path));
                    }
                    IOErrorKind::PermissionDenied => {
                        return Err(ConfigLoadError::PermissionDeniedError(path));
                    }
                    _ => {
                        return Err(ConfigLoadError::OtherFileReadError { path, error });
                    }
                },
            };

            match serde_yaml::from_reader(file) {
                Ok(config) => {
                    #[cfg(feature = "logging")]
                    log::info!("Loaded the configuration file {:?}.", path);
                    Ok(config)
                }
                Err(error) => Err(ConfigLoadError::ParseError { path, error }),
            }
        }

        /// Return the general configuration.
        pub fn general(&self) -> &GeneralConfig {
            &self.general
        }

        /// Return the theme configuration.
        pub fn theme(&self) -> &ThemeConfig {
            &self.theme
        }
    }

    pub type ConfigLoadResult = Result<Config, ConfigLoadError>;

    #[derive(Debug)]
    #[allow(clippy::enum_variant_names)]
    pub enum ConfigLoadError {
        DoesNotExist(PathBuf),
        PermissionDeniedError(PathBuf),
        OtherFileReadError {
            path: PathBuf,
            error: IOError,
        },
        ParseError {
            path: PathBuf,
            error: YamlParseError,
        },
    }

    impl Display for ConfigLoadError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
            match self {
                Self::DoesNotExist(path) => {
                    write!(
                        f,
                        "The configuration file \"{}\" does not exist.",
                        path.display()
                    )
                }
                Self::PermissionDeniedError(path) => {
                    write!(
                        f,
                        "Failed to load the configuration file \"{}\" because permission was denied.",
                        path.display()
                    )
                }
                Self::OtherFileReadError { path, error } => {
                    write!(
                        f,
                        "Failed to load the configuration file \"{}\" because of an IO error: {}",
                        path.display(),
                        error
                    )
                }
                Self::ParseError { path, error } => {
                    write!(
                        f,
                        "Failed to parse the configuration file \"{}\": {}",
                        path.display(),
                        error
                    )
                }
            }
        }
    }
}
pub use config::{Config, ConfigLoadError};

mod general {
    use std::time::Duration;

    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
    #[serde(default, deny_unknown_fields)]
    pub struct GeneralConfig {
        /// Whether hidden entries are shown when starting.
        show_hidden: bool,

        /// The longest time between two clicks that still counts as a double click.
        click_delay_ms: u64,

        /// How long a key press is remembered for two key sequences such as `gg`.
        key_timeout_ms: u64,
    }

    impl Default for GeneralConfig {
        fn default() -> Self {
            Self {
                show_hidden: false,
                click_delay_ms: 500,
                key_timeout_ms: 1000,
            }
        }
    }

    impl GeneralConfig {
        pub fn show_hidden(&self) -> bool {
            self.show_hidden
        }

        pub fn click_delay(&self) -> Duration {
            Duration::from_millis(self.click_delay_ms)
        }

        pub fn key_timeout(&self) -> Duration {
            Duration::from_millis(self.key_timeout_ms)
        }
    }
}
pub use general::GeneralConfig;

mod theme {
    use crate::color::{ConfigColor, Theme};

    use crossterm::style::Color;
    use serde::Deserialize;

    /// Overrides for the colors of the default theme.
    #[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
    #[serde(default, deny_unknown_fields)]
    pub struct ThemeConfig {
        selected_foreground: Option<ConfigColor>,
        selected_background: Option<ConfigColor>,
        even_row_background: Option<ConfigColor>,
        folder: Option<ConfigColor>,
        hidden_folder: Option<ConfigColor>,
        hidden_file: Option<ConfigColor>,
        text: Option<ConfigColor>,
        bar_foreground: Option<ConfigColor>,
        bar_background: Option<ConfigColor>,
    }

    impl From<&ThemeConfig> for Theme {
        fn from(config: &ThemeConfig) -> Self {
            let default = Theme::default();
            let pick = |color: Option<ConfigColor>, fallback: Color| color.map_or(fallback, Color::from);
            Theme {
                selected_foreground: pick(config.selected_foreground, default.selected_foreground),
                selected_background: pick(config.selected_background, default.selected_background),
                even_row_background: pick(config.even_row_background, default.even_row_background),
                folder: pick(config.folder, default.folder),
                hidden_folder: pick(config.hidden_folder, default.hidden_folder),
                hidden_file: pick(config.hidden_file, default.hidden_file),
                text: pick(config.text, default.text),
                bar_foreground: pick(config.bar_foreground, default.bar_foreground),
                bar_background: pick(config.bar_background, default.bar_background),
            }
        }
    }
}
pub use theme::ThemeConfig;
