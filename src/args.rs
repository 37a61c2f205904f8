use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "fman", author, version, about)]
pub struct Args {
    /// Directory to start browsing in
    directory: Option<PathBuf>,

    /// Configuration file to use instead of ~/.fman-config.yaml
    #[clap(short, long, display_order = 0)]
    config: Option<PathBuf>,

    /// File to write logs to
    #[cfg(feature = "logging")]
    #[clap(long = "log-file", display_order = 1)]
    log_file_path: Option<PathBuf>,

    /// Log specification, such as "debug" or "info,fman::entry=trace"
    #[cfg(feature = "logging")]
    #[clap(long = "log-level", display_order = 2, default_value = "info")]
    log_spec: String,
}

impl Args {
    pub fn directory(&self) -> Option<&PathBuf> {
        self.directory.as_ref()
    }

    pub fn config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    #[cfg(feature = "logging")]
    pub fn log_file_path(&self) -> Option<&PathBuf> {
        self.log_file_path.as_ref()
    }

    #[cfg(feature = "logging")]
    pub fn log_spec(&self) -> &str {
        &self.log_spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case(&["fman"], None, None; "no arguments")]
    #[test_case(&["fman", "src"], Some("src"), None; "directory")]
    #[test_case(&["fman", "--config", "a.yaml", "/tmp"], Some("/tmp"), Some("a.yaml"); "config and directory")]
    #[test_case(&["fman", "-c", "a.yaml"], None, Some("a.yaml"); "short config")]
    fn test_parse(arguments: &[&str], directory: Option<&str>, config: Option<&str>) {
        let args = Args::try_parse_from(arguments).unwrap();

        assert_eq!(args.directory(), directory.map(PathBuf::from).as_ref());
        assert_eq!(args.config(), config.map(PathBuf::from).as_ref());
    }

    #[test]
    fn test_too_many_directories() {
        assert!(Args::try_parse_from(["fman", "a", "b"]).is_err());
    }

    #[cfg(feature = "logging")]
    #[test]
    fn test_default_log_spec() {
        let args = Args::try_parse_from(["fman"]).unwrap();

        assert_eq!(args.log_spec(), "info");
        assert_eq!(args.log_file_path(), None);
    }
}
