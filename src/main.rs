/*!
A terminal file browser.
*/
#![deny(missing_docs)]
#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]

#[macro_use]
extern crate lazy_static;

mod app;
mod args;
mod clipboard;
mod color;
mod command;
mod component;
mod components;
mod config;
mod current_dir;
mod entry;
#[cfg(feature = "logging")]
mod logging;
mod opener;
mod rendering;
mod string;

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
#[cfg(feature = "logging")]
use flexi_logger::LoggerHandle;

use crate::app::App;
use crate::args::Args;
use crate::color::Theme;
use crate::components::{Fman, FmanProps, ListProps};
use crate::config::Config;
use crate::entry::{Filesystem, LocalFilesystem};
#[cfg(feature = "logging")]
use crate::logging::{configure_logging, ConfigureLoggingResult};

fn main() {
    let args: Args = Args::parse();

    #[cfg(feature = "logging")]
    let _logger_handle: LoggerHandle;
    #[cfg(feature = "logging")]
    if let Some(log_file_path) = args.log_file_path() {
        let configure_logging_result: ConfigureLoggingResult =
            configure_logging(log_file_path.to_path_buf(), args.log_spec());
        _logger_handle = match configure_logging_result {
            Ok(_logger_handle) => _logger_handle,
            Err(error) => {
                println!("{}", error);
                exit(1);
            }
        }
    }

    let config: Config = match Config::load(args.config().map(PathBuf::as_path)) {
        Ok(config) => config,
        Err(error) => {
            println!("{}", error);
            exit(1);
        }
    };

    let directory: PathBuf = match current_dir::absolute(args.directory().map(PathBuf::as_path)) {
        Ok(directory) => directory,
        Err(error) => {
            println!("{}", error);
            exit(1);
        }
    };

    let filesystem = LocalFilesystem;
    let home: Option<PathBuf> = filesystem.home_dir();
    let theme: Theme = Theme::from(config.theme());

    let list_props: ListProps = ListProps::builder()
        .path(directory)
        .filesystem(Box::new(filesystem))
        .theme(theme)
        .general(config.general().clone())
        .build();
    let fman_props: FmanProps = FmanProps::builder()
        .list(list_props)
        .home(home)
        .theme(theme)
        .build();
    let mut root: Fman = match Fman::new(fman_props) {
        Ok(root) => root,
        Err(error) => {
            println!("{}", error);
            exit(1);
        }
    };

    let mut app: App = App::new();
    if let Err(error) = app.run(&mut root) {
        println!("{}", error);
        exit(1);
    }
}
