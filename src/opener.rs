//! Opening files with the default application of the desktop.
use std::io::Error as IOError;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

/// Return the program used to open files on this platform, and the arguments that come before
/// the path.
#[cfg(target_os = "macos")]
pub fn open_command() -> (&'static str, &'static [&'static str]) {
    ("open", &[])
}

/// Return the program used to open files on this platform, and the arguments that come before
/// the path.
#[cfg(target_os = "windows")]
pub fn open_command() -> (&'static str, &'static [&'static str]) {
    // `start` is built into the shell.
    ("cmd", &["/C", "start", ""])
}

/// Return the program used to open files on this platform, and the arguments that come before
/// the path.
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn open_command() -> (&'static str, &'static [&'static str]) {
    ("start", &[])
}

/// Return the program used to open files on this platform, and the arguments that come before
/// the path.
#[cfg(target_os = "linux")]
pub fn open_command() -> (&'static str, &'static [&'static str]) {
    ("xdg-open", &[])
}

/// Open `path` with the default application without waiting for it to exit.
pub fn open(path: &Path) -> Result<(), IOError> {
    let (program, arguments) = open_command();

    #[cfg(feature = "logging")]
    log::info!("Opening \"{}\" with {}...", path.display(), program);

    let mut child = Command::new(program)
        .args(arguments)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Reap the child so that it does not linger as a zombie.
    thread::Builder::new()
        .name("opener".to_string())
        .spawn(move || {
            #[allow(unused_variables)]
            let status = child.wait();
            #[cfg(feature = "logging")]
            match status {
                Ok(status) if !status.success() => log::warn!("The opener exited with {}.", status),
                Err(error) => log::warn!("Failed to wait on the opener: {}", error),
                _ => {}
            }
        })?;

    Ok(())
}
