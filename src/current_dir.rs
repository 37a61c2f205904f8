/*!
This module contains helpers for determining the directory to start browsing in.
*/
use std::env;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::io::Error as IOError;
use std::path::{Component, Path, PathBuf};

/// Return the current directory.
///
/// If the environment variable `PWD` is set and it is an absolute path, then return that.
/// Otherwise, use the Rust standard library function for getting the current directory.
///
/// NOTE: On Linux, the Rust standard library function calls `getcwd()` which canonicalizes the
/// path by resolving dots, dot-dots, and symbolic links. Prefer `PWD` so that symlinks the user
/// navigated through are kept.
pub fn current_dir() -> CurrentDirResult {
    if let Ok(pwd) = env::var("PWD") {
        let pwd = PathBuf::from(pwd);
        if pwd.is_absolute() && pwd.is_dir() {
            return Ok(pwd);
        }
    }
    env::current_dir().map_err(CurrentDirError)
}

/// Return `directory` as an absolute path, resolving it against the current directory.
///
/// With no directory, the current directory itself is returned.
pub fn absolute(directory: Option<&Path>) -> CurrentDirResult {
    match directory {
        Some(directory) if directory.is_absolute() => Ok(directory.to_path_buf()),
        Some(directory) => Ok(join(&current_dir()?, directory)),
        None => current_dir(),
    }
}

/// Join `relative` onto `base`, dropping `.` components and resolving `..` lexically.
fn join(base: &Path, relative: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    for component in relative.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                path.pop();
            }
            component => path.push(component),
        }
    }
    path
}

pub type CurrentDirResult = Result<PathBuf, CurrentDirError>;

#[derive(Debug)]
pub struct CurrentDirError(IOError);

impl Display for CurrentDirError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "Failed to determine the current directory: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case("/home/user", ".", "/home/user"; "the current directory")]
    #[test_case("/home/user", "./src", "/home/user/src"; "a dotted relative directory")]
    #[test_case("/home/user", "a/b", "/home/user/a/b"; "a nested relative directory")]
    #[test_case("/home/user", "../other", "/home/other"; "a parent directory")]
    #[test_case("/", "..", "/"; "the parent of the root")]
    fn test_join(base: &str, relative: &str, expected: &str) {
        assert_eq!(join(Path::new(base), Path::new(relative)), PathBuf::from(expected));
    }

    #[test]
    fn test_absolute_keeps_absolute_directories() {
        let result = absolute(Some(Path::new("/tmp"))).unwrap();

        assert_eq!(result, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_absolute_without_directory_is_absolute() {
        let result = absolute(None).unwrap();

        assert!(result.is_absolute());
    }
}
