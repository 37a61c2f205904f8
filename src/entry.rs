/*!
Directory entries and the filesystem they are read from.
*/
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::fs::{self, Metadata};
use std::io::{Error as IOError, ErrorKind as IOErrorKind};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use time::{macros::format_description, OffsetDateTime, UtcOffset};
use typed_builder::TypedBuilder;

/// One row of a directory listing.
#[derive(TypedBuilder, Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    #[builder(setter(into))]
    name: String,

    #[builder(default)]
    is_dir: bool,

    /// The absolute path the entry links to (only present for symlinks).
    #[builder(default, setter(strip_option))]
    symlink_target: Option<PathBuf>,

    /// The link text as stored in the symlink.
    #[builder(default, setter(strip_option))]
    symlink_display_name: Option<String>,

    #[builder(default, setter(into))]
    size: String,

    #[builder(default, setter(into))]
    modify_time: String,
}

impl Entry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn symlink_target(&self) -> Option<&Path> {
        self.symlink_target.as_deref()
    }

    pub fn symlink_display_name(&self) -> Option<&str> {
        self.symlink_display_name.as_deref()
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn modify_time(&self) -> &str {
        &self.modify_time
    }

    pub fn is_symlink(&self) -> bool {
        self.symlink_target.is_some()
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Return the path the entry refers to when it is listed in `directory`.
    ///
    /// The symlink target takes precedence over joining the name onto the directory.
    pub fn full_path(&self, directory: &Path) -> PathBuf {
        match &self.symlink_target {
            Some(target) => target.clone(),
            None => directory.join(&self.name),
        }
    }
}

/// The filesystem the browser reads from.
pub trait Filesystem {
    /// Return the entries of `directory`, omitting hidden entries unless `show_hidden` is set.
    fn entries(&self, directory: &Path, show_hidden: bool) -> GetEntriesResult;

    /// Return the home directory of the user.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// The filesystem of the machine the browser runs on.
#[derive(Default, Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn entries(&self, directory: &Path, show_hidden: bool) -> GetEntriesResult {
        let read_dir = match fs::read_dir(directory) {
            Ok(read_dir) => read_dir,
            Err(error) => {
                let error = GetEntriesError::new(directory, error);
                #[cfg(feature = "logging")]
                log::warn!("{}", error);
                return Err(error);
            }
        };

        let offset: UtcOffset = local_offset();
        let mut entries: Vec<Entry> = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = match dir_entry {
                Ok(dir_entry) => dir_entry,
                Err(_error) => {
                    #[cfg(feature = "logging")]
                    log::debug!("Skipping an unreadable entry in {:?}: {}", directory, _error);
                    continue;
                }
            };

            let name: String = dir_entry.file_name().to_string_lossy().to_string();
            if name.is_empty() || (!show_hidden && name.starts_with('.')) {
                continue;
            }

            entries.push(read_entry(&dir_entry.path(), name, offset));
        }

        entries.sort_by(compare_entries);
        Ok(entries)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Build the entry for `path`, following it if it is a symlink.
fn read_entry(path: &Path, name: String, offset: UtcOffset) -> Entry {
    let link_metadata: Option<Metadata> = fs::symlink_metadata(path).ok();
    let is_symlink = link_metadata
        .as_ref()
        .map_or(false, |metadata| metadata.file_type().is_symlink());

    let mut symlink_target: Option<PathBuf> = None;
    let mut symlink_display_name: Option<String> = None;
    let mut metadata: Option<Metadata> = link_metadata;
    if is_symlink {
        symlink_display_name = fs::read_link(path)
            .ok()
            .map(|link| link.to_string_lossy().to_string());
        // A dangling link has no target and keeps the metadata of the link itself.
        if let (Ok(target), Ok(target_metadata)) = (fs::canonicalize(path), fs::metadata(path)) {
            symlink_target = Some(target);
            metadata = Some(target_metadata);
        }
    }

    let is_dir = metadata.as_ref().map_or(false, Metadata::is_dir);
    let size = match &metadata {
        Some(metadata) if !metadata.is_dir() => human_size(metadata.len()),
        _ => String::from("-"),
    };
    let modify_time = metadata
        .as_ref()
        .and_then(|metadata| metadata.modified().ok())
        .map_or_else(|| String::from("-"), |time| format_time(time, offset));

    Entry {
        name,
        is_dir,
        symlink_target,
        symlink_display_name,
        size,
        modify_time,
    }
}

/// Directories first, then by name ignoring case.
fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Return the local UTC offset, or UTC if it cannot be determined.
fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Format a modification time as `YYYY-MM-DD HH:MM`.
pub fn format_time(time: SystemTime, offset: UtcOffset) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    OffsetDateTime::from(time)
        .to_offset(offset)
        .format(&format)
        .unwrap_or_else(|_| String::from("-"))
}

/// Format a number of bytes using SI units (`"1.2 kB"`).
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

    if bytes < 10 {
        return format!("{} B", bytes);
    }

    let mut exponent: usize = 0;
    let mut divisor: u64 = 1;
    while exponent < UNITS.len() - 1 && bytes / divisor >= 1000 {
        divisor *= 1000;
        exponent += 1;
    }

    let value: f64 = bytes as f64 / divisor as f64;
    let value: f64 = (value * 10.0 + 0.5).floor() / 10.0;
    if value < 10.0 {
        format!("{:.1} {}", value, UNITS[exponent])
    } else {
        format!("{:.0} {}", value, UNITS[exponent])
    }
}

pub type GetEntriesResult = Result<Vec<Entry>, GetEntriesError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetEntriesError {
    DirectoryDoesNotExist(PathBuf),
    NotADirectory(PathBuf),
    PermissionDenied(PathBuf),
    OtherErrorReading(PathBuf),
}

impl GetEntriesError {
    fn new(directory: &Path, error: IOError) -> Self {
        let directory = directory.to_path_buf();
        match error.kind() {
            IOErrorKind::NotFound => Self::DirectoryDoesNotExist(directory),
            IOErrorKind::PermissionDenied => Self::PermissionDenied(directory),
            _ if directory.is_file() => Self::NotADirectory(directory),
            _ => Self::OtherErrorReading(directory),
        }
    }
}

impl Display for GetEntriesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Self::DirectoryDoesNotExist(path) => {
                write!(f, "The directory \"{}\" does not exist.", path.display())
            }
            Self::NotADirectory(path) => {
                write!(f, "\"{}\" is not a directory.", path.display())
            }
            Self::PermissionDenied(path) => {
                write!(f, "Permission denied for \"{}\".", path.display())
            }
            Self::OtherErrorReading(path) => {
                write!(
                    f,
                    "Failed to read the directory entries of \"{}\".",
                    path.display()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;
    use std::io::Write;
    use std::time::Duration;

    use tempfile::TempDir;
    use test_case::test_case;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(Entry::name).collect()
    }

    fn directory() -> TempDir {
        let directory = tempfile::tempdir().unwrap();
        fs::create_dir(directory.path().join("beta")).unwrap();
        fs::create_dir(directory.path().join(".config")).unwrap();
        File::create(directory.path().join("Alpha.txt"))
            .unwrap()
            .write_all(&[0; 1234])
            .unwrap();
        File::create(directory.path().join("zeta")).unwrap();
        File::create(directory.path().join(".hidden")).unwrap();
        directory
    }

    #[test_case(0, "0 B"; "nothing")]
    #[test_case(9, "9 B"; "less than ten bytes")]
    #[test_case(999, "999 B"; "the most bytes")]
    #[test_case(1000, "1.0 kB"; "one kilobyte")]
    #[test_case(1234, "1.2 kB"; "a fractional kilobyte")]
    #[test_case(12_345, "12 kB"; "tens of kilobytes")]
    #[test_case(3_400_000, "3.4 MB"; "megabytes")]
    fn test_human_size(bytes: u64, expected: &str) {
        assert_eq!(human_size(bytes), expected);
    }

    #[test]
    fn test_format_time() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(86_400 + 3_600 + 120);

        assert_eq!(format_time(time, UtcOffset::UTC), "1970-01-02 01:02");
    }

    #[test]
    fn test_entries_directories_first_and_hidden_omitted() {
        let directory = directory();

        let entries = LocalFilesystem.entries(directory.path(), false).unwrap();

        assert_eq!(names(&entries), vec!["beta", "Alpha.txt", "zeta"]);
        assert!(entries[0].is_dir());
        assert_eq!(entries[0].size(), "-");
        assert_eq!(entries[1].size(), "1.2 kB");
        assert!(!entries[1].is_symlink());
    }

    #[test]
    fn test_entries_show_hidden() {
        let directory = directory();

        let entries = LocalFilesystem.entries(directory.path(), true).unwrap();

        assert_eq!(
            names(&entries),
            vec![".config", "beta", ".hidden", "Alpha.txt", "zeta"]
        );
    }

    #[test]
    fn test_entries_of_missing_directory() {
        let directory = tempfile::tempdir().unwrap();
        let missing = directory.path().join("missing");

        let result = LocalFilesystem.entries(&missing, false);

        assert_eq!(result, Err(GetEntriesError::DirectoryDoesNotExist(missing)));
    }

    #[cfg(unix)]
    #[test]
    fn test_entries_follow_symlinks() {
        let directory = directory();
        std::os::unix::fs::symlink("beta", directory.path().join("link")).unwrap();
        std::os::unix::fs::symlink("nowhere", directory.path().join("dangling")).unwrap();

        let entries = LocalFilesystem.entries(directory.path(), false).unwrap();

        let link = entries.iter().find(|entry| entry.name() == "link").unwrap();
        assert!(link.is_dir());
        assert!(link.is_symlink());
        assert_eq!(link.symlink_display_name(), Some("beta"));
        assert_eq!(
            link.symlink_target(),
            Some(fs::canonicalize(directory.path().join("beta")).unwrap().as_path())
        );

        let dangling = entries
            .iter()
            .find(|entry| entry.name() == "dangling")
            .unwrap();
        assert!(!dangling.is_dir());
        assert!(!dangling.is_symlink());
        assert_eq!(dangling.symlink_display_name(), Some("nowhere"));
    }

    #[test_case(Entry::builder().name("a").build(), "/tmp/a"; "a plain entry")]
    #[test_case(
        Entry::builder().name("a").symlink_target(PathBuf::from("/etc")).build(),
        "/etc";
        "a symlink"
    )]
    fn test_full_path(entry: Entry, expected: &str) {
        assert_eq!(entry.full_path(Path::new("/tmp")), PathBuf::from(expected));
    }
}
