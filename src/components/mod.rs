mod fman;
mod list;
mod path_bar;
mod status_bar;

pub use fman::{Event as FmanEvent, Fman, Props as FmanProps};
pub use list::{List, ListProps};
pub use path_bar::{Event as PathBarEvent, PathBar, Props as PathBarProps};
pub use status_bar::{Event as StatusBarEvent, StatusBar};
