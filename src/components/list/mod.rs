mod list;
mod view;
mod viewport;

pub use list::{List, Props as ListProps};
