/*!
Contains functionality for representing styled text, manipulating it, and rendering it to a
terminal screen.
*/
mod renderer;
pub use renderer::Renderer;

mod yarn;
pub use yarn::{cell_width, Style, Yarn};

mod fabric;
pub use fabric::Fabric;

mod flex;
pub use flex::FlexRow;

mod location;
pub use location::Location;

mod size;
pub use size::Size;

mod zone;
pub use zone::Zone;
