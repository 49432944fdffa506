// ABOUTME: Panel layout for fixed-width dashboard grids.
// ABOUTME: Turns relative panel widths into absolute positions and stacks groups vertically.

mod error;
mod group;
mod tree;
mod width;

pub use error::LayoutError;
pub use group::{PanelGroup, PanelGroupBuilder};
pub use tree::{Node, PanelPositioning};
pub use width::allocate_widths;
