//! Core types: document blocks, font size, view state, status statistics

mod block;
mod font_size;
mod stats;
mod view_state;

pub use block::{parse_blocks, Block, ListItem};
pub use font_size::FontSize;
pub use stats::{DocumentStats, ENCODING_LABEL};
pub use view_state::{PaneLayout, ViewState};
