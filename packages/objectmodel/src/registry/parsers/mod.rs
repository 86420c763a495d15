//! Built-in parsers for card elements and actions.

mod actions;
mod base;
mod fact_set;
mod text_block;

pub use actions::*;
pub use base::{parse_action_base, parse_element_base};
pub use fact_set::*;
pub use text_block::*;
