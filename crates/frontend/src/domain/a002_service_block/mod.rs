//! Repeatable service blocks
//!
//! - block.rs: a single block (factory, cascading program select state)
//! - list.rs: ordered, append-only collection of blocks
//! - ui/: view model wiring blocks to the catalog, and the block views

mod block;
mod list;
pub mod ui;

pub use block::{ProgramOptions, ProgramRequest, ServiceBlock, ServiceBlockId};
pub use list::ServiceList;
