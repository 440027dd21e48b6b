//! Interactive shell for the handle store.
//!
//! A line-oriented loop: prompt with `> `, dispatch `list`, `add`,
//! `update`, `save`, and `exit`, and pretty-print the store as a
//! fixed-width table. The shell owns everything the store deliberately
//! doesn't: the file path for `save`, the unsaved-changes flag that gates
//! `exit`, and the input validation (length bounds, no commas) that keeps
//! written lines unambiguous for the permissive loader.

mod command;
mod repl;
mod table;

pub use command::Command;
pub use repl::Repl;
pub use table::render_table;
