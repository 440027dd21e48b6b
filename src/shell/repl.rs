//! Interactive command loop.

use crate::shell::command::Command;
use crate::shell::table;
use crate::store::Store;
use crate::types::{Comment, Handle, Record, Timestamp};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::warn;

const PROMPT: &str = "> ";

/// Handles longer than this are rejected at the prompt — a tighter bound
/// than the record type itself enforces, so typos don't silently truncate.
const SHELL_HANDLE_MAX: usize = 20;

/// The interactive loop: owns the store for the session, the path `save`
/// writes to, and the unsaved-changes flag that gates `exit`.
///
/// Command errors are printed and never terminate the session; only `exit`
/// and end-of-input do.
pub struct Repl {
    store: Store,
    path: PathBuf,
    editor: DefaultEditor,
    unsaved_changes: bool,
}

impl Repl {
    pub fn new(store: Store, path: PathBuf) -> rustyline::Result<Self> {
        Ok(Self {
            store,
            path,
            editor: DefaultEditor::new()?,
            unsaved_changes: false,
        })
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> rustyline::Result<()> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let _ = self.editor.add_history_entry(&line);
                    if !self.handle_line(&line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => println!("^C"),
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error reading input: {err}");
                    break;
                }
            }
        }
        Ok(())
    }

    /// Returns `false` when the loop should stop.
    fn handle_line(&mut self, line: &str) -> bool {
        match Command::parse(line) {
            Command::List => print!("{}", table::render_table(&self.store)),
            Command::Add {
                handle,
                follower_count,
            } => self.add(&handle, follower_count),
            Command::Update {
                handle,
                follower_count,
            } => self.update(&handle, follower_count),
            Command::Save => self.save(),
            Command::Exit => return self.exit(),
            Command::Empty => {}
            Command::Invalid { usage } => {
                println!("Invalid input. Expected format: '{usage}'.");
            }
            Command::Unknown(_) => println!("Unknown command."),
        }
        true
    }

    fn add(&mut self, handle: &str, follower_count: u64) {
        if handle.chars().count() > SHELL_HANDLE_MAX {
            println!(
                "Invalid handle. The maximum length allowed is {SHELL_HANDLE_MAX} characters."
            );
            return;
        }
        if handle.contains(',') {
            println!("Error: Handle cannot contain commas.");
            return;
        }
        if self.store.find(handle).is_some() {
            println!("Error: Handle '{handle}' already exists.");
            return;
        }

        let Some(comment) = self.prompt_comment(handle) else {
            return;
        };

        self.store.append(Record {
            handle: Handle::new(handle),
            follower_count,
            comment,
            date_last_modified: Timestamp::now(),
        });
        self.unsaved_changes = true;
        println!("Record '{handle}' added successfully.");
    }

    fn update(&mut self, handle: &str, follower_count: u64) {
        if self.store.find(handle).is_none() {
            println!("Error: No entry with handle '{handle}'.");
            return;
        }

        let Some(comment) = self.prompt_comment(handle) else {
            return;
        };

        if let Some(record) = self.store.find_mut(handle) {
            record.follower_count = follower_count;
            record.comment = comment;
            record.date_last_modified = Timestamp::now();
            self.unsaved_changes = true;
            println!("Record '{handle}' updated successfully.");
        }
    }

    fn save(&mut self) {
        match self.store.save_to_path(&self.path) {
            Ok(()) => {
                self.unsaved_changes = false;
                println!("Database has been successfully saved.");
            }
            Err(err) => {
                warn!(%err, "save failed");
                println!("{err}");
            }
        }
    }

    /// First `exit` with unsaved changes warns and clears the flag, so a
    /// second `exit` quits without saving.
    fn exit(&mut self) -> bool {
        if self.unsaved_changes {
            println!(
                "There are unsaved changes. Type 'save' to save or 'exit' to quit without saving."
            );
            self.unsaved_changes = false;
            return true;
        }
        false
    }

    /// Prompt for a comment; `None` means the input was unusable and the
    /// surrounding command should be abandoned.
    ///
    /// The text is clipped to the comment bound first and checked for
    /// commas after, so a comma beyond the bound is simply dropped.
    fn prompt_comment(&mut self, handle: &str) -> Option<Comment> {
        let line = match self.editor.readline(&format!("Enter comment for '{handle}': ")) {
            Ok(line) => line,
            Err(_) => {
                println!("Error reading comment.");
                return None;
            }
        };

        let comment = Comment::new(line);
        if comment.contains(',') {
            println!("Error: Comment cannot contain commas.");
            return None;
        }
        Some(comment)
    }
}
