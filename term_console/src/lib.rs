//! # Terminal Console
//!
//! Command-prompt application over the virtual file system: a cmd-style
//! navigator with `cd`/`dir`/`type` plus a few console niceties.
//!
//! Output is a structured log of typed lines rather than a byte stream, so
//! the prompt path, command echoes and outputs stay distinguishable for
//! rendering and for tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vfs::{path, ContentSource, Entry, VfsTree};

/// Help text printed by the `help` command.
pub const HELP_TEXT: &str = "\
Available commands:

File System:
  dir / ls   - List files and directories
  cd [dir]   - Change directory
  type [file]- View file contents
  pwd        - Print working directory

Console:
  echo [msg] - Print a message
  cls / clear- Clear the console
  help       - Show this help
  exit       - Close the console
";

/// Navigator failures; the `Display` strings are the printed diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("The system cannot find the path specified.")]
    PathNotFound,

    #[error("The system cannot find the file specified.")]
    FileNotFound,

    #[error("Access is denied.")]
    AccessDenied,

    #[error("The syntax of the command is incorrect.")]
    BadSyntax,
}

/// One line of console history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConsoleLine {
    /// Echo of a submitted command, with the prompt it was typed at
    Command { prompt: String, text: String },
    Output(String),
}

/// What the shell should do after a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEffect {
    None,
    /// The `exit` command: close the hosting window
    Exit,
}

/// State of one terminal window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Console {
    cwd: String,
    lines: Vec<ConsoleLine>,
}

impl Console {
    /// Creates a console at the given working directory
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            cwd: start_path.into(),
            lines: Vec::new(),
        }
    }

    /// Current working directory (forward-slash form)
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// The prompt shown before input, cmd-style: `C:\Users\guest>`
    pub fn prompt(&self) -> String {
        format!("{}>", self.cwd.replace('/', "\\"))
    }

    /// Console history in display order
    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    /// Runs one submitted command line.
    pub fn execute(&mut self, tree: &VfsTree, input: &str) -> ConsoleEffect {
        let input = input.trim();
        if input.is_empty() {
            return ConsoleEffect::None;
        }

        self.lines.push(ConsoleLine::Command {
            prompt: self.prompt(),
            text: input.to_string(),
        });

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or_default().to_ascii_lowercase();
        let rest: Vec<&str> = parts.collect();
        let param = rest.first().copied();

        match cmd.as_str() {
            "help" => self.output(HELP_TEXT),
            "cls" | "clear" => self.lines.clear(),
            "exit" => return ConsoleEffect::Exit,
            "echo" => self.output(rest.join(" ")),
            "pwd" => self.output(self.cwd.replace('/', "\\")),
            "cd" => match param {
                // `cd` with no target prints the working directory.
                None => self.output(self.cwd.replace('/', "\\")),
                Some(target) => {
                    if let Err(err) = self.change_dir(tree, target) {
                        self.output(err.to_string());
                    }
                }
            },
            "dir" | "ls" => match self.directory_listing(tree) {
                Ok(listing) => self.output(listing),
                Err(err) => self.output(err.to_string()),
            },
            "type" => match self.read_file(tree, param) {
                Ok(contents) => self.output(contents),
                Err(err) => self.output(err.to_string()),
            },
            other => self.output(format!(
                "'{}' is not recognized as an internal or external command, \
                 operable program or batch file.",
                other
            )),
        }
        ConsoleEffect::None
    }

    fn change_dir(&mut self, tree: &VfsTree, target: &str) -> Result<(), NavError> {
        let normalized = path::normalize(tree.root_token(), &self.cwd, target);
        match tree.resolve(&normalized) {
            Some(entry) if entry.is_container() => {
                self.cwd = normalized;
                Ok(())
            }
            _ => Err(NavError::PathNotFound),
        }
    }

    fn directory_listing(&self, tree: &VfsTree) -> Result<String, NavError> {
        let children = tree
            .list_children(&self.cwd)
            .ok_or(NavError::FileNotFound)?;
        if children.is_empty() {
            return Err(NavError::FileNotFound);
        }

        let rows: Vec<String> = children
            .iter()
            .map(|(name, entry)| {
                if entry.is_container() {
                    format!("<DIR>          {}", name)
                } else {
                    format!("               {}", name)
                }
            })
            .collect();

        Ok(format!(
            " Directory of {}\n\n{}",
            self.cwd.replace('/', "\\"),
            rows.join("\n")
        ))
    }

    fn read_file(&self, tree: &VfsTree, param: Option<&str>) -> Result<String, NavError> {
        let target = param.ok_or(NavError::BadSyntax)?;
        let normalized = path::normalize(tree.root_token(), &self.cwd, target);
        let entry = tree.resolve(&normalized).ok_or(NavError::FileNotFound)?;

        if entry.is_container() {
            return Err(NavError::AccessDenied);
        }
        let contents = match entry {
            Entry::File { source, .. } => match source {
                ContentSource::Inline(text) => text.clone(),
                ContentSource::Url(url) => format!("[File Content located at {}]", url),
                ContentSource::Empty => String::new(),
            },
            _ => String::new(),
        };
        Ok(contents)
    }

    fn output(&mut self, text: impl Into<String>) {
        self.lines.push(ConsoleLine::Output(text.into()));
    }
}
