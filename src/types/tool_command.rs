// ABOUTME: External tool invocation: a program plus its argument list.
// ABOUTME: Parses whitespace-separated config strings and renders readable command lines.

use std::ffi::{OsStr, OsString};
use std::fmt;
use thiserror::Error;

/// Placeholder substituted with a file path in per-file command templates.
pub const PATH_PLACEHOLDER: &str = "{}";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolCommandError {
    #[error("command cannot be empty")]
    Empty,

    #[error("command template must contain a `{{}}` placeholder: {0}")]
    MissingPlaceholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a command line on whitespace. Quoting is not interpreted.
    pub fn parse(line: &str) -> Result<Self, ToolCommandError> {
        let mut words = line.split_whitespace();
        let program = words.next().ok_or(ToolCommandError::Empty)?;
        Ok(Self::new(program, words))
    }

    /// Parse a per-file template that must reference [`PATH_PLACEHOLDER`].
    pub fn parse_template(line: &str) -> Result<Self, ToolCommandError> {
        let command = Self::parse(line)?;
        let has_placeholder = command
            .args
            .iter()
            .any(|a| a.to_str().is_some_and(|a| a.contains(PATH_PLACEHOLDER)));
        if !has_placeholder {
            return Err(ToolCommandError::MissingPlaceholder(line.to_string()));
        }
        Ok(command)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Copy of this template with every placeholder replaced by `value`.
    ///
    /// `value` is spliced in as raw OS bytes, so paths that are not valid
    /// UTF-8 reach the tool unchanged.
    pub fn fill(&self, value: impl AsRef<OsStr>) -> Self {
        let value = value.as_ref();
        Self {
            program: self.program.clone(),
            args: self.args.iter().map(|a| fill_arg(a, value)).collect(),
        }
    }
}

fn fill_arg(arg: &OsStr, value: &OsStr) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg.to_os_string();
    };

    let mut filled = OsString::new();
    for (i, piece) in text.split(PATH_PLACEHOLDER).enumerate() {
        if i > 0 {
            filled.push(value);
        }
        filled.push(piece);
    }
    filled
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}

fn quote(word: &str) -> String {
    let needs_quotes = word.is_empty()
        || word
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '$' | '`' | '\\'));

    if needs_quotes {
        format!("'{}'", word.replace('\'', r"'\''"))
    } else {
        word.to_string()
    }
}
