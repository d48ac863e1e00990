//! Input resolution
//!
//! A value supplied on the command line always wins. Only when it is missing
//! is the operator prompted.

use crate::error::Result;
use crate::traits::Terminal;

/// How to ask for a value that was not given as a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt<'a> {
    pub question: &'a str,
    pub default: Option<&'a str>,
    pub hidden: bool,
}

impl<'a> Prompt<'a> {
    pub fn visible(question: &'a str) -> Self {
        Self {
            question,
            default: None,
            hidden: false,
        }
    }

    /// Input is not echoed
    pub fn hidden(question: &'a str) -> Self {
        Self {
            question,
            default: None,
            hidden: true,
        }
    }

    pub fn with_default(mut self, default: &'a str) -> Self {
        self.default = Some(default);
        self
    }
}

/// Where a value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// Supplied on the command line
    Flag(&'a str),
    /// Must be asked for
    Prompt(Prompt<'a>),
}

impl<'a> Field<'a> {
    /// `Flag` when `flag` is present, otherwise `Prompt`
    pub fn or_prompt(flag: Option<&'a str>, prompt: Prompt<'a>) -> Self {
        match flag {
            Some(value) => Field::Flag(value),
            None => Field::Prompt(prompt),
        }
    }
}

/// Produce the value of `field`, prompting if needed
pub fn resolve(terminal: &dyn Terminal, field: Field<'_>) -> Result<String> {
    match field {
        Field::Flag(value) => Ok(value.to_string()),
        Field::Prompt(prompt) if prompt.hidden => terminal.ask_hidden(prompt.question),
        Field::Prompt(prompt) => terminal.ask(prompt.question, prompt.default),
    }
}

/// Shorthand for `resolve(terminal, Field::or_prompt(flag, prompt))`
pub fn flag_or_prompt(
    terminal: &dyn Terminal,
    flag: Option<&str>,
    prompt: Prompt<'_>,
) -> Result<String> {
    resolve(terminal, Field::or_prompt(flag, prompt))
}
