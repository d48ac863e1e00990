//! Interactive terminal backed by the process's stdin, stdout and stderr
//!
//! Results (tables, listings, plain text, success lines) go to stdout.
//! Prompts, warnings and errors go to stderr so piped output stays clean.

use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets};
use console::{Term, style};
use dn_core::traits::Terminal;
use dn_core::{Error, Result};
use std::io::BufRead;

/// Production [`Terminal`]
#[derive(Debug)]
pub struct ConsoleTerminal {
    out: Term,
    err: Term,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }

    fn print(&self, line: &str) {
        let _ = self.out.write_line(line);
    }

    fn eprint(&self, line: &str) {
        let _ = self.err.write_line(line);
    }

    fn prompt(&self, question: &str, default: Option<&str>) -> Result<Option<String>> {
        let label = match default {
            Some(d) if !d.is_empty() => format!("{} [{}]: ", style(question).cyan(), d),
            _ => format!("{}: ", style(question).cyan()),
        };
        self.err.write_str(&label)?;
        self.read_line()
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ConsoleTerminal {
    fn ask(&self, question: &str, default: Option<&str>) -> Result<String> {
        let line = self.prompt(question, default)?;
        answer_or_default(line, default)
    }

    fn ask_hidden(&self, question: &str) -> Result<String> {
        let answer = rpassword::prompt_password(format!("{}: ", question))?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        let hint = if default { "yes" } else { "no" };
        loop {
            let label = format!("{} (yes/no)", question);
            let Some(line) = self.prompt(&label, Some(hint))? else {
                self.eprint("");
                return Ok(default);
            };
            match parse_confirmation(&line, default) {
                Some(answer) => return Ok(answer),
                None => self.eprint("Please answer yes or no."),
            }
        }
    }

    fn read_line(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn text(&self, message: &str) {
        self.print(message);
    }

    fn title(&self, message: &str) {
        self.print("");
        self.print(&style(message).bold().to_string());
        self.print(&"=".repeat(message.chars().count()));
    }

    fn section(&self, message: &str) {
        self.print("");
        self.print(&style(message).bold().to_string());
        self.print(&"-".repeat(message.chars().count()));
    }

    fn listing(&self, items: &[String]) {
        for item in items {
            self.print(&format!(" * {}", item));
        }
    }

    fn success(&self, message: &str) {
        self.print(&format!("{} {}", style("[OK]").green().bold(), message));
    }

    fn warning(&self, message: &str) {
        self.eprint(&format!("{} {}", style("[WARNING]").yellow().bold(), message));
    }

    fn caution(&self, message: &str) {
        self.eprint(&format!("{} {}", style("[CAUTION]").red().bold(), message));
    }

    fn error(&self, message: &str) {
        self.eprint(&format!("{} {}", style("[ERROR]").red().bold(), message));
    }

    fn table(&self, headers: &[&str], rows: Vec<Vec<String>>) {
        self.print(&build_table(headers, rows, console::colors_enabled()).to_string());
    }
}

/// Render rows under bold headers
fn build_table(headers: &[&str], rows: Vec<Vec<String>>, styled: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(headers.iter().map(|h| {
        let cell = Cell::new(h);
        if styled {
            cell.add_attribute(Attribute::Bold)
        } else {
            cell
        }
    }));

    for row in rows {
        table.add_row(row);
    }

    table
}

/// Apply `default` to an empty answer; end of input without one is an error
fn answer_or_default(line: Option<String>, default: Option<&str>) -> Result<String> {
    match (line, default) {
        (Some(answer), Some(default)) if answer.trim().is_empty() => Ok(default.to_string()),
        (Some(answer), _) => Ok(answer),
        (None, Some(default)) => Ok(default.to_string()),
        (None, None) => Err(Error::invalid_input("No input available.")),
    }
}

/// `Some(answer)` for yes/no (or empty, meaning `default`), `None` otherwise
fn parse_confirmation(answer: &str, default: bool) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
