//! Terminal interaction
//!
//! Commands never touch stdin/stdout directly. They go through this trait so
//! the console can be swapped for a scripted double in tests.

use crate::error::Result;

/// Prompting and rendering primitives used by commands
pub trait Terminal: Send + Sync {
    /// Ask a visible question; an empty answer yields `default` when given
    fn ask(&self, question: &str, default: Option<&str>) -> Result<String>;

    /// Ask a question without echoing the answer
    fn ask_hidden(&self, question: &str) -> Result<String>;

    /// Yes/no question
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;

    /// Read one raw line from standard input, `None` at end of input
    fn read_line(&self) -> Result<Option<String>>;

    fn text(&self, message: &str);

    fn title(&self, message: &str);

    fn section(&self, message: &str);

    /// Bulleted list
    fn listing(&self, items: &[String]);

    fn success(&self, message: &str);

    fn warning(&self, message: &str);

    /// Highlighted notice shown before destructive actions
    fn caution(&self, message: &str);

    fn error(&self, message: &str);

    fn table(&self, headers: &[&str], rows: Vec<Vec<String>>);
}
