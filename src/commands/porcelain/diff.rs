//! The diff report command
//!
//! Writes the full comparison report for a session: whether the texts are
//! identical, the token-level distance, and the rendered diffs in the
//! requested formats.

use crate::areas::session::DiffSession;
use crate::artifacts::diff::render::DiffFormat;
use clap::ValueEnum;
use colored::Colorize;
use std::io::Write;

/// Which report formats the diff command prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportSelection {
    Unified,
    Context,
    Normal,
    /// All three formats, each under its own heading
    #[default]
    All,
}

impl ReportSelection {
    fn formats(&self) -> Vec<(&'static str, DiffFormat)> {
        match self {
            ReportSelection::Unified => vec![("Unified format diff", DiffFormat::Unified)],
            ReportSelection::Context => vec![("Context format diff", DiffFormat::Context)],
            ReportSelection::Normal => vec![("Normal format diff", DiffFormat::Normal)],
            ReportSelection::All => vec![
                ("Unified format diff", DiffFormat::Unified),
                ("Context format diff", DiffFormat::Context),
                ("Normal format diff", DiffFormat::Normal),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiffReportOptions {
    pub selection: ReportSelection,
    pub context_size: usize,
}

impl DiffSession {
    pub fn report(&self, opts: &DiffReportOptions) -> anyhow::Result<()> {
        if self.are_identical() {
            writeln!(self.writer(), "Texts are identical")?;
            return Ok(());
        }

        writeln!(
            self.writer(),
            "Levenshtein distance: {}",
            self.levenshtein_distance()
        )?;

        for (title, format) in opts.selection.formats() {
            let rendered = self.render_diff(format, opts.context_size);

            writeln!(self.writer())?;
            writeln!(self.writer(), "{}", format!("{title}:").bold())?;
            for line in rendered.lines() {
                writeln!(self.writer(), "{}", colorize_line(line, format))?;
            }
        }

        Ok(())
    }
}

/// Color one rendered line by its marker, leaving the text untouched
fn colorize_line(line: &str, format: DiffFormat) -> String {
    match format {
        DiffFormat::Unified => {
            if line.starts_with("@@ ") {
                line.cyan().to_string()
            } else if line.starts_with("---") || line.starts_with("+++") {
                line.bold().to_string()
            } else if line.starts_with('-') {
                line.red().to_string()
            } else if line.starts_with('+') {
                line.green().to_string()
            } else {
                line.to_string()
            }
        }
        DiffFormat::Context => {
            if line.starts_with("***") || line.starts_with("--- ") {
                line.bold().to_string()
            } else if line.starts_with("- ") {
                line.red().to_string()
            } else if line.starts_with("+ ") {
                line.green().to_string()
            } else {
                line.to_string()
            }
        }
        DiffFormat::Normal => {
            if line.starts_with("< ") {
                line.red().to_string()
            } else if line.starts_with("> ") {
                line.green().to_string()
            } else if line.starts_with(|c: char| c.is_ascii_digit()) {
                line.cyan().to_string()
            } else {
                line.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DiffReportOptions, ReportSelection};
    use crate::areas::session::DiffSession;
    use crate::artifacts::diff::render::DEFAULT_CONTEXT_SIZE;
    use crate::artifacts::tokenizer::{ParserMode, TokenizerMode, create_tokenizer};
    use rstest::rstest;
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;

    /// Writer that keeps everything in memory for assertions
    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn report(from_text: &str, to_text: &str, selection: ReportSelection) -> String {
        colored::control::set_override(false);

        let buffer = SharedBuffer::default();
        let session = DiffSession::new(
            create_tokenizer(TokenizerMode::Word, ParserMode::default()),
            from_text,
            to_text,
            Box::new(buffer.clone()),
        );
        session
            .report(&DiffReportOptions {
                selection,
                context_size: DEFAULT_CONTEXT_SIZE,
            })
            .expect("report must succeed");

        buffer.contents()
    }

    #[rstest]
    fn identical_texts_report_only_the_identity_line() {
        let output = report("same text", "same text", ReportSelection::All);

        assert_eq!(output, "Texts are identical\n");
    }

    #[rstest]
    fn differing_texts_report_the_distance_first() {
        let output = report("This is test", "This is a test", ReportSelection::Unified);

        assert!(output.starts_with("Levenshtein distance: 2\n"));
        assert!(output.contains("Unified format diff:"));
        assert!(output.contains("@@ "));
    }

    #[rstest]
    fn all_three_formats_appear_under_their_headings() {
        let output = report("one two three", "one 2 three", ReportSelection::All);

        assert!(output.contains("Unified format diff:"));
        assert!(output.contains("Context format diff:"));
        assert!(output.contains("Normal format diff:"));
        assert!(output.contains("-two"));
        assert!(output.contains("+2"));
        assert!(output.contains("< two"));
        assert!(output.contains("> 2"));
    }
}
