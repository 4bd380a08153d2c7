use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// Sink for line-numbered diagnostics raised while scanning.
///
/// Reporting never aborts the caller; the scanner keeps going after every
/// call to `report`.
pub trait ErrorReporter {
    fn report(&mut self, line: u32, message: &str);

    fn had_error(&self) -> bool {
        false
    }
}

impl<F> ErrorReporter for F
where
    F: FnMut(u32, &str),
{
    fn report(&mut self, line: u32, message: &str) {
        self(line, message)
    }
}

/// Prints `[line N] Error: message` to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.had_error = false;
    }
}

impl ErrorReporter for ConsoleReporter {
    fn report(&mut self, line: u32, message: &str) {
        eprintln!("[line {}] Error: {}", line, message);
        self.had_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub message: String,
}

/// Keeps every diagnostic in the order it was reported.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&mut self, line: u32, message: &str) {
        self.diagnostics.push(Diagnostic {
            line,
            message: String::from(message),
        });
    }

    fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LexError::UnexpectedCharacter('@').to_string(),
            "Unexpected character."
        );
        assert_eq!(LexError::UnterminatedString.to_string(), "Unterminated string.");
    }

    #[test]
    fn test_collecting_reporter_keeps_order() {
        let mut reporter = CollectingReporter::new();
        assert!(!reporter.had_error());

        reporter.report(2, "first");
        reporter.report(1, "second");

        assert!(reporter.had_error());
        assert_eq!(
            reporter.diagnostics,
            vec![
                Diagnostic {
                    line: 2,
                    message: String::from("first")
                },
                Diagnostic {
                    line: 1,
                    message: String::from("second")
                },
            ]
        );
    }

    #[test]
    fn test_closure_reporter() {
        let mut lines = Vec::new();
        {
            let mut reporter = |line: u32, _message: &str| lines.push(line);
            reporter.report(4, "anything");
            assert!(!reporter.had_error());
        }
        assert_eq!(lines, vec![4]);
    }

    #[test]
    fn test_console_reporter_flag() {
        let mut reporter = ConsoleReporter::new();
        assert!(!reporter.had_error());
        reporter.report(1, "Unexpected character.");
        assert!(reporter.had_error());
        reporter.reset();
        assert!(!reporter.had_error());
    }
}
