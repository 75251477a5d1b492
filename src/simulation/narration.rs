//! Narration sink for console lines
//!
//! Behavior functions narrate into a `Narrator` instead of printing
//! directly, so the same code drives the binary and the tests.

/// Ordered record of narrated lines
#[derive(Debug, Clone, Default)]
pub struct Narrator {
    lines: Vec<String>,
    echo: bool,
}

impl Narrator {
    /// Record lines and print each one to stdout
    pub fn stdout() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    /// Record lines without printing
    pub fn capture() -> Self {
        Self::default()
    }

    pub fn with_echo(echo: bool) -> Self {
        Self {
            lines: Vec::new(),
            echo,
        }
    }

    pub fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(line = %line, "narrated");
        if self.echo {
            println!("{}", line);
        }
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
