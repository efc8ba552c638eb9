use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n\r?\n").unwrap());

/// The three masking jobs a scan runs against one stored image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskJob {
    Full,
    Incoming,
    Outgoing,
}

impl MaskJob {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaskJob::Full => "all",
            MaskJob::Incoming => "in",
            MaskJob::Outgoing => "out",
        }
    }
}

impl fmt::Display for MaskJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How extracted text is segmented into a line sequence. Verification reads
/// paragraph-level blocks; per-job extraction reads single lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDelimiter {
    Line,
    Paragraph,
}

impl LineDelimiter {
    pub fn split(&self, text: &str) -> Vec<String> {
        let pattern = match self {
            LineDelimiter::Line => &*LINE_BREAK,
            LineDelimiter::Paragraph => &*PARAGRAPH_BREAK,
        };
        pattern.split(text).map(str::to_string).collect()
    }
}
