//! Block state machine and HTML emission.
//!
//! Folds classified lines into open/close transitions between the three
//! block kinds (heading, list, paragraph) and accumulates the emitted HTML.

use std::fmt::Write;

use crate::inline::format_inline;
use crate::line::{LineKind, classify};

/// Marker placed between consecutive paragraph lines.
const LINE_BREAK: &str = "<br/>";

/// Which list element is currently open.
///
/// At most one list is open at any time; opening one kind closes the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenList {
    None,
    Unordered,
    Ordered,
}

impl OpenList {
    fn closing_tag(self) -> Option<&'static str> {
        match self {
            OpenList::None => None,
            OpenList::Unordered => Some("</ul>"),
            OpenList::Ordered => Some("</ol>"),
        }
    }
}

/// Line-oriented HTML renderer for the supported markdown subset.
///
/// Tracks the open list element and the buffered paragraph lines while the
/// document is processed in a single pass. [`render`](Self::render) consumes
/// the renderer, so block state can never leak between documents.
///
/// # Example
///
/// ```
/// use mdh_renderer::HtmlRenderer;
///
/// let html = HtmlRenderer::new().render("# Title\n- item\n");
/// assert_eq!(html, "<h1>Title</h1>\n<ul>\n<li>item</li>\n</ul>\n");
/// ```
pub struct HtmlRenderer {
    output: String,
    open_list: OpenList,
    paragraph: Vec<String>,
}

impl HtmlRenderer {
    /// Create a renderer with empty block state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            open_list: OpenList::None,
            paragraph: Vec::new(),
        }
    }

    /// Convert a full markdown document to HTML.
    ///
    /// The input is split on line boundaries (terminators stripped); each
    /// line is inline-formatted, classified, and folded into the block state
    /// machine. Any block still open at end of input is closed exactly once.
    #[must_use]
    pub fn render(mut self, markdown: &str) -> String {
        for line in markdown.lines() {
            let line = format_inline(line);
            self.process_line(&line);
        }
        self.finalize()
    }

    fn process_line(&mut self, line: &str) {
        match classify(line) {
            LineKind::Heading { level, text } => {
                self.close_list();
                self.flush_paragraph();
                writeln!(self.output, "<h{level}>{text}</h{level}>").unwrap();
            }
            LineKind::UnorderedItem(text) => {
                if self.open_list == OpenList::Ordered {
                    self.close_list();
                }
                self.flush_paragraph();
                if self.open_list != OpenList::Unordered {
                    self.output.push_str("<ul>\n");
                    self.open_list = OpenList::Unordered;
                }
                writeln!(self.output, "<li>{text}</li>").unwrap();
            }
            LineKind::OrderedItem(text) => {
                if self.open_list == OpenList::Unordered {
                    self.close_list();
                }
                self.flush_paragraph();
                if self.open_list != OpenList::Ordered {
                    self.output.push_str("<ol>\n");
                    self.open_list = OpenList::Ordered;
                }
                writeln!(self.output, "<li>{text}</li>").unwrap();
            }
            // A blank line flushes the paragraph but does not close a list
            LineKind::Blank => self.flush_paragraph(),
            LineKind::Text(text) => {
                self.close_list();
                self.paragraph.push(text.to_owned());
            }
        }
    }

    /// Close any still-open block and return the accumulated document.
    fn finalize(mut self) -> String {
        self.close_list();
        self.flush_paragraph();
        self.output
    }

    /// Emit the closing tag for the open list, if any.
    fn close_list(&mut self) {
        if let Some(tag) = self.open_list.closing_tag() {
            self.output.push_str(tag);
            self.output.push('\n');
        }
        self.open_list = OpenList::None;
    }

    /// Emit `<p>...</p>` wrapping the buffered lines and clear the buffer.
    ///
    /// Lines are joined by one line-break marker between consecutive lines,
    /// with none trailing.
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        self.output.push_str("<p>\n");
        for (i, line) in self.paragraph.iter().enumerate() {
            if i > 0 {
                self.output.push_str(LINE_BREAK);
                self.output.push('\n');
            }
            self.output.push_str(line);
            self.output.push('\n');
        }
        self.output.push_str("</p>\n");
        self.paragraph.clear();
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a markdown document to HTML with a fresh renderer.
#[must_use]
pub fn to_html(markdown: &str) -> String {
    HtmlRenderer::new().render(markdown)
}
