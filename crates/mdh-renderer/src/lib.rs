//! Line-oriented markdown subset to HTML renderer.
//!
//! Converts a constrained markdown subset into HTML one line at a time:
//! headings (`# ` through `###### `), unordered lists (`- `), ordered lists
//! (`* `), and paragraphs, with inline bold (`**`), emphasis (`__`), MD5
//! hashing (`[[...]]`), and `c`/`C` stripping (`((...))`).
//!
//! This is deliberately not CommonMark. The list markers are this tool's own
//! contract (`-` is unordered, `*` is ordered), there are no nested lists,
//! tables, code blocks, links, or images, and output text is not
//! HTML-escaped.
//!
//! # Example
//!
//! ```
//! let html = mdh_renderer::to_html("# Title\n\nHello **world**\n");
//! assert_eq!(html, "<h1>Title</h1>\n<p>\nHello <b>world</b>\n</p>\n");
//! ```

mod inline;
mod line;
mod renderer;

pub use inline::format_inline;
pub use renderer::{HtmlRenderer, to_html};
