//! Embedded landing page.
//!
//! A single self-contained HTML file, inlined at compile time, with a form
//! that posts to `/api/query` and renders the answer.

pub const INDEX_HTML: &str = include_str!("../static/index.html");
