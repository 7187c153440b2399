//! Standalone HTML output.
//!
//! The page holds a relatively positioned container with one absolutely
//! positioned `div` per block, preceded by the fullness line.

use crate::blocks::RenderedBlock;
use crate::fullness::FullnessReport;
use blockfill_core::geometry::Container;

/// Inline style for one block element.
pub fn block_style(block: &RenderedBlock) -> String {
    format!(
        "position: absolute; margin: 0; top: {}px; left: {}px; width: {}px; height: {}px; \
         outline: 1px solid #000; background-color: {}; order: {};",
        block.y, block.x, block.width, block.height, block.color, block.id
    )
}

/// Renders a single block element.
pub fn block_element(block: &RenderedBlock) -> String {
    format!(
        "<div class=\"block\" style=\"{}\">{}</div>",
        block_style(block),
        escape(&block.label)
    )
}

/// Renders a full HTML document.
///
/// A container without a fixed height is drawn as tall as `packed_height`.
pub fn render_document(
    container: &Container,
    packed_height: f64,
    blocks: &[RenderedBlock],
    report: Option<&FullnessReport>,
) -> String {
    let height = container.height().unwrap_or(packed_height);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>blockfill</title>\n</head>\n<body>\n");

    if let Some(report) = report {
        out.push_str(&format!("<p>{}</p>\n", escape(&report.label())));
    }

    out.push_str(&format!(
        "<div class=\"container\" style=\"position: relative; width: {}px; height: {}px;\">\n",
        container.width(),
        height
    ));
    for block in blocks {
        out.push_str(&block_element(block));
        out.push('\n');
    }
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
