//! Marker scanning for item and report blocks.
//!
//! Scanning is a single ordered walk over the start and end markers of one
//! block kind. The Nth start marker pairs with the Nth end marker; this is
//! only sound because audit blocks of the same kind never nest, so a start
//! marker seen while a block is still open is reported as a hard fault
//! instead of being mispaired.

use regex::{Match, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Which marker family delimits a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// `<item>`/`</item>` or `<custom_item>`/`</custom_item>`
    Item,
    /// `<report type:"...">`/`</report>`
    Report,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => write!(f, "item"),
            Self::Report => write!(f, "report"),
        }
    }
}

/// A scanned block with its byte span in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// The marker family that delimits this block.
    pub kind: BlockKind,
    /// Byte range in the source, from the start marker's match position
    /// through the end marker's match end.
    pub span: Range<usize>,
    /// The raw text of the span, markers included.
    pub text: String,
    /// The 1-based line number where the start marker begins.
    pub start_line: usize,
}

impl Block {
    fn new(kind: BlockKind, span: Range<usize>, source: &str) -> Self {
        let text = source[span.clone()].to_string();
        let start_line = line_of(source, span.start);
        Self {
            kind,
            span,
            text,
            start_line,
        }
    }
}

/// Opening item marker: optional indentation, `<item>` or `<custom_item>`,
/// then a newline.
static ITEM_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*<(?:custom_)?item>[ \t]*\r?\n").expect("item open regex"));

/// Closing item marker.
static ITEM_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*</(?:custom_)?item>").expect("item close regex"));

/// Opening report marker with a double-quoted type attribute.
static REPORT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<report\s+type\s*:\s*"[^"]*"\s*>"#).expect("report open regex"));

/// Closing report marker.
static REPORT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</report>").expect("report close regex"));

/// Scans all item blocks in document order.
///
/// The start/end marker counts must agree before pairing begins; a
/// document with unbalanced item tags is structurally broken and no span
/// list is produced for it.
///
/// # Errors
/// Returns [`Error::TagMismatch`] when the open and close counts differ,
/// [`Error::NestedBlock`] when an item opens inside another item, and
/// [`Error::DanglingClose`] when a closing tag precedes any open block.
///
/// # Example
/// ```
/// use audit_blocks::scan_items;
///
/// let source = "<item>\nname : \"x\"\n</item>\n";
/// let blocks = scan_items(source).unwrap();
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].span, 0..25);
/// ```
pub fn scan_items(source: &str) -> Result<Vec<Block>> {
    let opens: Vec<Match<'_>> = ITEM_OPEN.find_iter(source).collect();
    let closes: Vec<Match<'_>> = ITEM_CLOSE.find_iter(source).collect();

    if opens.len() != closes.len() {
        return Err(Error::TagMismatch {
            kind: BlockKind::Item,
            opens: opens.len(),
            closes: closes.len(),
        });
    }

    let blocks = pair_markers(source, BlockKind::Item, &opens, &closes, true)?;
    tracing::debug!(count = blocks.len(), "scanned item blocks");
    Ok(blocks)
}

/// Scans all report blocks in document order.
///
/// Each report start pairs with the next `</report>` after it, the
/// shortest possible span. A trailing start marker with no closing tag is
/// skipped, as is a closing tag with no open block; true nesting of
/// reports is still rejected.
///
/// # Errors
/// Returns [`Error::NestedBlock`] when a report opens inside another
/// report.
pub fn scan_reports(source: &str) -> Result<Vec<Block>> {
    let opens: Vec<Match<'_>> = REPORT_OPEN.find_iter(source).collect();
    let closes: Vec<Match<'_>> = REPORT_CLOSE.find_iter(source).collect();

    let blocks = pair_markers(source, BlockKind::Report, &opens, &closes, false)?;
    tracing::debug!(count = blocks.len(), "scanned report blocks");
    Ok(blocks)
}

/// Walks open and close markers in document order, emitting one block per
/// open/close pair.
///
/// `strict_close` controls whether a close marker with no open block is a
/// fault (items) or skipped (reports).
fn pair_markers(
    source: &str,
    kind: BlockKind,
    opens: &[Match<'_>],
    closes: &[Match<'_>],
    strict_close: bool,
) -> Result<Vec<Block>> {
    let mut blocks = Vec::new();
    let mut open_start: Option<usize> = None;
    let (mut i, mut j) = (0, 0);

    while i < opens.len() || j < closes.len() {
        let take_open = match (opens.get(i), closes.get(j)) {
            (Some(open), Some(close)) => open.start() < close.start(),
            (Some(_), None) => true,
            _ => false,
        };

        if take_open {
            let open = &opens[i];
            if open_start.is_some() {
                return Err(Error::NestedBlock {
                    kind,
                    line: line_of(source, open.start()),
                });
            }
            open_start = Some(open.start());
            i += 1;
        } else {
            let close = &closes[j];
            match open_start.take() {
                Some(start) => blocks.push(Block::new(kind, start..close.end(), source)),
                None if strict_close => {
                    return Err(Error::DanglingClose {
                        kind,
                        line: line_of(source, close.start()),
                    });
                }
                None => {}
            }
            j += 1;
        }
    }

    Ok(blocks)
}

/// 1-based line number of a byte offset.
fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].lines().count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_items_empty() {
        let blocks = scan_items("no blocks here").unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_scan_single_item() {
        let source = "<item>\nname : \"x\"\n</item>\n";
        let blocks = scan_items(source).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Item);
        assert_eq!(&source[blocks[0].span.clone()], "<item>\nname : \"x\"\n</item>");
        assert_eq!(blocks[0].start_line, 1);
    }

    #[test]
    fn test_scan_custom_item() {
        let source = "<custom_item>\nname : \"y\"\n</custom_item>\n";
        let blocks = scan_items(source).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].text.starts_with("<custom_item>"));
    }

    #[test]
    fn test_item_without_newline_is_not_a_marker() {
        // An inline `<item>` with no trailing newline is not an opening
        // marker, so the lone closing tag makes the counts disagree.
        let source = "<item> inline </item>";
        let err = scan_items(source).unwrap_err();
        assert!(matches!(
            err,
            Error::TagMismatch {
                opens: 0,
                closes: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_mismatch_counts_reported() {
        let source = "<item>\na\n</item>\n<item>\nb\n</item>\n<item>\nc\n";
        let err = scan_items(source).unwrap_err();
        assert!(matches!(
            err,
            Error::TagMismatch {
                kind: BlockKind::Item,
                opens: 3,
                closes: 2,
            }
        ));
    }

    #[test]
    fn test_nested_item_rejected() {
        let source = "<item>\n<item>\n</item>\n</item>\n";
        let err = scan_items(source).unwrap_err();
        assert!(matches!(err, Error::NestedBlock { line: 2, .. }));
    }

    #[test]
    fn test_close_before_open_rejected() {
        let source = "</item>\n<item>\nx\n</item>\n<item>\ny\n";
        let err = scan_items(source).unwrap_err();
        assert!(matches!(err, Error::DanglingClose { line: 1, .. }));
    }

    #[test]
    fn test_scan_reports() {
        let source = "<report type:\"PASSED\">\ndescription : \"ok\"\n</report>\n";
        let blocks = scan_reports(source).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Report);
        assert!(blocks[0].text.ends_with("</report>"));
    }

    #[test]
    fn test_unclosed_report_skipped() {
        let source = "<report type:\"WARNING\">\ndescription : \"open-ended\"\n";
        let blocks = scan_reports(source).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_stray_report_close_skipped() {
        let source = "</report>\n<report type:\"PASSED\">\nx\n</report>\n";
        let blocks = scan_reports(source).unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_nested_report_rejected() {
        let source = "<report type:\"A\">\n<report type:\"B\">\n</report>\n</report>\n";
        let err = scan_reports(source).unwrap_err();
        assert!(matches!(
            err,
            Error::NestedBlock {
                kind: BlockKind::Report,
                line: 2,
            }
        ));
    }

    #[test]
    fn test_line_numbers() {
        let source = "header\n\n<item>\nname : \"x\"\n</item>\n";
        let blocks = scan_items(source).unwrap();
        assert_eq!(blocks[0].start_line, 3);
    }
}
