//! Selective removal of qualifying blocks.
//!
//! Qualifying spans are widened backward over the whitespace that
//! separated them from the previous block, then spliced out of the
//! document in a single rebuild pass that copies the gaps between sorted
//! spans. Rebuilding from sorted spans is equivalent to applying the
//! deletions in descending offset order: no pending span's offsets are
//! ever disturbed by an earlier deletion.

use serde::Serialize;
use std::ops::Range;
use std::path::Path;

use audit_blocks::{Block, description, name, scan_items, scan_reports};

use crate::error::Result;
use crate::normalize::collapse_blank_lines;
use crate::options::RemoveOptions;

/// Counts of blocks removed by one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RemoveOutcome {
    pub items_removed: usize,
    pub reports_removed: usize,
}

/// Removes qualifying blocks from an audit file on disk.
///
/// The document is scanned and validated first; a structural fault aborts
/// before any file is touched. The pre-run content is then persisted
/// verbatim to `<path>.backup` (overwriting any previous backup) and the
/// edited document is rewritten in place.
///
/// With `dry_run` set, the outcome is computed and returned without
/// writing the backup or the file.
///
/// # Errors
/// Propagates structural faults from scanning and I/O faults from the
/// read, backup, and rewrite steps.
pub fn remove_blocks(path: &Path, opts: &RemoveOptions, dry_run: bool) -> Result<RemoveOutcome> {
    let source = audit_fs::read_text(path)?;
    let (edited, outcome) = remove_from_text(&source, opts)?;

    if dry_run {
        tracing::debug!(path = %path.display(), ?outcome, "dry run, skipping writes");
        return Ok(outcome);
    }

    audit_fs::write_backup(path, &source)?;
    audit_fs::write_text(path, &edited)?;

    tracing::info!(
        path = %path.display(),
        items = outcome.items_removed,
        reports = outcome.reports_removed,
        "removed qualifying blocks"
    );
    Ok(outcome)
}

/// Removes qualifying blocks from document text.
///
/// Returns the edited document and the removal counts. The blank-line
/// collapse pass always runs, including when nothing qualified.
///
/// # Errors
/// Returns a structural fault when the document's item markers are
/// unbalanced or any block kind nests.
pub fn remove_from_text(source: &str, opts: &RemoveOptions) -> Result<(String, RemoveOutcome)> {
    let mut spans: Vec<Range<usize>> = Vec::new();
    let mut outcome = RemoveOutcome::default();

    for block in scan_items(source)? {
        if item_qualifies(&block, opts) {
            spans.push(widen_back(source, block.span));
            outcome.items_removed += 1;
        }
    }

    if opts.remove_reports {
        for block in scan_reports(source)? {
            if report_qualifies(&block, opts) {
                spans.push(widen_back(source, block.span));
                outcome.reports_removed += 1;
            }
        }
    }

    let edited = splice_out(source, spans);
    let edited = collapse_blank_lines(&edited);
    Ok((edited, outcome))
}

/// Whether an item block matches the removal criteria.
///
/// The description check takes priority: a block that qualifies by
/// description is never also checked (or counted) by name.
fn item_qualifies(block: &Block, opts: &RemoveOptions) -> bool {
    if let Some(desc) = description(&block.text)
        && opts.matches(desc, &opts.descriptions)
    {
        return true;
    }
    if let Some(name) = name(&block.text)
        && opts.matches(name, &opts.names)
    {
        return true;
    }
    false
}

/// Whether a report block matches the removal criteria. Reports only
/// match by description, never by name.
fn report_qualifies(block: &Block, opts: &RemoveOptions) -> bool {
    description(&block.text).is_some_and(|desc| opts.matches(desc, &opts.descriptions))
}

/// Widens a span backward to absorb the whitespace immediately preceding
/// it, so that deleting the span does not leave a dangling blank line.
fn widen_back(source: &str, span: Range<usize>) -> Range<usize> {
    let bytes = source.as_bytes();
    let mut start = span.start;
    while start > 0 && matches!(bytes[start - 1], b' ' | b'\t' | b'\r' | b'\n') {
        start -= 1;
    }
    start..span.end
}

/// Rebuilds the document with every span removed, in one concatenation
/// pass over the gaps between sorted spans. Overlapping spans (an item
/// removed inside a removed report) collapse into one cut.
fn splice_out(source: &str, mut spans: Vec<Range<usize>>) -> String {
    spans.sort_by_key(|span| span.start);

    let mut result = String::with_capacity(source.len());
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            result.push_str(&source[cursor..span.start]);
        }
        cursor = cursor.max(span.end);
    }
    result.push_str(&source[cursor..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn by_names(names: &[&str]) -> RemoveOptions {
        RemoveOptions {
            names: names.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn by_descriptions(descriptions: &[&str]) -> RemoveOptions {
        RemoveOptions {
            descriptions: descriptions.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_whitespace_absorbed_with_block() {
        let source = "A\n\n<item>\nname : \"x\"\n</item>\nB";
        let (edited, outcome) = remove_from_text(source, &by_names(&["x"])).unwrap();
        assert_eq!(edited, "A\nB");
        assert_eq!(outcome.items_removed, 1);
    }

    #[test]
    fn test_no_match_leaves_document_unchanged() {
        let source = "A\n\n<item>\nname : \"x\"\n</item>\nB\n";
        let (edited, outcome) = remove_from_text(source, &by_names(&["other"])).unwrap();
        assert_eq!(edited, source);
        assert_eq!(outcome, RemoveOutcome::default());
    }

    #[test]
    fn test_description_priority_counts_once() {
        // Matches both criteria; removed and counted exactly once.
        let source = "<item>\ndescription : \"d\"\nname : \"n\"\n</item>\n";
        let mut opts = by_descriptions(&["d"]);
        opts.names = vec!["n".to_string()];
        let (edited, outcome) = remove_from_text(source, &opts).unwrap();
        assert_eq!(outcome.items_removed, 1);
        // Widening only looks backward; the newline after the end tag stays.
        assert_eq!(edited, "\n");
    }

    #[test]
    fn test_name_checked_when_description_does_not_match() {
        let source = "<item>\ndescription : \"keep\"\nname : \"drop\"\n</item>\n";
        let mut opts = by_descriptions(&["something else"]);
        opts.names = vec!["drop".to_string()];
        let (_, outcome) = remove_from_text(source, &opts).unwrap();
        assert_eq!(outcome.items_removed, 1);
    }

    #[test]
    fn test_reports_untouched_without_flag() {
        let source = "<report type:\"FAILED\">\ndescription : \"d\"\n</report>\n";
        let (edited, outcome) = remove_from_text(source, &by_descriptions(&["d"])).unwrap();
        assert_eq!(edited, source);
        assert_eq!(outcome.reports_removed, 0);
    }

    #[test]
    fn test_reports_removed_with_flag() {
        let source = "keep\n\n<report type:\"FAILED\">\ndescription : \"d\"\n</report>\nrest\n";
        let mut opts = by_descriptions(&["d"]);
        opts.remove_reports = true;
        let (edited, outcome) = remove_from_text(source, &opts).unwrap();
        assert_eq!(edited, "keep\nrest\n");
        assert_eq!(outcome.reports_removed, 1);
    }

    #[test]
    fn test_reports_never_match_by_name() {
        let source = "<report type:\"FAILED\">\nname : \"n\"\n</report>\n";
        let mut opts = by_names(&["n"]);
        opts.remove_reports = true;
        let (edited, outcome) = remove_from_text(source, &opts).unwrap();
        assert_eq!(edited, source);
        assert_eq!(outcome.reports_removed, 0);
    }

    #[test]
    fn test_item_inside_removed_report_single_cut() {
        let source = "\
<report type:\"FAILED\">
description : \"group\"

<item>
name : \"inner\"
</item>

</report>
after
";
        let mut opts = by_names(&["inner"]);
        opts.descriptions = vec!["group".to_string()];
        opts.remove_reports = true;
        let (edited, outcome) = remove_from_text(source, &opts).unwrap();
        assert_eq!(edited, "\nafter\n");
        assert_eq!(outcome.items_removed, 1);
        assert_eq!(outcome.reports_removed, 1);
    }

    #[test]
    fn test_ignore_case_matching() {
        let source = "<item>\nname : \"Passwd_Duplicate_Username\"\n</item>\n";
        let mut opts = by_names(&["passwd_duplicate_username"]);
        let (edited, _) = remove_from_text(source, &opts).unwrap();
        assert_eq!(edited, source, "case-sensitive by default");

        opts.ignore_case = true;
        let (edited, outcome) = remove_from_text(source, &opts).unwrap();
        assert_eq!(edited, "\n");
        assert_eq!(outcome.items_removed, 1);
    }

    #[test]
    fn test_splice_out_reverse_equivalence() {
        let source = "0123456789";
        let spans = vec![6..8, 1..3];
        assert_eq!(splice_out(source, spans), "034589");
    }

    #[test]
    fn test_widen_back_stops_at_non_whitespace() {
        let source = "AB \t\n<item>";
        assert_eq!(widen_back(source, 5..11), 2..11);
    }
}
