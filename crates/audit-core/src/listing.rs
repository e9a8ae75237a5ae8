//! Read-only enumeration of blocks and their key fields.

use serde::Serialize;
use std::path::Path;

use audit_blocks::{Block, description, name, scan_items, scan_reports};

use crate::error::Result;

/// One block as surfaced by the diagnostic listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockSummary {
    /// 1-based line of the block's start marker.
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BlockSummary {
    fn item(block: &Block) -> Self {
        Self {
            line: block.start_line,
            description: description(&block.text).map(str::to_string),
            name: name(&block.text).map(str::to_string),
        }
    }

    fn report(block: &Block) -> Self {
        Self {
            line: block.start_line,
            description: description(&block.text).map(str::to_string),
            name: None,
        }
    }
}

/// All item and report blocks of one document, with their key fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub items: Vec<BlockSummary>,
    pub reports: Vec<BlockSummary>,
}

impl Listing {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn report_count(&self) -> usize {
        self.reports.len()
    }
}

/// Enumerates all item and report blocks in document text.
///
/// Report scanning is not gated on any removal criteria; both kinds are
/// always listed. No mutation occurs.
///
/// # Errors
/// Returns a structural fault when the document's markers are unbalanced
/// or nested.
pub fn list_text(source: &str) -> Result<Listing> {
    let items = scan_items(source)?
        .iter()
        .map(BlockSummary::item)
        .collect();
    let reports = scan_reports(source)?
        .iter()
        .map(BlockSummary::report)
        .collect();
    Ok(Listing { items, reports })
}

/// Enumerates all blocks of an audit file on disk. Read-only.
pub fn list_blocks(path: &Path) -> Result<Listing> {
    let source = audit_fs::read_text(path)?;
    list_text(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"<check_type:"Unix">

<item>
name : "passwd_duplicate_username"
description : "6.2.6 Ensure no duplicate user names exist"
</item>

<custom_item>
description : "Custom check without a name"
</custom_item>

<report type:"PASSED">
description : "All prerequisites present"
</report>

</check_type>
"#;

    #[test]
    fn test_listing_counts() {
        let listing = list_text(SOURCE).unwrap();
        assert_eq!(listing.item_count(), 2);
        assert_eq!(listing.report_count(), 1);
    }

    #[test]
    fn test_item_fields_surfaced() {
        let listing = list_text(SOURCE).unwrap();
        assert_eq!(
            listing.items[0].name.as_deref(),
            Some("passwd_duplicate_username")
        );
        assert_eq!(
            listing.items[0].description.as_deref(),
            Some("6.2.6 Ensure no duplicate user names exist")
        );
        assert_eq!(listing.items[1].name, None);
    }

    #[test]
    fn test_report_fields_surfaced() {
        let listing = list_text(SOURCE).unwrap();
        assert_eq!(
            listing.reports[0].description.as_deref(),
            Some("All prerequisites present")
        );
        assert_eq!(listing.reports[0].name, None);
    }

    #[test]
    fn test_empty_document() {
        let listing = list_text("").unwrap();
        assert_eq!(listing, Listing::default());
    }
}
