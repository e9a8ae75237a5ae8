//! Removal criteria.

/// Criteria controlling which blocks a removal run deletes.
///
/// An item block qualifies when its `description` field equals any entry
/// in `descriptions`, or failing that, when its `name` field equals any
/// entry in `names`. Report blocks are only considered when
/// `remove_reports` is set, and only ever match by description.
#[derive(Debug, Clone, Default)]
pub struct RemoveOptions {
    /// Target `description` values (items and reports).
    pub descriptions: Vec<String>,
    /// Target `name` values (items only).
    pub names: Vec<String>,
    /// Also remove report blocks whose description matches.
    pub remove_reports: bool,
    /// Compare criterion values ASCII case-insensitively.
    pub ignore_case: bool,
}

impl RemoveOptions {
    /// True when `value` equals any of `targets` under the configured
    /// case sensitivity.
    pub(crate) fn matches(&self, value: &str, targets: &[String]) -> bool {
        targets.iter().any(|target| {
            if self.ignore_case {
                target.eq_ignore_ascii_case(value)
            } else {
                target == value
            }
        })
    }
}
