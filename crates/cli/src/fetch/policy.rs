//! Per-source stop policies.

use fba_sync_core::SourceKind;

/// How a source kind paginates and when it stops.
#[derive(Debug, Clone, Copy)]
pub struct FetchPolicy {
    /// Stop accumulating and persist the cursor once this many records are
    /// buffered. `None` disables the threshold.
    pub threshold: Option<usize>,
    /// Whether a continuation token is followed at all. When `false` each
    /// invocation takes a single page.
    pub follow_cursor: bool,
    /// Whether an empty page batch completes the session immediately,
    /// clearing the stored cursor even if the response carried a token.
    pub stop_on_empty_batch: bool,
    /// Whether a session starting without a cursor asks the operator to
    /// confirm the fresh start.
    pub confirm_fresh_start: bool,
}

impl FetchPolicy {
    /// The policy for a source kind.
    #[must_use]
    pub const fn for_source(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Inventory => Self {
                threshold: Some(1000),
                follow_cursor: true,
                stop_on_empty_batch: false,
                confirm_fresh_start: true,
            },
            SourceKind::Shipments => Self {
                threshold: Some(5000),
                follow_cursor: true,
                stop_on_empty_batch: true,
                confirm_fresh_start: false,
            },
            SourceKind::ShipmentItems => Self {
                threshold: None,
                follow_cursor: false,
                stop_on_empty_batch: false,
                confirm_fresh_start: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_table() {
        let inventory = FetchPolicy::for_source(SourceKind::Inventory);
        assert_eq!(inventory.threshold, Some(1000));
        assert!(inventory.follow_cursor);
        assert!(inventory.confirm_fresh_start);
        assert!(!inventory.stop_on_empty_batch);

        let shipments = FetchPolicy::for_source(SourceKind::Shipments);
        assert_eq!(shipments.threshold, Some(5000));
        assert!(shipments.follow_cursor);
        assert!(shipments.stop_on_empty_batch);
        assert!(!shipments.confirm_fresh_start);

        let items = FetchPolicy::for_source(SourceKind::ShipmentItems);
        assert!(items.threshold.is_none());
        assert!(!items.follow_cursor);
        assert!(!items.stop_on_empty_batch);
        assert!(!items.confirm_fresh_start);
    }
}
