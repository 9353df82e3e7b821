//! Terminal states of a fetch session.

/// How one top-level fetch invocation ended.
///
/// Errors are not outcomes; they propagate through `Result` and leave
/// persisted state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// All available data was fetched and the resume cursor was cleared.
    Complete,
    /// The session stopped at its accumulation threshold with more pages
    /// remaining; the resume cursor was persisted for the next run.
    MoreDataPending,
    /// The API returned no records; persisted state was left untouched.
    NoData,
    /// The operator declined the fresh-start confirmation.
    Cancelled,
}
