use thiserror::Error;

/// The one failure condition a catalog lookup can surface.
///
/// Transport problems, non-success statuses, and body decode failures are
/// deliberately indistinguishable at this boundary; the cause is kept as
/// `source` for logging.
#[derive(Debug, Error)]
#[error("failed to fetch data from the recipe catalog")]
pub struct FetchError {
    #[from]
    source: reqwest::Error,
}
