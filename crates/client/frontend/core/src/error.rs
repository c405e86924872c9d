use thiserror::Error;

/// Reasons a pushed snapshot was not applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store is detached; snapshot ignored")]
    Detached,

    #[error("snapshot schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
