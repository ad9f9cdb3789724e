use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;

/// Events produced by one harvest session, delivered in production order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestEvent {
    /// Overall progress, 0..=100, non-decreasing within a session.
    Progress(u8),
    /// Human-readable transient or terminal state description.
    Status(String),
    /// Terminal result; nothing follows this for the session.
    Finished {
        result: Result<HarvestOutcome, HarvestError>,
    },
}

/// Terminal state of a session that did not fail fatally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestOutcome {
    Completed { saved: usize },
    /// The page parsed fine but carried no image elements. Benign.
    NoImagesFound,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Bytes,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Fatal session failure: the page could not be fetched or decoded.
/// Per-image failures never produce this; they are absorbed as skips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestError {
    pub kind: FailureKind,
    pub message: String,
}

impl HarvestError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<FetchError> for HarvestError {
    fn from(err: FetchError) -> Self {
        Self {
            kind: err.kind,
            message: err.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Decode => write!(f, "decode error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Outcome of one candidate. Aggregated as a saved-count; skips and
/// failures are logged but never surfaced to the user individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadResult {
    Saved { path: PathBuf },
    Skipped { reason: SkipReason },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoSource,
    DataUri,
    NotContentAsset,
    BelowSizeThreshold { actual: u64, minimum: u64 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoSource => write!(f, "no source attribute"),
            SkipReason::DataUri => write!(f, "inline data uri"),
            SkipReason::NotContentAsset => write!(f, "not a content asset"),
            SkipReason::BelowSizeThreshold { actual, minimum } => {
                write!(f, "payload {actual} bytes below minimum {minimum}")
            }
        }
    }
}

/// Cooperative cancellation flag, written by the controller thread and
/// polled once per candidate by the harvest loop. An in-flight fetch is
/// never interrupted mid-operation.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_canceled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub(crate) fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
