//! Logo harvesting engine: page fetch, candidate filtering, image download,
//! and the background session thread.
mod candidate;
mod decode;
mod engine;
mod extract;
mod fetch;
mod filename;
mod harvest;
mod persist;
mod types;

pub use candidate::{full_size_url, is_content_asset, is_data_uri, percent};
pub use decode::{decode_page, DecodeError, DecodedPage};
pub use engine::EngineHandle;
pub use extract::{extract_candidates, ImageCandidate};
pub use fetch::{ChannelEventSink, EventSink, FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::{logo_filename, sanitize_file_name};
pub use harvest::{harvest, HarvestConfig};
pub use persist::{ensure_output_dir, ImageWriter, PersistError};
pub use types::{
    CancelFlag, DownloadResult, FailureKind, FetchError, FetchMetadata, FetchOutput, HarvestError,
    HarvestEvent, HarvestOutcome, SkipReason,
};
