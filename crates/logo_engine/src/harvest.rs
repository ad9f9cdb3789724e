use std::path::PathBuf;

use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::candidate::{full_size_url, is_content_asset, is_data_uri, percent};
use crate::decode::decode_page;
use crate::extract::{extract_candidates, ImageCandidate};
use crate::fetch::{EventSink, Fetcher};
use crate::filename::logo_filename;
use crate::persist::ImageWriter;
use crate::types::{
    CancelFlag, DownloadResult, FailureKind, HarvestError, HarvestEvent, HarvestOutcome,
    SkipReason,
};

/// Inputs for one harvest session. The page URL, sub-folder name, and URL
/// markers are configuration rather than constants, so the harvester stays
/// reusable for other source pages.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub page_url: String,
    pub destination: PathBuf,
    pub subfolder: String,
    pub asset_path_marker: String,
    pub revision_marker: String,
    pub min_image_bytes: u64,
}

impl HarvestConfig {
    pub fn new(page_url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            page_url: page_url.into(),
            destination: destination.into(),
            subfolder: "Downloaded_Company_Logos".to_string(),
            asset_path_marker: "/images/".to_string(),
            revision_marker: "/revision/".to_string(),
            min_image_bytes: 5000,
        }
    }
}

/// Run one harvest session to its terminal state.
///
/// Progress and status events go through `sink` in production order. The
/// cancellation flag is polled once per candidate, so an in-flight fetch is
/// allowed to complete before the session winds down.
pub async fn harvest(
    fetcher: &dyn Fetcher,
    config: &HarvestConfig,
    sink: &dyn EventSink,
    cancel: &CancelFlag,
) -> Result<HarvestOutcome, HarvestError> {
    match run_session(fetcher, config, sink, cancel).await {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            sink.emit(HarvestEvent::Status(format!(
                "Network Error: {}",
                err.message
            )));
            Err(err)
        }
    }
}

async fn run_session(
    fetcher: &dyn Fetcher,
    config: &HarvestConfig,
    sink: &dyn EventSink,
    cancel: &CancelFlag,
) -> Result<HarvestOutcome, HarvestError> {
    let page = fetcher.fetch_page(&config.page_url).await?;
    let decoded = decode_page(&page.bytes, page.metadata.content_type.as_deref())
        .map_err(|err| HarvestError::new(FailureKind::Decode, err.to_string()))?;

    let candidates = extract_candidates(&decoded.html);
    if candidates.is_empty() {
        sink.emit(HarvestEvent::Status(
            "No images found on the page.".to_string(),
        ));
        return Ok(HarvestOutcome::NoImagesFound);
    }

    let total = candidates.len();
    engine_info!(
        "Harvesting {} image candidates from {}",
        total,
        page.metadata.final_url
    );

    // Lazily materialized: the sub-folder appears on the first write.
    let writer = ImageWriter::new(config.destination.join(&config.subfolder));
    sink.emit(HarvestEvent::Progress(0));

    let mut saved = 0usize;
    for candidate in &candidates {
        if cancel.is_canceled() {
            sink.emit(HarvestEvent::Status("Download canceled.".to_string()));
            return Ok(HarvestOutcome::Canceled);
        }

        match process_candidate(fetcher, config, &writer, candidate).await {
            DownloadResult::Saved { path } => {
                saved += 1;
                engine_info!("Saved {}", path.display());
            }
            DownloadResult::Skipped { reason } => {
                engine_debug!("Candidate {} skipped: {}", candidate.index, reason);
            }
            DownloadResult::Failed { reason } => {
                engine_warn!("Candidate {} failed: {}", candidate.index, reason);
            }
        }

        sink.emit(HarvestEvent::Progress(percent(candidate.index + 1, total)));
    }

    sink.emit(HarvestEvent::Progress(100));
    sink.emit(HarvestEvent::Status(format!(
        "Downloaded {} logos to '{}'.",
        saved, config.subfolder
    )));
    Ok(HarvestOutcome::Completed { saved })
}

async fn process_candidate(
    fetcher: &dyn Fetcher,
    config: &HarvestConfig,
    writer: &ImageWriter,
    candidate: &ImageCandidate,
) -> DownloadResult {
    let Some(source) = candidate.source.as_deref() else {
        return DownloadResult::Skipped {
            reason: SkipReason::NoSource,
        };
    };
    if is_data_uri(source) {
        return DownloadResult::Skipped {
            reason: SkipReason::DataUri,
        };
    }
    if !is_content_asset(source, &config.asset_path_marker) {
        return DownloadResult::Skipped {
            reason: SkipReason::NotContentAsset,
        };
    }

    let full_size = full_size_url(source, &config.revision_marker);
    let bytes = match fetcher.fetch_image(full_size).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return DownloadResult::Failed {
                reason: format!("fetch {}: {}", full_size, err.message),
            };
        }
    };

    if (bytes.len() as u64) < config.min_image_bytes {
        return DownloadResult::Skipped {
            reason: SkipReason::BelowSizeThreshold {
                actual: bytes.len() as u64,
                minimum: config.min_image_bytes,
            },
        };
    }

    let name = logo_filename(full_size, candidate.index);
    match writer.write(&name, &bytes) {
        Ok(path) => DownloadResult::Saved { path },
        Err(err) => DownloadResult::Failed {
            reason: format!("write {}: {}", name, err),
        },
    }
}
