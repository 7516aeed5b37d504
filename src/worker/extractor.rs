use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use crate::core::{format_timestamp, parse_timestamps, CancelToken, ProgressEvent};
use crate::video::{FfmpegDecoder, VideoDecoder};

/// Recognized video extensions, matched case-insensitively
pub const VIDEO_EXTENSIONS: &[&str] = &[".mov", ".mp4"];

/// Extracted frames land in this subfolder of the target folder
pub const OUTPUT_DIR_NAME: &str = "images";

/// Everything the worker needs to run
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub folder: PathBuf,
    pub timestamp_spec: String,
}

/// Handle to a running background extraction. The caller owns the cancel
/// token through `stop()` and must `join()` before tearing down anything
/// the worker may still touch.
pub struct FrameExtractor {
    cancel: CancelToken,
    handle: Option<thread::JoinHandle<()>>,
}

impl FrameExtractor {
    /// Start the extraction on a background thread, streaming progress
    /// events through the returned receiver. The stream always ends with
    /// exactly one terminal event.
    pub fn spawn(request: ExtractionRequest) -> (Self, mpsc::Receiver<ProgressEvent>) {
        Self::spawn_with(FfmpegDecoder, request)
    }

    /// Same as [`FrameExtractor::spawn`] with an explicit decoding backend.
    pub fn spawn_with<D: VideoDecoder + 'static>(
        decoder: D,
        request: ExtractionRequest,
    ) -> (Self, mpsc::Receiver<ProgressEvent>) {
        let (sender, receiver) = mpsc::channel();
        let cancel = CancelToken::new();

        let worker_cancel = cancel.clone();
        let handle = thread::spawn(move || {
            // A panicking decoder must not close the stream without a
            // terminal event, so the whole run is unwind-guarded
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                run_extraction(&decoder, &request, &worker_cancel, &sender);
            }));
            if let Err(panic) = result {
                let detail = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "worker panicked".to_string());
                log::error!("extraction worker panicked: {}", detail);
                let _ = sender.send(ProgressEvent::fatal(detail));
            }
        });

        (
            Self {
                cancel,
                handle: Some(handle),
            },
            receiver,
        )
    }

    /// Request cancellation. Takes effect at the next file boundary.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Wait for the worker thread to return.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("extraction worker thread panicked");
            }
        }
    }
}

/// Run the whole extraction synchronously, emitting progress events into
/// `sender` and returning the terminal event. Unclassified errors (a
/// failed directory scan or create) are caught here and reported once as
/// a critical-error event; per-file and per-timestamp failures are
/// absorbed inside the loop and only tallied.
pub fn run_extraction<D: VideoDecoder>(
    decoder: &D,
    request: &ExtractionRequest,
    cancel: &CancelToken,
    sender: &mpsc::Sender<ProgressEvent>,
) -> ProgressEvent {
    let terminal = match extract_all(decoder, request, cancel, sender) {
        Ok(event) => event,
        Err(e) => {
            log::error!("extraction run aborted: {:#}", e);
            ProgressEvent::fatal(format!("{:#}", e))
        }
    };
    let _ = sender.send(terminal.clone());
    terminal
}

fn extract_all<D: VideoDecoder>(
    decoder: &D,
    request: &ExtractionRequest,
    cancel: &CancelToken,
    sender: &mpsc::Sender<ProgressEvent>,
) -> anyhow::Result<ProgressEvent> {
    // Input validation happens before any filesystem writes
    let timestamps = match parse_timestamps(&request.timestamp_spec) {
        Ok(timestamps) => timestamps,
        Err(e) => {
            log::warn!("rejecting timestamp spec {:?}: {}", request.timestamp_spec, e);
            return Ok(ProgressEvent::invalid_input());
        }
    };

    if !request.folder.is_dir() {
        log::warn!("not a folder: {}", request.folder.display());
        return Ok(ProgressEvent::invalid_folder());
    }

    let video_files = list_video_files(&request.folder)?;
    let total = video_files.len();
    if total == 0 {
        return Ok(ProgressEvent::no_files());
    }

    let output_dir = request.folder.join(OUTPUT_DIR_NAME);
    std::fs::create_dir_all(&output_dir)?;

    let mut skipped_files = 0;
    let mut skipped_timestamps = 0;

    for (index, path) in video_files.iter().enumerate() {
        if cancel.is_cancelled() {
            log::info!("extraction stopped by user after {}/{} files", index, total);
            return Ok(ProgressEvent::cancelled(index, total));
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let _ = sender.send(ProgressEvent::processing(index, total, &file_name));

        let meta = match decoder.probe(path) {
            Ok(meta) => meta,
            Err(e) => {
                // Best effort: an unreadable video never aborts the run
                log::warn!("skipping {}: {:#}", path.display(), e);
                skipped_files += 1;
                continue;
            }
        };

        let base_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        for &ts in &timestamps {
            let frame_index = (ts * meta.frame_rate).floor() as u64;

            let frame = match decoder.grab(path, &meta, frame_index) {
                Ok(frame) => frame,
                Err(e) => {
                    log::debug!(
                        "no frame for {} at {}s (index {}): {:#}",
                        file_name, ts, frame_index, e
                    );
                    skipped_timestamps += 1;
                    continue;
                }
            };

            let output_path =
                output_dir.join(format!("{}_sec_{}.png", base_name, format_timestamp(ts)));
            if let Err(e) = frame.save(&output_path) {
                log::warn!("failed to write {}: {:#}", output_path.display(), e);
                skipped_timestamps += 1;
            }
        }
    }

    Ok(ProgressEvent::all_done(total, skipped_files, skipped_timestamps))
}

/// Scan one directory level for video files, sorted by name so the
/// processing order is stable across platforms.
fn list_video_files(folder: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            let lower = name.to_lowercase();
            if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
                files.push(path);
            }
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}
