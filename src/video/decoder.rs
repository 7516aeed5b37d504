use std::path::Path;

use image::RgbImage;

use crate::video::{grab_frame, probe_video, VideoMetadata};

/// Decoding backend for the extraction worker. The production backend
/// shells out to ffmpeg/ffprobe; tests substitute an in-memory stub.
pub trait VideoDecoder: Send {
    /// Open a video and report its stream metadata. An error here means
    /// the file cannot be decoded at all and is skipped whole.
    fn probe(&self, file_path: &Path) -> anyhow::Result<VideoMetadata>;

    /// Decode the single frame at `frame_index`. An error here (typically
    /// a seek past the end of the stream) skips just this timestamp.
    fn grab(
        &self,
        file_path: &Path,
        meta: &VideoMetadata,
        frame_index: u64,
    ) -> anyhow::Result<RgbImage>;
}

/// ffmpeg/ffprobe-backed decoder
#[derive(Debug, Default)]
pub struct FfmpegDecoder;

impl VideoDecoder for FfmpegDecoder {
    fn probe(&self, file_path: &Path) -> anyhow::Result<VideoMetadata> {
        probe_video(file_path)
    }

    fn grab(
        &self,
        file_path: &Path,
        meta: &VideoMetadata,
        frame_index: u64,
    ) -> anyhow::Result<RgbImage> {
        grab_frame(file_path, meta, frame_index)
    }
}
