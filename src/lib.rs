//! Batch extraction of still frames from video files at specified
//! timestamps.
//!
//! The crate is the background half of a desktop tool: a presentation
//! layer hands [`FrameExtractor::spawn`] a folder and a comma-separated
//! timestamp string, receives [`ProgressEvent`]s over a channel, and can
//! cancel the run through the returned handle. Decoding and frame-rate
//! probing are delegated to ffmpeg/ffprobe; extracted frames are written
//! as PNG into an `images` subfolder of the target folder.

pub mod core;
pub mod i18n;
pub mod video;
pub mod worker;

pub use crate::core::{
    parse_timestamps, CancelToken, EventCode, ProgressEvent, RunStatus, TimestampParseError,
};
pub use crate::i18n::{Locale, MessageCatalog};
pub use crate::worker::{ExtractionRequest, FrameExtractor};
