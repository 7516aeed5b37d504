use std::path::Path;
use std::process::{Command, Stdio};

use image::RgbImage;

use crate::video::VideoMetadata;

/// Decode the frame at `frame_index` as raw RGB24. ffmpeg seeks in time
/// units, so the index is mapped back to seconds through the stream's
/// frame rate; seeking past the end of the video yields no output, which
/// surfaces as an error the caller absorbs as a skip.
pub fn grab_frame(
    file_path: &Path,
    meta: &VideoMetadata,
    frame_index: u64,
) -> anyhow::Result<RgbImage> {
    let seek_seconds = frame_index as f64 / meta.frame_rate;

    let output = Command::new("ffmpeg")
        .arg("-ss").arg(format!("{:.6}", seek_seconds)) // Seek before input for fast positioning
        .arg("-i").arg(file_path)
        .arg("-frames:v").arg("1")
        .arg("-f").arg("rawvideo")
        .arg("-pix_fmt").arg("rgb24")
        .arg("-")
        .stderr(Stdio::piped())
        .stdout(Stdio::piped())
        .output()?;

    if !output.status.success() {
        let error = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow::anyhow!("ffmpeg failed: {}", error));
    }

    let expected = meta.width as usize * meta.height as usize * 3;
    if output.stdout.len() < expected {
        // Timestamp beyond the end of the video
        return Err(anyhow::anyhow!(
            "no frame at index {} in {} ({} of {} bytes)",
            frame_index,
            file_path.display(),
            output.stdout.len(),
            expected
        ));
    }

    let mut data = output.stdout;
    data.truncate(expected);

    RgbImage::from_raw(meta.width, meta.height, data)
        .ok_or_else(|| anyhow::anyhow!("frame buffer size mismatch for {}", file_path.display()))
}
