use std::path::Path;
use std::process::Command;

/// Frame rate assumed when ffprobe reports none (matches common camera output)
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
}

/// Probe a video's first video stream with ffprobe. Fails if the file
/// cannot be opened or carries no video stream; a missing or degenerate
/// frame rate falls back to [`DEFAULT_FRAME_RATE`].
pub fn probe_video(file_path: &Path) -> anyhow::Result<VideoMetadata> {
    let output = Command::new("ffprobe")
        .arg("-v").arg("quiet")
        .arg("-print_format").arg("json")
        .arg("-show_streams")
        .arg("-select_streams").arg("v:0")
        .arg(file_path)
        .output()?;

    if !output.status.success() {
        return Err(anyhow::anyhow!("ffprobe failed for {}", file_path.display()));
    }

    let json_str = String::from_utf8(output.stdout)?;
    let info: serde_json::Value = serde_json::from_str(&json_str)?;

    let stream = info["streams"]
        .as_array()
        .and_then(|streams| streams.first())
        .ok_or_else(|| anyhow::anyhow!("no video stream in {}", file_path.display()))?;

    let width = stream["width"]
        .as_u64()
        .ok_or_else(|| anyhow::anyhow!("missing width in {}", file_path.display()))? as u32;
    let height = stream["height"]
        .as_u64()
        .ok_or_else(|| anyhow::anyhow!("missing height in {}", file_path.display()))? as u32;

    let frame_rate = stream["avg_frame_rate"]
        .as_str()
        .and_then(parse_frame_rate)
        .unwrap_or(DEFAULT_FRAME_RATE);

    Ok(VideoMetadata {
        width,
        height,
        frame_rate,
    })
}

/// Parse ffprobe's rational frame rate string like "30/1" or "30000/1001"
pub fn parse_frame_rate(rate_str: &str) -> Option<f64> {
    let parts: Vec<&str> = rate_str.split('/').collect();
    if parts.len() != 2 {
        return None;
    }

    let num: f64 = parts[0].parse().ok()?;
    let den: f64 = parts[1].parse().ok()?;

    if den == 0.0 || num == 0.0 {
        return None;
    }

    Some(num / den)
}
