//! Locale-aware rendering of worker event codes.
//!
//! The extraction worker emits structured [`EventCode`]s only; mapping a
//! code to display text lives entirely here so the worker never depends
//! on the active display language.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{EventCode, ProgressEvent};


/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    En,
    ZhTw,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::ZhTw];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "zh_TW" => Some(Locale::ZhTw),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhTw => "zh_TW",
        }
    }
}

/// Message templates keyed by locale and event code, loaded once at startup
pub struct MessageCatalog {
    templates: HashMap<(Locale, EventCode), &'static str>,
    skip_tally: HashMap<Locale, &'static str>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCatalog {
    pub fn new() -> Self {
        use EventCode::*;
        use Locale::*;

        let templates = HashMap::from([
            ((En, ProcessingFile), "Processing [{current}/{total}]: {filename}"),
            ((En, AllDone), "All tasks completed!"),
            ((En, NoFilesFound), "No .mov or .mp4 files found."),
            ((En, StoppedByUser), "Processing stopped by user."),
            ((En, InvalidTimestampFormat), "Error: Invalid timestamp format."),
            ((En, InvalidFolder), "Error: Please select a valid folder."),
            ((En, CriticalError), "A critical error occurred: {error}"),
            ((ZhTw, ProcessingFile), "正在處理 [{current}/{total}]: {filename}"),
            ((ZhTw, AllDone), "全部任務完成！"),
            ((ZhTw, NoFilesFound), "找不到任何 .mov 或 .mp4 檔案。"),
            ((ZhTw, StoppedByUser), "處理已由使用者中止。"),
            ((ZhTw, InvalidTimestampFormat), "錯誤：時間點格式無效。"),
            ((ZhTw, InvalidFolder), "錯誤：請選擇一個有效的資料夾。"),
            ((ZhTw, CriticalError), "發生嚴重錯誤：{error}"),
        ]);

        let skip_tally = HashMap::from([
            (En, " ({files} file(s), {timestamps} timestamp(s) skipped)"),
            (ZhTw, "（略過 {files} 個檔案、{timestamps} 個時間點）"),
        ]);

        Self { templates, skip_tally }
    }

    /// Render a progress event in the given locale.
    pub fn render(&self, locale: Locale, event: &ProgressEvent) -> String {
        let template = self
            .templates
            .get(&(locale, event.code))
            .copied()
            .unwrap_or_default();

        let mut message = template
            .replace("{current}", &(event.completed + 1).to_string())
            .replace("{total}", &event.total.to_string())
            .replace("{filename}", event.file_name.as_deref().unwrap_or(""))
            .replace("{error}", event.detail.as_deref().unwrap_or(""));

        // Partial-failure tally is appended rather than baked into the
        // success template so a clean run reads exactly as before
        if event.code == EventCode::AllDone
            && (event.skipped_files > 0 || event.skipped_timestamps > 0)
        {
            if let Some(tally) = self.skip_tally.get(&locale) {
                message.push_str(
                    &tally
                        .replace("{files}", &event.skipped_files.to_string())
                        .replace("{timestamps}", &event.skipped_timestamps.to_string()),
                );
            }
        }

        message
    }
}
