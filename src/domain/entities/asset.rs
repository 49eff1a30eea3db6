//! Scanned asset entity - one file found under the assets directory
//!
//! Created fresh on every scan and never persisted.

use serde::Serialize;

/// Broad kind of an asset file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    Image,
    Font,
    Video,
    Data,
}

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "ico", "heic",
];
const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "woff", "woff2"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "avi", "mkv", "m4v"];
const DATA_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "txt", "csv", "xml", "riv", "lottie"];

impl AssetCategory {
    /// All categories in generated-code order
    pub const ALL: [AssetCategory; 4] = [
        AssetCategory::Image,
        AssetCategory::Font,
        AssetCategory::Video,
        AssetCategory::Data,
    ];

    /// Category for a file extension (case-insensitive, without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        let ext = ext.as_str();
        if IMAGE_EXTENSIONS.contains(&ext) {
            Some(AssetCategory::Image)
        } else if FONT_EXTENSIONS.contains(&ext) {
            Some(AssetCategory::Font)
        } else if VIDEO_EXTENSIONS.contains(&ext) {
            Some(AssetCategory::Video)
        } else if DATA_EXTENSIONS.contains(&ext) {
            Some(AssetCategory::Data)
        } else {
            None
        }
    }

    /// Heading used for the group in generated code
    pub fn heading(&self) -> &'static str {
        match self {
            AssetCategory::Image => "Images",
            AssetCategory::Font => "Fonts",
            AssetCategory::Video => "Videos",
            AssetCategory::Data => "Data",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Image => "image",
            AssetCategory::Font => "font",
            AssetCategory::Video => "video",
            AssetCategory::Data => "data",
        }
    }
}

/// A file found by the asset scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedAsset {
    /// Path relative to the project root, always `/`-separated
    pub relative_path: String,
    /// File name without its final extension
    pub name: String,
    /// Lowercase extension without the dot
    pub extension: String,
    /// Size in bytes
    pub size: u64,
    pub category: AssetCategory,
}

impl ScannedAsset {
    /// Build from a `/`-separated relative path and a size.
    ///
    /// Returns `None` when the extension is not a known asset type.
    pub fn from_relative_path(relative_path: &str, size: u64) -> Option<Self> {
        let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path);
        let (name, extension) = split_extension(file_name)?;
        let extension = extension.to_ascii_lowercase();
        let category = AssetCategory::from_extension(&extension)?;

        Some(Self {
            relative_path: relative_path.to_string(),
            name: name.to_string(),
            extension,
            size,
            category,
        })
    }
}

/// Split `name.ext` at the final dot. Dotfiles without a second dot have no
/// extension.
pub(crate) fn split_extension(file_name: &str) -> Option<(&str, &str)> {
    let dot = file_name.rfind('.')?;
    if dot == 0 || dot + 1 == file_name.len() {
        return None;
    }
    Some((&file_name[..dot], &file_name[dot + 1..]))
}
