use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// The folders the organizer sorts files into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Images,
    Video,
    Documents,
    Audio,
    Archives,
}

impl Category {
    /// All categories, in report order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Images,
            Category::Video,
            Category::Documents,
            Category::Audio,
            Category::Archives,
        ]
    }

    /// Name of the folder created under the organized root.
    pub fn folder(&self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Video => "video",
            Category::Documents => "documents",
            Category::Audio => "audio",
            Category::Archives => "archives",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Category::Images => &["jpeg", "png", "jpg", "svg"],
            Category::Video => &["avi", "mp4", "mov", "mkv"],
            Category::Documents => &["doc", "docx", "txt", "pdf", "xlsx", "pptx"],
            Category::Audio => &["mp3", "ogg", "wav", "amr"],
            Category::Archives => &["zip", "gz", "tar"],
        }
    }

    pub fn is_folder_name(name: &str) -> bool {
        Category::all().iter().any(|c| c.folder() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder())
    }
}

static BY_EXTENSION: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    Category::all()
        .iter()
        .flat_map(|c| c.extensions().iter().map(move |ext| (*ext, *c)))
        .collect()
});

/// Looks up the category for a file extension (without the dot). Matching
/// ignores case.
pub fn category_for(extension: &str) -> Option<Category> {
    BY_EXTENSION
        .get(extension.to_ascii_lowercase().as_str())
        .copied()
}
