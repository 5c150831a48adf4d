//! # File Organizer
//!
//! Sorts a messy directory into category folders:
//!
//! ```text
//! <root>/
//! ├── images/      jpeg png jpg svg
//! ├── video/       avi mp4 mov mkv
//! ├── documents/   doc docx txt pdf xlsx pptx
//! ├── audio/       mp3 ogg wav amr
//! └── archives/    zip gz tar  (unpacked into archives/<name>/)
//! ```
//!
//! Every file below the root is visited, except what already sits in the
//! category folders. Known files are renamed with [`normalize`] and moved
//! into their folder. Files with an unknown extension stay where they are and
//! are only recorded in the [`OrganizeReport`]. Files without an extension
//! are ignored. Once everything is moved, empty directories are removed.
//!
//! The organizer works with absolute paths and never changes the process's
//! working directory.

pub mod archive;
pub mod categories;
pub mod normalize;

use crate::error::{AssistantError, Result};
use archive::ArchiveKind;
pub use categories::{category_for, Category};
use log::{debug, info, warn};
pub use normalize::normalize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What an organizer run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizeReport {
    /// Final file names per category. Archives are listed by original name.
    pub files: BTreeMap<Category, Vec<String>>,
    /// Names of files left in place because their extension is unknown.
    pub unknown_files: Vec<String>,
    /// Lowercased extensions (without the dot) that matched a category.
    pub known_extensions: BTreeSet<String>,
    /// Lowercased extensions (without the dot) that matched nothing.
    pub unknown_extensions: BTreeSet<String>,
    /// Files that could not be handled, with the reason.
    pub failures: Vec<String>,
    pub removed_dirs: usize,
}

impl OrganizeReport {
    pub fn files_in(&self, category: Category) -> &[String] {
        self.files.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn moved_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    fn record(&mut self, category: Category, name: String) {
        self.files.entry(category).or_default().push(name);
    }
}

/// Organizes the directory at `root`.
///
/// Fails only when `root` is not an existing directory or the category
/// folders cannot be created. Problems with individual files end up in
/// [`OrganizeReport::failures`].
pub fn organize(root: &Path) -> Result<OrganizeReport> {
    if !root.is_dir() {
        return Err(AssistantError::Organizer(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    for category in Category::all() {
        fs::create_dir_all(root.join(category.folder()))?;
    }

    let mut report = OrganizeReport::default();
    for path in collect_files(root, &mut report) {
        process_file(root, &path, &mut report);
    }

    report.removed_dirs = remove_empty_dirs(root, root, &mut report.failures);
    info!(
        "organized {}: {} moved, {} unknown, {} failures",
        root.display(),
        report.moved_count(),
        report.unknown_files.len(),
        report.failures.len()
    );
    Ok(report)
}

fn is_category_dir(root: &Path, path: &Path) -> bool {
    path.parent() == Some(root)
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(Category::is_folder_name)
}

fn collect_files(root: &Path, report: &mut OrganizeReport) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_category_dir(root, e.path())));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => report.failures.push(format!("walk error: {}", e)),
        }
    }
    files
}

fn process_file(root: &Path, path: &Path, report: &mut OrganizeReport) {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
        report
            .failures
            .push(format!("{}: file name is not valid UTF-8", path.display()));
        return;
    };
    let Some(extension) = path
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(str::to_ascii_lowercase)
    else {
        return;
    };

    let Some(category) = category_for(&extension) else {
        debug!("unknown extension .{} for {}", extension, path.display());
        report.unknown_files.push(file_name);
        report.unknown_extensions.insert(extension);
        return;
    };
    report.known_extensions.insert(extension);

    let outcome = match category {
        Category::Archives => handle_archive(root, path, &file_name, report),
        _ => move_into(root, path, category, &normalize(&file_name)).map(|name| {
            report.record(category, name);
        }),
    };
    if let Err(e) = outcome {
        warn!("could not organize {}: {}", path.display(), e);
        report.failures.push(format!("{}: {}", file_name, e));
    }
}

fn handle_archive(
    root: &Path,
    path: &Path,
    file_name: &str,
    report: &mut OrganizeReport,
) -> io::Result<()> {
    let Some(kind) = ArchiveKind::from_file_name(file_name) else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "unrecognised archive",
        ));
    };

    let dest = unique_path(
        &root.join(Category::Archives.folder()),
        &normalize(kind.strip(file_name)),
    );
    if let Err(e) = archive::unpack(path, kind, &dest) {
        let _ = fs::remove_dir_all(&dest);
        return Err(e);
    }
    fs::remove_file(path)?;
    debug!("unpacked {} into {}", path.display(), dest.display());
    report.record(Category::Archives, file_name.to_string());
    Ok(())
}

/// Moves `path` into the category folder as `name`, returning the final name.
fn move_into(root: &Path, path: &Path, category: Category, name: &str) -> io::Result<String> {
    let target = unique_path(&root.join(category.folder()), name);
    fs::rename(path, &target)?;
    debug!("moved {} -> {}", path.display(), target.display());
    Ok(target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string()))
}

/// `dir/name`, or `dir/<stem>_<n>.<ext>` for the first free `n` if taken.
fn unique_path(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };
    (1..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{}_{}.{}", stem, n, ext)),
            None => dir.join(format!("{}_{}", stem, n)),
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

/// Removes empty directories below `dir`, deepest first. The root and its
/// category folders are kept. Returns how many directories were removed.
fn remove_empty_dirs(root: &Path, dir: &Path, failures: &mut Vec<String>) -> usize {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            failures.push(format!("{}: {}", dir.display(), e));
            return 0;
        }
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir || is_category_dir(root, &path) {
            continue;
        }
        removed += remove_empty_dirs(root, &path, failures);
        if fs::remove_dir(&path).is_ok() {
            debug!("removed empty directory {}", path.display());
            removed += 1;
        }
    }
    removed
}
