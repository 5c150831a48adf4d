//! Archive unpacking for the `archives` category.
//!
//! Plain `.tar` and gzip-compressed tarballs go through `tar`, single gzip
//! files through `flate2`, and `.zip` through `zip`.

use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Tar,
    TarGz,
    Gzip,
    Zip,
}

impl ArchiveKind {
    /// Determines the archive kind from a file name. `None` when the name does
    /// not carry an archive extension.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".tar.gz") {
            Some(ArchiveKind::TarGz)
        } else if lower.ends_with(".tar") {
            Some(ArchiveKind::Tar)
        } else if lower.ends_with(".gz") {
            Some(ArchiveKind::Gzip)
        } else if lower.ends_with(".zip") {
            Some(ArchiveKind::Zip)
        } else {
            None
        }
    }

    /// The file name with its archive extension(s) removed.
    pub fn strip<'a>(&self, name: &'a str) -> &'a str {
        let suffix_len = match self {
            ArchiveKind::TarGz => ".tar.gz".len(),
            ArchiveKind::Tar => ".tar".len(),
            ArchiveKind::Gzip => ".gz".len(),
            ArchiveKind::Zip => ".zip".len(),
        };
        name.get(..name.len().saturating_sub(suffix_len))
            .unwrap_or(name)
    }
}

/// Unpacks `archive` into `dest`, creating `dest` first.
///
/// A single gzip file is decompressed to `dest/<name without .gz>`.
pub fn unpack(archive: &Path, kind: ArchiveKind, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;
    let file = File::open(archive)?;
    match kind {
        ArchiveKind::Tar => tar::Archive::new(file).unpack(dest),
        ArchiveKind::TarGz => tar::Archive::new(GzDecoder::new(file)).unpack(dest),
        ArchiveKind::Gzip => {
            let name = archive
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| kind.strip(n).to_string())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "unpacked".to_string());
            let mut decoder = GzDecoder::new(file);
            let mut out = File::create(dest.join(name))?;
            io::copy(&mut decoder, &mut out)?;
            Ok(())
        }
        ArchiveKind::Zip => zip::ZipArchive::new(file)
            .and_then(|mut archive| archive.extract(dest))
            .map_err(io::Error::other),
    }
}
