//! File collection and memory-mapped reads for multi-file scans.
//!
//! Directory arguments are expanded with an ignore-aware walk (hidden
//! files and gitignored paths are skipped, as are the usual junk
//! directories), optionally narrowed by a glob on the path relative to
//! the walked root. Contents are memory-mapped so large inputs are never
//! copied before scanning.

use anyhow::{Context, Result};
use globset::Glob;
use ignore::WalkBuilder;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Read-only view of a file's bytes.
///
/// Empty files cannot be mapped, so they are represented without a map.
pub struct FileContents {
    mmap: Option<Mmap>,
}

impl FileContents {
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

/// Memory-map a file's contents.
pub fn map_contents(path: &Path) -> Result<FileContents> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();
    if len == 0 {
        return Ok(FileContents { mmap: None });
    }
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("failed to map {}", path.display()))?;
    Ok(FileContents { mmap: Some(mmap) })
}

/// Walk a directory tree and collect the files to scan, sorted for
/// deterministic output order.
pub fn collect(root: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let matcher = glob
        .map(|g| Glob::new(g).map(|g| g.compile_matcher()))
        .transpose()
        .with_context(|| format!("invalid glob {:?}", glob.unwrap_or_default()))?;

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !matches!(
                name.as_ref(),
                ".git" | "node_modules" | "target" | "__pycache__" | ".venv" | "venv"
            )
        })
        .build();

    let mut paths: Vec<PathBuf> = walker
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| match &matcher {
            Some(m) => m.is_match(path.strip_prefix(root).unwrap_or(path.as_path())),
            None => true,
        })
        .collect();

    paths.sort();
    Ok(paths)
}

/// Null bytes or a high share of control bytes mark content as binary.
/// Binary files are skipped during directory scans; explicitly named
/// files are always scanned.
pub fn is_binary(content: &[u8]) -> bool {
    let sample = &content[..content.len().min(8192)];
    if memchr::memchr(0, sample).is_some() {
        return true;
    }
    let control = sample
        .iter()
        .filter(|&&b| b < 0x20 && b != b'\n' && b != b'\r' && b != b'\t')
        .count();
    control > sample.len() / 8
}
