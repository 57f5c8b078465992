//! Corpus input collaborators: anything that can hand out lines of text.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

/// Source of corpus lines.
///
/// Opening is fallible (the file may be missing or unreadable) and so is each
/// line read; both surface as errors to the caller, which should fail the run.
pub trait CorpusSource {
    type Lines: Iterator<Item = io::Result<String>>;

    /// Opens the source and returns an iterator over its lines.
    fn lines(&self) -> Result<Self::Lines>;
}

/// Plain text file read line by line.
pub struct CorpusFileLoader {
    filepath: PathBuf,
}

impl CorpusFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl CorpusSource for CorpusFileLoader {
    type Lines = io::Lines<BufReader<File>>;

    fn lines(&self) -> Result<Self::Lines> {
        let file = File::open(&self.filepath)
            .with_context(|| format!("cannot open corpus file {}", self.filepath.display()))?;
        Ok(BufReader::new(file).lines())
    }
}

/// Gzip-compressed text file, decoded on the fly.
pub struct CorpusGzFileLoader {
    filepath: PathBuf,
}

impl CorpusGzFileLoader {
    pub fn new<P>(filepath: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            filepath: PathBuf::from(filepath.as_ref()),
        }
    }
}

impl CorpusSource for CorpusGzFileLoader {
    type Lines = io::Lines<BufReader<GzDecoder<File>>>;

    fn lines(&self) -> Result<Self::Lines> {
        let file = File::open(&self.filepath)
            .with_context(|| format!("cannot open corpus file {}", self.filepath.display()))?;
        Ok(BufReader::new(GzDecoder::new(file)).lines())
    }
}

/// In-memory text, mainly for tests and doc examples.
pub struct CorpusTextLoader<'a> {
    text: &'a [u8],
}

impl<'a> CorpusTextLoader<'a> {
    pub const fn new(text: &'a [u8]) -> Self {
        Self { text }
    }
}

impl<'a> CorpusSource for CorpusTextLoader<'a> {
    type Lines = io::Lines<BufReader<&'a [u8]>>;

    fn lines(&self) -> Result<Self::Lines> {
        Ok(BufReader::new(self.text).lines())
    }
}
