use crate::error::Error;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A script source together with the path it was opened from.
pub struct PathRead {
    pub path: PathBuf,
    pub read: Box<dyn Read>,
}

impl PathRead {
    pub fn new(path: impl Into<PathBuf>, read: impl Read + 'static) -> Self {
        let path = path.into();
        let read = Box::new(read);
        Self { path, read }
    }

    /// Lazily open the given files.
    pub fn from_pathbufs(files: &[PathBuf]) -> impl Iterator<Item = Result<Self, Error>> + '_ {
        files.iter().map(|file| Self::try_from(file.as_path()))
    }
}

impl TryFrom<&Path> for PathRead {
    type Error = Error;

    /// Open a file, or standard input if the path is "-".
    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        if path == Path::new("-") {
            Ok(Self::new(path, io::stdin()))
        } else {
            Ok(Self::new(path, std::fs::File::open(path)?))
        }
    }
}
