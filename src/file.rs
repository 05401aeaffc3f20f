use std::fs::File;
use std::io;
use std::io::prelude::{Read, Write};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::text_buffer::line;

pub trait Storage {
    fn exists(&self, name: &str) -> bool;
    fn read_lines(&self, name: &str) -> io::Result<Vec<String>>;
    fn write_lines(&self, name: &str, lines: &[String]) -> io::Result<()>;
}

/// Appends `.{extension}` when the file name part of `name` has no dot.
pub fn with_default_extension(name: &str, extension: &str) -> String {
    let has_dot = Path::new(name)
        .file_name()
        .map_or(false, |f| f.to_string_lossy().contains('.'));

    if has_dot {
        name.to_string()
    } else {
        format!("{}.{}", name, extension)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new() -> FsStorage {
        FsStorage::default()
    }

    pub fn rooted(root: impl Into<PathBuf>) -> FsStorage {
        FsStorage { root: root.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl Storage for FsStorage {
    fn exists(&self, name: &str) -> bool {
        self.resolve(name).exists()
    }

    fn read_lines(&self, name: &str) -> io::Result<Vec<String>> {
        let path = self.resolve(name);
        let mut bytes = Vec::new();
        BufReader::new(File::open(&path)?).read_to_end(&mut bytes)?;

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), "file is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let lines = line::split_lines(&content);
        debug!(path = %path.display(), lines = lines.len(), "file read");
        Ok(lines)
    }

    fn write_lines(&self, name: &str, lines: &[String]) -> io::Result<()> {
        let path = self.resolve(name);
        let file = &mut BufWriter::new(File::create(&path)?);
        for line in lines {
            writeln!(file, "{}", line)?;
        }
        file.flush()?;
        debug!(path = %path.display(), lines = lines.len(), "file written");
        Ok(())
    }
}
