use std::{fs, io::ErrorKind, path::{Path, PathBuf}};

use located_error::LocatedError;

use log::{debug, trace};
use anyhow::Result;

mod error;
pub use error::ParseError;

/// Extensions of every file a previous run (or a later diagram rendering) may have left behind.
pub const STALE_EXTENSIONS: [&str; 6] = ["ped", "vcf", "tex", "aux", "log", "pdf"];

/// Attempt to create the parent directories of a path (if needed) and return an error if it failed.
pub fn create_parent_directory(path: &Path) -> Result<()> {
    use ParseError::CreateParentDirectory;
    let parent_dir = path.parent().unwrap_or(path);
    let loc_msg = || format!("While attempting to create output directory '{}'", path.display());
    fs::create_dir_all(parent_dir).map_err(CreateParentDirectory).with_loc(loc_msg)?;
    Ok(())
}

/// Attempt to convert a path to string, and return an error if it failed.
fn maybe_to_str(path: &Path) -> Result<&str> {
    use ParseError::InvalidFilename;
    path.to_str().filter(|s| !s.is_empty()).ok_or(InvalidFilename).loc("While converting path to string")
}

/// Output filenames, derived from a common prefix: `<prefix>.ped`, `<prefix>.vcf` and `<prefix>.tex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    prefix: String,
}

impl OutputFiles {
    /// # Errors
    /// - `InvalidFilename` if `prefix` is empty or contains invalid UTF-8 characters.
    pub fn new(prefix: &Path) -> Result<Self> {
        let prefix = maybe_to_str(prefix).loc("While formatting the name of the output files")?;
        Ok(Self { prefix: prefix.to_string() })
    }

    /// Append an extension to the prefix. Dots within the prefix are kept as-is.
    fn with_extension(&self, ext: &str) -> PathBuf {
        let mut file = PathBuf::from(format!("{}.", self.prefix)); // Final dot to fake an extension.
        file.set_extension(ext);
        file
    }

    pub fn prefix(&self) -> &Path {
        Path::new(&self.prefix)
    }

    pub fn ped(&self) -> PathBuf {
        self.with_extension("ped")
    }

    pub fn vcf(&self) -> PathBuf {
        self.with_extension("vcf")
    }

    pub fn tex(&self) -> PathBuf {
        self.with_extension("tex")
    }

    /// Create the output directory, if needed.
    ///
    /// # Errors
    /// - `CreateParentDirectory` if the user lacks the proper UNIX permissions.
    pub fn create_parent_directory(&self) -> Result<()> {
        create_parent_directory(self.prefix())
    }

    /// Remove any output of a previous run. Return the paths that were actually removed.
    ///
    /// # Errors
    /// - `RemoveStale` if an existing file cannot be removed.
    pub fn remove_stale(&self) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for ext in STALE_EXTENSIONS {
            let path = self.with_extension(ext);
            match fs::remove_file(&path) {
                Ok(()) => {
                    debug!("Removed stale file {}", path.display());
                    removed.push(path);
                },
                Err(e) if e.kind() == ErrorKind::NotFound => trace!("No stale file at {}", path.display()),
                Err(source) => {
                    let loc_msg = "While removing outputs of a previous run";
                    return Err(ParseError::RemoveStale{path, source}).loc(loc_msg)
                },
            }
        }
        Ok(removed)
    }
}
