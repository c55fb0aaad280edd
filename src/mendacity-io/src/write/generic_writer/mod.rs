use std::{fs::File, io::{Write, BufWriter}, path::Path};
use anyhow::Result;

use located_error::LocatedError;

pub mod error;
pub use error::WriterError;

/// A generic line-oriented file writer.
/// - source: `BufWriter` over the output file.
pub struct GenericWriter {
    source: BufWriter<File>
}

impl GenericWriter {
    /// Instantiate a new `Writer`, linked to a file. Any existing file is truncated.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: impl AsRef<Path>) -> Result<GenericWriter> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|source| WriterError::CreateFile{path: path.to_path_buf(), source})
            .loc("While creating file")?;
        Ok(GenericWriter{ source: BufWriter::new(file) })
    }

    /// Write the contents of a generic iterator within a file/stdout.
    /// one Iteration step = one line.
    ///
    /// # Errors
    /// - If any of the Items within `iter` fails to get written within the file.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        iter.into_iter()
            .try_for_each(|obj| writeln!(self.source, "{obj}"))
            .map_err(WriterError::IOError)
            .loc("While writing contents into file")?;

        self.source.flush().map_err(WriterError::IOError).loc("While flushing buffer contents of Writer")
    }
}
