use std::{ffi::OsStr, path::{Path, PathBuf}};

use located_error::LocatedError;

use clap::Parser;
use serde::{Serialize, Deserialize};
use log::debug;
use anyhow::Result;

mod error;
pub use error::ParserError;

/// Input file extensions stripped when deriving a default output prefix. Order matters.
const YAML_EXTENSIONS: [&str; 2] = [".yaml", ".yml"];

/// Prefix value requesting the default, input-derived, output prefix.
const CURRENT_DIR: &str = ".";

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[clap(name="mendacity-rs", author, version, about, long_about = None)]
/// mendacity-rs: generate PED/VCF test fixtures for Mendelian inheritance checks.
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them. The path of each written file is reported at the Info level.
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emmited and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    /// Prefix of the output files.
    ///
    /// Outputs are written to '<prefix>.ped', '<prefix>.vcf' and '<prefix>.tex'. Missing parent
    /// directories are created. Defaults to the name of the input yaml file, stripped from its
    /// '.yaml' or '.yml' extension, within the current working directory.
    #[clap(short='p', long)]
    pub prefix: Option<PathBuf>,

    /// Path to a YAML file describing a pedigree and its Mendelian inheritance test cases.
    #[clap(parse(try_from_os_str=valid_input_file))]
    pub yaml: PathBuf,
}

impl Cli {
    /// Log command line arguments, serialized in yaml format.
    ///
    /// # Errors
    /// - `Serialize` if `serde_yaml` fails to parse `Self` to a string.
    pub fn serialize(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self)
            .map_err(ParserError::Serialize)
            .loc("While logging command line arguments")?;
        debug!("\n---- Command line args ----\n{}\n---", serialized);
        Ok(())
    }

    /// Output file prefix: `--prefix` if provided (and not `.`), or the filename of the input yaml.
    ///
    /// # Errors
    /// - `ParseOutputPrefix` if a prefix cannot be derived from the input yaml filename.
    pub fn file_prefix(&self) -> Result<PathBuf> {
        if let Some(prefix) = self.prefix.as_ref().filter(|prefix| prefix.as_os_str() != CURRENT_DIR) {
            return Ok(prefix.clone())
        }

        let mut file_prefix = self.yaml.file_name()
            .and_then(OsStr::to_str)
            .ok_or(ParserError::ParseOutputPrefix)
            .loc("While parsing command line arguments")?;

        for ext in YAML_EXTENSIONS {
            file_prefix = file_prefix.strip_suffix(ext).unwrap_or(file_prefix);
        }

        if file_prefix.is_empty() {
            return Err(ParserError::ParseOutputPrefix).loc("While parsing command line arguments")
        }
        Ok(PathBuf::from(file_prefix))
    }
}

/// Ensure the positional yaml argument points to an existing, regular file.
fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    use ParserError::{MissingFile, NotAFile};
    let path = Path::new(s);
    if ! path.exists() {
        return Err(MissingFile(path.display().to_string())).loc("While checking for file validity")
    }
    if ! path.is_file() {
        return Err(NotAFile(path.display().to_string())).loc("While checking for file validity")
    }
    Ok(path.to_path_buf())
}
