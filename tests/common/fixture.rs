use std::{env, fs, path::{Path, PathBuf}, ops::Deref, fmt::{self, Formatter, Display}};
use tempfile::{self, TempDir};

pub const TEST_DATA_DIR: &str = "./tests/test-data";

/// A test-data file, copied within its own temporary directory.
/// Outputs of a test run may be written next to it through `Fixture::output()`.
pub struct Fixture {
    path: PathBuf,
    source: PathBuf,
    tempdir: TempDir,
}

impl Fixture {
    pub fn blank(fixture_filename: &str) -> Self {
        let root_dir = &env::var("CARGO_MANIFEST_DIR").expect("$CARGO_MANIFEST_DIR");
        let source   = Path::new(root_dir).join(TEST_DATA_DIR).join(fixture_filename);

        let tempdir = tempfile::tempdir().expect("Failed to generate temp directory");
        let path    = tempdir.path().join(Path::new(fixture_filename).file_name().expect("Invalid filename"));
        Fixture { tempdir, source, path }
    }

    pub fn copy(fixture_filename: &str) -> Self {
        let fixture = Fixture::blank(fixture_filename);
        fs::copy(&fixture.source, &fixture.path).expect("Failed to copy Fixture files.");
        fixture
    }

    /// Path to a file (or prefix) within the temporary directory of this fixture.
    pub fn output(&self, name: &str) -> PathBuf {
        self.tempdir.path().join(name)
    }
}

impl Deref for Fixture {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.path.deref()
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
