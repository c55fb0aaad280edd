use std::{fs::File, io::{BufReader, Read}, path::Path};

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use located_error::LocatedError;
use pedigree::{SampleDescription, TestCase};

mod error;
pub use error::SuiteError;

/// Declarative description of a pedigree, and of the Mendelian inheritance test cases to generate for it.
/// # Fields:
/// - `pedigree`: raw description of every pedigree member, in VCF column order.
/// - `cases`   : test cases. Each genotype-call variant of a case becomes a VCF record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    pub pedigree: Vec<SampleDescription>,
    #[serde(default)]
    pub cases   : Vec<TestCase>,
}

impl TestSuite {
    /// Load a test-suite from a YAML file.
    ///
    /// # Errors
    /// - `OpenFile` if `path` cannot be opened.
    /// - `Deserialize` if the file contents do not follow the test-suite schema.
    pub fn from_path(path: &Path) -> Result<Self> {
        let loc_msg = || format!("While loading test-suite '{}'", path.display());
        let file = File::open(path).map_err(SuiteError::OpenFile).with_loc(loc_msg)?;
        let suite = Self::from_reader(BufReader::new(file)).with_loc(loc_msg)?;
        debug!("Loaded {} sample(s) and {} test case(s) from {}", suite.pedigree.len(), suite.cases.len(), path.display());
        Ok(suite)
    }

    /// Deserialize a test-suite from any YAML source.
    ///
    /// # Errors
    /// - `Deserialize` if the contents do not follow the test-suite schema.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_yaml::from_reader(reader)
            .map_err(SuiteError::Deserialize)
            .loc("While deserializing test-suite")
    }

    /// Alt allele counts of the very first variant of this suite, if any.
    pub fn first_variant(&self) -> Option<&[u8]> {
        self.cases.iter().flat_map(TestCase::variants).next()
    }
}
