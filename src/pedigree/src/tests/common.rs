use crate::{Pedigree, PedigreeError, SampleDescription};

/// Mock a parents-offspring trio. The offspring is declared first, to ensure
/// parent resolution does not depend on declaration order.
pub fn mock_trio() -> Result<Pedigree, PedigreeError> {
    Pedigree::new(vec![
        SampleDescription::new("kid", "affected", "female").with_parents("dad", "mom"),
        SampleDescription::new("dad", "unaffected", "male"),
        SampleDescription::new("mom", "carrier", "female"),
    ])
}

/// Mock a family of two parents and two siblings.
pub fn mock_quartet() -> Result<Pedigree, PedigreeError> {
    Pedigree::new(vec![
        SampleDescription::new("dad", "unaffected", "male"),
        SampleDescription::new("mom", "unaffected", "female"),
        SampleDescription::new("sis", "affected", "female").with_parents("dad", "mom"),
        SampleDescription::new("bro", "unknown", "male").with_parents("dad", "mom"),
    ])
}
