use std::fmt::{self, Display, Formatter};

use crate::genotype::Genotype;

mod error;
pub use error::SampleError;

mod sex;
pub use sex::Sex;

mod status;
pub use status::Status;

mod description;
pub use description::{ParentDescription, SampleDescription};

/// Family identifier shared by every row of the generated PED file.
pub const FAMILY_ID: &str = "fam_id";

/// PED-format placeholder for a missing parent.
pub const NO_PARENT: &str = "-9";

/// A single pedigree member.
/// # Fields:
/// - `id`         : unique identifier of the sample within its pedigree.
/// - `sex`        : biological sex.
/// - `status`     : affection status.
/// - `paternal_id`: identifier of the father, if any.
/// - `maternal_id`: identifier of the mother, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    id         : String,
    sex        : Sex,
    status     : Status,
    paternal_id: Option<String>,
    maternal_id: Option<String>,
}

impl Sample {
    pub fn new(id: &str, sex: Sex, status: Status) -> Self {
        Self { id: id.to_string(), sex, status, paternal_id: None, maternal_id: None }
    }

    #[must_use]
    pub fn with_parents(mut self, paternal_id: &str, maternal_id: &str) -> Self {
        self.paternal_id = Some(paternal_id.to_string());
        self.maternal_id = Some(maternal_id.to_string());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn paternal_id(&self) -> Option<&str> {
        self.paternal_id.as_deref()
    }

    pub fn maternal_id(&self) -> Option<&str> {
        self.maternal_id.as_deref()
    }

    /// Return both parent ids, only if both of them are known.
    pub fn parent_ids(&self) -> Option<[&str; 2]> {
        Some([self.paternal_id()?, self.maternal_id()?])
    }

    /// PED-format row of this sample. See [`PedRow`]
    pub fn ped_row(&self) -> PedRow<'_> {
        PedRow(self)
    }

    /// Pedigree-diagram node of this sample, labeled with the genotype implied by `alt_count`.
    pub fn person_node(&self, alt_count: u8) -> PersonNode<'_> {
        PersonNode { sample: self, genotype: Genotype::from(alt_count) }
    }
}

impl TryFrom<SampleDescription> for Sample {
    type Error = SampleError;

    fn try_from(description: SampleDescription) -> Result<Self, Self::Error> {
        let status = description.status.parse::<Status>()?;
        let sex    = description.sex.parse::<Sex>()?;
        Ok(Self {
            id         : description.id,
            sex,
            status,
            paternal_id: description.father.map(|parent| parent.id),
            maternal_id: description.mother.map(|parent| parent.id),
        })
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Sample({})", self.id)
    }
}

/// Tab-separated PED row: `family, id, paternal id, maternal id, sex, phenotype`
pub struct PedRow<'a>(&'a Sample);

impl Display for PedRow<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sample = self.0;
        write!(f, "{FAMILY_ID}\t{}\t{}\t{}\t{}\t{}",
            sample.id,
            sample.paternal_id().unwrap_or(NO_PARENT),
            sample.maternal_id().unwrap_or(NO_PARENT),
            sample.sex.code(),
            sample.status.code(),
        )
    }
}

/// `pst-pdgr` person node (`\pstPerson`) of a sample.
pub struct PersonNode<'a> {
    sample  : &'a Sample,
    genotype: Genotype,
}

impl Display for PersonNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let condition = if self.sample.status.is_affected() { "affected, " } else { "normal" };
        write!(f, "\\pstPerson[condition={condition} sex={} insidetext={}]{{{}}}",
            self.sample.sex,
            self.genotype.gt(),
            self.sample.id
        )
    }
}
