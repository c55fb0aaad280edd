use anyhow::Result;

use located_error::LocatedError;
use pedigree::{sample::PedRow, Pedigree, Sample};

use super::GenericWriter;

/// PED-format serializer: one tab-separated row per sample, in declaration order.
pub struct PedEmitter<'a> {
    pedigree: &'a Pedigree,
}

impl<'a> PedEmitter<'a> {
    pub fn new(pedigree: &'a Pedigree) -> Self {
        Self { pedigree }
    }

    pub fn rows(&self) -> impl Iterator<Item = PedRow<'a>> {
        self.pedigree.samples().iter().map(Sample::ped_row)
    }

    /// # Errors
    /// - if any row fails to get written by `writer`.
    pub fn write(&self, writer: &mut GenericWriter) -> Result<()> {
        writer.write_iter(self.rows()).loc("While writing PED rows")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree::SampleDescription;
    use pretty_assertions::assert_eq;

    #[test]
    fn write_trio() -> Result<()> {
        let pedigree = Pedigree::new(vec![
            SampleDescription::new("dad", "unaffected", "male"),
            SampleDescription::new("mom", "carrier", "female"),
            SampleDescription::new("kid", "affected", "female").with_parents("dad", "mom"),
        ])?;

        let tmpdir = tempfile::tempdir()?;
        let path   = tmpdir.path().join("trio.ped");
        PedEmitter::new(&pedigree).write(&mut GenericWriter::new(&path)?)?;

        let want = "fam_id\tdad\t-9\t-9\t1\t1\n\
                    fam_id\tmom\t-9\t-9\t2\t1\n\
                    fam_id\tkid\tdad\tmom\t2\t2\n";
        assert_eq!(std::fs::read_to_string(path)?, want);
        Ok(())
    }

    #[test]
    fn one_row_per_sample() -> Result<()> {
        let pedigree = Pedigree::new(vec![SampleDescription::new("S1", "affected", "female")])?;
        let rows = PedEmitter::new(&pedigree).rows().map(|row| row.to_string()).collect::<Vec<_>>();
        assert_eq!(rows, vec!["fam_id\tS1\t-9\t-9\t2\t2"]);
        Ok(())
    }

    #[test]
    fn empty_pedigree_writes_an_empty_file() -> Result<()> {
        let pedigree = Pedigree::new(Vec::new())?;
        let tmpdir   = tempfile::tempdir()?;
        let path     = tmpdir.path().join("empty.ped");
        PedEmitter::new(&pedigree).write(&mut GenericWriter::new(&path)?)?;
        assert_eq!(std::fs::read_to_string(path)?, "");
        Ok(())
    }
}
