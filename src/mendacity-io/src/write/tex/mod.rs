use std::{collections::HashSet, fmt::{self, Display, Formatter}};

use anyhow::Result;

use located_error::LocatedError;
use pedigree::Pedigree;

use super::GenericWriter;

const PREAMBLE: &str = "\
\\documentclass{article}
\\usepackage[utf8]{inputenc}
\\usepackage{pstricks}
\\usepackage{pst-pdgr}
\\begin{document}";

const END: &str = "\\end{document}";

/// Alt allele count used to label person nodes when no genotype is provided.
const DEFAULT_ALT_COUNT: u8 = 1;

// Node coordinates: x = X_OFFSET + X_STEP * rank, y = Y_TOP - Y_STEP * generation.
const X_OFFSET: f64 = 0.5;
const X_STEP  : f64 = 2.0;
const Y_TOP   : f64 = 1.5;
const Y_STEP  : f64 = 0.9;

/// `pst-pdgr` pedigree-diagram serializer. The resulting LaTeX document is left for an external
/// renderer to process.
///
/// Each person node is labeled with the genotype of its sample within `alts`, or as heterozygous
/// if `alts` is missing or too short.
pub struct DiagramEmitter<'a> {
    pedigree: &'a Pedigree,
    alts    : Option<&'a [u8]>,
}

impl<'a> DiagramEmitter<'a> {
    pub fn new(pedigree: &'a Pedigree, alts: Option<&'a [u8]>) -> Self {
        Self { pedigree, alts }
    }

    fn alt_count(&self, index: usize) -> u8 {
        self.alts.and_then(|alts| alts.get(index)).copied().unwrap_or(DEFAULT_ALT_COUNT)
    }

    /// # Errors
    /// - if the document fails to get written by `writer`.
    pub fn write(&self, writer: &mut GenericWriter) -> Result<()> {
        writer.write_iter(std::iter::once(self)).loc("While writing pedigree diagram")
    }
}

impl Display for DiagramEmitter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PREAMBLE}")?;

        // ---- Person nodes, laid out by generation.
        let generations = self.pedigree.generations();
        let mut ranks   = vec![0usize; generations.iter().max().map_or(0, |max| max + 1)];
        for (i, (sample, generation)) in self.pedigree.samples().iter().zip(generations).enumerate() {
            let x = X_OFFSET + X_STEP * ranks[generation] as f64;
            let y = Y_TOP - Y_STEP * generation as f64;
            ranks[generation] += 1;
            writeln!(f, "\\rput({x:.1},{y:.1}){{{}}}", sample.person_node(self.alt_count(i)))?;
        }

        // ---- One relationship line per couple.
        let mut seen = HashSet::new();
        for (father, mother) in self.pedigree.spouses() {
            if seen.insert((father.id(), mother.id())) {
                writeln!(f, "\\pstRelationship[descentnode={0}{1}]{{{0}}}{{{1}}}", father.id(), mother.id())?;
            }
        }

        // ---- One descent line per child.
        for child in self.pedigree.samples() {
            if let Some((father, mother)) = self.pedigree.parents_of(child) {
                writeln!(f, "\\ncline{{{}{}}}{{{}}}", father.id(), mother.id(), child.id())?;
            }
        }
        write!(f, "{END}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree::{sample::ParentDescription, SampleDescription};
    use pretty_assertions::assert_eq;

    fn quartet() -> Result<Pedigree> {
        Ok(Pedigree::new(vec![
            SampleDescription::new("dad", "unaffected", "male"),
            SampleDescription::new("mom", "unaffected", "female"),
            SampleDescription::new("sis", "affected", "female").with_parents("dad", "mom"),
            SampleDescription::new("bro", "unknown", "male").with_parents("dad", "mom"),
        ])?)
    }

    #[test]
    fn quartet_document() -> Result<()> {
        let pedigree = quartet()?;
        let alts     = [0u8, 1, 2, 3];
        let got      = DiagramEmitter::new(&pedigree, Some(alts.as_slice())).to_string();
        let want     = "\
\\documentclass{article}
\\usepackage[utf8]{inputenc}
\\usepackage{pstricks}
\\usepackage{pst-pdgr}
\\begin{document}
\\rput(0.5,1.5){\\pstPerson[condition=normal sex=male insidetext=0/0]{dad}}
\\rput(2.5,1.5){\\pstPerson[condition=normal sex=female insidetext=0/1]{mom}}
\\rput(0.5,0.6){\\pstPerson[condition=affected,  sex=female insidetext=1/1]{sis}}
\\rput(2.5,0.6){\\pstPerson[condition=normal sex=male insidetext=./.]{bro}}
\\pstRelationship[descentnode=dadmom]{dad}{mom}
\\ncline{dadmom}{sis}
\\ncline{dadmom}{bro}
\\end{document}";
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn defaults_to_heterozygous_labels() -> Result<()> {
        let pedigree = quartet()?;
        let got      = DiagramEmitter::new(&pedigree, None).to_string();
        assert_eq!(got.matches("insidetext=0/1]").count(), 4);

        let short    = [2u8];
        let got      = DiagramEmitter::new(&pedigree, Some(short.as_slice())).to_string();
        assert_eq!(got.matches("insidetext=0/1]").count(), 3);
        assert_eq!(got.matches("insidetext=1/1]").count(), 1);
        Ok(())
    }

    #[test]
    fn offspring_declared_first() -> Result<()> {
        let pedigree = Pedigree::new(vec![
            SampleDescription::new("kid", "affected", "female").with_parents("dad", "mom"),
            SampleDescription::new("dad", "unaffected", "male"),
            SampleDescription::new("mom", "unaffected", "female"),
        ])?;
        let got = DiagramEmitter::new(&pedigree, None).to_string();
        assert!(got.contains("\\rput(0.5,0.6){\\pstPerson[condition=affected,  sex=female insidetext=0/1]{kid}}"));
        assert!(got.contains("\\rput(0.5,1.5){\\pstPerson[condition=normal sex=male insidetext=0/1]{dad}}"));
        assert!(got.contains("\\rput(2.5,1.5){\\pstPerson[condition=normal sex=female insidetext=0/1]{mom}}"));
        Ok(())
    }

    #[test]
    fn single_parent_has_no_descent_line() -> Result<()> {
        let mut kid = SampleDescription::new("kid", "affected", "female");
        kid.father  = Some(ParentDescription { id: "dad".to_string() });
        let pedigree = Pedigree::new(vec![SampleDescription::new("dad", "unaffected", "male"), kid])?;

        let got = DiagramEmitter::new(&pedigree, None).to_string();
        assert!(got.contains("\\rput(0.5,0.6){\\pstPerson[condition=affected,  sex=female insidetext=0/1]{kid}}"));
        assert!(!got.contains("\\pstRelationship"));
        assert!(!got.contains("\\ncline"));
        Ok(())
    }
}
