extern crate parser;

use std::path::Path;

use parser::Cli;
use pedigree::Pedigree;
use mendacity_io::{
    parse::OutputFiles,
    read::TestSuite,
    write::{DiagramEmitter, GenericWriter, PedEmitter, VcfEmitter},
};
use located_error::prelude::*;

#[macro_use]
extern crate log;

/// Load a test-suite, and generate its PED, VCF and pedigree-diagram files.
///
/// # Behavior
/// - Every record is encoded before any file is touched: an invalid suite leaves previous outputs untouched.
/// - Outputs of a previous run sharing the same prefix are then removed (`.ped`, `.vcf`, `.tex`, and the
///   `.aux`, `.log`, `.pdf` by-products of a diagram rendering).
///
/// # Errors
/// - if the test-suite cannot be loaded, or describes an invalid pedigree or test case.
/// - if any output file cannot be written. The error then names the possibly incomplete file.
pub fn run(cli: &Cli) -> Result<()> {
    // ----------------------------- Load the test-suite and build the pedigree.
    let prefix = cli.file_prefix()?;
    info!("Output prefix: {}", prefix.display());
    let suite    = TestSuite::from_path(&cli.yaml)?;
    let pedigree = Pedigree::new(suite.pedigree.iter().cloned())
        .with_loc(|| format!("While building the pedigree of '{}'", cli.yaml.display()))?;
    info!("Found {} sample(s) and {} test case(s)", pedigree.len(), suite.cases.len());

    // ----------------------------- Encode everything before writing anything.
    let vcf = VcfEmitter::new(&pedigree, &suite.cases)
        .with_loc(|| format!("While encoding the test cases of '{}'", cli.yaml.display()))?;
    let ped = PedEmitter::new(&pedigree);
    let tex = DiagramEmitter::new(&pedigree, suite.first_variant());

    // ----------------------------- Prepare the output directory.
    let output_files = OutputFiles::new(&prefix)?;
    output_files.create_parent_directory()?;
    output_files.remove_stale()?;

    // ----------------------------- Write outputs.
    write_output(&output_files.tex(), "diagram", |writer| tex.write(writer))?;
    write_output(&output_files.ped(), "ped", |writer| ped.write(writer))?;
    write_output(&output_files.vcf(), "VCF", |writer| vcf.write(writer))?;
    debug!("Wrote {} VCF record(s)", vcf.records().len());
    Ok(())
}

/// Create `path` and fill it through `write`. Any error is flagged with the name of the
/// possibly incomplete file.
fn write_output<F>(path: &Path, kind: &str, write: F) -> Result<()>
where
    F: FnOnce(&mut GenericWriter) -> Result<()>,
{
    let loc_msg    = || format!("'{}' may be incomplete", path.display());
    let mut writer = GenericWriter::new(path).with_loc(loc_msg)?;
    write(&mut writer).with_loc(loc_msg)?;
    info!("wrote {kind} file to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mendacity_io::write::WriterError;

    #[test]
    fn failed_creation_is_flagged() -> Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path   = tmpdir.path().join("missing").join("trio.ped");
        let result = write_output(&path, "ped", |writer| writer.write_iter(["fam_id"]));

        let err = result.err().ok_or_else(|| anyhow!("writing into a missing directory should fail"))?;
        assert!(format!("{err:#}").contains(&format!("'{}' may be incomplete", path.display())));
        assert!(matches!(err.downcast_ref::<WriterError>(), Some(WriterError::CreateFile{..})));
        Ok(())
    }

    #[test]
    fn failed_write_is_flagged() -> Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path   = tmpdir.path().join("trio.vcf");
        let result = write_output(&path, "VCF", |writer| {
            writer.write_iter(["##fileformat=VCFv4.2"])?;
            Err(anyhow!("disk full"))
        });

        let err = result.err().ok_or_else(|| anyhow!("a failing writer should be reported"))?;
        let msg = format!("{err:#}");
        assert!(msg.contains(&format!("'{}' may be incomplete", path.display())));
        assert!(msg.contains("disk full"));
        assert_eq!(std::fs::read_to_string(&path)?, "##fileformat=VCFv4.2\n");
        Ok(())
    }

    #[test]
    fn successful_write() -> Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path   = tmpdir.path().join("trio.ped");
        write_output(&path, "ped", |writer| writer.write_iter(["fam_id\tS1"]))?;
        assert_eq!(std::fs::read_to_string(&path)?, "fam_id\tS1\n");
        Ok(())
    }
}
