//! File export seam: the stand-in for the browser download collaborator.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The download filename pattern: `${companyName}_Proposal.txt`.
pub fn proposal_filename(company_name: &str) -> String {
    format!("{company_name}_Proposal.txt")
}

/// Write a proposal document into `out_dir`, creating the directory if
/// needed. Returns the written path.
pub fn write_proposal(out_dir: &Path, company_name: &str, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let path = out_dir.join(proposal_filename(company_name));
    fs::write(&path, text)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_follows_the_download_pattern() {
        assert_eq!(
            proposal_filename("Tech Solutions Ltd"),
            "Tech Solutions Ltd_Proposal.txt"
        );
    }

    #[test]
    fn proposal_round_trips_through_the_filesystem() {
        let dir = std::env::temp_dir().join("docgen_export_test");
        let path = write_proposal(&dir, "Keane Digital", "PROPOSAL FOR: Keane Digital").unwrap();
        assert!(path.ends_with("Keane Digital_Proposal.txt"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "PROPOSAL FOR: Keane Digital"
        );
        let _ = fs::remove_dir_all(&dir);
    }
}
