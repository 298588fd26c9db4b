//! `DISTRIBUTION-GUIDE.md` rendering.
//!
//! The guide is written once per run into the output directory. It lists
//! each package, gives release instructions, and embeds the SHA-256 table
//! also written to `SHA256SUMS`.

use crate::artefact::checksum::Sha256Digest;
use crate::artefact::generated_at::GeneratedAt;
use crate::artefact::naming::PackageName;

/// File name of the distribution guide.
pub const GUIDE_FILENAME: &str = "DISTRIBUTION-GUIDE.md";

/// Inputs for the distribution guide.
#[derive(Debug, Clone, Copy)]
pub struct GuideInput<'a> {
    /// Packages built in this run, in build order.
    pub packages: &'a [PackageName],
    /// Archive checksums, in the same order.
    pub checksums: &'a [(String, Sha256Digest)],
    /// When the run started.
    pub generated_at: &'a GeneratedAt,
}

/// Render the distribution guide.
///
/// The title uses the product and version of the first package; every
/// package of a run shares them.
#[must_use]
pub fn render_distribution_guide(input: &GuideInput<'_>) -> String {
    let mut lines = Vec::new();
    match input.packages.first() {
        Some(first) => lines.push(format!(
            "# {} v{} distribution guide",
            first.product().display_name(),
            first.version()
        )),
        None => lines.push("# Distribution guide".to_owned()),
    }
    lines.push(input.generated_at.to_string());
    lines.push(String::new());
    lines.push("## Generated packages".to_owned());

    for package in input.packages {
        let metadata = package.platform().metadata();
        lines.extend([
            String::new(),
            format!("### {}", package.archive_filename()),
            format!("- **Type**: {}", metadata.kind),
            format!("- **Installation**: {}", metadata.installation),
            format!("- **Usage**: {}", metadata.usage),
        ]);
    }

    lines.extend([
        String::new(),
        "## Distribution instructions".to_owned(),
        String::new(),
        "1. **Test** every package before release".to_owned(),
        "2. **Check** that each archive contains all expected files".to_owned(),
        "3. **Document** the changes in this version".to_owned(),
        "4. **Publish** each archive on the appropriate channel".to_owned(),
        String::new(),
        "## Archive checksums".to_owned(),
        String::new(),
        "SHA-256 digests, also written to `SHA256SUMS`:".to_owned(),
        String::new(),
        "```text".to_owned(),
    ]);
    lines.extend(
        input
            .checksums
            .iter()
            .map(|(name, digest)| format!("{digest}  {name}")),
    );
    lines.extend([
        "```".to_owned(),
        String::new(),
        "Verify a download with `sha256sum -c SHA256SUMS` on Linux/macOS or".to_owned(),
        "`certutil -hashfile <archive> SHA256` on Windows.".to_owned(),
        String::new(),
        "## User support".to_owned(),
        String::new(),
        "- `README.md` in every package".to_owned(),
        "- Platform installation notes (`INSTALLATION-GUIDE.txt`, `WINDOWS-INSTALL.txt`,"
            .to_owned(),
        "  `LINUX-INSTALL.txt`, `DEVELOPMENT.txt`)".to_owned(),
        "- `PACKAGE-INFO.md` with requirements and features".to_owned(),
        String::new(),
    ]);
    lines.join("\n")
}
