//! `PACKAGE-INFO.md` rendering.

use crate::artefact::generated_at::GeneratedAt;
use crate::artefact::naming::PackageName;

/// File name of the per-package information sheet.
pub const PACKAGE_INFO_FILENAME: &str = "PACKAGE-INFO.md";

/// Render the information sheet for `name`.
///
/// # Examples
///
/// ```
/// use pageforge_packager::artefact::generated_at::GeneratedAt;
/// use pageforge_packager::artefact::naming::PackageName;
/// use pageforge_packager::artefact::product::ProductName;
/// use pageforge_packager::artefact::version::ReleaseVersion;
/// use pageforge_packager::metadata::render_package_info;
/// use pageforge_packager::platform::Platform;
///
/// let name = PackageName::new(
///     ProductName::default(),
///     Platform::Windows,
///     ReleaseVersion::default(),
/// );
/// let info = render_package_info(&name, &GeneratedAt::new("2025-01-31 12:00:00"));
/// assert!(info.starts_with("# PageForge v2.0.0 - Windows package"));
/// assert!(info.contains("- **Generated**: 2025-01-31 12:00:00"));
/// ```
#[must_use]
pub fn render_package_info(name: &PackageName, generated_at: &GeneratedAt) -> String {
    let platform = name.platform();
    let metadata = platform.metadata();
    let mut lines = vec![
        format!(
            "# {} v{} - {} package",
            name.product().display_name(),
            name.version(),
            platform.label()
        ),
        String::new(),
        "## Details".to_owned(),
        format!("- **Type**: {}", metadata.kind),
        format!("- **Requirements**: {}", metadata.requirements),
        format!("- **Installation**: {}", metadata.installation),
        format!("- **Version**: {}", name.version()),
        format!("- **Generated**: {generated_at}"),
        String::new(),
        "## Features".to_owned(),
    ];
    lines.extend(metadata.features.iter().map(|feature| format!("- {feature}")));
    lines.extend([
        String::new(),
        "## Support".to_owned(),
        "See the documentation included in this package for help.".to_owned(),
        String::new(),
    ]);
    lines.join("\n")
}
