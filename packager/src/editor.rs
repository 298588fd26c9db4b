//! VS Code workspace configuration shipped with the development package.
//!
//! The files land in `.vscode-template/`; the bundled configurator renames
//! that folder to `.vscode` on the developer's machine.

use crate::error::{PackagerError, Result};
use crate::files::write_text;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Folder, relative to the staging directory, holding the editor files.
pub const EDITOR_TEMPLATE_DIR: &str = ".vscode-template";

/// `settings.json` contents.
#[derive(Debug, Serialize)]
pub struct EditorSettings {
    #[serde(rename = "typescript.preferences.importModuleSpecifier")]
    import_module_specifier: &'static str,
    #[serde(rename = "editor.formatOnSave")]
    format_on_save: bool,
    #[serde(rename = "editor.defaultFormatter")]
    default_formatter: &'static str,
    #[serde(rename = "editor.codeActionsOnSave")]
    code_actions_on_save: BTreeMap<&'static str, bool>,
    #[serde(rename = "tailwindCSS.includeLanguages")]
    tailwind_languages: BTreeMap<&'static str, &'static str>,
    #[serde(rename = "emmet.includeLanguages")]
    emmet_languages: BTreeMap<&'static str, &'static str>,
    #[serde(rename = "files.exclude")]
    files_exclude: BTreeMap<&'static str, bool>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            import_module_specifier: "relative",
            format_on_save: true,
            default_formatter: "esbenp.prettier-vscode",
            code_actions_on_save: BTreeMap::from([("source.fixAll.eslint", true)]),
            tailwind_languages: BTreeMap::from([
                ("typescript", "typescript"),
                ("typescriptreact", "typescriptreact"),
            ]),
            emmet_languages: BTreeMap::from([
                ("javascript", "javascriptreact"),
                ("typescript", "typescriptreact"),
            ]),
            files_exclude: BTreeMap::from([
                ("**/.git", true),
                ("**/database.sqlite*", true),
                ("**/dist", true),
                ("**/node_modules", true),
            ]),
        }
    }
}

/// `extensions.json` contents.
#[derive(Debug, Serialize)]
pub struct ExtensionRecommendations {
    recommendations: Vec<&'static str>,
}

impl Default for ExtensionRecommendations {
    fn default() -> Self {
        Self {
            recommendations: vec![
                "ms-vscode.vscode-typescript-next",
                "bradlc.vscode-tailwindcss",
                "esbenp.prettier-vscode",
                "dbaeumer.vscode-eslint",
                "formulahendry.auto-rename-tag",
                "christian-kohler.path-intellisense",
            ],
        }
    }
}

/// One debugger launch configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfiguration {
    name: String,
    #[serde(rename = "type")]
    kind: &'static str,
    request: &'static str,
    program: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    args: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    out_files: Vec<&'static str>,
    console: &'static str,
}

/// `launch.json` contents.
#[derive(Debug, Serialize)]
pub struct LaunchFile {
    version: &'static str,
    configurations: Vec<LaunchConfiguration>,
}

impl LaunchFile {
    /// Client and server debug targets labelled with `product`.
    #[must_use]
    pub fn for_product(product: &str) -> Self {
        Self {
            version: "0.2.0",
            configurations: vec![
                LaunchConfiguration {
                    name: format!("Debug {product} Client"),
                    kind: "node",
                    request: "launch",
                    program: "${workspaceFolder}/node_modules/.bin/vite",
                    args: vec!["--mode", "development"],
                    out_files: Vec::new(),
                    console: "integratedTerminal",
                },
                LaunchConfiguration {
                    name: format!("Debug {product} Server"),
                    kind: "node",
                    request: "launch",
                    program: "${workspaceFolder}/server/index.ts",
                    args: Vec::new(),
                    out_files: vec!["${workspaceFolder}/dist/**/*.js"],
                    console: "integratedTerminal",
                },
            ],
        }
    }
}

/// Write `settings.json`, `extensions.json` and `launch.json` under
/// `<staging_dir>/.vscode-template/`.
///
/// # Errors
///
/// Returns [`PackagerError::Serialization`] if a document cannot be encoded,
/// or a write error if a file cannot be created.
pub fn write_editor_config(staging_dir: &Path, product: &str) -> Result<()> {
    let dir = staging_dir.join(EDITOR_TEMPLATE_DIR);
    write_json(&dir, "settings.json", &EditorSettings::default())?;
    write_json(
        &dir,
        "extensions.json",
        &ExtensionRecommendations::default(),
    )?;
    write_json(&dir, "launch.json", &LaunchFile::for_product(product))
}

fn write_json<T: Serialize>(dir: &Path, name: &'static str, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|source| PackagerError::Serialization { name, source })?;
    json.push('\n');
    write_text(&dir.join(name), &json)
}
