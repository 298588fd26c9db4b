//! PageForge packager library.
//!
//! Builds the distributable archives of the PageForge web application for
//! four deployment targets. It is used by the `pageforge-packager` binary
//! and can be driven programmatically for tests or custom release flows.
//!
//! # Modules
//!
//! - [`artefact`] - Package naming, archives, and checksums
//! - [`assembler`] - Staging directory assembly for one package
//! - [`cli`] - Command-line argument definitions
//! - [`config`] - Layered run configuration
//! - [`copier`] - Filtered project copy
//! - [`editor`] - VS Code configuration documents
//! - [`error`] - Error types
//! - [`files`] - Writing generated text and scripts
//! - [`filter`] - Exclusion patterns
//! - [`generator`] - Run orchestration
//! - [`guide`] - Distribution guide rendering
//! - [`layout`] - Project files shipped per tier
//! - [`metadata`] - `PACKAGE-INFO.md` rendering
//! - [`platform`] - Deployment targets
//! - [`summary`] - Archive listing and size formatting
//! - [`templates`] - Bundled document templates

pub mod artefact;
pub mod assembler;
pub mod cli;
pub mod config;
pub mod copier;
pub mod editor;
pub mod error;
pub mod files;
pub mod filter;
pub mod generator;
pub mod guide;
pub mod layout;
pub mod metadata;
pub mod platform;
pub mod summary;
pub mod templates;
