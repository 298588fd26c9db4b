//! Package naming, archiving, and checksum policy.
//!
//! # Sub-modules
//!
//! - [`archive`]: Zip and tar.gz creation, listing, and verification.
//! - [`archive_error`]: Error types for archive operations.
//! - [`checksum`]: SHA-256 digests and the `SHA256SUMS` listing.
//! - [`error`]: Validation errors for naming newtypes.
//! - [`generated_at`]: Generation timestamp (`GeneratedAt`).
//! - [`naming`]: Package and archive naming (`PackageName`, `ArchiveFormat`).
//! - [`product`]: Product name newtype (`ProductName`).
//! - [`version`]: Release version newtype (`ReleaseVersion`).

pub mod archive;
pub mod archive_error;
pub mod checksum;
pub mod error;
pub mod generated_at;
pub mod naming;
pub mod product;
pub mod version;
