//! Product name newtype for package naming.
//!
//! The product name is the first component of every staging directory and
//! archive file name, so it is restricted to lowercase ASCII letters,
//! digits, and inner hyphens.

use super::error::{NamingError, Result};
use serde::Deserialize;
use std::fmt;

/// Product name used when nothing else is configured.
pub const DEFAULT_PRODUCT: &str = "pageforge";

/// A validated product name.
///
/// # Examples
///
/// ```
/// use pageforge_packager::artefact::product::ProductName;
///
/// let product = ProductName::try_from("pageforge").expect("valid product");
/// assert_eq!(product.as_str(), "pageforge");
/// assert_eq!(product.display_name(), "PageForge");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Return the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the human-facing spelling used in generated documents.
    ///
    /// The default product keeps its brand capitalisation; any other name
    /// is shown with its first letter upper-cased.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.0 == DEFAULT_PRODUCT {
            return "PageForge".to_owned();
        }
        let mut chars = self.0.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_ascii_uppercase().to_string() + chars.as_str()
        })
    }
}

impl Default for ProductName {
    fn default() -> Self {
        Self(DEFAULT_PRODUCT.to_owned())
    }
}

impl TryFrom<&str> for ProductName {
    type Error = NamingError;

    fn try_from(value: &str) -> Result<Self> {
        validate_product(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for ProductName {
    type Error = NamingError;

    fn try_from(value: String) -> Result<Self> {
        validate_product(&value)?;
        Ok(Self(value))
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_product(value: &str) -> Result<()> {
    let reject = |reason: &str| NamingError::InvalidProduct {
        value: value.to_owned(),
        reason: reason.to_owned(),
    };
    if value.is_empty() {
        return Err(reject("product name must not be empty"));
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Err(reject("product name must not start or end with '-'"));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(NamingError::InvalidProduct {
            value: value.to_owned(),
            reason: format!("unexpected character '{bad}'"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("pageforge")]
    #[case::hyphenated("page-forge")]
    #[case::digits("forge2")]
    fn accepts_file_name_safe_products(#[case] value: &str) {
        assert!(ProductName::try_from(value).is_ok());
    }

    #[rstest]
    #[case::empty("")]
    #[case::uppercase("PageForge")]
    #[case::space("page forge")]
    #[case::slash("page/forge")]
    #[case::leading_hyphen("-forge")]
    fn rejects_unsafe_products(#[case] value: &str) {
        let err = ProductName::try_from(value).expect_err("should be rejected");
        assert!(matches!(err, NamingError::InvalidProduct { .. }));
    }

    #[test]
    fn default_product_keeps_brand_spelling() {
        assert_eq!(ProductName::default().display_name(), "PageForge");
    }

    #[test]
    fn other_products_are_capitalised() {
        let product = ProductName::try_from("sitejet").expect("valid");
        assert_eq!(product.display_name(), "Sitejet");
    }
}
