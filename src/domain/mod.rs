//! Domain-name normalization and public-suffix classification.
//!
//! This module reduces user input to a registrable domain (effective TLD
//! plus one label) and classifies the suffix against the Public Suffix List.
//! Both operations are pure local computations with no network access.

use crate::error_handling::NormalizeError;

/// Normalizes a domain name to its registrable form.
///
/// Lowercases the input, converts internationalized names to their ASCII
/// (punycode) form, and reduces the result to the effective TLD plus one
/// label (e.g. `www.example.co.uk` becomes `example.co.uk`).
///
/// # Arguments
///
/// * `input` - The domain name as entered by the user (ASCII or IDN)
///
/// # Errors
///
/// Returns [`NormalizeError::Idna`] if the name is not a valid
/// internationalized domain name, or [`NormalizeError::NoRegistrableDomain`]
/// if the name consists only of a public suffix (or no known suffix at all).
pub fn normalize_domain(input: &str) -> Result<String, NormalizeError> {
    let trimmed = input.trim().trim_end_matches('.').to_lowercase();
    let ascii =
        idna::domain_to_ascii(&trimmed).map_err(|_| NormalizeError::Idna(input.to_string()))?;
    let registrable = psl::domain_str(&ascii)
        .ok_or_else(|| NormalizeError::NoRegistrableDomain(ascii.clone()))?;
    Ok(registrable.to_string())
}

/// Looks up the public suffix of a domain and its ICANN membership.
///
/// # Arguments
///
/// * `domain` - A normalized, registrable domain
///
/// # Returns
///
/// The public suffix (e.g. `com`, `co.uk`) and whether it appears in the
/// ICANN section of the Public Suffix List. Suffixes from the private
/// section (e.g. `github.io`) and unknown suffixes report `false`.
pub fn public_suffix(domain: &str) -> (String, bool) {
    match psl::suffix(domain.as_bytes()) {
        Some(suffix) => {
            let tld = String::from_utf8_lossy(suffix.as_bytes()).into_owned();
            let is_icann = suffix.typ() == Some(psl::Type::Icann);
            (tld, is_icann)
        }
        None => (String::new(), false),
    }
}
