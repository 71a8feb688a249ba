//! Credential completeness checks
//!
//! Run proactively by the host (and by the CLI before a batch), never as part
//! of a charge.

use crate::types::ProcessorCredentials;

pub const MISSING_MERCHANT_ID: &str = "Merchant Id is not set for this payment processor";
pub const MISSING_PUBLIC_KEY: &str = "Public Key is not set for this payment processor";
pub const MISSING_PRIVATE_KEY: &str = "Private Key is not set for this payment processor";

/// Check that every required credential is present
///
/// # Returns
///
/// One human-readable message per missing field, in a fixed order. An empty
/// list means the credentials are complete. Whitespace-only values count as
/// missing.
pub fn check_config(credentials: &ProcessorCredentials) -> Vec<String> {
    [
        (&credentials.merchant_id, MISSING_MERCHANT_ID),
        (&credentials.public_key, MISSING_PUBLIC_KEY),
        (&credentials.private_key, MISSING_PRIVATE_KEY),
    ]
    .into_iter()
    .filter(|(value, _)| value.trim().is_empty())
    .map(|(_, message)| message.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;
    use rstest::rstest;

    #[test]
    fn test_complete_credentials_are_valid() {
        let credentials = ProcessorCredentials::new(Mode::Test, "merchant", "pub", "priv");
        assert!(check_config(&credentials).is_empty());
    }

    #[rstest]
    #[case::missing_merchant_id("", "pub", "priv", vec![MISSING_MERCHANT_ID])]
    #[case::missing_public_key("merchant", "", "priv", vec![MISSING_PUBLIC_KEY])]
    #[case::missing_private_key("merchant", "pub", "", vec![MISSING_PRIVATE_KEY])]
    #[case::blank_private_key("merchant", "pub", "  ", vec![MISSING_PRIVATE_KEY])]
    #[case::all_missing(
        "",
        "",
        "",
        vec![MISSING_MERCHANT_ID, MISSING_PUBLIC_KEY, MISSING_PRIVATE_KEY]
    )]
    fn test_missing_fields(
        #[case] merchant_id: &str,
        #[case] public_key: &str,
        #[case] private_key: &str,
        #[case] expected: Vec<&str>,
    ) {
        let credentials = ProcessorCredentials::new(Mode::Live, merchant_id, public_key, private_key);
        assert_eq!(check_config(&credentials), expected);
    }

    #[test]
    fn test_missing_private_key_names_the_field() {
        let credentials = ProcessorCredentials::new(Mode::Test, "merchant", "pub", "");
        let messages = check_config(&credentials);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Private Key"));
    }
}
