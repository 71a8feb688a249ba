//! Sale request construction
//!
//! Transcribes a [`FormRecord`] into the gateway's nested request shape.
//! Card fields are not validated here: a missing field is sent as an empty
//! string and the gateway's validation errors report it.

use crate::types::{
    BillingAddress, CreditCard, Customer, FormRecord, ProcessorCredentials, SaleOptions,
    SaleRequest,
};

/// Build the sale request for one form submission
///
/// # Rules
///
/// - Settlement is always requested; there is no authorize-only mode
/// - The merchant account is taken from the credentials when configured
/// - The customer block requires `first_name`, the billing block requires
///   `billing_first_name`; their other fields are copied as-is
///
/// The caller guarantees a non-zero amount; a missing amount is sent as zero.
pub fn build_sale_request(
    record: &FormRecord,
    credentials: &ProcessorCredentials,
) -> SaleRequest {
    let expiry = record.credit_card_exp_date.clone().unwrap_or_default();

    SaleRequest {
        amount: record.amount.unwrap_or_default(),
        credit_card: CreditCard {
            number: field(&record.credit_card_number),
            expiration_month: expiry.month,
            expiration_year: expiry.year,
            cvv: field(&record.cvv2),
        },
        options: SaleOptions {
            submit_for_settlement: true,
        },
        merchant_account_id: credentials.merchant_account().map(str::to_string),
        customer: build_customer(record),
        billing: build_billing(record),
    }
}

fn build_customer(record: &FormRecord) -> Option<Customer> {
    let first_name = record.first_name.clone()?;

    // Lowest priority first: the last non-empty value wins, so the billing
    // email overrides the primary one.
    let mut email = None;
    for candidate in [&record.primary_email, &record.billing_email] {
        if let Some(value) = candidate.as_deref().filter(|v| !v.is_empty()) {
            email = Some(value.to_string());
        }
    }

    Some(Customer {
        first_name,
        last_name: field(&record.last_name),
        email,
    })
}

fn build_billing(record: &FormRecord) -> Option<BillingAddress> {
    let first_name = record.billing_first_name.clone()?;

    Some(BillingAddress {
        first_name,
        last_name: field(&record.billing_last_name),
        street_address: field(&record.billing_street_address),
        locality: field(&record.billing_city),
        region: field(&record.billing_state_province),
        postal_code: field(&record.billing_postal_code),
        country_code_alpha2: field(&record.billing_country),
    })
}

fn field(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExpiryDate, Mode};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn credentials() -> ProcessorCredentials {
        ProcessorCredentials::new(Mode::Test, "merchant", "pub", "priv")
    }

    fn card_record() -> FormRecord {
        FormRecord {
            amount: Some(Decimal::from_str("25.50").unwrap()),
            credit_card_number: Some("4111111111111111".to_string()),
            credit_card_exp_date: Some(ExpiryDate {
                month: "07".to_string(),
                year: "2031".to_string(),
            }),
            cvv2: Some("321".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_card_fields_are_copied() {
        let request = build_sale_request(&card_record(), &credentials());

        assert_eq!(request.amount, Decimal::from_str("25.50").unwrap());
        assert_eq!(request.credit_card.number, "4111111111111111");
        assert_eq!(request.credit_card.expiration_month, "07");
        assert_eq!(request.credit_card.expiration_year, "2031");
        assert_eq!(request.credit_card.cvv, "321");
        assert!(request.options.submit_for_settlement);
        assert_eq!(request.merchant_account_id, None);
        assert_eq!(request.customer, None);
        assert_eq!(request.billing, None);
    }

    #[test]
    fn test_missing_card_fields_become_empty_strings() {
        let record = FormRecord {
            amount: Some(Decimal::ONE),
            ..Default::default()
        };
        let request = build_sale_request(&record, &credentials());

        assert_eq!(request.credit_card.number, "");
        assert_eq!(request.credit_card.expiration_month, "");
        assert_eq!(request.credit_card.expiration_year, "");
        assert_eq!(request.credit_card.cvv, "");
    }

    #[test]
    fn test_merchant_account_from_credentials() {
        let credentials = credentials().with_merchant_account("cad_account");
        let request = build_sale_request(&card_record(), &credentials);
        assert_eq!(request.merchant_account_id.as_deref(), Some("cad_account"));
    }

    #[rstest]
    #[case::both_present(Some("a@x.com"), Some("b@x.com"), Some("a@x.com"))]
    #[case::billing_only(Some("a@x.com"), None, Some("a@x.com"))]
    #[case::primary_only(None, Some("b@x.com"), Some("b@x.com"))]
    #[case::billing_empty(Some(""), Some("b@x.com"), Some("b@x.com"))]
    #[case::neither(None, None, None)]
    fn test_customer_email_preference(
        #[case] billing_email: Option<&str>,
        #[case] primary_email: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let record = FormRecord {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            billing_email: billing_email.map(str::to_string),
            primary_email: primary_email.map(str::to_string),
            ..card_record()
        };

        let customer = build_sale_request(&record, &credentials())
            .customer
            .expect("customer block");
        assert_eq!(customer.first_name, "Ada");
        assert_eq!(customer.last_name, "Lovelace");
        assert_eq!(customer.email.as_deref(), expected);
    }

    #[test]
    fn test_no_customer_without_first_name() {
        let record = FormRecord {
            last_name: Some("Lovelace".to_string()),
            billing_email: Some("a@x.com".to_string()),
            ..card_record()
        };
        assert_eq!(build_sale_request(&record, &credentials()).customer, None);
    }

    #[test]
    fn test_no_billing_without_billing_first_name() {
        let record = FormRecord {
            billing_last_name: Some("Lovelace".to_string()),
            billing_city: Some("London".to_string()),
            ..card_record()
        };
        assert_eq!(build_sale_request(&record, &credentials()).billing, None);
    }

    #[test]
    fn test_billing_fields_copied_without_presence_checks() {
        let record = FormRecord {
            billing_first_name: Some("Ada".to_string()),
            billing_street_address: Some("12 St James's Square".to_string()),
            billing_city: Some("London".to_string()),
            billing_country: Some("GB".to_string()),
            ..card_record()
        };

        let billing = build_sale_request(&record, &credentials())
            .billing
            .expect("billing block");
        assert_eq!(
            billing,
            BillingAddress {
                first_name: "Ada".to_string(),
                last_name: String::new(),
                street_address: "12 St James's Square".to_string(),
                locality: "London".to_string(),
                region: String::new(),
                postal_code: String::new(),
                country_code_alpha2: "GB".to_string(),
            }
        );
    }
}
