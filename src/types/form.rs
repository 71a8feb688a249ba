//! Form submission record
//!
//! The typed version of what the host's contribution form posts. Inbound
//! fields are optional because different host versions send different field
//! sets; the gateway decides what is actually required.

use rust_decimal::Decimal;
use url::Url;

/// Card expiry as submitted by the form (`credit_card_exp_date[M]`/`[Y]`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpiryDate {
    pub month: String,
    pub year: String,
}

/// One form submission, plus the transaction fields set on success
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormRecord {
    /// Amount to charge; `None` when the form left it empty
    pub amount: Option<Decimal>,
    /// Whether the contributor asked for a recurring contribution
    pub is_recur: bool,

    pub credit_card_number: Option<String>,
    pub credit_card_exp_date: Option<ExpiryDate>,
    pub cvv2: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Billing email (`email-5`)
    pub billing_email: Option<String>,
    /// Primary email (`email-Primary`)
    pub primary_email: Option<String>,

    pub billing_first_name: Option<String>,
    pub billing_last_name: Option<String>,
    pub billing_street_address: Option<String>,
    pub billing_city: Option<String>,
    pub billing_state_province: Option<String>,
    pub billing_postal_code: Option<String>,
    pub billing_country: Option<String>,

    /// Host form session key (`qfKey`)
    pub qf_key: Option<String>,
    /// URL of the page the form was entered from (`entryURL`)
    pub entry_url: Option<String>,

    /// Gateway transaction id (`trxn_id`), set on success
    pub trxn_id: Option<String>,
    /// Amount the gateway actually charged (`gross_amount`)
    pub gross_amount: Option<Decimal>,
    /// Gateway transaction status (`trxn_result_code`)
    pub trxn_result_code: Option<String>,
}

impl FormRecord {
    /// True when there is nothing to charge
    pub fn is_zero_amount(&self) -> bool {
        self.amount.map_or(true, |amount| amount.is_zero())
    }

    /// URL that sends the contributor back to the form with their session
    ///
    /// The host uses this to redisplay the form after a failed charge. The
    /// result is server-relative: `/{path}?{query}&_qf_Main_display=1&qfKey=..`.
    pub fn error_return_url(&self) -> Option<String> {
        let qf_key = self.qf_key.as_deref().filter(|key| !key.is_empty())?;
        let entry_url = self.entry_url.as_deref().filter(|url| !url.is_empty())?;

        let mut url = match Url::parse(entry_url) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                // Relative entry URLs are resolved against a placeholder host;
                // only the path and query are used.
                Url::parse("http://localhost/").ok()?.join(entry_url).ok()?
            }
            Err(_) => return None,
        };

        url.query_pairs_mut()
            .append_pair("_qf_Main_display", "1")
            .append_pair("qfKey", qf_key);

        Some(format!("{}?{}", url.path(), url.query().unwrap_or_default()))
    }
}
