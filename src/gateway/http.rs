//! HTTP gateway client.
//!
//! Sends sales to the gateway's REST endpoint using a blocking reqwest
//! client. Requests authenticate with HTTP basic auth (public key, private
//! key) and carry the API version header.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};
use url::Url;

use crate::core::Gateway;
use crate::types::{
    ErrorCollection, GatewayError, ProcessorCredentials, SaleRequest, SaleResult, Transaction,
};

/// Gateway API version sent with every request
pub const API_VERSION: &str = "6";

/// HTTP status the gateway uses for rejected (but understood) requests
const UNPROCESSABLE_ENTITY: u16 = 422;

#[derive(Serialize)]
struct SaleEnvelope<'a> {
    transaction: SaleBody<'a>,
}

#[derive(Serialize)]
struct SaleBody<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    request: &'a SaleRequest,
}

impl<'a> SaleEnvelope<'a> {
    fn new(request: &'a SaleRequest) -> Self {
        SaleEnvelope {
            transaction: SaleBody {
                kind: "sale",
                request,
            },
        }
    }
}

#[derive(Deserialize)]
struct TransactionEnvelope {
    transaction: Transaction,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorEnvelope {
    api_error_response: ApiErrorResponse,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: ErrorCollection,
    #[serde(default)]
    transaction: Option<Transaction>,
}

/// Gateway reached over HTTP
///
/// The endpoint is fixed at construction: the environment comes from the
/// credentials' mode and the path from the merchant id. No timeout is set
/// beyond the transport's default and no request is ever retried.
///
/// # Examples
///
/// ```no_run
/// use braintree_direct_payment::core::Gateway;
/// use braintree_direct_payment::gateway::HttpGateway;
/// use braintree_direct_payment::types::{Mode, ProcessorCredentials};
///
/// let credentials = ProcessorCredentials::new(Mode::Test, "merchant", "pub", "priv");
/// let gateway = HttpGateway::new(&credentials).unwrap();
/// assert!(gateway.endpoint().as_str().starts_with("https://api.sandbox."));
/// ```
pub struct HttpGateway {
    client: Client,
    endpoint: Url,
    public_key: String,
    private_key: String,
}

impl HttpGateway {
    /// Create a client for the environment selected by the credentials' mode
    ///
    /// # Errors
    ///
    /// Returns `Transport` if the HTTP client cannot be built.
    pub fn new(credentials: &ProcessorCredentials) -> Result<Self, GatewayError> {
        Self::with_base_url(credentials, credentials.mode.environment().base_url())
    }

    /// Create a client against an explicit API root
    pub fn with_base_url(
        credentials: &ProcessorCredentials,
        base_url: &str,
    ) -> Result<Self, GatewayError> {
        let endpoint = sale_endpoint(base_url, &credentials.merchant_id)?;
        let client = Client::builder()
            .user_agent(concat!("braintree-direct-payment/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(HttpGateway {
            client,
            endpoint,
            public_key: credentials.public_key.clone(),
            private_key: credentials.private_key.clone(),
        })
    }

    /// URL sales are posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Gateway for HttpGateway {
    #[instrument(name = "gateway_sale", skip_all, fields(endpoint = %self.endpoint))]
    fn sale(&self, request: &SaleRequest) -> Result<SaleResult, GatewayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .basic_auth(&self.public_key, Some(&self.private_key))
            .header("X-ApiVersion", API_VERSION)
            .header(ACCEPT, "application/json")
            .json(&SaleEnvelope::new(request))
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, "gateway responded");

        decode_sale_response(status, &body)
    }
}

impl fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpGateway")
            .field("endpoint", &self.endpoint.as_str())
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// Build `{base_url}/merchants/{merchant_id}/transactions`
fn sale_endpoint(base_url: &str, merchant_id: &str) -> Result<Url, GatewayError> {
    let mut url = Url::parse(base_url).map_err(|e| GatewayError::Transport {
        message: format!("Invalid gateway URL '{}': {}", base_url, e),
    })?;

    url.path_segments_mut()
        .map_err(|_| GatewayError::Transport {
            message: format!("Gateway URL '{}' cannot carry a path", base_url),
        })?
        .pop_if_empty()
        .extend(["merchants", merchant_id, "transactions"]);

    Ok(url)
}

/// Turn a status code and body into a [`SaleResult`]
///
/// Success statuses carry the transaction; 422 carries the error tree and,
/// for processor declines, the attempted transaction. Anything else is an
/// error.
fn decode_sale_response(status: u16, body: &str) -> Result<SaleResult, GatewayError> {
    match status {
        200..=299 => {
            let envelope: TransactionEnvelope = serde_json::from_str(body)?;
            Ok(SaleResult::successful(envelope.transaction))
        }
        UNPROCESSABLE_ENTITY => {
            let envelope: ApiErrorEnvelope = serde_json::from_str(body)?;
            let response = envelope.api_error_response;
            debug!(message = %response.message, "gateway rejected sale");
            Ok(SaleResult::failed(response.transaction, response.errors))
        }
        status => Err(GatewayError::UnexpectedStatus { status }),
    }
}
