//! Pesapal gateway client.
//!
//! Every operation follows the same path: validate the caller's options
//! against the endpoint whitelist, merge them over the endpoint defaults,
//! serialize the order when there is one, and sign. Nothing is sent; the
//! caller receives a [`SignedRequest`] to transmit however it likes.

use crate::config::{Environment, PesapalConfig};
use crate::error::Result;
use crate::models::{DirectOrder, HttpMethod, LineItem, Params, SignedRequest, to_params};
use crate::services::endpoint::Endpoint;
use crate::services::oauth::{Consumer, OAuthSigner, Token};
use crate::services::options::{DIRECT_ORDER_OPTIONS, ORDER_FIELDS, merge_params};
use crate::services::order_xml;
use tracing::trace;

const REQUEST_DATA_KEY: &str = "pesapal_request_data";

/// Builds signed requests for the Pesapal API
#[derive(Debug, Clone)]
pub struct PesapalClient {
    signer: OAuthSigner,
    environment: Environment,
    token: Option<Token>,
}

impl PesapalClient {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            signer: OAuthSigner::new(Consumer::new(consumer_key, consumer_secret)),
            environment,
            token: None,
        }
    }

    pub fn from_config(config: &PesapalConfig) -> Self {
        Self::new(
            config.consumer_key.clone(),
            config.consumer_secret.clone(),
            config.environment,
        )
    }

    /// A copy of this client that signs every call with `token`
    pub fn with_token(&self, token: Token) -> Self {
        Self {
            token: Some(token),
            ..self.clone()
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &'static str {
        self.environment.base_url()
    }

    pub fn consumer(&self) -> &Consumer {
        self.signer.consumer()
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url(), endpoint.path())
    }

    /// `PostPesapalDirectOrderV4` from a raw order-field mapping
    ///
    /// Request options and order fields are both checked against their
    /// whitelists before the XML document is built.
    pub fn post_direct_order<I, K, V, J, L, W>(
        &self,
        options: I,
        order_fields: J,
        line_items: &[LineItem],
    ) -> Result<SignedRequest>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        J: IntoIterator<Item = (L, W)>,
        L: Into<String>,
        W: Into<String>,
    {
        let options = to_params(options);
        DIRECT_ORDER_OPTIONS.validate(&options)?;
        let fields = ORDER_FIELDS.merge(to_params(order_fields))?;

        trace!(line_items = line_items.len(), "Serializing direct order");

        let mut defaults = DIRECT_ORDER_OPTIONS.to_params();
        defaults.insert(
            REQUEST_DATA_KEY.to_string(),
            order_xml::encode_request_data(&fields, line_items),
        );

        self.sign_endpoint(Endpoint::PostDirectOrder, merge_params(defaults, options))
    }

    /// `PostPesapalDirectOrderV4` from a typed order
    pub fn post_order<I, K, V>(&self, options: I, order: &DirectOrder) -> Result<SignedRequest>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.post_direct_order(options, order.fields()?, &order.line_items)
    }

    /// `QueryPaymentStatus`: needs both merchant reference and tracking id
    pub fn query_payment_status<I, K, V>(&self, options: I) -> Result<SignedRequest>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.signed_request(Endpoint::QueryPaymentStatus, options)
    }

    /// `QueryPaymentStatusByMerchantRef`: merchant reference only
    pub fn query_payment_status_by_merchant_ref<I, K, V>(&self, options: I) -> Result<SignedRequest>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.signed_request(Endpoint::QueryPaymentStatusByMerchantRef, options)
    }

    /// Payment status with additional details
    pub fn query_payment_details<I, K, V>(&self, options: I) -> Result<SignedRequest>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.signed_request(Endpoint::QueryPaymentDetails, options)
    }

    /// Signed request for any endpoint
    ///
    /// `PostDirectOrder` is signed with an order carrying only default fields
    /// and no line items; use [`Self::post_direct_order`] to supply one.
    pub fn signed_request<I, K, V>(&self, endpoint: Endpoint, options: I) -> Result<SignedRequest>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if endpoint.carries_order() {
            return self.post_direct_order(options, Params::new(), &[]);
        }

        let params = endpoint.defaults().merge(to_params(options))?;
        self.sign_endpoint(endpoint, params)
    }

    fn sign_endpoint(&self, endpoint: Endpoint, params: Params) -> Result<SignedRequest> {
        trace!(
            endpoint = %endpoint,
            environment = %self.environment,
            "Signing gateway request"
        );

        self.signer.sign(
            self.token.as_ref(),
            HttpMethod::Get,
            &self.endpoint_url(endpoint),
            &params,
        )
    }
}
