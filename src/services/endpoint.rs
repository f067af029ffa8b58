//! Gateway operations and the paths they target.

use crate::services::options::{
    DIRECT_ORDER_OPTIONS, OptionDefaults, QUERY_BY_MERCHANT_REF_OPTIONS, QUERY_STATUS_OPTIONS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// Post a transaction; the payer is then shown the payment options page
    PostDirectOrder,
    /// Status by merchant reference and tracking id
    QueryPaymentStatus,
    /// Status by merchant reference only
    QueryPaymentStatusByMerchantRef,
    /// Status plus additional payment details
    QueryPaymentDetails,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::PostDirectOrder,
        Endpoint::QueryPaymentStatus,
        Endpoint::QueryPaymentStatusByMerchantRef,
        Endpoint::QueryPaymentDetails,
    ];

    /// Path appended to the environment's base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::PostDirectOrder => "PostPesapalDirectOrderV4",
            Endpoint::QueryPaymentStatus => "QueryPaymentStatus",
            Endpoint::QueryPaymentStatusByMerchantRef => "QueryPaymentStatusByMerchantRef",
            // Shares the by-reference path even though it accepts a tracking id
            Endpoint::QueryPaymentDetails => "QueryPaymentStatusByMerchantRef",
        }
    }

    /// Recognized request options and their defaults
    pub fn defaults(&self) -> OptionDefaults {
        match self {
            Endpoint::PostDirectOrder => DIRECT_ORDER_OPTIONS,
            Endpoint::QueryPaymentStatus | Endpoint::QueryPaymentDetails => QUERY_STATUS_OPTIONS,
            Endpoint::QueryPaymentStatusByMerchantRef => QUERY_BY_MERCHANT_REF_OPTIONS,
        }
    }

    pub fn carries_order(&self) -> bool {
        matches!(self, Endpoint::PostDirectOrder)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::PostDirectOrder => "post_direct_order",
            Endpoint::QueryPaymentStatus => "query_payment_status",
            Endpoint::QueryPaymentStatusByMerchantRef => "query_payment_status_by_merchant_ref",
            Endpoint::QueryPaymentDetails => "query_payment_details",
        };
        f.write_str(name)
    }
}
