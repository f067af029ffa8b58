#!/usr/bin/env cargo
//! Payment Status Query Demo
//!
//! This example signs a `QueryPaymentStatusByMerchantRef` request and sends it
//! with reqwest, showing where transport sits relative to this crate. Run with:
//!
//! ```
//! cargo run --example query_status -- ORD-2024-001
//! ```

use pesapal::{PesapalClient, PesapalConfig};
use reqwest::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("📡 Pesapal Status Query Demo");
    println!("============================\n");

    let reference = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ORD-2024-001".to_string());

    let pesapal = PesapalClient::from_config(&PesapalConfig::from_env());
    let request = match pesapal
        .query_payment_status_by_merchant_ref([("pesapal_merchant_reference", reference.as_str())])
    {
        Ok(request) => request,
        Err(e) => {
            println!("❌ Could not sign request: {e}");
            println!("💡 Set PESAPAL_CONSUMER_KEY and PESAPAL_CONSUMER_SECRET");
            return Err(e.into());
        }
    };

    println!("🔗 {} {}", request.method(), request.to_url());

    let response = Client::new().get(request.to_url()).send().await?;
    if !response.status().is_success() {
        println!(
            "❌ HTTP {}: {}",
            response.status(),
            response.status().canonical_reason().unwrap_or("Unknown")
        );
        return Ok(());
    }

    // Body looks like: pesapal_response_data=<STATUS>
    let body = response.text().await?;
    println!("✅ Gateway replied: {body}");

    Ok(())
}
