#!/usr/bin/env cargo
//! Direct Order Signing Demo
//!
//! This example builds a signed `PostPesapalDirectOrderV4` request and prints
//! everything a caller needs to send it. Run with:
//!
//! ```
//! PESAPAL_CONSUMER_KEY=... PESAPAL_CONSUMER_SECRET=... cargo run --example sign_direct_order
//! ```

use pesapal::{DirectOrder, LineItem, PesapalClient, PesapalConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🔐 Pesapal Direct Order Demo");
    println!("============================\n");

    let mut config = PesapalConfig::from_env();
    if config.consumer_key.is_empty() || config.consumer_secret.is_empty() {
        println!("⚠️  Pesapal credentials not set, using demo credentials\n");
        config.consumer_key = "demo-consumer-key".to_string();
        config.consumer_secret = "demo-consumer-secret".to_string();
    }

    println!("Configuration:");
    println!("  {config:?}\n");

    let client = PesapalClient::from_config(&config);

    let order = DirectOrder::new("1500.00", "Conference tickets", "ORD-2024-001")
        .email("payer@example.com")
        .phone_number("254700000000")
        .currency("KES")
        .payer_name("Jane", "Doe")
        .line_item(LineItem::new("1", "Early bird ticket", "2", "500.00", "1000.00"))
        .line_item(LineItem::new("2", "Workshop pass", "1", "500.00", "500.00"));

    let request = client.post_order(
        [("oauth_callback", "https://shop.example.com/pesapal/callback")],
        &order,
    )?;

    println!("✅ Signed request:");
    println!("  {} {}", request.method(), request.url());
    for (key, value) in request.parameters() {
        println!("  {key} = {value}");
    }

    println!("\n🔍 Signature base string:");
    println!("  {}", request.signature_base_string());

    println!("\n📋 Redirect the payer (or load in an iframe):");
    println!("  {}", request.to_url());

    println!("\n📦 As JSON:");
    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}
