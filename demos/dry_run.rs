//! Dry run: print a typing plan and play it against a recording surface
//!
//! Run with: RUST_LOG=humantype=trace cargo run --example dry_run -- "Hello there"

use std::time::Duration;

use humantype::{HumanSpeed, HumanTyping, RecordingSurface, Result, TypingConfig, TypingOptions};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "The quick brown fox jumps over the lazy dog".to_string());

    let options = TypingOptions::from_json_str(r#"{ "keyboardLayout": "en", "typoChanceInPercent": 20 }"#)?;
    let config = TypingConfig::from_options(options)?
        .with_speed(HumanSpeed::Fast)
        .with_warm_up(Duration::from_millis(500));
    let typing = HumanTyping::new(config);

    let plan = typing.plan(&text);
    println!("{} actions, {} typos:", plan.len(), plan.typo_count());
    println!("{}", serde_json::to_string_pretty(&plan)?);

    let field = RecordingSurface::new();
    typing.type_into(&field, &text).await?;
    println!("Field now contains: {:?}", field.text());

    Ok(())
}
