use crate::api::config::BASE_URL_ENV;
use crate::api::ApiConfig;
use anyhow::Result;
use std::env;

pub fn handle_config_command() -> Result<()> {
    // Load .env file if it exists
    let env_file_loaded = dotenv::dotenv().is_ok();

    println!("🔧 Reddit Analyzer Configuration");
    println!("═══════════════════════════════════════");
    println!();

    println!("📦 Version Information:");
    println!("  • Reddit Analyzer: v{}", env!("CARGO_PKG_VERSION"));
    println!("  • License: {}", env!("CARGO_PKG_LICENSE"));
    println!();

    println!("🌍 Environment Configuration:");

    if env_file_loaded {
        println!("  • .env file: ✅ Loaded");
    } else {
        println!("  • .env file: ⚠️  Not found (using system environment)");
    }

    match ApiConfig::from_env() {
        Ok(config) => {
            println!("  • {}: ✅ {}", BASE_URL_ENV, config.base_url);
            match config.validate() {
                Ok(()) => println!("  • Endpoint: POST {}", config.endpoint()),
                Err(e) => println!("  • Endpoint: ❌ {}", e),
            }
        }
        Err(_) => println!("  • {}: ❌ Not set", BASE_URL_ENV),
    }

    match env::var("RUST_LOG") {
        Ok(val) => println!("  • RUST_LOG: {}", val),
        Err(_) => println!("  • RUST_LOG: info (default)"),
    }

    println!();
    println!("💡 Tips:");
    if env::var(BASE_URL_ENV).is_err() {
        println!("  • Set {} (or pass --base-url) to point at the analysis backend", BASE_URL_ENV);
    }
    println!("  • Use --verbose or RUST_LOG=debug for detailed logging");

    Ok(())
}
