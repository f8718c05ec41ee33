use std::fs;
use std::path::Path;

/// Pulls a `#define NAME "value"` string out of the config header.
fn define_value<'a>(contents: &'a str, name: &str) -> Option<&'a str> {
    let pattern = format!("#define {}", name);
    contents
        .lines()
        .find(|l| l.trim_start().starts_with(&pattern))
        .and_then(|l| l.split('"').nth(1))
}

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    // Add crash log helper for better panic diagnostics
    println!("cargo:rustc-link-arg=-Wl,--undefined=esp_backtrace_print_app_description");

    let config_path = "wifi_config.h";
    println!("cargo:rerun-if-changed={}", config_path);

    let contents = if Path::new(config_path).exists() {
        fs::read_to_string(config_path)?
    } else {
        println!("cargo:warning=wifi_config.h not found! Copy wifi_config.h.example to wifi_config.h and add your credentials.");
        String::new()
    };

    // Empty values fall back to compiled defaults at runtime
    for name in ["WIFI_SSID", "WIFI_PASSWORD", "COLLECTOR_URL"] {
        let value = define_value(&contents, name).unwrap_or("");
        println!("cargo:rustc-env={}={}", name, value);
    }

    Ok(())
}
