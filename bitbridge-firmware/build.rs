//! Build script for bitbridge-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates bridge.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use bitbridge_core::config::BridgeConfig;

/// Keys accepted in each section of bridge.toml
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("serial", &["baudrate"]),
    ("radio", &["group", "power"]),
    ("pins", &["exposed"]),
];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate bridge.toml at compile time
///
/// The firmware parses the same file at boot and falls back to defaults on
/// error, so anything rejected here would otherwise fail silently on the
/// board.
fn validate_config() {
    println!("cargo:rerun-if-changed=bridge.toml");

    let config_path = Path::new("bridge.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: bridge.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a bridge.toml configuration file.           ║\n\
            ║  Please create one in the bitbridge-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read bridge.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let value: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => report("Invalid TOML syntax in bridge.toml", &[e.to_string()]),
    };

    validate_keys(&value);

    let config: BridgeConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => report("Invalid value in bridge.toml", &[e.to_string()]),
    };

    if let Err(e) = config.validate() {
        report("Invalid bridge configuration", &[format!("{:?}", e)]);
    }

    println!("cargo:warning=bridge.toml validated successfully");
}

/// Reject sections and keys the firmware's own parser would refuse
fn validate_keys(value: &toml::Value) {
    let Some(root) = value.as_table() else {
        return;
    };

    let mut errors = Vec::new();

    for (section, body) in root {
        let Some(&(_, keys)) = KNOWN_KEYS.iter().find(|(name, _)| *name == section.as_str()) else {
            errors.push(format!("Unknown section [{}]", section));
            continue;
        };

        let Some(body) = body.as_table() else {
            errors.push(format!("[{}] must be a table", section));
            continue;
        };

        for key in body.keys() {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", section, key));
            }
        }
    }

    if !errors.is_empty() {
        report("Unknown entries in bridge.toml", &errors);
    }
}

/// Panic with a boxed error listing
fn report(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(errors)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(errors: &[String]) -> String {
    errors
        .iter()
        .flat_map(|e| e.lines())
        .map(|line| {
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
