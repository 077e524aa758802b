//! Integration tests for configuration parsing.

use uart_peripheral::config::Config;

/// Tests parsing a fully specified configuration.
#[test]
fn test_full_config() {
    let toml_str = r#"
        [general]
        trace_accesses = true

        [uart]
        name = "uart1"
        base = "0x20000000"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.general.trace_accesses);
    assert_eq!(config.uart.name, "uart1");
    assert_eq!(config.uart.base_val(), 0x2000_0000);
}

/// Tests that an empty configuration falls back to defaults.
#[test]
fn test_empty_config_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert!(!config.general.trace_accesses);
    assert_eq!(config.uart.name, "uart0");
    assert_eq!(config.uart.base_val(), 0x1000_0000);
}

/// Tests that partial sections keep defaults for missing fields.
#[test]
fn test_partial_uart_section() {
    let toml_str = r#"
        [uart]
        name = "console"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.uart.name, "console");
    assert_eq!(config.uart.base_val(), 0x1000_0000);
}

/// Tests that a malformed base address falls back to the default.
#[test]
fn test_invalid_base_falls_back() {
    let toml_str = r#"
        [uart]
        base = "not-hex"
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.uart.base_val(), 0x1000_0000);
}
