use serde::Deserialize;

const DEFAULT_UART_BASE: u64 = 0x1000_0000;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub uart: UartConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_accesses: bool,
}

#[derive(Debug, Deserialize)]
pub struct UartConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_base")]
    pub base: String,
}

impl UartConfig {
    pub fn base_val(&self) -> u64 {
        parse_hex(&self.base, DEFAULT_UART_BASE)
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            base: default_base(),
        }
    }
}

fn parse_hex(s: &str, default: u64) -> u64 {
    let s = s.trim_start_matches("0x");
    u64::from_str_radix(s, 16).unwrap_or(default)
}

fn default_name() -> String {
    "uart0".to_string()
}

fn default_base() -> String {
    format!("{:#x}", DEFAULT_UART_BASE)
}
