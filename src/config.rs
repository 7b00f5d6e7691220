/*
 *  config.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  Layered configuration: defaults, YAML file, command line
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

use crate::display::framebuffer::{DISPLAY_HEIGHT, PAGE_WIDTH};
use crate::display::{AddressingMode, DumpRadix, Font};

pub const DEFAULT_SPI_BUS: &str = "/dev/spidev0.0";
pub const DEFAULT_SPI_SPEED_HZ: u32 = 8_000_000;
pub const DEFAULT_DC_PIN: u64 = 24;
pub const DEFAULT_RST_PIN: u64 = 25;
pub const DEFAULT_MESSAGE: &str = "Hello, OLED!";
pub const DEFAULT_FONT: &str = "5x7";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level configuration. Every field is optional so layers can be merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub log_level: Option<String>,     // e.g., "info" | "debug"
    pub display: Option<DisplayConfig>,
    pub text: Option<TextConfig>,
    /// print the framebuffer after the write
    pub dump: Option<DumpRadix>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub addressing: Option<AddressingMode>,
    pub spi: Option<SpiConfig>,
}

/// 4-wire SPI wiring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpiConfig {
    pub bus: Option<String>,     // e.g. "/dev/spidev0.0"
    pub speed_hz: Option<u32>,
    pub dc_pin: Option<u64>,     // sysfs GPIO number
    pub rst_pin: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextConfig {
    pub message: Option<String>,
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub padding: Option<bool>,
    /// black text on a white panel
    pub invert: Option<bool>,
    /// built-in font name, e.g. "5x7"
    pub font: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".into()),
            display: Some(DisplayConfig {
                addressing: Some(AddressingMode::Page),
                spi: Some(SpiConfig {
                    bus: Some(DEFAULT_SPI_BUS.into()),
                    speed_hz: Some(DEFAULT_SPI_SPEED_HZ),
                    dc_pin: Some(DEFAULT_DC_PIN),
                    rst_pin: Some(DEFAULT_RST_PIN),
                }),
            }),
            text: Some(TextConfig {
                message: Some(DEFAULT_MESSAGE.into()),
                x: Some(0),
                y: Some(0),
                padding: Some(false),
                invert: Some(false),
                font: Some(DEFAULT_FONT.into()),
            }),
            dump: None,
        }
    }
}

impl Config {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn addressing(&self) -> AddressingMode {
        self.display
            .as_ref()
            .and_then(|d| d.addressing)
            .unwrap_or_default()
    }

    /// Built-in font named by `text.font`, `None` for an unknown name
    pub fn font(&self) -> Option<Font> {
        Font::by_name(self.text().font.as_deref().unwrap_or(DEFAULT_FONT))
    }

    /// SPI wiring with any missing value filled from the defaults
    pub fn spi(&self) -> SpiConfig {
        let spi = self.display.as_ref().and_then(|d| d.spi.clone()).unwrap_or_default();
        SpiConfig {
            bus: Some(spi.bus.unwrap_or_else(|| DEFAULT_SPI_BUS.into())),
            speed_hz: Some(spi.speed_hz.unwrap_or(DEFAULT_SPI_SPEED_HZ)),
            dc_pin: Some(spi.dc_pin.unwrap_or(DEFAULT_DC_PIN)),
            rst_pin: Some(spi.rst_pin.unwrap_or(DEFAULT_RST_PIN)),
        }
    }

    /// Text settings with any missing value filled from the defaults
    pub fn text(&self) -> TextConfig {
        let text = self.text.clone().unwrap_or_default();
        TextConfig {
            message: Some(text.message.unwrap_or_else(|| DEFAULT_MESSAGE.into())),
            x: Some(text.x.unwrap_or(0)),
            y: Some(text.y.unwrap_or(0)),
            padding: Some(text.padding.unwrap_or(false)),
            invert: Some(text.invert.unwrap_or(false)),
            font: Some(text.font.unwrap_or_else(|| DEFAULT_FONT.into())),
        }
    }
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "oledtext", about = "Write a line of text to an SSD1306 OLED", version)]
pub struct Cli {
    /// Text to show (overrides text.message)
    pub message: Option<String>,
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// page | horizontal
    #[arg(long, value_parser = parse_addressing)]
    pub addressing: Option<AddressingMode>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub spi_bus: Option<String>,
    #[arg(long)]
    pub spi_speed_hz: Option<u32>,
    #[arg(long)]
    pub dc_pin: Option<u64>,
    #[arg(long)]
    pub rst_pin: Option<u64>,
    #[arg(short, long)]
    pub x: Option<u32>,
    #[arg(short, long)]
    pub y: Option<u32>,
    #[arg(long, action = ArgAction::Set)]
    pub padding: Option<bool>,
    #[arg(long, action = ArgAction::Set)]
    pub invert: Option<bool>,
    /// built-in font (5x7)
    #[arg(long)]
    pub font: Option<String>,
    /// dump the framebuffer after writing: hex | dec
    #[arg(long, value_parser = parse_radix)]
    pub dump: Option<DumpRadix>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

fn parse_addressing(s: &str) -> Result<AddressingMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "page" => Ok(AddressingMode::Page),
        "horizontal" => Ok(AddressingMode::Horizontal),
        other => Err(format!("unknown addressing mode '{}' (page|horizontal)", other)),
    }
}

fn parse_radix(s: &str) -> Result<DumpRadix, String> {
    match s.to_ascii_lowercase().as_str() {
        "hex" => Ok(DumpRadix::Hex),
        "dec" | "decimal" => Ok(DumpRadix::Decimal),
        other => Err(format!("unknown dump format '{}' (hex|dec)", other)),
    }
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<Config, ConfigError> {
    let cli = Cli::parse();
    let cfg = resolve(&cli)?;

    if cli.dump_config {
        // Pretty YAML of effective config (nice for debugging)
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

/// Build the effective configuration for already-parsed arguments
pub fn resolve(cli: &Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;
    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/oledtext/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/oledtext/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/oledtext.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["oledtext.yaml", "config/oledtext.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_yaml(&s)
}

/// Parse a YAML document; absent keys stay `None`
pub fn parse_yaml(s: &str) -> Result<Config, ConfigError> {
    let cfg: Config = serde_yaml::from_str(s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    // top-level
    if src.log_level.is_some()      { dst.log_level = src.log_level; }
    if src.dump.is_some()           { dst.dump = src.dump; }
    // display
    match (&mut dst.display, src.display) {
        (None, Some(c)) => dst.display = Some(c),
        (Some(d), Some(s)) => merge_display(d, s),
        _ => {}
    }
    // text
    match (&mut dst.text, src.text) {
        (None, Some(c)) => dst.text = Some(c),
        (Some(d), Some(s)) => merge_text(d, s),
        _ => {}
    }
}

fn merge_display(dst: &mut DisplayConfig, src: DisplayConfig) {
    if src.addressing.is_some()  { dst.addressing = src.addressing; }
    match (&mut dst.spi, src.spi) {
        (None, Some(s)) => dst.spi = Some(s),
        (Some(d), Some(s)) => {
            if s.bus.is_some()       { d.bus = s.bus; }
            if s.speed_hz.is_some()  { d.speed_hz = s.speed_hz; }
            if s.dc_pin.is_some()    { d.dc_pin = s.dc_pin; }
            if s.rst_pin.is_some()   { d.rst_pin = s.rst_pin; }
        }
        _ => {}
    }
}

fn merge_text(dst: &mut TextConfig, src: TextConfig) {
    if src.message.is_some()  { dst.message = src.message; }
    if src.x.is_some()        { dst.x = src.x; }
    if src.y.is_some()        { dst.y = src.y; }
    if src.padding.is_some()  { dst.padding = src.padding; }
    if src.invert.is_some()   { dst.invert = src.invert; }
    if src.font.is_some()     { dst.font = src.font; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some()  { cfg.log_level = cli.log_level.clone(); }
    if cli.dump.is_some()       { cfg.dump = cli.dump; }

    let display = DisplayConfig {
        addressing: cli.addressing,
        spi: Some(SpiConfig {
            bus: cli.spi_bus.clone(),
            speed_hz: cli.spi_speed_hz,
            dc_pin: cli.dc_pin,
            rst_pin: cli.rst_pin,
        }),
    };
    let text = TextConfig {
        message: cli.message.clone(),
        x: cli.x,
        y: cli.y,
        padding: cli.padding,
        invert: cli.invert,
        font: cli.font.clone(),
    };
    merge(cfg, Config { log_level: None, display: Some(display), text: Some(text), dump: None });
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !LOG_LEVELS.contains(&cfg.log_level().to_ascii_lowercase().as_str()) {
        return Err(ConfigError::Validation(format!(
            "log_level must be one of {}",
            LOG_LEVELS.join("|")
        )));
    }

    let spi = cfg.spi();
    if spi.speed_hz == Some(0) {
        return Err(ConfigError::Validation("display spi speed_hz must be > 0".into()));
    }
    if spi.dc_pin == spi.rst_pin {
        return Err(ConfigError::Validation("display spi dc_pin and rst_pin must differ".into()));
    }

    let text = cfg.text();
    if let (Some(x), Some(y)) = (text.x, text.y) {
        if x >= PAGE_WIDTH || y >= DISPLAY_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "text position ({}, {}) is outside the {}x{} panel",
                x, y, PAGE_WIDTH, DISPLAY_HEIGHT
            )));
        }
    }
    if cfg.font().is_none() {
        return Err(ConfigError::Validation(format!(
            "unknown text font '{}'",
            text.font.unwrap_or_default()
        )));
    }
    Ok(())
}
