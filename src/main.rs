/*
 *  main.rs
 *
 *  oledtext - page-addressed OLED text driver
 *	(c) 2020-26 Stuart Hunter
 *
 *	Write a line of text to an SSD1306 panel wired to a Linux SPI bus
 *
 *	This program is free software: you can redistribute it and/or modify
 *	it under the terms of the GNU General Public License as published by
 *	the Free Software Foundation, either version 3 of the License, or
 *	(at your option) any later version.
 *
 *	This program is distributed in the hope that it will be useful,
 *	but WITHOUT ANY WARRANTY; without even the implied warranty of
 *	MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *	GNU General Public License for more details.
 *
 *	See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *	Public License.
 *
 */

use anyhow::{Context, Result, anyhow};
use env_logger::Env;
use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
use linux_embedded_hal::sysfs_gpio::Direction;
use linux_embedded_hal::{Delay, SpidevDevice, SysfsPin};
use log::{error, info};

use oledtext::config::{self, Config};
use oledtext::display::{Color, Display, HalTransport};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Exported output pin driven low
fn output_pin(number: u64, name: &str) -> Result<SysfsPin> {
    let pin = SysfsPin::new(number);
    pin.export()
        .map_err(|e| anyhow!("Failed to export {} GPIO {}: {:?}", name, number, e))?;
    pin.set_direction(Direction::Low)
        .map_err(|e| anyhow!("Failed to drive {} GPIO {}: {:?}", name, number, e))?;
    Ok(pin)
}

fn open_spi(cfg: &Config) -> Result<SpidevDevice> {
    let spi_cfg = cfg.spi();
    let bus = spi_cfg.bus.unwrap_or_else(|| config::DEFAULT_SPI_BUS.into());
    let speed = spi_cfg.speed_hz.unwrap_or(config::DEFAULT_SPI_SPEED_HZ);

    let mut spi = SpidevDevice::open(&bus)
        .map_err(|e| anyhow!("Failed to open SPI {}: {:?}", bus, e))?;
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(speed)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spi.0
        .configure(&options)
        .with_context(|| format!("Failed to configure SPI {}", bus))?;

    info!("SPI {} at {} Hz", bus, speed);
    Ok(spi)
}

fn run(cfg: &Config) -> Result<()> {
    let spi_cfg = cfg.spi();
    let spi = open_spi(cfg)?;
    let dc = output_pin(spi_cfg.dc_pin.unwrap_or(config::DEFAULT_DC_PIN), "D/C")?;
    let rst = output_pin(spi_cfg.rst_pin.unwrap_or(config::DEFAULT_RST_PIN), "RESET")?;

    let transport = HalTransport::new(spi, dc, rst, Delay);
    let mut display = Display::new(transport, cfg.addressing());
    display.init().context("Display init failed")?;

    let font = cfg
        .font()
        .ok_or_else(|| anyhow!("Unknown font {:?}", cfg.text().font))?;
    let text = cfg.text();
    let message = text.message.unwrap_or_else(|| config::DEFAULT_MESSAGE.into());
    let (bg, fg) = if text.invert.unwrap_or(false) {
        (Color::White, Color::Black)
    } else {
        (Color::Black, Color::White)
    };

    display
        .write(
            &message,
            &font,
            text.x.unwrap_or(0),
            text.y.unwrap_or(0),
            bg,
            fg,
            text.padding.unwrap_or(false),
            true,
        )
        .with_context(|| format!("Failed to write {:?}", message))?;
    info!("Wrote {:?}, cursor now at {:?}", message, display.cursor());

    if let Some(radix) = cfg.dump {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        display
            .dump_buffer(&mut out, radix)
            .context("Failed to dump framebuffer")?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cfg = config::load().context("Failed to load configuration")?;

    env_logger::Builder::from_env(Env::default().default_filter_or(cfg.log_level()))
        .format_timestamp_secs()
        .init();

    info!("{} v.{} built {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), BUILD_DATE);

    if let Err(e) = run(&cfg) {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}
