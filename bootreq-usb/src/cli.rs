// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use bootreq_common::BootloaderEntry;

use crate::entry::{default_scripts_dir, BaudTouch, FlashUsbHelper, DEFAULT_PYTHON};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "bootreq-usb")]
#[command(about = "Request the bootloader on an MCU connected via USB-serial")]
pub struct Cli {
    /// USB-serial device (e.g., /dev/serial/by-id/usb-Klipper_...-if00)
    #[arg(value_name = "DEVICE")]
    pub device: String,

    /// How to enter the bootloader
    #[arg(short, long, value_enum, default_value_t = Method::Helper)]
    pub method: Method,

    /// Directory containing flash_usb.py [default: ~/klipper/scripts]
    #[arg(long, value_name = "DIR")]
    pub scripts_dir: Option<PathBuf>,

    /// Python interpreter used to run the helper
    #[arg(long, default_value = DEFAULT_PYTHON)]
    pub python: String,
}

/// Bootloader entry methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Klipper's flash_usb helper
    Helper,
    /// Built-in 1200 baud touch
    Touch,
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.method {
        Method::Helper => {
            let helper = helper_from(&cli)?;
            println!("Using flash_usb from {}", helper.scripts_dir().display());
            run_with(&cli.device, helper)
        }
        Method::Touch => run_with(&cli.device, BaudTouch),
    }
}

/// Build the external helper, falling back to the home directory.
fn helper_from(cli: &Cli) -> Result<FlashUsbHelper> {
    let scripts_dir = match &cli.scripts_dir {
        Some(dir) => dir.clone(),
        None => default_scripts_dir(std::env::var_os("HOME"))
            .context("Cannot locate klipper scripts (HOME unset); pass --scripts-dir")?,
    };
    Ok(FlashUsbHelper::new(cli.python.clone(), scripts_dir))
}

/// Hand `device` to `entry` and report the outcome.
pub fn run_with<E: BootloaderEntry>(device: &str, mut entry: E) -> Result<()> {
    println!("Entering bootloader on {}...", device);
    entry.enter_bootloader(device)?;
    println!("Bootloader requested.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Default)]
    struct RecordingEntry {
        devices: Vec<String>,
    }

    impl BootloaderEntry for RecordingEntry {
        fn enter_bootloader(&mut self, device: &str) -> Result<()> {
            self.devices.push(device.to_string());
            Ok(())
        }
    }

    #[derive(Debug, PartialEq)]
    struct DeviceNotFound(String);

    impl fmt::Display for DeviceNotFound {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "device not found: {}", self.0)
        }
    }

    impl std::error::Error for DeviceNotFound {}

    struct FailingEntry;

    impl BootloaderEntry for FailingEntry {
        fn enter_bootloader(&mut self, device: &str) -> Result<()> {
            Err(DeviceNotFound(device.to_string()).into())
        }
    }

    // --- Argument parsing ---

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["bootreq-usb", "/dev/ttyACM0"]).unwrap();
        assert_eq!(cli.device, "/dev/ttyACM0");
        assert_eq!(cli.method, Method::Helper);
        assert_eq!(cli.scripts_dir, None);
        assert_eq!(cli.python, "python3");
    }

    #[test]
    fn test_parse_touch_method() {
        let cli = Cli::try_parse_from(["bootreq-usb", "/dev/ttyACM0", "--method", "touch"]).unwrap();
        assert_eq!(cli.method, Method::Touch);
    }

    #[test]
    fn test_parse_requires_device() {
        assert!(Cli::try_parse_from(["bootreq-usb"]).is_err());
    }

    #[test]
    fn test_helper_uses_explicit_scripts_dir() {
        let cli = Cli::try_parse_from([
            "bootreq-usb",
            "/dev/ttyACM0",
            "--scripts-dir",
            "/opt/klipper/scripts",
            "--python",
            "/usr/bin/python3.11",
        ])
        .unwrap();
        let helper = helper_from(&cli).unwrap();
        assert_eq!(helper.scripts_dir(), std::path::Path::new("/opt/klipper/scripts"));
        assert_eq!(helper.command("/dev/ttyACM0").get_program(), "/usr/bin/python3.11");
    }

    // --- Delegation ---

    #[test]
    fn test_device_passed_unchanged_once() {
        let device = "/dev/serial/by-id/usb-Klipper_rp2040_E6605481DB318D34-if00";
        let mut entry = RecordingEntry::default();
        run_with(device, &mut entry).unwrap();
        assert_eq!(entry.devices, vec![device.to_string()]);
    }

    #[test]
    fn test_failure_propagates_unmasked() {
        let err = run_with("/dev/ttyACM7", FailingEntry).unwrap_err();
        assert_eq!(err.to_string(), "device not found: /dev/ttyACM7");
        assert_eq!(
            err.downcast_ref::<DeviceNotFound>(),
            Some(&DeviceNotFound("/dev/ttyACM7".to_string()))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_run_helper_failure_propagates() {
        let cli = Cli::try_parse_from([
            "bootreq-usb",
            "/dev/ttyACM0",
            "--scripts-dir",
            "/tmp",
            "--python",
            "false",
        ])
        .unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("/dev/ttyACM0"));
    }
}
