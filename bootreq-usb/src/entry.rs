// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bootloader entry implementations for USB-serial devices.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use bootreq_common::{BootloaderEntry, DEFAULT_TIMEOUT_MS, USB_TOUCH_BAUD};

/// Python snippet that loads `flash_usb` from `argv[1]` and enters the
/// bootloader on `argv[2]`.
pub const HELPER_SCRIPT: &str = "import sys; sys.path.insert(0, sys.argv[1]); \
import flash_usb; flash_usb.enter_bootloader(sys.argv[2])";

/// Default interpreter for the helper.
pub const DEFAULT_PYTHON: &str = "python3";

/// Where the helper lives relative to the home directory.
const SCRIPTS_SUBDIR: &str = "klipper/scripts";

/// Resolve the helper directory from a home directory, if one is known.
pub fn default_scripts_dir(home: Option<OsString>) -> Option<PathBuf> {
    home.filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(SCRIPTS_SUBDIR))
}

/// Klipper's `flash_usb.enter_bootloader`, run in a Python subprocess.
///
/// The child's stdout and stderr are inherited so whatever the helper
/// reports (tracebacks included) reaches the terminal untouched.
pub struct FlashUsbHelper {
    python: String,
    scripts_dir: PathBuf,
}

impl FlashUsbHelper {
    pub fn new(python: impl Into<String>, scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
            scripts_dir: scripts_dir.into(),
        }
    }

    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// Build the interpreter invocation for `device`.
    pub fn command(&self, device: &str) -> Command {
        let mut cmd = Command::new(&self.python);
        cmd.arg("-c")
            .arg(HELPER_SCRIPT)
            .arg(&self.scripts_dir)
            .arg(device);
        cmd
    }
}

impl BootloaderEntry for FlashUsbHelper {
    fn enter_bootloader(&mut self, device: &str) -> Result<()> {
        let status = self
            .command(device)
            .status()
            .with_context(|| format!("Failed to run {}", self.python))?;

        if !status.success() {
            bail!(
                "flash_usb.enter_bootloader failed for {} ({})",
                device,
                status
            );
        }
        Ok(())
    }
}

/// Native "1200 baud touch": raise DTR, switch the line to 1200 baud,
/// drop DTR, close.
pub struct BaudTouch;

impl BootloaderEntry for BaudTouch {
    fn enter_bootloader(&mut self, device: &str) -> Result<()> {
        let mut port = serialport::new(device, USB_TOUCH_BAUD)
            .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .open()
            .with_context(|| format!("Failed to open serial port {}", device))?;

        port.write_data_terminal_ready(true)
            .with_context(|| format!("Failed to set DTR on {}", device))?;
        port.set_baud_rate(USB_TOUCH_BAUD)
            .with_context(|| format!("Failed to set baud rate on {}", device))?;
        port.write_data_terminal_ready(false)
            .with_context(|| format!("Failed to clear DTR on {}", device))?;

        Ok(())
    }
}
