// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Request the bootloader on an MCU connected via a USB-serial port.
//!
//! By default this hands the device to Klipper's `flash_usb` helper
//! (`~/klipper/scripts/flash_usb.py`), which knows the platform details.
//!
//! Usage:
//!   bootreq-usb /dev/serial/by-id/usb-Klipper_rp2040_E6605481DB318D34-if00
//!   bootreq-usb /dev/ttyACM0 --scripts-dir /opt/klipper/scripts
//!   bootreq-usb /dev/ttyACM0 --method touch

mod cli;
mod entry;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
