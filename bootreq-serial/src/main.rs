// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Request the bootloader on an MCU connected to a UART serial port.
//!
//! Not for USB-serial devices; use `bootreq-usb` for those.
//!
//! Usage:
//!   bootreq-serial /dev/ttyAMA0 250000
//!   bootreq-serial /dev/ttyS1 115200 --timeout-ms 500

mod cli;
mod commands;
mod transport;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::run(args)
}
