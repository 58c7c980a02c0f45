// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use bootreq_common::DEFAULT_TIMEOUT_MS;

use crate::commands;
use crate::transport::Transport;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "bootreq-serial")]
#[command(about = "Request the bootloader on an MCU connected via UART (not for USB-serial)")]
pub struct Cli {
    /// Serial port (e.g., /dev/ttyAMA0)
    #[arg(value_name = "DEVICE")]
    pub device: String,

    /// Baud rate the firmware's UART runs at
    #[arg(value_name = "BAUD", value_parser = clap::value_parser!(u32).range(1..))]
    pub baud: u32,

    /// Serial timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    run_with(cli, Transport::open)
}

/// Execute the parsed CLI command, opening the link with `open`.
pub fn run_with<F, L>(cli: Cli, open: F) -> Result<()>
where
    F: FnOnce(&str, u32, u64) -> Result<L>,
    L: Write,
{
    let mut link = open(&cli.device, cli.baud, cli.timeout_ms)?;
    commands::request(&mut link, &cli.device, cli.baud)
}
