// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementation for the serial bootloader request.

use std::io::Write;

use anyhow::{Context, Result};

use bootreq_common::request_bootloader;

/// Send the wake sequence over an already-open link.
pub fn request<L: Write>(link: &mut L, device: &str, baud_rate: u32) -> Result<()> {
    print!(
        "Requesting bootloader on {} at {} baud... ",
        device, baud_rate
    );
    std::io::stdout().flush()?;

    request_bootloader(link)
        .with_context(|| format!("Failed to write wake sequence to {}", device))?;

    println!("OK");
    Ok(())
}
