// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Wake sequence for bootloader entry over a physical serial port.
//!
//! Firmware that watches its UART for this exact byte string resets itself
//! into the bootloader. Nothing is read back: the request is fire-and-forget.

use std::io::{self, Write};

/// Bytes the firmware's bootloader-entry detector matches on.
///
/// `~`, space, ASCII FS (0x1c), space, the request text, space, `~`.
pub const WAKE_SEQUENCE: [u8; 33] = *b"~ \x1c Request Serial Bootloader!! ~";

/// Read timeout used when opening the serial port.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Line rate that makes a USB CDC device reset into its bootloader when the
/// port is opened and closed at it.
pub const USB_TOUCH_BAUD: u32 = 1200;

/// Write the wake sequence to `link` and flush it.
///
/// The sequence goes out in a single `write_all`. Errors from the link are
/// returned as-is.
pub fn request_bootloader<W: Write + ?Sized>(link: &mut W) -> io::Result<()> {
    link.write_all(&WAKE_SEQUENCE)?;
    link.flush()
}
