// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common pieces shared by the bootloader request tools.
//!
//! - `wake`: the wake sequence the firmware listens for on a plain UART, and
//!   the writer that sends it
//! - `entry`: the seam for platform-specific bootloader entry (USB-serial)

pub mod entry;
pub mod wake;

// Re-export commonly used items
pub use entry::BootloaderEntry;
pub use wake::{request_bootloader, DEFAULT_TIMEOUT_MS, USB_TOUCH_BAUD, WAKE_SEQUENCE};
