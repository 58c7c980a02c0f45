// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Bootloader entry for links where a raw wake string is not enough.

use anyhow::Result;

/// Something that can put the device behind `device` into bootloader mode.
///
/// Implementations receive the device path exactly as the user typed it and
/// must report failures without swallowing the underlying cause.
pub trait BootloaderEntry {
    fn enter_bootloader(&mut self, device: &str) -> Result<()>;
}

impl<T: BootloaderEntry + ?Sized> BootloaderEntry for &mut T {
    fn enter_bootloader(&mut self, device: &str) -> Result<()> {
        (**self).enter_bootloader(device)
    }
}
