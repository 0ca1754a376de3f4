//! Word-addressed access to external parallel SRAM on a memory-mapped bus.
//!
//! The central type is [`buffer::ExternalMemoryBuffer`], a circular buffer of fixed-width words
//! laid out over one external memory bank. It is reached through a [`mmio::Window`], which is
//! either the real address space ([`mmio::Mmio`]) or an in-memory stand-in
//! ([`mmio::RamWindow`]). The bank must be brought up first; [`bringup`] holds the register
//! sequence for an IS61WV102416 on an STM32F4 FSMC.

#![cfg_attr(not(test), no_std)]

pub mod bringup;
pub mod buffer;
pub mod clock;
pub mod mmio;

mod hex;
mod log;
mod range;
#[cfg(test)]
mod test_util;
