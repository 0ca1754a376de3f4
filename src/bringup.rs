//! Board bring-up for an external SRAM on the STM32F4 FSMC.
//!
//! Before an [`ExternalMemoryBuffer`] can touch a bank, the clocks feeding the memory controller
//! and its pins must be enabled, the pins switched to their FSMC alternate function, and the
//! controller's bank-control and timing registers programmed for the chip's bus width and wait
//! states. That is a fixed list of register writes, expressed here as a table of [`Register`]s.
//!
//! The values in [`FSMC_BANK2_SRAM`] target an ISSI IS61WV102416 (1M x 16) on chip select NE2 of
//! an STM32F439. They are board-specific and are not derived from anything; treat them as opaque.
//!
//! [`ExternalMemoryBuffer`]: crate::buffer::ExternalMemoryBuffer

use crate::{hex, log, mmio::Window};
use embedded_io::Write;

/// Base address of FSMC bank 1, chip select NE2.
pub const BANK2_BASE: usize = 0x6400_0000;

/// Number of 16-bit words in an IS61WV102416.
pub const IS61WV102416_WORDS: usize = 1 << 20;

/// Address increment between consecutive words of an IS61WV102416 on a 16-bit bus.
pub const IS61WV102416_INCREMENT: usize = 2;

const RCC: usize = 0x4002_3800;
const GPIOD: usize = 0x4002_0C00;
const GPIOE: usize = 0x4002_1000;
const GPIOF: usize = 0x4002_1400;
const GPIOG: usize = 0x4002_1800;
const FSMC: usize = 0xA000_0000;

const MODER: usize = 0x00;
const OTYPER: usize = 0x04;
const OSPEEDR: usize = 0x08;
const PUPDR: usize = 0x0C;
const AFRL: usize = 0x20;
const AFRH: usize = 0x24;

/// A single bring-up step: the bits in `set_bits` are OR-ed into the register at `address`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Register {
    pub name: &'static str,
    pub address: usize,
    pub set_bits: u32,
}

impl Register {
    pub const fn new(name: &'static str, address: usize, set_bits: u32) -> Self {
        Self {
            name,
            address,
            set_bits,
        }
    }
}

/// Bring-up sequence for an IS61WV102416 on FSMC bank 1, NE2, in the order it must be applied.
pub const FSMC_BANK2_SRAM: [Register; 30] = [
    // Clocks for GPIOD-G and the FSMC.
    Register::new("RCC_AHB1ENR", RCC + 0x30, 0x0000_0078),
    Register::new("RCC_AHB3ENR", RCC + 0x38, 0x0000_0001),
    Register::new("RCC_AHB3RSTR", RCC + 0x18, 0x0000_0000),
    // Alternate function 12 (FSMC).
    Register::new("GPIOD_AFRL", GPIOD + AFRL, 0x00CC_00CC),
    Register::new("GPIOE_AFRL", GPIOE + AFRL, 0xC000_C0C0),
    Register::new("GPIOF_AFRL", GPIOF + AFRL, 0x00CC_CCCC),
    Register::new("GPIOG_AFRL", GPIOG + AFRL, 0x00CC_CCCC),
    Register::new("GPIOD_AFRH", GPIOD + AFRH, 0xCCCC_CCCC),
    Register::new("GPIOE_AFRH", GPIOE + AFRH, 0xCCCC_CCCC),
    Register::new("GPIOF_AFRH", GPIOF + AFRH, 0xCCCC_0000),
    Register::new("GPIOG_AFRH", GPIOG + AFRH, 0x0000_00C0),
    Register::new("GPIOD_MODER", GPIOD + MODER, 0xAAAA_0A0A),
    Register::new("GPIOE_MODER", GPIOE + MODER, 0xAAAA_808A),
    Register::new("GPIOF_MODER", GPIOF + MODER, 0xAA00_0AAA),
    Register::new("GPIOG_MODER", GPIOG + MODER, 0x0008_0AAA),
    Register::new("GPIOD_OTYPER", GPIOD + OTYPER, 0x0000_0000),
    Register::new("GPIOE_OTYPER", GPIOE + OTYPER, 0x0000_0000),
    Register::new("GPIOF_OTYPER", GPIOF + OTYPER, 0x0000_0000),
    Register::new("GPIOG_OTYPER", GPIOG + OTYPER, 0x0000_0000),
    Register::new("GPIOD_PUPDR", GPIOD + PUPDR, 0x0000_0000),
    Register::new("GPIOE_PUPDR", GPIOE + PUPDR, 0x0000_0000),
    Register::new("GPIOF_PUPDR", GPIOF + PUPDR, 0x0000_0000),
    Register::new("GPIOG_PUPDR", GPIOG + PUPDR, 0x0000_0000),
    Register::new("GPIOD_OSPEEDR", GPIOD + OSPEEDR, 0xFFFF_0F0F),
    Register::new("GPIOE_OSPEEDR", GPIOE + OSPEEDR, 0xFFFF_C0CF),
    Register::new("GPIOF_OSPEEDR", GPIOF + OSPEEDR, 0xFF00_0FFF),
    Register::new("GPIOG_OSPEEDR", GPIOG + OSPEEDR, 0x000C_0FFF),
    // Bank 1 NE2: 16-bit SRAM, read and write timings.
    Register::new("FSMC_BCR2", FSMC + 0x08, 0x0000_1011),
    Register::new("FSMC_BTR2", FSMC + 0x0C, 0x0011_0212),
    Register::new("FSMC_BWTR2", FSMC + 0x10C, 0x0011_0212),
];

/// Applies `sequence` in order, OR-ing each register's bits into its current value.
///
/// # Safety
/// Every address in `sequence` must be a register reachable through `registers`, and the caller
/// must own the peripherals those registers configure.
pub unsafe fn bring_up<M>(registers: &mut M, sequence: &[Register])
where
    M: Window<u32>,
{
    for register in sequence {
        let value = unsafe { registers.read_word(register.address) } | register.set_bits;
        unsafe { registers.write_word(register.address, value) };
        log::debug!("{} <- 0x{:08X}", register.name, value);
    }
    log::info!("Applied {} bring-up register writes", sequence.len());
}

/// Writes the current value of every register in `sequence` to `sink`, one per line.
///
/// The output starts with a `-- REGISTER DUMP --` header, followed by lines of the form
/// `FSMC_BCR2: 0x00001011`. Lines follow the order of `sequence`, so dumping
/// [`FSMC_BANK2_SRAM`] lists the registers in the order they are applied (AFRL and AFRH before
/// MODER).
///
/// # Safety
/// Every address in `sequence` must be a register reachable through `registers`.
pub unsafe fn dump<M, S>(registers: &M, sequence: &[Register], sink: &mut S) -> Result<(), S::Error>
where
    M: Window<u32>,
    S: Write,
{
    sink.write_all(b"-- REGISTER DUMP --\n")?;
    for register in sequence {
        let value = unsafe { registers.read_word(register.address) };
        sink.write_all(register.name.as_bytes())?;
        sink.write_all(b": 0x")?;
        sink.write_all(hex::encode(value, 8).as_bytes())?;
        sink.write_all(b"\n")?;
    }
    sink.flush()
}
