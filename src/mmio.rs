//! Word-sized access to memory-mapped address windows.
//!
//! A [`Window`] reads and writes single words at absolute addresses. Nothing is buffered or
//! validated at this level; callers are responsible for only touching addresses that are backed
//! by something. [`Mmio`] goes straight to the processor's address space, while [`RamWindow`]
//! maps a plain byte slice at a chosen base address for running the same code off-target.

use core::{fmt::Debug, mem::size_of};

/// A fixed-width unit of external memory.
pub trait Word: Copy + Debug + Eq {
    /// The all-zero word.
    const ZERO: Self;

    /// Number of hexadecimal digits needed to render any value of this width.
    const HEX_DIGITS: usize;

    /// Widens the word for formatting.
    fn to_u32(self) -> u32;

    /// Reads a word from exactly `size_of::<Self>()` little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Writes the word into exactly `size_of::<Self>()` bytes, little-endian.
    fn write_le_slice(self, bytes: &mut [u8]);
}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl Word for $ty {
                const ZERO: Self = 0;
                const HEX_DIGITS: usize = size_of::<$ty>() * 2;

                fn to_u32(self) -> u32 {
                    self.into()
                }

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut array = [0; size_of::<$ty>()];
                    array.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(array)
                }

                fn write_le_slice(self, bytes: &mut [u8]) {
                    bytes.copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32);

/// Word access to an address space.
pub trait Window<T: Word> {
    /// Reads the word at `address`.
    ///
    /// # Safety
    /// `address` must be valid for a read of `T` through this window, and reading it must not
    /// have side effects the caller is not prepared for.
    unsafe fn read_word(&self, address: usize) -> T;

    /// Writes `word` at `address`.
    ///
    /// # Safety
    /// `address` must be valid for a write of `T` through this window, and the caller must own
    /// whatever lives there.
    unsafe fn write_word(&mut self, address: usize, word: T);
}

impl<T, M> Window<T> for &mut M
where
    T: Word,
    M: Window<T> + ?Sized,
{
    unsafe fn read_word(&self, address: usize) -> T {
        unsafe { (**self).read_word(address) }
    }

    unsafe fn write_word(&mut self, address: usize, word: T) {
        unsafe { (**self).write_word(address, word) }
    }
}

/// Volatile access to the processor's own address space.
#[derive(Debug)]
pub struct Mmio {
    /// Only constructible through the `unsafe` `new()` associated function.
    _private: (),
}

impl Mmio {
    /// Creates an accessor to the raw address space.
    ///
    /// # Safety
    /// Every address later passed through this window must refer to memory or registers that
    /// are mapped on the running target.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl<T: Word> Window<T> for Mmio {
    unsafe fn read_word(&self, address: usize) -> T {
        unsafe { (address as *const T).read_volatile() }
    }

    unsafe fn write_word(&mut self, address: usize, word: T) {
        unsafe { (address as *mut T).write_volatile(word) }
    }
}

/// A byte slice mapped at a fixed base address.
///
/// Addresses are translated by subtracting the base. Accesses that fall outside the slice panic.
#[derive(Debug)]
pub struct RamWindow<'a> {
    base: usize,
    memory: &'a mut [u8],
}

impl<'a> RamWindow<'a> {
    /// Maps `memory` so that its first byte lives at `base`.
    pub fn new(base: usize, memory: &'a mut [u8]) -> Self {
        Self { base, memory }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    /// The backing bytes.
    pub fn memory(&self) -> &[u8] {
        &self.memory[..]
    }

    fn offset(&self, address: usize) -> usize {
        address.wrapping_sub(self.base)
    }
}

impl<T: Word> Window<T> for RamWindow<'_> {
    unsafe fn read_word(&self, address: usize) -> T {
        let offset = self.offset(address);
        T::from_le_slice(&self.memory[offset..offset.saturating_add(size_of::<T>())])
    }

    unsafe fn write_word(&mut self, address: usize, word: T) {
        let offset = self.offset(address);
        word.write_le_slice(&mut self.memory[offset..offset.saturating_add(size_of::<T>())]);
    }
}
