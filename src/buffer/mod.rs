//! Circular word buffer over one external memory bank.
//!
//! An [`ExternalMemoryBuffer`] turns a bank base address and a per-word address increment into a
//! logical index space of `capacity` words. Logical index `i` always lives at
//! `bank_base_address + address_increment * i`, whatever the operation.
//!
//! Sequential writes go through a rolling cursor that wraps back to index 0 once it reaches the
//! capacity, silently overwriting the oldest slot on the next lap. Reads are random access, either
//! by logical index or by raw byte offset from the bank base. Bulk operations fill every slot with
//! zero or export every slot as hexadecimal text to an [`embedded_io::Write`] sink.
//!
//! The buffer assumes the bank has already been brought up (see [`crate::bringup`]) and that it
//! is the only thing touching the bank.

mod error;
mod format;
mod geometry;
mod words;

pub use error::{ConfigError, ExportError};
pub use format::HexFormat;
pub use geometry::Geometry;
pub use words::Words;

use crate::{
    clock::{ticks_diff, Clock},
    hex, log,
    mmio::{Window, Word},
    range::translate_range,
};
use core::{marker::PhantomData, mem::size_of, ops::RangeBounds, time::Duration};
use embedded_io::Write;
use geometry::Capacity;

/// A circular buffer of words in external memory.
///
/// `M` is the window the bank is reached through, `C` times exports, and `T` is the word width
/// of the bank.
#[derive(Debug)]
pub struct ExternalMemoryBuffer<M, C, T = u16> {
    window: M,
    clock: C,
    capacity: Capacity,
    bank_base_address: usize,
    address_increment: usize,
    cursor: usize,
    export_format: HexFormat,
    last_export_duration: Option<Duration>,
    word: PhantomData<T>,
}

impl<M, C, T> ExternalMemoryBuffer<M, C, T>
where
    M: Window<T>,
    C: Clock,
    T: Word,
{
    /// Creates a buffer of `capacity` words starting at `bank_base_address`.
    ///
    /// # Safety
    /// Board bring-up must have made every address of the buffer readable and writable through
    /// `window`, and the buffer must have exclusive access to those addresses for the duration
    /// of its lifetime.
    pub unsafe fn new(
        window: M,
        clock: C,
        capacity: usize,
        bank_base_address: usize,
        address_increment: usize,
    ) -> Result<Self, ConfigError> {
        unsafe {
            Self::from_geometry(
                window,
                clock,
                Geometry {
                    capacity,
                    bank_base_address,
                    address_increment,
                },
            )
        }
    }

    /// Creates a buffer from a [`Geometry`].
    ///
    /// # Safety
    /// Same requirements as [`new()`](Self::new).
    pub unsafe fn from_geometry(
        window: M,
        clock: C,
        geometry: Geometry,
    ) -> Result<Self, ConfigError> {
        let capacity = geometry.checked_capacity::<T>()?;
        log::info!(
            "Creating external memory buffer at address 0x{:08x} with capacity {} and address increment {}",
            geometry.bank_base_address,
            geometry.capacity,
            geometry.address_increment
        );
        Ok(Self {
            window,
            clock,
            capacity,
            bank_base_address: geometry.bank_base_address,
            address_increment: geometry.address_increment,
            cursor: 0,
            export_format: HexFormat::default(),
            last_export_duration: None,
            word: PhantomData,
        })
    }

    /// Sets how [`export_to_sink()`](Self::export_to_sink) renders words.
    pub fn with_export_format(mut self, export_format: HexFormat) -> Self {
        self.export_format = export_format;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn bank_base_address(&self) -> usize {
        self.bank_base_address
    }

    pub fn address_increment(&self) -> usize {
        self.address_increment
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            capacity: self.capacity(),
            bank_base_address: self.bank_base_address,
            address_increment: self.address_increment,
        }
    }

    /// The logical index the next [`write()`](Self::write) will land on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn export_format(&self) -> HexFormat {
        self.export_format
    }

    /// How long the most recent successful export took, if there has been one.
    pub fn last_export_duration(&self) -> Option<Duration> {
        self.last_export_duration
    }

    /// The physical address of logical index `index`.
    ///
    /// This is not bounds checked. Address arithmetic wraps around the address space.
    pub fn address_of(&self, index: usize) -> usize {
        self.bank_base_address
            .wrapping_add(self.address_increment.wrapping_mul(index))
    }

    /// Number of bytes from the bank base to the end of the last word.
    fn span(&self) -> usize {
        (self.address_increment * (self.capacity() - 1)).saturating_add(size_of::<T>())
    }

    /// Writes `word` at the cursor and advances the cursor, wrapping to 0 at the capacity.
    pub fn write(&mut self, word: T) {
        let address = self.address_of(self.cursor);
        unsafe { self.window.write_word(address, word) };
        self.cursor += 1;
        if self.cursor == self.capacity() {
            self.cursor = 0;
        }
    }

    /// Reads the word at logical index `index` without checking it against the capacity.
    ///
    /// The cursor is unaffected.
    ///
    /// # Safety
    /// If `index` is not below the capacity, the address it maps to must still be readable
    /// through the window. Whatever lives there is returned as-is.
    pub unsafe fn read_indexed(&self, index: usize) -> T {
        unsafe { self.window.read_word(self.address_of(index)) }
    }

    /// Reads the word at logical index `index`, or `None` if it is past the capacity.
    pub fn get(&self, index: usize) -> Option<T> {
        if index < self.capacity() {
            Some(unsafe { self.read_indexed(index) })
        } else {
            None
        }
    }

    /// Reads the word `byte_offset` bytes past the bank base.
    ///
    /// The offset is not scaled by the address increment, and is not bounds checked.
    ///
    /// # Safety
    /// `bank_base_address + byte_offset` must be readable through the window.
    pub unsafe fn read_at_offset(&self, byte_offset: usize) -> T {
        unsafe {
            self.window
                .read_word(self.bank_base_address.wrapping_add(byte_offset))
        }
    }

    /// Reads the word `byte_offset` bytes past the bank base, or `None` if any part of it falls
    /// outside the buffer.
    pub fn get_at_offset(&self, byte_offset: usize) -> Option<T> {
        let end = byte_offset.checked_add(size_of::<T>())?;
        if end <= self.span() {
            Some(unsafe { self.read_at_offset(byte_offset) })
        } else {
            None
        }
    }

    /// Returns an iterator over the words in the given range of logical indices.
    ///
    /// The range is clamped to the capacity. The cursor is unaffected.
    pub fn words<Range>(&self, range: Range) -> Words<'_, M, T>
    where
        Range: RangeBounds<usize>,
    {
        let (start, len) = translate_range(range, self.capacity());
        unsafe {
            Words::new_unchecked(
                &self.window,
                self.address_of(start),
                self.address_increment,
                len,
            )
        }
    }

    /// Writes zero to every slot in ascending order and leaves the cursor at 0.
    pub fn fill_with_zero(&mut self) {
        self.cursor = 0;
        for _ in 0..self.capacity() {
            self.write(T::ZERO);
        }
        self.cursor = 0;
        log::info!(
            "Filled {} words at address 0x{:08x} with zero",
            self.capacity(),
            self.bank_base_address
        );
    }

    /// Writes every word, in index order, to `sink` as hexadecimal text.
    ///
    /// Each word is rendered according to the [`HexFormat`] and followed by a single space. On
    /// success the duration of the export is recorded and the cursor is reset to 0.
    ///
    /// If the sink fails, nothing more is written and the error is returned. The cursor and the
    /// recorded duration are left untouched in that case.
    pub fn export_to_sink<S>(&mut self, sink: &mut S) -> Result<(), ExportError<S::Error>>
    where
        S: Write,
    {
        let start = self.clock.ticks_ms();
        let min_digits = self.export_format.min_digits::<T>();
        for word in self.words(..) {
            let token = hex::encode(word.to_u32(), min_digits);
            if let Err(error) = sink
                .write_all(token.as_bytes())
                .and_then(|()| sink.write_all(b" "))
            {
                log::warn!("Export aborted by sink error: {error:?}");
                return Err(ExportError::new(error));
            }
        }
        sink.flush().map_err(ExportError::new)?;

        let elapsed = Duration::from_millis(ticks_diff(self.clock.ticks_ms(), start).into());
        self.last_export_duration = Some(elapsed);
        self.cursor = 0;
        log::info!("Exported {} words in {elapsed:?}", self.capacity());
        Ok(())
    }

    /// Gives back the window and the clock.
    pub fn into_parts(self) -> (M, C) {
        (self.window, self.clock)
    }
}
