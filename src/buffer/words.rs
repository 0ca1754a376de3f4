use crate::mmio::{Window, Word};
use core::{iter::FusedIterator, marker::PhantomData};

/// An iterator over a range of words in a buffer.
///
/// Created by [`ExternalMemoryBuffer::words()`](super::ExternalMemoryBuffer::words).
#[derive(Debug)]
pub struct Words<'a, M, T> {
    window: &'a M,
    address: usize,
    address_increment: usize,
    len: usize,
    word: PhantomData<T>,
}

impl<'a, M, T> Words<'a, M, T> {
    /// # Safety
    /// The `len` words starting at `address`, spaced `address_increment` apart, must be readable
    /// through `window`.
    pub(in crate::buffer) unsafe fn new_unchecked(
        window: &'a M,
        address: usize,
        address_increment: usize,
        len: usize,
    ) -> Self {
        Self {
            window,
            address,
            address_increment,
            len,
            word: PhantomData,
        }
    }
}

impl<M, T> Iterator for Words<'_, M, T>
where
    M: Window<T>,
    T: Word,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let word = unsafe { self.window.read_word(self.address) };
        self.address = self.address.wrapping_add(self.address_increment);
        self.len -= 1;
        Some(word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<M, T> ExactSizeIterator for Words<'_, M, T>
where
    M: Window<T>,
    T: Word,
{
}

impl<M, T> FusedIterator for Words<'_, M, T>
where
    M: Window<T>,
    T: Word,
{
}
