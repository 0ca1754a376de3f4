//! Millisecond timing source used to measure exports.

/// A monotonic millisecond tick counter.
///
/// The counter may wrap; differences are always taken with [`ticks_diff`].
pub trait Clock {
    /// The current tick count, in milliseconds.
    fn ticks_ms(&self) -> u32;
}

impl<F> Clock for F
where
    F: Fn() -> u32,
{
    fn ticks_ms(&self) -> u32 {
        self()
    }
}

/// Milliseconds elapsed from `start` to `end`, accounting for one wrap of the counter.
pub fn ticks_diff(end: u32, start: u32) -> u32 {
    end.wrapping_sub(start)
}
