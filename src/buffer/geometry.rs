use super::ConfigError;
use crate::mmio::Word;
use core::mem::size_of;
use deranged::RangedUsize;

pub(in crate::buffer) type Capacity = RangedUsize<1, { usize::MAX }>;

/// Where a buffer lives in the address space.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Number of words.
    pub capacity: usize,
    /// Address of logical word 0.
    pub bank_base_address: usize,
    /// Byte distance between consecutive logical words.
    pub address_increment: usize,
}

impl Geometry {
    /// Checks the geometry for words of type `T`.
    pub fn validate<T: Word>(&self) -> Result<(), ConfigError> {
        self.checked_capacity::<T>().map(|_| ())
    }

    pub(in crate::buffer) fn checked_capacity<T: Word>(&self) -> Result<Capacity, ConfigError> {
        let capacity = Capacity::new(self.capacity).ok_or(ConfigError::ZeroCapacity)?;
        if self.address_increment < size_of::<T>() {
            return Err(ConfigError::IncrementTooSmall);
        }
        self.address_increment
            .checked_mul(capacity.get() - 1)
            .and_then(|offset| offset.checked_add(size_of::<T>() - 1))
            .and_then(|offset| self.bank_base_address.checked_add(offset))
            .ok_or(ConfigError::AddressOverflow)?;
        Ok(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::Geometry;
    use crate::buffer::ConfigError;
    use claims::{assert_err_eq, assert_ok};

    #[test]
    fn valid() {
        assert_ok!(Geometry {
            capacity: 1 << 20,
            bank_base_address: 0x6400_0000,
            address_increment: 2,
        }
        .validate::<u16>());
    }

    #[test]
    fn zero_capacity() {
        assert_err_eq!(
            Geometry {
                capacity: 0,
                bank_base_address: 0x1000,
                address_increment: 2,
            }
            .validate::<u16>(),
            ConfigError::ZeroCapacity
        );
    }

    #[test]
    fn increment_too_small() {
        assert_err_eq!(
            Geometry {
                capacity: 4,
                bank_base_address: 0x1000,
                address_increment: 2,
            }
            .validate::<u32>(),
            ConfigError::IncrementTooSmall
        );
    }

    #[test]
    fn interleaved_increment() {
        assert_ok!(Geometry {
            capacity: 4,
            bank_base_address: 0x1000,
            address_increment: 8,
        }
        .validate::<u16>());
    }

    #[test]
    fn last_word_overflows() {
        assert_err_eq!(
            Geometry {
                capacity: 2,
                bank_base_address: usize::MAX - 2,
                address_increment: 2,
            }
            .validate::<u16>(),
            ConfigError::AddressOverflow
        );
    }

    #[test]
    fn last_word_ends_at_top_of_address_space() {
        assert_ok!(Geometry {
            capacity: 2,
            bank_base_address: usize::MAX - 3,
            address_increment: 2,
        }
        .validate::<u16>());
    }

    #[test]
    fn stride_overflows() {
        assert_err_eq!(
            Geometry {
                capacity: usize::MAX,
                bank_base_address: 0,
                address_increment: 4,
            }
            .validate::<u8>(),
            ConfigError::AddressOverflow
        );
    }
}
