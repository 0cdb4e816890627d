use std::fmt::{self, Debug, Formatter};

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

type Word = usize;

const BITS: usize = Word::BITS as usize;

/// A fixed number of bits, packed into words and all initially unset.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    words: Box<[Word]>,
    len: usize,
}

impl BitSet {
    /// Creates a BitSet holding `len` bits, all unset.
    pub fn new(len: usize) -> BitSet {
        BitSet {
            words: vec![0; len.div_ceil(BITS)].into_boxed_slice(),
            len,
        }
    }

    /// Returns the number of bits in the set.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bit at `pos`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds.
    pub fn get(&self, pos: usize) -> bool {
        self.try_get(pos).throw()
    }

    /// Returns the bit at `pos`, returning an [`Err`] if it is out of bounds rather than
    /// panicking.
    pub fn try_get(&self, pos: usize) -> Result<bool, IndexOutOfBounds> {
        self.check(pos)?;
        Ok(self.words[pos / BITS] & Self::mask(pos) != 0)
    }

    /// Sets the bit at `pos` to `value`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: usize, value: bool) {
        self.try_set(pos, value).throw()
    }

    /// Sets the bit at `pos` to `value`, returning an [`Err`] if it is out of bounds rather than
    /// panicking.
    pub fn try_set(&mut self, pos: usize, value: bool) -> Result<(), IndexOutOfBounds> {
        self.check(pos)?;
        let word = &mut self.words[pos / BITS];
        if value {
            *word |= Self::mask(pos);
        } else {
            *word &= !Self::mask(pos);
        }
        Ok(())
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Unsets every bit.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    const fn mask(pos: usize) -> Word {
        1 << (pos % BITS)
    }

    const fn check(&self, pos: usize) -> Result<(), IndexOutOfBounds> {
        if pos < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds { index: pos, len: self.len })
        }
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet(")?;
        for pos in 0..self.len {
            let set = self.words[pos / BITS] & Self::mask(pos) != 0;
            write!(f, "{}", if set { '1' } else { '0' })?;
        }
        write!(f, ")")
    }
}
