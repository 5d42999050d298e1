//! # Packed permutations of twelve symbols
//!
//! This module provides [`Perm12`], a permutation of `0..12` packed into a
//! single `u64`: twelve four-bit fields, field `i` holding the image of `i`,
//! with the top sixteen bits always zero.
//!
//! ## Key Features:
//!
//! - **Representation**: one machine word, `Copy`, hashable, totally ordered;
//!   cheap enough to store hundreds of millions of elements in a set.
//! - **Algebra**: composition ([`Perm12::compose`]), inversion
//!   ([`Perm12::inverse`]), parity ([`Perm12::parity`]).
//! - **Construction**: the identity ([`Perm12::IDENTITY`]), a validated
//!   mapping array ([`Perm12::from_mapping`]), a validated packed word
//!   ([`Perm12::from_packed`]), or incremental [`Perm12::with_image`] steps.
//! - **Cycle notation**: [`Perm12::cycles`] renders the nontrivial cycles as
//!   base-36 digits, which is also the `Display` form.
//!
//! Decoding is strict: any word whose fields do not form a bijection of
//! `{0..11}` is rejected with [`PermError`], so a `Perm12` obtained through a
//! validated constructor always satisfies [`Perm12::is_valid`].

use std::fmt;

use thiserror::Error;

/// Low 48 bits of the packed word; the high 16 must stay clear.
const BODY: u64 = (1 << 48) - 1;

/// A permutation of `0..12`, packed as twelve 4-bit fields of a `u64`.
///
/// # Examples
///
/// ```
/// use icosian::perm::Perm12;
///
/// // The 3-cycle (0 1 2), fixing everything else.
/// let g = Perm12::from_mapping(&[1, 2, 0, 3, 4, 5, 6, 7, 8, 9, 10, 11]).unwrap();
/// assert_eq!(g.image(0), 1);
/// assert_eq!(g.cycles(), "(012)");
/// assert_eq!(g.parity(), 1);
/// assert_eq!(g.compose(g.inverse()), Perm12::IDENTITY);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Perm12(u64);

/// A malformed permutation encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PermError {
    /// A mapping slice whose length is not twelve.
    #[error("expected 12 images, got {0}")]
    BadLength(usize),
    /// A mapping entry outside `0..12`.
    #[error("image {value} at position {index} is out of range for 12 symbols")]
    ImageOutOfRange { index: usize, value: u8 },
    /// A packed word whose fields do not form a bijection of `{0..11}`.
    #[error("invalid packed permutation {0:#014x}")]
    NotBijective(u64),
}

impl Perm12 {
    /// The identity permutation: every symbol is a fixed point.
    pub const IDENTITY: Perm12 = Perm12(0x0000_ba98_7654_3210);

    /// The image of position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 12`.
    #[inline]
    pub fn image(self, i: usize) -> u8 {
        assert!(i < 12);
        ((self.0 >> (4 * i)) & 0xf) as u8
    }

    /// Composition `self ∘ h`: apply `h` first, then `self`, so that
    /// `self.compose(h).image(i) == self.image(h.image(i))`.
    #[inline]
    pub fn compose(self, h: Perm12) -> Perm12 {
        let mut p = 0u64;
        for i in 0..12 {
            let hi = (h.0 >> (4 * i)) & 0xf;
            p |= ((self.0 >> (4 * hi)) & 0xf) << (4 * i);
        }
        Perm12(p)
    }

    /// The unique permutation `r` with `r.image(self.image(i)) == i` for all `i`.
    #[inline]
    pub fn inverse(self) -> Perm12 {
        let mut p = 0u64;
        for i in 0..12 {
            p |= (i as u64) << (4 * ((self.0 >> (4 * i)) & 0xf));
        }
        Perm12(p)
    }

    /// Whether the packed word encodes a bijection of `{0..11}` with clear
    /// top bits.
    pub fn is_valid(self) -> bool {
        if self.0 & !BODY != 0 {
            return false;
        }
        let mut mask = 0u16;
        for i in 0..12 {
            mask |= 1 << ((self.0 >> (4 * i)) & 0xf);
        }
        mask == (1 << 12) - 1
    }

    /// Returns `self` with the image of `i` replaced by `v`.
    ///
    /// Intermediate builder step: the result may transiently fail
    /// [`Perm12::is_valid`] until every moved position has been assigned.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 12` or `v >= 12`.
    #[inline]
    pub fn with_image(self, i: usize, v: u8) -> Perm12 {
        assert!(i < 12 && v < 12);
        Perm12((self.0 & !(0xf << (4 * i))) | (u64::from(v) << (4 * i)))
    }

    /// Whether `self` is the identity.
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// The sign of the permutation: `+1` if even, `-1` if odd.
    ///
    /// Follows each cycle `i -> g[i] -> g[g[i]] -> …`; a cycle of length `k`
    /// contributes `(-1)^(k-1)`.
    pub fn parity(self) -> i8 {
        let mut sign = 1i8;
        let mut seen = 0u16;
        for i in 0..12 {
            if seen & (1 << i) == 0 {
                let mut j = i;
                let mut len = 0u32;
                loop {
                    len += 1;
                    seen |= 1 << j;
                    j = self.image(j) as usize;
                    if j == i {
                        break;
                    }
                }
                if len % 2 == 0 {
                    sign = -sign;
                }
            }
        }
        sign
    }

    /// Cycle notation: each nontrivial cycle rendered in traversal order as
    /// base-36 digits in parentheses, cycles ordered by smallest member.
    /// Fixed points are omitted, so the identity renders as the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use icosian::perm::Perm12;
    ///
    /// assert_eq!(Perm12::IDENTITY.cycles(), "");
    /// let g = Perm12::from_mapping(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 9]).unwrap();
    /// assert_eq!(g.cycles(), "(9ab)");
    /// ```
    pub fn cycles(self) -> String {
        let mut s = String::new();
        let mut seen = 0u16;
        for i in 0..12 {
            if seen & (1 << i) == 0 && self.image(i) as usize != i {
                s.push('(');
                let mut j = i;
                loop {
                    s.push(char::from_digit(j as u32, 36).unwrap());
                    seen |= 1 << j;
                    j = self.image(j) as usize;
                    if j == i {
                        break;
                    }
                }
                s.push(')');
            }
        }
        s
    }

    /// The packed wire form: twelve 4-bit fields, top sixteen bits zero.
    #[inline]
    pub fn packed(self) -> u64 {
        self.0
    }

    /// Decodes a packed wire word, rejecting anything that is not a
    /// bijection of `{0..11}`.
    ///
    /// Round-trips exactly with [`Perm12::packed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use icosian::perm::{Perm12, PermError};
    ///
    /// let g = Perm12::IDENTITY;
    /// assert_eq!(Perm12::from_packed(g.packed()), Ok(g));
    /// // All-zero fields map every position to 0: not a bijection.
    /// assert_eq!(Perm12::from_packed(0), Err(PermError::NotBijective(0)));
    /// ```
    pub fn from_packed(word: u64) -> Result<Perm12, PermError> {
        let g = Perm12(word);
        if g.is_valid() {
            Ok(g)
        } else {
            Err(PermError::NotBijective(word))
        }
    }

    /// Builds a permutation from the mapping `i -> map[i]`, validating
    /// length, range and bijectivity.
    pub fn from_mapping(map: &[u8]) -> Result<Perm12, PermError> {
        if map.len() != 12 {
            return Err(PermError::BadLength(map.len()));
        }
        let mut p = 0u64;
        for (i, &v) in map.iter().enumerate() {
            if v >= 12 {
                return Err(PermError::ImageOutOfRange { index: i, value: v });
            }
            p |= u64::from(v) << (4 * i);
        }
        Self::from_packed(p)
    }

    /// The mapping array `[g[0], g[1], …, g[11]]`.
    pub fn to_mapping(self) -> [u8; 12] {
        std::array::from_fn(|i| self.image(i))
    }
}

impl Default for Perm12 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Perm12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cycles())
    }
}
