//! Byte ranges selected for visualization

use crate::error::{BinvisError, Result};

/// A half-open range `[start, end)` of a buffer.
///
/// Always non-empty and within the buffer it was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    start: usize,
    end: usize,
}

impl Region {
    /// Validate `[start, end)` against a buffer of `len` bytes.
    ///
    /// Requires `start < end <= len`.
    pub fn new(start: usize, end: usize, len: usize) -> Result<Self> {
        if start >= end || end > len {
            return Err(BinvisError::RegionBounds { start, end, len });
        }
        Ok(Self { start, end })
    }

    /// The whole buffer.
    pub fn full(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(BinvisError::EmptyRegion);
        }
        Ok(Self { start: 0, end: len })
    }

    /// Like [`Region::new`], but an `end` past the buffer (or `None`) is clamped
    /// to the buffer length.
    pub fn clamped(start: usize, end: Option<usize>, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(BinvisError::EmptyRegion);
        }
        let end = end.map_or(len, |e| e.min(len));
        Self::new(start, end, len)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; regions are validated non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check the region still fits a buffer of `len` bytes.
    pub(crate) fn check_fits(&self, len: usize) -> Result<()> {
        if self.end > len {
            return Err(BinvisError::RegionBounds { start: self.start, end: self.end, len });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let region = Region::new(4, 10, 10).unwrap();
        assert_eq!(region.start(), 4);
        assert_eq!(region.end(), 10);
        assert_eq!(region.len(), 6);
        assert!(region.contains(4));
        assert!(!region.contains(10));
    }

    #[test]
    fn test_new_rejects_inverted_and_empty() {
        assert!(matches!(Region::new(5, 5, 10), Err(BinvisError::RegionBounds { .. })));
        assert!(matches!(Region::new(6, 5, 10), Err(BinvisError::RegionBounds { .. })));
    }

    #[test]
    fn test_new_rejects_past_end() {
        assert_eq!(
            Region::new(0, 11, 10),
            Err(BinvisError::RegionBounds { start: 0, end: 11, len: 10 })
        );
    }

    #[test]
    fn test_full() {
        assert_eq!(Region::full(3).unwrap(), Region::new(0, 3, 3).unwrap());
        assert_eq!(Region::full(0), Err(BinvisError::EmptyRegion));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Region::clamped(2, Some(100), 10).unwrap(), Region::new(2, 10, 10).unwrap());
        assert_eq!(Region::clamped(0, None, 7).unwrap(), Region::full(7).unwrap());
        assert!(Region::clamped(10, None, 10).is_err());
        assert_eq!(Region::clamped(0, None, 0), Err(BinvisError::EmptyRegion));
    }

    #[test]
    fn test_check_fits() {
        let region = Region::new(0, 8, 8).unwrap();
        assert!(region.check_fits(8).is_ok());
        assert!(region.check_fits(7).is_err());
    }
}
