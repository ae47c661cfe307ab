//! Fixed-size page slicing.

use std::num::NonZeroUsize;

/// `max(1, ceil(count / page_size))`
#[inline]
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// Returns the 1-based `page` of `items`.
///
/// Page 0 is read as page 1; pages past the end are empty rather than an error.
pub fn page_slice<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    let size = page_size.get();
    let start = page.max(1).saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero page size")
    }

    #[test]
    fn test_total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, size(10)), 1);
        assert_eq!(total_pages(10, size(10)), 1);
        assert_eq!(total_pages(11, size(10)), 2);
        assert_eq!(total_pages(5, size(2)), 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_slice(&items, 3, size(2)), &[5]);
        assert_eq!(page_slice(&items, 1, size(2)), &[1, 2]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items = [1, 2, 3];
        assert!(page_slice(&items, 9, size(2)).is_empty());
        assert!(page_slice(&items, usize::MAX, size(2)).is_empty());
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let items = [1, 2, 3];
        assert_eq!(page_slice(&items, 0, size(2)), &[1, 2]);
    }
}
