//! Client-side pagination over a result list.

/// Movies shown per page.
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `len` items (`0` when empty).
#[must_use]
pub const fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// The items on 1-based `page`. Pages past the end, and page 0, are empty.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let Some(start) = page.checked_sub(1).map(|p| p * PAGE_SIZE) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_items_make_three_pages() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(total_pages(items.len()), 3);
        assert_eq!(page_slice(&items, 1), &[0, 1, 2, 3, 4]);
        assert_eq!(page_slice(&items, 2), &[5, 6, 7, 8, 9]);
        assert_eq!(page_slice(&items, 3), &[10, 11]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..3).collect();
        assert!(page_slice(&items, 0).is_empty());
        assert!(page_slice(&items, 2).is_empty());
        assert!(page_slice::<u32>(&[], 1).is_empty());
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(11), 3);
    }
}
