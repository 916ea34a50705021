use shared::errors::ServiceError;

/// A validated page position: `page_index >= 0`, `page_size > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_index: i64,
    page_size: i64,
}

impl PageRequest {
    pub fn new(page_index: i64, page_size: i64) -> Result<Self, ServiceError> {
        if page_index < 0 {
            return Err(ServiceError::InvalidArgument(format!(
                "page index must be >= 0, got {page_index}"
            )));
        }
        if page_size <= 0 {
            return Err(ServiceError::InvalidArgument(format!(
                "page size must be > 0, got {page_size}"
            )));
        }

        Ok(Self {
            page_index,
            page_size,
        })
    }

    pub fn page_index(&self) -> i64 {
        self.page_index
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        self.page_index.saturating_mul(self.page_size)
    }
}

/// One slice of an ordered result set, with totals for the whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_count: i64) -> Self {
        let size = request.page_size();
        let total_pages = if total_count <= 0 {
            0
        } else {
            (total_count - 1) / size + 1
        };

        Self {
            items,
            page_index: request.page_index(),
            page_size: size,
            total_count: total_count.max(0),
            total_pages,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_index_and_non_positive_size() {
        assert!(matches!(
            PageRequest::new(-1, 10),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            PageRequest::new(0, 0),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            PageRequest::new(0, -5),
            Err(ServiceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn offset_and_limit_follow_index_and_size() {
        let request = PageRequest::new(3, 25).unwrap();
        assert_eq!(request.offset(), 75);
        assert_eq!(request.limit(), 25);
    }

    #[test]
    fn total_pages_rounds_up() {
        let request = PageRequest::new(0, 10).unwrap();

        assert_eq!(Page::<u8>::new(vec![], &request, 0).total_pages, 0);
        assert_eq!(Page::<u8>::new(vec![], &request, 1).total_pages, 1);
        assert_eq!(Page::<u8>::new(vec![], &request, 10).total_pages, 1);
        assert_eq!(Page::<u8>::new(vec![], &request, 11).total_pages, 2);
    }

    #[test]
    fn total_pages_does_not_overflow_for_huge_page_size() {
        let request = PageRequest::new(0, i64::MAX).unwrap();

        assert_eq!(Page::<u8>::new(vec![], &request, 3).total_pages, 1);
        assert_eq!(Page::<u8>::new(vec![], &request, i64::MAX).total_pages, 1);

        let one_per_page = PageRequest::new(0, 1).unwrap();
        assert_eq!(
            Page::<u8>::new(vec![], &one_per_page, i64::MAX).total_pages,
            i64::MAX
        );
    }

    #[test]
    fn map_keeps_totals() {
        let request = PageRequest::new(1, 2).unwrap();
        let page = Page::new(vec![1, 2], &request, 5).map(|n| n * 10);

        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.page_index, 1);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 3);
    }
}
