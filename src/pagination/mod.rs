/// Fixed-size paging over the filtered launches
use serde::{Serialize, Serializer};

/// One slice of the working set plus the metadata the view needs
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total_pages: usize,
    /// Requested page clamped into `1..=max(1, total_pages)`
    pub current_page: usize,
    pub records: Vec<T>,
}

/// Entry of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Number(usize),
    Ellipsis,
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Number(n) => serializer.serialize_u64(*n as u64),
            PageLink::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

pub struct Paginator;

impl Paginator {
    pub fn total_pages(count: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        count.div_ceil(page_size)
    }

    pub fn clamp_page(page: usize, total_pages: usize) -> usize {
        page.clamp(1, total_pages.max(1))
    }

    pub fn paginate<T: Clone>(records: &[T], page_size: usize, current_page: usize) -> Page<T> {
        let total_pages = Self::total_pages(records.len(), page_size);
        let current_page = Self::clamp_page(current_page, total_pages);

        let start = ((current_page - 1) * page_size).min(records.len());
        let end = (start + page_size).min(records.len());

        Page {
            total_pages,
            current_page,
            records: records[start..end].to_vec(),
        }
    }

    /// Compact "current, next, ..., last" navigation strip.
    ///
    /// With two pages or fewer every page is listed. Otherwise the strip is
    /// the current page, the next one when it is not the last, an ellipsis
    /// when at least one page sits between that and the last, and the last.
    pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageLink> {
        if total_pages <= 2 {
            return (1..=total_pages).map(PageLink::Number).collect();
        }

        let current = Self::clamp_page(current_page, total_pages);
        let mut links = vec![PageLink::Number(current)];

        if current + 1 < total_pages {
            links.push(PageLink::Number(current + 1));
        }
        if current + 2 < total_pages {
            links.push(PageLink::Ellipsis);
        }
        if current != total_pages {
            links.push(PageLink::Number(total_pages));
        }

        links
    }
}
