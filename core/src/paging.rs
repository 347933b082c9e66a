use crate::project::ProjectRecord;
use crate::viewport::ViewportBucket;

/// One carousel-visible group of cards.
pub type Page<'a> = &'a [ProjectRecord];

/// Splits `projects` into contiguous pages of `bucket.per_page()` cards.
/// The last page may be short; an empty list yields no pages.
pub fn partition(projects: &[ProjectRecord], bucket: ViewportBucket) -> Vec<Page<'_>> {
    projects.chunks(bucket.per_page()).collect()
}

pub fn page_count(len: usize, bucket: ViewportBucket) -> usize {
    len.div_ceil(bucket.per_page())
}
