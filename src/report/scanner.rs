// Paginated object listing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Context;
use crate::common::{
    Error,
    ObjectDescriptor,
    StorageBackend,
};
use tracing::{
    debug,
    warn,
};

/// List every object in `bucket`, one page at a time.
///
/// `on_page` is called with the objects of each page, in the order the pages
/// arrive, and whether it was the last page. Its return value says whether we
/// should carry on requesting pages. Nothing is requested after the last page,
/// whatever `on_page` returns.
///
/// A failure on any page abandons the scan. Returns the number of pages that
/// were handed to `on_page`.
pub async fn scan<B, F>(
    backend:     &B,
    bucket:      &str,
    mut on_page: F,
) -> Result<usize, Error>
where
    B: StorageBackend,
    F: FnMut(Vec<ObjectDescriptor>, bool) -> bool + Send,
{
    debug!("scan: Listing objects in '{}'", bucket);

    let mut continuation_token = None;
    let mut pages              = 0;

    // Loop until all objects are processed, or the page handler asks us to
    // stop.
    loop {
        let page = backend.list_objects_page(bucket, continuation_token)
            .await
            .with_context(|| format!("listing objects in '{}'", bucket))?;

        pages += 1;

        let is_last = page.is_last();

        debug!(
            "scan: '{}' page {} has {} objects, last: {}",
            bucket,
            pages,
            page.objects.len(),
            is_last,
        );

        let carry_on = on_page(page.objects, is_last);

        if is_last {
            break;
        }

        if !carry_on {
            warn!("scan: page handler stopped '{}' after {} pages", bucket, pages);

            break;
        }

        continuation_token = page.continuation_token;
    }

    Ok(pages)
}
