// Fan out one scan per bucket and collect the results
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    Bucket,
    Buckets,
    Error,
    ReportConfig,
    StorageBackend,
};
use std::sync::Arc;
use super::analysis::{
    Accumulator,
    Analysis,
};
use super::resolver::resolve_client;
use super::scanner::scan;
use tokio::sync::{
    mpsc,
    Semaphore,
};
use tokio::task::JoinSet;
use tokio::time;
use tracing::{
    debug,
    warn,
};

/// Scan every bucket in `buckets` concurrently, handing each `Analysis` to
/// `on_result` as soon as it arrives.
///
/// Results arrive in the order the scans finish, not the order of `buckets`.
/// A bucket whose scan fails is still reported, with its `error` set.
///
/// The whole collection must finish within `config.timeout`. If it doesn't,
/// `Error::Timeout` is returned; anything already passed to `on_result` stays
/// reported. Scans that are still running when this returns are aborted.
///
/// Returns the number of buckets reported.
pub async fn analyze_buckets<B, F>(
    backend:       &B,
    buckets:       Buckets,
    config:        &ReportConfig,
    mut on_result: F,
) -> Result<usize, Error>
where
    B: StorageBackend,
    F: FnMut(Analysis),
{
    let expected = buckets.len();
    let timeout  = config.timeout;

    // Every scan sends exactly once, so with this capacity no scan ever waits
    // on us.
    let (tx, mut rx) = mpsc::channel(expected.max(1));

    let limit = config.concurrency.map(|n| Arc::new(Semaphore::new(n.max(1))));

    // Dropping the set aborts any scan still running, which is what happens
    // to unreported buckets when we return early.
    let mut tasks = JoinSet::new();

    for bucket in buckets {
        let backend       = backend.clone();
        let display_count = config.display_count;
        let limit         = limit.clone();
        let tx            = tx.clone();

        tasks.spawn(async move {
            // Held for the whole scan when concurrency is limited.
            let _permit = match limit {
                Some(semaphore) => semaphore.acquire_owned().await.ok(),
                None            => None,
            };

            let name     = bucket.name.clone();
            let analysis = analyze_bucket(backend, bucket, display_count).await;

            if tx.send(analysis).await.is_err() {
                debug!("Result for '{}' arrived after collection ended", name);
            }
        });
    }

    // Only the scans hold senders now, so the channel closes if they all go
    // away.
    drop(tx);

    debug!("analyze_buckets: Collecting {} results within {:?}", expected, timeout);

    let deadline = time::sleep(timeout);
    tokio::pin!(deadline);

    for received in 0..expected {
        tokio::select! {
            message = rx.recv() => {
                match message {
                    Some(analysis) => on_result(analysis),
                    None           => {
                        return Err(Error::Incomplete {
                            received,
                            expected,
                        });
                    },
                }
            },
            () = &mut deadline => {
                warn!("Timed out with {} of {} buckets reported", received, expected);

                return Err(Error::Timeout {
                    received,
                    expected,
                    timeout,
                });
            },
        }
    }

    Ok(expected)
}

/// Scan a single bucket, returning its finished `Analysis`.
///
/// Errors never escape from here, they're reported in the `Analysis`.
pub async fn analyze_bucket<B: StorageBackend>(
    backend:       B,
    bucket:        Bucket,
    display_count: i64,
) -> Analysis {
    let mut accumulator = Accumulator::new(&bucket, display_count);

    let result = async {
        let client = resolve_client(&backend, &bucket.name).await?;

        scan(&client, &bucket.name, |objects, is_last| {
            for object in objects {
                accumulator.process_object(object);
            }

            !is_last
        }).await
    }.await;

    match result {
        Ok(pages) => {
            debug!(
                "analyze_bucket: '{}' scanned {} pages, {} bytes",
                bucket.name,
                pages,
                accumulator.total_size(),
            );

            accumulator.finalize()
        },
        Err(e) => {
            warn!("analyze_bucket: '{}' failed: {}", bucket.name, e);

            accumulator.fail(&e)
        },
    }
}
