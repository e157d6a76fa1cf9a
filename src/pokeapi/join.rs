use std::future::Future;

use tokio::task::{JoinError, JoinSet};

/// Runs every task concurrently and returns their outputs in input order,
/// whatever order they finish in.
///
/// The first error is returned as soon as it is seen; dropping the join set
/// aborts the tasks still in flight.
pub async fn join_indexed<I, F, T, E>(tasks: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: From<JoinError> + Send + 'static,
{
    let mut set = JoinSet::new();
    let mut count = 0;
    for (index, task) in tasks.into_iter().enumerate() {
        set.spawn(async move { (index, task.await) });
        count += 1;
    }

    let mut slots: Vec<Option<T>> = (0..count).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        let (index, result) = joined?;
        slots[index] = Some(result?);
    }

    // Every task has reported, so every slot is filled.
    Ok(slots.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::sleep;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Failed(&'static str),
        Join,
    }

    impl From<JoinError> for TestError {
        fn from(_: JoinError) -> Self {
            TestError::Join
        }
    }

    #[tokio::test]
    async fn test_output_follows_input_order_not_completion_order() {
        // C finishes first, A last.
        let tasks = [("A", 60), ("B", 30), ("C", 0)].map(|(name, delay)| async move {
            sleep(Duration::from_millis(delay)).await;
            Ok::<_, TestError>(name)
        });
        assert_eq!(join_indexed(tasks).await, Ok(vec!["A", "B", "C"]));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let tasks: Vec<std::future::Ready<Result<u8, TestError>>> = Vec::new();
        assert_eq!(join_indexed(tasks).await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_any_failure_fails_the_whole_join() {
        let tasks = [Ok(1), Err(TestError::Failed("boom")), Ok(3)]
            .map(|outcome| async move { outcome });
        assert_eq!(join_indexed(tasks).await, Err(TestError::Failed("boom")));
    }

    #[tokio::test]
    async fn test_failure_aborts_outstanding_tasks() {
        let finished = Arc::new(AtomicUsize::new(0));
        let slow = {
            let finished = finished.clone();
            async move {
                sleep(Duration::from_millis(200)).await;
                finished.fetch_add(1, Ordering::SeqCst);
                Ok::<u8, TestError>(1)
            }
        };
        let fast_failure = async { Err::<u8, TestError>(TestError::Failed("early")) };

        let tasks: Vec<std::pin::Pin<Box<dyn Future<Output = Result<u8, TestError>> + Send>>> =
            vec![Box::pin(slow), Box::pin(fast_failure)];
        assert_eq!(join_indexed(tasks).await, Err(TestError::Failed("early")));

        sleep(Duration::from_millis(300)).await;
        assert_eq!(finished.load(Ordering::SeqCst), 0);
    }
}
