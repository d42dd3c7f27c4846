use calculations::prelude::*;
use std::sync::{Arc, Mutex};

#[test]
fn test_closed_form_scenarios() {
    assert_eq!(calculate_sum(5).unwrap(), 15);
    assert_eq!(calculate_sum(1).unwrap(), 1);
    assert_eq!(calculate_sum(0), Err(SumError::InvalidArgument { n: 0 }));
    assert_eq!(calculate_sum(-3), Err(SumError::InvalidArgument { n: -3 }));
}

#[tokio::test]
async fn test_background_sum_with_progress() {
    let token = CancellationToken::new();

    let count = Arc::new(Mutex::new(0usize));
    let last = Arc::new(Mutex::new(None));
    let (count_clone, last_clone) = (count.clone(), last.clone());
    let sink: Box<dyn ProgressSink> = Box::new(move |p: Progress| {
        *count_clone.lock().unwrap() += 1;
        *last_clone.lock().unwrap() = Some(p);
    });

    let total = calculate_sum_async(100_000, &token, Some(sink))
        .await
        .unwrap();

    assert_eq!(total, 5_000_050_000);
    assert_eq!(total, calculate_sum(100_000).unwrap());
    assert_eq!(*count.lock().unwrap(), 100_000);
    assert_eq!(
        *last.lock().unwrap(),
        Some(Progress {
            index: 100_000,
            sum: 5_000_050_000
        })
    );
}

#[tokio::test]
async fn test_canceled_is_distinct_from_invalid_argument() {
    let token = CancellationToken::new();
    token.cancel();

    let canceled = calculate_sum_async(3, &token, None).await.unwrap_err();
    let invalid = calculate_sum_async(-1, &token, None).await.unwrap_err();

    assert_eq!(canceled, SumError::Canceled);
    assert_eq!(invalid, SumError::InvalidArgument { n: -1 });
    assert_ne!(canceled.to_string(), invalid.to_string());
}
