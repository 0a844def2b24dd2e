use std::sync::Arc;
use std::time::Duration;

use kuching::application::services::ModelPool;

#[tokio::test]
async fn given_two_instances_when_leasing_both_then_distinct_instances_are_lent() {
    let pool = ModelPool::new(vec!["first", "second"]);

    let a = pool.lease().await;
    let b = pool.lease().await;

    assert_ne!(*a, *b, "the same instance must never be lent twice");
}

#[tokio::test]
async fn given_full_pool_when_third_request_arrives_then_it_waits_for_a_release() {
    let pool = Arc::new(ModelPool::new(vec![1u32, 2u32]));

    let a = pool.lease().await;
    let b = pool.lease().await;

    let waiter = tokio::spawn({
        let pool = Arc::clone(&pool);
        async move {
            let _lease = pool.lease().await;
        }
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(
        !waiter.is_finished(),
        "third request must wait while both instances are leased"
    );

    drop(a);

    tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .expect("third request should proceed after a release")
        .expect("waiter task");

    drop(b);
}

#[tokio::test]
async fn given_dropped_lease_when_leasing_again_then_instance_is_reusable() {
    let pool = ModelPool::new(vec![42u32]);

    let lease = pool.lease().await;
    assert_eq!(*lease, 42);
    drop(lease);

    let lease = tokio::time::timeout(Duration::from_secs(1), pool.lease())
        .await
        .expect("released instance should be available again");
    assert_eq!(*lease, 42);
}

#[tokio::test]
async fn given_exhausted_pool_when_deadline_elapses_then_lease_times_out() {
    let pool = ModelPool::new(vec![0u32]);

    let held = pool.lease().await;

    let result = pool
        .lease_with_deadline(Duration::from_millis(50))
        .await;
    assert!(result.is_err(), "deadline must expire while the pool is empty");

    drop(held);

    let lease = pool
        .lease_with_deadline(Duration::from_secs(1))
        .await
        .expect("instance should be free after the holder released it");
    assert_eq!(*lease, 0);
}

#[tokio::test]
async fn given_capacity_query_then_reports_instance_count() {
    let pool = ModelPool::new(vec![1u8, 2u8, 3u8]);

    assert_eq!(pool.capacity(), 3);
}
