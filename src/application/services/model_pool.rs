use std::ops::{Deref, DerefMut};
use std::time::Duration;

use tokio::sync::{Mutex, mpsc};

/// Fixed-size pool of pre-initialized engine instances.
///
/// Instances are expensive to construct (they hold loaded model
/// weights), so they are built once at startup and lent out one
/// request at a time. Waiters suspend on the channel instead of
/// polling; the async mutex on the receiving side keeps hand-off
/// roughly first-come-first-served.
pub struct ModelPool<T> {
    returns: mpsc::Sender<T>,
    available: Mutex<mpsc::Receiver<T>>,
    capacity: usize,
}

impl<T: Send> ModelPool<T> {
    /// Builds a pool over the given instances.
    ///
    /// Panics if `instances` is empty: a zero-capacity pool could
    /// never serve a lease.
    pub fn new(instances: Vec<T>) -> Self {
        assert!(
            !instances.is_empty(),
            "pool requires at least one instance"
        );
        let capacity = instances.len();
        let (returns, available) = mpsc::channel(capacity);
        for instance in instances {
            // Channel is sized to the instance count.
            if returns.try_send(instance).is_err() {
                unreachable!("pool channel rejected an instance during construction");
            }
        }
        Self {
            returns,
            available: Mutex::new(available),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Suspends until an instance is free, then returns exclusive
    /// access to it. The instance goes back to the pool when the
    /// lease is dropped, on every exit path.
    pub async fn lease(&self) -> PoolLease<T> {
        let mut available = self.available.lock().await;
        let instance = available
            .recv()
            .await
            .expect("pool holds a sender, so the channel cannot close");
        PoolLease {
            instance: Some(instance),
            returns: self.returns.clone(),
        }
    }

    /// Like [`lease`](Self::lease), but gives up after `deadline`
    /// without consuming a slot.
    pub async fn lease_with_deadline(
        &self,
        deadline: Duration,
    ) -> Result<PoolLease<T>, PoolTimeoutError> {
        tokio::time::timeout(deadline, self.lease())
            .await
            .map_err(|_| PoolTimeoutError { waited: deadline })
    }
}

/// Exclusive access to one pooled instance.
pub struct PoolLease<T> {
    instance: Option<T>,
    returns: mpsc::Sender<T>,
}

impl<T> Deref for PoolLease<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.instance
            .as_ref()
            .expect("instance is present until drop")
    }
}

impl<T> DerefMut for PoolLease<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.instance
            .as_mut()
            .expect("instance is present until drop")
    }
}

impl<T> Drop for PoolLease<T> {
    fn drop(&mut self) {
        if let Some(instance) = self.instance.take() {
            // Channel capacity equals the pool size, so the send only
            // fails if the pool itself is gone; the instance is then
            // dropped with it.
            let _ = self.returns.try_send(instance);
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("no engine instance became free within {waited:?}")]
pub struct PoolTimeoutError {
    pub waited: Duration,
}
