//! Single-assignment promise/future pair
//!
//! The promise side is consumed when a value is set, so a value can be
//! delivered at most once. The future side can be awaited, blocked on, or
//! polled without blocking.

use parking_lot::{Condvar, Mutex};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};
use std::time::{Duration, Instant};

struct Slot<V> {
    value: Option<V>,
    completed: bool,
    waker: Option<Waker>,
}

struct Shared<V> {
    slot: Mutex<Slot<V>>,
    ready: Condvar,
}

/// Write side of a [`LoadFuture`]
pub struct Promise<V> {
    shared: Arc<Shared<V>>,
}

/// Read side of a [`Promise`]
///
/// If the promise is dropped without a value, the future stays pending forever.
pub struct LoadFuture<V> {
    shared: Arc<Shared<V>>,
}

/// Create a connected promise and future
pub fn promise<V>() -> (Promise<V>, LoadFuture<V>) {
    let shared = Arc::new(Shared {
        slot: Mutex::new(Slot {
            value: None,
            completed: false,
            waker: None,
        }),
        ready: Condvar::new(),
    });
    (
        Promise {
            shared: shared.clone(),
        },
        LoadFuture { shared },
    )
}

impl<V> Promise<V> {
    /// Satisfy the future and wake whoever is waiting on it
    pub fn set_value(self, value: V) {
        let waker = {
            let mut slot = self.shared.slot.lock();
            slot.value = Some(value);
            slot.completed = true;
            slot.waker.take()
        };
        self.shared.ready.notify_all();
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl<V> LoadFuture<V> {
    /// Future that is already satisfied
    pub fn ready(value: V) -> Self {
        let (promise, future) = promise();
        promise.set_value(value);
        future
    }

    /// True once the promise has been satisfied
    pub fn is_ready(&self) -> bool {
        self.shared.slot.lock().completed
    }

    /// Take the value if it has arrived. Returns `None` afterwards.
    pub fn try_take(&self) -> Option<V> {
        self.shared.slot.lock().value.take()
    }

    /// Block the current thread until the value arrives.
    ///
    /// Never returns if the value was already taken with [`LoadFuture::try_take`].
    pub fn wait(self) -> V {
        let mut slot = self.shared.slot.lock();
        loop {
            if let Some(value) = slot.value.take() {
                return value;
            }
            self.shared.ready.wait(&mut slot);
        }
    }

    /// Block for at most `timeout`. `None` if the value did not arrive in time.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<V> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.shared.slot.lock();
        while !slot.completed {
            if self.shared.ready.wait_until(&mut slot, deadline).timed_out() {
                break;
            }
        }
        slot.value.take()
    }
}

impl<V> Future for LoadFuture<V> {
    type Output = V;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<V> {
        let mut slot = self.shared.slot.lock();
        match slot.value.take() {
            Some(value) => Poll::Ready(value),
            None => {
                slot.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

impl<V> fmt::Debug for LoadFuture<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadFuture")
            .field("ready", &self.is_ready())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_ready_future() {
        let future = LoadFuture::ready(7);
        assert!(future.is_ready());
        assert_eq!(future.wait(), 7);
    }

    #[test]
    fn test_pending_until_set() {
        let (promise, future) = promise::<u32>();
        assert!(!future.is_ready());
        assert_eq!(future.try_take(), None);

        promise.set_value(3);
        assert!(future.is_ready());
        assert_eq!(future.try_take(), Some(3));
        assert_eq!(future.try_take(), None);
    }

    #[test]
    fn test_set_from_other_thread() {
        let (promise, future) = promise::<String>();
        let worker = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            promise.set_value("loaded".to_string());
        });

        assert_eq!(future.wait(), "loaded");
        worker.join().unwrap();
    }

    #[test]
    fn test_wait_timeout_on_abandoned_promise() {
        let (promise, future) = promise::<u32>();
        drop(promise);
        assert_eq!(future.wait_timeout(Duration::from_millis(5)), None);
        assert!(!future.is_ready());
    }
}
