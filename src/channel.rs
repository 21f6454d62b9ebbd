//! Bounded queue between the input collaborator and the frame loop
//!
//! Built on `critical-section` and `heapless::Deque`, so senders may live in
//! interrupt handlers or another executor while the renderer drains the
//! queue once per frame without blocking.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;
use heapless::Deque;

/// The queue was full; the rejected value is handed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

impl<T> fmt::Display for TrySendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("channel is full")
    }
}

/// Nothing was queued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

impl fmt::Display for TryReceiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("channel is empty")
    }
}

/// Fixed-capacity FIFO guarded by a critical section
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    /// Queue a value, or hand it back if the channel is full
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.with_queue(|queue| queue.push_back(value).map_err(TrySendError))
    }

    /// Take the oldest queued value
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.with_queue(|queue| queue.pop_front().ok_or(TryReceiveError))
    }

    pub fn len(&self) -> usize {
        self.with_queue(|queue| queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with_queue(|queue| queue.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.with_queue(|queue| queue.is_full())
    }

    /// Drop everything still queued
    pub fn clear(&self) {
        self.with_queue(Deque::clear);
    }

    fn with_queue<R>(&self, f: impl FnOnce(&mut Deque<T, SIZE>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.queue.borrow(cs).borrow_mut()))
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`Channel`]; any number may coexist
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Clone for Sender<'_, T, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const SIZE: usize> Copy for Sender<'_, T, SIZE> {}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }
}

/// Receiving half of a [`Channel`]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Clone for Receiver<'_, T, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const SIZE: usize> Copy for Receiver<'_, T, SIZE> {}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }
}
