//! # Output Sinks
//!
//! Destinations that receive emitted elements one at a time, in sequence
//! order.

use std::collections::VecDeque;
use std::sync::mpsc::Sender;

use tracing::warn;

/// Appendable destination for emitted elements.
///
/// ## Example
///
/// ```rust
/// use zero_crossing::{zero_cross_into, SinkFn};
///
/// let mut seen = Vec::new();
/// zero_cross_into([-1.0, 1.0, -1.0], &mut SinkFn(|v: f64| seen.push(v * 10.0)));
/// assert_eq!(seen, vec![10.0, -10.0]);
/// ```
pub trait CrossingSink<T> {
    /// Take one element.
    fn accept(&mut self, value: T);
}

impl<T> CrossingSink<T> for Vec<T> {
    fn accept(&mut self, value: T) {
        self.push(value);
    }
}

impl<T> CrossingSink<T> for VecDeque<T> {
    fn accept(&mut self, value: T) {
        self.push_back(value);
    }
}

/// Values sent after the receiver hung up are dropped.
impl<T> CrossingSink<T> for Sender<T> {
    fn accept(&mut self, value: T) {
        if self.send(value).is_err() {
            warn!("crossing sink receiver disconnected, dropping value");
        }
    }
}

impl<T, K> CrossingSink<T> for &mut K
where
    K: CrossingSink<T> + ?Sized,
{
    fn accept(&mut self, value: T) {
        (**self).accept(value);
    }
}

/// Adapter turning a closure into a sink.
#[derive(Debug, Clone, Copy)]
pub struct SinkFn<F>(pub F);

impl<T, F> CrossingSink<T> for SinkFn<F>
where
    F: FnMut(T),
{
    fn accept(&mut self, value: T) {
        (self.0)(value);
    }
}
