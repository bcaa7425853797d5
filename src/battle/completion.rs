//! One-shot completion tokens handed from the battle engine to a selector.
//!
//! `complete` consumes the token, so a turn can be finished at most once.
//! Dropping a token that never fired is logged, since the engine would wait
//! on it forever.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::warn;

pub struct Completion<T> {
    label: &'static str,
    callback: Option<Box<dyn FnOnce(T)>>,
}

impl<T: 'static> Completion<T> {
    pub fn new(label: &'static str, callback: impl FnOnce(T) + 'static) -> Self {
        Self {
            label,
            callback: Some(Box::new(callback)),
        }
    }

    /// A completion paired with a slot the caller can poll for the result.
    pub fn with_slot(label: &'static str) -> (Self, CompletionSlot<T>) {
        let slot = CompletionSlot::new();
        let writer = slot.clone();
        (Self::new(label, move |value| writer.fill(value)), slot)
    }
}

impl<T> Completion<T> {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn complete(mut self, value: T) {
        if let Some(callback) = self.callback.take() {
            callback(value);
        }
    }

    /// Drop the token on purpose, e.g. when the battle ended instead.
    pub fn release(mut self) {
        self.callback = None;
    }
}

impl<T> Drop for Completion<T> {
    fn drop(&mut self) {
        if self.callback.is_some() {
            warn!(label = self.label, "completion dropped without firing");
        }
    }
}

impl<T> fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("label", &self.label)
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

/// Receiving end of `Completion::with_slot`.
#[derive(Debug)]
pub struct CompletionSlot<T> {
    inner: Rc<RefCell<SlotState<T>>>,
}

#[derive(Debug)]
struct SlotState<T> {
    value: Option<T>,
    fired: usize,
}

impl<T> CompletionSlot<T> {
    fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SlotState {
                value: None,
                fired: 0,
            })),
        }
    }

    fn fill(&self, value: T) {
        let mut state = self.inner.borrow_mut();
        state.value = Some(value);
        state.fired += 1;
    }

    pub fn take(&self) -> Option<T> {
        self.inner.borrow_mut().value.take()
    }

    pub fn is_filled(&self) -> bool {
        self.inner.borrow().value.is_some()
    }

    /// How many times the paired completion fired. Never more than one.
    pub fn times_fired(&self) -> usize {
        self.inner.borrow().fired
    }
}

impl<T> Clone for CompletionSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_delivers_value_once() {
        let (completion, slot) = Completion::with_slot("test");
        assert!(!slot.is_filled());

        completion.complete(7u8);

        assert_eq!(slot.times_fired(), 1);
        assert_eq!(slot.take(), Some(7));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_released_completion_never_fires() {
        let (completion, slot) = Completion::<()>::with_slot("released");
        assert_eq!(completion.label(), "released");
        completion.release();
        assert_eq!(slot.times_fired(), 0);
    }

    #[test]
    fn test_callback_completion_runs_closure() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let completion = Completion::new("closure", move |value: &'static str| {
            sink.borrow_mut().push(value)
        });
        completion.complete("done");
        assert_eq!(*seen.borrow(), vec!["done"]);
    }
}
