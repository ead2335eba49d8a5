//! Cancellable scheduled tasks keyed by purpose.
//!
//! The slot map owns the handles. In the browser they are `gloo-timers`
//! `Timeout`s, which cancel on drop, so a displaced or taken handle is
//! cancelled as soon as the caller lets it go.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    SearchDebounce,
    Notice(u64),
}

#[derive(Debug)]
pub struct TaskSlots<T> {
    slots: HashMap<TaskKey, T>,
    next_notice: u64,
}

impl<T> Default for TaskSlots<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            next_notice: 0,
        }
    }
}

impl<T> TaskSlots<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh key for a notification; never reused within a page session.
    pub fn next_notice_key(&mut self) -> TaskKey {
        let key = TaskKey::Notice(self.next_notice);
        self.next_notice += 1;
        key
    }

    /// Store `task` under `key`, returning the task it displaced.
    pub fn replace(&mut self, key: TaskKey, task: T) -> Option<T> {
        self.slots.insert(key, task)
    }

    pub fn take(&mut self, key: TaskKey) -> Option<T> {
        self.slots.remove(&key)
    }

    pub fn contains(&self, key: TaskKey) -> bool {
        self.slots.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Records its id when dropped, the way a timer handle cancels.
    struct Handle {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    #[test]
    fn debounce_drops_only_the_displaced_handle() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let handle = |id| Handle {
            id,
            cancelled: Rc::clone(&cancelled),
        };
        let mut slots = TaskSlots::new();

        drop(slots.replace(TaskKey::SearchDebounce, handle(1)));
        assert!(cancelled.borrow().is_empty());

        drop(slots.replace(TaskKey::SearchDebounce, handle(2)));
        drop(slots.replace(TaskKey::SearchDebounce, handle(3)));
        assert_eq!(*cancelled.borrow(), vec![1, 2]);
        assert_eq!(slots.len(), 1);

        drop(slots.take(TaskKey::SearchDebounce));
        assert_eq!(*cancelled.borrow(), vec![1, 2, 3]);
        assert!(slots.is_empty());
    }

    #[test]
    fn replace_hands_back_previous_debounce() {
        let mut slots = TaskSlots::new();
        assert_eq!(slots.replace(TaskKey::SearchDebounce, 1), None);
        assert_eq!(slots.replace(TaskKey::SearchDebounce, 2), Some(1));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots.take(TaskKey::SearchDebounce), Some(2));
        assert!(slots.is_empty());
    }

    #[test]
    fn notices_get_independent_slots() {
        let mut slots = TaskSlots::new();
        let a = slots.next_notice_key();
        let b = slots.next_notice_key();
        assert_ne!(a, b);
        slots.replace(a, "first");
        slots.replace(b, "second");
        assert_eq!(slots.take(a), Some("first"));
        assert!(slots.contains(b));
        assert!(!slots.contains(a));
    }
}
