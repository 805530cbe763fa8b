/// Identifies a piece of scheduled controller work. At most one task per key
/// is pending at a time; scheduling an existing key replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    LineStart(usize),
    LineTick(usize),
    EnterTransition,
    ExitTransition,
    ParticleExpiry,
}

#[derive(Debug, Clone, Copy)]
struct Task {
    key: TaskKey,
    due_ms: u64,
    seq: u64,
}

/// Pending timers keyed by `TaskKey`, drained in due-time order.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
    next_seq: u64,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: TaskKey, due_ms: u64) {
        self.cancel(key);
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.tasks.push(Task { key, due_ms, seq });
    }

    pub fn cancel(&mut self, key: TaskKey) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.key != key);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    #[cfg(test)]
    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.tasks.iter().any(|t| t.key == key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Removes and returns the earliest task due at or before `now_ms`.
    /// Ties go to whichever was scheduled first.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TaskKey, u64)> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(i, _)| i)?;
        let task = self.tasks.swap_remove(idx);
        Some((task.key, task.due_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_order_then_schedule_order() {
        let mut reg = TaskRegistry::new();
        reg.schedule(TaskKey::LineStart(1), 50);
        reg.schedule(TaskKey::LineStart(0), 10);
        reg.schedule(TaskKey::ParticleExpiry, 50);

        assert_eq!(reg.pop_due(100), Some((TaskKey::LineStart(0), 10)));
        assert_eq!(reg.pop_due(100), Some((TaskKey::LineStart(1), 50)));
        assert_eq!(reg.pop_due(100), Some((TaskKey::ParticleExpiry, 50)));
        assert_eq!(reg.pop_due(100), None);
    }

    #[test]
    fn nothing_due_before_deadline() {
        let mut reg = TaskRegistry::new();
        reg.schedule(TaskKey::ExitTransition, 300);
        assert_eq!(reg.pop_due(299), None);
        assert!(reg.is_pending(TaskKey::ExitTransition));
        assert_eq!(reg.pop_due(300), Some((TaskKey::ExitTransition, 300)));
    }

    #[test]
    fn rescheduling_a_key_replaces_it() {
        let mut reg = TaskRegistry::new();
        reg.schedule(TaskKey::LineTick(2), 10);
        reg.schedule(TaskKey::LineTick(2), 40);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.pop_due(20), None);
        assert_eq!(reg.pop_due(40), Some((TaskKey::LineTick(2), 40)));
    }

    #[test]
    fn cancel_all_drops_everything() {
        let mut reg = TaskRegistry::new();
        reg.schedule(TaskKey::LineStart(0), 0);
        reg.schedule(TaskKey::EnterTransition, 0);
        assert!(reg.cancel(TaskKey::EnterTransition));
        assert!(!reg.cancel(TaskKey::EnterTransition));
        reg.cancel_all();
        assert!(reg.is_empty());
        assert_eq!(reg.pop_due(u64::MAX), None);
    }
}
