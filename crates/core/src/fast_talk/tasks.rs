use std::time::Duration;

/// Handle for a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    Once,
    Every(Duration),
}

#[derive(Debug, Clone)]
struct Scheduled<K> {
    id: TaskId,
    due: Duration,
    repeat: Repeat,
    kind: K,
}

/// Cancellable one-shot and periodic tasks on a virtual monotonic clock.
///
/// Nothing fires on its own: the owner moves time forward with [`TaskQueue::pop_due`]
/// and [`TaskQueue::advance_to`], so dropping the queue drops every pending task.
#[derive(Debug, Clone)]
pub struct TaskQueue<K> {
    now: Duration,
    next_id: u64,
    tasks: Vec<Scheduled<K>>,
}

impl<K> Default for TaskQueue<K> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<K: Clone> TaskQueue<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Run `kind` once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, kind: K) -> TaskId {
        self.push(delay, Repeat::Once, kind)
    }

    /// Run `kind` every `period`, first time one period from now.
    ///
    /// A zero period is bumped to one millisecond so time always moves forward.
    pub fn schedule_every(&mut self, period: Duration, kind: K) -> TaskId {
        let period = period.max(Duration::from_millis(1));
        self.push(period, Repeat::Every(period), kind)
    }

    fn push(&mut self, delay: Duration, repeat: Repeat, kind: K) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Scheduled {
            id,
            due: self.now + delay,
            repeat,
            kind,
        });
        id
    }

    /// Returns true if the task was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.iter().map(|task| task.due).min()
    }

    /// Take the earliest task due at or before `until`.
    ///
    /// The clock moves to the task's due time. Periodic tasks are put back one
    /// period later; one-shot tasks are removed. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskId, K)> {
        let position = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(_, task)| (task.due, task.id))
            .map(|(position, _)| position)?;

        let task = &self.tasks[position];
        let fired = (task.id, task.kind.clone());
        let (due, repeat) = (task.due, task.repeat);
        self.now = self.now.max(due);
        match repeat {
            Repeat::Once => {
                self.tasks.remove(position);
            }
            Repeat::Every(period) => self.tasks[position].due = due + period,
        }
        Some(fired)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn one_shot_fires_once_at_its_due_time() {
        let mut queue = TaskQueue::new();
        let id = queue.schedule_once(ms(1500), "advance");
        assert_eq!(queue.pop_due(ms(1499)), None);
        assert_eq!(queue.pop_due(ms(1500)), Some((id, "advance")));
        assert_eq!(queue.now(), ms(1500));
        assert!(queue.is_empty());
    }

    #[test]
    fn periodic_task_repeats_until_cancelled() {
        let mut queue = TaskQueue::new();
        let id = queue.schedule_every(ms(1000), "tick");
        let mut fired = 0;
        while queue.pop_due(ms(3500)).is_some() {
            fired += 1;
        }
        assert_eq!(fired, 3);
        assert_eq!(queue.next_due(), Some(ms(4000)));
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert_eq!(queue.pop_due(ms(10_000)), None);
    }

    #[test]
    fn earliest_task_fires_first() {
        let mut queue = TaskQueue::new();
        queue.schedule_once(ms(300), "late");
        queue.schedule_once(ms(100), "early");
        queue.schedule_once(ms(100), "early-second");
        let order: Vec<_> = std::iter::from_fn(|| queue.pop_due(ms(1000)))
            .map(|(_, kind)| kind)
            .collect();
        assert_eq!(order, vec!["early", "early-second", "late"]);
    }

    #[test]
    fn scheduling_is_relative_to_the_virtual_clock() {
        let mut queue = TaskQueue::new();
        queue.advance_to(ms(2000));
        queue.schedule_once(ms(500), ());
        assert_eq!(queue.next_due(), Some(ms(2500)));
    }
}
