// Scheduled events checked against elapsed session time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledEvent {
    SpawnFirstWave,
    HazardTick,
    SpawnEnemy,
    SpawnPickup,
    ProtectionExpired,
}

#[derive(Debug, Default, Clone)]
pub struct Scheduler {
    // Kept sorted by time; equal times keep insertion order.
    entries: Vec<(f32, ScheduledEvent)>,
}

impl Scheduler {
    pub fn schedule_at(&mut self, at: f32, event: ScheduledEvent) {
        let idx = self.entries.partition_point(|(t, _)| *t <= at);
        self.entries.insert(idx, (at, event));
    }

    pub fn schedule_in(&mut self, now: f32, delay: f32, event: ScheduledEvent) {
        self.schedule_at(now + delay, event);
    }

    /// Removes and returns every event due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: f32) -> Vec<ScheduledEvent> {
        let due = self.entries.partition_point(|(t, _)| *t <= now);
        self.entries.drain(..due).map(|(_, event)| event).collect()
    }

    pub fn is_scheduled(&self, event: ScheduledEvent) -> bool {
        self.entries.iter().any(|(_, e)| *e == event)
    }

    pub fn cancel(&mut self, event: ScheduledEvent) {
        self.entries.retain(|(_, e)| *e != event);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_events_come_out_in_time_order() {
        let mut s = Scheduler::default();
        s.schedule_at(3.0, ScheduledEvent::HazardTick);
        s.schedule_at(1.0, ScheduledEvent::SpawnFirstWave);
        s.schedule_at(10.0, ScheduledEvent::SpawnEnemy);

        assert!(s.drain_due(0.5).is_empty());
        assert_eq!(
            s.drain_due(3.0),
            vec![ScheduledEvent::SpawnFirstWave, ScheduledEvent::HazardTick]
        );
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn equal_times_keep_insertion_order() {
        let mut s = Scheduler::default();
        s.schedule_at(2.0, ScheduledEvent::SpawnPickup);
        s.schedule_at(2.0, ScheduledEvent::SpawnEnemy);

        assert_eq!(
            s.drain_due(2.0),
            vec![ScheduledEvent::SpawnPickup, ScheduledEvent::SpawnEnemy]
        );
    }

    #[test]
    fn cleared_scheduler_never_fires() {
        let mut s = Scheduler::default();
        s.schedule_in(0.0, 1.0, ScheduledEvent::ProtectionExpired);
        s.clear();
        assert!(s.drain_due(100.0).is_empty());
    }

    #[test]
    fn cancel_removes_only_that_event() {
        let mut s = Scheduler::default();
        s.schedule_at(1.0, ScheduledEvent::ProtectionExpired);
        s.schedule_at(1.0, ScheduledEvent::HazardTick);
        s.cancel(ScheduledEvent::ProtectionExpired);

        assert!(!s.is_scheduled(ScheduledEvent::ProtectionExpired));
        assert_eq!(s.drain_due(1.0), vec![ScheduledEvent::HazardTick]);
    }
}
