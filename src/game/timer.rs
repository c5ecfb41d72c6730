use std::collections::HashMap;
use std::time::Instant;

use thiserror::Error;

/// Error returned when querying a timer tag that was never set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("timer tag {0} was never set")]
pub struct UnsetTag(pub u32);

/// A registry of timers, for use in a variety of actions.
/// Each timer is stamped and queried via an integer tag chosen by the caller.
/// Owned by the update loop and passed by reference into the systems that need it;
/// stamps are never removed, the last write for a tag wins.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    timers: HashMap<u32, Instant>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self {
            timers: HashMap::new(),
        }
    }

    /// Stamp `tag` with the current time, overwriting any earlier stamp
    pub fn set(&mut self, tag: u32) {
        self.timers.insert(tag, Instant::now());
    }

    /// Milliseconds elapsed since `tag` was last stamped.
    /// Querying a tag that was never stamped is an error, not a panic.
    pub fn elapsed(&self, tag: u32) -> Result<u64, UnsetTag> {
        self.timers
            .get(&tag)
            .map(|stamp| stamp.elapsed().as_millis() as u64)
            .ok_or(UnsetTag(tag))
    }

    /// Check if `tag` has ever been stamped
    pub fn is_set(&self, tag: u32) -> bool {
        self.timers.contains_key(&tag)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_elapsed_starts_near_zero() {
        let mut timers = TimerRegistry::new();
        timers.set(1);
        // Allow a generous clock-resolution bound
        assert!(timers.elapsed(1).unwrap() < 50);
    }

    #[test]
    fn test_elapsed_counts_up() {
        let mut timers = TimerRegistry::new();
        timers.set(2);
        thread::sleep(Duration::from_millis(20));
        // Sleep guarantees at least the requested duration
        assert!(timers.elapsed(2).unwrap() >= 20);
    }

    #[test]
    fn test_set_resets_the_baseline() {
        let mut timers = TimerRegistry::new();
        timers.set(3);
        thread::sleep(Duration::from_millis(50));
        let before = timers.elapsed(3).unwrap();
        timers.set(3);
        let after = timers.elapsed(3).unwrap();
        assert!(before >= 50);
        assert!(after < before);
    }

    #[test]
    fn test_unset_tag_is_an_error() {
        let timers = TimerRegistry::new();
        assert_eq!(timers.elapsed(7), Err(UnsetTag(7)));
        assert!(!timers.is_set(7));
    }

    #[test]
    fn test_tags_are_independent() {
        let mut timers = TimerRegistry::new();
        timers.set(1);
        thread::sleep(Duration::from_millis(20));
        timers.set(2);
        assert!(timers.elapsed(1).unwrap() >= timers.elapsed(2).unwrap());
    }
}
