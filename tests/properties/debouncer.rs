//! Property tests for the quiet-period debouncer.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use assetsync::application::{DebounceMode, Debouncer};

const DELAY: Duration = Duration::from_millis(100);

/// A burst: (key, gap in ms since the previous schedule)
fn burst() -> impl Strategy<Value = Vec<(u8, u64)>> {
    proptest::collection::vec((0u8..4, 0u64..99), 1..20)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: In shared mode a burst with gaps shorter than the delay
    /// settles exactly once, with the last action.
    #[test]
    fn property_shared_burst_settles_once(events in burst()) {
        let start = Instant::now();
        let mut debouncer: Debouncer<u8, usize> = Debouncer::new(DebounceMode::Shared);
        let mut now = start;

        for (index, (key, gap)) in events.iter().enumerate() {
            now += Duration::from_millis(*gap);
            prop_assert!(debouncer.take_ready(now).is_empty());
            debouncer.schedule_at(*key, index, DELAY, now);
        }

        prop_assert!(debouncer.take_ready(now + DELAY - Duration::from_millis(1)).is_empty());
        let ready = debouncer.take_ready(now + DELAY);
        prop_assert_eq!(ready.len(), 1);
        prop_assert_eq!(ready[0].1, events.len() - 1);
        prop_assert!(debouncer.is_empty());
    }

    /// PROPERTY: In keyed mode each distinct key settles exactly once, with
    /// its most recent action.
    #[test]
    fn property_keyed_burst_settles_once_per_key(events in burst()) {
        let start = Instant::now();
        let mut debouncer: Debouncer<u8, usize> = Debouncer::new(DebounceMode::Keyed);
        let mut now = start;

        for (index, (key, gap)) in events.iter().enumerate() {
            now += Duration::from_millis(*gap);
            debouncer.schedule_at(*key, index, DELAY, now);
        }

        let ready = debouncer.take_ready(now + DELAY);
        let keys: BTreeSet<u8> = events.iter().map(|(key, _)| *key).collect();
        prop_assert_eq!(ready.len(), keys.len());
        for (key, action) in &ready {
            let last = events.iter().rposition(|(k, _)| k == key).unwrap();
            prop_assert_eq!(*action, last);
        }
        prop_assert!(debouncer.is_empty());
    }

    /// PROPERTY: Nothing is released or accepted after dispose.
    #[test]
    fn property_dispose_drops_everything(events in burst()) {
        let now = Instant::now();
        let mut debouncer: Debouncer<u8, usize> = Debouncer::new(DebounceMode::Keyed);
        for (index, (key, _)) in events.iter().enumerate() {
            debouncer.schedule_at(*key, index, DELAY, now);
        }

        debouncer.dispose();
        prop_assert!(!debouncer.schedule_at(0, 0, DELAY, now));
        prop_assert!(debouncer.take_ready(now + DELAY * 10).is_empty());
    }
}
