use super::{ActivityMonitor, ActivitySource};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const QUIET: Duration = Duration::from_millis(1000);

struct CountSource {
    pending: Cell<u32>,
}

impl CountSource {
    fn shared() -> Rc<Self> {
        Rc::new(Self {
            pending: Cell::new(0),
        })
    }

    fn bump(&self) {
        self.pending.set(self.pending.get() + 1);
    }
}

impl ActivitySource for CountSource {
    fn take_activity(&self) -> u32 {
        self.pending.replace(0)
    }
}

#[test]
fn no_activity_never_fires() {
    let source = CountSource::shared();
    let mut monitor = ActivityMonitor::new(source, QUIET);

    let t0 = Instant::now();
    assert!(!monitor.poll(t0));
    assert!(!monitor.poll(t0 + Duration::from_secs(10)));
}

#[test]
fn fires_once_after_quiet_period() {
    let source = CountSource::shared();
    let mut monitor = ActivityMonitor::new(source.clone(), QUIET);
    let t0 = Instant::now();

    source.bump();
    assert!(!monitor.poll(t0), "activity itself must not fire");
    assert!(
        !monitor.poll(t0 + Duration::from_millis(999)),
        "quiet period not yet elapsed"
    );
    assert!(monitor.poll(t0 + Duration::from_millis(1000)));
    assert!(
        !monitor.poll(t0 + Duration::from_millis(1100)),
        "one event per burst"
    );
}

#[test]
fn activity_defers_the_deadline() {
    let source = CountSource::shared();
    let mut monitor = ActivityMonitor::new(source.clone(), QUIET);
    let t0 = Instant::now();

    source.bump();
    assert!(!monitor.poll(t0));

    source.bump();
    assert!(!monitor.poll(t0 + Duration::from_millis(900)));

    assert!(
        !monitor.poll(t0 + Duration::from_millis(1500)),
        "deadline moved to t0+1900"
    );
    assert!(monitor.poll(t0 + Duration::from_millis(1900)));
}

#[test]
fn rearms_for_the_next_burst() {
    let source = CountSource::shared();
    let mut monitor = ActivityMonitor::new(source.clone(), QUIET);
    let t0 = Instant::now();

    source.bump();
    monitor.poll(t0);
    assert!(monitor.poll(t0 + Duration::from_millis(1000)));

    source.bump();
    assert!(!monitor.poll(t0 + Duration::from_millis(2000)));
    assert!(monitor.poll(t0 + Duration::from_millis(3000)));
}
