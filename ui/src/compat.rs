//! Timers for the render loop, on the runtime Dioxus desktop drives.

pub mod interval {
    use tokio::time::{self, Duration, MissedTickBehavior};

    /// Ticks at a fixed rate. A tick that comes late pushes the following
    /// ones back rather than firing a burst to catch up.
    pub struct Interval {
        inner: tokio::time::Interval,
    }

    impl Interval {
        pub fn new(duration: Duration) -> Self {
            let mut interval = time::interval(duration);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            Self { inner: interval }
        }

        pub async fn tick(&mut self) {
            self.inner.tick().await;
        }
    }
}
