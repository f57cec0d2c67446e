use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_track_wall_clock() {
        let before = Utc::now().timestamp_millis();
        let millis = SystemClock.now_millis();
        let after = Utc::now().timestamp_millis();
        assert!(before <= millis && millis <= after);
    }
}
