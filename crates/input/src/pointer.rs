use glam::Vec2;

/// Turns absolute pointer samples into per-sample deltas.
///
/// The first observed sample seeds the last-position state and yields a
/// zero delta, so a cursor that appears mid-screen does not whip the
/// camera on its first motion event.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample and return the raw screen-space delta since the
    /// previous one.
    pub fn sample(&mut self, position: Vec2) -> Vec2 {
        let delta = match self.last {
            Some(last) => position - last,
            None => Vec2::ZERO,
        };
        self.last = Some(position);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_yields_zero_delta() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.sample(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn subsequent_samples_yield_raw_deltas() {
        let mut tracker = PointerTracker::new();
        tracker.sample(Vec2::new(400.0, 300.0));
        assert_eq!(tracker.sample(Vec2::new(410.0, 295.0)), Vec2::new(10.0, -5.0));
        assert_eq!(tracker.sample(Vec2::new(410.0, 295.0)), Vec2::ZERO);
    }
}
