/// A clamped scroll offset that can either jump or ease toward a target.
///
/// Each `tick` moves the offset by `round((target - current) * speed)` cells
/// (at least one) so motion decelerates as it approaches the target. The
/// same type drives the menu strip, the page and the side panel slide.
#[derive(Debug, Clone)]
pub struct SmoothOffset {
    current: i32,
    target: Option<i32>,
    max: i32,
    speed: f64,
}

impl SmoothOffset {
    pub fn new(speed: f64) -> Self {
        SmoothOffset {
            current: 0,
            target: None,
            max: 0,
            speed: speed.clamp(0.05, 1.0),
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Where the offset will rest once any in-flight animation completes.
    pub fn destination(&self) -> i32 {
        self.target.unwrap_or(self.current)
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(0, self.max)
    }

    /// Update the upper bound and pull the offset and target inside it.
    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(0);
        self.current = self.clamp(self.current);
        if let Some(t) = self.target {
            let t = self.clamp(t);
            self.target = (t != self.current).then_some(t);
        }
    }

    /// Set the offset immediately, aborting any animation. Returns true
    /// when the offset changed.
    pub fn jump_to(&mut self, value: i32) -> bool {
        let value = self.clamp(value);
        self.target = None;
        let changed = value != self.current;
        self.current = value;
        changed
    }

    /// Start easing toward `value`. Returns true when motion was scheduled.
    pub fn animate_to(&mut self, value: i32) -> bool {
        let value = self.clamp(value);
        if value == self.current {
            self.target = None;
            return false;
        }
        self.target = Some(value);
        true
    }

    /// Drop the in-flight animation, leaving the offset where it is.
    /// Returns true when an animation was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.target.take().is_some()
    }

    /// Advance the animation by one frame. Returns true when the offset moved.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let diff = target - self.current;
        let mut step = (diff as f64 * self.speed).round() as i32;
        if step == 0 {
            step = diff.signum();
        }
        self.current += step;
        if self.current == target {
            self.target = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_converges_and_stops() {
        let mut s = SmoothOffset::new(0.35);
        s.set_max(100);
        assert!(s.animate_to(64));
        assert_eq!(s.destination(), 64);
        let mut frames = 0;
        while s.tick() {
            frames += 1;
            assert!(frames < 100, "animation did not settle");
        }
        assert_eq!(s.current(), 64);
        assert!(!s.is_animating());
    }

    #[test]
    fn targets_are_clamped() {
        let mut s = SmoothOffset::new(1.0);
        s.set_max(10);
        assert!(s.jump_to(50));
        assert_eq!(s.current(), 10);
        assert!(!s.animate_to(99));
        assert!(s.jump_to(-3));
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn shrinking_max_pulls_offset_back() {
        let mut s = SmoothOffset::new(0.5);
        s.set_max(40);
        s.jump_to(30);
        s.animate_to(40);
        s.set_max(30);
        assert_eq!(s.current(), 30);
        assert!(!s.is_animating());
    }
}
