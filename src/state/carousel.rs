use crate::config::SWIPE_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// `Idle` is the only steady state. `Animating` lasts one slide transition
/// and is left through [`Carousel::settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating { target: usize, direction: Direction },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Swipe {
    start_x: i32,
    last_x: Option<i32>,
}

/// Index rotation over `len` slides with autoplay gating and swipe input.
///
/// The displayed index only changes on `settle`, and always stays below
/// `len`. With fewer than two slides every transition is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    phase: Phase,
    hovered: bool,
    swipe: Option<Swipe>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            phase: Phase::Idle,
            hovered: false,
            swipe: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.phase {
            Phase::Animating { direction, .. } => Some(direction),
            Phase::Idle => None,
        }
    }

    /// Index the carousel will rest on once the running transition settles.
    pub fn pending(&self) -> usize {
        match self.phase {
            Phase::Animating { target, .. } => target,
            Phase::Idle => self.index,
        }
    }

    /// Returns `true` when a transition was started and a settle should be scheduled.
    pub fn next(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        let target = (self.pending() + 1) % self.len;
        self.begin(target, Direction::Forward)
    }

    pub fn prev(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        let target = (self.pending() + self.len - 1) % self.len;
        self.begin(target, Direction::Backward)
    }

    pub fn go_to(&mut self, target: usize) -> bool {
        if target >= self.len || target == self.pending() {
            return false;
        }
        let direction = if target > self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.begin(target, direction)
    }

    fn begin(&mut self, target: usize, direction: Direction) -> bool {
        self.phase = Phase::Animating { target, direction };
        true
    }

    /// Lands a running transition. Returns `false` when already idle.
    pub fn settle(&mut self) -> bool {
        match self.phase {
            Phase::Animating { target, .. } => {
                self.index = target;
                self.phase = Phase::Idle;
                true
            }
            Phase::Idle => false,
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Autoplay runs only while nobody hovers or touches the carousel.
    pub fn autoplay_active(&self) -> bool {
        !self.hovered && self.swipe.is_none()
    }

    pub fn autoplay_tick(&mut self) -> bool {
        self.autoplay_active() && self.next()
    }

    pub fn touch_start(&mut self, x: i32) {
        self.swipe = Some(Swipe { start_x: x, last_x: None });
    }

    pub fn touch_move(&mut self, x: i32) {
        if let Some(swipe) = self.swipe.as_mut() {
            swipe.last_x = Some(x);
        }
    }

    /// Drops an interrupted gesture (`touchcancel`) without moving.
    pub fn touch_cancel(&mut self) {
        self.swipe = None;
    }

    /// Ends a touch gesture. A drag longer than the swipe threshold moves
    /// forward (finger went left) or backward (finger went right). Returns
    /// the direction of the transition it started, if any.
    pub fn touch_end(&mut self) -> Option<Direction> {
        let swipe = self.swipe.take()?;
        let delta = swipe.start_x - swipe.last_x.unwrap_or(swipe.start_x);
        if delta > SWIPE_THRESHOLD_PX {
            self.next().then_some(Direction::Forward)
        } else if delta < -SWIPE_THRESHOLD_PX {
            self.prev().then_some(Direction::Backward)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settled(carousel: &mut Carousel) -> usize {
        carousel.settle();
        carousel.index()
    }

    #[test]
    fn next_wraps_forward() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.next());
        assert_eq!(carousel.direction(), Some(Direction::Forward));
        assert_eq!(carousel.index(), 0);
        assert_eq!(settled(&mut carousel), 1);

        carousel.next();
        carousel.settle();
        carousel.next();
        assert_eq!(settled(&mut carousel), 0);
    }

    #[test]
    fn prev_wraps_backward() {
        let mut carousel = Carousel::new(5);
        assert!(carousel.prev());
        assert_eq!(carousel.direction(), Some(Direction::Backward));
        assert_eq!(settled(&mut carousel), 4);
    }

    #[test]
    fn n_nexts_return_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.go_to(start);
                carousel.settle();
                for _ in 0..len {
                    carousel.next();
                    carousel.settle();
                }
                assert_eq!(carousel.index(), start, "len = {len}");
            }
        }
    }

    #[test]
    fn queued_nexts_are_not_lost() {
        let mut carousel = Carousel::new(5);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.pending(), 3);
        assert_eq!(settled(&mut carousel), 3);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert!(!carousel.go_to(0));
        assert!(!carousel.autoplay_tick());
        assert_eq!(carousel.phase(), Phase::Idle);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn go_to_picks_direction_from_current_index() {
        let mut carousel = Carousel::new(5);
        assert!(carousel.go_to(3));
        assert_eq!(carousel.direction(), Some(Direction::Forward));
        carousel.settle();

        assert!(carousel.go_to(1));
        assert_eq!(carousel.direction(), Some(Direction::Backward));
        assert_eq!(settled(&mut carousel), 1);
    }

    #[test]
    fn repeated_go_to_is_idempotent() {
        let mut carousel = Carousel::new(5);
        assert!(carousel.go_to(2));
        let after_first = carousel.clone();

        assert!(!carousel.go_to(2));
        assert_eq!(carousel, after_first);
        assert_eq!(settled(&mut carousel), 2);
        assert!(!carousel.go_to(2));
        assert_eq!(carousel.phase(), Phase::Idle);
    }

    #[test]
    fn go_to_out_of_range_is_rejected() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.go_to(3));
        assert!(!carousel.go_to(usize::MAX));
        assert_eq!(carousel.phase(), Phase::Idle);
    }

    #[test]
    fn settle_when_idle_is_a_no_op() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.settle());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn hover_pauses_autoplay() {
        let mut carousel = Carousel::new(3);
        carousel.pointer_enter();
        assert!(!carousel.autoplay_tick());
        assert_eq!(carousel.phase(), Phase::Idle);

        carousel.pointer_leave();
        assert!(carousel.autoplay_tick());
        assert_eq!(settled(&mut carousel), 1);
    }

    #[test]
    fn touch_pauses_autoplay_until_released() {
        let mut carousel = Carousel::new(3);
        carousel.touch_start(200);
        assert!(!carousel.autoplay_active());
        assert_eq!(carousel.touch_end(), None);
        assert!(carousel.autoplay_active());
    }

    #[test]
    fn swipe_left_goes_forward() {
        let mut carousel = Carousel::new(3);
        carousel.touch_start(300);
        carousel.touch_move(240);
        assert_eq!(carousel.touch_end(), Some(Direction::Forward));
        assert_eq!(settled(&mut carousel), 1);
    }

    #[test]
    fn swipe_right_goes_backward() {
        let mut carousel = Carousel::new(3);
        carousel.touch_start(100);
        carousel.touch_move(180);
        assert_eq!(carousel.touch_end(), Some(Direction::Backward));
        assert_eq!(settled(&mut carousel), 2);
    }

    #[test]
    fn cancelled_touch_resumes_autoplay_without_moving() {
        let mut carousel = Carousel::new(5);
        carousel.touch_start(200);
        carousel.touch_move(40);
        assert!(!carousel.autoplay_active());
        assert!(!carousel.autoplay_tick());

        carousel.touch_cancel();
        assert!(carousel.autoplay_active());
        assert_eq!(carousel.phase(), Phase::Idle);
        assert_eq!(carousel.touch_end(), None);

        assert!(carousel.autoplay_tick());
        assert_eq!(carousel.pending(), 1);
    }

    #[test]
    fn short_swipes_and_taps_do_nothing() {
        let mut carousel = Carousel::new(3);
        carousel.touch_start(100);
        carousel.touch_move(150);
        assert_eq!(carousel.touch_end(), None);

        carousel.touch_start(100);
        assert_eq!(carousel.touch_end(), None);

        assert_eq!(carousel.touch_end(), None);
        assert_eq!(carousel.phase(), Phase::Idle);
    }
}
