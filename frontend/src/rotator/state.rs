use std::rc::Rc;

use log::debug;

use super::error::RotatorError;
use super::model::{wrap_index, Direction, Testimonial};
use super::scheduler::{Scheduler, TimerEvent, TimerId, TimerKind};
use crate::config::AutoplayConfig;

/// The visual change the view should animate. A newer generation replaces
/// whatever is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub generation: u64,
}

/// Read-only view handed to the rendering layer after every message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    pub testimonial: &'a Testimonial,
    pub index: usize,
    pub len: usize,
    pub is_auto_advancing: bool,
    pub transition: Option<Transition>,
}

struct Pending<H> {
    id: TimerId,
    kind: TimerKind,
    // Dropping the handle cancels the task.
    _handle: H,
}

/// Autoplay state machine for the testimonial carousel.
///
/// Owns exactly one timer slot. Scheduling always empties the slot first, so
/// there is never more than one live task, and a fired event is honoured only
/// if its id matches the slot.
pub struct Rotator<S: Scheduler> {
    testimonials: Rc<Vec<Testimonial>>,
    config: AutoplayConfig,
    scheduler: S,
    current_index: usize,
    is_auto_advancing: bool,
    pointer_inside: bool,
    pending: Option<Pending<S::Handle>>,
    next_timer_id: u64,
    transition: Option<Transition>,
    generation: u64,
    torn_down: bool,
}

impl<S: Scheduler> Rotator<S> {
    pub fn new(
        testimonials: Rc<Vec<Testimonial>>,
        config: AutoplayConfig,
        scheduler: S,
    ) -> Result<Self, RotatorError> {
        if testimonials.is_empty() {
            return Err(RotatorError::EmptyTestimonials);
        }
        Ok(Self {
            testimonials,
            config: config.validated(),
            scheduler,
            current_index: 0,
            is_auto_advancing: true,
            pointer_inside: false,
            pending: None,
            next_timer_id: 0,
            transition: None,
            generation: 0,
            torn_down: false,
        })
    }

    /// Arms the first autoplay tick. Called once the component is mounted.
    pub fn start(&mut self) {
        if self.torn_down || !self.is_auto_advancing {
            return;
        }
        self.schedule(TimerKind::Advance, self.config.interval_ms);
    }

    pub fn len(&self) -> usize {
        self.testimonials.len()
    }

    #[cfg(test)]
    fn current_index(&self) -> usize {
        self.current_index
    }

    #[cfg(test)]
    fn is_auto_advancing(&self) -> bool {
        self.is_auto_advancing
    }

    #[cfg(test)]
    fn pending_kind(&self) -> Option<TimerKind> {
        self.pending.as_ref().map(|p| p.kind)
    }

    pub fn advance(&mut self, direction: Direction) {
        let to = wrap_index(self.current_index, direction.delta(), self.len());
        self.move_to(to, direction);
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), RotatorError> {
        let len = self.len();
        if index >= len {
            return Err(RotatorError::IndexOutOfRange { index, len });
        }
        let direction = if index < self.current_index {
            Direction::Previous
        } else {
            Direction::Next
        };
        self.move_to(index, direction);
        Ok(())
    }

    /// Cancels whatever is pending. Safe to call repeatedly.
    pub fn pause_autoplay(&mut self) {
        if self.cancel_pending() {
            debug!("Autoplay paused at {}", self.current_index);
        }
        self.is_auto_advancing = false;
    }

    pub fn resume_autoplay(&mut self) {
        if self.torn_down {
            return;
        }
        self.is_auto_advancing = true;
        self.schedule(TimerKind::Advance, self.config.interval_ms);
        debug!("Autoplay resumed at {}", self.current_index);
    }

    pub fn request_next(&mut self) {
        self.manual(|rotator| rotator.advance(Direction::Next));
    }

    pub fn request_previous(&mut self) {
        self.manual(|rotator| rotator.advance(Direction::Previous));
    }

    pub fn request_jump(&mut self, index: usize) -> Result<(), RotatorError> {
        let len = self.len();
        if index >= len {
            return Err(RotatorError::IndexOutOfRange { index, len });
        }
        if self.torn_down {
            return Ok(());
        }
        self.jump_to(index)?;
        self.pause_after_manual();
        Ok(())
    }

    pub fn pointer_enter(&mut self) {
        if self.torn_down {
            return;
        }
        self.pointer_inside = true;
        self.pause_autoplay();
    }

    pub fn pointer_leave(&mut self) {
        if self.torn_down {
            return;
        }
        self.pointer_inside = false;
        self.resume_autoplay();
    }

    /// Handles a fired timer. Returns whether anything visible changed.
    pub fn on_timer(&mut self, event: TimerEvent) -> bool {
        if self.torn_down {
            return false;
        }
        let kind = match &self.pending {
            Some(pending) if pending.id == event.id => pending.kind,
            _ => {
                debug!("Ignoring stale timer {:?}", event.id);
                return false;
            }
        };
        // The task has run; release its handle before anything is rescheduled.
        self.pending = None;

        match kind {
            TimerKind::Advance => {
                self.advance(Direction::Next);
                self.schedule(TimerKind::Advance, self.config.interval_ms);
            }
            TimerKind::Resume => self.resume_autoplay(),
        }
        true
    }

    /// Unmount. Cancels the slot and ignores everything afterwards.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.is_auto_advancing = false;
        self.torn_down = true;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            testimonial: &self.testimonials[self.current_index],
            index: self.current_index,
            len: self.len(),
            is_auto_advancing: self.is_auto_advancing,
            transition: self.transition,
        }
    }

    fn manual(&mut self, navigate: impl FnOnce(&mut Self)) {
        if self.torn_down {
            return;
        }
        navigate(self);
        self.pause_after_manual();
    }

    fn pause_after_manual(&mut self) {
        self.pause_autoplay();
        // Hovering keeps autoplay off until the pointer leaves; otherwise
        // (touch, keyboard) resume after the quiet period.
        if !self.pointer_inside {
            self.schedule(TimerKind::Resume, self.config.quiet_period_ms);
        }
    }

    fn move_to(&mut self, to: usize, direction: Direction) {
        if to == self.current_index {
            return;
        }
        self.generation += 1;
        self.transition = Some(Transition {
            from: self.current_index,
            to,
            direction,
            generation: self.generation,
        });
        debug!("Testimonial {} -> {} ({:?})", self.current_index, to, direction);
        self.current_index = to;
    }

    fn schedule(&mut self, kind: TimerKind, delay_ms: u32) {
        self.cancel_pending();
        let id = TimerId(self.next_timer_id);
        self.next_timer_id += 1;
        let handle = self.scheduler.schedule(delay_ms, TimerEvent { id, kind });
        self.pending = Some(Pending { id, kind, _handle: handle });
    }

    fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::model::Rating;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Log {
        scheduled: Vec<(u32, TimerEvent)>,
        live: usize,
    }

    #[derive(Clone, Default)]
    struct FakeScheduler {
        log: Rc<RefCell<Log>>,
    }

    struct FakeHandle {
        log: Rc<RefCell<Log>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.log.borrow_mut().live -= 1;
        }
    }

    impl Scheduler for FakeScheduler {
        type Handle = FakeHandle;

        fn schedule(&mut self, delay_ms: u32, event: TimerEvent) -> FakeHandle {
            let mut log = self.log.borrow_mut();
            log.scheduled.push((delay_ms, event));
            log.live += 1;
            FakeHandle { log: self.log.clone() }
        }
    }

    impl FakeScheduler {
        fn live(&self) -> usize {
            self.log.borrow().live
        }

        fn last(&self) -> (u32, TimerEvent) {
            *self.log.borrow().scheduled.last().expect("nothing scheduled")
        }

        fn scheduled_count(&self) -> usize {
            self.log.borrow().scheduled.len()
        }
    }

    fn testimonials(n: usize) -> Rc<Vec<Testimonial>> {
        Rc::new(
            (0..n)
                .map(|i| Testimonial {
                    author: format!("Client {}", i),
                    role: "Marketing lead".to_string(),
                    quote_text: format!("Quote {}", i),
                    rating: Rating::try_from(5).unwrap(),
                })
                .collect(),
        )
    }

    fn config() -> AutoplayConfig {
        AutoplayConfig { interval_ms: 5_000, quiet_period_ms: 8_000 }
    }

    fn rotator(n: usize) -> (Rotator<FakeScheduler>, FakeScheduler) {
        let scheduler = FakeScheduler::default();
        let mut rotator = Rotator::new(testimonials(n), config(), scheduler.clone()).unwrap();
        rotator.start();
        (rotator, scheduler)
    }

    #[test]
    fn empty_list_is_rejected() {
        let result = Rotator::new(Rc::new(Vec::new()), config(), FakeScheduler::default());
        assert!(matches!(result, Err(RotatorError::EmptyTestimonials)));
    }

    #[test]
    fn starts_running_at_first_testimonial() {
        let (rotator, scheduler) = rotator(3);
        assert_eq!(rotator.current_index(), 0);
        assert!(rotator.is_auto_advancing());
        assert_eq!(scheduler.live(), 1);
        assert_eq!(scheduler.last().0, 5_000);
        assert_eq!(scheduler.last().1.kind, TimerKind::Advance);
    }

    #[test]
    fn index_stays_in_bounds_for_mixed_steps() {
        let (mut rotator, _) = rotator(4);
        let steps = [1, 1, -1, -1, -1, -1, -1, 1, 1, 1, 1, 1, -1];
        for step in steps {
            let direction = if step > 0 { Direction::Next } else { Direction::Previous };
            rotator.advance(direction);
            assert!(rotator.current_index() < 4);
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let (mut rotator, _) = rotator(3);
        rotator.jump_to(2).unwrap();
        rotator.advance(Direction::Next);
        assert_eq!(rotator.current_index(), 0);
        rotator.advance(Direction::Previous);
        assert_eq!(rotator.current_index(), 2);
    }

    #[test]
    fn five_testimonials_forward_three_back_five() {
        let (mut rotator, _) = rotator(5);
        for _ in 0..3 {
            rotator.advance(Direction::Next);
        }
        assert_eq!(rotator.current_index(), 3);
        for _ in 0..5 {
            rotator.advance(Direction::Previous);
        }
        assert_eq!(rotator.current_index(), 3);
    }

    #[test]
    fn single_testimonial_never_moves() {
        let (mut rotator, scheduler) = rotator(1);
        rotator.advance(Direction::Next);
        rotator.advance(Direction::Previous);
        rotator.request_next();
        rotator.pointer_leave();
        assert!(rotator.on_timer(scheduler.last().1));
        assert_eq!(rotator.current_index(), 0);
        assert_eq!(rotator.snapshot().transition, None);
    }

    #[test]
    fn pause_twice_is_same_as_once() {
        let (mut rotator, scheduler) = rotator(3);
        rotator.pause_autoplay();
        rotator.pause_autoplay();
        assert!(!rotator.is_auto_advancing());
        assert_eq!(rotator.pending_kind(), None);
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn repeated_resume_keeps_only_latest_timer() {
        let (mut rotator, scheduler) = rotator(3);
        let first = scheduler.last().1;
        rotator.resume_autoplay();
        rotator.resume_autoplay();
        rotator.resume_autoplay();
        assert_eq!(scheduler.live(), 1);

        assert!(!rotator.on_timer(first));
        assert_eq!(rotator.current_index(), 0);

        assert!(rotator.on_timer(scheduler.last().1));
        assert_eq!(rotator.current_index(), 1);
        assert_eq!(scheduler.live(), 1);
    }

    #[test]
    fn timer_fire_advances_and_reschedules() {
        let (mut rotator, scheduler) = rotator(3);
        for expected in [1, 2, 0, 1] {
            assert!(rotator.on_timer(scheduler.last().1));
            assert_eq!(rotator.current_index(), expected);
            assert_eq!(rotator.pending_kind(), Some(TimerKind::Advance));
            assert_eq!(scheduler.live(), 1);
        }
    }

    #[test]
    fn timer_fired_after_pause_does_nothing() {
        let (mut rotator, scheduler) = rotator(3);
        let tick = scheduler.last().1;
        rotator.pointer_enter();
        assert!(!rotator.on_timer(tick));
        assert_eq!(rotator.current_index(), 0);
        assert_eq!(scheduler.scheduled_count(), 1);
    }

    #[test]
    fn teardown_cancels_and_silences_everything() {
        let (mut rotator, scheduler) = rotator(3);
        let tick = scheduler.last().1;
        rotator.teardown();
        assert_eq!(scheduler.live(), 0);

        assert!(!rotator.on_timer(tick));
        rotator.pointer_leave();
        rotator.request_next();
        rotator.start();
        assert_eq!(rotator.current_index(), 0);
        assert_eq!(scheduler.live(), 0);
        assert_eq!(scheduler.scheduled_count(), 1);
    }

    #[test]
    fn manual_jump_while_running_pauses_then_resume_continues_from_there() {
        let (mut rotator, scheduler) = rotator(5);
        rotator.pointer_enter();
        rotator.resume_autoplay();
        let stale_tick = scheduler.last().1;

        rotator.request_jump(2).unwrap();
        assert_eq!(rotator.current_index(), 2);
        assert!(!rotator.is_auto_advancing());
        assert_eq!(rotator.pending_kind(), None);
        assert!(!rotator.on_timer(stale_tick));

        rotator.resume_autoplay();
        assert!(rotator.on_timer(scheduler.last().1));
        assert_eq!(rotator.current_index(), 3);
    }

    #[test]
    fn manual_click_without_hover_resumes_after_quiet_period() {
        let (mut rotator, scheduler) = rotator(4);
        rotator.request_previous();
        assert_eq!(rotator.current_index(), 3);
        assert!(!rotator.is_auto_advancing());
        assert_eq!(rotator.pending_kind(), Some(TimerKind::Resume));
        assert_eq!(scheduler.last().0, 8_000);
        assert_eq!(scheduler.live(), 1);

        assert!(rotator.on_timer(scheduler.last().1));
        assert!(rotator.is_auto_advancing());
        assert_eq!(rotator.pending_kind(), Some(TimerKind::Advance));
        assert_eq!(rotator.current_index(), 3);

        assert!(rotator.on_timer(scheduler.last().1));
        assert_eq!(rotator.current_index(), 0);
    }

    #[test]
    fn hovering_cancels_the_quiet_period() {
        let (mut rotator, scheduler) = rotator(4);
        rotator.request_next();
        let resume = scheduler.last().1;
        rotator.pointer_enter();
        assert!(!rotator.on_timer(resume));
        assert!(!rotator.is_auto_advancing());
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn out_of_range_jump_leaves_state_alone() {
        let (mut rotator, scheduler) = rotator(3);
        let err = rotator.request_jump(3).unwrap_err();
        assert!(matches!(err, RotatorError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(rotator.current_index(), 0);
        assert!(rotator.is_auto_advancing());
        assert_eq!(rotator.pending_kind(), Some(TimerKind::Advance));
        assert_eq!(scheduler.live(), 1);
    }

    #[test]
    fn out_of_range_jump_after_teardown_is_still_reported() {
        let (mut rotator, scheduler) = rotator(3);
        rotator.teardown();
        let err = rotator.request_jump(7).unwrap_err();
        assert!(matches!(err, RotatorError::IndexOutOfRange { index: 7, len: 3 }));
        assert!(rotator.request_jump(1).is_ok());
        assert_eq!(rotator.current_index(), 0);
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn latest_transition_wins() {
        let (mut rotator, _) = rotator(5);
        rotator.request_next();
        rotator.request_next();
        rotator.request_jump(1).unwrap();

        let snapshot = rotator.snapshot();
        let transition = snapshot.transition.unwrap();
        assert_eq!(snapshot.index, 1);
        assert_eq!(snapshot.testimonial.author, "Client 1");
        assert_eq!(transition.from, 2);
        assert_eq!(transition.to, 1);
        assert_eq!(transition.direction, Direction::Previous);
        assert_eq!(transition.generation, 3);
    }
}
