use gloo_timers::callback::Timeout;
use yew::Callback;

/// Generation number of a scheduled task. A fired timer only counts when its
/// id still matches the rotator's pending slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Autoplay tick.
    Advance,
    /// Quiet period after manual navigation.
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub id: TimerId,
    pub kind: TimerKind,
}

/// Something that can run a single delayed task and hand it back as `event`.
///
/// Dropping the returned handle must cancel the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, delay_ms: u32, event: TimerEvent) -> Self::Handle;
}

/// Browser scheduler: a gloo `Timeout` that emits into the owning component.
pub struct GlooScheduler {
    on_fire: Callback<TimerEvent>,
}

impl GlooScheduler {
    pub fn new(on_fire: Callback<TimerEvent>) -> Self {
        Self { on_fire }
    }
}

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&mut self, delay_ms: u32, event: TimerEvent) -> Timeout {
        let on_fire = self.on_fire.clone();
        Timeout::new(delay_ms, move || on_fire.emit(event))
    }
}
