use crate::domain::model::Direction;
use crate::domain::primitive::{CanvasSize, Digit};
use crate::interface_adapter::port::{ClockPort, RenderPort};
use crate::usecase::render_usecase::RenderUsecase;
use crate::usecase::timer_usecase::TimerUsecase;

/// TUI actions (infrastructure-independent).
///
/// The TUI layer converts key events into `AppAction`s, and
/// `TimerController::dispatch` forwards them to the timer usecase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    TogglePause,
    PushDigit(Digit),
    SecondsUnit,
    SetTime,
    AddTime,
    SubtractTime,
    ShowHelp,
    CloseHelp,
    Quit,
}

/// Thin controller that owns the timer and render usecases.
///
/// Lives in `interface_adapter` so it has no dependency on infrastructure
/// (ratatui, crossterm, etc.). The TUI runner calls `dispatch` for each key
/// action and `tick` on every loop iteration.
pub struct TimerController<C: ClockPort> {
    timer: TimerUsecase<C>,
    render: RenderUsecase,
}

impl<C: ClockPort> TimerController<C> {
    pub fn new(timer: TimerUsecase<C>, render: RenderUsecase) -> Self {
        Self { timer, render }
    }

    /// Dispatch an action to the timer usecase.
    ///
    /// `Quit`, `ShowHelp` and `CloseHelp` are no-ops here; the app runner
    /// inspects them before dispatching and updates its own state.
    pub fn dispatch(&mut self, action: AppAction) {
        match action {
            AppAction::TogglePause => self.timer.toggle_pause(),
            AppAction::PushDigit(digit) => self.timer.push_digit(digit),
            AppAction::SecondsUnit => self.timer.toggle_seconds_unit(),
            AppAction::SetTime => self.timer.set_time(),
            AppAction::AddTime => self.timer.adjust_time(Direction::Add),
            AppAction::SubtractTime => self.timer.adjust_time(Direction::Subtract),
            AppAction::ShowHelp | AppAction::CloseHelp => {} // Handled by caller (app_runner)
            AppAction::Quit => {}                            // Handled by caller (should_quit flag)
        }
    }

    /// Run one render-loop tick against `ctx`. Returns whether it repainted.
    pub fn tick<R: RenderPort>(&mut self, ctx: &mut R, canvas: CanvasSize, force: bool) -> bool {
        let now = self.timer.now();
        self.render.tick(self.timer.timer(), now, canvas, force, ctx)
    }

    /// Read accessor for the timer usecase.
    pub fn timer(&self) -> &TimerUsecase<C> {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::primitive::{DisplayRounding, Paint, Polygon, RemainingTime};
    use crate::usecase::timer_usecase::tests::MockClock;
    use std::time::Duration;

    #[derive(Default)]
    struct CountingPort {
        paints: usize,
        last_background: Option<Paint>,
    }

    impl RenderPort for CountingPort {
        fn clear(&mut self) {
            self.paints += 1;
        }

        fn set_background(&mut self, paint: Paint) {
            self.last_background = Some(paint);
        }

        fn draw_polygon(&mut self, _polygon: &Polygon, _paint: Paint) {}
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn make_controller() -> (TimerController<MockClock>, MockClock) {
        let clock = MockClock::new();
        let timer = TimerUsecase::new(clock.clone(), RemainingTime::from_mins(20));
        let render = RenderUsecase::new(RemainingTime::from_mins(5), DisplayRounding::Up);
        (TimerController::new(timer, render), clock)
    }

    fn canvas() -> CanvasSize {
        CanvasSize::new(160.0, 96.0)
    }

    fn digit(value: u8) -> AppAction {
        AppAction::PushDigit(Digit::new(value).unwrap())
    }

    // =========================================================================
    // Tests: dispatch
    // =========================================================================

    #[test]
    fn dispatch_toggle_pause_pauses_timer() {
        let (mut ctrl, _clock) = make_controller();
        ctrl.dispatch(AppAction::TogglePause);
        assert!(ctrl.timer().timer().is_paused());
    }

    #[test]
    fn dispatch_add_time_adds_one_minute() {
        let (mut ctrl, _clock) = make_controller();
        ctrl.dispatch(AppAction::AddTime);
        assert_eq!(ctrl.timer().remaining(), RemainingTime::from_mins(21));
    }

    #[test]
    fn dispatch_subtract_with_digits() {
        let (mut ctrl, _clock) = make_controller();
        ctrl.dispatch(digit(4));
        ctrl.dispatch(AppAction::SubtractTime);
        assert_eq!(ctrl.timer().remaining(), RemainingTime::from_mins(16));
    }

    #[test]
    fn dispatch_seconds_unit_then_set() {
        let (mut ctrl, _clock) = make_controller();
        ctrl.dispatch(digit(4));
        ctrl.dispatch(digit(5));
        ctrl.dispatch(AppAction::SecondsUnit);
        ctrl.dispatch(AppAction::SetTime);
        assert_eq!(ctrl.timer().remaining(), RemainingTime::from_secs(45));
    }

    #[test]
    fn dispatch_quit_and_help_leave_timer_untouched() {
        let (mut ctrl, _clock) = make_controller();
        ctrl.dispatch(AppAction::Quit);
        ctrl.dispatch(AppAction::ShowHelp);
        ctrl.dispatch(AppAction::CloseHelp);
        assert!(!ctrl.timer().timer().is_paused());
        assert_eq!(ctrl.timer().remaining(), RemainingTime::from_mins(20));
    }

    // =========================================================================
    // Tests: tick
    // =========================================================================

    #[test]
    fn tick_repaints_only_when_frame_changes() {
        let (mut ctrl, clock) = make_controller();
        let mut port = CountingPort::default();
        assert!(ctrl.tick(&mut port, canvas(), false));
        clock.advance(Duration::from_millis(100));
        assert!(!ctrl.tick(&mut port, canvas(), false));
        clock.advance(Duration::from_millis(900));
        assert!(ctrl.tick(&mut port, canvas(), false));
        assert_eq!(port.paints, 2);
    }

    #[test]
    fn tick_after_key_action_reflects_new_time() {
        let (mut ctrl, _clock) = make_controller();
        let mut port = CountingPort::default();
        ctrl.tick(&mut port, canvas(), false);
        ctrl.dispatch(AppAction::AddTime);
        assert!(ctrl.tick(&mut port, canvas(), false));
    }

    #[test]
    fn tick_after_expiry_blinks_alarm_background() {
        let (mut ctrl, clock) = make_controller();
        let mut port = CountingPort::default();
        clock.advance(Duration::from_secs(20 * 60));
        ctrl.tick(&mut port, canvas(), false);
        assert_eq!(port.last_background, Some(Paint::Alarm));
        clock.advance(Duration::from_secs(1));
        ctrl.tick(&mut port, canvas(), false);
        assert_eq!(port.last_background, Some(Paint::Background));
    }

    #[test]
    fn end_to_end_key_scenario() {
        let (mut ctrl, clock) = make_controller();
        for _ in 0..5 {
            ctrl.dispatch(AppAction::AddTime);
        }
        assert_eq!(ctrl.timer().remaining(), RemainingTime::from_mins(25));

        ctrl.dispatch(AppAction::TogglePause);
        let mut port = CountingPort::default();
        ctrl.tick(&mut port, canvas(), false);
        for _ in 0..20 {
            clock.advance(Duration::from_millis(100));
            assert!(!ctrl.tick(&mut port, canvas(), false));
        }
        assert_eq!(ctrl.timer().remaining(), RemainingTime::from_mins(25));

        ctrl.dispatch(digit(1));
        ctrl.dispatch(digit(0));
        ctrl.dispatch(AppAction::SetTime);
        assert_eq!(ctrl.timer().remaining(), RemainingTime::from_mins(10));
        assert!(ctrl.timer().timer().is_paused());
    }
}
