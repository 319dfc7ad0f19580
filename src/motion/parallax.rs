use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Date;
use web_sys::Element;
use yew::prelude::*;

use super::spring::{Spring, SpringConfig};

/// Fraction of the raw pointer offset that becomes the parallax target.
pub const POINTER_DAMPING: f64 = 0.1;

/// Animation clock period for the springs.
pub const FRAME_MS: u32 = 16;

/// Longest simulated step per tick; a throttled clock catches up no faster.
pub const MAX_STEP_MS: f64 = 64.0;

/// Seconds of spring time to simulate for `elapsed_ms` of wall time.
pub fn frame_step_secs(elapsed_ms: f64) -> f64 {
    elapsed_ms.clamp(0.0, MAX_STEP_MS) / 1000.0
}

/// Bounding box of the tracked region, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    fn of(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Pre-smoothing offset for a pointer at `(client_x, client_y)`.
pub fn pointer_target(client_x: f64, client_y: f64, bounds: &Bounds) -> (f64, f64) {
    let (center_x, center_y) = bounds.center();
    (
        (client_x - center_x) * POINTER_DAMPING,
        (client_y - center_y) * POINTER_DAMPING,
    )
}

/// Two independent springs following the damped pointer offset.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxTracker {
    x: Spring,
    y: Spring,
}

impl ParallaxTracker {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(config),
            y: Spring::new(config),
        }
    }

    pub fn track(&mut self, client_x: f64, client_y: f64, bounds: &Bounds) {
        let (target_x, target_y) = pointer_target(client_x, client_y, bounds);
        self.x.set_target(target_x);
        self.y.set_target(target_y);
    }

    /// Advances both springs. Returns `true` while either is still moving.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        let x_moving = self.x.step(dt_secs);
        let y_moving = self.y.step(dt_secs);
        x_moving || y_moving
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.x.position(), self.y.position())
    }

    #[cfg(test)]
    pub fn target(&self) -> (f64, f64) {
        (self.x.target(), self.y.target())
    }
}

impl Default for ParallaxTracker {
    fn default() -> Self {
        ParallaxTracker::new(SpringConfig::PARALLAX)
    }
}

/// Smoothed pointer offset plus the handler to attach to the tracked region.
#[derive(Clone, PartialEq)]
pub struct PointerParallax {
    pub x: f64,
    pub y: f64,
    pub onmousemove: Callback<MouseEvent>,
}

/// Tracks the pointer over `container` and smooths it through two springs.
///
/// The animation clock only runs while the springs are moving. Leaving the
/// region stops updates; the offset stays where it was.
#[hook]
pub fn use_pointer_parallax(container: NodeRef) -> PointerParallax {
    let offset = use_state_eq(|| (0.0_f64, 0.0_f64));
    let tracker = use_mut_ref(ParallaxTracker::default);
    let clock: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    {
        let clock = clock.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if clock.borrow_mut().take().is_some() {
                        log::debug!("Parallax clock stopped on unmount");
                    }
                }
            },
            (),
        );
    }

    let onmousemove = {
        let offset = offset.clone();
        Callback::from(move |e: MouseEvent| {
            let bounds = match container.cast::<Element>() {
                Some(element) => Bounds::of(&element),
                None => return,
            };
            tracker
                .borrow_mut()
                .track(e.client_x() as f64, e.client_y() as f64, &bounds);

            if clock.borrow().is_some() {
                return;
            }

            let tracker = tracker.clone();
            let offset = offset.clone();
            let stopper = clock.clone();
            let mut last_tick = Date::now();
            let interval = Interval::new(FRAME_MS, move || {
                let now = Date::now();
                let dt = frame_step_secs(now - last_tick);
                last_tick = now;
                let moving = tracker.borrow_mut().step(dt);
                offset.set(tracker.borrow().offset());
                if !moving {
                    // The interval cannot drop itself from inside its own tick.
                    let tracker = tracker.clone();
                    let stopper = stopper.clone();
                    Timeout::new(0, move || {
                        if tracker.borrow().is_at_rest() {
                            stopper.borrow_mut().take();
                        }
                    })
                    .forget();
                }
            });
            *clock.borrow_mut() = Some(interval);
        })
    };

    PointerParallax {
        x: offset.0,
        y: offset.1,
        onmousemove,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> Bounds {
        Bounds {
            left: 0.0,
            top: 100.0,
            width: 1200.0,
            height: 800.0,
        }
    }

    #[test]
    fn target_is_a_tenth_of_the_offset_from_center() {
        let (x, y) = pointer_target(600.0 + 200.0, 500.0 - 50.0, &section());
        assert!((x - 20.0).abs() < 1e-9);
        assert!((y + 5.0).abs() < 1e-9);
    }

    #[test]
    fn center_of_region_targets_zero() {
        assert_eq!(pointer_target(600.0, 500.0, &section()), (0.0, 0.0));
    }

    #[test]
    fn tracker_smooths_toward_target() {
        let mut tracker = ParallaxTracker::default();
        tracker.track(900.0, 700.0, &section());
        assert_eq!(tracker.target(), (30.0, 20.0));
        assert_eq!(tracker.offset(), (0.0, 0.0));

        assert!(tracker.step(0.016));
        let (x, y) = tracker.offset();
        assert!(x > 0.0 && x < 30.0);
        assert!(y > 0.0 && y < 20.0);

        for _ in 0..120 {
            tracker.step(0.016);
        }
        assert!(tracker.is_at_rest());
        assert_eq!(tracker.offset(), (30.0, 20.0));
    }

    #[test]
    fn steps_follow_wall_time_up_to_a_cap() {
        assert!((frame_step_secs(16.0) - 0.016).abs() < 1e-12);
        assert!((frame_step_secs(40.0) - 0.040).abs() < 1e-12);
        assert!((frame_step_secs(1000.0) - MAX_STEP_MS / 1000.0).abs() < 1e-12);
        assert_eq!(frame_step_secs(-5.0), 0.0);
    }

    #[test]
    fn throttled_clock_keeps_pace_with_a_steady_one() {
        let mut steady = ParallaxTracker::default();
        let mut throttled = ParallaxTracker::default();
        steady.track(900.0, 700.0, &section());
        throttled.track(900.0, 700.0, &section());

        // 96 ms of wall time either way.
        for _ in 0..6 {
            steady.step(frame_step_secs(16.0));
        }
        for _ in 0..2 {
            throttled.step(frame_step_secs(48.0));
        }
        let (steady_x, _) = steady.offset();
        let (throttled_x, _) = throttled.offset();
        assert!((steady_x - throttled_x).abs() < 1e-9);
    }

    #[test]
    fn axes_move_independently() {
        let mut tracker = ParallaxTracker::default();
        tracker.track(900.0, 500.0, &section());
        tracker.step(0.016);
        let (x, y) = tracker.offset();
        assert!(x > 0.0);
        assert_eq!(y, 0.0);
    }
}
