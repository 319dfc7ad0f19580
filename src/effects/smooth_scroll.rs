use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Date;
use yew::prelude::*;

pub const DEFAULT_DURATION_MS: u32 = 500;

const FRAME_MS: u32 = 16;

pub fn ease_in_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Vertical scroll from one offset to another over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    duration_ms: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms as f64,
        }
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.to;
        }
        let t = elapsed_ms / self.duration_ms;
        self.from + (self.to - self.from) * ease_in_out_quart(t)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// A running scroll animation. Dropping the handle stops it.
pub struct SmoothScroll {
    clock: Rc<RefCell<Option<Interval>>>,
}

impl SmoothScroll {
    /// Lets the animation run to completion without an owner.
    pub fn detach(self) {
        std::mem::forget(self);
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        self.clock.borrow_mut().take();
    }
}

/// Smoothly scrolls the window so that the element with id `anchor` is at the top.
pub fn scroll_to_anchor(anchor: &str, duration_ms: u32) -> Option<SmoothScroll> {
    let window = web_sys::window()?;
    let target = match window.document()?.get_element_by_id(anchor) {
        Some(target) => target,
        None => {
            gloo_console::warn!(format!("No element with id `{}` to scroll to", anchor));
            return None;
        }
    };

    let scroll_x = window.scroll_x().unwrap_or(0.0);
    let from = window.scroll_y().unwrap_or(0.0);
    let animation = ScrollAnimation::new(from, from + target.get_bounding_client_rect().top(), duration_ms);
    let started = Date::now();
    log::debug!("Smooth scroll to #{} ({} -> {})", anchor, from, animation.to);

    let clock: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let stopper = clock.clone();
    let interval = Interval::new(FRAME_MS, move || {
        let elapsed = Date::now() - started;
        window.scroll_to_with_x_and_y(scroll_x, animation.position_at(elapsed));
        if animation.is_finished(elapsed) {
            let stopper = stopper.clone();
            Timeout::new(0, move || {
                stopper.borrow_mut().take();
            })
            .forget();
        }
    });
    *clock.borrow_mut() = Some(interval);

    Some(SmoothScroll { clock })
}

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    pub to: AttrValue,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page link that glides to its anchor instead of jumping.
#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let running = use_mut_ref(|| None::<SmoothScroll>);

    {
        let running = running.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    running.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onclick = {
        let running = running.clone();
        let to = props.to.clone();
        let duration = props.duration;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            *running.borrow_mut() = scroll_to_anchor(&to, duration);
        })
    };

    html! {
        <a href={format!("#{}", props.to)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_ends_and_the_midpoint() {
        assert_eq!(ease_in_out_quart(0.0), 0.0);
        assert_eq!(ease_in_out_quart(1.0), 1.0);
        assert!((ease_in_out_quart(0.5) - 0.5).abs() < 1e-9);
        assert!(ease_in_out_quart(0.25) < 0.25);
        assert!(ease_in_out_quart(0.75) > 0.75);
    }

    #[test]
    fn easing_is_clamped() {
        assert_eq!(ease_in_out_quart(-1.0), 0.0);
        assert_eq!(ease_in_out_quart(3.0), 1.0);
    }

    #[test]
    fn animation_lands_on_target() {
        let animation = ScrollAnimation::new(100.0, 1100.0, 500);
        assert_eq!(animation.position_at(0.0), 100.0);
        assert!((animation.position_at(250.0) - 600.0).abs() < 1e-9);
        assert_eq!(animation.position_at(500.0), 1100.0);
        assert_eq!(animation.position_at(900.0), 1100.0);
        assert!(!animation.is_finished(499.0));
        assert!(animation.is_finished(500.0));
    }

    #[test]
    fn scrolling_up_works_too() {
        let animation = ScrollAnimation::new(2000.0, 0.0, 500);
        let quarter = animation.position_at(125.0);
        assert!(quarter < 2000.0 && quarter > 1000.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let animation = ScrollAnimation::new(0.0, 400.0, 0);
        assert_eq!(animation.position_at(0.0), 400.0);
        assert!(animation.is_finished(0.0));
    }
}
