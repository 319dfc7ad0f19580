use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// How far a region has scrolled past the top of the viewport.
///
/// 0 while its top edge is at or below the viewport top, 1 once its bottom
/// edge has reached the viewport top.
pub fn scroll_progress(top: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    (-top / height).clamp(0.0, 1.0)
}

/// Samples the scroll progress of `container` on every scroll and resize.
#[hook]
pub fn use_scroll_progress(container: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |container: &NodeRef| {
                let container = container.clone();
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let sample = move || {
                        if let Some(element) = container.cast::<Element>() {
                            let rect = element.get_bounding_client_rect();
                            progress.set(scroll_progress(rect.top(), rect.height()));
                        }
                    };
                    sample();

                    let callback = Closure::<dyn Fn()>::new(sample);
                    for event in ["scroll", "resize"] {
                        if let Err(e) = window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                        {
                            gloo_console::warn!("Failed to listen for", event, e);
                        }
                    }

                    Box::new(move || {
                        for event in ["scroll", "resize"] {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            container,
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_until_the_top_passes_the_viewport() {
        assert_eq!(scroll_progress(0.0, 900.0), 0.0);
        assert_eq!(scroll_progress(250.0, 900.0), 0.0);
    }

    #[test]
    fn proportional_while_traversing() {
        assert!((scroll_progress(-225.0, 900.0) - 0.25).abs() < 1e-9);
        assert!((scroll_progress(-450.0, 900.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn one_once_the_bottom_passes() {
        assert_eq!(scroll_progress(-900.0, 900.0), 1.0);
        assert_eq!(scroll_progress(-4000.0, 900.0), 1.0);
    }

    #[test]
    fn collapsed_region_jumps() {
        assert_eq!(scroll_progress(10.0, 0.0), 0.0);
        assert_eq!(scroll_progress(-10.0, 0.0), 1.0);
    }
}
