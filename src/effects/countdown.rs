use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;

pub const TICK_MS: u32 = 1000;

/// Time left until a target, broken into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownState {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub completed: bool,
}

impl CountdownState {
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now >= target {
            return Self {
                completed: true,
                ..Self::default()
            };
        }
        let remaining = (target - now).num_seconds();
        Self {
            days: remaining / 86_400,
            hours: remaining % 86_400 / 3_600,
            minutes: remaining % 3_600 / 60,
            seconds: remaining % 60,
            completed: false,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub date: DateTime<Utc>,
    pub renderer: Callback<CountdownState, Html>,
}

/// Ticks once a second until `date`, rendering through `renderer`.
#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let state = use_state_eq(|| CountdownState::until(props.date, Utc::now()));

    {
        let state = state.clone();
        let completed = state.completed;
        use_effect_with_deps(
            move |(date, completed): &(DateTime<Utc>, bool)| {
                let date = *date;
                state.set(CountdownState::until(date, Utc::now()));
                let interval = if *completed {
                    None
                } else {
                    Some(Interval::new(TICK_MS, move || {
                        let next = CountdownState::until(date, Utc::now());
                        if next.completed {
                            log::info!("Countdown reached {}", date);
                        }
                        state.set(next);
                    }))
                };
                move || drop(interval)
            },
            (props.date, completed),
        );
    }

    props.renderer.emit(*state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    #[test]
    fn breaks_remaining_time_into_units() {
        let target = now()
            + Duration::days(3)
            + Duration::hours(4)
            + Duration::minutes(5)
            + Duration::seconds(6);
        assert_eq!(
            CountdownState::until(target, now()),
            CountdownState {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6,
                completed: false,
            }
        );
    }

    #[test]
    fn thirty_days_out_by_default() {
        let state = CountdownState::until(now() + Duration::days(30), now());
        assert_eq!(state.days, 30);
        assert_eq!((state.hours, state.minutes, state.seconds), (0, 0, 0));
        assert!(!state.completed);
    }

    #[test]
    fn reaching_the_target_completes() {
        let state = CountdownState::until(now(), now());
        assert!(state.completed);
        assert_eq!((state.days, state.hours, state.minutes, state.seconds), (0, 0, 0, 0));
    }

    #[test]
    fn past_targets_stay_completed() {
        let state = CountdownState::until(now() - Duration::days(2), now());
        assert!(state.completed);
        assert_eq!(state.days, 0);
    }

    #[test]
    fn sub_second_remainder_is_still_pending() {
        let state = CountdownState::until(now() + Duration::milliseconds(400), now());
        assert!(!state.completed);
        assert_eq!((state.days, state.hours, state.minutes, state.seconds), (0, 0, 0, 0));
    }
}
