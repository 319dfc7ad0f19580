use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Step timings in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTiming {
    pub type_speed: u32,
    pub back_speed: u32,
    pub back_delay: u32,
    pub looped: bool,
    /// Only erase back to the prefix shared with the next string.
    pub smart_backspace: bool,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self {
            type_speed: 50,
            back_speed: 30,
            back_delay: 2000,
            looped: true,
            smart_backspace: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Erasing,
    Done,
}

/// Types, holds and erases a list of strings, one character per step.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    strings: Rc<Vec<Vec<char>>>,
    timing: TypingTiming,
    index: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(strings: &[String], timing: TypingTiming) -> Self {
        let strings: Vec<Vec<char>> = strings.iter().map(|s| s.chars().collect()).collect();
        let phase = if strings.is_empty() {
            Phase::Done
        } else {
            Phase::Typing
        };
        Self {
            strings: Rc::new(strings),
            timing,
            index: 0,
            visible: 0,
            phase,
        }
    }

    pub fn text(&self) -> String {
        self.current().iter().take(self.visible).collect()
    }

    /// Milliseconds until the next step, `None` once finished.
    pub fn next_delay(&self) -> Option<u32> {
        match self.phase {
            Phase::Typing => Some(self.timing.type_speed),
            Phase::Holding => Some(self.timing.back_delay),
            Phase::Erasing => Some(self.timing.back_speed),
            Phase::Done => None,
        }
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn advance(&mut self) {
        match self.phase {
            Phase::Typing => {
                let len = self.current().len();
                if self.visible < len {
                    self.visible += 1;
                }
                if self.visible >= len {
                    let last = self.index + 1 == self.strings.len();
                    self.phase = if last && !self.timing.looped {
                        Phase::Done
                    } else {
                        Phase::Holding
                    };
                }
            }
            Phase::Holding | Phase::Erasing => self.erase_one(),
            Phase::Done => {}
        }
    }

    fn erase_one(&mut self) {
        let floor = self.erase_floor();
        if self.visible > floor {
            self.visible -= 1;
        }
        if self.visible <= floor {
            self.index = self.next_index();
            self.phase = Phase::Typing;
        } else {
            self.phase = Phase::Erasing;
        }
    }

    fn current(&self) -> &[char] {
        self.strings
            .get(self.index)
            .map(|s| s.as_slice())
            .unwrap_or(&[])
    }

    fn next_index(&self) -> usize {
        (self.index + 1) % self.strings.len().max(1)
    }

    fn erase_floor(&self) -> usize {
        let next = self.next_index();
        if !self.timing.smart_backspace || next == self.index {
            return 0;
        }
        self.current()
            .iter()
            .zip(self.strings[next].iter())
            .take_while(|(a, b)| a == b)
            .count()
    }
}

#[derive(Properties, PartialEq)]
pub struct TypedTextProps {
    pub strings: Vec<String>,
    #[prop_or_default]
    pub timing: TypingTiming,
    #[prop_or_default]
    pub class: Classes,
}

/// Cycles `strings` with a typing effect and a blinking cursor.
#[function_component(TypedText)]
pub fn typed_text(props: &TypedTextProps) -> Html {
    let machine = use_state_eq(|| Typewriter::new(&props.strings, props.timing));

    {
        let machine = machine.clone();
        use_effect_with_deps(
            move |(strings, timing): &(Vec<String>, TypingTiming)| {
                machine.set(Typewriter::new(strings, *timing));
                || ()
            },
            (props.strings.clone(), props.timing),
        );
    }

    // One pending step at a time; re-armed whenever the machine moves.
    {
        let handle = machine.clone();
        use_effect_with_deps(
            move |current: &Typewriter| {
                let pending = current.next_delay().map(|delay| {
                    let mut next = current.clone();
                    Timeout::new(delay, move || {
                        next.advance();
                        handle.set(next);
                    })
                });
                move || drop(pending)
            },
            (*machine).clone(),
        );
    }

    html! {
        <span class={classes!("typed-text", props.class.clone())}>
            { machine.text() }
            <span class="typed-cursor" aria-hidden="true">{"|"}</span>
        </span>
    }
}
