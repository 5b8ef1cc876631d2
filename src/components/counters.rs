//! Statistic counters that count up from zero the first time their
//! section scrolls into view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::scroll::section_in_view;
use crate::config;

/// A label such as `120+`, `99%` or `3.8x`, split into its number and
/// the text around it.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterLabel {
    pub original: String,
    pub magnitude: f64,
    pub suffix: String,
    pub decimal: bool,
}

impl CounterLabel {
    pub fn parse(text: &str) -> Self {
        let run: String = text
            .chars()
            .skip_while(|c| !is_numeric_char(*c))
            .take_while(|c| is_numeric_char(*c))
            .collect();
        Self {
            original: text.to_string(),
            magnitude: leading_number(&run),
            suffix: text.chars().filter(|c| !is_numeric_char(*c)).collect(),
            decimal: text.contains('.'),
        }
    }

    pub fn render(&self, value: f64) -> String {
        if self.decimal {
            format!("{:.1}{}", value, self.suffix)
        } else {
            format!("{}{}", value.floor(), self.suffix)
        }
    }
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

// Longest prefix that parses, so "1.2.3" reads as 1.2.
fn leading_number(run: &str) -> f64 {
    let mut dots = 0;
    let end = run
        .char_indices()
        .find(|(_, c)| {
            if *c == '.' {
                dots += 1;
            }
            dots > 1
        })
        .map(|(i, _)| i)
        .unwrap_or(run.len());
    run[..end].parse().unwrap_or(0.0)
}

#[derive(Clone, Debug, PartialEq)]
pub enum CounterFrame {
    Running(String),
    Finished(String),
}

/// Fixed-frame interpolation from 0 to the label's magnitude.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    label: CounterLabel,
    current: f64,
    increment: f64,
}

impl CounterAnimation {
    pub fn new(label: CounterLabel, frames: u32) -> Self {
        let increment = label.magnitude / f64::from(frames.max(1));
        Self {
            label,
            current: 0.0,
            increment,
        }
    }

    pub fn next_frame(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.label.magnitude {
            CounterFrame::Running(self.label.render(self.current))
        } else {
            // The exact original text, never a rounded value.
            CounterFrame::Finished(self.label.original.clone())
        }
    }
}

type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type PendingFrame = Rc<Cell<Option<i32>>>;

fn request_frame(frame_loop: &FrameLoop, pending: &PendingFrame) {
    if let (Some(window), Some(callback)) = (web_sys::window(), frame_loop.borrow().as_ref()) {
        pending.set(window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
    }
}

// The browser must not call back into a closure that is about to be dropped.
fn cancel_pending(pending: &PendingFrame, cancel: impl FnOnce(i32)) {
    if let Some(id) = pending.take() {
        cancel(id);
    }
}

fn cancel_frame(pending: &PendingFrame) {
    cancel_pending(pending, |id| {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub label: AttrValue,
    pub caption: AttrValue,
    pub active: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let text = use_state(|| props.label.to_string());

    {
        let setter = text.setter();
        use_effect_with_deps(
            move |(active, label): &(bool, AttrValue)| {
                let frame_loop: FrameLoop = Rc::new(RefCell::new(None));
                let pending: PendingFrame = Rc::new(Cell::new(None));
                if *active {
                    let mut animation = CounterAnimation::new(CounterLabel::parse(label), config::COUNTER_FRAMES);
                    let next = frame_loop.clone();
                    let next_pending = pending.clone();
                    *frame_loop.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        next_pending.set(None);
                        match animation.next_frame() {
                            CounterFrame::Running(shown) => {
                                setter.set(shown);
                                request_frame(&next, &next_pending);
                            }
                            CounterFrame::Finished(shown) => setter.set(shown),
                        }
                    }) as Box<dyn FnMut()>));
                    request_frame(&frame_loop, &pending);
                }
                move || {
                    cancel_frame(&pending);
                    frame_loop.borrow_mut().take();
                }
            },
            (props.active, props.label.clone()),
        );
    }

    html! {
        <li>
            <strong>{(*text).clone()}</strong>
            <span>{props.caption.clone()}</span>
        </li>
    }
}

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub label: AttrValue,
    pub caption: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct ServiceStatsProps {
    pub stats: Vec<Stat>,
}

/// The `.service-stats` strip. Counting starts once, the first time the
/// strip enters the viewport.
#[function_component(ServiceStats)]
pub fn service_stats(props: &ServiceStatsProps) -> Html {
    let section = use_node_ref();
    let started = use_mut_ref(|| false);
    let active = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    {
        let section = section.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                if !*started.borrow() {
                    let in_view = section.cast::<Element>().and_then(|el| {
                        let height = web_sys::window()?.inner_height().ok()?.as_f64()?;
                        let rect = el.get_bounding_client_rect();
                        Some(section_in_view(rect.top(), rect.bottom(), height))
                    });
                    if in_view == Some(true) {
                        *started.borrow_mut() = true;
                        debug!("Stats in view, starting counters");
                        active.set(true);
                    }
                }
                || ()
            },
            scroll_y as i64,
        );
    }

    html! {
        <ul class="service-stats" ref={section}>
            { for props.stats.iter().map(|stat| html! {
                <StatCounter label={stat.label.clone()} caption={stat.caption.clone()} active={*active} />
            }) }
        </ul>
    }
}
