//! Step-gated wizard shared by the quiz and the ROI calculator.
//!
//! A [`Wizard`] owns a cursor into a fixed list of steps and delegates
//! validation and derived content to its [`WizardFlow`]. It implements
//! [`Reducible`], so a page holds one with `use_reducer` and hands the
//! handle to its triggers through a context.

use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::components::lead_form::{Confirmation, LeadCapture};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    /// Needs input before "next" is allowed.
    Question,
    /// Computed display, never blocks.
    Results,
    /// Terminal step. Only a submit ends it.
    ContactForm,
}

/// What makes one wizard different from another.
pub trait WizardFlow: Clone + PartialEq {
    /// Flow-specific input, e.g. an option click or a typed field.
    type Input: 'static;

    fn name(&self) -> &'static str;

    fn steps(&self) -> &'static [StepKind];

    /// Called every time the overlay opens, after the cursor is reset.
    fn on_open(&mut self) {}

    fn apply_input(&mut self, input: Self::Input);

    /// Validates and stores the answers of the question step at `step`.
    /// Returning false keeps the wizard where it is.
    fn commit(&mut self, step: usize) -> bool;

    /// Computes whatever the step about to be shown displays.
    fn prepare(&mut self, _entering: usize) {}
}

pub enum WizardAction<I> {
    Open,
    Close,
    Input(I),
    Previous,
    Next,
    Submit {
        lead: LeadCapture,
        download_href: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wizard<F> {
    flow: F,
    cursor: usize,
    open: bool,
    confirmation: Option<Confirmation>,
}

impl<F: WizardFlow> Wizard<F> {
    pub fn new(flow: F) -> Self {
        Self {
            flow,
            cursor: 0,
            open: false,
            confirmation: None,
        }
    }

    pub fn flow(&self) -> &F {
        &self.flow
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_current(&self, step: usize) -> bool {
        self.cursor == step
    }

    pub fn current_kind(&self) -> StepKind {
        self.flow.steps()[self.cursor]
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn apply(&mut self, action: WizardAction<F::Input>) {
        match action {
            WizardAction::Open => {
                self.open = true;
                self.cursor = 0;
                self.flow.on_open();
                debug!("{} opened", self.flow.name());
            }
            WizardAction::Close => {
                self.open = false;
                debug!("{} closed at step {}", self.flow.name(), self.cursor);
            }
            WizardAction::Input(input) => self.flow.apply_input(input),
            WizardAction::Previous => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            WizardAction::Next => self.advance(),
            WizardAction::Submit { lead, download_href } => {
                if self.current_kind() != StepKind::ContactForm || self.confirmation.is_some() {
                    return;
                }
                debug!("{} lead captured", self.flow.name());
                self.confirmation = Some(Confirmation::new(lead, download_href));
            }
        }
    }

    fn advance(&mut self) {
        match self.current_kind() {
            StepKind::ContactForm => return,
            StepKind::Question => {
                if !self.flow.commit(self.cursor) {
                    return;
                }
            }
            StepKind::Results => {}
        }
        let next = self.cursor + 1;
        if next < self.flow.steps().len() {
            self.flow.prepare(next);
            self.cursor = next;
            debug!("{} moved to step {}", self.flow.name(), next);
        }
    }
}

impl<F: WizardFlow + 'static> Reducible for Wizard<F> {
    type Action = WizardAction<F::Input>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two gated questions, a result and a form; counts prepare calls.
    #[derive(Clone, Debug, PartialEq, Default)]
    struct Sample {
        ready: [bool; 2],
        prepared: Vec<usize>,
        opened: u32,
    }

    impl WizardFlow for Sample {
        type Input = usize;

        fn name(&self) -> &'static str {
            "sample"
        }

        fn steps(&self) -> &'static [StepKind] {
            &[
                StepKind::Question,
                StepKind::Question,
                StepKind::Results,
                StepKind::ContactForm,
            ]
        }

        fn on_open(&mut self) {
            self.opened += 1;
        }

        fn apply_input(&mut self, step: usize) {
            self.ready[step] = true;
        }

        fn commit(&mut self, step: usize) -> bool {
            self.ready[step]
        }

        fn prepare(&mut self, entering: usize) {
            self.prepared.push(entering);
        }
    }

    fn lead(name: &str) -> LeadCapture {
        LeadCapture {
            name: name.to_string(),
            email: "ana@example.com".to_string(),
            whatsapp: "11999990000".to_string(),
        }
    }

    fn opened() -> Wizard<Sample> {
        let mut wizard = Wizard::new(Sample::default());
        wizard.apply(WizardAction::Open);
        wizard
    }

    #[test]
    fn open_shows_first_step() {
        let wizard = opened();
        assert!(wizard.is_open());
        assert_eq!(wizard.cursor(), 0);
        assert!(wizard.is_current(0));
        assert!(!wizard.is_current(1));
        assert_eq!(wizard.flow().opened, 1);
    }

    #[test]
    fn next_without_input_is_a_no_op() {
        let mut wizard = opened();
        wizard.apply(WizardAction::Next);
        assert_eq!(wizard.cursor(), 0);
        assert!(wizard.flow().prepared.is_empty());
    }

    #[test]
    fn previous_at_first_step_stays_put() {
        let mut wizard = opened();
        wizard.apply(WizardAction::Previous);
        assert_eq!(wizard.cursor(), 0);
    }

    #[test]
    fn walks_forward_and_back() {
        let mut wizard = opened();
        wizard.apply(WizardAction::Input(0));
        wizard.apply(WizardAction::Next);
        assert_eq!(wizard.cursor(), 1);

        wizard.apply(WizardAction::Next);
        assert_eq!(wizard.cursor(), 1, "second question still unanswered");

        wizard.apply(WizardAction::Input(1));
        wizard.apply(WizardAction::Next);
        assert_eq!(wizard.cursor(), 2);
        assert_eq!(wizard.current_kind(), StepKind::Results);

        wizard.apply(WizardAction::Next);
        assert_eq!(wizard.cursor(), 3);
        assert_eq!(wizard.flow().prepared, vec![1, 2, 3]);

        wizard.apply(WizardAction::Next);
        assert_eq!(wizard.cursor(), 3, "form step only ends on submit");

        wizard.apply(WizardAction::Previous);
        assert_eq!(wizard.cursor(), 2);
    }

    #[test]
    fn close_keeps_state_and_open_resets_cursor() {
        let mut wizard = opened();
        wizard.apply(WizardAction::Input(0));
        wizard.apply(WizardAction::Next);
        wizard.apply(WizardAction::Close);
        assert!(!wizard.is_open());
        assert_eq!(wizard.cursor(), 1);

        wizard.apply(WizardAction::Open);
        assert_eq!(wizard.cursor(), 0);
        assert_eq!(wizard.flow().opened, 2);
    }

    #[test]
    fn submit_only_counts_on_form_step() {
        let mut wizard = opened();
        wizard.apply(WizardAction::Submit {
            lead: lead("Ana"),
            download_href: "assets/ebook/x.pdf".to_string(),
        });
        assert!(wizard.confirmation().is_none());

        wizard.apply(WizardAction::Input(0));
        wizard.apply(WizardAction::Input(1));
        for _ in 0..3 {
            wizard.apply(WizardAction::Next);
        }
        wizard.apply(WizardAction::Submit {
            lead: lead("Ana"),
            download_href: "assets/ebook/x.pdf".to_string(),
        });
        let confirmation = wizard.confirmation().expect("confirmed");
        assert_eq!(confirmation.name, "Ana");
        assert_eq!(confirmation.download_href, "assets/ebook/x.pdf");

        wizard.apply(WizardAction::Submit {
            lead: lead("Bia"),
            download_href: "other".to_string(),
        });
        assert_eq!(wizard.confirmation().map(|c| c.name.as_str()), Some("Ana"));
    }

    #[test]
    fn reducer_returns_a_new_state() {
        let wizard = Rc::new(Wizard::new(Sample::default()));
        let next = wizard.clone().reduce(WizardAction::Open);
        assert!(!wizard.is_open());
        assert!(next.is_open());
    }

    #[test]
    fn exactly_one_step_is_current_after_every_action() {
        let mut wizard = Wizard::new(Sample::default());
        let actions = vec![
            WizardAction::Open,
            WizardAction::Next,
            WizardAction::Input(0),
            WizardAction::Next,
            WizardAction::Previous,
            WizardAction::Previous,
            WizardAction::Next,
            WizardAction::Input(1),
            WizardAction::Next,
            WizardAction::Next,
            WizardAction::Next,
            WizardAction::Submit {
                lead: lead("Ana"),
                download_href: "assets/ebook/x.pdf".to_string(),
            },
            WizardAction::Close,
            WizardAction::Open,
        ];
        for action in actions {
            wizard.apply(action);
            let current = (0..wizard.flow().steps().len())
                .filter(|step| wizard.is_current(*step))
                .count();
            assert_eq!(current, 1, "at cursor {}", wizard.cursor());
        }
        assert!(wizard.confirmation().is_some());
        assert_eq!(wizard.cursor(), 0);
    }
}
