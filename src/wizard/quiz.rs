//! Digital-maturity quiz: two questions, a classification, a contact form.

use log::info;
use yew::prelude::*;

use crate::components::lead_form::{EbookDownloadLink, LeadForm, LeadCapture};
use crate::components::ripple::RippleButton;
use crate::download;
use crate::wizard::engine::{StepKind, Wizard, WizardAction, WizardFlow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompanySize {
    Small,
    Medium,
    Large,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Goal {
    Leads,
    Automation,
    Branding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaturityLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl MaturityLevel {
    pub fn label(self) -> &'static str {
        match self {
            MaturityLevel::Beginner => "Iniciante",
            MaturityLevel::Intermediate => "Intermediário",
            MaturityLevel::Advanced => "Avançado",
        }
    }
}

/// First matching rule wins. Only large+automation counts as advanced.
pub fn classify(size: CompanySize, goal: Goal) -> MaturityLevel {
    if size == CompanySize::Large && goal == Goal::Automation {
        MaturityLevel::Advanced
    } else if size == CompanySize::Medium || goal == Goal::Leads {
        MaturityLevel::Intermediate
    } else {
        MaturityLevel::Beginner
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizInput {
    Size(CompanySize),
    Goal(Goal),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct QuizAnswers {
    pub size: Option<CompanySize>,
    pub goal: Option<Goal>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct QuizFlow {
    // Highlighted options; copied into `answers` on "next".
    selected: QuizAnswers,
    answers: QuizAnswers,
    level: Option<MaturityLevel>,
}

impl QuizFlow {
    pub fn selected(&self) -> &QuizAnswers {
        &self.selected
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn level(&self) -> Option<MaturityLevel> {
        self.level
    }
}

const QUIZ_STEPS: [StepKind; 4] = [
    StepKind::Question,
    StepKind::Question,
    StepKind::Results,
    StepKind::ContactForm,
];

const RESULT_STEP: usize = 2;

impl WizardFlow for QuizFlow {
    type Input = QuizInput;

    fn name(&self) -> &'static str {
        "quiz"
    }

    fn steps(&self) -> &'static [StepKind] {
        &QUIZ_STEPS
    }

    fn on_open(&mut self) {
        *self = Self::default();
    }

    fn apply_input(&mut self, input: QuizInput) {
        match input {
            QuizInput::Size(size) => self.selected.size = Some(size),
            QuizInput::Goal(goal) => self.selected.goal = Some(goal),
        }
    }

    fn commit(&mut self, step: usize) -> bool {
        match step {
            0 => match self.selected.size {
                Some(size) => {
                    self.answers.size = Some(size);
                    true
                }
                None => false,
            },
            1 => match self.selected.goal {
                Some(goal) => {
                    self.answers.goal = Some(goal);
                    true
                }
                None => false,
            },
            _ => true,
        }
    }

    fn prepare(&mut self, entering: usize) {
        if entering == RESULT_STEP {
            if let (Some(size), Some(goal)) = (self.answers.size, self.answers.goal) {
                self.level = Some(classify(size, goal));
            }
        }
    }
}

pub type QuizHandle = UseReducerHandle<Wizard<QuizFlow>>;

#[derive(Properties, PartialEq)]
pub struct QuizProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the quiz state and renders its overlay; [`QuizTrigger`]s inside
/// reach it through the context.
#[function_component(QuizProvider)]
pub fn quiz_provider(props: &QuizProviderProps) -> Html {
    let quiz = use_reducer(|| Wizard::new(QuizFlow::default()));

    html! {
        <ContextProvider<QuizHandle> context={quiz}>
            { for props.children.iter() }
            <QuizOverlay />
        </ContextProvider<QuizHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct QuizTriggerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(QuizTrigger)]
pub fn quiz_trigger(props: &QuizTriggerProps) -> Html {
    let quiz = use_context::<QuizHandle>();
    let Some(quiz) = quiz else {
        return html! {};
    };
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        quiz.dispatch(WizardAction::Open);
    });

    html! {
        <RippleButton class={classes!("open-quiz", props.class.clone())} {onclick}>
            { for props.children.iter() }
        </RippleButton>
    }
}

pub fn step_style(quiz: &Wizard<QuizFlow>, step: usize) -> &'static str {
    if quiz.is_current(step) { "display: block;" } else { "display: none;" }
}

#[function_component(QuizOverlay)]
fn quiz_overlay() -> Html {
    let quiz = use_context::<QuizHandle>();
    let Some(quiz) = quiz else {
        return html! {};
    };

    let dispatch = |action: fn() -> WizardAction<QuizInput>| {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| quiz.dispatch(action()))
    };
    let select = |input: QuizInput| {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| quiz.dispatch(WizardAction::Input(input)))
    };
    let on_submit = {
        let quiz = quiz.clone();
        Callback::from(move |lead: LeadCapture| {
            info!("Quiz lead captured");
            quiz.dispatch(WizardAction::Submit {
                lead,
                download_href: download::current_ebook_path(),
            });
        })
    };

    let selected = quiz.flow().selected().clone();
    let size_option = |size: CompanySize, label: &'static str| {
        html! {
            <button type="button"
                class={classes!("quiz-option", (selected.size == Some(size)).then(|| "selected"))}
                onclick={select(QuizInput::Size(size))}>
                {label}
            </button>
        }
    };
    let goal_option = |goal: Goal, label: &'static str| {
        html! {
            <button type="button"
                class={classes!("quiz-option", (selected.goal == Some(goal)).then(|| "selected"))}
                onclick={select(QuizInput::Goal(goal))}>
                {label}
            </button>
        }
    };
    let nav = |first: bool| {
        html! {
            <div class="quiz-nav">
                if !first {
                    <button type="button" class="quiz-prev" onclick={dispatch(|| WizardAction::Previous)}>{"Voltar"}</button>
                }
                <button type="button" class="quiz-next" onclick={dispatch(|| WizardAction::Next)}>{"Próximo"}</button>
            </div>
        }
    };

    let overlay_style = if quiz.is_open() { "display: flex;" } else { "display: none;" };
    let level = quiz.flow().level().map(MaturityLevel::label).unwrap_or_default();
    let download_href = download::current_ebook_path();

    html! {
        <div id="quiz-overlay" class="quiz-overlay" style={overlay_style}>
            <div class="quiz-modal">
                <button type="button" class="quiz-close" aria-label="Fechar" onclick={dispatch(|| WizardAction::Close)}>{"×"}</button>

                <div class="quiz-step" style={step_style(&quiz, 0)}>
                    <h3>{"Qual o tamanho da sua empresa?"}</h3>
                    <div class="quiz-options">
                        { size_option(CompanySize::Small, "Pequena") }
                        { size_option(CompanySize::Medium, "Média") }
                        { size_option(CompanySize::Large, "Grande") }
                    </div>
                    { nav(true) }
                </div>

                <div class="quiz-step" style={step_style(&quiz, 1)}>
                    <h3>{"Qual é o seu principal objetivo?"}</h3>
                    <div class="quiz-options">
                        { goal_option(Goal::Leads, "Gerar mais leads") }
                        { goal_option(Goal::Automation, "Automatizar processos") }
                        { goal_option(Goal::Branding, "Fortalecer a marca") }
                    </div>
                    { nav(false) }
                </div>

                <div class="quiz-step" style={step_style(&quiz, 2)}>
                    <p class="quiz-result">
                        {"Seu nível de maturidade digital é "}<strong>{level}</strong>
                        {". Nossa equipe está pronta para ajudar você a evoluir."}
                    </p>
                    { nav(false) }
                </div>

                <div class="quiz-step" style={step_style(&quiz, 3)}>
                    if quiz.confirmation().is_none() {
                        <>
                        <h3>{"Receba seu diagnóstico completo"}</h3>
                        <LeadForm id_prefix="quiz" class={classes!("quiz-form")} submit_label="Quero meu diagnóstico" {on_submit} />
                        <div class="quiz-nav">
                            <button type="button" class="quiz-prev" onclick={dispatch(|| WizardAction::Previous)}>{"Voltar"}</button>
                        </div>
                        </>
                    } else {
                        <div id="quiz-thank-you" class="quiz-thanks" style="display: block;">
                            <p>{"Obrigado! Em breve entraremos em contato."}</p>
                            <p>{"Enquanto isso, baixe nosso guia exclusivo de marketing digital."}</p>
                            <EbookDownloadLink href={download_href} />
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
