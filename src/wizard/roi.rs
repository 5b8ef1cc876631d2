//! ROI calculator: two input steps, a computed result, a contact form.

use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::lead_form::{EbookDownloadLink, LeadCapture, LeadForm};
use crate::components::ripple::RippleButton;
use crate::download;
use crate::wizard::engine::{StepKind, Wizard, WizardAction, WizardFlow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoiField {
    Leads,
    Investment,
    Conversion,
    Ticket,
}

impl RoiField {
    fn id(self) -> &'static str {
        match self {
            RoiField::Leads => "roi-leads",
            RoiField::Investment => "roi-invest",
            RoiField::Conversion => "roi-conversion",
            RoiField::Ticket => "roi-ticket",
        }
    }
}

/// Raw text of the four inputs, exactly as typed.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RoiInputs {
    pub leads: String,
    pub investment: String,
    pub conversion: String,
    pub ticket: String,
}

impl RoiInputs {
    pub fn get(&self, field: RoiField) -> &str {
        match field {
            RoiField::Leads => &self.leads,
            RoiField::Investment => &self.investment,
            RoiField::Conversion => &self.conversion,
            RoiField::Ticket => &self.ticket,
        }
    }

    fn set(&mut self, field: RoiField, value: String) {
        match field {
            RoiField::Leads => self.leads = value,
            RoiField::Investment => self.investment = value,
            RoiField::Conversion => self.conversion = value,
            RoiField::Ticket => self.ticket = value,
        }
    }

    fn filled(&self, fields: &[RoiField]) -> bool {
        fields.iter().all(|field| !self.get(*field).is_empty())
    }
}

/// Anything that does not parse counts as zero.
fn coerce(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiOutcome {
    pub revenue: f64,
    pub profit: f64,
    pub roi_percent: f64,
}

impl RoiOutcome {
    pub fn compute(leads: f64, investment: f64, conversion_percent: f64, ticket: f64) -> Self {
        let revenue = leads * (conversion_percent / 100.0) * ticket;
        let profit = revenue - investment;
        let roi_percent = if investment > 0.0 { profit / investment * 100.0 } else { 0.0 };
        Self {
            revenue,
            profit,
            roi_percent,
        }
    }

    pub fn from_inputs(inputs: &RoiInputs) -> Self {
        Self::compute(
            coerce(&inputs.leads),
            coerce(&inputs.investment),
            coerce(&inputs.conversion),
            coerce(&inputs.ticket),
        )
    }
}

// Half-way cases go away from zero, as the browser's number formatting does.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// pt-BR currency with two fraction digits, e.g. `R$ 12.345,60`.
/// Negative amounts that round to zero keep their sign: `R$ -0,00`.
pub fn format_brl(value: f64) -> String {
    let fixed = format!("{:.2}", round_to(value.abs(), 2));
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("R$ {}{},{}", sign, grouped, cents)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", round_to(value, 1))
}

/// The `.roi-nav` row goes away once the lead is captured.
pub fn nav_style(roi: &Wizard<RoiFlow>) -> &'static str {
    if roi.confirmation().is_some() { "display: none;" } else { "" }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RoiInput {
    Set(RoiField, String),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct RoiFlow {
    inputs: RoiInputs,
    outcome: Option<RoiOutcome>,
}

impl RoiFlow {
    pub fn inputs(&self) -> &RoiInputs {
        &self.inputs
    }

    pub fn outcome(&self) -> Option<RoiOutcome> {
        self.outcome
    }
}

const ROI_STEPS: [StepKind; 4] = [
    StepKind::Question,
    StepKind::Question,
    StepKind::Results,
    StepKind::ContactForm,
];

const RESULT_STEP: usize = 2;

impl WizardFlow for RoiFlow {
    type Input = RoiInput;

    fn name(&self) -> &'static str {
        "roi"
    }

    fn steps(&self) -> &'static [StepKind] {
        &ROI_STEPS
    }

    // Typed values survive close/open; only a reload clears them.

    fn apply_input(&mut self, input: RoiInput) {
        match input {
            RoiInput::Set(field, value) => self.inputs.set(field, value),
        }
    }

    fn commit(&mut self, step: usize) -> bool {
        match step {
            0 => self.inputs.filled(&[RoiField::Leads, RoiField::Investment]),
            1 => self.inputs.filled(&[RoiField::Conversion, RoiField::Ticket]),
            _ => true,
        }
    }

    fn prepare(&mut self, entering: usize) {
        if entering == RESULT_STEP {
            self.outcome = Some(RoiOutcome::from_inputs(&self.inputs));
        }
    }
}

pub type RoiHandle = UseReducerHandle<Wizard<RoiFlow>>;

#[derive(Properties, PartialEq)]
pub struct RoiProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RoiProvider)]
pub fn roi_provider(props: &RoiProviderProps) -> Html {
    let roi = use_reducer(|| Wizard::new(RoiFlow::default()));

    html! {
        <ContextProvider<RoiHandle> context={roi}>
            { for props.children.iter() }
            <RoiOverlay />
        </ContextProvider<RoiHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoiTriggerProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RoiTrigger)]
pub fn roi_trigger(props: &RoiTriggerProps) -> Html {
    let roi = use_context::<RoiHandle>();
    let Some(roi) = roi else {
        return html! {};
    };
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        roi.dispatch(WizardAction::Open);
    });

    html! {
        <RippleButton class={classes!("open-roi", props.class.clone())} {onclick}>
            { for props.children.iter() }
        </RippleButton>
    }
}

#[function_component(RoiOverlay)]
fn roi_overlay() -> Html {
    let roi = use_context::<RoiHandle>();
    let Some(roi) = roi else {
        return html! {};
    };

    let dispatch = |action: fn() -> WizardAction<RoiInput>| {
        let roi = roi.clone();
        Callback::from(move |_: MouseEvent| roi.dispatch(action()))
    };
    let field = |field: RoiField, label: &'static str, placeholder: &'static str| {
        let oninput = {
            let roi = roi.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                roi.dispatch(WizardAction::Input(RoiInput::Set(field, input.value())));
            })
        };
        html! {
            <label>
                {label}
                <input id={field.id()} type="number" min="0" step="any" placeholder={placeholder}
                    value={roi.flow().inputs().get(field).to_string()} {oninput} />
            </label>
        }
    };
    let on_submit = {
        let roi = roi.clone();
        Callback::from(move |lead: LeadCapture| {
            info!("ROI lead captured");
            roi.dispatch(WizardAction::Submit {
                lead,
                download_href: download::current_ebook_path(),
            });
        })
    };

    let step_class = |step: usize| classes!("roi-step", roi.is_current(step).then(|| "active"));
    let overlay_style = if roi.is_open() { "display: flex;" } else { "display: none;" };

    html! {
        <div id="roi-overlay" class="roi-overlay" style={overlay_style}>
            <div class="roi-modal">
                <button type="button" class="roi-close" aria-label="Fechar" onclick={dispatch(|| WizardAction::Close)}>{"×"}</button>

                <div class={step_class(0)}>
                    <h3>{"Quantos leads você gera por mês e quanto investe?"}</h3>
                    { field(RoiField::Leads, "Leads por mês", "100") }
                    { field(RoiField::Investment, "Investimento total (R$)", "1000") }
                </div>

                <div class={step_class(1)}>
                    <h3>{"Qual a sua taxa de conversão e o ticket médio?"}</h3>
                    { field(RoiField::Conversion, "Taxa de conversão (%)", "10") }
                    { field(RoiField::Ticket, "Ticket médio (R$)", "200") }
                </div>

                <div class={step_class(2)}>
                    <p class="roi-result">
                        if let Some(outcome) = roi.flow().outcome() {
                            <>
                            {"Receita esperada: "}<strong>{format_brl(outcome.revenue)}</strong><br />
                            {"Lucro: "}<strong>{format_brl(outcome.profit)}</strong><br />
                            {"ROI: "}<strong>{format_percent(outcome.roi_percent)}</strong>
                            </>
                        }
                    </p>
                </div>

                <div class={step_class(3)}>
                    if let Some(confirmation) = roi.confirmation() {
                        <div class="roi-success">
                            <p>{confirmation.greeting()}</p>
                            <p>{"Agora você pode baixar nosso guia exclusivo."}</p>
                            <EbookDownloadLink href={confirmation.download_href.clone()} />
                        </div>
                    } else {
                        <>
                            <h3>{"Receba uma análise personalizada"}</h3>
                            <LeadForm id_prefix="roi" class={classes!("roi-form")} submit_label="Quero minha análise" {on_submit} />
                        </>
                    }
                </div>

                <div class="roi-nav" style={nav_style(&roi)}>
                    <button type="button" class="roi-prev" onclick={dispatch(|| WizardAction::Previous)}>{"Voltar"}</button>
                    if roi.current_kind() != StepKind::ContactForm {
                        <button type="button" class="roi-next" onclick={dispatch(|| WizardAction::Next)}>{"Próximo"}</button>
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(roi: &mut Wizard<RoiFlow>, field: RoiField, value: &str) {
        roi.apply(WizardAction::Input(RoiInput::Set(field, value.to_string())));
    }

    fn opened() -> Wizard<RoiFlow> {
        let mut roi = Wizard::new(RoiFlow::default());
        roi.apply(WizardAction::Open);
        roi
    }

    #[test]
    fn computes_revenue_profit_and_roi() {
        let outcome = RoiOutcome::compute(100.0, 1000.0, 10.0, 200.0);
        assert_eq!(format_brl(outcome.revenue), "R$ 2.000,00");
        assert_eq!(format_brl(outcome.profit), "R$ 1.000,00");
        assert_eq!(format_percent(outcome.roi_percent), "100.0%");
    }

    #[test]
    fn zero_investment_gives_zero_roi() {
        let outcome = RoiOutcome::compute(100.0, 0.0, 10.0, 200.0);
        assert_eq!(outcome.roi_percent, 0.0);
        assert_eq!(outcome.profit, 2000.0);
    }

    #[test]
    fn non_numeric_text_counts_as_zero() {
        let inputs = RoiInputs {
            leads: "abc".to_string(),
            investment: "500".to_string(),
            conversion: "10".to_string(),
            ticket: "200".to_string(),
        };
        let outcome = RoiOutcome::from_inputs(&inputs);
        assert_eq!(outcome.revenue, 0.0);
        assert_eq!(outcome.profit, -500.0);
        assert_eq!(format_percent(outcome.roi_percent), "-100.0%");
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(999.5), "R$ 999,50");
        assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(-1500.0), "R$ -1.500,00");
        assert_eq!(format_brl(-0.001), "R$ -0,00");
    }

    #[test]
    fn half_way_values_round_up() {
        assert_eq!(format_brl(0.125), "R$ 0,13");
        assert_eq!(format_brl(-0.125), "R$ -0,13");
        assert_eq!(format_percent(0.25), "0.3%");
        assert_eq!(format_percent(-0.25), "-0.3%");
    }

    #[test]
    fn missing_fields_block_each_input_step() {
        let mut roi = opened();
        fill(&mut roi, RoiField::Leads, "100");
        roi.apply(WizardAction::Next);
        assert_eq!(roi.cursor(), 0);

        fill(&mut roi, RoiField::Investment, "1000");
        roi.apply(WizardAction::Next);
        assert_eq!(roi.cursor(), 1);

        fill(&mut roi, RoiField::Ticket, "200");
        roi.apply(WizardAction::Next);
        assert_eq!(roi.cursor(), 1);
        assert_eq!(roi.flow().outcome(), None);

        fill(&mut roi, RoiField::Conversion, "10");
        roi.apply(WizardAction::Next);
        assert_eq!(roi.cursor(), 2);
        let outcome = roi.flow().outcome().expect("computed on entering results");
        assert_eq!(outcome.revenue, 2000.0);
        assert_eq!(outcome.roi_percent, 100.0);
    }

    #[test]
    fn inputs_survive_close_and_reopen() {
        let mut roi = opened();
        fill(&mut roi, RoiField::Leads, "100");
        fill(&mut roi, RoiField::Investment, "1000");
        roi.apply(WizardAction::Next);
        roi.apply(WizardAction::Close);
        roi.apply(WizardAction::Open);

        assert_eq!(roi.cursor(), 0);
        assert_eq!(roi.flow().inputs().leads, "100");
        assert_eq!(roi.flow().inputs().investment, "1000");
    }

    #[test]
    fn submit_confirms_with_name() {
        let mut roi = opened();
        for (field, value) in [
            (RoiField::Leads, "100"),
            (RoiField::Investment, "1000"),
            (RoiField::Conversion, "10"),
            (RoiField::Ticket, "200"),
        ] {
            fill(&mut roi, field, value);
        }
        for _ in 0..3 {
            roi.apply(WizardAction::Next);
        }
        assert_eq!(roi.current_kind(), StepKind::ContactForm);

        roi.apply(WizardAction::Submit {
            lead: LeadCapture {
                name: "Rafael".to_string(),
                ..LeadCapture::default()
            },
            download_href: download::ebook_path("/"),
        });
        let confirmation = roi.confirmation().expect("confirmed");
        assert!(confirmation.greeting().contains("Rafael"));
        assert_eq!(confirmation.download_href, "assets/ebook/ebook-m2-ultimate.pdf");
    }

    #[test]
    fn nav_hidden_only_after_submit() {
        let mut roi = opened();
        assert_eq!(nav_style(&roi), "");
        for (field, value) in [
            (RoiField::Leads, "100"),
            (RoiField::Investment, "1000"),
            (RoiField::Conversion, "10"),
            (RoiField::Ticket, "200"),
        ] {
            fill(&mut roi, field, value);
        }
        for _ in 0..3 {
            roi.apply(WizardAction::Next);
        }
        assert_eq!(nav_style(&roi), "");

        roi.apply(WizardAction::Submit {
            lead: LeadCapture::default(),
            download_href: download::ebook_path("/"),
        });
        assert_eq!(nav_style(&roi), "display: none;");

        roi.apply(WizardAction::Close);
        roi.apply(WizardAction::Open);
        assert_eq!(roi.cursor(), 0);
        assert!(roi.confirmation().is_some());
        assert_eq!(nav_style(&roi), "display: none;");
    }
}
