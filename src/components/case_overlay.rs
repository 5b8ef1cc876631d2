use log::debug;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CaseStudy {
    pub id: AttrValue,
    pub client: AttrValue,
    pub quote: AttrValue,
    pub details: Vec<AttrValue>,
}

/// The content block for `case_id` is shown only while its own case is open.
pub fn case_visible(open: Option<&str>, case_id: &str) -> bool {
    open == Some(case_id)
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub cases: Vec<CaseStudy>,
}

/// Testimonial cards plus the `#case-overlay` modal they open.
#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let open_case = use_state(|| None::<AttrValue>);

    let open = |id: AttrValue| {
        let open_case = open_case.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Opening case {}", id);
            open_case.set(Some(id.clone()));
        })
    };
    let close = {
        let open_case = open_case.clone();
        Callback::from(move |_: MouseEvent| open_case.set(None))
    };

    let shown = (*open_case).as_deref();
    let overlay_style = if shown.is_some() { "display: flex;" } else { "display: none;" };

    html! {
        <section class="testimonials">
            <h2>{"Resultados de quem confia na M2"}</h2>
            <div class="testimonial-grid">
                { for props.cases.iter().map(|case| html! {
                    <div class="testimonial-card" data-case={case.id.clone()} onclick={open(case.id.clone())}>
                        <p class="testimonial-quote">{case.quote.clone()}</p>
                        <span class="testimonial-client">{case.client.clone()}</span>
                    </div>
                }) }
            </div>

            <div id="case-overlay" class="case-overlay" style={overlay_style}>
                <div class="case-modal">
                    <button type="button" class="case-close" aria-label="Fechar" onclick={close}>{"×"}</button>
                    { for props.cases.iter().map(|case| {
                        let style = if case_visible(shown, &case.id) { "display: block;" } else { "display: none;" };
                        html! {
                            <div class="case-content" data-case={case.id.clone()} {style}>
                                <h3>{case.client.clone()}</h3>
                                { for case.details.iter().map(|line| html! { <p>{line.clone()}</p> }) }
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_matching_case_is_visible() {
        assert!(case_visible(Some("clinica"), "clinica"));
        assert!(!case_visible(Some("clinica"), "varejo"));
        assert!(!case_visible(None, "clinica"));
    }
}
