use log::info;
use yew::prelude::*;

use crate::components::lead_form::{Confirmation, EbookDownloadLink, LeadCapture, LeadForm};
use crate::download;

/// Newsletter signup. A submit swaps the form for a thank-you note with
/// the e-book link.
#[function_component(Newsletter)]
pub fn newsletter() -> Html {
    let confirmation = use_state(|| None::<Confirmation>);

    let on_submit = {
        let confirmation = confirmation.clone();
        Callback::from(move |lead: LeadCapture| {
            info!("Newsletter signup captured");
            confirmation.set(Some(Confirmation::new(lead, download::current_ebook_path())));
        })
    };

    html! {
        <section class="newsletter">
            <h2>{"Receba conteúdos exclusivos"}</h2>
            <p>{"Estratégias práticas de marketing digital direto no seu e-mail."}</p>
            if let Some(confirmation) = &*confirmation {
                <div class="success-message">
                    <p>{confirmation.greeting()}</p>
                    <p>{"Agora você pode baixar o nosso guia exclusivo de marketing digital."}</p>
                    <EbookDownloadLink href={confirmation.download_href.clone()} />
                </div>
            } else {
                <LeadForm id="newsletter-form" id_prefix="newsletter" submit_label="Quero receber" {on_submit} />
            }
        </section>
    }
}
