use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Contact fields of a lead form. Nothing leaves the browser.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LeadCapture {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

/// What replaces a submitted form.
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub name: String,
    pub download_href: String,
}

impl Confirmation {
    pub fn new(lead: LeadCapture, download_href: String) -> Self {
        Self {
            name: lead.name,
            download_href,
        }
    }

    pub fn greeting(&self) -> String {
        format!("Obrigado, {}! Seu cadastro foi realizado com sucesso.", self.name)
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    /// Prefix for the input ids, e.g. `roi` gives `roi-name`.
    pub id_prefix: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::from("Enviar"))]
    pub submit_label: AttrValue,
    pub on_submit: Callback<LeadCapture>,
}

fn read_input(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let whatsapp_ref = use_node_ref();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let whatsapp_ref = whatsapp_ref.clone();
        let on_submit = props.on_submit.clone();
        let prefix = props.id_prefix.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let lead = LeadCapture {
                name: read_input(&name_ref),
                email: read_input(&email_ref),
                whatsapp: read_input(&whatsapp_ref),
            };
            debug!("{} form submitted", prefix);
            on_submit.emit(lead);
        })
    };

    let field_id = |field: &str| format!("{}-{}", props.id_prefix, field);

    html! {
        <form id={props.id.clone()} class={props.class.clone()} {onsubmit}>
            <input ref={name_ref} id={field_id("name")} name="name" type="text" placeholder="Seu nome" required={true} />
            <input ref={email_ref} id={field_id("email")} name="email" type="email" placeholder="Seu e-mail" required={true} />
            <input ref={whatsapp_ref} id={field_id("whatsapp")} name="whatsapp" type="tel" placeholder="WhatsApp" />
            <button type="submit" class="btn btn-primary">{props.submit_label.clone()}</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct DownloadLinkProps {
    pub href: AttrValue,
}

#[function_component(EbookDownloadLink)]
pub fn ebook_download_link(props: &DownloadLinkProps) -> Html {
    html! {
        <a href={props.href.clone()} download="" class="btn btn-primary" style="margin-top:1rem;">
            {"Baixar e‑book"}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_keeps_name_and_link() {
        let lead = LeadCapture {
            name: "Carla".to_string(),
            email: "carla@example.com".to_string(),
            whatsapp: String::new(),
        };
        let confirmation = Confirmation::new(lead, "../assets/ebook/guide.pdf".to_string());
        assert_eq!(confirmation.download_href, "../assets/ebook/guide.pdf");
        assert_eq!(
            confirmation.greeting(),
            "Obrigado, Carla! Seu cadastro foi realizado com sucesso."
        );
    }
}
