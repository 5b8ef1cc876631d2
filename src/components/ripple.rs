use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;

/// Size and position of a ripple inside the clicked button, in px
/// relative to the button's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn from_click(rect_left: f64, rect_top: f64, width: f64, height: f64, client_x: f64, client_y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: client_x - rect_left - size / 2.0,
            top: client_y - rect_top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {}px; top: {}px;",
            self.left,
            self.top,
            size = self.size
        )
    }
}

fn spawn_ripple(button: &HtmlElement, e: &MouseEvent) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let rect = button.get_bounding_client_rect();
    let geometry = RippleGeometry::from_click(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        e.client_x() as f64,
        e.client_y() as f64,
    );
    ripple.set_class_name("ripple");
    let _ = ripple.set_attribute("style", &geometry.style());
    if button.append_child(&ripple).is_ok() {
        Timeout::new(config::RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

/// A `.btn` that drops a short-lived `span.ripple` where it was clicked.
#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let button_ref = use_node_ref();

    let onclick = {
        let button_ref = button_ref.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(button) = button_ref.cast::<HtmlElement>() {
                spawn_ripple(&button, &e);
            }
            if let Some(onclick) = &onclick {
                onclick.emit(e);
            }
        })
    };

    html! {
        <button ref={button_ref} type="button" class={classes!("btn", props.class.clone())} {onclick}>
            { for props.children.iter() }
        </button>
    }
}
