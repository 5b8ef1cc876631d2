use web_sys::Element;
use yew::prelude::*;

use crate::config;

/// CSS transform for a pointer at (`x`, `y`) measured from the card's
/// centre. `None` for a card with no area.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> Option<String> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let rotate_x = (y / height) * -config::TILT_STRENGTH_DEG;
    let rotate_y = (x / width) * config::TILT_STRENGTH_DEG;
    Some(format!("rotateX({}deg) rotateY({}deg)", degrees(rotate_x), degrees(rotate_y)))
}

/// Pointer position relative to the centre of a card whose rect starts
/// at (`left`, `top`).
pub fn centre_offset(left: f64, top: f64, width: f64, height: f64, client_x: f64, client_y: f64) -> (f64, f64) {
    (client_x - left - width / 2.0, client_y - top - height / 2.0)
}

// No "-0deg" at the centre line.
fn degrees(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let card_ref = use_node_ref();
    let transform = use_state(|| None::<String>);

    let onmousemove = {
        let card_ref = card_ref.clone();
        let transform = transform.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = card_ref.cast::<Element>() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            let (x, y) = centre_offset(
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
                f64::from(e.client_x()),
                f64::from(e.client_y()),
            );
            transform.set(tilt_transform(x, y, rect.width(), rect.height()));
        })
    };
    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| transform.set(None))
    };

    let style = (*transform)
        .as_ref()
        .map(|t| format!("transform: {};", t))
        .unwrap_or_default();

    html! {
        <div ref={card_ref} class={classes!("bento-item", props.class.clone())} {style} {onmousemove} {onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}
