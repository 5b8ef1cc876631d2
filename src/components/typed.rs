use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// The first `count` characters of `text`, counted in chars so accents
/// are never split.
pub fn revealed(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

#[derive(Properties, PartialEq)]
pub struct TypedHeadingProps {
    #[prop_or(AttrValue::from(config::TYPED_TEXT))]
    pub text: AttrValue,
    #[prop_or(config::TYPED_CHAR_DELAY_MS)]
    pub delay_ms: u32,
}

/// Types `text` out one character at a time, once.
#[function_component(TypedHeading)]
pub fn typed_heading(props: &TypedHeadingProps) -> Html {
    let count = use_state(|| 0usize);
    let total = props.text.chars().count();

    {
        let setter = count.setter();
        let delay = props.delay_ms;
        use_effect_with_deps(
            move |count| {
                let count = **count;
                let timeout = (count < total).then(|| Timeout::new(delay, move || setter.set(count + 1)));
                move || drop(timeout)
            },
            count.clone(),
        );
    }

    html! {
        <h1 class="hero-title">
            <span id="typed-text">{revealed(&props.text, *count)}</span>
            <span class="cursor">{"|"}</span>
        </h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_in_order() {
        let text = config::TYPED_TEXT;
        let total = text.chars().count();
        let mut previous = String::new();
        for count in 1..=total {
            let shown = revealed(text, count);
            assert!(shown.starts_with(&previous));
            assert_eq!(shown.chars().count(), count);
            previous = shown;
        }
        assert_eq!(previous, text);
    }

    #[test]
    fn keeps_multibyte_characters_whole() {
        assert_eq!(revealed("não é", 3), "não");
        assert_eq!(revealed("é", 5), "é");
        assert_eq!(revealed("abc", 0), "");
    }
}
