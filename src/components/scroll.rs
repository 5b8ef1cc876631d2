use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD
}

/// True once the bottom of the viewport passes 60% of the document.
pub fn sticky_bar_visible(scroll_y: f64, viewport_height: f64, document_height: f64) -> bool {
    scroll_y + viewport_height > document_height * config::STICKY_BAR_TRIGGER_RATIO
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * config::PARALLAX_SPEED
}

/// Vertical overlap of a bounding rect with the viewport.
pub fn section_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom >= 0.0
}

fn viewport_and_document_height() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let body = window.document()?.body()?;
    Some((viewport, f64::from(body.scroll_height())))
}

#[derive(Properties, PartialEq)]
pub struct StickyCtaBarProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(StickyCtaBar)]
pub fn sticky_cta_bar(props: &StickyCtaBarProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let show = viewport_and_document_height()
        .map(|(viewport, document)| sticky_bar_visible(scroll_y, viewport, document))
        .unwrap_or(false);

    html! {
        <div class={classes!("sticky-cta-bar", show.then(|| "show"))}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

/// Article hero image that trails the scroll for depth.
#[function_component(ParallaxImage)]
pub fn parallax_image(props: &ParallaxImageProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let style = format!("transform: translateY({}px);", parallax_offset(scroll_y));

    html! {
        <div class="article-image">
            <img src={props.src.clone()} alt={props.alt.clone()} {style} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(50.0));
        assert!(header_scrolled(50.5));
    }

    #[test]
    fn sticky_bar_after_sixty_percent() {
        // 600 + 400 = 1000 vs 0.6 * 2000 = 1200
        assert!(!sticky_bar_visible(600.0, 400.0, 2000.0));
        assert!(!sticky_bar_visible(800.0, 400.0, 2000.0));
        assert!(sticky_bar_visible(801.0, 400.0, 2000.0));
        // Short pages show it straight away.
        assert!(sticky_bar_visible(0.0, 900.0, 1000.0));
    }

    #[test]
    fn parallax_moves_at_a_fifth_of_scroll() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(500.0), 100.0);
    }

    #[test]
    fn section_visibility() {
        assert!(section_in_view(100.0, 400.0, 800.0));
        assert!(section_in_view(-300.0, 0.0, 800.0));
        assert!(!section_in_view(800.0, 1200.0, 800.0));
        assert!(!section_in_view(-500.0, -1.0, 800.0));
    }
}
