use gloo_events::EventListener;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::config::REVEAL_OFFSET_PX;

/// An element counts as revealed once its top edge has risen past the reveal
/// line near the bottom of the viewport.
pub fn crosses_reveal_line(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_OFFSET_PX
}

/// Tracks whether `node` has scrolled into view. With `once`, it stays
/// revealed after the first time.
#[hook]
pub fn use_scroll_reveal(node: NodeRef, once: bool) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, once)| {
                let once = *once;
                let node = node.clone();
                let check = move || {
                    // not attached yet: try again on the next scroll
                    let Some(element) = node.cast::<Element>() else {
                        return;
                    };
                    let Some(height) = window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                    else {
                        return;
                    };
                    let visible = crosses_reveal_line(element.get_bounding_client_rect().top(), height);
                    if visible {
                        revealed.set(true);
                    } else if !once {
                        revealed.set(false);
                    }
                };
                check();
                let listener = window().map(|w| EventListener::new(&w, "scroll", move |_| check()));
                move || drop(listener)
            },
            (node, once),
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds.
    #[prop_or(0.0)]
    pub delay: f64,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_scroll_reveal(node.clone(), true);

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then(|| "revealed"), props.class.clone())}
            style={format!("transition-delay: {}s;", props.delay)}
        >
            <style>
                {r#"
                    .reveal { opacity: 0; transform: translateY(20px); transition: opacity 0.5s ease, transform 0.5s ease; }
                    .reveal.revealed { opacity: 1; transform: translateY(0); }
                "#}
            </style>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_line_sits_above_viewport_bottom() {
        assert!(crosses_reveal_line(100.0, 800.0));
        assert!(crosses_reveal_line(649.0, 800.0));
        assert!(!crosses_reveal_line(650.0, 800.0));
        assert!(!crosses_reveal_line(900.0, 800.0));
    }
}
