use yew::prelude::*;

use crate::particles::{floating_elements, FloatingElement};

pub fn default_colors() -> Vec<String> {
    ["#8B5CF6", "#3B82F6", "#10B981", "#F59E0B", "#EF4444"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct FloatingElementsProps {
    #[prop_or(15)]
    pub count: usize,
    #[prop_or(10.0)]
    pub min_size: f64,
    #[prop_or(40.0)]
    pub max_size: f64,
    #[prop_or_else(default_colors)]
    pub colors: Vec<String>,
    #[prop_or_default]
    pub class: Classes,
}

fn element_style(e: &FloatingElement) -> String {
    let [(x1, y1), (x2, y2), (x3, y3)] = e.drift();
    format!(
        "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; background-color: {}; \
         --x1: {}px; --y1: {}px; --x2: {}px; --y2: {}px; --x3: {}px; --y3: {}px; \
         animation-duration: {:.1}s; animation-delay: {:.1}s;",
        e.x, e.y, e.size, e.size, e.color, x1, y1, x2, y2, x3, y3, e.duration, e.delay
    )
}

#[function_component(FloatingElements)]
pub fn floating_elements_view(props: &FloatingElementsProps) -> Html {
    let elements = use_memo(
        |(count, min, max, colors)| {
            let (lo, hi) = if min <= max { (*min, *max) } else { (*max, *min) };
            floating_elements(&mut rand::thread_rng(), *count, lo..hi, colors)
        },
        (props.count, props.min_size, props.max_size, props.colors.clone()),
    );

    html! {
        <div class={classes!("floating-elements", props.class.clone())}>
            <style>
                {r#"
                    .floating-elements {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    @keyframes floatDrift {
                        0% { transform: translate(0, 0) scale(1); opacity: 0.2; }
                        25% { transform: translate(var(--x1), var(--y1)) scale(1.1); opacity: 0.3; }
                        50% { transform: translate(var(--x2), var(--y2)) scale(0.9); opacity: 0.2; }
                        75% { transform: translate(var(--x3), var(--y3)) scale(1.2); opacity: 0.5; }
                        100% { transform: translate(0, 0) scale(1); opacity: 0.2; }
                    }
                    .floating-element {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0.2;
                        animation-name: floatDrift;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                        animation-direction: alternate;
                    }
                "#}
            </style>
            { for elements.iter().map(|e| html! { <div class="floating-element" style={element_style(e)} /> }) }
        </div>
    }
}
