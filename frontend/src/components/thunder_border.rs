use std::fmt::Write;

use gloo_timers::callback::Interval;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

const STEP_PX: usize = 20;
const AMPLITUDE_PX: f64 = 10.0;
const WAVELENGTH: f64 = 30.0;
const FRAME_MS: u32 = 16;

fn wobble(along: f64, offset: f64) -> f64 {
    ((along + offset) / WAVELENGTH).sin() * AMPLITUDE_PX
}

/// SVG path tracing the box edges clockwise with a sine ripple whose phase
/// moves with `offset`.
pub fn lightning_path(width: f64, height: f64, offset: f64) -> String {
    let mut d = format!("M 0 {}", height / 2.0);
    let w = width.max(0.0) as usize;
    let h = height.max(0.0) as usize;

    for x in (0..=w).step_by(STEP_PX) {
        let x = x as f64;
        let _ = write!(d, " L {} {}", x, wobble(x, offset));
    }
    for y in (0..=h).step_by(STEP_PX) {
        let y = y as f64;
        let _ = write!(d, " L {} {}", width + wobble(y, offset), y);
    }
    for x in (0..=w).rev().step_by(STEP_PX) {
        let x = x as f64;
        let _ = write!(d, " L {} {}", x, height + wobble(x, offset));
    }
    for y in (0..=h).rev().step_by(STEP_PX) {
        let y = y as f64;
        let _ = write!(d, " L {} {}", wobble(y, offset), y);
    }
    d
}

#[derive(Properties, PartialEq)]
pub struct ThunderBorderProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("#8a2be2"))]
    pub color: AttrValue,
    #[prop_or(3)]
    pub thickness: u32,
    /// Phase advance per frame.
    #[prop_or(0.5)]
    pub speed: f64,
}

#[function_component(ThunderBorder)]
pub fn thunder_border(props: &ThunderBorderProps) -> Html {
    let container = use_node_ref();
    let path = use_node_ref();

    {
        let container = container.clone();
        let path = path.clone();
        use_effect_with_deps(
            move |speed| {
                let speed = *speed;
                let mut offset = 0.0;
                // The path is written straight to the DOM so a frame does not re-render.
                let interval = Interval::new(FRAME_MS, move || {
                    let (Some(container), Some(path)) =
                        (container.cast::<HtmlElement>(), path.cast::<Element>())
                    else {
                        return;
                    };
                    offset += speed;
                    let d = lightning_path(
                        container.offset_width() as f64,
                        container.offset_height() as f64,
                        offset,
                    );
                    let _ = path.set_attribute("d", &d);
                });
                move || drop(interval)
            },
            props.speed,
        );
    }

    html! {
        <div ref={container} class={classes!("thunder-border", props.class.clone())}>
            <style>
                {r#"
                    .thunder-border { position: relative; animation: thunderIn 0.5s ease both; }
                    @keyframes thunderIn { from { opacity: 0; } to { opacity: 1; } }
                    .thunder-border > svg {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                        overflow: visible;
                    }
                    .thunder-border > .thunder-content { position: relative; z-index: 1; }
                "#}
            </style>
            <svg width="100%" height="100%">
                <path
                    ref={path}
                    fill="none"
                    stroke={props.color.clone()}
                    stroke-width={props.thickness.to_string()}
                    style={format!("filter: drop-shadow(0 0 8px {});", props.color)}
                />
            </svg>
            <div class="thunder-content">{ for props.children.iter() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_walks_all_four_edges() {
        let d = lightning_path(40.0, 20.0, 0.0);
        assert!(d.starts_with("M 0 10"));
        // top 3, right 2, bottom 3, left 2
        assert_eq!(d.matches(" L ").count(), 10);
    }

    #[test]
    fn ripple_stays_within_amplitude() {
        let d = lightning_path(200.0, 100.0, 7.5);
        let coords: Vec<f64> = d
            .split_whitespace()
            .filter_map(|t| t.parse::<f64>().ok())
            .collect();
        assert!(coords.iter().all(|c| *c >= -AMPLITUDE_PX && *c <= 200.0 + AMPLITUDE_PX));
    }

    #[test]
    fn empty_box_still_yields_a_path() {
        let d = lightning_path(0.0, 0.0, 0.0);
        assert_eq!(d.matches(" L ").count(), 4);
    }
}
