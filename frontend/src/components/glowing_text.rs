use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GlowSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
    Xxl,
}

impl GlowSize {
    fn font_size(self) -> &'static str {
        match self {
            GlowSize::Sm => "1.125rem",
            GlowSize::Md => "1.25rem",
            GlowSize::Lg => "1.875rem",
            GlowSize::Xl => "3rem",
            GlowSize::Xxl => "4.5rem",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GlowWeight {
    Normal,
    Medium,
    #[default]
    Bold,
}

impl GlowWeight {
    fn value(self) -> u16 {
        match self {
            GlowWeight::Normal => 400,
            GlowWeight::Medium => 500,
            GlowWeight::Bold => 700,
        }
    }
}

/// Pointer position relative to the element plus the glow radius.
pub fn glow_geometry(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64, f64) {
    (client_x - left, client_y - top, width.max(height) * 1.5)
}

#[derive(Properties, PartialEq)]
pub struct GlowingTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("rgba(120, 80, 255, 0.8)"))]
    pub glow_color: AttrValue,
    #[prop_or(AttrValue::Static("white"))]
    pub text_color: AttrValue,
    #[prop_or_default]
    pub size: GlowSize,
    #[prop_or_default]
    pub weight: GlowWeight,
}

#[function_component(GlowingText)]
pub fn glowing_text(props: &GlowingTextProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());

                let mouse_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let Some(element) = node.cast::<HtmlElement>() else {
                        return;
                    };
                    let rect = element.get_bounding_client_rect();
                    let (x, y, size) = glow_geometry(
                        e.client_x() as f64,
                        e.client_y() as f64,
                        rect.left(),
                        rect.top(),
                        rect.width(),
                        rect.height(),
                    );
                    let style = element.style();
                    let _ = style.set_property("--x", &format!("{}px", x));
                    let _ = style.set_property("--y", &format!("{}px", y));
                    let _ = style.set_property("--size", &format!("{}px", size));
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "mousemove",
                        mouse_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "mousemove",
                            mouse_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("glowing-text", props.class.clone())}
            style={format!(
                "--glow-color: {}; color: {}; font-size: {}; font-weight: {};",
                props.glow_color,
                props.text_color,
                props.size.font_size(),
                props.weight.value()
            )}
        >
            <style>
                {r#"
                    .glowing-text { position: relative; animation: glowIn 0.5s ease-out both; }
                    @keyframes glowIn { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
                    .glowing-text > span { position: relative; z-index: 10; }
                    .glowing-text .glow-layer {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                        overflow: hidden;
                        border-radius: 8px;
                        opacity: 0.7;
                        background: radial-gradient(circle var(--size, 0px) at var(--x, 50%) var(--y, 50%), var(--glow-color), transparent 80%);
                    }
                "#}
            </style>
            <span>{props.text.clone()}</span>
            <div class="glow-layer"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_follows_pointer_inside_element() {
        let (x, y, size) = glow_geometry(150.0, 80.0, 100.0, 50.0, 200.0, 40.0);
        assert_eq!((x, y), (50.0, 30.0));
        assert_eq!(size, 300.0);
    }
}
