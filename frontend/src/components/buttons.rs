use yew::prelude::*;

use crate::cursor::interactive::use_interactive_target;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[allow(dead_code)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[allow(dead_code)]
pub enum Gradient {
    #[default]
    PurpleBlue,
    BlueTeal,
    OrangeRed,
    GreenBlue,
    /// Raw CSS background, e.g. `linear-gradient(...)`.
    Custom(String),
}

impl Gradient {
    pub fn background(&self) -> String {
        match self {
            Gradient::PurpleBlue => "linear-gradient(to right, #9333ea, #3b82f6)".to_string(),
            Gradient::BlueTeal => "linear-gradient(to right, #3b82f6, #2dd4bf)".to_string(),
            Gradient::OrangeRed => "linear-gradient(to right, #f97316, #ef4444)".to_string(),
            Gradient::GreenBlue => "linear-gradient(to right, #22c55e, #3b82f6)".to_string(),
            Gradient::Custom(css) if !css.trim().is_empty() => css.clone(),
            Gradient::Custom(_) => Gradient::PurpleBlue.background(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[allow(dead_code)]
pub enum Rounded {
    Sm,
    #[default]
    Md,
    Lg,
    Full,
}

impl Rounded {
    fn class(self) -> &'static str {
        match self {
            Rounded::Sm => "rounded-sm",
            Rounded::Md => "rounded-md",
            Rounded::Lg => "rounded-lg",
            Rounded::Full => "rounded-full",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[allow(dead_code)]
pub enum HoverEffect {
    Scale,
    Glow,
    #[default]
    Both,
    None,
}

impl HoverEffect {
    pub fn scales(self) -> bool {
        matches!(self, HoverEffect::Scale | HoverEffect::Glow | HoverEffect::Both)
    }

    pub fn glows(self) -> bool {
        matches!(self, HoverEffect::Glow | HoverEffect::Both)
    }
}

const BUTTON_CSS: &str = r#"
    .btn-wrap { position: relative; display: inline-block; transition: transform 0.3s ease; }
    .btn-wrap.scales:hover { transform: scale(1.05); }
    .btn-wrap.tap:active { transform: scale(0.95); }
    .btn {
        position: relative;
        z-index: 10;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        width: 100%;
        color: #fff;
        font-weight: 500;
        text-decoration: none;
        border: none;
        transition: background-color 0.3s ease, border-color 0.3s ease;
    }
    .btn-sm { font-size: 0.875rem; padding: 0.5rem 1rem; }
    .btn-md { font-size: 1rem; padding: 0.75rem 1.5rem; }
    .btn-lg { font-size: 1.125rem; padding: 1rem 2rem; }
    .rounded-sm { border-radius: 0.25rem; }
    .rounded-md { border-radius: 0.375rem; }
    .rounded-lg { border-radius: 0.5rem; }
    .rounded-full { border-radius: 9999px; }
    .btn-glow {
        position: absolute;
        inset: 0;
        z-index: -1;
        opacity: 0;
        filter: blur(24px);
        transition: opacity 0.3s ease, transform 0.3s ease;
    }
    .btn-wrap:hover .btn-glow { opacity: 0.7; transform: scale(1.15); }
    .btn-primary { background: #7c3aed; }
    .btn-primary:hover { background: rgba(124, 58, 237, 0.9); }
    .btn-secondary { background: #1a1a1a; }
    .btn-secondary:hover { background: rgba(26, 26, 26, 0.8); }
    .btn-outline { background: transparent; border: 1px solid rgba(255, 255, 255, 0.2); }
    .btn-outline:hover { background: rgba(255, 255, 255, 0.1); }
    .btn-aura { background: linear-gradient(to right, #a855f7, #3b82f6, #14b8a6); }
"#;

fn render_control(
    href: &Option<String>,
    onclick: &Option<Callback<MouseEvent>>,
    class: Classes,
    style: Option<String>,
    children: &Children,
) -> Html {
    match href {
        Some(href) => html! {
            <a href={href.clone()} class={class} style={style} onclick={onclick.clone()}>
                { for children.iter() }
            </a>
        },
        None => html! {
            <button class={class} style={style} onclick={onclick.clone()}>
                { for children.iter() }
            </button>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct GradientButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub gradient: Gradient,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub href: Option<String>,
    #[prop_or_default]
    pub rounded: Rounded,
    #[prop_or_default]
    pub hover_effect: HoverEffect,
}

#[function_component(GradientButton)]
pub fn gradient_button(props: &GradientButtonProps) -> Html {
    let hover = use_interactive_target();
    let background = format!("background: {};", props.gradient.background());
    let wrap = classes!("btn-wrap", props.hover_effect.scales().then(|| "scales"));
    let control = classes!(
        "btn",
        props.size.class(),
        props.rounded.class(),
        props.class.clone()
    );

    html! {
        <div class={wrap} onmouseenter={hover.onmouseenter} onmouseleave={hover.onmouseleave}>
            <style>{BUTTON_CSS}</style>
            { render_control(&props.href, &props.onclick, control, Some(background.clone()), &props.children) }
            if props.hover_effect.glows() {
                <div class={classes!("btn-glow", props.rounded.class())} style={background}></div>
            }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[allow(dead_code)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub href: Option<String>,
}

#[function_component(AnimatedButton)]
pub fn animated_button(props: &AnimatedButtonProps) -> Html {
    let hover = use_interactive_target();
    let control = classes!(
        "btn",
        "rounded-lg",
        props.variant.class(),
        props.size.class(),
        props.class.clone()
    );

    html! {
        <div class="btn-wrap scales tap" onmouseenter={hover.onmouseenter} onmouseleave={hover.onmouseleave}>
            <style>{BUTTON_CSS}</style>
            { render_control(&props.href, &props.onclick, control, None, &props.children) }
            <div class="btn-glow btn-aura rounded-lg"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_gradient_falls_back_when_blank() {
        assert_eq!(
            Gradient::Custom("  ".into()).background(),
            Gradient::PurpleBlue.background()
        );
        assert_eq!(
            Gradient::Custom("red".into()).background(),
            "red".to_string()
        );
    }

    #[test]
    fn hover_effects() {
        assert!(HoverEffect::Both.glows() && HoverEffect::Both.scales());
        assert!(HoverEffect::Scale.scales() && !HoverEffect::Scale.glows());
        assert!(!HoverEffect::None.scales() && !HoverEffect::None.glows());
    }

    #[test]
    fn size_and_rounding_classes() {
        assert_eq!(ButtonSize::default().class(), "btn-md");
        assert_eq!(ButtonSize::Lg.class(), "btn-lg");
        assert_eq!(Rounded::Full.class(), "rounded-full");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
    }
}
