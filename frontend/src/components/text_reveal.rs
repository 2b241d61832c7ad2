use yew::prelude::*;

use crate::components::reveal::use_scroll_reveal;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealAnimation {
    #[default]
    Fade,
    Slide,
    Scale,
    Typewriter,
}

impl RevealAnimation {
    fn keyframes(self) -> &'static str {
        match self {
            RevealAnimation::Fade => "revealFade",
            RevealAnimation::Slide | RevealAnimation::Typewriter => "revealSlide",
            RevealAnimation::Scale => "revealScale",
        }
    }
}

/// Words, or single characters for the typewriter. Word gaps become
/// non-breaking spaces so inline-block spans keep their spacing.
pub fn reveal_units(text: &str, animation: RevealAnimation) -> Vec<String> {
    match animation {
        RevealAnimation::Typewriter => text
            .chars()
            .map(|c| if c == ' ' { '\u{00A0}'.to_string() } else { c.to_string() })
            .collect(),
        _ => {
            let words: Vec<&str> = text.split(' ').collect();
            let last = words.len().saturating_sub(1);
            words
                .into_iter()
                .enumerate()
                .map(|(i, word)| if i < last { format!("{}\u{00A0}", word) } else { word.to_string() })
                .collect()
        }
    }
}

/// Typewriter runs faster and on its own stagger.
pub fn unit_timing(animation: RevealAnimation, duration: f64, stagger: f64) -> (f64, f64) {
    match animation {
        RevealAnimation::Typewriter => (0.2, 0.05),
        _ => (duration, stagger),
    }
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("white"))]
    pub color: AttrValue,
    #[prop_or_default]
    pub animation: RevealAnimation,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.5)]
    pub duration: f64,
    #[prop_or(0.03)]
    pub stagger: f64,
    #[prop_or(true)]
    pub once: bool,
}

#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_scroll_reveal(node.clone(), props.once);
    let (duration, stagger) = unit_timing(props.animation, props.duration, props.stagger);
    let units = reveal_units(&props.text, props.animation);

    html! {
        <div
            ref={node}
            class={classes!("text-reveal", props.class.clone())}
            style={format!("color: {};", props.color)}
        >
            <style>
                {r#"
                    .text-reveal { display: inline-block; }
                    .reveal-unit { display: inline-block; opacity: 0; }
                    @keyframes revealFade { from { opacity: 0; } to { opacity: 1; } }
                    @keyframes revealSlide { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
                    @keyframes revealScale { from { opacity: 0; transform: scale(0.8); } to { opacity: 1; transform: scale(1); } }
                "#}
            </style>
            {
                for units.into_iter().enumerate().map(|(i, unit)| {
                    let style = if visible {
                        format!(
                            "animation: {} {}s ease-out {}s forwards;",
                            props.animation.keyframes(),
                            duration,
                            props.delay + i as f64 * stagger
                        )
                    } else {
                        String::new()
                    };
                    html! { <span class="reveal-unit" style={style}>{unit}</span> }
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_keep_their_gaps() {
        let units = reveal_units("Crafting Digital Experiences", RevealAnimation::Slide);
        assert_eq!(units, vec!["Crafting\u{00A0}", "Digital\u{00A0}", "Experiences"]);
    }

    #[test]
    fn typewriter_splits_characters() {
        let units = reveal_units("Hi you", RevealAnimation::Typewriter);
        assert_eq!(units.len(), 6);
        assert_eq!(units[2], "\u{00A0}");
    }

    #[test]
    fn typewriter_overrides_timing() {
        assert_eq!(unit_timing(RevealAnimation::Typewriter, 1.0, 0.1), (0.2, 0.05));
        assert_eq!(unit_timing(RevealAnimation::Fade, 1.0, 0.1), (1.0, 0.1));
    }
}
