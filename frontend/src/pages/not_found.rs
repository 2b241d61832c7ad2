use yew::prelude::*;

use crate::components::buttons::{Gradient, GradientButton};
use crate::components::glowing_text::{GlowSize, GlowingText};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        text-align: center;
                        padding: 4rem 1rem;
                    }
                    .not-found p { color: rgba(255, 255, 255, 0.7); font-size: 1.25rem; }
                "#}
            </style>
            <GlowingText text="404" size={GlowSize::Xxl} />
            <p>{"This page drifted off somewhere. Let's get you back."}</p>
            <GradientButton href="/" gradient={Gradient::PurpleBlue}>
                {"Back to Home"}
            </GradientButton>
        </section>
    }
}
