use yew::prelude::*;

use crate::layout::footer::Footer;
use crate::layout::nav::Nav;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="site-shell">
            <style>
                {r#"
                    .site-shell {
                        display: flex;
                        flex-direction: column;
                        min-height: 100vh;
                        background: #000;
                        color: #fff;
                    }
                    .site-main {
                        flex-grow: 1;
                        padding-top: 6rem;
                        animation: mainFadeIn 0.5s ease both;
                    }
                    @keyframes mainFadeIn { from { opacity: 0; } to { opacity: 1; } }
                "#}
            </style>
            <Nav />
            <main class="site-main">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
