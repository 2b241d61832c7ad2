use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::buttons::{AnimatedButton, ButtonSize, ButtonVariant};
use crate::config::NAV_SCROLL_THRESHOLD;
use crate::cursor::interactive::use_interactive_target;
use crate::Route;

pub const NAV_LINKS: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("Work", Route::Work),
    ("About", Route::About),
    ("Contact", Route::Contact),
];

#[derive(Properties, PartialEq)]
struct NavLinkProps {
    label: AttrValue,
    to: Route,
    active: bool,
    #[prop_or_default]
    mobile: bool,
}

#[function_component(NavLink)]
fn nav_link(props: &NavLinkProps) -> Html {
    let hover = use_interactive_target();
    let class = if props.mobile { "nav-mobile-link" } else { "nav-link" };

    html! {
        <span
            class={classes!(class, props.active.then(|| "active"))}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            <Link<Route> to={props.to.clone()}>
                {props.label.clone()}
            </Link<Route>>
            if props.active && !props.mobile {
                <span class="nav-indicator"></span>
            }
        </span>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;
    let route = use_route::<Route>();
    let burger_hover = use_interactive_target();

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = |mobile: bool| -> Html {
        NAV_LINKS
            .iter()
            .map(|(label, to)| {
                html! {
                    <NavLink
                        label={*label}
                        to={to.clone()}
                        active={route.as_ref() == Some(to)}
                        {mobile}
                    />
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(16px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo img { height: 3.5rem; animation: navIn 0.5s ease-out both; }
                    @keyframes navIn { from { opacity: 0; transform: translateX(-20px); } to { opacity: 1; transform: translateX(0); } }
                    .nav-right { display: flex; align-items: center; gap: 2rem; }
                    .nav-link { position: relative; font-size: 0.875rem; font-weight: 500; }
                    .nav-link a { color: rgba(255, 255, 255, 0.7); text-decoration: none; transition: color 0.3s; }
                    .nav-link a:hover, .nav-link.active a { color: #fff; }
                    .nav-indicator {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -0.25rem;
                        height: 2px;
                        background: linear-gradient(to right, #a855f7, #3b82f6);
                    }
                    .burger-menu { display: none; background: none; border: none; width: 1.5rem; height: 1.25rem; position: relative; }
                    .burger-menu span {
                        position: absolute;
                        left: 0;
                        width: 100%;
                        height: 2px;
                        background: #fff;
                        transition: all 0.3s ease;
                    }
                    .burger-menu span:nth-child(1) { top: 0; }
                    .burger-menu span:nth-child(2) { top: 50%; margin-top: -1px; }
                    .burger-menu span:nth-child(3) { top: 1rem; }
                    .burger-menu.open span:nth-child(1) { top: 0.5rem; transform: rotate(45deg); }
                    .burger-menu.open span:nth-child(2) { opacity: 0; transform: translateX(0.5rem); }
                    .burger-menu.open span:nth-child(3) { top: 0.5rem; transform: rotate(-45deg); }
                    .nav-mobile-menu {
                        display: none;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(16px);
                        animation: menuIn 0.3s ease-out both;
                    }
                    @keyframes menuIn { from { opacity: 0; transform: translateY(-10px); } to { opacity: 1; transform: translateY(0); } }
                    .nav-mobile-link a { display: block; padding: 0.5rem 0; color: rgba(255, 255, 255, 0.8); text-decoration: none; }
                    .nav-mobile-link.active a { color: #8b5cf6; }
                    @media (max-width: 767px) {
                        .nav-right { display: none; }
                        .burger-menu { display: block; }
                        .nav-mobile-menu { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/elite8digital-nav.png" alt="Elite8 Digital Logo" />
                </Link<Route>>

                <div class="nav-right">
                    { links(false) }
                    <AnimatedButton href="/contact" variant={ButtonVariant::Outline} size={ButtonSize::Sm}>
                        {"Get in Touch"}
                    </AnimatedButton>
                </div>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    onclick={toggle_menu}
                    onmouseenter={burger_hover.onmouseenter}
                    onmouseleave={burger_hover.onmouseleave}
                    aria-label="Toggle menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if *menu_open {
                <div class="nav-mobile-menu">
                    { links(true) }
                    <AnimatedButton href="/contact" variant={ButtonVariant::Outline} size={ButtonSize::Sm}>
                        {"Get in Touch"}
                    </AnimatedButton>
                </div>
            }
        </nav>
    }
}
