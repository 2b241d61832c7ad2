use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::cursor::interactive::use_interactive_target;
use crate::Route;

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Company",
        links: &[
            ("About", "/about"),
            ("Work", "/work"),
            ("Services", "/#services"),
            ("Contact", "/contact"),
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            ("Blog", "#"),
            ("Case Studies", "#"),
            ("Testimonials", "#"),
            ("FAQ", "#"),
        ],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            ("Privacy Policy", "#"),
            ("Terms of Service", "#"),
            ("Cookie Policy", "#"),
        ],
    },
];

/// (label, remixicon class)
pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Twitter", "ri-twitter-fill"),
    ("Instagram", "ri-instagram-fill"),
    ("LinkedIn", "ri-linkedin-fill"),
    ("GitHub", "ri-github-fill"),
];

#[derive(Properties, PartialEq)]
pub struct SocialIconProps {
    pub label: AttrValue,
    pub icon: AttrValue,
    #[prop_or(AttrValue::Static("#"))]
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

fn icon_classes(icon: &str) -> Classes {
    classes!(icon.to_string())
}

#[function_component(SocialIcon)]
pub fn social_icon(props: &SocialIconProps) -> Html {
    let hover = use_interactive_target();
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("social-icon", props.class.clone())}
            aria-label={props.label.clone()}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            <i class={icon_classes(&props.icon)}></i>
        </a>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { background: #000; border-top: 1px solid rgba(255, 255, 255, 0.1); }
                    .footer-content { max-width: 1280px; margin: 0 auto; padding: 4rem 1rem; }
                    .footer-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2.5rem; }
                    .footer-brand a { text-decoration: none; display: inline-block; margin-bottom: 1.5rem; }
                    .footer-brand .brand-accent {
                        font-size: 1.5rem;
                        font-weight: 700;
                        background: linear-gradient(to right, #a855f7, #3b82f6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .footer-brand .brand-plain { font-size: 1.5rem; font-weight: 700; color: #fff; }
                    .footer-brand p { color: rgba(255, 255, 255, 0.7); margin-bottom: 1.5rem; line-height: 1.6; }
                    .social-row { display: flex; gap: 1rem; }
                    .social-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        text-decoration: none;
                        transition: background-color 0.3s, transform 0.2s;
                    }
                    .social-icon:hover { background: #7c3aed; transform: scale(1.1); }
                    .social-icon:active { transform: scale(0.95); }
                    .footer-column h3 { color: #fff; font-size: 1.125rem; font-weight: 600; margin-bottom: 1.5rem; }
                    .footer-column ul { list-style: none; padding: 0; margin: 0; }
                    .footer-column li { margin-bottom: 1rem; }
                    .footer-column a { color: rgba(255, 255, 255, 0.7); text-decoration: none; transition: color 0.3s; }
                    .footer-column a:hover { color: #fff; }
                    .footer-bottom {
                        margin-top: 4rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .footer-bottom p { color: rgba(255, 255, 255, 0.5); font-size: 0.875rem; }
                    .footer-legal { display: flex; gap: 1.5rem; }
                    .footer-legal a { color: rgba(255, 255, 255, 0.5); font-size: 0.875rem; text-decoration: none; }
                    .footer-legal a:hover { color: #fff; }
                    @media (max-width: 1023px) { .footer-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (max-width: 767px) {
                        .footer-grid { grid-template-columns: 1fr; }
                        .footer-bottom { flex-direction: column; gap: 1rem; }
                    }
                "#}
            </style>
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Link<Route> to={Route::Home}>
                            <span class="brand-accent">{"ELITE8"}</span>
                            <span class="brand-plain">{"DIGITAL"}</span>
                        </Link<Route>>
                        <p>
                            {"Creating stunning digital experiences that captivate and convert. We blend creativity with technology to build remarkable websites."}
                        </p>
                        <div class="social-row">
                            { for SOCIAL_LINKS.iter().map(|(label, icon)| html! {
                                <SocialIcon label={*label} icon={*icon} />
                            }) }
                        </div>
                    </div>

                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div class="footer-column">
                            <h3>{column.title}</h3>
                            <ul>
                                { for column.links.iter().map(|(name, href)| html! {
                                    <li><a href={*href}>{*name}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} Elite8Digital. All rights reserved.", current_year)}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                        <a href="#">{"Cookie Policy"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_column_points_at_routed_pages() {
        let company = &FOOTER_COLUMNS[0];
        assert_eq!(company.title, "Company");
        for (name, href) in company.links.iter().filter(|(name, _)| *name != "Services") {
            let route = Route::recognize(href);
            assert!(
                matches!(route, Some(r) if r != Route::NotFound),
                "{} should link to a routed page",
                name
            );
        }
    }

    #[test]
    fn social_icons_render_their_icon_class() {
        for (label, icon) in SOCIAL_LINKS {
            let classes = icon_classes(&AttrValue::from(icon));
            assert!(classes.contains(icon), "{} icon missing its class", label);
        }
    }
}
