use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::cursor::interactive::use_interactive_target;
use crate::Route;

struct Stat {
    value: &'static str,
    label: &'static str,
    description: &'static str,
}

const STATS: [Stat; 4] = [
    Stat {
        value: "30+",
        label: "Projects Completed",
        description: "Successful projects delivered to clients worldwide.",
    },
    Stat {
        value: "5+",
        label: "Team Members",
        description: "Talented designers, developers, and strategists.",
    },
    Stat {
        value: "5+",
        label: "Years of Experience",
        description: "Creating exceptional digital experiences.",
    },
    Stat {
        value: "10+",
        label: "Happy Clients",
        description: "Trusted by businesses around the world.",
    },
];

/// (name, role, bio)
const TEAM: [(&str, &str, &str); 3] = [
    (
        "Alex Morgan",
        "Founder & Creative Director",
        "With over 10 years of experience in design and development, Alex leads our creative vision and ensures every project exceeds expectations.",
    ),
    (
        "Sarah Chen",
        "Lead UX/UI Designer",
        "Sarah combines aesthetic sensibility with user-centered design principles to create intuitive and engaging digital experiences.",
    ),
    (
        "David Rodriguez",
        "Technical Director",
        "David oversees our development team and ensures our technical solutions are robust, scalable, and cutting-edge.",
    ),
];

const VALUES: [(&str, &str); 4] = [
    ("Innovation", "We embrace new technologies and methodologies to push the boundaries of what's possible in digital design and development."),
    ("Excellence", "We strive for excellence in everything we do, from the smallest detail to the overall user experience."),
    ("Collaboration", "We believe in the power of collaboration, both within our team and with our clients, to create exceptional results."),
    ("User-Centered", "We put users at the center of our design process, creating experiences that are intuitive, engaging, and effective."),
];

const STORY: [&str; 5] = [
    "Every great digital product starts with a spark: an idea, a dream, a \u{201c}what if?\u{201d} At Elite8 Digital, that spark is what drives us.",
    "We started with a simple belief: technology should feel human. It should empower, inspire, and create real impact. What began as a small group of passionate minds, united by creativity and code, has now evolved into a full-service digital agency helping brands, colleges, and startups build the future they envision.",
    "We saw how many institutions struggled with outdated platforms, clunky designs, or websites that couldn\u{2019}t keep up with their growth. So we stepped in, not just to build software, but to build trust, transform experiences, and scale ideas.",
    "From beautifully designed websites and responsive mobile apps to robust platforms used by 1 lakh+ users, we craft digital solutions that are not just functional. They\u{2019}re unforgettable.",
    "Our story is still being written. Every project we take on is another chapter, another chance to innovate, and another opportunity to create something that makes people say: \u{201c}Wow. That\u{2019}s Elite.\u{201d}",
];

/// Monogram shown in place of a portrait.
pub fn initial(name: &str) -> String {
    name.chars()
        .find(|c| !c.is_whitespace())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[function_component(JoinLink)]
fn join_link() -> Html {
    let hover = use_interactive_target();
    html! {
        <span class="join-link" onmouseenter={hover.onmouseenter} onmouseleave={hover.onmouseleave}>
            <Link<Route> to={Route::Contact}>{"Get in Touch"}</Link<Route>>
        </span>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <style>
                {r#"
                    .about-page section { position: relative; overflow: hidden; padding: 6rem 0; }
                    .about-page .container { max-width: 1280px; margin: 0 auto; padding: 0 1rem; position: relative; z-index: 10; }
                    .about-page .alt { background: #0a0a0a; }
                    .about-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at center, rgba(255, 255, 255, 0.1) 0, rgba(0, 0, 0, 0) 70%);
                    }
                    .about-header { max-width: 48rem; margin: 0 auto; text-align: center; }
                    .about-header h1 { font-size: 4.5rem; font-weight: 700; letter-spacing: -0.025em; margin-bottom: 1.5rem; }
                    .about-header p, .about-page .muted { color: #9ca3af; font-size: 1.25rem; }
                    .text-gradient {
                        background: linear-gradient(to right, #a855f7, #3b82f6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .story-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
                    .story-grid h2, .about-page .section-title h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .story-grid p { color: #9ca3af; margin-bottom: 1rem; line-height: 1.7; }
                    .story-art { position: relative; aspect-ratio: 1; border-radius: 1rem; overflow: hidden; background: #111; }
                    .story-art::before {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom right, rgba(168, 85, 247, 0.2), rgba(59, 130, 246, 0.2), rgba(16, 185, 129, 0.2));
                    }
                    .story-art img { width: 100%; height: 100%; object-fit: cover; }
                    .about-page .section-title { text-align: center; margin-bottom: 4rem; }
                    .about-page .section-title p { max-width: 48rem; margin: 0 auto; }
                    .panel {
                        padding: 2rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.2);
                        backdrop-filter: blur(4px);
                        height: 100%;
                    }
                    .stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                    .stat { text-align: center; }
                    .stat .value { font-size: 3.75rem; font-weight: 700; color: #7c3aed; margin-bottom: 0.5rem; }
                    .stat h3 { font-size: 1.25rem; font-weight: 500; margin-bottom: 0.75rem; }
                    .stat p, .value-card p, .member p.bio { color: #9ca3af; }
                    .values-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                    .value-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                    .team-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .member { background: #0a0a0a; border-radius: 0.5rem; overflow: hidden; }
                    .member-portrait {
                        aspect-ratio: 3 / 4;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to bottom right, rgba(168, 85, 247, 0.2), rgba(59, 130, 246, 0.2), rgba(16, 185, 129, 0.2));
                    }
                    .member-portrait span {
                        width: 6rem;
                        height: 6rem;
                        border-radius: 50%;
                        background: rgba(124, 58, 237, 0.2);
                        color: #7c3aed;
                        font-size: 2.25rem;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .member-body { padding: 1.5rem; }
                    .member-body h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.25rem; }
                    .member-body .role { color: #7c3aed; margin-bottom: 1rem; }
                    .join-panel {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 3rem;
                        text-align: center;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(to right, #1a1a1a, rgba(26, 26, 26, 0.5));
                    }
                    .join-panel h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .join-panel p { font-size: 1.25rem; color: #d1d5db; margin-bottom: 2rem; }
                    .join-link a {
                        display: inline-block;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        background: #7c3aed;
                        color: #fff;
                        font-size: 1.125rem;
                        text-decoration: none;
                        transition: background-color 0.3s;
                    }
                    .join-link a:hover { background: rgba(124, 58, 237, 0.9); }
                    @media (max-width: 767px) {
                        .story-grid, .values-grid, .stats-grid, .team-grid { grid-template-columns: 1fr; }
                        .story-grid .story-art { order: -1; }
                        .about-header h1 { font-size: 3rem; }
                        .story-grid h2, .about-page .section-title h2, .join-panel h2 { font-size: 1.875rem; }
                        .stat .value { font-size: 2.25rem; }
                    }
                "#}
            </style>

            <section>
                <div class="about-glow"></div>
                <div class="container">
                    <div class="about-header">
                        <h1>{"About "}<span class="text-gradient">{"Us"}</span></h1>
                        <p>{"We bring imagination to life with modern design, smart code, and lasting impact."}</p>
                    </div>
                </div>
            </section>

            <section>
                <div class="container story-grid">
                    <Reveal>
                        <h2>{"Our Story"}</h2>
                        { for STORY.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        <p>
                            {"We\u{2019}re not just here to develop."}<br />
                            {"We\u{2019}re here to imagine, innovate, and build with heart."}
                        </p>
                    </Reveal>
                    <Reveal class="story-art">
                        <img src="/assets/elite8digital-logo.png" alt="Elite8Digital" />
                    </Reveal>
                </div>
            </section>

            <section class="alt">
                <div class="container">
                    <Reveal class="section-title">
                        <h2>{"By the Numbers"}</h2>
                        <p class="muted">{"Our impact in numbers that tell the story of our success and growth."}</p>
                    </Reveal>
                    <div class="stats-grid">
                        { for STATS.iter().enumerate().map(|(index, stat)| html! {
                            <Reveal class={classes!("panel", "stat")} delay={index as f64 * 0.1}>
                                <div class="value">{stat.value}</div>
                                <h3>{stat.label}</h3>
                                <p>{stat.description}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section>
                <div class="container">
                    <Reveal class="section-title">
                        <h2>{"Meet Our Team"}</h2>
                        <p class="muted">{"The talented individuals behind our exceptional work."}</p>
                    </Reveal>
                    <div class="team-grid">
                        { for TEAM.iter().enumerate().map(|(index, (name, role, bio))| html! {
                            <Reveal delay={index as f64 * 0.1}>
                                <div class="member">
                                    <div class="member-portrait"><span>{initial(name)}</span></div>
                                    <div class="member-body">
                                        <h3>{*name}</h3>
                                        <p class="role">{*role}</p>
                                        <p class="bio">{*bio}</p>
                                    </div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="alt">
                <div class="container">
                    <Reveal class="section-title">
                        <h2>{"Our Values"}</h2>
                        <p class="muted">{"The principles that guide our work and define our culture."}</p>
                    </Reveal>
                    <div class="values-grid">
                        { for VALUES.iter().enumerate().map(|(index, (title, description))| html! {
                            <Reveal class={classes!("panel", "value-card")} delay={index as f64 * 0.1}>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section>
                <div class="container">
                    <Reveal class="join-panel">
                        <h2>{"Join Our Team"}</h2>
                        <p>{"We're always looking for talented individuals to join our team. If you're passionate about creating exceptional digital experiences, we'd love to hear from you."}</p>
                        <JoinLink />
                    </Reveal>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monogram_is_first_letter_uppercased() {
        assert_eq!(initial("Alex Morgan"), "A");
        assert_eq!(initial("  david"), "D");
    }

    #[test]
    fn blank_name_has_no_monogram() {
        assert_eq!(initial(""), "");
        assert_eq!(initial("   "), "");
    }
}
