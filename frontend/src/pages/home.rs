use yew::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::components::buttons::{
    AnimatedButton, ButtonSize, ButtonVariant, Gradient, GradientButton, HoverEffect,
};
use crate::components::floating_elements::FloatingElements;
use crate::components::glowing_text::{GlowSize, GlowingText};
use crate::components::reveal::Reveal;
use crate::components::text_reveal::{RevealAnimation, TextReveal};

/// Colour family of a service card. Drives the icon swatch, the card glow and
/// the button gradient together.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Accent {
    Purple,
    Blue,
    Teal,
    Green,
}

impl Accent {
    pub fn swatch(self) -> &'static str {
        match self {
            Accent::Purple => "linear-gradient(to bottom right, #a855f7, #3b82f6)",
            Accent::Blue => "linear-gradient(to bottom right, #3b82f6, #14b8a6)",
            Accent::Teal => "linear-gradient(to bottom right, #14b8a6, #22c55e)",
            Accent::Green => "linear-gradient(to bottom right, #22c55e, #eab308)",
        }
    }

    pub fn glow(self) -> &'static str {
        match self {
            Accent::Purple => "rgba(139, 92, 246, 0.3)",
            Accent::Blue => "rgba(59, 130, 246, 0.3)",
            Accent::Teal => "rgba(20, 184, 166, 0.3)",
            Accent::Green => "rgba(16, 185, 129, 0.3)",
        }
    }

    pub fn gradient(self) -> Gradient {
        match self {
            Accent::Purple => Gradient::PurpleBlue,
            Accent::Blue => Gradient::BlueTeal,
            Accent::Teal | Accent::Green => Gradient::GreenBlue,
        }
    }
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Custom Website Design, Development & Maintenance",
        description: "We create tailored websites with modern design, robust development, and ongoing maintenance to keep your online presence running smoothly.",
        icon: "ri-code-s-slash-line",
        accent: Accent::Purple,
    },
    Service {
        title: "Software & App Development",
        description: "Custom software solutions and applications designed to streamline your business processes and enhance user experience.",
        icon: "ri-apps-2-line",
        accent: Accent::Blue,
    },
    Service {
        title: "Mobile-Friendly Websites & Apps",
        description: "Responsive designs that work flawlessly across all devices, ensuring your customers have a seamless experience wherever they are.",
        icon: "ri-smartphone-line",
        accent: Accent::Teal,
    },
    Service {
        title: "E-commerce Solutions",
        description: "Complete online store development with secure payment processing, inventory management, and user-friendly shopping experiences.",
        icon: "ri-shopping-cart-2-line",
        accent: Accent::Green,
    },
];

pub const PROCESS: [(&str, &str); 4] = [
    ("Discovery", "We start by understanding your business, goals, and target audience to define the project scope."),
    ("Strategy", "We develop a comprehensive strategy and roadmap to achieve your business objectives."),
    ("Design & Development", "Our team creates stunning designs and builds robust, scalable solutions."),
    ("Launch & Support", "We ensure a smooth launch and provide ongoing support to help you succeed."),
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    image: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechVision",
        content: "Elite8Digital transformed our online presence with a stunning website that perfectly captures our brand identity. Their attention to detail and creative approach exceeded our expectations.",
        image: "/assets/images/avatar-1.svg",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Marketing Director, Innovate Inc",
        content: "Working with Elite8Digital was a game-changer for our company. Their strategic approach to digital marketing helped us reach new audiences and significantly increase our conversion rates.",
        image: "/assets/images/avatar-2.svg",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Product Manager, Nexus",
        content: "The 3D visualizations created by Elite8Digital brought our product to life in ways we never imagined. The immersive experience has been a key factor in our successful product launch.",
        image: "/assets/images/avatar-3.svg",
    },
];

/// (name, remixicon class, brand colour)
const TECH_STACK: [(&str, &str, &str); 8] = [
    ("React", "ri-reactjs-fill", "#61DAFB"),
    ("Three.js", "ri-code-box-fill", "#FFFFFF"),
    ("Node.js", "ri-server-fill", "#8CC84B"),
    ("MongoDB", "ri-database-2-fill", "#4DB33D"),
    ("TypeScript", "ri-code-s-slash-fill", "#3178C6"),
    ("Figma", "ri-pencil-ruler-2-fill", "#F24E1E"),
    ("Tailwind CSS", "ri-layout-4-fill", "#38BDF8"),
    ("AWS", "ri-cloud-fill", "#FF9900"),
];

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

/// Numbered steps joined by a connector line. Also shown on the work page.
pub fn process_grid() -> Html {
    html! {
        <div class="process-grid">
            <style>
                {r#"
                    .process-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                    .process-step { display: flex; flex-direction: column; align-items: center; text-align: center; }
                    .process-number {
                        position: relative;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        background: rgba(124, 58, 237, 0.1);
                        color: #7c3aed;
                        font-size: 1.25rem;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                    }
                    .process-link { position: absolute; top: 50%; left: 100%; width: 100%; height: 2px; background: rgba(124, 58, 237, 0.1); }
                    .process-step h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
                    .process-step p { color: rgba(255, 255, 255, 0.7); }
                    @media (max-width: 767px) {
                        .process-grid { grid-template-columns: 1fr; }
                        .process-link { display: none; }
                    }
                "#}
            </style>
            { for PROCESS.iter().enumerate().map(|(index, (title, description))| html! {
                <Reveal delay={index as f64 * 0.1}>
                    <div class="process-step">
                        <div class="process-number">
                            {index + 1}
                            if index < PROCESS.len() - 1 {
                                <div class="process-link"></div>
                            }
                        </div>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                </Reveal>
            }) }
        </div>
    }
}

fn stars() -> Html {
    (0..5)
        .map(|_| {
            html! {
                <svg class="star" viewBox="0 0 20 20" fill="currentColor">
                    <path d={STAR_PATH} />
                </svg>
            }
        })
        .collect()
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page section { position: relative; overflow: hidden; padding: 5rem 0; }
                    .home-page .container { max-width: 1280px; margin: 0 auto; padding: 0 1rem; position: relative; z-index: 10; }
                    .gradient-text {
                        background: linear-gradient(to right, #a855f7, #3b82f6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .section-title { text-align: center; margin-bottom: 4rem; }
                    .section-title h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1rem; }
                    .section-title p { font-size: 1.25rem; color: rgba(255, 255, 255, 0.7); max-width: 42rem; margin: 0 auto; }

                    .hero { min-height: 100vh; display: flex; align-items: center; }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at center, rgba(120, 80, 255, 0.15) 0, rgba(0, 0, 0, 0) 70%);
                    }
                    .hero-row { display: flex; align-items: center; gap: 2rem; }
                    .hero-copy { flex: 1; animation: heroIn 0.8s ease both; }
                    @keyframes heroIn { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        margin-bottom: 1.5rem;
                        border: 1px solid rgba(168, 85, 247, 0.3);
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        color: #c084fc;
                    }
                    .hero-badge .dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #a855f7; animation: pulse 2s infinite; }
                    @keyframes pulse { 50% { opacity: 0.5; } }
                    .hero-headline { font-size: 4.5rem; font-weight: 700; line-height: 1.1; letter-spacing: -0.025em; margin-bottom: 1.5rem; }
                    .hero-lead { font-size: 1.25rem; color: rgba(255, 255, 255, 0.7); margin-bottom: 2.5rem; }
                    .hero-art { flex: 1; position: relative; height: 600px; display: flex; align-items: center; justify-content: center; }
                    .hero-art .shape { position: absolute; animation: bob 6s ease-in-out infinite alternate; }
                    .hero-art .shape-1 { width: 16rem; top: 2.5rem; left: 2.5rem; }
                    .hero-art .shape-2 { width: 20rem; bottom: 0; right: 0; animation-duration: 8s; animation-direction: alternate-reverse; }
                    @keyframes bob { from { transform: translateY(0) rotate(0); } to { transform: translateY(-20px) rotate(5deg); } }
                    .scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 0;
                        right: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 0.875rem;
                    }
                    .scroll-hint .mouse {
                        margin-top: 0.5rem;
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.2);
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                        padding: 0.25rem;
                        animation: nudge 1.5s infinite;
                    }
                    .scroll-hint .mouse div { width: 0.25rem; height: 0.25rem; background: rgba(255, 255, 255, 0.5); border-radius: 50%; }
                    @keyframes nudge { 50% { transform: translateY(8px); } }

                    .services-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                    .service-card { padding: 2rem; height: 100%; }
                    .service-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        margin-bottom: 1rem;
                        transition: transform 0.3s;
                    }
                    .service-card:hover .service-icon { transform: scale(1.1); }
                    .service-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.75rem; }
                    .service-card p { color: rgba(255, 255, 255, 0.7); margin-bottom: 1.5rem; }


                    .testimonial-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .testimonial { padding: 2rem; height: 100%; }
                    .testimonial-head { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
                    .testimonial-head img { width: 4rem; height: 4rem; border-radius: 50%; object-fit: cover; }
                    .testimonial-head p { color: rgba(255, 255, 255, 0.7); font-size: 0.875rem; }
                    .testimonial blockquote { color: rgba(255, 255, 255, 0.8); font-style: italic; margin: 0 0 1rem; }
                    .stars { display: flex; color: #eab308; }
                    .star { width: 1.25rem; height: 1.25rem; }

                    .tech-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
                    .tech-item { display: flex; flex-direction: column; align-items: center; }
                    .tech-badge {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 50%;
                        background: rgba(30, 30, 40, 0.8);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.875rem;
                        margin-bottom: 1rem;
                        transition: transform 0.3s;
                    }
                    .tech-badge:hover { transform: scale(1.1); }

                    .cta-band { background: linear-gradient(to right, rgba(88, 28, 135, 0.2), rgba(30, 58, 138, 0.2)); text-align: center; }
                    .cta-band h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .cta-band p { font-size: 1.25rem; color: rgba(255, 255, 255, 0.7); max-width: 42rem; margin: 0 auto 2.5rem; }

                    @media (max-width: 1023px) {
                        .hero-row { flex-direction: column; text-align: center; }
                        .hero-art { height: 400px; width: 100%; }
                        .services-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 767px) {
                        .hero-headline { font-size: 2.5rem; }
                        .services-grid, .testimonial-grid { grid-template-columns: 1fr; }
                        .tech-grid { grid-template-columns: repeat(2, 1fr); }
                        .section-title h2, .cta-band h2 { font-size: 2.25rem; }
                    }
                "#}
            </style>

            <section class="hero">
                <div class="hero-backdrop"></div>
                <FloatingElements count={20} />
                <div class="container hero-row">
                    <div class="hero-copy">
                        <div class="hero-badge">
                            <span class="dot"></span>
                            {"Innovative Digital Agency"}
                        </div>
                        <div class="hero-headline">
                            <TextReveal
                                text="Crafting Digital"
                                class="gradient-text"
                                animation={RevealAnimation::Slide}
                                delay={0.3}
                            />
                            <TextReveal
                                text="Experiences That Inspire"
                                animation={RevealAnimation::Slide}
                                delay={0.4}
                            />
                        </div>
                        <p class="hero-lead">
                            {"We blend creativity with cutting-edge technology to build immersive digital experiences that captivate audiences and drive exceptional results."}
                        </p>
                        <GradientButton
                            href="/contact"
                            gradient={Gradient::BlueTeal}
                            size={ButtonSize::Lg}
                            hover_effect={HoverEffect::Both}
                        >
                            {"Get in Touch"}
                        </GradientButton>
                    </div>

                    <div class="hero-art">
                        <img class="shape shape-1" src="/assets/images/abstract-shape-1.svg" alt="Abstract Shape" />
                        <img class="shape shape-2" src="/assets/images/abstract-shape-2.svg" alt="Abstract Shape" />
                        <GlowingText
                            text="ELITE8"
                            size={GlowSize::Xxl}
                            glow_color="rgba(139, 92, 246, 0.8)"
                        />
                    </div>
                </div>
                <div class="scroll-hint">
                    <span>{"Scroll to explore"}</span>
                    <div class="mouse"><div></div></div>
                </div>
            </section>

            <section id="services">
                <FloatingElements count={10} min_size={5.0} max_size={20.0} />
                <div class="container">
                    <Reveal class="section-title">
                        <GlowingText text="Our Services" size={GlowSize::Xl} glow_color="rgba(139, 92, 246, 0.6)" />
                        <TextReveal
                            text="We offer a comprehensive range of digital services to help your business thrive in the digital landscape."
                            color="rgba(255, 255, 255, 0.7)"
                            animation={RevealAnimation::Fade}
                            delay={0.3}
                        />
                    </Reveal>
                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <Reveal delay={index as f64 * 0.1}>
                                <AnimatedCard class="service-card" glow_color={service.accent.glow()}>
                                    <div class="service-icon" style={format!("background: {};", service.accent.swatch())}>
                                        <i class={service.icon}></i>
                                    </div>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <GradientButton href="/contact" size={ButtonSize::Sm} gradient={service.accent.gradient()}>
                                        {"Learn more"}
                                    </GradientButton>
                                </AnimatedCard>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="process" style="background: #0a0a0a;">
                <div class="container">
                    <Reveal class="section-title">
                        <h2><span class="gradient-text">{"Our Process"}</span></h2>
                        <p>{"We follow a structured approach to deliver exceptional results for every project."}</p>
                    </Reveal>
                    { process_grid() }
                </div>
            </section>

            <section>
                <div class="container">
                    <Reveal class="section-title">
                        <h2><span class="gradient-text">{"Client Testimonials"}</span></h2>
                        <p>{"Hear what our clients have to say about their experience working with us."}</p>
                    </Reveal>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().enumerate().map(|(index, t)| html! {
                            <Reveal delay={index as f64 * 0.1}>
                                <AnimatedCard class="testimonial">
                                    <div class="testimonial-head">
                                        <img src={t.image} alt={t.name} />
                                        <div>
                                            <h3>{t.name}</h3>
                                            <p>{t.role}</p>
                                        </div>
                                    </div>
                                    <blockquote>{format!("\"{}\"", t.content)}</blockquote>
                                    <div class="stars">{ stars() }</div>
                                </AnimatedCard>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section>
                <div class="container">
                    <Reveal class="section-title">
                        <h2><span class="gradient-text">{"Our Tech Stack"}</span></h2>
                        <p>{"We use cutting-edge technologies to build powerful, scalable, and beautiful digital experiences."}</p>
                    </Reveal>
                    <div class="tech-grid">
                        { for TECH_STACK.iter().enumerate().map(|(index, (name, icon, color))| html! {
                            <Reveal class="tech-item" delay={index as f64 * 0.05}>
                                <div class="tech-badge" style={format!("box-shadow: 0 0 15px {}40;", color)}>
                                    <i class={*icon} style={format!("color: {};", color)}></i>
                                </div>
                                <h3>{*name}</h3>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="cta-band">
                <div class="container">
                    <Reveal>
                        <h2>{"Ready to "}<span class="gradient-text">{"Transform"}</span>{" Your Digital Presence?"}</h2>
                        <p>{"Let's collaborate to create a stunning digital experience that captivates your audience and drives results."}</p>
                        <AnimatedButton href="/contact" variant={ButtonVariant::Primary} size={ButtonSize::Lg}>
                            {"Get Started Today"}
                        </AnimatedButton>
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
    fn accents_pick_matching_gradients() {
        assert_eq!(Accent::Purple.gradient(), Gradient::PurpleBlue);
        assert_eq!(Accent::Blue.gradient(), Gradient::BlueTeal);
        assert_eq!(Accent::Teal.gradient(), Gradient::GreenBlue);
        assert_eq!(Accent::Green.gradient(), Gradient::GreenBlue);
    }

    #[test]
    fn every_service_has_a_distinct_accent() {
        let mut accents: Vec<_> = SERVICES.iter().map(|s| s.accent.glow()).collect();
        accents.dedup();
        assert_eq!(accents.len(), SERVICES.len());
    }
}
