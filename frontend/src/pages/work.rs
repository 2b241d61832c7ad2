use yew::prelude::*;

use crate::components::buttons::{AnimatedButton, ButtonSize};
use crate::components::reveal::Reveal;
use crate::cursor::interactive::use_interactive_target;
use crate::pages::home::process_grid;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Category {
    #[default]
    All,
    Web,
    Mobile,
    Branding,
    ThreeD,
}

impl Category {
    pub const FILTERS: [Category; 5] = [
        Category::All,
        Category::Web,
        Category::Mobile,
        Category::Branding,
        Category::ThreeD,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Web => "Web",
            Category::Mobile => "Mobile",
            Category::Branding => "Branding",
            Category::ThreeD => "3d",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub year: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: [Project; 9] = [
    Project {
        id: 1,
        title: "Huly.io Platform",
        description: "A complete redesign and development of the Huly.io platform with focus on user experience and performance.",
        category: Category::Web,
        tags: &["UI/UX", "React", "Animation"],
        year: "2024",
        image: "/assets/projects/project1.svg",
    },
    Project {
        id: 2,
        title: "ReactBits Portfolio",
        description: "An interactive portfolio website showcasing the capabilities of ReactBits components with 3D elements.",
        category: Category::Web,
        tags: &["React", "3D", "Interactive"],
        year: "2023",
        image: "/assets/projects/project2.svg",
    },
    Project {
        id: 3,
        title: "Quantum Mobile App",
        description: "A cutting-edge mobile application for financial management with advanced visualization and analytics.",
        category: Category::Mobile,
        tags: &["React Native", "FinTech", "UI/UX"],
        year: "2023",
        image: "/assets/projects/project3.svg",
    },
    Project {
        id: 4,
        title: "Nova Brand Identity",
        description: "Complete brand identity design for Nova, a tech startup focused on sustainable energy solutions.",
        category: Category::Branding,
        tags: &["Branding", "Logo Design", "Identity"],
        year: "2022",
        image: "/assets/projects/project4.svg",
    },
    Project {
        id: 5,
        title: "Immersive VR Experience",
        description: "A virtual reality experience for a luxury real estate developer to showcase properties in an immersive way.",
        category: Category::ThreeD,
        tags: &["VR", "3D Modeling", "Interactive"],
        year: "2023",
        image: "/assets/projects/project5.svg",
    },
    Project {
        id: 6,
        title: "Eco E-commerce Platform",
        description: "An e-commerce platform for sustainable products with a focus on ethical sourcing and carbon footprint tracking.",
        category: Category::Web,
        tags: &["E-commerce", "React", "Sustainability"],
        year: "2022",
        image: "/assets/projects/project6.svg",
    },
    Project {
        id: 7,
        title: "Pulse Health App",
        description: "A health tracking mobile application with personalized insights and wellness recommendations.",
        category: Category::Mobile,
        tags: &["Health Tech", "React Native", "UI/UX"],
        year: "2023",
        image: "/assets/projects/project7.svg",
    },
    Project {
        id: 8,
        title: "Nexus 3D Product Configurator",
        description: "An interactive 3D product configurator for a furniture company allowing customers to customize products in real-time.",
        category: Category::ThreeD,
        tags: &["3D", "WebGL", "E-commerce"],
        year: "2024",
        image: "/assets/projects/project8.svg",
    },
    Project {
        id: 9,
        title: "Artisan Brand Refresh",
        description: "A comprehensive brand refresh for Artisan, a boutique design studio with a global clientele.",
        category: Category::Branding,
        tags: &["Branding", "Visual Identity", "Strategy"],
        year: "2023",
        image: "/assets/projects/project9.svg",
    },
];

/// Projects shown under `filter`, in catalogue order.
pub fn filter_projects(projects: &[Project], filter: Category) -> Vec<&Project> {
    projects
        .iter()
        .filter(|p| filter == Category::All || p.category == filter)
        .collect()
}

#[derive(Properties, PartialEq)]
struct FilterButtonProps {
    category: Category,
    active: bool,
    onselect: Callback<Category>,
}

#[function_component(FilterButton)]
fn filter_button(props: &FilterButtonProps) -> Html {
    let hover = use_interactive_target();
    let onclick = {
        let onselect = props.onselect.clone();
        let category = props.category;
        Callback::from(move |_: MouseEvent| onselect.emit(category))
    };

    html! {
        <button
            class={classes!("filter-button", props.active.then(|| "active"))}
            {onclick}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            {props.category.label()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let hover = use_interactive_target();
    let project = &props.project;

    html! {
        <Reveal class="project-card">
            <div onmouseenter={hover.onmouseenter} onmouseleave={hover.onmouseleave}>
                <div class="project-media">
                    <div class="project-shade"></div>
                    <img src={project.image} alt={project.title} />
                    <div class="project-overlay"><span>{"View Project"}</span></div>
                </div>
                <div class="project-info">
                    <div class="project-heading">
                        <h3>{project.title}</h3>
                        <span>{project.year}</span>
                    </div>
                    <p>{project.description}</p>
                    <div class="project-tags">
                        { for project.tags.iter().map(|tag| html! { <span>{*tag}</span> }) }
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    let active = use_state(Category::default);
    let onselect = {
        let active = active.clone();
        Callback::from(move |category: Category| active.set(category))
    };
    let shown = filter_projects(&PROJECTS, *active);

    html! {
        <div class="work-page">
            <style>
                {r#"
                    .work-page section { position: relative; overflow: hidden; padding: 6rem 0; }
                    .work-page .container { max-width: 1280px; margin: 0 auto; padding: 0 1rem; position: relative; z-index: 10; }
                    .work-hero-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at center, rgba(255, 255, 255, 0.1) 0, rgba(0, 0, 0, 0) 70%);
                    }
                    .work-header { max-width: 48rem; margin: 0 auto 4rem; text-align: center; }
                    .work-header h1 { font-size: 4.5rem; font-weight: 700; letter-spacing: -0.025em; margin-bottom: 1.5rem; }
                    .work-header p { font-size: 1.25rem; color: #9ca3af; }
                    .text-gradient {
                        background: linear-gradient(to right, #a855f7, #3b82f6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .filter-row { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 3rem; }
                    .filter-button {
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        border: none;
                        background: #1a1a1a;
                        color: #9ca3af;
                        transition: all 0.3s;
                    }
                    .filter-button:hover { color: #fff; }
                    .filter-button.active { background: #7c3aed; color: #fff; }
                    .project-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .project-card { border-radius: 0.5rem; overflow: hidden; }
                    .project-media { position: relative; aspect-ratio: 4 / 3; overflow: hidden; background: #111; }
                    .project-media img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
                    .project-card:hover .project-media img { transform: scale(1.1); }
                    .project-shade { position: absolute; inset: 0; z-index: 10; opacity: 0.7; background: linear-gradient(to top, #000, transparent); }
                    .project-overlay {
                        position: absolute;
                        inset: 0;
                        z-index: 20;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(124, 58, 237, 0.5);
                        opacity: 0;
                        transition: opacity 0.3s;
                        font-size: 1.125rem;
                        font-weight: 700;
                    }
                    .project-card:hover .project-overlay { opacity: 1; }
                    .project-info { padding: 1rem; }
                    .project-heading { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem; }
                    .project-heading h3 { font-size: 1.25rem; font-weight: 700; transition: color 0.3s; }
                    .project-card:hover .project-heading h3 { color: #8b5cf6; }
                    .project-heading span { font-size: 0.875rem; color: #9ca3af; }
                    .project-info p {
                        color: #9ca3af;
                        margin-bottom: 0.75rem;
                        display: -webkit-box;
                        -webkit-line-clamp: 2;
                        -webkit-box-orient: vertical;
                        overflow: hidden;
                    }
                    .project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                    .project-tags span { padding: 0.25rem 0.5rem; font-size: 0.75rem; border-radius: 9999px; background: #1a1a1a; color: #d1d5db; }
                    .work-process { background: #0a0a0a; }
                    .work-process .section-title { text-align: center; margin-bottom: 4rem; }
                    .work-process h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1rem; }
                    .work-process .section-title p { font-size: 1.25rem; color: #9ca3af; max-width: 48rem; margin: 0 auto; }
                    .work-cta {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                        padding: 3rem;
                        border-radius: 1rem;
                        background: linear-gradient(to right, #1a1a1a, rgba(26, 26, 26, 0.5));
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .work-cta h2 { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
                    .work-cta p { font-size: 1.25rem; color: #d1d5db; margin-bottom: 2rem; }
                    @media (max-width: 1023px) { .project-grid { grid-template-columns: repeat(2, 1fr); } }
                    @media (max-width: 767px) {
                        .project-grid { grid-template-columns: 1fr; }
                        .work-header h1 { font-size: 3rem; }
                        .work-process h2, .work-cta h2 { font-size: 1.875rem; }
                    }
                "#}
            </style>

            <section>
                <div class="work-hero-glow"></div>
                <div class="container">
                    <div class="work-header">
                        <h1>{"Our "}<span class="text-gradient">{"Work"}</span></h1>
                        <p>{"Explore our portfolio of projects that showcase our expertise in creating stunning digital experiences."}</p>
                    </div>

                    <div class="filter-row">
                        { for Category::FILTERS.iter().map(|category| html! {
                            <FilterButton
                                category={*category}
                                active={*active == *category}
                                onselect={onselect.clone()}
                            />
                        }) }
                    </div>

                    <div class="project-grid">
                        { for shown.into_iter().map(|project| html! {
                            <ProjectCard key={project.id} project={project.clone()} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="work-process">
                <div class="container">
                    <Reveal class="section-title">
                        <h2>{"Our Process"}</h2>
                        <p>{"We follow a structured approach to deliver exceptional results for every project."}</p>
                    </Reveal>
                    { process_grid() }
                </div>
            </section>

            <section>
                <div class="container">
                    <Reveal class="work-cta">
                        <h2>{"Let's Work Together"}</h2>
                        <p>{"Ready to start your next project? Contact us today to discuss how we can help bring your vision to life."}</p>
                        <AnimatedButton href="/contact" size={ButtonSize::Lg}>
                            {"Get in Touch"}
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
    fn all_shows_every_project_in_order() {
        let ids: Vec<u32> = filter_projects(&PROJECTS, Category::All).iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn category_filter_keeps_only_matches() {
        let web: Vec<u32> = filter_projects(&PROJECTS, Category::Web).iter().map(|p| p.id).collect();
        assert_eq!(web, vec![1, 2, 6]);
        let three_d: Vec<u32> = filter_projects(&PROJECTS, Category::ThreeD).iter().map(|p| p.id).collect();
        assert_eq!(three_d, vec![5, 8]);
    }

    #[test]
    fn every_filter_but_all_partitions_the_catalogue() {
        let total: usize = Category::FILTERS
            .iter()
            .filter(|c| **c != Category::All)
            .map(|c| filter_projects(&PROJECTS, *c).len())
            .sum();
        assert_eq!(total, PROJECTS.len());
    }

    #[test]
    fn empty_catalogue_filters_to_nothing() {
        assert!(filter_projects(&[], Category::Mobile).is_empty());
    }
}
