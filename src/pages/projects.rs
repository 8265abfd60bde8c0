use yew::prelude::*;

use crate::components::awards::AwardsSection;
use crate::components::portfolio::PortfolioShowcase;
use crate::components::reveal;

const PROJECTS: [(&str, &str, &str); 6] = [
    (
        "https://images.pexels.com/photos/1571453/pexels-photo-1571453.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        "Modern Living Space",
        "Residential",
    ),
    (
        "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        "Luxury Kitchen Design",
        "Kitchen",
    ),
    (
        "https://images.pexels.com/photos/1571468/pexels-photo-1571468.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        "Executive Office",
        "Commercial",
    ),
    (
        "https://images.pexels.com/photos/1709003/pexels-photo-1709003.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        "Boutique Hotel Lobby",
        "Hospitality",
    ),
    (
        "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        "Serene Master Bedroom",
        "Residential",
    ),
    (
        "https://images.pexels.com/photos/697509/pexels-photo-697509.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
        "Compact Study Corner",
        "Residential",
    ),
];

#[function_component(Projects)]
pub fn projects() -> Html {
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            let listener = reveal::start();
            move || reveal::stop(listener)
        },
        (),
    );

    html! {
        <div class="projects-page">
            <style>
                {r#"
                    .projects-page { padding-top: 4rem; }
                    .projects-hero h1 {
                        font-size: clamp(3rem, 6vw, 3.75rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .projects-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 640px) {
                        .projects-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .projects-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .project-tile {
                        position: relative;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        transition: transform 0.3s ease;
                    }
                    .project-tile:hover { transform: translateY(-10px); }
                    .project-tile img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .project-tile:hover img { transform: scale(1.1); }
                    .project-tile-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1rem;
                        transition: background 0.3s ease;
                    }
                    .project-tile:hover .project-tile-overlay { background: rgba(0, 0, 0, 0.2); }
                    .project-tile-overlay .category {
                        color: #D4AF37;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }
                    .project-tile-overlay h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                "#}
            </style>

            <section class="section section-charcoal">
                <div class="container">
                    <div class="section-heading projects-hero reveal">
                        <h1>{"Our "}<span class="gold">{"Projects"}</span></h1>
                        <p>
                            {"A look at the homes, offices, and hospitality spaces we've had the \
                              privilege of transforming."}
                        </p>
                    </div>
                </div>
            </section>

            <PortfolioShowcase />

            <section class="section section-dark">
                <div class="container">
                    <div class="section-heading reveal">
                        <h2>{"All "}<span class="gold">{"Projects"}</span></h2>
                        <p>{"Every space tells a story"}</p>
                    </div>
                    <div class="projects-grid reveal">
                        { for PROJECTS.iter().map(|(image, title, category)| html! {
                            <div class="project-tile">
                                <img src={*image} alt={*title} />
                                <div class="project-tile-overlay">
                                    <span class="category">{ *category }</span>
                                    <h3>{ *title }</h3>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <AwardsSection />
        </div>
    }
}
