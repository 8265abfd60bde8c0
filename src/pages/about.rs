use yew::prelude::*;

use crate::components::reveal;

const VALUES: [(&str, &str, &str); 4] = [
    (
        "🎯",
        "Excellence",
        "We strive for perfection in every project, ensuring the highest standards of quality \
         and craftsmanship.",
    ),
    (
        "❤",
        "Passion",
        "Our love for design drives us to create spaces that truly reflect our clients' \
         personalities and dreams.",
    ),
    (
        "🤝",
        "Collaboration",
        "We work closely with our clients throughout the entire process, making their vision \
         our priority.",
    ),
    (
        "💡",
        "Innovation",
        "We embrace cutting-edge design trends while maintaining timeless appeal in all our \
         creations.",
    ),
];

const TEAM: [(&str, &str, &str, &str); 3] = [
    (
        "Aisha Menon",
        "Lead Interior Designer",
        "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=400&h=400&fit=crop",
        "15+ years of experience in luxury interior design with a passion for creating \
         timeless spaces.",
    ),
    (
        "Rahul Krishnan",
        "Senior Architect",
        "https://images.pexels.com/photos/697509/pexels-photo-697509.jpeg?auto=compress&cs=tinysrgb&w=400&h=400&fit=crop",
        "Specialized in residential and commercial architecture with focus on sustainable \
         design.",
    ),
    (
        "Divya Subramanian",
        "Project Manager",
        "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=400&h=400&fit=crop",
        "Expert in project coordination ensuring every detail is executed to perfection.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
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
        <div class="about-page">
            <style>
                {r#"
                    .about-page { padding-top: 4rem; }
                    .about-hero h1 {
                        font-size: clamp(3rem, 6vw, 3.75rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .about-story {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .about-story { grid-template-columns: 1fr 1fr; }
                    }
                    .about-story img { border-radius: 1rem; }
                    .about-story h2 {
                        font-size: clamp(1.875rem, 4vw, 2.25rem);
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 1.5rem;
                    }
                    .about-story p {
                        color: #d1d5db;
                        margin-bottom: 1.5rem;
                        line-height: 1.7;
                    }
                    .about-story-stats {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    .about-story-stats .number {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 0.5rem;
                    }
                    .values-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .values-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .values-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .value-card { text-align: center; }
                    .value-card .icon {
                        background: #D4AF37;
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        margin: 0 auto 1.5rem;
                    }
                    .value-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 1rem;
                    }
                    .value-card p { color: #d1d5db; line-height: 1.7; }
                    .team-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .team-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .team-card {
                        background: #000;
                        border-radius: 1rem;
                        overflow: hidden;
                        text-align: center;
                        transition: transform 0.3s ease;
                    }
                    .team-card:hover { transform: translateY(-10px); }
                    .team-card img {
                        width: 100%;
                        height: 18rem;
                        object-fit: cover;
                    }
                    .team-card-body { padding: 1.5rem; }
                    .team-card-body h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 0.25rem;
                    }
                    .team-card-body .role {
                        color: #D4AF37;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .team-card-body p {
                        color: #d1d5db;
                        font-size: 0.9rem;
                        line-height: 1.6;
                    }
                "#}
            </style>

            <section class="section section-charcoal">
                <div class="container">
                    <div class="section-heading about-hero reveal">
                        <h1>{"About "}<span class="gold">{"Home Sphere"}</span></h1>
                        <p>
                            {"We are passionate designers dedicated to creating extraordinary \
                              spaces that inspire, comfort, and delight. Our journey began with a \
                              simple belief: every space has the potential to be beautiful."}
                        </p>
                    </div>

                    <div class="about-story">
                        <div class="reveal">
                            <img
                                src="https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop"
                                alt="Our studio"
                            />
                        </div>
                        <div class="reveal">
                            <h2>{"Our Story"}</h2>
                            <p>
                                {"Founded over 15 years ago, Home Sphere grew from a small studio \
                                  into one of Chennai's most trusted interior design firms. What \
                                  started as a passion for beautiful living has become a practice \
                                  spanning hundreds of homes, offices, and commercial spaces."}
                            </p>
                            <p>
                                {"We believe great design is personal. Every family lives \
                                  differently, and every space should be shaped around the people \
                                  who inhabit it — their routines, their tastes, their dreams."}
                            </p>
                            <div class="about-story-stats">
                                <div>
                                    <div class="number">{"500+"}</div>
                                    <div>{"Projects Completed"}</div>
                                </div>
                                <div>
                                    <div class="number">{"98%"}</div>
                                    <div>{"Client Satisfaction"}</div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <div class="section-heading reveal">
                        <h2>{"Our "}<span class="gold">{"Values"}</span></h2>
                        <p>{"The principles that guide everything we do"}</p>
                    </div>
                    <div class="values-grid reveal">
                        { for VALUES.iter().map(|(icon, title, description)| html! {
                            <div class="value-card">
                                <div class="icon">{ icon }</div>
                                <h3>{ title }</h3>
                                <p>{ description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-charcoal">
                <div class="container">
                    <div class="section-heading reveal">
                        <h2>{"Meet Our "}<span class="gold">{"Team"}</span></h2>
                        <p>{"The talented people behind every exceptional space"}</p>
                    </div>
                    <div class="team-grid reveal">
                        { for TEAM.iter().map(|(name, role, image, bio)| html! {
                            <div class="team-card">
                                <img src={*image} alt={*name} />
                                <div class="team-card-body">
                                    <h3>{ *name }</h3>
                                    <div class="role">{ *role }</div>
                                    <p>{ *bio }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>
        </div>
    }
}
