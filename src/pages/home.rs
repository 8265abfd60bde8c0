use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::blog::BlogSection;
use crate::components::hero::Hero;
use crate::components::pricing::PricingSection;
use crate::components::reveal;
use crate::components::service_card::ServiceCard;
use crate::components::testimonials::TestimonialSlider;
use crate::QuoteLauncher;
use crate::Route;

const CHECKPOINTS: [&str; 4] = [
    "Award-winning design team",
    "Personalized design approach",
    "Premium quality materials",
    "Timely project completion",
];

const STATS: [(&str, &str); 4] = [
    ("500+", "Projects Completed"),
    ("15+", "Years Experience"),
    ("98%", "Client Satisfaction"),
    ("50+", "Design Awards"),
];

const FEATURED: [(&str, &str, &str); 3] = [
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
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top on mount, then drive the reveal classes for the page.
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

    let launcher = use_context::<QuoteLauncher>();
    let get_started = Callback::from(move |_: MouseEvent| {
        if let Some(launcher) = &launcher {
            launcher.0.emit(());
        }
    });

    html! {
        <div>
            <style>
                {r#"
                    .home-about {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (min-width: 1024px) {
                        .home-about { grid-template-columns: 1fr 1fr; }
                    }
                    .home-about h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .home-about-copy {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        margin-bottom: 2rem;
                        line-height: 1.7;
                    }
                    .home-checklist {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .home-checklist div {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #d1d5db;
                    }
                    .home-checklist span.tick { color: #D4AF37; }
                    .home-about-image { position: relative; }
                    .home-about-image img { border-radius: 1rem; }
                    .home-about-badge {
                        position: absolute;
                        bottom: -1.5rem;
                        left: -1.5rem;
                        background: #D4AF37;
                        color: #000;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                    }
                    .home-about-badge .big { font-weight: 700; font-size: 0.875rem; }
                    .home-about-badge .small { font-size: 0.75rem; }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .stats-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .stat { text-align: center; }
                    .stat .number {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 0.5rem;
                    }
                    .stat .label { color: #d1d5db; font-weight: 500; }
                    .home-services-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .home-services-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    .featured-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .featured-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .featured-card {
                        position: relative;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .featured-card:hover { transform: translateY(-10px); }
                    .featured-card img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .featured-card:hover img { transform: scale(1.1); }
                    .featured-card-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        transition: background 0.3s ease;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1rem;
                    }
                    .featured-card:hover .featured-card-overlay { background: rgba(0, 0, 0, 0.2); }
                    .featured-card-overlay .category {
                        color: #D4AF37;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }
                    .featured-card-overlay h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .featured-more { text-align: center; margin-top: 3rem; }
                    .home-cta {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .home-cta h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .home-cta p {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        margin-bottom: 2rem;
                        max-width: 42rem;
                        margin-left: auto;
                        margin-right: auto;
                    }
                "#}
            </style>

            <Hero />

            <section class="section section-charcoal">
                <div class="container">
                    <div class="home-about">
                        <div class="reveal">
                            <h2>{"Creating "}<span class="gold">{"Exceptional"}</span>{" Spaces"}</h2>
                            <p class="home-about-copy">
                                {"With over 15 years of experience in luxury interior design, we \
                                  specialize in creating spaces that perfectly balance aesthetics, \
                                  functionality, and your personal style. Every project is a unique \
                                  journey of transformation."}
                            </p>
                            <div class="home-checklist">
                                { for CHECKPOINTS.iter().map(|point| html! {
                                    <div>
                                        <span class="tick">{"✓"}</span>
                                        <span>{ *point }</span>
                                    </div>
                                }) }
                            </div>
                            <Link<Route> to={Route::About} classes="btn-gold">
                                {"Learn More About Us →"}
                            </Link<Route>>
                        </div>
                        <div class="home-about-image reveal">
                            <img
                                src="https://images.pexels.com/photos/1571468/pexels-photo-1571468.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop"
                                alt="Luxury Interior"
                            />
                            <div class="home-about-badge">
                                <div class="big">{"Award Winning"}</div>
                                <div class="small">{"Design Excellence"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <div class="stats-grid reveal">
                        { for STATS.iter().map(|(number, label)| html! {
                            <div class="stat">
                                <div class="number">{ number }</div>
                                <div class="label">{ label }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <div class="section-heading reveal">
                        <h2>{"Our "}<span class="gold">{"Services"}</span></h2>
                        <p>
                            {"From concept to completion, we offer comprehensive interior design \
                              solutions that transform your vision into reality."}
                        </p>
                    </div>
                    <div class="home-services-grid">
                        <ServiceCard
                            icon="🎨"
                            title="Interior Design"
                            description="Complete interior design solutions tailored to your unique style and preferences."
                            features={vec![
                                AttrValue::from("Space Planning"),
                                AttrValue::from("Color Consultation"),
                                AttrValue::from("Furniture Selection"),
                                AttrValue::from("Custom Layouts"),
                            ]}
                        />
                        <ServiceCard
                            icon="🏠"
                            title="Modular Kitchen"
                            description="Modern, functional kitchens designed to maximize space and enhance your culinary experience."
                            features={vec![
                                AttrValue::from("Custom Cabinets"),
                                AttrValue::from("Smart Storage"),
                                AttrValue::from("Premium Appliances"),
                                AttrValue::from("Ergonomic Design"),
                            ]}
                        />
                        <ServiceCard
                            icon="🔧"
                            title="Renovations"
                            description="Complete home renovations that transform your space while preserving its character."
                            features={vec![
                                AttrValue::from("Full Remodeling"),
                                AttrValue::from("Structural Changes"),
                                AttrValue::from("Modern Updates"),
                                AttrValue::from("Quality Materials"),
                            ]}
                        />
                        <ServiceCard
                            icon="🛋"
                            title="Custom Furniture"
                            description="Bespoke furniture pieces crafted to perfectly fit your space and lifestyle needs."
                            features={vec![
                                AttrValue::from("Made-to-Order"),
                                AttrValue::from("Premium Materials"),
                                AttrValue::from("Unique Designs"),
                                AttrValue::from("Perfect Fit"),
                            ]}
                        />
                    </div>
                </div>
            </section>

            <section class="section section-charcoal">
                <div class="container">
                    <div class="section-heading reveal">
                        <h2>{"Featured "}<span class="gold">{"Projects"}</span></h2>
                        <p>{"Showcasing our latest design achievements"}</p>
                    </div>
                    <div class="featured-grid reveal">
                        { for FEATURED.iter().map(|(image, title, category)| html! {
                            <div class="featured-card">
                                <img src={*image} alt={*title} />
                                <div class="featured-card-overlay">
                                    <span class="category">{ *category }</span>
                                    <h3>{ *title }</h3>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="featured-more reveal">
                        <Link<Route> to={Route::Projects} classes="btn-outline">
                            {"View All Projects"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <TestimonialSlider />

            <PricingSection />

            <BlogSection />

            <section class="section section-dark">
                <div class="container">
                    <div class="home-cta reveal">
                        <h2>{"Ready to Transform "}<span class="gold">{"Your Space?"}</span></h2>
                        <p>
                            {"Let's bring your vision to life. Contact us today for a consultation \
                              and discover how we can create the perfect space for you."}
                        </p>
                        <button class="btn-gold" onclick={get_started}>
                            {"Get Started Today"}
                        </button>
                    </div>
                </div>
            </section>
        </div>
    }
}
