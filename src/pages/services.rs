use yew::prelude::*;

use crate::components::process_timeline::ProcessTimeline;
use crate::components::reveal;
use crate::components::service_card::ServiceCard;
use crate::components::services_grid::ServicesGrid;
use crate::QuoteLauncher;

#[function_component(Services)]
pub fn services() -> Html {
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
    let request_quote = Callback::from(move |_: MouseEvent| {
        if let Some(launcher) = &launcher {
            launcher.0.emit(());
        }
    });

    html! {
        <div class="services-page">
            <style>
                {r#"
                    .services-page { padding-top: 4rem; }
                    .services-hero h1 {
                        font-size: clamp(3rem, 6vw, 3.75rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .services-cards {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .services-cards { grid-template-columns: repeat(2, 1fr); }
                    }
                    .services-cta {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .services-cta h2 {
                        font-size: clamp(1.875rem, 4vw, 2.5rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .services-cta p {
                        font-size: 1.125rem;
                        color: #d1d5db;
                        margin-bottom: 2rem;
                    }
                "#}
            </style>

            <section class="section section-charcoal">
                <div class="container">
                    <div class="section-heading services-hero reveal">
                        <h1>{"Our "}<span class="gold">{"Services"}</span></h1>
                        <p>
                            {"Everything your home needs under one roof — from a single modular \
                              kitchen to complete turnkey interiors."}
                        </p>
                    </div>
                </div>
            </section>

            <ServicesGrid />

            <section class="section section-dark">
                <div class="container">
                    <div class="section-heading reveal">
                        <h2>{"What We "}<span class="gold">{"Deliver"}</span></h2>
                        <p>{"Comprehensive design services tailored to the way you live"}</p>
                    </div>
                    <div class="services-cards">
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

            <ProcessTimeline />

            <section class="section section-dark">
                <div class="container">
                    <div class="services-cta reveal">
                        <h2>{"Not Sure Where to "}<span class="gold">{"Start?"}</span></h2>
                        <p>
                            {"Answer three quick questions and get a personalized interior quote — \
                              it takes less than a minute."}
                        </p>
                        <button class="btn-gold" onclick={request_quote}>
                            {"Get My Free Quote"}
                        </button>
                    </div>
                </div>
            </section>
        </div>
    }
}
