use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Plan {
    name: &'static str,
    price: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    popular: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Essential",
        price: "2.5 Lakhs",
        description: "Perfect for single home makeovers with professional design guidance.",
        features: &[
            "Initial consultation",
            "Room layout design",
            "Color palette selection",
            "Furniture recommendations",
            "Shopping list provided",
            "2 revision rounds",
        ],
        popular: false,
    },
    Plan {
        name: "Premium",
        price: "5 Lakhs",
        description: "Complete room transformation with custom elements and premium finishes.",
        features: &[
            "Everything in Essential",
            "Custom furniture design",
            "3D renderings",
            "Project management",
            "Installation supervision",
            "Unlimited revisions",
            "Premium material sourcing",
        ],
        popular: true,
    },
    Plan {
        name: "Luxury",
        price: "Custom",
        description: "Full-service luxury design for entire homes with bespoke solutions.",
        features: &[
            "Everything in Premium",
            "Architectural modifications",
            "Custom millwork",
            "Art curation",
            "Lighting design",
            "Smart home integration",
            "White-glove service",
        ],
        popular: false,
    },
];

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    html! {
        <section class="section section-charcoal">
            <style>
                {r#"
                    .pricing-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .pricing-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .pricing-card {
                        position: relative;
                        background: #000;
                        border: 1px solid #374151;
                        border-radius: 1rem;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .pricing-card.popular {
                        border: 2px solid #D4AF37;
                        transform: scale(1.05);
                    }
                    .pricing-popular-tag {
                        position: absolute;
                        top: -0.85rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: #D4AF37;
                        color: #000;
                        font-size: 0.75rem;
                        font-weight: 700;
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        white-space: nowrap;
                    }
                    .pricing-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .pricing-price {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 1rem;
                    }
                    .pricing-price small {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        font-weight: 400;
                    }
                    .pricing-card > p {
                        color: #d1d5db;
                        margin-bottom: 1.5rem;
                        line-height: 1.6;
                    }
                    .pricing-card ul {
                        list-style: none;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        margin-bottom: 2rem;
                        flex: 1;
                    }
                    .pricing-card li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #d1d5db;
                    }
                    .pricing-card li::before {
                        content: '✓';
                        color: #D4AF37;
                        font-weight: 700;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-heading reveal">
                    <h2>{"Investment "}<span class="gold">{"Plans"}</span></h2>
                    <p>{"Choose the perfect design package that fits your vision and budget"}</p>
                </div>

                <div class="pricing-grid reveal">
                    { for PLANS.iter().map(|plan| html! {
                        <div class={classes!("pricing-card", plan.popular.then_some("popular"))}>
                            if plan.popular {
                                <div class="pricing-popular-tag">{"★ Most Popular"}</div>
                            }
                            <h3>{ plan.name }</h3>
                            <div class="pricing-price">
                                { plan.price }
                                if plan.price != "Custom" {
                                    <small>{" starting from"}</small>
                                }
                            </div>
                            <p>{ plan.description }</p>
                            <ul>
                                { for plan.features.iter().map(|feature| html! {
                                    <li>{ feature }</li>
                                }) }
                            </ul>
                            <Link<Route> to={Route::Contact} classes="btn-gold">
                                {"Get Started →"}
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
