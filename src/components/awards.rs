use yew::prelude::*;

use crate::QuoteLauncher;

const AWARDS: [(&str, &str, &str, &str, &str); 4] = [
    (
        "🏆",
        "Best Interior Design Firm",
        "Design Excellence Awards",
        "2024",
        "Recognized for outstanding creativity and client satisfaction",
    ),
    (
        "🎖",
        "Luxury Home Design Award",
        "Architectural Digest",
        "2023",
        "Featured project: Modern Luxury Villa in Beverly Hills",
    ),
    (
        "⭐",
        "Innovation in Design",
        "Interior Design Magazine",
        "2023",
        "Pioneering sustainable luxury design practices",
    ),
    (
        "🥇",
        "Client Choice Award",
        "Home & Design",
        "2022",
        "Highest client satisfaction rating for three consecutive years",
    ),
];

#[function_component(AwardsSection)]
pub fn awards_section() -> Html {
    let launcher = use_context::<QuoteLauncher>();
    let start = Callback::from(move |_: MouseEvent| {
        if let Some(launcher) = &launcher {
            launcher.0.emit(());
        }
    });

    html! {
        <section class="section section-dark">
            <style>
                {r#"
                    .awards-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .awards-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .awards-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .award-card {
                        background: #1C1C1C;
                        padding: 2rem;
                        border-radius: 1rem;
                        text-align: center;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .award-card:hover {
                        background: #2A2A2A;
                        transform: translateY(-10px);
                    }
                    .award-icon {
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
                    .award-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 0.5rem;
                    }
                    .award-org { color: #9ca3af; font-weight: 500; }
                    .award-year { color: #D4AF37; font-weight: 700; margin-bottom: 1rem; }
                    .award-card > p {
                        color: #d1d5db;
                        font-size: 0.875rem;
                        line-height: 1.7;
                    }
                    .awards-cta {
                        margin-top: 4rem;
                        text-align: center;
                    }
                    .awards-cta-card {
                        display: inline-block;
                        background: #1C1C1C;
                        padding: 2rem;
                        border-radius: 1rem;
                        max-width: 42rem;
                    }
                    .awards-cta-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 1rem;
                    }
                    .awards-cta-card p { color: #d1d5db; margin-bottom: 1.5rem; }
                "#}
            </style>
            <div class="container">
                <div class="section-heading reveal">
                    <h2>{"Awards & "}<span class="gold">{"Recognition"}</span></h2>
                    <p>{"Our commitment to excellence has been recognized by industry leaders and publications"}</p>
                </div>

                <div class="awards-grid">
                    { for AWARDS.iter().map(|(icon, title, org, year, description)| html! {
                        <div class="award-card reveal">
                            <div class="award-icon">{ icon }</div>
                            <h3>{ title }</h3>
                            <p class="award-org">{ org }</p>
                            <p class="award-year">{ year }</p>
                            <p>{ description }</p>
                        </div>
                    }) }
                </div>

                <div class="awards-cta reveal">
                    <div class="awards-cta-card">
                        <h3>{"Ready to Create Award-Winning Spaces?"}</h3>
                        <p>
                            {"Join our list of satisfied clients and experience the design \
                              excellence that has earned us industry recognition."}
                        </p>
                        <button class="btn-gold" onclick={start}>
                            {"Start Your Award-Worthy Project"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
