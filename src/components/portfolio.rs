use yew::prelude::*;

struct PortfolioItem {
    title: &'static str,
    category: &'static str,
    image: &'static str,
    description: &'static str,
}

const ITEMS: [PortfolioItem; 4] = [
    PortfolioItem {
        title: "Luxury Penthouse Living",
        category: "Residential",
        image: "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=1200&h=800&fit=crop",
        description: "A sophisticated penthouse design featuring panoramic city views and \
                      contemporary luxury finishes.",
    },
    PortfolioItem {
        title: "Modern Kitchen Excellence",
        category: "Kitchen Design",
        image: "https://images.pexels.com/photos/1571453/pexels-photo-1571453.jpeg?auto=compress&cs=tinysrgb&w=1200&h=800&fit=crop",
        description: "Custom kitchen design with premium appliances and innovative storage \
                      solutions.",
    },
    PortfolioItem {
        title: "Executive Office Suite",
        category: "Commercial",
        image: "https://images.pexels.com/photos/1571468/pexels-photo-1571468.jpeg?auto=compress&cs=tinysrgb&w=1200&h=800&fit=crop",
        description: "Professional workspace designed for productivity and client impressions.",
    },
    PortfolioItem {
        title: "Boutique Hotel Lobby",
        category: "Hospitality",
        image: "https://images.pexels.com/photos/1709003/pexels-photo-1709003.jpeg?auto=compress&cs=tinysrgb&w=1200&h=800&fit=crop",
        description: "Welcoming hotel lobby with contemporary design and local cultural \
                      influences.",
    },
];

/// Featured-project slider; manual navigation only, wraps around.
#[function_component(PortfolioShowcase)]
pub fn portfolio_showcase() -> Html {
    let index = use_state(|| 0usize);

    let next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((*index + 1) % ITEMS.len()))
    };
    let prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((*index + ITEMS.len() - 1) % ITEMS.len()))
    };

    let current = &ITEMS[*index];

    html! {
        <section class="section section-charcoal">
            <style>
                {r#"
                    .portfolio-frame {
                        position: relative;
                        border-radius: 1rem;
                        overflow: hidden;
                        height: 24rem;
                    }
                    @media (min-width: 768px) {
                        .portfolio-frame { height: 31rem; }
                    }
                    .portfolio-slide {
                        position: absolute;
                        inset: 0;
                        animation: portfolio-in 0.5s ease;
                    }
                    @keyframes portfolio-in {
                        from { opacity: 0; transform: translateX(60px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .portfolio-slide img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .portfolio-slide-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.85), transparent 60%);
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 2rem;
                    }
                    .portfolio-category {
                        color: #D4AF37;
                        font-weight: 600;
                        font-size: 0.875rem;
                        margin-bottom: 0.25rem;
                    }
                    .portfolio-slide-overlay h3 {
                        font-size: 1.75rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .portfolio-slide-overlay p {
                        color: #d1d5db;
                        max-width: 36rem;
                    }
                    .portfolio-nav button {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        border: none;
                        background: rgba(0, 0, 0, 0.6);
                        color: #D4AF37;
                        font-size: 1.5rem;
                        z-index: 10;
                    }
                    .portfolio-nav button:hover { background: rgba(0, 0, 0, 0.85); }
                    .portfolio-nav .prev { left: 1rem; }
                    .portfolio-nav .next { right: 1rem; }
                    .portfolio-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                    }
                    .portfolio-dots button {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        border: none;
                        background: #374151;
                    }
                    .portfolio-dots button.active { background: #D4AF37; }
                "#}
            </style>
            <div class="container">
                <div class="section-heading reveal">
                    <h2>{"Portfolio "}<span class="gold">{"Showcase"}</span></h2>
                    <p>{"Explore our most celebrated projects that showcase our design expertise and attention to detail"}</p>
                </div>

                <div class="portfolio-frame reveal">
                    <div class="portfolio-slide" key={*index}>
                        <img src={current.image} alt={current.title} />
                        <div class="portfolio-slide-overlay">
                            <span class="portfolio-category">{ current.category }</span>
                            <h3>{ current.title }</h3>
                            <p>{ current.description }</p>
                        </div>
                    </div>
                    <div class="portfolio-nav">
                        <button class="prev" onclick={prev} aria-label="Previous project">{"‹"}</button>
                        <button class="next" onclick={next} aria-label="Next project">{"›"}</button>
                    </div>
                </div>

                <div class="portfolio-dots">
                    { for (0..ITEMS.len()).map(|i| {
                        let active = i == *index;
                        let index = index.clone();
                        let onclick = Callback::from(move |_| index.set(i));
                        html! {
                            <button
                                class={classes!(active.then_some("active"))}
                                {onclick}
                                aria-label={format!("Project {}", i + 1)}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
