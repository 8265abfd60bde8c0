use yew::prelude::*;

const SERVICES: [(&str, &str); 15] = [
    ("🍽", "Modular Kitchen"),
    ("📦", "Storage & Wardrobe"),
    ("🫖", "Crockery Units"),
    ("🪑", "Space-Saving Furniture"),
    ("🖥", "TV Units"),
    ("📐", "Study Tables"),
    ("🏗", "False Ceiling"),
    ("💡", "Lights"),
    ("🖼", "Wallpaper"),
    ("🖌", "Wall Paint"),
    ("🚿", "Bathroom"),
    ("🛕", "Pooja Unit"),
    ("🚪", "Foyer Designs"),
    ("🛋", "Movable Furniture"),
    ("🛏", "Kids Bedroom"),
];

/// Icon grid of every interior-work category on offer.
#[function_component(ServicesGrid)]
pub fn services_grid() -> Html {
    html! {
        <section class="section section-charcoal">
            <style>
                {r#"
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    @media (min-width: 640px) {
                        .services-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .services-grid { grid-template-columns: repeat(6, 1fr); }
                    }
                    .services-grid-item {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        background: #2A2A2A;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .services-grid-item:hover {
                        background: #333;
                        transform: translateY(-6px);
                    }
                    .services-grid-item .icon { font-size: 2rem; }
                    .services-grid-item span {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #e5e7eb;
                        text-align: center;
                    }
                "#}
            </style>
            <div class="container">
                <div class="services-grid reveal">
                    { for SERVICES.iter().map(|(icon, title)| html! {
                        <div class="services-grid-item">
                            <span class="icon">{ icon }</span>
                            <span>{ title }</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
