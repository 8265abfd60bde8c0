use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    pub features: Vec<AttrValue>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card reveal">
            <style>
                {r#"
                    .service-card {
                        background: #1C1C1C;
                        padding: 2rem;
                        border-radius: 0.5rem;
                        display: flex;
                        flex-direction: column;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .service-card:hover {
                        background: #2A2A2A;
                        transform: translateY(-10px);
                    }
                    .service-card-icon {
                        background: #D4AF37;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .service-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 1rem;
                    }
                    .service-card > p {
                        color: #d1d5db;
                        margin-bottom: 1.5rem;
                        line-height: 1.6;
                    }
                    .service-card ul {
                        list-style: none;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .service-card li {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #d1d5db;
                    }
                    .service-card li::before {
                        content: '';
                        width: 0.5rem;
                        height: 0.5rem;
                        background: #D4AF37;
                        border-radius: 9999px;
                        flex-shrink: 0;
                    }
                "#}
            </style>
            <div class="service-card-icon">{ &props.icon }</div>
            <h3>{ &props.title }</h3>
            <p>{ &props.description }</p>
            <ul>
                { for props.features.iter().map(|feature| html! {
                    <li>{ feature }</li>
                }) }
            </ul>
        </div>
    }
}
