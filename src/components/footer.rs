use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const QUICK_LINKS: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("About", Route::About),
    ("Services", Route::Services),
    ("Projects", Route::Projects),
    ("Contact", Route::Contact),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #1C1C1C;
                        padding: 3rem 0;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .footer-grid { grid-template-columns: 2fr 1fr 1fr; }
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .footer-brand-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: #D4AF37;
                        color: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                    }
                    .footer-brand span.name {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #D4AF37;
                    }
                    .footer-blurb {
                        color: #d1d5db;
                        max-width: 28rem;
                        margin-bottom: 1.5rem;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-social a {
                        color: #9ca3af;
                        transition: color 0.2s ease;
                    }
                    .footer-social a:hover { color: #D4AF37; }
                    .site-footer h3 {
                        color: #D4AF37;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-links {
                        list-style: none;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .footer-links a {
                        color: #d1d5db;
                        transition: color 0.2s ease;
                    }
                    .footer-links a:hover { color: #D4AF37; }
                    .footer-contact {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        color: #d1d5db;
                    }
                    .footer-bottom {
                        border-top: 1px solid #374151;
                        margin-top: 2rem;
                        padding-top: 2rem;
                        text-align: center;
                        color: #9ca3af;
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <span class="footer-brand-mark">{"H"}</span>
                            <span class="name">{"Home Sphere"}</span>
                        </div>
                        <p class="footer-blurb">
                            {"Creating exceptional interior spaces that reflect your unique style \
                              and enhance your lifestyle. From concept to completion, we bring \
                              your vision to life."}
                        </p>
                        <div class="footer-social">
                            <a href="#" aria-label="Facebook">{"Facebook"}</a>
                            <a href="https://www.instagram.com/homesphere_interior/" aria-label="Instagram">{"Instagram"}</a>
                            <a href="https://wa.me/message/YHZPUJVJDLFNJ1" aria-label="WhatsApp">{"WhatsApp"}</a>
                        </div>
                    </div>

                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer-links">
                            { for QUICK_LINKS.iter().map(|(label, route)| html! {
                                <li>
                                    <Link<Route> to={route.clone()}>{ *label }</Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3>{"Contact"}</h3>
                        <div class="footer-contact">
                            <span>{"No.30/39A KK.Nagar Chennai - 600078"}</span>
                            <span>{"9345921521"}</span>
                            <span>{"contact@homesphereinterior.com"}</span>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>
                        { format!("© {} Home Sphere. All rights reserved. Crafted with passion for exceptional design.", year) }
                    </p>
                </div>
            </div>
        </footer>
    }
}
