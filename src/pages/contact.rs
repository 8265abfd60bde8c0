use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::faq::FaqSection;
use crate::components::reveal;

const INFO_CARDS: [(&str, &str, &str, &str); 4] = [
    ("📞", "Phone", "9345921521", "Call us for immediate assistance"),
    (
        "✉",
        "Email",
        "contact@homesphereinterior.com",
        "Send us your design inquiries",
    ),
    (
        "📍",
        "Address",
        "No.30/39A, First Street, New bangaru colony, west KK.Nagar Chennai - 600078",
        "Visit our showroom by appointment",
    ),
    ("🕘", "Hours", "Mon - Sun: 9AM - 7PM", "Saturday consultations available"),
];

const SERVICE_OPTIONS: [&str; 8] = [
    "Interior Design",
    "Modular Kitchen",
    "Complete Renovation",
    "Custom Furniture",
    "Lighting Design",
    "Space Planning",
    "Commercial Design",
    "Other",
];

#[function_component(Contact)]
pub fn contact() -> Html {
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

    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);
    let submitted = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let on_submit = {
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submitted.set(true);
            let submitted = submitted.clone();
            Timeout::new(3_000, move || submitted.set(false)).forget();
        })
    };

    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-page { padding-top: 4rem; }
                    .contact-hero h1 {
                        font-size: clamp(3rem, 6vw, 3.75rem);
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .contact-info-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .contact-info-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .contact-info-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .contact-info-card {
                        background: #000;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        text-align: center;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .contact-info-card:hover {
                        background: #2A2A2A;
                        transform: translateY(-5px);
                    }
                    .contact-info-card .icon {
                        background: #D4AF37;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        margin: 0 auto 1rem;
                    }
                    .contact-info-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 0.5rem;
                    }
                    .contact-info-card .details {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .contact-info-card .hint {
                        color: #9ca3af;
                        font-size: 0.875rem;
                    }
                    .contact-columns {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                    @media (min-width: 1024px) {
                        .contact-columns { grid-template-columns: 1fr 1fr; }
                    }
                    .contact-form h2 {
                        font-size: clamp(1.875rem, 4vw, 2.25rem);
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 1.5rem;
                    }
                    .contact-form > p {
                        color: #d1d5db;
                        margin-bottom: 2rem;
                        line-height: 1.7;
                    }
                    .contact-form form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form-row {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .contact-form-row { grid-template-columns: 1fr 1fr; }
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #d1d5db;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        background: #1C1C1C;
                        border: 1px solid #4b5563;
                        border-radius: 0.5rem;
                        color: #fff;
                        font-size: 1rem;
                        transition: border-color 0.3s ease;
                    }
                    .contact-form input:focus,
                    .contact-form select:focus,
                    .contact-form textarea:focus {
                        border-color: #D4AF37;
                        outline: none;
                    }
                    .contact-form button[type="submit"] {
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        font-size: 1.125rem;
                        background: #D4AF37;
                        color: #000;
                        transition: background 0.3s ease;
                    }
                    .contact-form button[type="submit"]:hover { background: #B8941F; }
                    .contact-form button.sent {
                        background: #16a34a;
                        color: #fff;
                    }
                    .contact-panel {
                        background: #1C1C1C;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        margin-bottom: 2rem;
                    }
                    .contact-panel h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #D4AF37;
                        margin-bottom: 1rem;
                    }
                    .contact-panel p { color: #d1d5db; margin-bottom: 1rem; }
                    .contact-panel-item {
                        border-bottom: 1px solid #4b5563;
                        padding-bottom: 1rem;
                        margin-bottom: 1rem;
                    }
                    .contact-panel-item:last-child {
                        border-bottom: none;
                        margin-bottom: 0;
                        padding-bottom: 0;
                    }
                    .contact-panel-item h4 {
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .contact-panel-item p {
                        color: #d1d5db;
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .call-band {
                        background: #D4AF37;
                        padding: 3rem 0;
                        text-align: center;
                        color: #000;
                    }
                    .call-band h2 {
                        font-size: clamp(1.5rem, 4vw, 1.875rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .call-band p { margin-bottom: 1.5rem; opacity: 0.8; }
                    .call-band a {
                        display: inline-block;
                        background: #000;
                        color: #D4AF37;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        font-weight: 700;
                        font-size: 1.125rem;
                        transition: background 0.3s ease;
                    }
                    .call-band a:hover { background: #111827; }
                "#}
            </style>

            <section class="section section-charcoal">
                <div class="container">
                    <div class="section-heading contact-hero reveal">
                        <h1>{"Get In "}<span class="gold">{"Touch"}</span></h1>
                        <p>
                            {"Ready to transform your space? Let's discuss your project and bring \
                              your vision to life. We're here to help every step of the way."}
                        </p>
                    </div>

                    <div class="contact-info-grid reveal">
                        { for INFO_CARDS.iter().map(|(icon, title, details, hint)| html! {
                            <div class="contact-info-card">
                                <div class="icon">{ icon }</div>
                                <h3>{ title }</h3>
                                <p class="details">{ details }</p>
                                <p class="hint">{ hint }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <div class="contact-columns">
                        <div class="contact-form reveal">
                            <h2>{"Send Us a Message"}</h2>
                            <p>
                                {"Fill out the form below and we'll get back to you within 24 \
                                  hours. We're excited to learn about your project!"}
                            </p>

                            <form onsubmit={on_submit}>
                                <div class="contact-form-row">
                                    <div>
                                        <label for="name">{"Full Name *"}</label>
                                        <input
                                            type="text"
                                            id="name"
                                            required={true}
                                            placeholder="Your full name"
                                            value={(*name).clone()}
                                            oninput={on_name}
                                        />
                                    </div>
                                    <div>
                                        <label for="email">{"Email Address *"}</label>
                                        <input
                                            type="email"
                                            id="email"
                                            required={true}
                                            placeholder="your.email@example.com"
                                            value={(*email).clone()}
                                            oninput={on_email}
                                        />
                                    </div>
                                </div>

                                <div class="contact-form-row">
                                    <div>
                                        <label for="phone">{"Phone Number"}</label>
                                        <input
                                            type="tel"
                                            id="phone"
                                            placeholder="(555) 123-4567"
                                            value={(*phone).clone()}
                                            oninput={on_phone}
                                        />
                                    </div>
                                    <div>
                                        <label for="service">{"Service Interested In *"}</label>
                                        <select id="service" required={true} onchange={on_service}>
                                            <option value="" selected={service.is_empty()}>
                                                {"Select a service"}
                                            </option>
                                            { for SERVICE_OPTIONS.iter().map(|option| html! {
                                                <option
                                                    value={*option}
                                                    selected={*service == *option}
                                                >
                                                    { *option }
                                                </option>
                                            }) }
                                        </select>
                                    </div>
                                </div>

                                <div>
                                    <label for="message">{"Project Details *"}</label>
                                    <textarea
                                        id="message"
                                        required={true}
                                        rows="6"
                                        placeholder="Tell us about your project, timeline, budget range, and any specific requirements..."
                                        value={(*message).clone()}
                                        oninput={on_message}
                                    />
                                </div>

                                <button
                                    type="submit"
                                    class={classes!((*submitted).then_some("sent"))}
                                    disabled={*submitted}
                                >
                                    { if *submitted { "✓ Message Sent!" } else { "Send Message" } }
                                </button>
                            </form>
                        </div>

                        <div class="reveal">
                            <div class="contact-panel">
                                <h3>{"Visit Our Showroom"}</h3>
                                <p>
                                    {"Located in the heart of the design district, our showroom \
                                      features the latest in interior design trends, materials, \
                                      and finishes. Schedule an appointment to explore our \
                                      displays and meet with our design team."}
                                </p>
                                <a class="btn-outline" href="tel:9345921521">
                                    {"Schedule Showroom Visit"}
                                </a>
                            </div>

                            <div class="contact-panel">
                                <h3>{"Quick Contact"}</h3>
                                <div class="contact-panel-item">
                                    <h4>{"Need immediate assistance?"}</h4>
                                    <p>
                                        {"Call us directly at 9345921521 for urgent project \
                                          matters or emergency consultations."}
                                    </p>
                                </div>
                                <div class="contact-panel-item">
                                    <h4>{"Want to schedule a consultation?"}</h4>
                                    <p>
                                        {"Email us at contact@homesphereinterior.com or use the \
                                          form to request a free consultation."}
                                    </p>
                                </div>
                                <div class="contact-panel-item">
                                    <h4>{"Looking for inspiration?"}</h4>
                                    <p>
                                        {"Follow us on social media for daily design inspiration \
                                          and behind-the-scenes content."}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <FaqSection />

            <section class="call-band">
                <div class="container">
                    <h2>{"Need Immediate Assistance?"}</h2>
                    <p>{"For urgent project matters or emergency consultations, call us directly."}</p>
                    <a href="tel:9345921521">{"Call Now: 93459 21521"}</a>
                </div>
            </section>
        </div>
    }
}
