use gloo_timers::callback::Timeout;
use yew::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    image: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Homeowner",
        content: "Home Sphere transformed our living space beyond our wildest dreams. The \
                  attention to detail and creative vision exceeded all expectations.",
        image: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Business Owner",
        content: "Professional, innovative, and absolutely stunning results. Our office redesign \
                  has improved both productivity and client impressions dramatically.",
        image: "https://images.pexels.com/photos/697509/pexels-photo-697509.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
    Testimonial {
        name: "Emma Davis",
        role: "Interior Design Enthusiast",
        content: "The team's ability to blend luxury with functionality is remarkable. Every \
                  space feels both beautiful and perfectly livable.",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop",
    },
];

/// Rotating client quotes; advances on its own five seconds after the last
/// change and wraps in both directions.
#[function_component(TestimonialSlider)]
pub fn testimonial_slider() -> Html {
    let index = use_state(|| 0usize);

    {
        let value = index.clone();
        use_effect_with_deps(
            move |current: &usize| {
                let next = (current + 1) % TESTIMONIALS.len();
                let timeout = Timeout::new(5_000, move || value.set(next));
                move || drop(timeout)
            },
            *index,
        );
    }

    let next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((*index + 1) % TESTIMONIALS.len()))
    };
    let prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| {
            index.set((*index + TESTIMONIALS.len() - 1) % TESTIMONIALS.len())
        })
    };

    let current = &TESTIMONIALS[*index];

    html! {
        <section class="section section-charcoal">
            <style>
                {r#"
                    .testimonial-card {
                        background: #000;
                        padding: 3rem;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                        animation: testimonial-in 0.5s ease;
                    }
                    @media (min-width: 768px) {
                        .testimonial-card { flex-direction: row; text-align: left; }
                    }
                    @keyframes testimonial-in {
                        from { transform: translateX(60px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .testimonial-card img {
                        width: 6rem;
                        height: 6rem;
                        border-radius: 9999px;
                        object-fit: cover;
                        border: 4px solid #D4AF37;
                    }
                    .testimonial-stars { color: #D4AF37; margin-bottom: 1rem; }
                    .testimonial-card blockquote {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        font-style: italic;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .testimonial-name { font-weight: 700; color: #D4AF37; }
                    .testimonial-role { color: #9ca3af; font-size: 0.875rem; }
                    .testimonial-nav {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .testimonial-nav button {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        border: 1px solid #D4AF37;
                        background: transparent;
                        color: #D4AF37;
                        font-size: 1.25rem;
                        transition: background 0.2s ease;
                    }
                    .testimonial-nav button:hover {
                        background: #D4AF37;
                        color: #000;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-heading reveal">
                    <h2>{"What Our "}<span class="gold">{"Clients Say"}</span></h2>
                    <p>{"Real stories from satisfied customers"}</p>
                </div>

                <div class="testimonial-card" key={*index}>
                    <img src={current.image} alt={current.name} />
                    <div>
                        <div class="testimonial-stars">{"★★★★★"}</div>
                        <blockquote>{ format!("\u{201c}{}\u{201d}", current.content) }</blockquote>
                        <div class="testimonial-name">{ current.name }</div>
                        <div class="testimonial-role">{ current.role }</div>
                    </div>
                </div>

                <div class="testimonial-nav">
                    <button onclick={prev} aria-label="Previous testimonial">{"‹"}</button>
                    <button onclick={next} aria-label="Next testimonial">{"›"}</button>
                </div>
            </div>
        </section>
    }
}
