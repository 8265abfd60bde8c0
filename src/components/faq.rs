use yew::prelude::*;

const FAQS: [(&str, &str); 6] = [
    (
        "How long does a typical interior design project take?",
        "Project timelines vary based on scope and complexity. A single room typically takes \
         6-8 weeks, while full home renovations can take 12-20 weeks. We provide detailed \
         timelines during the consultation phase and keep you updated throughout the process.",
    ),
    (
        "Do you work within specific budget ranges?",
        "We work with a variety of budgets and will discuss your investment range during our \
         initial consultation. Our goal is to maximize value and create beautiful spaces \
         regardless of budget size. We're transparent about costs and provide detailed \
         estimates upfront.",
    ),
    (
        "Can you work with my existing furniture and decor?",
        "Absolutely! We love incorporating pieces that have sentimental value or that you \
         simply love. Our designers are skilled at blending existing items with new elements \
         to create a cohesive, personalized space that reflects your style.",
    ),
    (
        "Do you provide 3D renderings of the design?",
        "Yes, 3D renderings are included in our Premium and Luxury packages. These detailed \
         visualizations help you see exactly how your space will look before any work begins, \
         allowing for adjustments and ensuring you're completely satisfied with the design.",
    ),
    (
        "What happens if I'm not satisfied with the design?",
        "Client satisfaction is our top priority. We include multiple revision rounds in all \
         our packages and work closely with you throughout the process. If you're not \
         completely satisfied, we'll continue refining the design until it meets your \
         expectations.",
    ),
    (
        "Do you handle permits and contractor coordination?",
        "Yes, we manage all aspects of the project including permits, contractor coordination, \
         and project management. Our team has established relationships with trusted \
         contractors and handles all the logistics so you can focus on the exciting parts of \
         your transformation.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{ &props.question }</span>
                <span class="faq-toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    <p>{ &props.answer }</p>
                </div>
            }
        </div>
    }
}

/// Accordion of common questions; at most one answer open at a time.
#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section class="section section-dark">
            <style>
                {r#"
                    .faq-list {
                        max-width: 56rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .faq-item {
                        background: #1C1C1C;
                        border-radius: 0.75rem;
                        overflow: hidden;
                    }
                    .faq-question {
                        width: 100%;
                        padding: 1.5rem;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 600;
                        text-align: left;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        transition: background 0.3s ease;
                    }
                    .faq-question:hover { background: #2A2A2A; }
                    .faq-toggle-icon {
                        color: #D4AF37;
                        font-size: 1.5rem;
                        flex-shrink: 0;
                    }
                    .faq-answer {
                        padding: 0 1.5rem 1.5rem;
                        color: #d1d5db;
                        line-height: 1.7;
                        animation: faq-open 0.25s ease;
                    }
                    @keyframes faq-open {
                        from { opacity: 0; transform: translateY(-0.5rem); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-heading reveal">
                    <h2>{"Frequently Asked "}<span class="gold">{"Questions"}</span></h2>
                    <p>{"Get answers to common questions about our design process and services"}</p>
                </div>

                <div class="faq-list reveal">
                    { for FAQS.iter().enumerate().map(|(i, (question, answer))| {
                        let open_index = open_index.clone();
                        let open = *open_index == Some(i);
                        let on_toggle = Callback::from(move |_| {
                            open_index.set(if *open_index == Some(i) { None } else { Some(i) });
                        });
                        html! {
                            <FaqItem
                                question={*question}
                                answer={*answer}
                                {open}
                                {on_toggle}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
