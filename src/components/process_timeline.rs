use yew::prelude::*;

const STEPS: [(&str, &str, &str); 5] = [
    (
        "💬",
        "Initial Consultation",
        "We discuss your vision, needs, lifestyle, and budget to understand your unique \
         requirements.",
    ),
    (
        "🎨",
        "Design Development",
        "Our team creates detailed designs, mood boards, and 3D renderings for your approval.",
    ),
    (
        "🛒",
        "Material Selection",
        "We help you choose the perfect materials, finishes, and furnishings for your project.",
    ),
    (
        "🔨",
        "Project Execution",
        "Our expert team manages the entire installation process with attention to every detail.",
    ),
    (
        "✨",
        "Final Styling",
        "We add the finishing touches that make your space truly complete and personalized.",
    ),
];

#[function_component(ProcessTimeline)]
pub fn process_timeline() -> Html {
    html! {
        <section class="section section-charcoal">
            <style>
                {r#"
                    .timeline {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        gap: 3rem;
                    }
                    @media (min-width: 1024px) {
                        .timeline::before {
                            content: '';
                            position: absolute;
                            left: 50%;
                            top: 0;
                            bottom: 0;
                            width: 2px;
                            background: #D4AF37;
                            transform: translateX(-50%);
                        }
                        .timeline-entry { width: calc(50% - 3rem); }
                        .timeline-entry:nth-child(even) { margin-left: auto; }
                    }
                    .timeline-entry {
                        background: #000;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #374151;
                        transition: border-color 0.3s ease;
                    }
                    .timeline-entry:hover { border-color: #D4AF37; }
                    .timeline-entry-head {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .timeline-entry-icon {
                        background: #D4AF37;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                        flex-shrink: 0;
                    }
                    .timeline-entry h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #D4AF37;
                    }
                    .timeline-entry p { color: #d1d5db; line-height: 1.7; }
                "#}
            </style>
            <div class="container">
                <div class="section-heading reveal">
                    <h2>{"Our Design "}<span class="gold">{"Process"}</span></h2>
                    <p>{"A proven methodology that ensures exceptional results from concept to completion"}</p>
                </div>

                <div class="timeline">
                    { for STEPS.iter().map(|(icon, title, description)| html! {
                        <div class="timeline-entry reveal">
                            <div class="timeline-entry-head">
                                <div class="timeline-entry-icon">{ icon }</div>
                                <h3>{ title }</h3>
                            </div>
                            <p>{ description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
