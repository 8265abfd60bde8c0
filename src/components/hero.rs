use yew::prelude::*;
use yew_router::prelude::*;

use crate::QuoteLauncher;
use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    let launcher = use_context::<QuoteLauncher>();
    let start_project = Callback::from(move |_: MouseEvent| {
        if let Some(launcher) = &launcher {
            launcher.0.emit(());
        }
    });

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background-image:
                            linear-gradient(rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.6)),
                            url('https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop');
                        background-size: cover;
                        background-position: center;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1rem;
                        animation: hero-rise 0.8s ease-out;
                    }
                    @keyframes hero-rise {
                        from { transform: translateY(50px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .hero-badge {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.25rem;
                        margin-bottom: 1.5rem;
                        color: #D4AF37;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 8vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 span {
                        display: block;
                        color: #D4AF37;
                    }
                    .hero-lede {
                        font-size: clamp(1.125rem, 3vw, 1.5rem);
                        color: #d1d5db;
                        max-width: 48rem;
                        margin: 0 auto 2rem;
                        line-height: 1.6;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .hero-scroll {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid #D4AF37;
                        border-radius: 9999px;
                        display: flex;
                        justify-content: center;
                    }
                    .hero-scroll::after {
                        content: '';
                        width: 0.25rem;
                        height: 0.75rem;
                        background: #D4AF37;
                        border-radius: 9999px;
                        margin-top: 0.5rem;
                        animation: hero-nudge 1.5s ease-in-out infinite;
                    }
                    @keyframes hero-nudge {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(0.6rem); }
                    }
                "#}
            </style>
            <div class="hero-content">
                <div class="hero-badge">
                    { for (0..5).map(|_| html! { <span>{"★"}</span> }) }
                    <span>{"Award-Winning Design"}</span>
                </div>
                <h1>
                    {"Transform Your"}
                    <span>{"Living Space"}</span>
                </h1>
                <p class="hero-lede">
                    {"Experience luxury interior design that reflects your personality and enhances \
                      your lifestyle. From concept to completion, we create spaces that inspire."}
                </p>
                <div class="hero-actions">
                    <button class="btn-gold" onclick={start_project}>
                        {"Start Your Project →"}
                    </button>
                    <Link<Route> to={Route::Projects} classes="btn-outline">
                        {"View Our Work"}
                    </Link<Route>>
                </div>
            </div>
            <div class="hero-scroll"></div>
        </section>
    }
}
