use gloo_console::log;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::ToastMessage;
use crate::wizard::relay::send_lead;
use crate::wizard::scroll_lock::ScrollLock;
use crate::wizard::state::{Floorplan, Purpose, QuantityItem, Step, Submission, WizardState};
use crate::wizard::store::SharedFlags;

/// How long the failed submit button stays inert before turning actionable
/// again.
const FAILURE_RESET_MS: u32 = 1_500;

pub enum PopupMsg {
    PickFloorplan(Floorplan),
    PickPurpose(Purpose),
    SetKitchen(bool),
    Increment(QuantityItem),
    Decrement(QuantityItem),
    SetName(String),
    SetMobile(String),
    Next,
    Back,
    Submit,
    Delivered(Result<(), crate::wizard::relay::SendError>),
    ClearFailure,
    Close,
}

#[derive(Properties, PartialEq)]
pub struct PopupProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_toast: Callback<ToastMessage>,
    pub flags: SharedFlags,
}

/// The three-step quote wizard. Owns a [`WizardState`] and maps UI events
/// onto its transitions; everything async funnels back through `Delivered`.
pub struct LeadPopup {
    wizard: WizardState,
    lock: Option<ScrollLock>,
    reset_timer: Option<Timeout>,
}

impl Component for LeadPopup {
    type Message = PopupMsg;
    type Properties = PopupProps;

    fn create(ctx: &Context<Self>) -> Self {
        LeadPopup {
            wizard: WizardState::new(),
            lock: ctx.props().open.then(ScrollLock::engage),
            reset_timer: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let open = ctx.props().open;
        if open && !old_props.open {
            // Every presentation starts from defaults; nothing leaks from a
            // dismissed run.
            self.wizard = WizardState::new();
            self.lock = Some(ScrollLock::engage());
        }
        if !open {
            self.lock = None;
            self.reset_timer = None;
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if !ctx.props().open {
            // A send resolving after close lands here and is dropped; a
            // closed wizard is never mutated.
            return false;
        }

        match msg {
            PopupMsg::PickFloorplan(floorplan) => {
                self.wizard.select_floorplan(floorplan);
                true
            }
            PopupMsg::PickPurpose(purpose) => {
                self.wizard.select_purpose(purpose);
                true
            }
            PopupMsg::SetKitchen(on) => {
                self.wizard.requirements.set_kitchen(on);
                true
            }
            PopupMsg::Increment(item) => {
                self.wizard.requirements.increment(item);
                true
            }
            PopupMsg::Decrement(item) => {
                self.wizard.requirements.decrement(item);
                true
            }
            PopupMsg::SetName(name) => {
                self.wizard.set_name(name);
                true
            }
            PopupMsg::SetMobile(mobile) => {
                self.wizard.set_mobile(mobile);
                true
            }
            PopupMsg::Next => {
                self.wizard.advance();
                true
            }
            PopupMsg::Back => {
                self.wizard.retreat();
                true
            }
            PopupMsg::Submit => {
                // None when the guard fails or a send is already in flight.
                if let Some(lead) = self.wizard.begin_submit() {
                    ctx.link()
                        .send_future(async move { PopupMsg::Delivered(send_lead(&lead).await) });
                }
                true
            }
            PopupMsg::Delivered(Ok(())) => {
                self.wizard.submit_succeeded();
                ctx.props().flags.mark();
                ctx.props()
                    .on_toast
                    .emit(ToastMessage::success("Quote requested! We'll call you soon."));
                ctx.props().on_close.emit(());
                true
            }
            PopupMsg::Delivered(Err(err)) => {
                log!(format!("lead dispatch failed: {}", err));
                self.wizard.submit_failed();
                ctx.props()
                    .on_toast
                    .emit(ToastMessage::error("Could not send. Please try again."));
                let link = ctx.link().clone();
                self.reset_timer = Some(Timeout::new(FAILURE_RESET_MS, move || {
                    link.send_message(PopupMsg::ClearFailure)
                }));
                true
            }
            PopupMsg::ClearFailure => {
                self.wizard.clear_submission();
                self.reset_timer = None;
                true
            }
            PopupMsg::Close => {
                // Dismissal counts as seen for this session.
                ctx.props().flags.mark();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().open {
            return html! {};
        }

        let close = ctx.link().callback(|_: MouseEvent| PopupMsg::Close);

        html! {
            <div class="quote-overlay">
                { self.style() }
                <div class="quote-card">
                    <button class="quote-close" onclick={close} aria-label="Close">{"✕"}</button>
                    <header class="quote-header">
                        <h2>
                            { match self.wizard.step {
                                Step::Selection => "Personalized Interior Design Quote in Minutes",
                                Step::Requirements => "Tell Us What You Need",
                                Step::Contact => "Almost Done!",
                            } }
                        </h2>
                        <p class="quote-step-count">{ format!("STEP {} OF 3", self.wizard.step.number()) }</p>
                    </header>

                    <div class="quote-body">
                        { match self.wizard.step {
                            Step::Selection => self.view_selection(ctx),
                            Step::Requirements => self.view_requirements(ctx),
                            Step::Contact => self.view_contact(ctx),
                        } }
                    </div>

                    <footer class="quote-footer">
                        { self.view_back_button(ctx) }
                        { self.view_forward_button(ctx) }
                    </footer>
                </div>
            </div>
        }
    }
}

impl LeadPopup {
    fn view_selection(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <section>
                    <h3>{"Your floorplan"}</h3>
                    <p class="quote-required">{"Required*"}</p>
                    <div class="quote-grid quote-grid-4">
                        { for Floorplan::ALL.iter().map(|&floorplan| {
                            let selected = self.wizard.floorplan == Some(floorplan);
                            let onclick = ctx.link().callback(move |_| PopupMsg::PickFloorplan(floorplan));
                            html! {
                                <button
                                    class={classes!("quote-choice", selected.then_some("selected"))}
                                    {onclick}
                                >
                                    { floorplan.label() }
                                </button>
                            }
                        }) }
                    </div>
                </section>

                <section>
                    <h3>{"Purpose"}</h3>
                    <p class="quote-required">{"Required*"}</p>
                    <div class="quote-grid quote-grid-3">
                        { for Purpose::ALL.iter().map(|&purpose| {
                            let selected = self.wizard.purpose == Some(purpose);
                            let onclick = ctx.link().callback(move |_| PopupMsg::PickPurpose(purpose));
                            html! {
                                <button
                                    class={classes!("quote-choice", selected.then_some("selected"))}
                                    {onclick}
                                >
                                    { purpose.label() }
                                </button>
                            }
                        }) }
                    </div>
                </section>
            </>
        }
    }

    fn view_requirements(&self, ctx: &Context<Self>) -> Html {
        let floorplan = self
            .wizard
            .floorplan
            .map(Floorplan::label)
            .unwrap_or_default();

        let kitchen_toggle = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            PopupMsg::SetKitchen(input.checked())
        });

        html! {
            <div class="quote-requirements">
                <div class="quote-requirement-list">
                    <h3>{ format!("Your requirements for {}", floorplan) }</h3>

                    <div class="quote-row">
                        <span>{"Kitchen"}</span>
                        <input
                            type="checkbox"
                            checked={self.wizard.requirements.kitchen}
                            onchange={kitchen_toggle}
                        />
                    </div>

                    { for QuantityItem::ALL.iter().map(|&item| {
                        let dec = ctx.link().callback(move |_| PopupMsg::Decrement(item));
                        let inc = ctx.link().callback(move |_| PopupMsg::Increment(item));
                        html! {
                            <div class="quote-row">
                                <span>{ item.label() }</span>
                                <div class="quote-stepper">
                                    <button onclick={dec} aria-label="Fewer">{"−"}</button>
                                    <span>{ self.wizard.requirements.quantity(item) }</span>
                                    <button onclick={inc} aria-label="More">{"+"}</button>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="quote-aside">
                    <h4>{"Other Interior Products"}</h4>
                    <p>
                        {"Get interiors done for living, study & foyer areas along with \
                          false ceilings, painting and modular furniture."}
                    </p>
                </div>
            </div>
        }
    }

    fn view_contact(&self, ctx: &Context<Self>) -> Html {
        let on_name = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            PopupMsg::SetName(input.value())
        });
        let on_mobile = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            PopupMsg::SetMobile(input.value())
        });

        html! {
            <div class="quote-contact">
                <div>
                    <input
                        type="text"
                        placeholder="Your Name"
                        value={self.wizard.name.clone()}
                        oninput={on_name}
                    />
                    if self.wizard.name.trim().is_empty() {
                        <p class="quote-hint">{"This field is required."}</p>
                    }
                </div>
                <div>
                    <input
                        type="tel"
                        placeholder="Mobile Number"
                        value={self.wizard.mobile.clone()}
                        oninput={on_mobile}
                    />
                    if self.wizard.mobile.trim().len() < 8 {
                        <p class="quote-hint">{"Please enter a valid mobile number."}</p>
                    }
                </div>
                <p class="quote-note">{"We'll contact you only about this quote."}</p>
            </div>
        }
    }

    fn view_back_button(&self, ctx: &Context<Self>) -> Html {
        if self.wizard.step == Step::Selection {
            return html! { <span></span> };
        }
        let back = ctx.link().callback(|_| PopupMsg::Back);
        html! { <button class="quote-back" onclick={back}>{"Back"}</button> }
    }

    fn view_forward_button(&self, ctx: &Context<Self>) -> Html {
        match self.wizard.step {
            Step::Contact => {
                let sending = self.wizard.submission == Submission::Sending;
                let disabled = !self.wizard.contact_complete() || sending;
                let submit = ctx.link().callback(|_| PopupMsg::Submit);
                html! {
                    <button class="quote-forward" onclick={submit} {disabled}>
                        { if sending { "Sending…" } else { "Submit" } }
                    </button>
                }
            }
            step => {
                let disabled = !self.wizard.can_advance();
                let next = ctx.link().callback(|_| PopupMsg::Next);
                html! {
                    <button class="quote-forward" onclick={next} {disabled}>
                        { if step == Step::Selection { "Proceed" } else { "Next" } }
                    </button>
                }
            }
        }
    }

    fn style(&self) -> Html {
        html! {
            <style>
                {r#"
                    .quote-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 90;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(4px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0 0.5rem;
                    }
                    .quote-card {
                        position: relative;
                        width: 100%;
                        max-width: 36rem;
                        background: #1C1C1C;
                        color: #fff;
                        border-radius: 0.5rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        overflow: hidden;
                        animation: quote-drop 0.3s ease-out;
                    }
                    @keyframes quote-drop {
                        from { transform: translateY(-40px) scale(0.9); opacity: 0; }
                        to { transform: translateY(0) scale(1); opacity: 1; }
                    }
                    .quote-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        color: #9ca3af;
                        font-size: 1rem;
                    }
                    .quote-close:hover { color: #fff; }
                    .quote-header {
                        padding: 1.5rem 1.5rem 1rem;
                        border-bottom: 1px solid #374151;
                        text-align: center;
                    }
                    .quote-header h2 { font-size: 1.125rem; font-weight: 600; }
                    .quote-step-count {
                        font-size: 0.75rem;
                        color: #9ca3af;
                        margin-top: 0.25rem;
                    }
                    .quote-body {
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .quote-body h3 { font-weight: 500; }
                    .quote-required {
                        font-size: 0.75rem;
                        font-weight: 300;
                        color: #dc2626;
                        margin-bottom: 0.75rem;
                    }
                    .quote-grid { display: grid; gap: 0.5rem; }
                    .quote-grid-4 { grid-template-columns: repeat(4, 1fr); }
                    .quote-grid-3 { grid-template-columns: repeat(3, 1fr); }
                    @media (max-width: 640px) {
                        .quote-grid-4 { grid-template-columns: repeat(2, 1fr); }
                    }
                    .quote-choice {
                        padding: 0.5rem 0;
                        border-radius: 0.375rem;
                        border: 1px solid #D4AF37;
                        background: transparent;
                        color: #D4AF37;
                        transition: background 0.2s ease;
                    }
                    .quote-choice:hover { background: rgba(212, 175, 55, 0.1); }
                    .quote-choice.selected {
                        background: #D4AF37;
                        color: #000;
                    }
                    .quote-requirements {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    @media (max-width: 640px) {
                        .quote-requirements { grid-template-columns: 1fr; }
                        .quote-aside { display: none; }
                    }
                    .quote-requirement-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .quote-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        border-bottom: 1px solid #374151;
                        padding-bottom: 0.5rem;
                    }
                    .quote-row input[type="checkbox"] {
                        height: 1.25rem;
                        width: 1.25rem;
                        accent-color: #D4AF37;
                    }
                    .quote-stepper {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .quote-stepper button {
                        padding: 0.1rem 0.5rem;
                        border: 1px solid #D4AF37;
                        border-radius: 0.25rem;
                        color: #D4AF37;
                        background: transparent;
                    }
                    .quote-stepper button:hover { background: rgba(212, 175, 55, 0.1); }
                    .quote-aside {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        gap: 0.5rem;
                    }
                    .quote-aside p { font-size: 0.75rem; color: #9ca3af; }
                    .quote-contact {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .quote-contact input {
                        width: 100%;
                        background: transparent;
                        border: none;
                        border-bottom: 1px solid #D4AF37;
                        padding: 0.5rem 0;
                        color: #fff;
                        font-size: 1rem;
                    }
                    .quote-contact input::placeholder { color: #9ca3af; }
                    .quote-contact input:focus { outline: none; }
                    .quote-hint {
                        color: #ef4444;
                        font-size: 0.75rem;
                        margin-top: 0.25rem;
                    }
                    .quote-note { font-size: 0.75rem; color: #6b7280; }
                    .quote-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 1.5rem;
                        border-top: 1px solid #374151;
                    }
                    .quote-back {
                        padding: 0.5rem 1.5rem;
                        border-radius: 0.375rem;
                        border: 1px solid #D4AF37;
                        color: #D4AF37;
                        background: transparent;
                    }
                    .quote-back:hover { background: rgba(212, 175, 55, 0.1); }
                    .quote-forward {
                        padding: 0.5rem 1.5rem;
                        border-radius: 0.375rem;
                        border: none;
                        background: #D4AF37;
                        color: #000;
                        font-weight: 600;
                    }
                    .quote-forward:hover:not(:disabled) { background: #cfa12e; }
                    .quote-forward:disabled {
                        background: #6b7280;
                        color: #d1d5db;
                        cursor: not-allowed;
                    }
                "#}
            </style>
        }
    }
}
