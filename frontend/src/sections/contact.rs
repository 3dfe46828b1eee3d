use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::cyber_button::{ButtonSize, ButtonVariant, CyberButton};
use crate::config;
use crate::hooks::{use_reveal, use_simulated_submit, SubmitPhase};

const MISSION_TYPES: &[(&str, &str)] = &[
    ("website", "New Website"),
    ("ecommerce", "E-Commerce Store"),
    ("webapp", "Web Application"),
    ("redesign", "Website Redesign"),
    ("optimization", "Performance Optimization"),
    ("other", "Other Mission"),
];

const BUDGETS: &[(&str, &str)] = &[
    ("5k", "$5,000 - $10,000"),
    ("10k", "$10,000 - $25,000"),
    ("25k", "$25,000 - $50,000"),
    ("50k", "$50,000+"),
];

const CHANNELS: &[(&str, &str, &str)] = &[
    ("💼", "LinkedIn", "#"),
    ("🐙", "GitHub", "#"),
    ("🐦", "Twitter", "#"),
    ("📧", "Email", config::PORTFOLIO_EMAIL),
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub project: String,
    pub budget: String,
    pub message: String,
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");

    let form = use_state(ContactForm::default);
    let (phase, submit) = use_simulated_submit("contact");

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        submit.emit(());
    });

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { name: input.value(), ..(*form).clone() });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { email: input.value(), ..(*form).clone() });
        })
    };
    let on_project = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ContactForm { project: select.value(), ..(*form).clone() });
        })
    };
    let on_budget = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ContactForm { budget: select.value(), ..(*form).clone() });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: area.value(), ..(*form).clone() });
        })
    };

    let body = if phase == SubmitPhase::Submitted {
        html! {
            <div class="success-panel hud-frame">
                <div class="trophy">{"🏆"}</div>
                <h3 class="font-display text-accent" style="font-size: 1.875rem;">{"MISSION ACCEPTED!"}</h3>
                <p class="text-muted" style="font-size: 1.125rem;">
                    {"Your briefing has been received. Expect a response within 24 hours."}
                </p>
                <div class="stars" style="justify-content: center; font-size: 1.5rem;">
                    { for (0..5).map(|i| html! {
                        <span key={i} style={format!("animation-delay: {:.1}s;", 0.5 + i as f32 * 0.1)}>{"⭐"}</span>
                    }) }
                </div>
            </div>
        }
    } else {
        html! {
            <form class={classes!("contact-form", "hud-frame", "reveal", in_view)} style="transition-delay: 0.2s;" {onsubmit}>
                <div class="form-grid">
                    <div class="field">
                        <label for="contact-name">{"OPERATIVE NAME *"}</label>
                        <input id="contact-name" type="text" required={true} placeholder="Enter your name"
                            value={form.name.clone()} oninput={on_name} />
                    </div>
                    <div class="field">
                        <label for="contact-email">{"COMM CHANNEL *"}</label>
                        <input id="contact-email" type="email" required={true} placeholder="your@email.com"
                            value={form.email.clone()} oninput={on_email} />
                    </div>
                    <div class="field">
                        <label for="contact-project">{"MISSION TYPE *"}</label>
                        <select id="contact-project" required={true} onchange={on_project}>
                            <option value="" selected={form.project.is_empty()}>{"Select mission type"}</option>
                            { for MISSION_TYPES.iter().map(|(value, label)| html! {
                                <option key={*value} value={*value} selected={form.project == *value}>{ *label }</option>
                            }) }
                        </select>
                    </div>
                    <div class="field">
                        <label for="contact-budget">{"RESOURCE ALLOCATION"}</label>
                        <select id="contact-budget" onchange={on_budget}>
                            <option value="" selected={form.budget.is_empty()}>{"Select budget range"}</option>
                            { for BUDGETS.iter().map(|(value, label)| html! {
                                <option key={*value} value={*value} selected={form.budget == *value}>{ *label }</option>
                            }) }
                        </select>
                    </div>
                </div>
                <div class="field" style="margin-bottom: 2rem;">
                    <label for="contact-message">{"MISSION BRIEFING *"}</label>
                    <textarea id="contact-message" rows="5" required={true}
                        placeholder="Describe your mission objectives, timeline, and any specific requirements..."
                        value={form.message.clone()} oninput={on_message} />
                </div>
                <div class="form-footer">
                    <p class="font-mono text-muted" style="font-size: 0.75rem;">{"* Required fields"}</p>
                    <CyberButton button_type="submit" variant={ButtonVariant::Primary} size={ButtonSize::Lg} glowing={true} disabled={phase.is_busy()}>
                        if phase.is_busy() {
                            <span class="spin">{"⚡"}</span>
                            {"TRANSMITTING..."}
                        } else {
                            {"🚀 LAUNCH PROJECT"}
                        }
                    </CyberButton>
                </div>
            </form>
        }
    };

    html! {
        <section id="contact" class="page-section">
            <style>
                {r#"
                .contact-vortex {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 800px;
                    height: 800px;
                    margin: -400px 0 0 -400px;
                    opacity: 0.1;
                    pointer-events: none;
                    background: conic-gradient(from 0deg, hsl(var(--primary)), hsl(var(--secondary)), hsl(var(--accent)), hsl(var(--primary)));
                    filter: blur(100px);
                    animation: spin 60s linear infinite;
                }
                .contact-skull { display: inline-block; font-size: 3.75rem; margin-bottom: 1rem; animation: breathe-slow 2s ease-in-out infinite; }
                @keyframes breathe-slow { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.1); } }
                .contact-form { padding: 2rem; }
                .channels { margin-top: 3rem; text-align: center; }
                .channels > p { font-family: var(--font-mono); font-size: 0.875rem; color: hsl(var(--muted-foreground)); margin-bottom: 1rem; }
                .channel-list { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }
                .channel-list a { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; padding: 1rem; border: 1px solid hsl(var(--hud)); background: hsl(var(--card) / 0.3); transition: all 0.3s; }
                .channel-list a:hover { transform: translateY(-5px) scale(1.1); border-color: hsl(var(--primary)); box-shadow: 0 0 12px hsl(var(--primary) / 0.4); }
                .channel-list .icon { font-size: 1.5rem; }
                .channel-list .label { font-family: var(--font-mono); font-size: 0.75rem; color: hsl(var(--muted-foreground)); }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.2;"></div>
            <div class="contact-vortex"></div>

            <div ref={node} class="section-inner narrow">
                <div class={classes!("section-header", "reveal", in_view)}>
                    <div class="contact-skull">{"💀"}</div>
                    <p class="section-eyebrow pulse" style="color: hsl(var(--destructive));">{"[ FINAL BOSS ENCOUNTER ]"}</p>
                    <h2 class="section-title">
                        <span class="text-foreground">{"START YOUR"}</span>
                        <br />
                        <span class="text-gradient neon-text">{"PROJECT"}</span>
                    </h2>
                    <p class="section-subtitle">{"Ready to level up? Submit your mission briefing below."}</p>
                </div>

                { body }

                <div class={classes!("channels", "reveal", in_view)} style="transition-delay: 0.5s;">
                    <p>{"OR CONNECT THROUGH OTHER CHANNELS"}</p>
                    <div class="channel-list">
                        { for CHANNELS.iter().map(|(icon, label, href)| html! {
                            <a key={*label} href={*href}>
                                <span class="icon">{ *icon }</span>
                                <span class="label">{ *label }</span>
                            </a>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
