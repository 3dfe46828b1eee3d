use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::hooks::use_reveal;
use crate::theme::{stagger, Accent};

struct PowerUp {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    accent: Accent,
    features: [&'static str; 4],
}

const POWER_UPS: &[PowerUp] = &[
    PowerUp {
        id: "speed",
        name: "SPEED BOOST",
        description: "Lightning-fast website optimization for maximum performance scores",
        icon: "⚡",
        accent: Accent::Primary,
        features: ["Core Web Vitals optimization", "Code splitting & lazy loading", "Image optimization", "CDN configuration"],
    },
    PowerUp {
        id: "shield",
        name: "SHIELD MODE",
        description: "Secure and stable websites with enterprise-grade protection",
        icon: "🛡️",
        accent: Accent::Accent,
        features: ["SSL/HTTPS setup", "Security headers", "DDoS protection", "Regular backups"],
    },
    PowerUp {
        id: "weapon",
        name: "E-COMMERCE WEAPON",
        description: "Powerful online stores that convert visitors into customers",
        icon: "🛒",
        accent: Accent::Secondary,
        features: ["Shopify / WooCommerce", "Payment integration", "Inventory management", "Analytics tracking"],
    },
    PowerUp {
        id: "enhancer",
        name: "UI ENHANCER",
        description: "Stunning modern interfaces that captivate and engage users",
        icon: "✨",
        accent: Accent::Primary,
        features: ["Custom animations", "Responsive design", "Accessibility (A11y)", "Dark/light themes"],
    },
    PowerUp {
        id: "multiplier",
        name: "SEO MULTIPLIER",
        description: "Search engine domination for organic traffic growth",
        icon: "📈",
        accent: Accent::Accent,
        features: ["Technical SEO audit", "Schema markup", "Content optimization", "Performance tracking"],
    },
    PowerUp {
        id: "ai",
        name: "AI INTEGRATION",
        description: "Next-gen AI-powered features for intelligent experiences",
        icon: "🤖",
        accent: Accent::Secondary,
        features: ["Chatbots & assistants", "Content generation", "Personalization", "Smart search"],
    },
];

#[function_component(PowerUpsSection)]
pub fn power_ups_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");
    let active = use_state(|| None::<&'static str>);

    let cards = POWER_UPS.iter().enumerate().map(|(index, power_up)| {
        let is_active = *active == Some(power_up.id);
        let accent = power_up.accent;
        let onmouseenter = {
            let active = active.clone();
            let id = power_up.id;
            Callback::from(move |_: MouseEvent| active.set(Some(id)))
        };
        let onmouseleave = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(None))
        };
        let light_style = if is_active {
            format!("background: {c}; box-shadow: 0 0 10px {c}, 0 0 20px {c};", c = accent.color())
        } else {
            format!("background: {};", accent.color())
        };

        html! {
            <div
                key={power_up.id}
                class={classes!("reveal", in_view)}
                style={stagger(0.1, 0.1, index)}
                {onmouseenter}
                {onmouseleave}
            >
                <div
                    class={classes!("power-card", is_active.then_some("active glow-border"))}
                    style={is_active.then(|| format!("border-color: {};", accent.color()))}
                >
                    <div class="power-aura" style={format!("background: radial-gradient(circle at 50% 50%, {}, transparent 70%);", accent.color_alpha(0.15))}></div>
                    <div class="power-icon">{ power_up.icon }</div>
                    <h3 class={classes!("font-display", accent.text_class())}>{ power_up.name }</h3>
                    <p class="text-muted" style="font-size: 0.875rem;">{ power_up.description }</p>
                    <ul>
                        { for power_up.features.iter().map(|feature| html! {
                            <li key={*feature}>
                                <span class={accent.text_class()}>{"▸"}</span>
                                <span>{ *feature }</span>
                            </li>
                        }) }
                    </ul>
                    <div class="power-status">
                        <span class="font-mono text-muted">{"READY TO DEPLOY"}</span>
                        <div class={classes!("status-light", is_active.then_some("pulse"))} style={light_style}></div>
                    </div>
                    <div class="power-corner" style={format!("border-top-color: {};", accent.color())}></div>
                </div>
            </div>
        }
    });

    html! {
        <section id="powerups" class="page-section">
            <style>
                {r#"
                .blob { position: absolute; width: 16rem; height: 16rem; border-radius: 50%; filter: blur(64px); }
                .power-grid { display: grid; gap: 1.5rem; }
                @media (min-width: 768px) { .power-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (min-width: 1024px) { .power-grid { grid-template-columns: repeat(3, 1fr); } }
                .power-card {
                    position: relative;
                    height: 100%;
                    padding: 1.5rem;
                    border: 2px solid hsl(var(--hud));
                    background: hsl(var(--card) / 0.5);
                    backdrop-filter: blur(4px);
                    cursor: pointer;
                    transition: all 0.5s;
                    clip-path: polygon(0 0, calc(100% - 20px) 0, 100% 20px, 100% 100%, 20px 100%, 0 calc(100% - 20px));
                }
                .power-card:hover { transform: translateY(-8px); }
                .power-aura { position: absolute; inset: 0; pointer-events: none; opacity: 0; transition: opacity 0.4s; }
                .power-card.active .power-aura { opacity: 1; }
                .power-icon { font-size: 3rem; margin-bottom: 1rem; display: inline-block; }
                .power-card.active .power-icon { animation: wiggle 0.5s ease-out; }
                @keyframes wiggle { 0% { transform: none; } 33% { transform: scale(1.2) rotate(10deg); } 66% { transform: scale(1.1) rotate(-10deg); } 100% { transform: none; } }
                .power-card h3 { font-size: 1.25rem; margin: 0 0 0.5rem; }
                .power-card ul { list-style: none; padding: 0; margin: 1rem 0 0; display: flex; flex-direction: column; gap: 0.5rem; }
                .power-card li { display: flex; gap: 0.5rem; align-items: center; font-family: var(--font-mono); font-size: 0.75rem; opacity: 0.7; transition: opacity 0.3s; }
                .power-card.active li { opacity: 1; }
                .power-status { margin-top: 1.5rem; display: flex; align-items: center; justify-content: space-between; font-size: 0.75rem; }
                .status-light { width: 0.75rem; height: 0.75rem; border-radius: 50%; }
                .power-corner { position: absolute; top: 0; right: 1.25rem; width: 0; height: 0; border-top: 20px solid; border-left: 20px solid transparent; }
                .power-footer { margin-top: 3rem; text-align: center; font-family: var(--font-mono); font-size: 0.875rem; color: hsl(var(--muted-foreground)); }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.2;"></div>
            <div class="blob" style="top: 25%; left: -8rem; background: hsl(var(--primary) / 0.1);"></div>
            <div class="blob" style="bottom: 25%; right: -8rem; background: hsl(var(--secondary) / 0.1);"></div>

            <div ref={node} class="section-inner">
                <SectionHeader
                    eyebrow="[ ABILITIES ]"
                    title="POWER UPS"
                    subtitle="Select your power-ups to enhance your digital presence"
                    revealed={revealed}
                />

                <div class="power-grid">
                    { for cards }
                </div>

                <p class={classes!("power-footer", "reveal", in_view)} style="transition-delay: 0.8s;">
                    {"COMBINE MULTIPLE POWER-UPS FOR MAXIMUM EFFECT"}
                </p>
            </div>
        </section>
    }
}
