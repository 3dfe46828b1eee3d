use yew::prelude::*;

use crate::components::cyber_button::{ButtonSize, ButtonVariant, CyberButton};
use crate::components::section_header::SectionHeader;
use crate::hooks::use_reveal;
use crate::theme::stagger;

/// Section the BOOK NOW buttons scroll to.
pub const BOOKING_TARGET: &str = "booking";

pub struct Plan {
    pub name: &'static str,
    pub duration: &'static str,
    pub icon: &'static str,
    pub prices: &'static [(&'static str, &'static str)],
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "QUICK MATCH",
        duration: "1 Hour",
        icon: "⚡",
        prices: &[("PS5 / PC", "₹80"), ("VR (PSVR2)", "₹120"), ("Racing Sim", "₹100")],
        features: &["Any available station", "Game library access", "Standard seating"],
        popular: false,
    },
    Plan {
        name: "RANKED SESSION",
        duration: "3 Hours",
        icon: "🏆",
        prices: &[("PS5 / PC", "₹200"), ("VR (PSVR2)", "₹300"), ("Racing Sim", "₹250")],
        features: &["Reserved station", "Game library access", "Complimentary drink", "Priority seating"],
        popular: true,
    },
    Plan {
        name: "MARATHON",
        duration: "5+ Hours",
        icon: "🔥",
        prices: &[("PS5 / PC", "₹300"), ("VR (PSVR2)", "₹450"), ("Racing Sim", "₹400")],
        features: &["Guaranteed station", "Full game library", "Snacks & drinks included", "Dolby Atmos lounge access"],
        popular: false,
    },
    Plan {
        name: "PRIVATE LOUNGE",
        duration: "Per Hour",
        icon: "👑",
        prices: &[("Dolby Atmos Room", "₹500"), ("Group (4 players)", "₹1500")],
        features: &["Private room", "Dolby Atmos surround", "Premium seating", "All platforms available", "Dedicated host"],
        popular: false,
    },
];

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");
    let hovered = use_state(|| None::<usize>);

    let book = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(BOOKING_TARGET))
    };

    let cards = PLANS.iter().enumerate().map(|(index, plan)| {
        let glowing = plan.popular || *hovered == Some(index);
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        let variant = if plan.popular { ButtonVariant::Primary } else { ButtonVariant::Secondary };

        html! {
            <div
                key={plan.name}
                class={classes!("plan-card", "hud-frame", "reveal", in_view, glowing.then_some("glow-border"))}
                style={stagger(0.0, 0.1, index)}
                {onmouseenter}
                {onmouseleave}
            >
                if plan.popular {
                    <div class="plan-badge">{"MOST POPULAR"}</div>
                }
                <div class="plan-icon">{ plan.icon }</div>
                <h3 class="font-display">{ plan.name }</h3>
                <p class="font-mono text-primary" style="font-size: 0.75rem; margin: 0 0 1rem;">{ plan.duration }</p>
                <div class="plan-prices">
                    { for plan.prices.iter().map(|(platform, price)| html! {
                        <div key={*platform}>
                            <span class="font-mono text-muted">{ *platform }</span>
                            <span class="font-display price">{ *price }</span>
                        </div>
                    }) }
                </div>
                <div class="plan-features">
                    { for plan.features.iter().map(|feature| html! {
                        <div key={*feature}>
                            <span class="text-primary">{"▸"}</span>
                            <span class="font-mono text-muted">{ *feature }</span>
                        </div>
                    }) }
                </div>
                <CyberButton variant={variant} size={ButtonSize::Sm} glowing={plan.popular} full_width={true} onclick={book.clone()}>
                    {"BOOK NOW"}
                </CyberButton>
            </div>
        }
    });

    html! {
        <section id="pricing" class="page-section">
            <style>
                {r#"
                .plan-grid { display: grid; gap: 1.5rem; }
                @media (min-width: 768px) { .plan-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (min-width: 1024px) { .plan-grid { grid-template-columns: repeat(4, 1fr); } }
                .plan-card { padding: 1.5rem; display: flex; flex-direction: column; transition: all 0.5s; }
                .plan-badge { position: absolute; top: -0.75rem; left: 50%; transform: translateX(-50%); font-family: var(--font-mono); font-size: 10px; letter-spacing: 0.2em; white-space: nowrap; background: hsl(var(--primary)); color: hsl(var(--primary-foreground)); padding: 0.25rem 0.75rem; }
                .plan-icon { font-size: 1.875rem; margin-bottom: 0.75rem; }
                .plan-card h3 { font-size: 1.125rem; margin: 0 0 0.25rem; }
                .plan-prices, .plan-features { display: flex; flex-direction: column; gap: 0.5rem; margin-bottom: 1.5rem; }
                .plan-prices div { display: flex; justify-content: space-between; align-items: center; font-size: 0.75rem; }
                .plan-prices .price { font-size: 1.125rem; font-weight: 700; }
                .plan-features { flex: 1; }
                .plan-features div { display: flex; align-items: center; gap: 0.5rem; font-size: 0.75rem; }
                .plan-note { text-align: center; margin-top: 2rem; font-family: var(--font-mono); font-size: 0.75rem; color: hsl(var(--muted-foreground) / 0.5); }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.1;"></div>

            <div ref={node} class="section-inner">
                <SectionHeader
                    eyebrow="[ SELECT YOUR PLAN ]"
                    title="CHOOSE YOUR"
                    highlight="LOADOUT"
                    subtitle="From quick sessions to marathon gaming, we've got the perfect plan for every player."
                    revealed={revealed}
                />

                <div class="plan-grid">
                    { for cards }
                </div>

                <p class={classes!("plan-note", "reveal", in_view)} style="transition-delay: 0.6s;">
                    {"* Prices are approximate and may vary. Contact us for group bookings and special events."}
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|plan| plan.popular).map(|plan| plan.name).collect();
        assert_eq!(popular, vec!["RANKED SESSION"]);
    }

    #[test]
    fn test_every_plan_lists_prices() {
        assert!(PLANS.iter().all(|plan| !plan.prices.is_empty()));
        assert_eq!(PLANS[3].prices.len(), 2);
    }
}
