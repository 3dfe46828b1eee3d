use yew::prelude::*;

use crate::components::cyber_button::{ButtonVariant, CyberButton};
use crate::components::section_header::SectionHeader;
use crate::hooks::use_reveal;
use crate::theme::{stagger, Accent};

const VISIBLE_TOOLS: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Legendary,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
            Difficulty::Legendary => "LEGENDARY",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Difficulty::Easy => Accent::Accent,
            Difficulty::Medium => Accent::Primary,
            Difficulty::Hard => Accent::Secondary,
            Difficulty::Legendary => Accent::NeonPink,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Mission {
    pub id: &'static str,
    pub title: &'static str,
    pub objective: &'static str,
    pub difficulty: Difficulty,
    pub tools: &'static [&'static str],
    pub outcome: &'static str,
    pub icon: &'static str,
    pub completed: bool,
}

pub const MISSIONS: &[Mission] = &[
    Mission {
        id: "m1",
        title: "E-COMMERCE DOMINANCE",
        objective: "Build a high-converting online store with custom checkout",
        difficulty: Difficulty::Hard,
        tools: &["Next.js", "Shopify API", "Stripe", "Tailwind"],
        outcome: "+340% conversion rate, $2M+ annual revenue",
        icon: "🛍️",
        completed: true,
    },
    Mission {
        id: "m2",
        title: "SAAS PLATFORM LAUNCH",
        objective: "Create a scalable SaaS dashboard with real-time analytics",
        difficulty: Difficulty::Legendary,
        tools: &["React", "Node.js", "PostgreSQL", "WebSockets"],
        outcome: "10K+ active users, 99.9% uptime",
        icon: "📊",
        completed: true,
    },
    Mission {
        id: "m3",
        title: "BRAND TRANSFORMATION",
        objective: "Complete website redesign for Fortune 500 company",
        difficulty: Difficulty::Hard,
        tools: &["Figma", "React", "GSAP", "Contentful"],
        outcome: "+85% engagement, 40% faster load times",
        icon: "🏢",
        completed: true,
    },
    Mission {
        id: "m4",
        title: "STARTUP ACCELERATION",
        objective: "MVP development from concept to launch in 8 weeks",
        difficulty: Difficulty::Medium,
        tools: &["TypeScript", "Supabase", "Vercel", "Framer Motion"],
        outcome: "Secured $500K seed funding",
        icon: "🚀",
        completed: true,
    },
    Mission {
        id: "m5",
        title: "AI INTEGRATION",
        objective: "Implement AI-powered search and recommendations",
        difficulty: Difficulty::Legendary,
        tools: &["OpenAI", "Pinecone", "Python", "React"],
        outcome: "+200% user engagement, smarter UX",
        icon: "🤖",
        completed: false,
    },
    Mission {
        id: "m6",
        title: "PERFORMANCE RESCUE",
        objective: "Optimize legacy app from 6s to under 1s load time",
        difficulty: Difficulty::Medium,
        tools: &["Lighthouse", "Webpack", "CDN", "Caching"],
        outcome: "95+ performance score, 3x faster",
        icon: "⚡",
        completed: true,
    },
];

const STATS: &[(&str, &str)] = &[
    ("Missions Completed", "150+"),
    ("Happy Clients", "100+"),
    ("Countries Served", "25+"),
    ("Success Rate", "99%"),
];

/// Tools shown on a card, plus the `+N` overflow label when some are hidden.
pub fn tool_preview(tools: &'static [&'static str]) -> (&'static [&'static str], Option<String>) {
    if tools.len() > VISIBLE_TOOLS {
        (&tools[..VISIBLE_TOOLS], Some(format!("+{}", tools.len() - VISIBLE_TOOLS)))
    } else {
        (tools, None)
    }
}

#[function_component(MissionsSection)]
pub fn missions_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");
    let selected = use_state(|| None::<usize>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let cards = MISSIONS.iter().enumerate().map(|(index, mission)| {
        let onclick = {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(index)))
        };
        let (tools, overflow) = tool_preview(mission.tools);

        html! {
            <div
                key={mission.id}
                class={classes!("mission-card", "hud-frame", "reveal-scale", in_view)}
                style={stagger(0.1, 0.1, index)}
                {onclick}
            >
                <div class="mission-meta">
                    if mission.completed {
                        <span class="mission-status done">{"✓ COMPLETED"}</span>
                    } else {
                        <span class="mission-status active pulse">{"◉ ACTIVE"}</span>
                    }
                    <span class={classes!("font-mono", mission.difficulty.accent().text_class())}>
                        { mission.difficulty.label() }
                    </span>
                </div>
                <div class="mission-icon">{ mission.icon }</div>
                <h3 class="font-display">{ mission.title }</h3>
                <p class="text-muted" style="font-size: 0.875rem;">{ mission.objective }</p>
                <div class="mission-tools">
                    { for tools.iter().map(|tool| html! { <span key={*tool} class="tag">{ *tool }</span> }) }
                    if let Some(overflow) = overflow {
                        <span class="font-mono text-muted" style="font-size: 0.75rem;">{ overflow }</span>
                    }
                </div>
                <div class="mission-outcome">
                    <p class="font-mono text-primary">{ format!("▸ {}", mission.outcome) }</p>
                </div>
                <div class="mission-underline"></div>
            </div>
        }
    });

    let briefing = (*selected).and_then(|index| MISSIONS.get(index)).map(|mission| {
        html! {
            <div class="modal-backdrop" onclick={close.clone()}>
                <div
                    class="briefing hud-frame"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <div class="briefing-head">
                        <span class="icon">{ mission.icon }</span>
                        <div>
                            <h3 class="font-display">{ mission.title }</h3>
                            <span class={classes!("font-mono", mission.difficulty.accent().text_class())} style="font-size: 0.75rem;">
                                { format!("{} DIFFICULTY", mission.difficulty.label()) }
                            </span>
                        </div>
                    </div>
                    <div class="briefing-body">
                        <div>
                            <p class="caption text-primary">{"MISSION OBJECTIVE"}</p>
                            <p>{ mission.objective }</p>
                        </div>
                        <div>
                            <p class="caption text-primary">{"TOOLS DEPLOYED"}</p>
                            <div class="mission-tools">
                                { for mission.tools.iter().map(|tool| html! {
                                    <span key={*tool} class="tag briefing-tool">{ *tool }</span>
                                }) }
                            </div>
                        </div>
                        <div>
                            <p class="caption text-accent">{"MISSION OUTCOME"}</p>
                            <p class="text-accent">{ mission.outcome }</p>
                        </div>
                    </div>
                    <CyberButton variant={ButtonVariant::Primary} onclick={close.clone()}>
                        {"CLOSE BRIEFING"}
                    </CyberButton>
                </div>
            </div>
        }
    });

    html! {
        <section id="missions" class="page-section">
            <style>
                {r#"
                .mission-grid { display: grid; gap: 1.5rem; }
                @media (min-width: 768px) { .mission-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (min-width: 1024px) { .mission-grid { grid-template-columns: repeat(3, 1fr); } }
                .mission-card { padding: 1.5rem; height: 100%; cursor: pointer; overflow: hidden; transition: transform 0.3s, box-shadow 0.3s, border-color 0.3s; }
                .mission-card:hover { transform: translateY(-5px); border-color: hsl(var(--primary)); box-shadow: 0 0 12px hsl(var(--primary) / 0.4); }
                .mission-meta { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; font-size: 0.75rem; }
                .mission-status { font-family: var(--font-mono); padding: 0.25rem 0.5rem; }
                .mission-status.done { background: hsl(var(--accent) / 0.2); color: hsl(var(--accent)); }
                .mission-status.active { background: hsl(var(--primary) / 0.2); color: hsl(var(--primary)); }
                .mission-icon { font-size: 3rem; margin-bottom: 1rem; display: inline-block; transition: transform 0.3s; }
                .mission-card:hover .mission-icon { transform: scale(1.1); }
                .mission-card h3 { font-size: 1.125rem; margin: 0 0 0.5rem; }
                .mission-tools { display: flex; flex-wrap: wrap; gap: 0.5rem; align-items: center; margin-bottom: 1rem; }
                .mission-outcome { padding-top: 1rem; border-top: 1px solid hsl(var(--hud)); font-size: 0.75rem; }
                .mission-outcome p { margin: 0; }
                .mission-underline { position: absolute; left: 0; bottom: 0; height: 2px; width: 0; background: linear-gradient(90deg, hsl(var(--primary)), hsl(var(--secondary)), hsl(var(--accent))); transition: width 0.3s; }
                .mission-card:hover .mission-underline { width: 100%; }
                .briefing { padding: 2rem; max-width: 32rem; width: 100%; animation: pop-in 0.3s ease-out; }
                .briefing-head { display: flex; gap: 1rem; align-items: flex-start; margin-bottom: 1.5rem; }
                .briefing-head .icon { font-size: 3.75rem; }
                .briefing-head h3 { font-size: 1.5rem; margin: 0 0 0.5rem; }
                .briefing-body { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 1.5rem; }
                .briefing-body p { margin: 0; }
                .briefing-body .caption { font-family: var(--font-mono); font-size: 0.75rem; margin-bottom: 0.25rem; }
                .briefing-tool { font-size: 0.875rem; border-color: hsl(var(--primary)); background: hsl(var(--primary) / 0.1); }
                .mission-stats { grid-template-columns: repeat(2, 1fr); }
                @media (min-width: 768px) { .mission-stats { grid-template-columns: repeat(4, 1fr); } }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.2;"></div>

            <div ref={node} class="section-inner">
                <SectionHeader
                    eyebrow="[ PORTFOLIO ]"
                    title="COMPLETED MISSIONS"
                    subtitle="Each mission represents a successful project delivered with excellence"
                    revealed={revealed}
                />

                <div class="mission-grid">
                    { for cards }
                </div>

                { for briefing }

                <div class={classes!("stat-strip", "mission-stats", "reveal", in_view)} style="transition-delay: 0.8s;">
                    { for STATS.iter().map(|(label, value)| html! {
                        <div key={*label} class="stat-box">
                            <p class="value text-gradient">{ *value }</p>
                            <p class="label">{ *label }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_preview_overflow() {
        let (shown, overflow) = tool_preview(MISSIONS[0].tools);
        assert_eq!(shown, &["Next.js", "Shopify API", "Stripe"]);
        assert_eq!(overflow.as_deref(), Some("+1"));
    }

    #[test]
    fn test_tool_preview_without_overflow() {
        const FEW: &[&str] = &["Rust", "Yew"];
        let (shown, overflow) = tool_preview(FEW);
        assert_eq!(shown.len(), 2);
        assert!(overflow.is_none());
    }

    #[test]
    fn test_only_one_mission_in_progress() {
        let active: Vec<_> = MISSIONS.iter().filter(|m| !m.completed).map(|m| m.id).collect();
        assert_eq!(active, vec!["m5"]);
    }
}
