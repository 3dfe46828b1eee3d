use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::hooks::use_reveal;
use crate::theme::{stagger, Accent};

struct Experience {
    icon: &'static str,
    title: &'static str,
    tag: &'static str,
    description: &'static str,
    features: [&'static str; 4],
    accent: Accent,
}

const EXPERIENCES: &[Experience] = &[
    Experience {
        icon: "🎮",
        title: "PS5 GAMING",
        tag: "CONSOLE",
        description: "Experience next-gen gaming on PlayStation 5 with a massive library of AAA titles, \
                      4K HDR visuals, and DualSense haptic feedback.",
        features: ["4K HDR Display", "120fps Support", "DualSense Controllers", "100+ Games Library"],
        accent: Accent::Primary,
    },
    Experience {
        icon: "🖥️",
        title: "PC GAMING",
        tag: "HIGH-END",
        description: "High-performance gaming PCs with top-tier GPUs, ultra-wide monitors, and mechanical \
                      keyboards for the ultimate competitive edge.",
        features: ["RTX Graphics", "High Refresh Monitors", "Mechanical Keyboards", "Competitive Titles"],
        accent: Accent::Secondary,
    },
    Experience {
        icon: "🥽",
        title: "VR EXPERIENCE",
        tag: "PSVR2",
        description: "Dive into virtual reality with PlayStation VR2. Eye-tracking, haptic feedback, \
                      and 4K HDR for truly immersive gaming.",
        features: ["PSVR2 Headset", "Eye Tracking", "4K HDR Per Eye", "Haptic Feedback"],
        accent: Accent::Accent,
    },
    Experience {
        icon: "🔊",
        title: "DOLBY ATMOS LOUNGE",
        tag: "PREMIUM",
        description: "Private lounge with Dolby Atmos surround sound. Feel every explosion, whisper, \
                      and footstep in cinematic 3D audio.",
        features: ["Private Room", "Dolby Atmos", "Premium Seating", "Immersive Audio"],
        accent: Accent::Primary,
    },
    Experience {
        icon: "🏎️",
        title: "RACING SIMULATOR",
        tag: "G923",
        description: "Logitech G923 racing wheel with force feedback, pedals, and shifter. \
                      Feel every turn on tracks from F1 to rally stages.",
        features: ["Logitech G923", "Force Feedback", "Pedals & Shifter", "Multiple Racing Games"],
        accent: Accent::Secondary,
    },
];

#[function_component(ExperiencesSection)]
pub fn experiences_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");
    let active = use_state(|| None::<usize>);

    let cards = EXPERIENCES.iter().enumerate().map(|(index, exp)| {
        let is_active = *active == Some(index);
        let onmouseenter = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(Some(index)))
        };
        let onmouseleave = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(None))
        };
        // The fifth card stretches across the second row on medium screens
        let wide = (index == 4).then_some("wide");

        html! {
            <div
                key={exp.title}
                class={classes!("experience-card", "hud-frame", "reveal", in_view, wide, is_active.then_some("active glow-border"))}
                style={stagger(0.0, 0.1, index)}
                {onmouseenter}
                {onmouseleave}
            >
                <span class="experience-tag">{ exp.tag }</span>
                <div class="experience-icon">{ exp.icon }</div>
                <h3 class="font-display">{ exp.title }</h3>
                <p class="text-muted">{ exp.description }</p>
                <div class="experience-features">
                    { for exp.features.iter().map(|feature| html! {
                        <div key={*feature}>
                            <i style={format!("background: {};", exp.accent.color())}></i>
                            <span>{ *feature }</span>
                        </div>
                    }) }
                </div>
                <div class="experience-glow" style={format!("background: radial-gradient(circle at center, {}, transparent 70%);", exp.accent.color())}></div>
            </div>
        }
    });

    html! {
        <section id="experiences" class="page-section">
            <style>
                {r#"
                .experience-grid { display: grid; gap: 1.5rem; }
                @media (min-width: 768px) { .experience-grid { grid-template-columns: repeat(2, 1fr); } .experience-card.wide { grid-column: span 2; } }
                @media (min-width: 1024px) { .experience-grid { grid-template-columns: repeat(3, 1fr); } .experience-card.wide { grid-column: span 1; } }
                .experience-card { padding: 1.5rem; cursor: pointer; overflow: hidden; }
                .experience-tag { position: absolute; top: 1rem; right: 1rem; font-family: var(--font-mono); font-size: 10px; color: hsl(var(--primary) / 0.7); border: 1px solid hsl(var(--primary) / 0.3); padding: 0.25rem 0.5rem; }
                .experience-icon { font-size: 2.25rem; margin-bottom: 1rem; display: inline-block; }
                .experience-card.active .experience-icon { animation: pop-in 0.5s ease-out; }
                .experience-card h3 { font-size: 1.25rem; margin: 0 0 0.75rem; }
                .experience-card > p { font-size: 0.875rem; line-height: 1.6; margin: 0 0 1rem; }
                .experience-features { display: flex; flex-direction: column; gap: 0.5rem; }
                .experience-features div { display: flex; align-items: center; gap: 0.5rem; font-family: var(--font-mono); font-size: 0.75rem; color: hsl(var(--muted-foreground)); }
                .experience-features i { width: 6px; height: 6px; border-radius: 50%; }
                .experience-glow { position: absolute; inset: 0; pointer-events: none; opacity: 0; transition: opacity 0.5s; }
                .experience-card.active .experience-glow { opacity: 0.1; }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.1;"></div>

            <div ref={node} class="section-inner">
                <SectionHeader
                    eyebrow="[ SELECT YOUR EXPERIENCE ]"
                    title="CHOOSE YOUR"
                    highlight="ARENA"
                    subtitle="Five premium gaming experiences under one roof. Pick your weapon of choice."
                    revealed={revealed}
                />

                <div class="experience-grid">
                    { for cards }
                </div>
            </div>
        </section>
    }
}
