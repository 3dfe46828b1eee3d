use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::hooks::use_reveal;
use crate::theme::{stagger, Accent};

struct Stat {
    label: &'static str,
    value: &'static str,
    subtext: &'static str,
    accent: Accent,
}

struct Attribute {
    name: &'static str,
    value: u8,
    gradient: &'static str,
}

const STATS: &[Stat] = &[
    Stat { label: "LEVEL", value: "7", subtext: "Years of Experience", accent: Accent::Primary },
    Stat { label: "XP", value: "150+", subtext: "Projects Completed", accent: Accent::Accent },
    Stat { label: "RANK", value: "S", subtext: "Web Development Specialist", accent: Accent::Secondary },
];

const ATTRIBUTES: &[Attribute] = &[
    Attribute { name: "FRONTEND MASTERY", value: 95, gradient: "hsl(var(--primary)), #22d3ee" },
    Attribute { name: "BACKEND PROWESS", value: 85, gradient: "hsl(var(--secondary)), #c084fc" },
    Attribute { name: "UI/UX DESIGN", value: 90, gradient: "hsl(var(--accent)), #4ade80" },
    Attribute { name: "PERFORMANCE OPT", value: 92, gradient: "hsl(var(--neon-pink)), #f472b6" },
    Attribute { name: "PROBLEM SOLVING", value: 88, gradient: "#facc15, #f97316" },
];

const EQUIPMENT: &[&str] = &["💻", "⌨️", "🖱️", "☕"];

/// Inline style for an attribute bar: empty until revealed, then its value as a width.
fn bar_style(attr: &Attribute, index: usize, revealed: bool) -> String {
    let width = if revealed { attr.value } else { 0 };
    format!(
        "width: {}%; background: linear-gradient(90deg, {}); transition-delay: {:.1}s;",
        width,
        attr.gradient,
        0.6 + index as f32 * 0.1
    )
}

#[function_component(CharacterSection)]
pub fn character_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");

    html! {
        <section id="character" class="page-section">
            <style>
                {r#"
                .character-layout { display: grid; gap: 3rem; align-items: center; }
                @media (min-width: 1024px) { .character-layout { grid-template-columns: 1fr 1fr; } }
                .character-card { padding: 2rem; }
                .avatar { display: flex; flex-direction: column; align-items: center; margin-bottom: 2rem; }
                .avatar-ring { position: relative; width: 8rem; height: 8rem; margin-bottom: 1rem; }
                .avatar-ring .glow { position: absolute; inset: 0; border-radius: 50%; background: linear-gradient(135deg, hsl(var(--primary)), hsl(var(--secondary)), hsl(var(--accent))); animation: pulse 2s ease-in-out infinite; }
                .avatar-ring .face { position: absolute; inset: 4px; border-radius: 50%; background: hsl(var(--card)); display: flex; align-items: center; justify-content: center; font-size: 3rem; }
                .avatar-ring .orbit { position: absolute; inset: -12px; animation: spin 3s linear infinite; }
                .avatar-ring .orbit span { position: absolute; top: 50%; left: 0; width: 1rem; height: 1rem; border-radius: 50%; background: hsl(var(--primary)); }
                .avatar h3 { font-family: var(--font-display); font-size: 1.5rem; margin: 0; }
                .character-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 2rem; }
                .character-stats .stat-box .sub { font-size: 0.75rem; color: hsl(var(--muted-foreground)); margin: 0.25rem 0 0; }
                .bio { padding: 1rem; border: 1px solid hsl(var(--hud)); background: hsl(var(--muted) / 0.2); }
                .bio p { margin: 0; font-size: 0.875rem; line-height: 1.6; color: hsl(var(--muted-foreground)); }
                .attributes { padding: 1.5rem; }
                .attribute { margin-bottom: 1.5rem; }
                .attribute-head { display: flex; justify-content: space-between; margin-bottom: 0.5rem; font-size: 0.875rem; }
                .attribute-track { height: 12px; background: hsl(var(--muted) / 0.3); border: 1px solid hsl(var(--hud)); overflow: hidden; }
                .attribute-fill { height: 100%; box-shadow: 0 0 10px currentColor; transition: width 1s ease-out; }
                .equipment { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; }
                .equipment div { aspect-ratio: 1; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; border: 1px solid hsl(var(--hud)); background: hsl(var(--card) / 0.3); cursor: pointer; transition: transform 0.2s, border-color 0.2s; }
                .equipment div:hover { transform: scale(1.1); border-color: hsl(var(--primary)); }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.3;"></div>

            <div ref={node} class="section-inner">
                <SectionHeader
                    eyebrow="[ PLAYER PROFILE ]"
                    title="CHARACTER STATS"
                    subtitle="A seasoned web developer specializing in creating high-performance digital experiences"
                    revealed={revealed}
                />

                <div class="character-layout">
                    <div class={classes!("character-card", "hud-frame", "reveal", in_view)} style="transition-delay: 0.2s;">
                        <div class="avatar">
                            <div class="avatar-ring">
                                <div class="glow"></div>
                                <div class="face">{"👨‍💻"}</div>
                                <div class="orbit"><span></span></div>
                            </div>
                            <h3>{"DEV_MASTER"}</h3>
                            <p class="font-mono text-primary">{"@webdev.studio"}</p>
                        </div>

                        <div class="character-stats">
                            { for STATS.iter().enumerate().map(|(index, stat)| html! {
                                <div key={stat.label} class={classes!("stat-box", "reveal-scale", in_view)} style={stagger(0.4, 0.1, index)}>
                                    <p class="label">{ stat.label }</p>
                                    <p class={classes!("value", stat.accent.text_class())}>{ stat.value }</p>
                                    <p class="sub">{ stat.subtext }</p>
                                </div>
                            }) }
                        </div>

                        <div class="bio">
                            <p class="font-mono text-primary" style="margin-bottom: 0.5rem;">{"// BIO"}</p>
                            <p>
                                {"Passionate about crafting pixel-perfect, high-performance web experiences. \
                                  Specializing in modern frameworks, scalable architecture, and conversion-optimized designs. \
                                  Every project is a new level to conquer."}
                            </p>
                        </div>
                    </div>

                    <div class={classes!("reveal", in_view)} style="transition-delay: 0.4s;">
                        <div class="attributes hud-frame">
                            <h4 class="font-display" style="margin-top: 0;">{"ATTRIBUTE POINTS"}</h4>
                            { for ATTRIBUTES.iter().enumerate().map(|(index, attr)| html! {
                                <div key={attr.name} class="attribute">
                                    <div class="attribute-head">
                                        <span class="font-mono">{ attr.name }</span>
                                        <span class="font-display text-primary">{ format!("{}/100", attr.value) }</span>
                                    </div>
                                    <div class="attribute-track">
                                        <div class="attribute-fill" style={bar_style(attr, index, revealed)}></div>
                                    </div>
                                </div>
                            }) }
                        </div>

                        <div class="equipment" style="margin-top: 1.5rem;">
                            { for EQUIPMENT.iter().map(|item| html! {
                                <div key={*item}>{ *item }</div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_fill_only_once_revealed() {
        let attr = &ATTRIBUTES[0];
        assert!(bar_style(attr, 0, false).starts_with("width: 0%;"));
        assert!(bar_style(attr, 0, true).starts_with("width: 95%;"));
        assert!(bar_style(attr, 2, true).ends_with("transition-delay: 0.8s;"));
    }
}
