use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::hooks::use_reveal;
use crate::theme::{stagger, Accent};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Branch {
    Frontend,
    Backend,
    Design,
    Devops,
}

impl Branch {
    pub const ALL: [Branch; 4] = [Branch::Frontend, Branch::Backend, Branch::Design, Branch::Devops];

    pub fn accent(self) -> Accent {
        match self {
            Branch::Frontend => Accent::Primary,
            Branch::Backend => Accent::Accent,
            Branch::Design => Accent::Secondary,
            Branch::Devops => Accent::NeonPink,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Branch::Frontend => "FRONTEND",
            Branch::Backend => "BACKEND",
            Branch::Design => "DESIGN",
            Branch::Devops => "DEVOPS",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub level: u8,
    pub unlocked: bool,
    pub connections: &'static [&'static str],
    /// Percentage coordinates inside the tree panel.
    pub x: f32,
    pub y: f32,
    pub branch: Branch,
}

pub const SKILLS: &[Skill] = &[
    Skill { id: "core", name: "Web Dev Core", description: "Foundation of all web development skills", icon: "🌐", level: 10, unlocked: true, connections: &["react", "node", "design-core"], x: 50.0, y: 50.0, branch: Branch::Frontend },
    Skill { id: "react", name: "React.js", description: "Component-based UI development with React ecosystem", icon: "⚛️", level: 9, unlocked: true, connections: &["nextjs", "typescript"], x: 25.0, y: 30.0, branch: Branch::Frontend },
    Skill { id: "nextjs", name: "Next.js", description: "Full-stack React framework with SSR/SSG", icon: "▲", level: 8, unlocked: true, connections: &["performance"], x: 10.0, y: 15.0, branch: Branch::Frontend },
    Skill { id: "typescript", name: "TypeScript", description: "Type-safe JavaScript for scalable applications", icon: "📘", level: 9, unlocked: true, connections: &["testing"], x: 40.0, y: 15.0, branch: Branch::Frontend },
    Skill { id: "node", name: "Node.js", description: "Server-side JavaScript runtime", icon: "🟢", level: 8, unlocked: true, connections: &["database", "api"], x: 75.0, y: 30.0, branch: Branch::Backend },
    Skill { id: "database", name: "Databases", description: "SQL, PostgreSQL, MongoDB expertise", icon: "🗄️", level: 7, unlocked: true, connections: &["security"], x: 90.0, y: 15.0, branch: Branch::Backend },
    Skill { id: "api", name: "API Design", description: "RESTful and GraphQL API architecture", icon: "🔌", level: 8, unlocked: true, connections: &["security"], x: 60.0, y: 15.0, branch: Branch::Backend },
    Skill { id: "design-core", name: "UI/UX Design", description: "User-centered design principles", icon: "🎨", level: 8, unlocked: true, connections: &["figma", "animation"], x: 50.0, y: 70.0, branch: Branch::Design },
    Skill { id: "figma", name: "Figma", description: "Design tool mastery and prototyping", icon: "🖼️", level: 7, unlocked: true, connections: &[], x: 30.0, y: 85.0, branch: Branch::Design },
    Skill { id: "animation", name: "Motion Design", description: "CSS/JS animations and micro-interactions", icon: "✨", level: 8, unlocked: true, connections: &[], x: 70.0, y: 85.0, branch: Branch::Design },
    Skill { id: "performance", name: "Performance", description: "Web vitals optimization and speed", icon: "⚡", level: 9, unlocked: true, connections: &[], x: 15.0, y: 50.0, branch: Branch::Devops },
    Skill { id: "testing", name: "Testing", description: "Unit, integration, and E2E testing", icon: "🧪", level: 7, unlocked: true, connections: &[], x: 35.0, y: 50.0, branch: Branch::Devops },
    Skill { id: "security", name: "Security", description: "Web security best practices", icon: "🔒", level: 6, unlocked: false, connections: &[], x: 85.0, y: 50.0, branch: Branch::Devops },
];

pub const MASTERY_LEVEL: u8 = 9;

pub fn find_skill<'a>(skills: &'a [Skill], id: &str) -> Option<&'a Skill> {
    skills.iter().find(|skill| skill.id == id)
}

/// Every drawable connection. Targets that do not exist are skipped.
pub fn edges(skills: &[Skill]) -> Vec<(&Skill, &Skill)> {
    skills
        .iter()
        .flat_map(|skill| {
            skill
                .connections
                .iter()
                .filter_map(move |target| find_skill(skills, target).map(|target| (skill, target)))
        })
        .collect()
}

/// The hovered skill wins over the clicked one.
pub fn inspected<'a>(
    skills: &'a [Skill],
    hovered: Option<&str>,
    selected: Option<&str>,
) -> Option<&'a Skill> {
    hovered.or(selected).and_then(|id| find_skill(skills, id))
}

#[derive(Debug, PartialEq)]
pub struct TreeStats {
    pub total: usize,
    pub unlocked: usize,
    pub average_level: String,
    pub mastered: usize,
}

pub fn tree_stats(skills: &[Skill]) -> TreeStats {
    let total = skills.len();
    let level_sum: u32 = skills.iter().map(|skill| skill.level as u32).sum();
    let average = if total == 0 { 0.0 } else { level_sum as f64 / total as f64 };
    // Half-way values round up, not to even
    let average = (average * 10.0).round() / 10.0;
    TreeStats {
        total,
        unlocked: skills.iter().filter(|skill| skill.unlocked).count(),
        average_level: format!("{:.1}", average),
        mastered: skills.iter().filter(|skill| skill.level >= MASTERY_LEVEL).count(),
    }
}

#[function_component(SkillTreeSection)]
pub fn skill_tree_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");

    let hovered = use_state(|| None::<&'static str>);
    let selected = use_state(|| None::<&'static str>);

    let stats = use_memo(|_| tree_stats(SKILLS), ());
    let lines = use_memo(
        |_| {
            edges(SKILLS)
                .into_iter()
                .map(|(from, to)| (from.id, to.id, from.x, from.y, to.x, to.y))
                .collect::<Vec<_>>()
        },
        (),
    );

    let nodes = SKILLS.iter().enumerate().map(|(index, skill)| {
        let accent = skill.branch.accent();
        let is_hovered = *hovered == Some(skill.id);
        let onmouseenter = {
            let hovered = hovered.clone();
            let id = skill.id;
            Callback::from(move |_: MouseEvent| hovered.set(Some(id)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        let onclick = {
            let selected = selected.clone();
            let id = skill.id;
            Callback::from(move |_: MouseEvent| selected.set(Some(id)))
        };
        let orb_style = if skill.unlocked {
            format!(
                "border-color: {}; background: {};",
                accent.color(),
                accent.color_alpha(0.2)
            )
        } else {
            String::new()
        };

        html! {
            <div
                key={skill.id}
                class={classes!("skill-node", in_view)}
                style={format!("left: {}%; top: {}%; {}", skill.x, skill.y, stagger(0.3, 0.05, index))}
                {onmouseenter}
                {onmouseleave}
                {onclick}
            >
                <div
                    class={classes!("skill-orb", (!skill.unlocked).then_some("locked"), is_hovered.then_some("hovered"))}
                    style={orb_style}
                >
                    <span>{ skill.icon }</span>
                    <div class="skill-level">{ skill.level.to_string() }</div>
                    if skill.unlocked {
                        <div class="skill-halo" style={format!("background: radial-gradient(circle, {}, transparent);", accent.color_alpha(0.5))}></div>
                    }
                </div>
                <p class={classes!("skill-name", is_hovered.then_some("hovered"))}>{ skill.name }</p>
            </div>
        }
    });

    let panel = inspected(SKILLS, *hovered, *selected).map(|skill| {
        html! {
            <div class="skill-panel hud-frame">
                <span class="icon">{ skill.icon }</span>
                <div style="flex: 1;">
                    <h4 class="font-display">{ skill.name }</h4>
                    <p class="font-mono text-primary" style="font-size: 0.75rem;">{ format!("Level {} / 10", skill.level) }</p>
                    <p class="text-muted" style="font-size: 0.875rem;">{ skill.description }</p>
                    <div class="skill-bar">
                        <div style={format!("width: {}%;", skill.level as u32 * 10)}></div>
                    </div>
                </div>
            </div>
        }
    });

    let summary = [
        ("Total Skills", stats.total.to_string()),
        ("Unlocked", stats.unlocked.to_string()),
        ("Avg Level", stats.average_level.clone()),
        ("Mastered", stats.mastered.to_string()),
    ];

    html! {
        <section id="skills" class="page-section">
            <style>
                {r#"
                .skill-legend { display: flex; flex-wrap: wrap; justify-content: center; gap: 1.5rem; margin-bottom: 3rem; }
                .skill-legend div { display: flex; align-items: center; gap: 0.5rem; font-family: var(--font-mono); font-size: 0.75rem; color: hsl(var(--muted-foreground)); }
                .skill-legend i { width: 0.75rem; height: 0.75rem; border-radius: 50%; }
                .skill-tree { position: relative; min-height: 500px; padding: 2rem; }
                .skill-tree svg { position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; }
                .skill-tree line { stroke-dasharray: 1000; stroke-dashoffset: 1000; transition: stroke-dashoffset 1s ease-out 0.5s; }
                .skill-tree.in-view line { stroke-dashoffset: 0; }
                .skill-node { position: absolute; opacity: 0; transform: translate(-50%, -50%) scale(0); transition: opacity 0.4s ease-out, transform 0.4s ease-out; }
                .skill-node.in-view { opacity: 1; transform: translate(-50%, -50%); }
                .skill-orb {
                    position: relative;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    border: 2px solid hsl(var(--muted));
                    background: hsl(var(--muted) / 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    cursor: pointer;
                    transition: transform 0.3s;
                }
                .skill-orb:hover { transform: scale(1.2); }
                .skill-orb:active { transform: scale(0.95); }
                .skill-orb.locked { filter: grayscale(1); }
                .skill-orb.locked span { opacity: 0.5; }
                .skill-orb.hovered { animation: pulse 1.5s ease-in-out infinite; }
                .skill-level { position: absolute; right: -4px; bottom: -4px; width: 1.5rem; height: 1.5rem; border-radius: 50%; background: hsl(var(--card)); border: 1px solid hsl(var(--hud)); font-family: var(--font-mono); font-size: 0.75rem; color: hsl(var(--primary)); display: flex; align-items: center; justify-content: center; }
                .skill-halo { position: absolute; inset: 0; border-radius: 50%; opacity: 0.5; filter: blur(8px); z-index: -1; }
                .skill-name { position: absolute; top: 100%; left: 50%; transform: translateX(-50%); margin-top: 0.5rem; font-family: var(--font-mono); font-size: 0.75rem; white-space: nowrap; opacity: 0.7; transition: opacity 0.2s; }
                .skill-name.hovered { opacity: 1; }
                .skill-panel { position: absolute; left: 1rem; right: 1rem; bottom: 1rem; display: flex; gap: 0.75rem; align-items: flex-start; padding: 1rem; animation: fade-in 0.3s ease-out; }
                @media (min-width: 768px) { .skill-panel { left: auto; width: 20rem; } }
                .skill-panel .icon { font-size: 1.875rem; }
                .skill-panel h4 { margin: 0; font-size: 1.125rem; }
                .skill-panel p { margin: 0.25rem 0; }
                .skill-bar { margin-top: 0.75rem; height: 0.5rem; border-radius: 999px; background: hsl(var(--muted) / 0.3); overflow: hidden; }
                .skill-bar div { height: 100%; background: linear-gradient(90deg, hsl(var(--primary)), hsl(var(--accent))); transition: width 0.4s ease-out; }
                .skill-summary { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; margin-top: 2rem; }
                @media (min-width: 768px) { .skill-summary { grid-template-columns: repeat(4, 1fr); } }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.2;"></div>

            <div ref={node} class="section-inner">
                <SectionHeader
                    eyebrow="[ ABILITY TREE ]"
                    title="SKILL TREE"
                    subtitle="Hover over skills to reveal abilities. Click to inspect."
                    revealed={revealed}
                />

                <div class={classes!("skill-legend", "reveal", in_view)} style="transition-delay: 0.3s;">
                    { for Branch::ALL.iter().map(|branch| html! {
                        <div key={branch.label()}>
                            <i style={format!("background: {};", branch.accent().color())}></i>
                            <span>{ branch.label() }</span>
                        </div>
                    }) }
                </div>

                <div class={classes!("skill-tree", "hud-frame", "reveal-scale", in_view)} style="transition-delay: 0.2s;">
                    <svg>
                        { for lines.iter().map(|(from, to, x1, y1, x2, y2)| html! {
                            <line
                                key={format!("{}-{}", from, to)}
                                x1={format!("{}%", x1)}
                                y1={format!("{}%", y1)}
                                x2={format!("{}%", x2)}
                                y2={format!("{}%", y2)}
                                stroke="hsl(var(--primary))"
                                stroke-width="2"
                                stroke-opacity="0.3"
                            />
                        }) }
                    </svg>
                    { for nodes }
                    { for panel }
                </div>

                <div class={classes!("skill-summary", "reveal", in_view)} style="transition-delay: 0.8s;">
                    { for summary.iter().map(|(label, value)| html! {
                        <div key={*label} class="stat-box">
                            <p class="value text-primary">{ value.clone() }</p>
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
    fn test_tree_stats() {
        let stats = tree_stats(SKILLS);
        assert_eq!(stats.total, 13);
        assert_eq!(stats.unlocked, 12);
        assert_eq!(stats.average_level, "8.0");
        assert_eq!(stats.mastered, 4);
    }

    #[test]
    fn test_average_formats_to_one_decimal() {
        let skills = &SKILLS[..2];
        assert_eq!(tree_stats(skills).average_level, "9.5");
        assert_eq!(tree_stats(&[]).average_level, "0.0");
    }

    #[test]
    fn test_average_rounds_half_up() {
        let skills: Vec<Skill> = [8, 8, 8, 9]
            .iter()
            .map(|level| Skill { level: *level, ..SKILLS[0].clone() })
            .collect();
        assert_eq!(tree_stats(&skills).average_level, "8.3");
    }

    #[test]
    fn test_edges_skip_unknown_targets() {
        let all = edges(SKILLS);
        assert_eq!(all.len(), 13);
        assert!(all.iter().any(|(from, to)| from.id == "core" && to.id == "react"));

        // Without "security" the two edges pointing at it disappear
        let subset: Vec<Skill> = SKILLS
            .iter()
            .filter(|skill| skill.id != "security")
            .cloned()
            .collect();
        assert_eq!(edges(&subset).len(), 11);
    }

    #[test]
    fn test_hover_takes_precedence_over_selection() {
        assert_eq!(inspected(SKILLS, Some("react"), Some("node")).map(|s| s.id), Some("react"));
        assert_eq!(inspected(SKILLS, None, Some("node")).map(|s| s.id), Some("node"));
        assert_eq!(inspected(SKILLS, None, None), None);
        assert_eq!(inspected(SKILLS, Some("missing"), Some("node")), None);
    }
}
