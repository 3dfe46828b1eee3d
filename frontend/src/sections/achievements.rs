use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config;
use crate::hooks::use_reveal;
use crate::theme::{stagger, Accent};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    fn text_class(self) -> String {
        match self {
            Rarity::Common => "text-muted".to_string(),
            Rarity::Rare => Accent::Primary.text_class(),
            Rarity::Epic => Accent::Secondary.text_class(),
            Rarity::Legendary => Accent::Accent.text_class(),
        }
    }

    fn background(self) -> String {
        match self {
            Rarity::Common => "linear-gradient(135deg, hsl(var(--muted)), hsl(var(--muted) / 0.5))".to_string(),
            Rarity::Rare => gradient(Accent::Primary),
            Rarity::Epic => gradient(Accent::Secondary),
            Rarity::Legendary => gradient(Accent::Accent),
        }
    }

    /// Border colour of the unlock toast.
    fn toast_border(self) -> String {
        match self {
            Rarity::Legendary => Accent::Accent.color(),
            Rarity::Epic => Accent::Secondary.color(),
            _ => Accent::Primary.color(),
        }
    }
}

fn gradient(accent: Accent) -> String {
    format!(
        "linear-gradient(135deg, {}, {})",
        accent.color_alpha(0.3),
        accent.color_alpha(0.1)
    )
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Progress {
    pub current: u32,
    pub max: u32,
}

impl Progress {
    pub fn percent(self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        (self.current as f64 / self.max as f64 * 100.0).min(100.0)
    }
}

#[derive(Debug, PartialEq)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
    pub unlocked: bool,
    pub progress: Option<Progress>,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { id: "traffic", name: "TRAFFIC BOOSTER", description: "Increased client traffic by 500%+", icon: "📈", rarity: Rarity::Legendary, unlocked: true, progress: None },
    Achievement { id: "conversion", name: "CONVERSION MASTER", description: "Achieved 10%+ conversion rate on e-commerce project", icon: "💰", rarity: Rarity::Epic, unlocked: true, progress: None },
    Achievement { id: "performance", name: "PERFORMANCE PRO", description: "Scored 100 on all Lighthouse metrics", icon: "⚡", rarity: Rarity::Rare, unlocked: true, progress: None },
    Achievement { id: "speed", name: "SPEED DEMON", description: "Delivered project 2 weeks ahead of schedule", icon: "🏎️", rarity: Rarity::Epic, unlocked: true, progress: None },
    Achievement { id: "streak", name: "WIN STREAK", description: "50 consecutive successful projects", icon: "🔥", rarity: Rarity::Legendary, unlocked: true, progress: None },
    Achievement { id: "global", name: "GLOBAL REACH", description: "Clients in 25+ countries", icon: "🌍", rarity: Rarity::Epic, unlocked: true, progress: None },
    Achievement { id: "innovator", name: "INNOVATOR", description: "First to implement cutting-edge technology", icon: "💡", rarity: Rarity::Rare, unlocked: true, progress: None },
    Achievement { id: "mentor", name: "MENTOR", description: "Trained 20+ junior developers", icon: "🎓", rarity: Rarity::Common, unlocked: true, progress: None },
    Achievement {
        id: "ai",
        name: "AI PIONEER",
        description: "Integrate AI into 10 projects",
        icon: "🤖",
        rarity: Rarity::Legendary,
        unlocked: false,
        progress: Some(Progress { current: 7, max: 10 }),
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct AchievementCounts {
    pub unlocked: usize,
    pub total: usize,
    pub legendary: usize,
    pub epic: usize,
}

/// Legendary and epic counters only include unlocked achievements.
pub fn counts(achievements: &[Achievement]) -> AchievementCounts {
    let unlocked_with = |rarity: Rarity| {
        achievements
            .iter()
            .filter(|a| a.unlocked && a.rarity == rarity)
            .count()
    };
    AchievementCounts {
        unlocked: achievements.iter().filter(|a| a.unlocked).count(),
        total: achievements.len(),
        legendary: unlocked_with(Rarity::Legendary),
        epic: unlocked_with(Rarity::Epic),
    }
}

/// Index of the toast to show after clicking `index`, or `None` when it is locked.
pub fn toast_for(achievements: &[Achievement], index: usize) -> Option<usize> {
    achievements
        .get(index)
        .filter(|achievement| achievement.unlocked)
        .map(|_| index)
}

#[function_component(AchievementsSection)]
pub fn achievements_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");

    let toast = use_state(|| None::<usize>);
    // Replacing the handle cancels the previous toast's timer
    let toast_timer = use_mut_ref(|| None::<Timeout>);
    let totals = use_memo(|_| counts(ACHIEVEMENTS), ());

    let trigger = {
        let toast = toast.clone();
        let toast_timer = toast_timer.clone();
        Callback::from(move |index: usize| {
            let Some(index) = toast_for(ACHIEVEMENTS, index) else {
                return;
            };
            log::debug!("achievement toast: {}", ACHIEVEMENTS[index].id);
            toast.set(Some(index));
            let toast = toast.clone();
            *toast_timer.borrow_mut() = Some(Timeout::new(config::ACHIEVEMENT_POPUP_MS, move || {
                toast.set(None);
            }));
        })
    };

    let cards = ACHIEVEMENTS.iter().enumerate().map(|(index, achievement)| {
        let onclick = {
            let trigger = trigger.clone();
            Callback::from(move |_: MouseEvent| trigger.emit(index))
        };
        let rarity = achievement.rarity;
        let pending = achievement.progress.filter(|_| !achievement.unlocked);

        html! {
            <div
                key={achievement.id}
                class={classes!("achievement-cell", "reveal-scale", in_view, (!achievement.unlocked).then_some("locked"))}
                style={stagger(0.1, 0.05, index)}
                {onclick}
            >
                <div class="achievement-card" style={format!("background: {};", rarity.background())}>
                    <span class={classes!("rarity", rarity.text_class())}>{ rarity.label() }</span>
                    <div class="achievement-icon">
                        { if achievement.unlocked { achievement.icon } else { "🔒" } }
                    </div>
                    <h4 class={classes!("font-display", rarity.text_class())}>{ achievement.name }</h4>
                    <p class="text-muted">{ achievement.description }</p>
                    if let Some(progress) = pending {
                        <div class="achievement-progress">
                            <div class="meta">
                                <span class="text-muted">{"Progress"}</span>
                                <span class="text-primary">{ format!("{}/{}", progress.current, progress.max) }</span>
                            </div>
                            <div class="track">
                                <div style={format!("width: {}%;", progress.percent())}></div>
                            </div>
                        </div>
                    }
                    if achievement.unlocked {
                        <div class="shine"></div>
                    }
                </div>
            </div>
        }
    });

    let popup = (*toast).and_then(|index| ACHIEVEMENTS.get(index)).map(|achievement| {
        html! {
            <div class="achievement-toast" key={achievement.id}>
                <div
                    class="hud-frame toast-body"
                    style={format!("background: {}; border-color: {};", achievement.rarity.background(), achievement.rarity.toast_border())}
                >
                    <span class="toast-icon">{ achievement.icon }</span>
                    <div>
                        <p class="font-mono text-muted" style="font-size: 0.75rem; margin: 0;">{"ACHIEVEMENT UNLOCKED"}</p>
                        <p class={classes!("font-display", achievement.rarity.text_class())} style="font-size: 1.125rem; font-weight: 700; margin: 0;">
                            { achievement.name }
                        </p>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <section id="achievements" class="page-section">
            <style>
                {r#"
                .achievement-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                @media (min-width: 768px) { .achievement-grid { grid-template-columns: repeat(3, 1fr); gap: 1.5rem; } }
                .achievement-cell { cursor: pointer; }
                .achievement-cell:not(.locked):hover .achievement-card { transform: scale(1.05); border-color: hsl(var(--primary)); box-shadow: 0 0 12px hsl(var(--primary) / 0.4); }
                .achievement-card { position: relative; padding: 1.5rem; border: 1px solid hsl(var(--hud)); overflow: hidden; transition: all 0.3s; }
                .achievement-cell.locked .achievement-card { opacity: 0.5; border-color: hsl(var(--muted) / 0.3); filter: grayscale(1); }
                .achievement-card .rarity { position: absolute; top: 0.5rem; right: 0.5rem; font-family: var(--font-mono); font-size: 10px; text-transform: uppercase; }
                .achievement-icon { font-size: 2.25rem; margin-bottom: 0.75rem; display: inline-block; }
                .achievement-cell.locked .achievement-icon { filter: blur(2px); }
                .achievement-card h4 { font-size: 0.875rem; margin: 0 0 0.25rem; }
                .achievement-card p { font-size: 0.75rem; margin: 0; }
                .achievement-progress { margin-top: 0.75rem; }
                .achievement-progress .meta { display: flex; justify-content: space-between; font-family: var(--font-mono); font-size: 10px; margin-bottom: 0.25rem; }
                .achievement-progress .track { height: 4px; background: hsl(var(--muted) / 0.3); overflow: hidden; }
                .achievement-progress .track div { height: 100%; background: hsl(var(--primary)); }
                .shine { position: absolute; inset: 0; pointer-events: none; opacity: 0; transform: translateX(-100%); background: linear-gradient(135deg, transparent 40%, hsl(var(--primary) / 0.2) 50%, transparent 60%); transition: transform 0.6s, opacity 0.3s; }
                .achievement-card:hover .shine { opacity: 1; transform: translateX(100%); }
                .achievement-toast { position: fixed; top: 2rem; left: 50%; transform: translateX(-50%); z-index: 50; animation: slide-down 0.4s ease-out; }
                .toast-body { display: flex; align-items: center; gap: 1rem; padding: 1rem; border-width: 2px; border-style: solid; }
                .toast-icon { font-size: 2.25rem; display: inline-block; animation: wiggle-pop 0.5s ease-out; }
                @keyframes wiggle-pop { 0% { transform: none; } 50% { transform: scale(1.3) rotate(10deg); } 75% { transform: rotate(-10deg); } 100% { transform: none; } }
                .achievement-totals { margin-top: 3rem; display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; text-align: center; }
                .achievement-totals .value { font-family: var(--font-display); font-size: 2.25rem; font-weight: 700; margin: 0; }
                .achievement-totals .label { font-family: var(--font-mono); font-size: 0.75rem; color: hsl(var(--muted-foreground)); margin: 0; }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.2;"></div>

            <div ref={node} class="section-inner">
                <SectionHeader
                    eyebrow="[ UNLOCKED ]"
                    title="ACHIEVEMENTS"
                    subtitle="Milestones and accolades earned through excellence"
                    revealed={revealed}
                />

                { for popup }

                <div class="achievement-grid">
                    { for cards }
                </div>

                <div class={classes!("achievement-totals", "reveal", in_view)} style="transition-delay: 0.6s;">
                    <div>
                        <p class="value text-accent">{ format!("{}/{}", totals.unlocked, totals.total) }</p>
                        <p class="label">{"ACHIEVEMENTS UNLOCKED"}</p>
                    </div>
                    <div>
                        <p class="value text-secondary">{ totals.legendary.to_string() }</p>
                        <p class="label">{"LEGENDARY"}</p>
                    </div>
                    <div>
                        <p class="value text-primary">{ totals.epic.to_string() }</p>
                        <p class="label">{"EPIC"}</p>
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
    fn test_counts_only_unlocked_rarities() {
        let totals = counts(ACHIEVEMENTS);
        assert_eq!(
            totals,
            AchievementCounts { unlocked: 8, total: 9, legendary: 2, epic: 3 }
        );
    }

    #[test]
    fn test_locked_achievement_has_no_toast() {
        let locked = ACHIEVEMENTS.iter().position(|a| !a.unlocked).unwrap();
        assert_eq!(toast_for(ACHIEVEMENTS, locked), None);
        assert_eq!(toast_for(ACHIEVEMENTS, 0), Some(0));
        assert_eq!(toast_for(ACHIEVEMENTS, 99), None);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(Progress { current: 7, max: 10 }.percent(), 70.0);
        assert_eq!(Progress { current: 3, max: 0 }.percent(), 0.0);
        assert_eq!(Progress { current: 12, max: 10 }.percent(), 100.0);
    }
}
