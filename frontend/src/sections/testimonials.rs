use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::config;
use crate::hooks::use_reveal;
use crate::theme::stagger;

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
    pub rating: usize,
    pub boss_type: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "t1",
        name: "Sarah Chen",
        company: "TechVentures Inc.",
        role: "CEO",
        content: "Absolutely phenomenal work. Our website performance increased by 300% and conversions doubled. \
                  The attention to detail and technical expertise is unmatched.",
        avatar: "👩‍💼",
        rating: 5,
        boss_type: "TECH OVERLORD",
    },
    Testimonial {
        id: "t2",
        name: "Marcus Johnson",
        company: "E-Commerce Giants",
        role: "Founder",
        content: "From concept to launch in record time. The e-commerce platform exceeded all expectations \
                  and our revenue has skyrocketed since the redesign.",
        avatar: "👨‍💻",
        rating: 5,
        boss_type: "COMMERCE KING",
    },
    Testimonial {
        id: "t3",
        name: "Elena Rodriguez",
        company: "StartupScale",
        role: "CTO",
        content: "The technical architecture is bulletproof. Scalable, maintainable, and beautifully coded. \
                  A true master of the craft.",
        avatar: "👩‍🔬",
        rating: 5,
        boss_type: "CODE EMPRESS",
    },
    Testimonial {
        id: "t4",
        name: "David Park",
        company: "Creative Studios",
        role: "Creative Director",
        content: "The UI/UX work is stunning. Every interaction feels premium, every animation is purposeful. \
                  Our clients are blown away.",
        avatar: "🎨",
        rating: 5,
        boss_type: "DESIGN DRAGON",
    },
];

/// Which bosses are beaten and which one is mid-battle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BattleState {
    pub defeated: Vec<&'static str>,
    pub current: Option<&'static str>,
}

pub enum BattleAction {
    Engage(&'static str),
    Resolve(&'static str),
}

impl BattleState {
    pub fn is_defeated(&self, id: &str) -> bool {
        self.defeated.iter().any(|defeated| *defeated == id)
    }

    /// A defeated boss, or any click while a battle is running, starts nothing.
    pub fn can_engage(&self, id: &str) -> bool {
        self.current.is_none() && !self.is_defeated(id)
    }
}

impl Reducible for BattleState {
    type Action = BattleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BattleAction::Engage(id) => {
                if !self.can_engage(id) {
                    return self;
                }
                Rc::new(BattleState {
                    defeated: self.defeated.clone(),
                    current: Some(id),
                })
            }
            BattleAction::Resolve(id) => {
                let mut defeated = self.defeated.clone();
                if !defeated.contains(&id) {
                    defeated.push(id);
                }
                let current = self.current.filter(|current| *current != id);
                Rc::new(BattleState { defeated, current })
            }
        }
    }
}

fn stars(count: usize) -> Html {
    html! {
        <div class="stars">
            { for (0..count).map(|i| html! {
                <span key={i} style={format!("animation-delay: {:.1}s;", i as f32 * 0.1)}>{"⭐"}</span>
            }) }
        </div>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");

    let battle = use_reducer(BattleState::default);
    let battle_timer = use_mut_ref(|| None::<Timeout>);

    let engage = {
        let battle = battle.clone();
        Callback::from(move |id: &'static str| {
            if !battle.can_engage(id) {
                return;
            }
            log::debug!("boss battle started: {}", id);
            battle.dispatch(BattleAction::Engage(id));
            let battle = battle.clone();
            *battle_timer.borrow_mut() = Some(Timeout::new(config::BOSS_DEFEAT_MS, move || {
                battle.dispatch(BattleAction::Resolve(id));
            }));
        })
    };

    let cards = TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
        let defeated = battle.is_defeated(testimonial.id);
        let onclick = {
            let engage = engage.clone();
            let id = testimonial.id;
            Callback::from(move |_: MouseEvent| engage.emit(id))
        };
        let side = if index % 2 == 0 { "from-left" } else { "from-right" };

        html! {
            <div
                key={testimonial.id}
                class={classes!("boss-cell", side, in_view, (!defeated).then_some("undefeated"))}
                style={stagger(0.1, 0.1, index)}
                {onclick}
            >
                <div class={classes!("boss-card", "hud-frame", defeated.then_some("defeated glow-border"))}>
                    <div class="boss-badge">
                        if defeated {
                            <span class="won">{"✓ DEFEATED"}</span>
                        } else {
                            <span class="fight">{"BOSS BATTLE"}</span>
                        }
                    </div>

                    <div class="boss-head">
                        <div class={classes!("boss-avatar", (!defeated).then_some("breathing"))}>{ testimonial.avatar }</div>
                        <div>
                            <p class="font-display text-secondary" style="font-size: 0.875rem; margin: 0 0 0.25rem;">{ testimonial.boss_type }</p>
                            <h4 class="font-display">{ testimonial.name }</h4>
                            <p class="font-mono text-muted" style="font-size: 0.75rem; margin: 0;">
                                { format!("{} @ {}", testimonial.role, testimonial.company) }
                            </p>
                        </div>
                    </div>

                    <div class={classes!("boss-review", (!defeated).then_some("sealed"))}>
                        <p>{ format!("\"{}\"", testimonial.content) }</p>
                        { stars(testimonial.rating) }
                    </div>

                    if !defeated {
                        <div class="boss-cover">
                            <p class="font-display text-primary pulse">{"[ CLICK TO BATTLE ]"}</p>
                        </div>
                        <div class="boss-health"><div></div></div>
                    }
                </div>
            </div>
        }
    });

    let overlay = battle
        .current
        .and_then(|id| TESTIMONIALS.iter().find(|t| t.id == id))
        .map(|boss| {
            html! {
                <div class="boss-defeat-overlay">
                    <div class="boss-defeat">
                        <span class="avatar">{ boss.avatar }</span>
                        <p class="font-display text-accent title">{"BOSS DEFEATED!"}</p>
                        <p class="font-mono text-primary" style="font-size: 1.125rem; margin: 0;">{ boss.boss_type }</p>
                        { stars(boss.rating) }
                    </div>
                </div>
            }
        });

    html! {
        <section id="testimonials" class="page-section">
            <style>
                {r#"
                .boss-grid { display: grid; gap: 1.5rem; }
                @media (min-width: 768px) { .boss-grid { grid-template-columns: repeat(2, 1fr); } }
                .boss-cell { cursor: pointer; opacity: 0; transition: opacity 0.6s ease-out, transform 0.5s ease-out; }
                .boss-cell.from-left { transform: translateX(-50px); }
                .boss-cell.from-right { transform: translateX(50px); }
                .boss-cell.in-view { opacity: 1; transform: none; }
                .boss-cell.in-view.undefeated:hover { transform: scale(1.02); }
                .boss-card { padding: 1.5rem; height: 100%; overflow: hidden; transition: all 0.5s; }
                .boss-card.defeated { border-color: hsl(var(--accent)); }
                .boss-badge { position: absolute; top: 0; right: 0; padding: 0.5rem; font-family: var(--font-mono); font-size: 10px; z-index: 2; }
                .boss-badge span { padding: 0.25rem 0.5rem; }
                .boss-badge .won { background: hsl(var(--accent) / 0.2); color: hsl(var(--accent)); }
                .boss-badge .fight { background: hsl(var(--destructive) / 0.2); color: hsl(var(--destructive)); }
                .boss-head { display: flex; gap: 1rem; align-items: flex-start; margin-bottom: 1rem; }
                .boss-head h4 { font-size: 1.125rem; margin: 0; }
                .boss-avatar { font-size: 3rem; }
                .boss-avatar.breathing { animation: breathe 2s ease-in-out infinite; }
                @keyframes breathe { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.1); } }
                .boss-review { position: relative; transition: all 0.5s; }
                .boss-review.sealed { opacity: 0.5; filter: blur(4px); }
                .boss-review p { font-size: 0.875rem; line-height: 1.6; color: hsl(var(--foreground) / 0.9); margin: 0; }
                .boss-cover { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: hsl(var(--card) / 0.5); backdrop-filter: blur(2px); }
                .boss-health { position: absolute; left: 0; right: 0; bottom: 0; height: 4px; background: hsl(var(--destructive) / 0.3); }
                .boss-health div { height: 100%; background: hsl(var(--destructive)); animation: health 3s ease-in-out infinite; }
                @keyframes health { 0%, 100% { width: 100%; } 50% { width: 80%; } }
                .boss-defeat-overlay { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: hsl(var(--background) / 0.9); backdrop-filter: blur(12px); animation: zoom-in 0.4s ease-out; }
                @keyframes zoom-in { from { opacity: 0; transform: scale(2); } to { opacity: 1; transform: none; } }
                .boss-defeat { text-align: center; animation: bounce 0.5s ease-in-out 3; }
                @keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-20px); } }
                .boss-defeat .avatar { display: block; font-size: 6rem; margin-bottom: 1rem; animation: spin-once 1s ease-out; }
                .boss-defeat .title { font-size: 1.875rem; font-weight: 700; margin: 0 0 0.5rem; }
                .boss-defeat .stars { justify-content: center; font-size: 1.5rem; }
                .boss-counter { margin-top: 3rem; text-align: center; }
                .boss-counter .value { font-family: var(--font-display); font-size: 1.5rem; font-weight: 700; margin: 0; }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.2;"></div>

            <div ref={node} class="section-inner">
                <SectionHeader
                    eyebrow="[ CLIENT BATTLES ]"
                    title="BOSS REVIEWS"
                    subtitle="Every satisfied client is a boss defeated. Click to reveal their verdict."
                    revealed={revealed}
                />

                { for overlay }

                <div class="boss-grid">
                    { for cards }
                </div>

                <div class={classes!("boss-counter", "reveal", in_view)} style="transition-delay: 0.6s;">
                    <p class="value text-gradient">{ format!("{} / {}", battle.defeated.len(), TESTIMONIALS.len()) }</p>
                    <p class="font-mono text-muted" style="font-size: 0.875rem;">{"BOSSES DEFEATED"}</p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: BattleState, action: BattleAction) -> BattleState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_battle_resolves_into_defeat() {
        let state = apply(BattleState::default(), BattleAction::Engage("t1"));
        assert_eq!(state.current, Some("t1"));
        assert!(!state.is_defeated("t1"));

        let state = apply(state, BattleAction::Resolve("t1"));
        assert_eq!(state.current, None);
        assert_eq!(state.defeated, vec!["t1"]);
    }

    #[test]
    fn test_defeated_boss_cannot_be_engaged_again() {
        let state = BattleState { defeated: vec!["t2"], current: None };
        let state = apply(state, BattleAction::Engage("t2"));
        assert_eq!(state.current, None);
    }

    #[test]
    fn test_defeating_twice_keeps_one_entry() {
        let state = apply(BattleState::default(), BattleAction::Resolve("t3"));
        let state = apply(state, BattleAction::Resolve("t3"));
        assert_eq!(state.defeated, vec!["t3"]);
    }

    #[test]
    fn test_defeats_accumulate() {
        let mut state = BattleState::default();
        for id in ["t1", "t2", "t4"] {
            state = apply(state, BattleAction::Engage(id));
            state = apply(state, BattleAction::Resolve(id));
        }
        assert_eq!(state.defeated, vec!["t1", "t2", "t4"]);
    }

    #[test]
    fn test_no_second_battle_while_one_runs() {
        let state = apply(BattleState::default(), BattleAction::Engage("t1"));
        let state = apply(state, BattleAction::Engage("t2"));
        assert_eq!(state.current, Some("t1"));
    }
}
