use yew::prelude::*;

use crate::components::cyber_button::{ButtonSize, ButtonVariant, CyberButton};
use crate::components::particle_grid::ParticleGrid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineStyle {
    Plain,
    Gradient,
    Pulse,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeadlineLine {
    pub text: &'static str,
    pub style: LineStyle,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeroCta {
    pub icon: &'static str,
    pub label: &'static str,
    /// Section id scrolled to on click.
    pub target: &'static str,
}

/// Everything the hero renders that differs between the two sites.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeroContent {
    pub tagline: &'static str,
    pub headline: &'static [HeadlineLine],
    pub subtitle: &'static str,
    pub primary: HeroCta,
    pub secondary: HeroCta,
    pub hud_left: [&'static str; 2],
    pub hud_right: [&'static str; 2],
}

pub const PORTFOLIO_HERO: HeroContent = HeroContent {
    tagline: "[ SYSTEM ONLINE ]",
    headline: &[
        HeadlineLine { text: "LEVEL UP YOUR", style: LineStyle::Plain },
        HeadlineLine { text: "BRAND", style: LineStyle::Gradient },
        HeadlineLine { text: "WITH HIGH-PERFORMANCE", style: LineStyle::Plain },
        HeadlineLine { text: "WEBSITES", style: LineStyle::Pulse },
    ],
    subtitle: "Building fast, scalable, and conversion-focused digital experiences \
               that transform your online presence into a competitive advantage.",
    primary: HeroCta { icon: "▶", label: "START MISSION", target: "contact" },
    secondary: HeroCta { icon: "📁", label: "VIEW MISSIONS", target: "missions" },
    hud_left: ["SYS.STATUS: ACTIVE", "VERSION: 2.0.24"],
    hud_right: ["UPTIME: 99.9%", "PING: 12ms"],
};

pub const LOUNGE_HERO: HeroContent = HeroContent {
    tagline: "[ DINDIGUL'S ULTIMATE GAMING LOUNGE ]",
    headline: &[
        HeadlineLine { text: "ENTER THE", style: LineStyle::Plain },
        HeadlineLine { text: "GAMER'S CREED", style: LineStyle::Gradient },
        HeadlineLine { text: "NEXT-GEN CONSOLES, PC & VR", style: LineStyle::Plain },
        HeadlineLine { text: "GAME ON", style: LineStyle::Pulse },
    ],
    subtitle: "PS5, high-refresh gaming PCs, VR and racing rigs under one roof. \
               Grab your squad and claim your station.",
    primary: HeroCta { icon: "▶", label: "BOOK NOW", target: "booking" },
    secondary: HeroCta { icon: "💰", label: "VIEW PRICING", target: "pricing" },
    hud_left: ["SYS.STATUS: ONLINE", "STATIONS: READY"],
    hud_right: ["OPEN: 10:30 - 21:30", "PING: 12ms"],
};

fn line_class(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Plain => "text-foreground",
        LineStyle::Gradient => "text-gradient neon-text",
        LineStyle::Pulse => "text-gradient pulse-soft",
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub content: HeroContent,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let content = props.content;

    let navigate_to = |target: &'static str| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
    };

    let lines = content.headline.iter().enumerate().map(|(index, line)| {
        html! {
            <>
                if index > 0 {
                    <br />
                }
                <span class={line_class(line.style)}>{ line.text }</span>
            </>
        }
    });

    html! {
        <section id="hero" class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero .scan-lines { position: absolute; inset: 0; z-index: 10; pointer-events: none; }
                .hero-content { position: relative; z-index: 20; max-width: 64rem; margin: 0 auto; padding: 0 1.5rem; text-align: center; }
                .hero-loader { max-width: 28rem; margin: 0 auto 2rem; animation: hero-grow 2s ease-out both; }
                @keyframes hero-grow { from { width: 0; } to { width: 100%; } }
                .hero-loader .track { height: 4px; background: hsl(var(--muted)); overflow: hidden; }
                .hero-loader .track div {
                    height: 100%;
                    width: 33%;
                    background: linear-gradient(90deg, transparent, hsl(var(--primary)), transparent);
                    animation: sweep 1.5s linear infinite;
                }
                .hero-loader p { margin-top: 0.5rem; font-family: var(--font-mono); font-size: 0.75rem; letter-spacing: 0.2em; color: hsl(var(--muted-foreground)); animation: fade-in 0.5s ease-out 0.5s both; }
                .hero-headline { animation: hero-rise 0.8s ease-out 1s both; }
                @keyframes hero-rise { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: none; } }
                .hero-tagline { font-family: var(--font-display); font-size: 0.875rem; letter-spacing: 0.3em; color: hsl(var(--primary)); margin-bottom: 1rem; }
                .hero h1 { font-family: var(--font-display); font-size: clamp(2.25rem, 6vw, 4.5rem); font-weight: 700; line-height: 1.15; margin: 0 0 1.5rem; }
                .hero-subtitle { font-size: 1.25rem; color: hsl(var(--muted-foreground)); max-width: 42rem; margin: 0 auto 2.5rem; }
                .pulse-soft { animation: pulse-soft 2s ease-in-out infinite; }
                @keyframes pulse-soft { 0%, 100% { opacity: 1; } 50% { opacity: 0.7; } }
                .hero-ctas { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; align-items: center; animation: hero-rise 0.6s ease-out 1.8s both; }
                .hero-scroll {
                    position: absolute;
                    bottom: 6rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    animation: fade-in 0.5s ease-out 2.5s both;
                }
                .hero-scroll .inner { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; animation: float 2s ease-in-out infinite; }
                .hero-scroll span { font-family: var(--font-mono); font-size: 0.75rem; letter-spacing: 0.2em; color: hsl(var(--muted-foreground)); }
                .hero-scroll .mouse { width: 1.5rem; height: 2.5rem; border: 2px solid hsl(var(--primary) / 0.3); border-radius: 999px; display: flex; justify-content: center; padding-top: 0.5rem; }
                .hero-scroll .wheel { width: 6px; height: 12px; border-radius: 999px; background: hsl(var(--primary)); animation: wheel 1.5s ease-in-out infinite; }
                @keyframes wheel { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(12px); } }
                .hero-hud { position: absolute; top: 2rem; z-index: 20; font-family: var(--font-mono); font-size: 0.75rem; color: hsl(var(--primary) / 0.5); padding: 0.75rem; border-top: 2px solid hsl(var(--primary) / 0.3); }
                .hero-hud p { margin: 0; }
                .hero-hud.left { left: 2rem; border-left: 2px solid hsl(var(--primary) / 0.3); }
                .hero-hud.right { right: 2rem; text-align: right; border-right: 2px solid hsl(var(--primary) / 0.3); }
                "#}
            </style>

            <ParticleGrid />
            <div class="scan-lines"></div>

            <div class="hero-content">
                <div class="hero-loader">
                    <div class="track"><div></div></div>
                    <p>{"INITIALIZING SYSTEM..."}</p>
                </div>

                <div class="hero-headline">
                    <p class="hero-tagline">{ content.tagline }</p>
                    <h1>{ for lines }</h1>
                    <p class="hero-subtitle">{ content.subtitle }</p>
                </div>

                <div class="hero-ctas">
                    <CyberButton variant={ButtonVariant::Primary} size={ButtonSize::Lg} glowing={true} onclick={navigate_to(content.primary.target)}>
                        <span>{ content.primary.icon }</span>
                        { content.primary.label }
                    </CyberButton>
                    <CyberButton variant={ButtonVariant::Secondary} size={ButtonSize::Lg} onclick={navigate_to(content.secondary.target)}>
                        <span>{ content.secondary.icon }</span>
                        { content.secondary.label }
                    </CyberButton>
                </div>

                <div class="hero-scroll">
                    <div class="inner">
                        <span>{"SCROLL TO EXPLORE"}</span>
                        <div class="mouse"><div class="wheel"></div></div>
                    </div>
                </div>
            </div>

            <div class="hero-hud left">
                <p>{ content.hud_left[0] }</p>
                <p>{ content.hud_left[1] }</p>
            </div>
            <div class="hero-hud right">
                <p>{ content.hud_right[0] }</p>
                <p>{ content.hud_right[1] }</p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lounge_ctas_target_lounge_sections() {
        assert_eq!(LOUNGE_HERO.primary.target, "booking");
        assert_eq!(LOUNGE_HERO.secondary.target, "pricing");
        assert_eq!(PORTFOLIO_HERO.primary.target, "contact");
        assert_eq!(PORTFOLIO_HERO.secondary.target, "missions");
    }
}
