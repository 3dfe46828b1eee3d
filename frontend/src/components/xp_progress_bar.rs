use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct XpProgressBarProps {
    pub progress: f64,
    pub current_section: AttrValue,
}

/// Label shown next to the bar, e.g. `42%`.
pub fn progress_label(progress: f64) -> String {
    format!("{}%", progress.clamp(0.0, 100.0).round() as u32)
}

#[function_component(XpProgressBar)]
pub fn xp_progress_bar(props: &XpProgressBarProps) -> Html {
    let width = format!("width: {:.2}%;", props.progress.clamp(0.0, 100.0));

    html! {
        <div class="xp-bar-dock backdrop-cyber">
            <style>
                {r#"
                .xp-bar-dock {
                    position: fixed;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 40;
                    padding: 1rem;
                    border-top: 1px solid hsl(var(--hud));
                    animation: xp-rise 0.6s ease-out 1s both;
                }
                @keyframes xp-rise {
                    from { transform: translateY(100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .xp-bar-inner { max-width: 56rem; margin: 0 auto; }
                .xp-bar-meta { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem; }
                .xp-bar-meta .left, .xp-bar-meta .right { display: flex; gap: 0.75rem; align-items: center; }
                .xp-bar-track {
                    height: 8px;
                    background: hsl(var(--muted) / 0.5);
                    border: 1px solid hsl(var(--hud));
                    overflow: hidden;
                }
                .xp-bar-fill {
                    height: 100%;
                    background: linear-gradient(90deg, hsl(var(--primary)), hsl(var(--secondary)), hsl(var(--accent)));
                    box-shadow: 0 0 10px hsl(var(--primary) / 0.6);
                    transition: width 0.5s ease-out;
                }
                .xp-levels {
                    position: relative;
                    display: flex;
                    justify-content: space-between;
                    margin-top: 0.25rem;
                    font-family: var(--font-mono);
                    font-size: 10px;
                    color: hsl(var(--muted-foreground) / 0.5);
                }
                .xp-levels .mid { position: absolute; transform: translateX(-50%); }
                "#}
            </style>
            <div class="xp-bar-inner">
                <div class="xp-bar-meta">
                    <div class="left">
                        <span class="font-display text-primary" style="font-size: 0.75rem; letter-spacing: 0.2em;">
                            {"MISSION PROGRESS"}
                        </span>
                        <span class="font-mono text-muted" style="font-size: 0.75rem;">
                            { props.current_section.to_uppercase() }
                        </span>
                    </div>
                    <div class="right">
                        <span class="font-mono text-accent">{ progress_label(props.progress) }</span>
                        <span class="font-display text-muted" style="font-size: 0.75rem;">{"XP"}</span>
                    </div>
                </div>
                <div class="xp-bar-track">
                    <div class="xp-bar-fill" style={width}></div>
                </div>
                <div class="xp-levels">
                    <span>{"LVL 1"}</span>
                    <span class="mid" style="left: 25%;">{"LVL 2"}</span>
                    <span class="mid" style="left: 50%;">{"LVL 3"}</span>
                    <span class="mid" style="left: 75%;">{"LVL 4"}</span>
                    <span>{"LVL 5"}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_label_rounds() {
        assert_eq!(progress_label(0.0), "0%");
        assert_eq!(progress_label(49.5), "50%");
        assert_eq!(progress_label(99.4), "99%");
        assert_eq!(progress_label(140.0), "100%");
    }
}
