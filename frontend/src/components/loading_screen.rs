use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub visible: bool,
    /// Text inside the spinning logo.
    pub badge: AttrValue,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <div class={classes!("loading-screen", (!props.visible).then_some("done"))} aria-hidden={(!props.visible).to_string()}>
            <style>
                {r#"
                .loading-screen {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: hsl(var(--background));
                    transition: opacity 0.5s ease-out, visibility 0.5s;
                }
                .loading-screen.done { opacity: 0; visibility: hidden; pointer-events: none; }
                .loading-logo { position: relative; width: 6rem; height: 6rem; margin-bottom: 2rem; animation: pop-in 0.5s ease-out 0.2s both; }
                .loading-logo .outer {
                    position: absolute;
                    inset: 0;
                    border: 2px solid hsl(var(--primary));
                    border-radius: 0.5rem;
                    box-shadow: 0 0 20px hsl(var(--primary)), inset 0 0 20px hsl(var(--primary) / 0.2);
                    animation: spin 2s linear infinite;
                }
                .loading-logo .inner {
                    position: absolute;
                    inset: 0.5rem;
                    border: 1px solid hsl(var(--secondary));
                    border-radius: 0.25rem;
                    animation: spin 3s linear infinite reverse;
                }
                .loading-logo .badge {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: hsl(var(--primary));
                }
                .loading-track { width: 16rem; height: 4px; margin-bottom: 1rem; background: hsl(var(--muted)); overflow: hidden; }
                .loading-track div {
                    width: 50%;
                    height: 100%;
                    background: linear-gradient(90deg, transparent, hsl(var(--primary)), transparent);
                    animation: sweep 1s linear infinite;
                }
                .loading-text { text-align: center; animation: fade-in 0.5s ease-out 0.5s both; }
                .loading-text .status { font-family: var(--font-mono); font-size: 0.875rem; letter-spacing: 0.2em; color: hsl(var(--primary)); animation: pulse 1.5s ease-in-out infinite; }
                .loading-text .hint { font-family: var(--font-mono); font-size: 0.75rem; color: hsl(var(--muted-foreground)); animation: fade-in 0.5s ease-out 1s both; }
                "#}
            </style>
            <div class="loading-logo">
                <div class="outer"></div>
                <div class="inner"></div>
                <div class="badge">{ props.badge.clone() }</div>
            </div>
            <div class="loading-track"><div></div></div>
            <div class="loading-text">
                <p class="status">{"INITIALIZING SYSTEM..."}</p>
                <p class="hint">{"Loading assets • Preparing experience"}</p>
            </div>
            <div class="scan-lines"></div>
        </div>
    }
}
