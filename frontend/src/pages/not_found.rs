use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();

    use_effect_with_deps(
        |path: &String| {
            log::warn!("no route for {}", path);
            || ()
        },
        location.map(|loc| loc.path().to_string()).unwrap_or_default(),
    );

    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; text-align: center; padding: 1.5rem; }
                .not-found .code { font-size: clamp(4rem, 12vw, 8rem); margin: 0; }
                .not-found p { font-family: var(--font-mono); color: hsl(var(--muted-foreground)); margin: 0 0 1rem; }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.1;"></div>
            <div class="scan-lines" style="opacity: 0.2;"></div>
            <p class="section-eyebrow pulse">{"[ SIGNAL LOST ]"}</p>
            <h1 class="code font-display text-gradient neon-text">{"404"}</h1>
            <p>{"GAME OVER: this level does not exist."}</p>
            <Link<Route> classes={classes!("outline-link", "primary")} to={Route::Home}>
                {"RESPAWN AT HOME"}
            </Link<Route>>
        </div>
    }
}
