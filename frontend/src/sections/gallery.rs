use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::hooks::use_reveal;
use crate::theme::{stagger, Accent};
use crate::Route;

struct Area {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    from: Accent,
    to: Accent,
}

const AREAS: &[Area] = &[
    Area {
        title: "PS5 ZONE",
        description: "4K HDR gaming stations with the latest titles",
        icon: "🎮",
        from: Accent::Primary,
        to: Accent::Secondary,
    },
    Area {
        title: "PC BATTLE STATIONS",
        description: "High-end rigs with RTX graphics and ultra-wide displays",
        icon: "🖥️",
        from: Accent::Secondary,
        to: Accent::Accent,
    },
    Area {
        title: "VR ARENA",
        description: "PSVR2 experience with full room-scale tracking",
        icon: "🥽",
        from: Accent::Accent,
        to: Accent::Primary,
    },
    Area {
        title: "DOLBY ATMOS LOUNGE",
        description: "Private room with cinema-grade surround sound",
        icon: "🔊",
        from: Accent::Primary,
        to: Accent::Accent,
    },
    Area {
        title: "RACING COCKPIT",
        description: "Logitech G923 full setup with pedals and shifter",
        icon: "🏎️",
        from: Accent::Secondary,
        to: Accent::Primary,
    },
    Area {
        title: "CHILL ZONE",
        description: "Relax between sessions with snacks and drinks",
        icon: "🛋️",
        from: Accent::Accent,
        to: Accent::Secondary,
    },
];

#[function_component(GallerySection)]
pub fn gallery_section() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let in_view = revealed.then_some("in-view");
    let active = use_state(|| None::<usize>);

    let tiles = AREAS.iter().enumerate().map(|(index, area)| {
        let is_active = *active == Some(index);
        let onmouseenter = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(Some(index)))
        };
        let onmouseleave = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(None))
        };
        let backdrop = format!(
            "background: linear-gradient(to bottom right, {}, {});",
            area.from.color_alpha(0.2),
            area.to.color_alpha(0.2)
        );

        html! {
            <div key={area.title} class={classes!("reveal-scale", in_view)} style={stagger(0.0, 0.1, index)}>
                <div
                    class={classes!("area-tile", "hud-frame", is_active.then_some("active glow-border"))}
                    {onmouseenter}
                    {onmouseleave}
                >
                    <div class="area-backdrop" style={backdrop}></div>
                    <div class="area-watermark">{ area.icon }</div>
                    <div class="area-content">
                        <div class="area-icon">{ area.icon }</div>
                        <h3 class="font-display text-foreground">{ area.title }</h3>
                        <p class="text-muted">{ area.description }</p>
                    </div>
                    <div class="scan-lines" style="opacity: 0.3;"></div>
                </div>
            </div>
        }
    });

    html! {
        <section id="gallery" class="page-section">
            <style>
                {r#"
                .area-grid { display: grid; gap: 1.5rem; }
                @media (min-width: 768px) { .area-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (min-width: 1024px) { .area-grid { grid-template-columns: repeat(3, 1fr); } }
                .area-tile { aspect-ratio: 4 / 3; display: flex; flex-direction: column; justify-content: flex-end; padding: 1.5rem; overflow: hidden; cursor: pointer; transition: all 0.5s; }
                .area-backdrop { position: absolute; inset: 0; opacity: 0.3; }
                .area-watermark { position: absolute; top: 50%; left: 50%; font-size: 6rem; opacity: 0.2; user-select: none; transform: translate(-50%, -50%); transition: transform 0.5s; }
                .area-tile.active .area-watermark { transform: translate(-50%, -50%) scale(1.3) rotate(10deg); }
                .area-content { position: relative; z-index: 10; }
                .area-icon { font-size: 1.875rem; margin-bottom: 0.5rem; }
                .area-content h3 { font-size: 1.125rem; margin: 0 0 0.25rem; }
                .area-content p { font-size: 0.875rem; margin: 0; max-height: 0; opacity: 0; overflow: hidden; transition: max-height 0.4s, opacity 0.4s; }
                .area-tile.active .area-content p { max-height: 4rem; opacity: 1; }
                .gallery-cta { text-align: center; margin-top: 3rem; }
                .gallery-cta > p { font-family: var(--font-mono); font-size: 0.875rem; color: hsl(var(--muted-foreground)); margin-bottom: 1rem; }
                .gallery-links { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }
                "#}
            </style>
            <div class="cyber-grid" style="opacity: 0.1;"></div>

            <div ref={node} class="section-inner">
                <div class={classes!("section-header", "reveal", in_view)}>
                    <p class="section-eyebrow">{"[ EXPLORE THE ARENA ]"}</p>
                    <h2 class="section-title">
                        <span class="text-foreground">{"INSIDE"}</span>
                        <br />
                        <span class="text-gradient neon-text">{"GAMER'S CREED"}</span>
                    </h2>
                    <p class="section-subtitle">{"A walkthrough of our premium gaming setup in Dindigul."}</p>
                </div>

                <div class="area-grid">
                    { for tiles }
                </div>

                <div class={classes!("gallery-cta", "reveal", in_view)} style="transition-delay: 0.8s;">
                    <p>{"SEE MORE ON OUR INSTAGRAM"}</p>
                    <div class="gallery-links">
                        <a class="outline-link primary" href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                            { config::INSTAGRAM_HANDLE }
                        </a>
                        <Link<Route> classes={classes!("outline-link", "secondary")} to={Route::Gallery}>
                            {"VIEW FULL GALLERY"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}
