use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct GameNavProps {
    pub items: &'static [NavItem],
    pub active_section: AttrValue,
    pub on_navigate: Callback<&'static str>,
}

/// The desktop rail only spells out the hovered or the active entry.
pub fn label_visible(item: &NavItem, hovered: Option<&str>, active: &str) -> bool {
    hovered == Some(item.id) || active == item.id
}

#[function_component(GameNav)]
pub fn game_nav(props: &GameNavProps) -> Html {
    let menu_open = use_state(|| false);
    let hovered = use_state(|| None::<&'static str>);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let active = props.active_section.as_str();

    let rail = props.items.iter().enumerate().map(|(index, item)| {
        let is_active = active == item.id;
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            let id = item.id;
            Callback::from(move |_: MouseEvent| on_navigate.emit(id))
        };
        let onmouseenter = {
            let hovered = hovered.clone();
            let id = item.id;
            Callback::from(move |_: MouseEvent| hovered.set(Some(id)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };

        html! {
            <button
                key={item.id}
                class={classes!("rail-item", is_active.then_some("active"))}
                style={format!("animation-delay: {:.1}s;", 0.7 + index as f32 * 0.1)}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                if is_active {
                    <span class="rail-indicator"></span>
                }
                <span class="rail-icon">{ item.icon }</span>
                if label_visible(item, *hovered, active) {
                    <span class="rail-label">{ item.label }</span>
                }
            </button>
        }
    });

    let mobile_items = props.items.iter().enumerate().map(|(index, item)| {
        let is_active = active == item.id;
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            let close_menu = close_menu.clone();
            let id = item.id;
            Callback::from(move |e: MouseEvent| {
                on_navigate.emit(id);
                close_menu.emit(e);
            })
        };
        html! {
            <button
                key={item.id}
                class={classes!("mobile-item", is_active.then_some("active glow-border"))}
                style={format!("animation-delay: {:.2}s;", index as f32 * 0.05)}
                {onclick}
            >
                <span class="mobile-icon">{ item.icon }</span>
                <span>{ item.label }</span>
            </button>
        }
    });

    html! {
        <>
            <style>
                {r#"
                .game-rail {
                    position: fixed;
                    left: 1rem;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 50;
                    padding: 0.5rem;
                    display: none;
                    animation: rail-in 0.6s ease-out 0.5s both;
                }
                @media (min-width: 1024px) { .game-rail { display: block; } }
                @keyframes rail-in {
                    from { opacity: 0; transform: translate(-100px, -50%); }
                    to { opacity: 1; transform: translate(0, -50%); }
                }
                @keyframes item-in {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: none; }
                }
                .rail-list { display: flex; flex-direction: column; gap: 0.25rem; }
                .rail-item {
                    position: relative;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem 1rem;
                    font-family: var(--font-display);
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    color: hsl(var(--foreground) / 0.7);
                    transition: all 0.3s;
                    animation: item-in 0.4s ease-out both;
                }
                .rail-item:hover { color: hsl(var(--foreground)); background: linear-gradient(90deg, hsl(180 100% 50% / 0.1), transparent); }
                .rail-item.active { color: hsl(var(--primary)); background: hsl(var(--primary) / 0.1); }
                .rail-indicator {
                    position: absolute;
                    left: 0;
                    top: 0;
                    width: 4px;
                    height: 100%;
                    background: hsl(var(--primary));
                    box-shadow: 0 0 10px hsl(180 100% 50%), 0 0 20px hsl(180 100% 50%);
                }
                .rail-icon { font-size: 1.125rem; }
                .rail-label { white-space: nowrap; overflow: hidden; animation: fade-in 0.2s ease-out; }

                .burger {
                    position: fixed;
                    top: 1rem;
                    right: 1rem;
                    z-index: 60;
                    padding: 0.75rem;
                    animation: pop-in 0.3s ease-out 0.5s both;
                }
                @media (min-width: 1024px) { .burger, .mobile-menu { display: none !important; } }
                .burger-lines { display: flex; flex-direction: column; gap: 6px; width: 1.5rem; }
                .burger-lines span { height: 2px; width: 100%; background: hsl(var(--primary)); transition: all 0.3s; }
                .burger.open .burger-lines span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
                .burger.open .burger-lines span:nth-child(2) { opacity: 0; }
                .burger.open .burger-lines span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }

                .mobile-menu { position: fixed; inset: 0; z-index: 40; animation: fade-in 0.3s ease-out; }
                .mobile-panel {
                    position: absolute;
                    right: 0;
                    top: 0;
                    height: 100%;
                    width: 20rem;
                    padding: 5rem 2rem 2rem;
                    background: hsl(var(--card));
                    border-left: 1px solid hsl(var(--hud));
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    animation: panel-in 0.35s ease-out;
                }
                @keyframes panel-in { from { transform: translateX(100%); } to { transform: none; } }
                .mobile-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    font-family: var(--font-display);
                    font-size: 1.125rem;
                    letter-spacing: 0.1em;
                    color: hsl(var(--foreground) / 0.7);
                    border: 1px solid transparent;
                    transition: all 0.3s;
                    animation: fade-in 0.3s ease-out both;
                }
                .mobile-item:hover { color: hsl(var(--foreground)); border-color: hsl(var(--primary) / 0.3); }
                .mobile-item.active { color: hsl(var(--primary)); border-color: hsl(var(--primary)); background: hsl(var(--primary) / 0.1); }
                .mobile-icon { font-size: 1.5rem; }
                "#}
            </style>

            <nav class="game-rail hud-frame">
                <div class="rail-list">
                    { for rail }
                </div>
            </nav>

            <button class={classes!("burger", "hud-frame", (*menu_open).then_some("open"))} onclick={toggle_menu} aria-label="Toggle navigation">
                <div class="burger-lines">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </button>

            if *menu_open {
                <div class="mobile-menu backdrop-cyber">
                    <nav class="mobile-panel">
                        { for mobile_items }
                    </nav>
                </div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: NavItem = NavItem { id: "hero", label: "HOME", icon: "🏠" };

    #[test]
    fn test_label_visible_when_hovered_or_active() {
        assert!(label_visible(&HOME, None, "hero"));
        assert!(label_visible(&HOME, Some("hero"), "pricing"));
        assert!(!label_visible(&HOME, Some("pricing"), "pricing"));
        assert!(!label_visible(&HOME, None, "booking"));
    }
}
