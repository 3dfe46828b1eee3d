use yew::prelude::*;
use yew_hooks::use_timeout;

use crate::components::game_nav::{GameNav, NavItem};
use crate::components::loading_screen::LoadingScreen;
use crate::components::xp_progress_bar::XpProgressBar;
use crate::config;
use crate::dom;
use crate::hooks::{use_scroll_tracker, use_section_navigator};

/// Footer block shared by both sites.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FooterContent {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub tags: &'static [&'static str],
    pub copyright: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct SectionPageProps {
    /// Section ids in page order, used for active-section tracking.
    pub sections: &'static [&'static str],
    pub nav_items: &'static [NavItem],
    pub badge: AttrValue,
    pub footer: FooterContent,
    pub children: Children,
}

#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    let loading = use_state(|| true);
    let scroll = use_scroll_tracker(props.sections);
    let on_navigate = use_section_navigator();

    {
        let loading = loading.clone();
        use_timeout(
            move || {
                log::debug!("loading screen finished");
                loading.set(false);
            },
            config::LOADING_SCREEN_MS,
        );
    }

    use_effect_with_deps(
        |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    let footer = props.footer;

    html! {
        <>
            <LoadingScreen visible={*loading} badge={props.badge.clone()} />
            <div class="page-shell">
                <GameNav
                    items={props.nav_items}
                    active_section={AttrValue::Static(scroll.active)}
                    on_navigate={on_navigate}
                />
                <main>
                    { for props.children.iter() }
                </main>
                <XpProgressBar progress={scroll.progress} current_section={AttrValue::Static(scroll.active)} />
                <footer class="site-footer">
                    <div class="footer-brand">
                        <span class="font-display text-gradient">{ footer.brand }</span>
                        <p class="font-mono text-muted">{ footer.tagline }</p>
                    </div>
                    <div class="footer-tags">
                        { for footer.tags.iter().map(|tag| html! {
                            <span key={*tag} class="font-mono text-muted">{ *tag }</span>
                        }) }
                    </div>
                    <p class="footer-copyright font-mono">{ footer.copyright }</p>
                </footer>
            </div>
        </>
    }
}
