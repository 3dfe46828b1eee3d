use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cyber_button::{ButtonVariant, CyberButton};
use crate::config;
use crate::dom;
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    All,
    Console,
    Pc,
    Vr,
    Lounge,
    Simulator,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Console,
        Category::Pc,
        Category::Vr,
        Category::Lounge,
        Category::Simulator,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Console => "Console",
            Category::Pc => "PC",
            Category::Vr => "VR",
            Category::Lounge => "Lounge",
            Category::Simulator => "Simulator",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GalleryImage {
    pub src: &'static str,
    pub title: &'static str,
    pub category: Category,
}

const fn image(src: &'static str, title: &'static str, category: Category) -> GalleryImage {
    GalleryImage { src, title, category }
}

pub const IMAGES: &[GalleryImage] = &[
    image("/assets/gallery-ps5.jpg", "PS5 ZONE", Category::Console),
    image("/assets/gallery-pc.jpg", "PC BATTLE STATIONS", Category::Pc),
    image("/assets/gallery-vr.jpg", "VR ARENA", Category::Vr),
    image("/assets/gallery-dolby.jpg", "DOLBY ATMOS LOUNGE", Category::Lounge),
    image("/assets/gallery-racing.jpg", "RACING COCKPIT", Category::Simulator),
    image("/assets/gallery-chill.jpg", "CHILL ZONE", Category::Lounge),
    image("/assets/gallery-ps5.jpg", "PS5 MULTIPLAYER SETUP", Category::Console),
    image("/assets/gallery-pc.jpg", "COMPETITIVE PC RIG", Category::Pc),
    image("/assets/gallery-vr.jpg", "VR IMMERSIVE SESSION", Category::Vr),
    image("/assets/gallery-dolby.jpg", "PRIVATE SCREENING", Category::Lounge),
    image("/assets/gallery-racing.jpg", "SIM RACING LEAGUE", Category::Simulator),
    image("/assets/gallery-chill.jpg", "GAMING CAFE AREA", Category::Lounge),
];

/// Images shown for a category, in catalogue order.
pub fn filter_images(images: &[GalleryImage], category: Category) -> Vec<GalleryImage> {
    images
        .iter()
        .filter(|image| category == Category::All || image.category == category)
        .copied()
        .collect()
}

/// Previous lightbox index, wrapping from the first image to the last.
pub fn step_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if index == 0 {
        len - 1
    } else {
        (index - 1).min(len - 1)
    }
}

/// Next lightbox index, wrapping from the last image to the first.
pub fn step_next(index: usize, len: usize) -> usize {
    if len == 0 || index + 1 >= len {
        0
    } else {
        index + 1
    }
}

/// Active filter plus the lightbox index into the filtered list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryState {
    pub category: Category,
    pub selected: Option<usize>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { category: Category::All, selected: None }
    }
}

pub enum GalleryAction {
    SetCategory(Category),
    Open(usize),
    Prev,
    Next,
    Close,
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let len = filter_images(IMAGES, self.category).len();
        let next = match action {
            // Indices into the previous filtered list are stale
            GalleryAction::SetCategory(category) => GalleryState { category, selected: None },
            GalleryAction::Open(index) if index < len => GalleryState { selected: Some(index), ..*self },
            GalleryAction::Open(_) => return self,
            GalleryAction::Prev => GalleryState {
                selected: self.selected.map(|index| step_prev(index, len)),
                ..*self
            },
            GalleryAction::Next => GalleryState {
                selected: self.selected.map(|index| step_next(index, len)),
                ..*self
            },
            GalleryAction::Close => GalleryState { selected: None, ..*self },
        };
        Rc::new(next)
    }
}

fn open(url: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Err(err) = dom::open_external(url) {
            log::warn!("could not open {}: {}", url, err);
        }
    })
}

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let gallery = use_reducer_eq(GalleryState::default);

    use_effect_with_deps(
        |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    let images = use_memo(|category| filter_images(IMAGES, *category), gallery.category);

    let close = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Close))
    };

    let prev = {
        let gallery = gallery.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            gallery.dispatch(GalleryAction::Prev);
        })
    };

    let next = {
        let gallery = gallery.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            gallery.dispatch(GalleryAction::Next);
        })
    };

    let filters = Category::ALL.iter().map(|cat| {
        let cat = *cat;
        let onclick = {
            let gallery = gallery.clone();
            Callback::from(move |_: MouseEvent| {
                log::debug!("gallery filter set to {}", cat.label());
                gallery.dispatch(GalleryAction::SetCategory(cat));
            })
        };
        html! {
            <button key={cat.label()} class={classes!("filter-chip", (gallery.category == cat).then_some("active"))} {onclick}>
                { cat.label() }
            </button>
        }
    });

    let tiles = images.iter().enumerate().map(|(index, image)| {
        let onclick = {
            let gallery = gallery.clone();
            Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Open(index)))
        };
        html! {
            <div
                key={format!("{}-{}", image.title, index)}
                class="photo-tile hud-frame"
                style={format!("animation-delay: {:.2}s;", 0.05 * index as f32)}
                {onclick}
            >
                <img src={image.src} alt={image.title} loading="lazy" />
                <div class="photo-shade"></div>
                <div class="photo-caption">
                    <p class="font-display">{ image.title }</p>
                    <p class="font-mono text-primary">{ image.category.label() }</p>
                </div>
                <div class="scan-lines" style="opacity: 0.1;"></div>
            </div>
        }
    });

    let lightbox = gallery.selected.and_then(|index| images.get(index).copied()).map(|image| {
        html! {
            <div class="modal-backdrop lightbox" onclick={close.clone()}>
                <div class="lightbox-frame" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <img src={image.src} alt={image.title} />
                    <div class="lightbox-caption">
                        <p class="font-display">{ image.title }</p>
                        <p class="font-mono text-primary">{ image.category.label() }</p>
                    </div>
                    <button class="lightbox-close font-display" onclick={close.clone()}>{"CLOSE"}</button>
                    <button class="lightbox-arrow left font-display" onclick={prev.clone()}>{"<"}</button>
                    <button class="lightbox-arrow right font-display" onclick={next.clone()}>{">"}</button>
                </div>
            </div>
        }
    });

    html! {
        <div class="gallery-page">
            <style>
                {r#"
                .gallery-page { min-height: 100vh; }
                .gallery-topbar { border-bottom: 1px solid hsl(var(--hud)); }
                .gallery-topbar > div { max-width: 80rem; margin: 0 auto; padding: 1.5rem; display: flex; align-items: center; justify-content: space-between; gap: 1rem; }
                .gallery-topbar h1 { font-size: 1.25rem; margin: 0; }
                .gallery-topbar .spacer { width: 120px; }
                .gallery-body { max-width: 80rem; margin: 0 auto; padding: 3rem 1.5rem; }
                .gallery-links { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; margin-bottom: 2rem; }
                .filter-bar { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem; margin-bottom: 2.5rem; }
                .filter-chip { font-family: var(--font-mono); font-size: 0.75rem; padding: 0.5rem 1rem; border: 1px solid hsl(var(--hud)); background: transparent; color: hsl(var(--muted-foreground)); cursor: pointer; transition: all 0.3s; }
                .filter-chip:hover { border-color: hsl(var(--primary) / 0.5); color: hsl(var(--foreground)); }
                .filter-chip.active { border-color: hsl(var(--primary)); background: hsl(var(--primary) / 0.1); color: hsl(var(--primary)); }
                .photo-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
                @media (min-width: 768px) { .photo-grid { grid-template-columns: repeat(3, 1fr); } }
                @media (min-width: 1024px) { .photo-grid { grid-template-columns: repeat(4, 1fr); } }
                .photo-tile { aspect-ratio: 1; overflow: hidden; cursor: pointer; animation: pop-in 0.4s ease-out both; }
                .photo-tile img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s; }
                .photo-tile:hover img { transform: scale(1.1); }
                .photo-shade { position: absolute; inset: 0; opacity: 0; transition: opacity 0.3s; background: linear-gradient(to top, hsl(var(--background) / 0.9), transparent); }
                .photo-tile:hover .photo-shade { opacity: 1; }
                .photo-caption { position: absolute; left: 0; right: 0; bottom: 0; padding: 0.75rem; transform: translateY(100%); transition: transform 0.3s; }
                .photo-tile:hover .photo-caption { transform: none; }
                .photo-caption p { margin: 0; font-size: 0.75rem; }
                .photo-caption p + p { font-size: 10px; }
                .gallery-footer { text-align: center; margin-top: 4rem; }
                .gallery-footer > p { font-family: var(--font-mono); font-size: 0.875rem; color: hsl(var(--muted-foreground)); margin-bottom: 1.5rem; }
                .gallery-footer > div { display: flex; justify-content: center; gap: 1rem; }
                .lightbox { cursor: pointer; }
                .lightbox-frame { position: relative; width: 100%; max-width: 56rem; max-height: 80vh; cursor: default; animation: pop-in 0.3s ease-out; }
                .lightbox-frame img { width: 100%; max-height: 80vh; object-fit: contain; border-radius: 4px; }
                .lightbox-caption { position: absolute; left: 0; right: 0; bottom: 0; padding: 1rem; background: linear-gradient(to top, hsl(var(--background)), transparent); }
                .lightbox-caption p { margin: 0; font-size: 1.125rem; }
                .lightbox-caption p + p { font-size: 0.75rem; }
                .lightbox-close { position: absolute; top: 1rem; right: 1rem; font-size: 0.875rem; color: hsl(var(--foreground)); border: 1px solid hsl(var(--hud)); padding: 0.25rem 0.75rem; background: hsl(var(--background) / 0.8); cursor: pointer; }
                .lightbox-close:hover { border-color: hsl(var(--primary)); }
                .lightbox-arrow { position: absolute; top: 50%; transform: translateY(-50%); font-size: 1.5rem; padding: 0.5rem; background: none; border: none; color: hsl(var(--foreground) / 0.7); cursor: pointer; }
                .lightbox-arrow:hover { color: hsl(var(--primary)); }
                .lightbox-arrow.left { left: 1rem; }
                .lightbox-arrow.right { right: 1rem; }
                "#}
            </style>

            <div class="gallery-topbar">
                <div>
                    <Link<Route> classes={classes!("outline-link", "primary")} to={Route::Home}>
                        {"< BACK TO HOME"}
                    </Link<Route>>
                    <h1 class="font-display text-foreground">
                        {"GAMER'S CREED "}
                        <span class="text-primary">{"GALLERY"}</span>
                    </h1>
                    <div class="spacer"></div>
                </div>
            </div>

            <div class="gallery-body">
                <div class="section-header">
                    <p class="section-eyebrow">{"[ FULL GALLERY ]"}</p>
                    <h2 class="section-title">
                        <span class="text-foreground">{"OUR "}</span>
                        <span class="text-gradient neon-text">{"ARENA"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"Browse all images from our gaming lounge. Follow us on Instagram for the latest updates."}
                    </p>
                </div>

                <div class="gallery-links">
                    <a class="outline-link primary" href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                        {"VIEW ON INSTAGRAM"}
                    </a>
                    <a class="outline-link secondary" href={config::GOOGLE_IMAGES_URL} target="_blank" rel="noopener noreferrer">
                        {"VIEW ON GOOGLE"}
                    </a>
                </div>

                <div class="filter-bar">
                    { for filters }
                </div>

                <div class="photo-grid">
                    { for tiles }
                </div>

                <div class="gallery-footer">
                    <p>{"WANT TO SEE MORE? CHECK OUT OUR SOCIAL MEDIA"}</p>
                    <div>
                        <CyberButton variant={ButtonVariant::Primary} onclick={open(config::INSTAGRAM_URL)}>
                            {"INSTAGRAM"}
                        </CyberButton>
                        <CyberButton variant={ButtonVariant::Secondary} onclick={open(config::MAPS_PLACE_URL)}>
                            {"GOOGLE MAPS"}
                        </CyberButton>
                    </div>
                </div>
            </div>

            { for lightbox }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: GalleryState, action: GalleryAction) -> GalleryState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn test_category_change_closes_lightbox() {
        let state = apply(GalleryState::default(), GalleryAction::Open(7));
        assert_eq!(state.selected, Some(7));

        let state = apply(state, GalleryAction::SetCategory(Category::Vr));
        assert_eq!(state.category, Category::Vr);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_lightbox_steps_wrap_within_filter() {
        // Two VR images
        let state = apply(GalleryState::default(), GalleryAction::SetCategory(Category::Vr));
        let state = apply(state, GalleryAction::Open(1));
        let state = apply(state, GalleryAction::Next);
        assert_eq!(state.selected, Some(0));
        let state = apply(state, GalleryAction::Prev);
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn test_open_outside_filter_is_ignored() {
        let state = apply(GalleryState::default(), GalleryAction::SetCategory(Category::Pc));
        let state = apply(state, GalleryAction::Open(5));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_close_and_step_without_selection() {
        let state = apply(GalleryState::default(), GalleryAction::Open(3));
        let state = apply(state, GalleryAction::Close);
        assert_eq!(state.selected, None);
        let state = apply(state, GalleryAction::Next);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_all_is_identity() {
        assert_eq!(filter_images(IMAGES, Category::All), IMAGES.to_vec());
    }

    #[test]
    fn test_filter_keeps_catalogue_order() {
        let lounge: Vec<_> = filter_images(IMAGES, Category::Lounge)
            .into_iter()
            .map(|image| image.title)
            .collect();
        assert_eq!(
            lounge,
            vec!["DOLBY ATMOS LOUNGE", "CHILL ZONE", "PRIVATE SCREENING", "GAMING CAFE AREA"]
        );
        assert_eq!(filter_images(IMAGES, Category::Vr).len(), 2);
    }

    #[test]
    fn test_every_category_has_images() {
        for category in Category::ALL {
            assert!(!filter_images(IMAGES, category).is_empty(), "{:?}", category);
        }
    }

    #[test]
    fn test_stepping_wraps_both_ways() {
        assert_eq!(step_prev(0, 4), 3);
        assert_eq!(step_prev(2, 4), 1);
        assert_eq!(step_next(3, 4), 0);
        assert_eq!(step_next(1, 4), 2);
        assert_eq!(step_next(0, 1), 0);
        assert_eq!(step_prev(0, 1), 0);
    }

    #[test]
    fn test_stepping_empty_list() {
        assert_eq!(step_prev(0, 0), 0);
        assert_eq!(step_next(0, 0), 0);
    }
}
