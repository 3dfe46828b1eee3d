use yew::prelude::*;

use crate::components::game_nav::NavItem;
use crate::components::section_page::{FooterContent, SectionPage};
use crate::hooks::use_section_navigator;
use crate::sections::booking::BookingSection;
use crate::sections::experiences::ExperiencesSection;
use crate::sections::gallery::GallerySection;
use crate::sections::hero::{HeroSection, LOUNGE_HERO};
use crate::sections::pricing::PricingSection;

const SECTIONS: &[&str] = &["hero", "experiences", "pricing", "gallery", "booking"];

const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "hero", label: "HOME", icon: "🏠" },
    NavItem { id: "experiences", label: "EXPERIENCES", icon: "🎮" },
    NavItem { id: "pricing", label: "PRICING", icon: "💰" },
    NavItem { id: "gallery", label: "GALLERY", icon: "📸" },
    NavItem { id: "booking", label: "BOOK NOW", icon: "🎯" },
];

const FOOTER: FooterContent = FooterContent {
    brand: "GAMER'S CREED",
    tagline: "DINDIGUL'S ULTIMATE GAMING LOUNGE",
    tags: &["PS5", "PC", "PSVR2", "Dolby Atmos", "Racing Sim"],
    copyright: "© 2024 Gamer's Creed. All rights reserved. Game on.",
};

/// The gaming lounge landing page.
#[function_component(Home)]
pub fn home() -> Html {
    let on_navigate = use_section_navigator();

    html! {
        <SectionPage sections={SECTIONS} nav_items={NAV_ITEMS} badge="GC" footer={FOOTER}>
            <HeroSection content={LOUNGE_HERO} on_navigate={on_navigate.clone()} />
            <ExperiencesSection />
            <PricingSection on_navigate={on_navigate} />
            <GallerySection />
            <BookingSection />
        </SectionPage>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_item_points_at_a_section() {
        assert!(NAV_ITEMS.iter().all(|item| SECTIONS.contains(&item.id)));
        assert_eq!(NAV_ITEMS.len(), SECTIONS.len());
    }
}
