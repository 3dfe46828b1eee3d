use yew::prelude::*;

use crate::components::game_nav::NavItem;
use crate::components::section_page::{FooterContent, SectionPage};
use crate::hooks::use_section_navigator;
use crate::sections::achievements::AchievementsSection;
use crate::sections::character::CharacterSection;
use crate::sections::contact::ContactSection;
use crate::sections::hero::{HeroSection, PORTFOLIO_HERO};
use crate::sections::missions::MissionsSection;
use crate::sections::power_ups::PowerUpsSection;
use crate::sections::skill_tree::SkillTreeSection;
use crate::sections::testimonials::TestimonialsSection;

const SECTIONS: &[&str] = &[
    "hero",
    "character",
    "skills",
    "powerups",
    "missions",
    "achievements",
    "testimonials",
    "contact",
];

const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "hero", label: "HOME", icon: "🏠" },
    NavItem { id: "character", label: "PROFILE", icon: "👤" },
    NavItem { id: "skills", label: "SKILLS", icon: "🌳" },
    NavItem { id: "powerups", label: "POWER UPS", icon: "⚡" },
    NavItem { id: "missions", label: "MISSIONS", icon: "🎯" },
    NavItem { id: "achievements", label: "ACHIEVEMENTS", icon: "🏆" },
    NavItem { id: "testimonials", label: "REVIEWS", icon: "💬" },
    NavItem { id: "contact", label: "CONTACT", icon: "📡" },
];

const FOOTER: FooterContent = FooterContent {
    brand: "DEV_MASTER",
    tagline: "CRAFTING DIGITAL EXPERIENCES SINCE 2017",
    tags: &["React", "Next.js", "TypeScript", "Node.js", "Tailwind"],
    copyright: "© 2024 Jananika. All rights reserved. Game on.",
};

/// Developer portfolio presented as an RPG character sheet.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let on_navigate = use_section_navigator();

    html! {
        <SectionPage sections={SECTIONS} nav_items={NAV_ITEMS} badge="DEV" footer={FOOTER}>
            <HeroSection content={PORTFOLIO_HERO} on_navigate={on_navigate} />
            <CharacterSection />
            <SkillTreeSection />
            <PowerUpsSection />
            <MissionsSection />
            <AchievementsSection />
            <TestimonialsSection />
            <ContactSection />
        </SectionPage>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_follows_page_order() {
        let ids: Vec<_> = NAV_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids, SECTIONS);
    }
}
