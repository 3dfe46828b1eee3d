use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    /// Bracketed label above the title, e.g. `[ PORTFOLIO ]`.
    pub eyebrow: AttrValue,
    /// Plain title line. Rendered alone with a gradient when `highlight` is empty.
    pub title: AttrValue,
    #[prop_or_default]
    pub highlight: AttrValue,
    pub subtitle: AttrValue,
    pub revealed: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", "reveal", props.revealed.then_some("in-view"))}>
            <p class="section-eyebrow">{ props.eyebrow.clone() }</p>
            {
                if !props.highlight.is_empty() {
                    html! {
                        <h2 class="section-title">
                            <span class="text-foreground">{ props.title.clone() }</span>
                            <br />
                            <span class="text-gradient neon-text">{ props.highlight.clone() }</span>
                        </h2>
                    }
                } else {
                    html! {
                        <h2 class="section-title text-gradient">{ props.title.clone() }</h2>
                    }
                }
            }
            <p class="section-subtitle">{ props.subtitle.clone() }</p>
        </div>
    }
}
