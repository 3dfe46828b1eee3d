use stylist::Style;
use yew::prelude::*;

use crate::theme::Accent;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Accent,
}

impl ButtonVariant {
    fn accent(self) -> Accent {
        match self {
            ButtonVariant::Primary => Accent::Primary,
            ButtonVariant::Secondary => Accent::Secondary,
            ButtonVariant::Accent => Accent::Accent,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

impl ButtonSize {
    fn padding(self) -> (&'static str, &'static str) {
        match self {
            ButtonSize::Sm => ("0.5rem 1rem", "0.75rem"),
            ButtonSize::Md => ("0.75rem 1.5rem", "0.875rem"),
            ButtonSize::Lg => ("1rem 2.5rem", "1rem"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CyberButtonProps {
    #[prop_or(ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    #[prop_or(ButtonSize::Md)]
    pub size: ButtonSize,
    #[prop_or_default]
    pub glowing: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

fn button_css(variant: ButtonVariant, size: ButtonSize, glowing: bool, full_width: bool) -> String {
    let accent = variant.accent();
    let (padding, font_size) = size.padding();
    let glow = if glowing {
        format!(
            "0 0 20px {}, 0 0 40px {}",
            accent.color_alpha(0.5),
            accent.color_alpha(0.3)
        )
    } else {
        "none".to_string()
    };

    format!(
        r#"
        position: relative;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: {width};
        padding: {padding};
        font-family: var(--font-display);
        font-size: {font_size};
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.15em;
        color: {color};
        border: 2px solid {color};
        background: {bg};
        backdrop-filter: blur(4px);
        box-shadow: {glow};
        overflow: hidden;
        cursor: pointer;
        transition: all 0.3s;
        clip-path: polygon(12px 0, 100% 0, 100% calc(100% - 12px), calc(100% - 12px) 100%, 0 100%, 0 12px);

        &:hover:not(:disabled) {{
            background: {bg_hover};
            transform: scale(1.02);
        }}
        &:active:not(:disabled) {{
            transform: scale(0.98);
        }}
        &:disabled {{
            opacity: 0.75;
            cursor: wait;
        }}
        .corner {{
            position: absolute;
            width: 12px;
            height: 12px;
            border-color: currentColor;
            border-style: solid;
        }}
        .corner.tl {{ top: 0; left: 0; border-width: 2px 0 0 2px; }}
        .corner.br {{ bottom: 0; right: 0; border-width: 0 2px 2px 0; }}
        .content {{
            position: relative;
            z-index: 10;
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
        }}
        .sweep {{
            position: absolute;
            left: 0;
            right: 0;
            top: 0;
            height: 50%;
            pointer-events: none;
            transform: translateY(-100%);
            transition: transform 0.5s linear;
            background: linear-gradient(transparent, hsl(var(--primary) / 0.2), transparent);
        }}
        &:hover .sweep {{
            transform: translateY(200%);
        }}
        "#,
        width = if full_width { "100%" } else { "auto" },
        padding = padding,
        font_size = font_size,
        color = accent.color(),
        bg = accent.color_alpha(0.1),
        bg_hover = accent.color_alpha(0.2),
        glow = glow,
    )
}

#[function_component(CyberButton)]
pub fn cyber_button(props: &CyberButtonProps) -> Html {
    let style = use_memo(
        |(variant, size, glowing, full_width)| {
            Style::new(button_css(*variant, *size, *glowing, *full_width))
        },
        (props.variant, props.size, props.glowing, props.full_width),
    );

    let class = match &*style {
        Ok(style) => style.get_class_name().to_string(),
        Err(err) => {
            log::warn!("failed to build button style: {}", err);
            String::new()
        }
    };

    html! {
        <button
            class={class}
            type={props.button_type.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            <span class="sweep"></span>
            <span class="corner tl"></span>
            <span class="corner br"></span>
            <span class="content">{ for props.children.iter() }</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_only_when_glowing() {
        let glowing = button_css(ButtonVariant::Secondary, ButtonSize::Lg, true, false);
        assert!(glowing.contains("box-shadow: 0 0 20px hsl(var(--secondary) / 0.5)"));
        assert!(glowing.contains("padding: 1rem 2.5rem;"));

        let plain = button_css(ButtonVariant::Primary, ButtonSize::Sm, false, true);
        assert!(plain.contains("box-shadow: none;"));
        assert!(plain.contains("width: 100%;"));
        assert!(plain.contains("color: hsl(var(--primary));"));
    }
}
