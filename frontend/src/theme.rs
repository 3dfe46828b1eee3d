/// Theme colour roles shared by every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Accent,
    NeonPink,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Accent::Primary => "primary",
            Accent::Secondary => "secondary",
            Accent::Accent => "accent",
            Accent::NeonPink => "neon-pink",
        }
    }

    /// `hsl(var(--primary))` style colour reference.
    pub fn color(self) -> String {
        format!("hsl(var(--{}))", self.name())
    }

    pub fn color_alpha(self, alpha: f32) -> String {
        format!("hsl(var(--{}) / {})", self.name(), alpha)
    }

    pub fn text_class(self) -> String {
        format!("text-{}", self.name())
    }
}

/// Staggered entrance delay used by grid cards.
pub fn stagger(base: f32, step: f32, index: usize) -> String {
    format!("transition-delay: {:.2}s;", base + step * index as f32)
}

pub const GLOBAL_CSS: &str = r#"
:root {
    --background: 220 20% 4%;
    --foreground: 180 20% 92%;
    --card: 220 20% 7%;
    --muted: 220 15% 18%;
    --muted-foreground: 200 10% 60%;
    --primary: 180 100% 50%;
    --primary-foreground: 220 20% 4%;
    --secondary: 270 100% 65%;
    --accent: 150 100% 50%;
    --neon-pink: 320 100% 60%;
    --destructive: 0 85% 60%;
    --hud: 180 100% 50% / 0.25;
    --font-display: 'Orbitron', 'Segoe UI', sans-serif;
    --font-mono: 'Share Tech Mono', 'Fira Code', monospace;
    --font-body: 'Rajdhani', 'Segoe UI', sans-serif;
}
* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    margin: 0;
    background: hsl(var(--background));
    color: hsl(var(--foreground));
    font-family: var(--font-body);
    overflow-x: hidden;
}
a { color: inherit; text-decoration: none; }
button { font: inherit; color: inherit; background: none; border: none; cursor: pointer; }

.font-display { font-family: var(--font-display); }
.font-mono { font-family: var(--font-mono); }
.text-primary { color: hsl(var(--primary)); }
.text-secondary { color: hsl(var(--secondary)); }
.text-accent { color: hsl(var(--accent)); }
.text-neon-pink { color: hsl(var(--neon-pink)); }
.text-destructive { color: hsl(var(--destructive)); }
.text-muted { color: hsl(var(--muted-foreground)); }
.text-foreground { color: hsl(var(--foreground)); }

.text-gradient {
    background: linear-gradient(90deg, hsl(var(--primary)), hsl(var(--secondary)), hsl(var(--accent)));
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}
.neon-text { text-shadow: 0 0 12px hsl(var(--primary) / 0.6), 0 0 28px hsl(var(--secondary) / 0.4); }

.cyber-grid {
    position: absolute;
    inset: 0;
    pointer-events: none;
    background-image:
        linear-gradient(hsl(var(--primary) / 0.08) 1px, transparent 1px),
        linear-gradient(90deg, hsl(var(--primary) / 0.08) 1px, transparent 1px);
    background-size: 50px 50px;
}
.scan-lines {
    position: absolute;
    inset: 0;
    pointer-events: none;
    background: repeating-linear-gradient(0deg, transparent 0, transparent 2px, hsl(var(--background) / 0.25) 3px);
}
.hud-frame {
    position: relative;
    border: 1px solid hsl(var(--hud));
    background: hsl(var(--card) / 0.6);
    backdrop-filter: blur(6px);
}
.glow-border {
    border-color: hsl(var(--primary)) !important;
    box-shadow: 0 0 12px hsl(var(--primary) / 0.4), inset 0 0 12px hsl(var(--primary) / 0.1);
}
.backdrop-cyber { background: hsl(var(--background) / 0.85); backdrop-filter: blur(12px); }

.page-section {
    position: relative;
    min-height: 100vh;
    padding: 6rem 1.5rem;
    overflow: hidden;
}
.section-inner { position: relative; z-index: 10; max-width: 72rem; margin: 0 auto; }
.section-inner.narrow { max-width: 56rem; }
.card-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }

.section-header { text-align: center; margin-bottom: 4rem; }
.section-eyebrow { font-family: var(--font-mono); font-size: 0.875rem; letter-spacing: 0.2em; color: hsl(var(--primary)); margin: 0 0 0.5rem; }
.section-title { font-family: var(--font-display); font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 700; margin: 0 0 1rem; }
.section-subtitle { color: hsl(var(--muted-foreground)); max-width: 36rem; margin: 0 auto; }

.reveal { opacity: 0; transform: translateY(24px); transition: opacity 0.6s ease-out, transform 0.6s ease-out; }
.reveal.in-view { opacity: 1; transform: none; }
.reveal-scale { opacity: 0; transform: scale(0.9); transition: opacity 0.5s ease-out, transform 0.5s ease-out; }
.reveal-scale.in-view { opacity: 1; transform: none; }

.modal-backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1.5rem;
    background: hsl(var(--background) / 0.85);
    backdrop-filter: blur(10px);
    animation: fade-in 0.3s ease-out;
}
.tag { font-family: var(--font-mono); font-size: 0.7rem; padding: 0.25rem 0.5rem; border: 1px solid hsl(var(--hud)); }
.stat-strip { display: grid; grid-template-columns: repeat(auto-fit, minmax(140px, 1fr)); gap: 1rem; margin-top: 3rem; }
.stat-box { text-align: center; padding: 1rem; border: 1px solid hsl(var(--hud)); background: hsl(var(--card) / 0.3); }
.stat-box .value { font-family: var(--font-display); font-size: 1.875rem; font-weight: 700; margin: 0; }
.stat-box .label { font-family: var(--font-mono); font-size: 0.75rem; color: hsl(var(--muted-foreground)); margin: 0; }

.field label { display: block; font-family: var(--font-mono); font-size: 0.75rem; color: hsl(var(--primary)); margin-bottom: 0.5rem; }
.field input, .field select, .field textarea {
    width: 100%;
    background: hsl(var(--muted) / 0.4);
    border: 1px solid hsl(var(--hud));
    padding: 0.75rem 1rem;
    color: hsl(var(--foreground));
    font-family: var(--font-body);
    font-size: 1rem;
    resize: none;
}
.field input:focus, .field select:focus, .field textarea:focus { outline: none; border-color: hsl(var(--primary)); box-shadow: 0 0 0 1px hsl(var(--primary)); }
.form-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); margin-bottom: 1.5rem; }
.form-footer { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1rem; }
.success-panel { padding: 3rem; text-align: center; animation: pop-in 0.4s ease-out; }
.success-panel .trophy { font-size: 4.5rem; display: inline-block; animation: spin-once 1s ease-out; }

.page-shell { position: relative; min-height: 100vh; background: hsl(var(--background)); }
.site-footer { position: relative; padding: 3rem 1.5rem 6rem; border-top: 1px solid hsl(var(--hud)); text-align: center; }
.footer-brand { margin-bottom: 1.5rem; }
.footer-brand span { font-size: 1.5rem; font-weight: 700; }
.footer-brand p { font-size: 0.75rem; margin: 0.5rem 0 0; }
.footer-tags { display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; margin-bottom: 2rem; font-size: 0.75rem; }
.footer-copyright { font-size: 0.75rem; color: hsl(var(--muted-foreground) / 0.5); }

.stars { display: flex; gap: 0.25rem; margin-top: 1rem; }
.stars span { animation: pop-in 0.3s ease-out both; }

.outline-link { display: inline-flex; align-items: center; gap: 0.5rem; font-family: var(--font-display); font-size: 0.875rem; padding: 0.75rem 1.5rem; border: 1px solid; transition: all 0.3s; }
.outline-link:hover { transform: scale(1.05); }
.outline-link.primary { color: hsl(var(--primary)); border-color: hsl(var(--primary) / 0.3); }
.outline-link.primary:hover { background: hsl(var(--primary) / 0.1); }
.outline-link.secondary { color: hsl(var(--secondary)); border-color: hsl(var(--secondary) / 0.3); }
.outline-link.secondary:hover { background: hsl(var(--secondary) / 0.1); }
.outline-link.accent { color: hsl(var(--accent)); border-color: hsl(var(--accent)); letter-spacing: 0.05em; }
.outline-link.accent:hover { background: hsl(var(--accent) / 0.1); }
.spin { display: inline-block; animation: spin 1s linear infinite; }
.pulse { animation: pulse 2s ease-in-out infinite; }
.float { animation: float 2s ease-in-out infinite; }

@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes pop-in { from { opacity: 0; transform: scale(0.8); } to { opacity: 1; transform: scale(1); } }
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes spin-once { 0% { transform: scale(1) rotate(0); } 50% { transform: scale(1.2) rotate(180deg); } 100% { transform: scale(1) rotate(360deg); } }
@keyframes pulse { 0%, 100% { opacity: 1; transform: scale(1); } 50% { opacity: 0.6; transform: scale(1.1); } }
@keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(10px); } }
@keyframes sweep { from { transform: translateX(-100%); } to { transform: translateX(300%); } }
@keyframes slide-down { from { transform: translate(-50%, -100px); opacity: 0; } to { transform: translate(-50%, 0); opacity: 1; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_colors() {
        assert_eq!(Accent::Primary.color(), "hsl(var(--primary))");
        assert_eq!(Accent::NeonPink.color_alpha(0.15), "hsl(var(--neon-pink) / 0.15)");
        assert_eq!(Accent::Secondary.text_class(), "text-secondary");
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0.1, 0.1, 0), "transition-delay: 0.10s;");
        assert_eq!(stagger(0.1, 0.1, 3), "transition-delay: 0.40s;");
    }
}
