use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::dom::{self, DomError};
use crate::particles::{grid_lines, ParticleField, DEFAULT_PARTICLE_COUNT, GRID_SPACING};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, DomError> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| DomError::Js("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| DomError::Js("not a 2d rendering context".to_string()))
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = dom::viewport_size().unwrap_or((0.0, 0.0));
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
    let (width, height) = (field.width(), field.height());
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_stroke_style_str("rgba(0, 240, 255, 0.03)");
    ctx.set_line_width(1.0);
    for x in grid_lines(width, GRID_SPACING) {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        ctx.stroke();
    }
    for y in grid_lines(height, GRID_SPACING) {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        ctx.stroke();
    }

    for p in field.particles() {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0).is_ok() {
            ctx.set_fill_style_str(&format!("rgba(0, 240, 255, {})", p.alpha));
            ctx.fill();
        }
    }

    for link in field.links() {
        ctx.begin_path();
        ctx.move_to(link.from.0, link.from.1);
        ctx.line_to(link.to.0, link.to.1);
        ctx.set_stroke_style_str(&format!("rgba(0, 240, 255, {})", link.alpha));
        ctx.stroke();
    }
}

/// Decorative canvas of drifting, interconnected particles behind the hero.
#[function_component(ParticleGrid)]
pub fn particle_grid() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let frame: FrameCallback = Rc::new(RefCell::new(None));
                let frame_id = Rc::new(RefCell::new(None::<i32>));
                let mut resize_listener: Option<Closure<dyn FnMut()>> = None;

                let setup = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or_else(|| DomError::MissingElement("particle canvas".to_string()))
                    .and_then(|canvas| context_2d(&canvas).map(|ctx| (canvas, ctx)));

                match (setup, dom::window()) {
                    (Ok((canvas, ctx)), Ok(window)) => {
                        let (width, height) = fit_to_viewport(&canvas);
                        let field = Rc::new(RefCell::new(ParticleField::new(
                            DEFAULT_PARTICLE_COUNT,
                            width,
                            height,
                            &mut rand::thread_rng(),
                        )));

                        let on_resize = {
                            let field = field.clone();
                            Closure::<dyn FnMut()>::new(move || {
                                let (width, height) = fit_to_viewport(&canvas);
                                field.borrow_mut().resize(width, height);
                            })
                        };
                        if let Err(err) = window
                            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                        {
                            log::warn!("could not attach resize listener: {:?}", err);
                        }
                        resize_listener = Some(on_resize);

                        let frame_loop = frame.clone();
                        let frame_id_loop = frame_id.clone();
                        let window_loop = window.clone();
                        *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
                            {
                                let mut field = field.borrow_mut();
                                field.step();
                                draw(&ctx, &field);
                            }
                            if let Some(callback) = frame_loop.borrow().as_ref() {
                                if let Ok(id) = window_loop.request_animation_frame(callback.as_ref().unchecked_ref()) {
                                    *frame_id_loop.borrow_mut() = Some(id);
                                }
                            }
                        }));

                        if let Some(callback) = frame.borrow().as_ref() {
                            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                                *frame_id.borrow_mut() = Some(id);
                            }
                        }
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        log::warn!("particle grid disabled: {}", err);
                    }
                }

                move || {
                    if let Ok(window) = dom::window() {
                        if let Some(id) = frame_id.borrow_mut().take() {
                            let _ = window.cancel_animation_frame(id);
                        }
                        if let Some(listener) = resize_listener.as_ref() {
                            let _ = window
                                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
                        }
                    }
                    // Break the self-referencing frame closure
                    frame.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <>
            <style>
                {r#"
                .particle-canvas {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    z-index: 0;
                }
                .particle-vignette {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    z-index: 1;
                    animation: fade-in 2s ease-out;
                    background:
                        radial-gradient(circle at 50% 50%, transparent 0%, hsl(220 20% 4%) 70%),
                        radial-gradient(circle at 20% 80%, hsl(180 100% 50% / 0.1) 0%, transparent 40%),
                        radial-gradient(circle at 80% 20%, hsl(270 100% 65% / 0.1) 0%, transparent 40%);
                }
                "#}
            </style>
            <canvas ref={canvas_ref} class="particle-canvas" />
            <div class="particle-vignette"></div>
        </>
    }
}
