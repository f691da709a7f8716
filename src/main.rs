//! Hire Me entry point
//!
//! Wires the page's DOM to the core on wasm32; natively runs a scripted
//! quiz and submission against in-memory storage.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Element, FormData, HtmlCanvasElement, HtmlElement,
        HtmlFormElement, KeyboardEvent, MouseEvent,
    };

    use hire_me::consts::TYPEWRITER_START_DELAY_MS;
    use hire_me::effects::skills::{LEVEL_PROPERTY, card_transform, level_style};
    use hire_me::effects::{ParticleField, Typewriter};
    use hire_me::platform::dom::Page;
    use hire_me::platform::storage::LocalStorage;
    use hire_me::platform::timers::{every_frame, repeat_every, set_timeout};
    use hire_me::quiz::questions;
    use hire_me::submissions::PitchForm;
    use hire_me::{Portfolio, Settings, View};

    type App = Rc<RefCell<Portfolio<LocalStorage>>>;

    /// Apply pending page updates and arm timers for queued transitions
    fn dispatch(app: &App, page: &Rc<Page>) {
        let (events, transitions) = {
            let mut a = app.borrow_mut();
            (a.drain_events(), a.take_transitions())
        };
        for event in &events {
            page.apply(event);
        }
        for (delay, transition) in transitions {
            let app = app.clone();
            let page = page.clone();
            set_timeout(delay, move || {
                app.borrow_mut().fulfil(transition);
                dispatch(&app, &page);
            });
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Hire Me starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let storage = LocalStorage::open();
        let settings = Settings::load(&storage);
        let page = Rc::new(Page::new(document.clone(), settings.clone()));
        let app: App = Rc::new(RefCell::new(Portfolio::new(storage)));

        if let Some(container) = document.get_element_by_id("quiz-questions") {
            container.set_inner_html(&questions::render_html());
        }

        app.borrow_mut().start();
        dispatch(&app, &page);

        setup_particles(&window, &document, &settings)?;
        setup_typewriter(&document, &settings);
        setup_skill_cards(&document, &page)?;
        setup_click_handlers(&document, app.clone(), page.clone())?;
        setup_form(&document, app.clone(), page.clone())?;
        setup_keyboard(&document, app, page)?;

        log::info!("Hire Me running!");
        Ok(())
    }

    fn setup_particles(
        window: &web_sys::Window,
        document: &web_sys::Document,
        settings: &Settings,
    ) -> Result<(), JsValue> {
        let Some(canvas) = document
            .get_element_by_id("particles-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::warn!("No particle canvas, background disabled");
            return Ok(());
        };
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let count = settings.particle_count_for(width as f32);
        let seed = js_sys::Date::now() as u64;
        let field = Rc::new(RefCell::new(ParticleField::new(
            seed,
            count,
            width as f32,
            height as f32,
        )));
        log::info!("Particle field: {} particles", count);

        // Resize
        {
            let field = field.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                canvas.set_width(w as u32);
                canvas.set_height(h as u32);
                field.borrow_mut().resize(w as f32, h as f32);
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        every_frame(move || {
            let mut field = field.borrow_mut();
            field.step();
            let bounds = field.bounds();
            ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
            for p in field.particles() {
                ctx.begin_path();
                let _ = ctx.arc(
                    p.pos.x as f64,
                    p.pos.y as f64,
                    p.size as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.set_fill_style_str(&p.fill_style());
                ctx.fill();
            }
        });
        Ok(())
    }

    fn setup_typewriter(document: &web_sys::Document, settings: &Settings) {
        if !settings.effective_typewriter() {
            return;
        }
        let Some(title) = document.query_selector(".hero-title").ok().flatten() else {
            return;
        };
        let text = title.text_content().unwrap_or_default();
        let markup = title.inner_html();
        let speed = settings.typewriter_speed_ms;

        set_timeout(TYPEWRITER_START_DELAY_MS, move || {
            let mut typewriter = Typewriter::new(text).with_markup(markup);
            title.set_text_content(Some(""));
            repeat_every(speed, move || {
                let more = typewriter.tick();
                match typewriter.final_markup() {
                    Some(markup) => title.set_inner_html(markup),
                    None => title.set_text_content(Some(typewriter.visible())),
                }
                more
            });
        });
    }

    fn setup_skill_cards(document: &web_sys::Document, page: &Page) -> Result<(), JsValue> {
        // Level bars fill when the pointer enters their card
        for card in page.query_all(".skill-card") {
            let card_clone = card.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let Some(bar) = card_clone
                    .query_selector(".level-bar")
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                let level = bar.get_attribute("data-level").unwrap_or_default();
                match level_style(&level) {
                    Some(value) => {
                        let _ = bar.style().set_property(LEVEL_PROPERTY, &value);
                    }
                    None => log::warn!("Ignoring skill level {:?}", level),
                }
            });
            card.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Tilt
        for (event_name, hovered) in [("mouseover", true), ("mouseout", false)] {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(card) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlElement>().ok())
                    .filter(|el| el.class_list().contains("skill-card"))
                else {
                    return;
                };
                let _ = card.style().set_property("transform", card_transform(hovered));
            });
            document.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// Closest ancestor (or self) of the click target matching `selector`
    fn closest(event: &MouseEvent, selector: &str) -> Option<Element> {
        event
            .target()?
            .dyn_into::<Element>()
            .ok()?
            .closest(selector)
            .ok()
            .flatten()
    }

    fn setup_click_handlers(
        document: &web_sys::Document,
        app: App,
        page: Rc<Page>,
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            if let Some(btn) = closest(&event, ".option-btn") {
                let value = btn.get_attribute("data-value").and_then(|v| v.parse().ok());
                let question = btn
                    .closest(".question-card")
                    .ok()
                    .flatten()
                    .and_then(|card| card.get_attribute("data-question"))
                    .and_then(|q| q.parse().ok());
                if let (Some(question), Some(value)) = (question, value) {
                    let _ = app.borrow_mut().select_option(question, value);
                }
            } else if closest(&event, "#start-btn").is_some() {
                app.borrow_mut().show(View::Skills);
            } else if closest(&event, "#view-submissions-btn").is_some() {
                app.borrow_mut().view_submissions();
            } else if closest(&event, "#clear-submissions-btn").is_some() {
                let confirmed = web_sys::window()
                    .and_then(|w| {
                        w.confirm_with_message("Are you sure you want to clear all applications?")
                            .ok()
                    })
                    .unwrap_or(false);
                let _ = app.borrow_mut().clear_submissions(confirmed);
            } else if let Some(link) = closest(&event, "[data-view]") {
                if let Some(view) = link.get_attribute("data-view").as_deref().and_then(View::from_id) {
                    event.prevent_default();
                    app.borrow_mut().show(view);
                }
            } else if event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.id() == "success-modal")
            {
                // Backdrop click
                app.borrow_mut().close_modal();
            }
            dispatch(&app, &page);
        });
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_form(document: &web_sys::Document, app: App, page: Rc<Page>) -> Result<(), JsValue> {
        let Some(form) = document
            .get_element_by_id("employer-form")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            log::warn!("No employer form on the page");
            return Ok(());
        };

        let form_clone = form.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let Ok(data) = FormData::new_with_form(&form_clone) else {
                log::warn!("Could not read form data");
                return;
            };
            let pitch = PitchForm::from_fields(|name| data.get(name).as_string());
            let _ = app.borrow_mut().submit(pitch, chrono::Utc::now());
            dispatch(&app, &page);
        });
        form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_keyboard(document: &web_sys::Document, app: App, page: Rc<Page>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            #[allow(deprecated)]
            let code = event.key_code();
            if app.borrow_mut().key_down(code) {
                dispatch(&app, &page);
            }
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_page::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hire_me::quiz::{QuizEvent, QUESTIONS};
    use hire_me::submissions::{DisplayCard, PitchForm};
    use hire_me::{MemoryStorage, Portfolio, UiEvent, View};

    env_logger::init();
    log::info!("Hire Me (native) starting...");
    log::info!("The page itself runs in the browser - build with `trunk serve` for the web version");

    let mut app = Portfolio::new(MemoryStorage::new());
    app.start();
    app.show(View::Quiz);

    println!("\nTaking the quiz...");
    for q in &QUESTIONS {
        let choice = q.options[q.id % q.options.len()];
        println!("  {} -> {} ({} pts)", q.prompt, choice.label, choice.points);
        if let Err(e) = app.select_option(q.id, choice.points) {
            log::warn!("Answer rejected: {}", e);
        }
        // Fire timers immediately
        loop {
            let pending = app.take_transitions();
            if pending.is_empty() {
                break;
            }
            for (_, t) in pending {
                app.fulfil(t);
            }
        }
    }

    for event in app.drain_events() {
        if let UiEvent::Quiz(QuizEvent::Finished(result)) = event {
            println!("\nCompatibility: {}%\n{}", result.percentage, result.message());
        }
    }

    let pitch = PitchForm {
        company_name: "Example Corp".to_string(),
        contact_name: "Sam".to_string(),
        contact_role: "Engineering Manager".to_string(),
        why_hire: "We liked the particles".to_string(),
        company_culture: "Small team, big coffee".to_string(),
        remote_work: true,
        unlimited_coffee: true,
        ..Default::default()
    };
    match app.submit(pitch, chrono::Utc::now()) {
        Ok(record) => println!("\nSaved submission {}", record.id),
        Err(e) => log::error!("Could not save submission: {}", e),
    }

    for event in app.drain_events() {
        if let UiEvent::RenderSubmissions(cards) = event {
            for card in cards {
                if let DisplayCard::Submission(card) = card {
                    println!(
                        "  {} | {} | {} | {}% ({})",
                        card.company_name,
                        card.date,
                        card.contact,
                        card.score_percentage,
                        card.tier.as_str()
                    );
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
