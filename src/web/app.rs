//! Page wiring: navigation, theme, controls and the four canvas widgets.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::dom::{self, js_err};
use super::style;
use super::widget::CanvasWidget;
use crate::clock::{AnimationClock, NETWORK_RATE, REALTIME_RATE};
use crate::config::{VizConfig, CONFIG_ELEMENT_ID};
use crate::dataset::{format_context, CONTEXT_SLIDER};
use crate::error::{Result, VizError};
use crate::nav::{Navigator, Section};
use crate::scene::chart::PerformanceChart;
use crate::scene::dual_form::DualFormScene;
use crate::scene::network::{NetworkConfig, NetworkScene, Variant};
use crate::scene::process::ProcessScene;
use crate::scene::Scene;
use crate::theme::Theme;

/// Pages without this element are left alone.
pub const ROOT_ID: &str = "ttt-app";

const NAV_LISTS: [&str; 2] = ["desktop-nav-list", "mobile-nav-list"];
const SECTION_ATTR: &str = "data-section";

/// Config from the page's JSON block; malformed input falls back to defaults.
pub fn read_config(document: &Document) -> VizConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return VizConfig::default();
    };
    match VizConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            VizConfig::default()
        }
    }
}

struct App {
    nav: Navigator,
    theme: Rc<Cell<Theme>>,
    network: CanvasWidget<NetworkScene>,
    process: CanvasWidget<ProcessScene>,
    dual: CanvasWidget<DualFormScene>,
    chart: CanvasWidget<PerformanceChart>,
}

impl App {
    fn new(config: &VizConfig) -> Self {
        let theme = Rc::new(Cell::new(config.theme));
        let canvas = |id: &str| match dom::canvas(id) {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("{e}; widget will not draw");
                None
            }
        };

        let network_scene = NetworkScene::new(NetworkConfig {
            variant: config.variant,
            seed: config.seed,
            ..NetworkConfig::default()
        });
        let chart_scene = PerformanceChart {
            max_context: config.context_length,
            ..PerformanceChart::default()
        };

        Self {
            nav: Navigator::new(config.section),
            network: CanvasWidget::new(
                canvas("network-canvas"),
                network_scene,
                AnimationClock::new(NETWORK_RATE).with_speed(config.speed),
                theme.clone(),
            ),
            process: CanvasWidget::new(
                canvas("process-canvas"),
                ProcessScene::default(),
                AnimationClock::new(REALTIME_RATE),
                theme.clone(),
            ),
            dual: CanvasWidget::new(
                canvas("dual-canvas"),
                DualFormScene::default(),
                AnimationClock::new(REALTIME_RATE),
                theme.clone(),
            ),
            chart: CanvasWidget::new(
                canvas("performance-canvas"),
                chart_scene,
                AnimationClock::new(REALTIME_RATE),
                theme.clone(),
            ),
            theme,
        }
    }

    /// Show the active section, run its widgets and stop everything else.
    fn sync_sections(&self) -> Result<()> {
        let active = self.nav.active();
        for section in Section::ALL {
            let on = section == active;
            dom::toggle_class(&format!("section-{}", section.id()), "active", on);
        }
        for list in NAV_LISTS {
            let items = dom::document()?
                .query_selector_all(&format!("#{list} [{SECTION_ATTR}]"))
                .map_err(js_err)?;
            for i in 0..items.length() {
                let Some(el) = items.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                let on = el.get_attribute(SECTION_ATTR).as_deref() == Some(active.id());
                el.class_list().toggle_with_force("active", on).map_err(js_err)?;
            }
        }
        dom::toggle_class("mobile-nav", "open", self.nav.is_menu_open());

        self.run_if(&self.network, active == Section::Neural)?;
        self.run_if(&self.process, active == Section::Process)?;
        self.run_if(&self.dual, active == Section::Technical)?;
        if active == Section::Performance {
            self.chart.repaint();
        }
        Ok(())
    }

    fn run_if<S: Scene + 'static>(&self, widget: &CanvasWidget<S>, visible: bool) -> Result<()> {
        if visible {
            widget.start()
        } else {
            widget.stop();
            Ok(())
        }
    }

    fn apply_theme(&self) -> Result<()> {
        let theme = self.theme.get();
        let body = dom::document()?
            .body()
            .ok_or(VizError::MissingGlobal("document.body"))?;
        let classes = body.class_list();
        for t in [Theme::Dark, Theme::Light] {
            classes.toggle_with_force(t.body_class(), t == theme).map_err(js_err)?;
        }
        dom::set_text("theme-toggle", theme.toggle_label());
        self.chart.repaint();
        Ok(())
    }

    fn show_variant(&self, variant: Variant) {
        for v in [Variant::Linear, Variant::Mlp] {
            let id = format!("variant-{}", v.id());
            dom::set_text(&id, v.title());
            dom::toggle_class(&id, "active", v == variant);
        }
        dom::set_text("variant-description", variant.description());
    }

    fn show_playback(&self) {
        let (paused, speed) = self.network.with_state(|s| (s.clock.is_paused(), s.clock.speed()));
        dom::set_text("play-pause", if paused { "Play" } else { "Pause" });
        dom::set_text("speed-value", &format!("{speed:.1}x"));
        if let Ok(slider) = dom::input("speed-slider") {
            slider.set_value(&format!("{speed:.1}"));
        }
    }

    fn show_context(&self) {
        let max = self.chart.with_state(|s| s.scene.max_context);
        dom::set_text("context-value", &format_context(max));
        if let Ok(slider) = dom::input("context-slider") {
            slider.set_value(&max.to_string());
        }
    }
}

/// Build navigation, attach every listener and show the configured section.
pub fn mount(config: VizConfig) -> Result<()> {
    let document = dom::document()?;
    style::ensure_styles(&document)?;
    build_nav(&document)?;

    let app = Rc::new(RefCell::new(App::new(&config)));
    wire(&app)?;

    {
        let app = app.borrow();
        app.apply_theme()?;
        app.show_variant(config.variant);
        app.show_playback();
        app.show_context();
        app.sync_sections()?;
    }
    log::info!("mounted, section={}", config.section.id());

    // Listeners keep the app alive for the lifetime of the page.
    Ok(())
}

fn build_nav(document: &Document) -> Result<()> {
    for list_id in NAV_LISTS {
        let Some(list) = document.get_element_by_id(list_id) else {
            continue;
        };
        list.set_inner_html("");
        for section in Section::ALL {
            let item = document.create_element("li").map_err(js_err)?;
            let button = document.create_element("button").map_err(js_err)?;
            button.set_attribute(SECTION_ATTR, section.id()).map_err(js_err)?;
            button.set_text_content(Some(section.title()));
            item.append_child(&button).map_err(js_err)?;
            list.append_child(&item).map_err(js_err)?;
        }
    }
    Ok(())
}

fn wire(app: &Rc<RefCell<App>>) -> Result<()> {
    for list_id in NAV_LISTS {
        let Ok(list) = dom::element(list_id) else {
            continue;
        };
        let app = app.clone();
        dom::on(&list, "click", move |event| {
            let section = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&format!("[{SECTION_ATTR}]")).ok().flatten())
                .and_then(|el| el.get_attribute(SECTION_ATTR))
                .and_then(|id| Section::from_id(&id));
            let Some(section) = section else {
                return;
            };
            let mut app = app.borrow_mut();
            app.nav.select(section);
            if let Err(e) = app.sync_sections() {
                log::error!("section switch failed: {e}");
            }
        })?;
    }

    let menu_app = app.clone();
    dom::on_id("menu-toggle", "click", move |_| {
        let mut app = menu_app.borrow_mut();
        let open = app.nav.toggle_menu();
        dom::toggle_class("mobile-nav", "open", open);
    })?;

    let theme_app = app.clone();
    dom::on_id("theme-toggle", "click", move |_| {
        let app = theme_app.borrow();
        app.theme.set(app.theme.get().toggled());
        if let Err(e) = app.apply_theme() {
            log::error!("theme switch failed: {e}");
        }
    })?;

    for variant in [Variant::Linear, Variant::Mlp] {
        let variant_app = app.clone();
        dom::on_id(&format!("variant-{}", variant.id()), "click", move |_| {
            let app = variant_app.borrow();
            let changed = app.network.update(|s| {
                let changed = s.scene.set_variant(variant);
                if changed {
                    s.clock.reset();
                }
                changed
            });
            if changed {
                log::debug!("network variant -> {}", variant.id());
            }
            app.show_variant(variant);
        })?;
    }

    let play_app = app.clone();
    dom::on_id("play-pause", "click", move |_| {
        let app = play_app.borrow();
        app.network.update(|s| s.clock.toggle_paused());
        app.show_playback();
    })?;

    let speed_app = app.clone();
    dom::on_id("speed-slider", "input", move |_| {
        let Ok(speed) = dom::input("speed-slider").map(|el| el.value_as_number()) else {
            return;
        };
        let app = speed_app.borrow();
        app.network.update(|s| s.clock.set_speed(speed));
        app.show_playback();
    })?;

    let context_app = app.clone();
    dom::on_id("context-slider", "input", move |_| {
        let Ok(raw) = dom::input("context-slider").map(|el| el.value_as_number()) else {
            return;
        };
        let app = context_app.borrow();
        app.chart.update(|s| s.scene.max_context = CONTEXT_SLIDER.snap(raw));
        app.show_context();
    })?;

    Ok(())
}
