//! Widget behaviour simulated on the host: a clock fed with fake frame
//! timestamps drives a scene, exactly as the browser loop does.

use ttt_viz::clock::{AnimationClock, NETWORK_RATE, REALTIME_RATE};
use ttt_viz::config::VizConfig;
use ttt_viz::draw::{DisplayList, DrawCmd};
use ttt_viz::frame::LoopState;
use ttt_viz::nav::{Navigator, Section};
use ttt_viz::scene::chart::PerformanceChart;
use ttt_viz::scene::dual_form::DualFormScene;
use ttt_viz::scene::network::{NetworkConfig, NetworkScene, Variant};
use ttt_viz::scene::process::ProcessScene;
use ttt_viz::scene::{render, Scene};
use ttt_viz::theme::Theme;

const FRAME_MS: f64 = 1000.0 / 60.0;

/// Run `frames` callbacks and return the last display list.
fn drive<S: Scene>(scene: &S, clock: &mut AnimationClock, start_ms: f64, frames: usize) -> DisplayList {
    let mut list = DisplayList::new();
    for i in 0..frames {
        clock.tick(start_ms + i as f64 * FRAME_MS);
        list = render(scene, clock.time(), Theme::Dark.palette());
    }
    list
}

#[test]
fn every_scene_starts_with_a_full_clear() {
    fn check<S: Scene>(scene: S) {
        let (w, h) = scene.size();
        let list = render(&scene, 1.25, Theme::Light.palette());
        assert_eq!(list.commands().first(), Some(&DrawCmd::Clear { w, h }));
        assert!(list.len() > 1);
    }
    check(NetworkScene::new(NetworkConfig::default()));
    check(ProcessScene::default());
    check(DualFormScene::default());
    check(PerformanceChart::default());
}

#[test]
fn identical_inputs_render_identically() {
    let a = NetworkScene::new(NetworkConfig { seed: 99, ..NetworkConfig::default() });
    let b = NetworkScene::new(NetworkConfig { seed: 99, ..NetworkConfig::default() });
    for t in [0.0, 0.4, 3.7, 120.0] {
        assert_eq!(render(&a, t, Theme::Dark.palette()), render(&b, t, Theme::Dark.palette()));
    }
    let process = ProcessScene::default();
    assert_eq!(
        render(&process, 2.2, Theme::Dark.palette()),
        render(&process, 2.2, Theme::Dark.palette())
    );
}

#[test]
fn paused_widget_repaints_the_same_frame() {
    let scene = ProcessScene::default();
    let mut clock = AnimationClock::new(REALTIME_RATE);
    drive(&scene, &mut clock, 0.0, 30);
    clock.set_paused(true);
    let frozen = clock.time();
    let before = render(&scene, frozen, Theme::Dark.palette());
    let after = drive(&scene, &mut clock, 30.0 * FRAME_MS, 90);
    assert_eq!(clock.time(), frozen);
    assert_eq!(before, after);
}

#[test]
fn resuming_does_not_jump_over_the_pause() {
    let mut clock = AnimationClock::new(REALTIME_RATE);
    clock.tick(0.0);
    clock.tick(1000.0);
    assert!((clock.time() - 1.0).abs() < 1e-9);
    clock.set_paused(true);
    clock.tick(60_000.0);
    clock.set_paused(false);
    clock.tick(61_000.0);
    assert!((clock.time() - 2.0).abs() < 1e-9);
}

#[test]
fn hidden_interval_is_not_replayed_on_restart() {
    let mut state = LoopState::new();
    let mut clock = AnimationClock::new(REALTIME_RATE);
    assert!(state.start());
    clock.tick(0.0);
    clock.tick(1000.0);

    state.stop();
    if state.start() {
        clock.reanchor();
    }
    assert!((clock.tick(61_000.0) - 1.0).abs() < 1e-9);
    clock.tick(62_000.0);
    assert!((clock.time() - 2.0).abs() < 1e-9);
}

#[test]
fn speed_scales_network_time() {
    let mut slow = AnimationClock::new(NETWORK_RATE).with_speed(0.5);
    let mut fast = AnimationClock::new(NETWORK_RATE).with_speed(2.0);
    for now in [0.0, 500.0, 1000.0] {
        slow.tick(now);
        fast.tick(now);
    }
    assert!((slow.time() - 1000.0 * NETWORK_RATE * 0.5).abs() < 1e-12);
    assert!((fast.time() - 4.0 * slow.time()).abs() < 1e-12);
}

#[test]
fn variant_switch_restarts_the_animation() {
    let mut scene = NetworkScene::new(NetworkConfig::default());
    let mut clock = AnimationClock::new(NETWORK_RATE);
    drive(&scene, &mut clock, 0.0, 120);
    assert!(clock.time() > 0.0);

    assert!(scene.set_variant(Variant::Mlp));
    clock.reset();
    assert_eq!(clock.time(), 0.0);
    assert_eq!(scene.nodes().len(), 14);

    let fresh = NetworkScene::new(NetworkConfig { variant: Variant::Mlp, ..NetworkConfig::default() });
    assert_eq!(
        render(&scene, clock.time(), Theme::Dark.palette()),
        render(&fresh, 0.0, Theme::Dark.palette())
    );
}

#[test]
fn theme_changes_colours_not_geometry() {
    let scene = DualFormScene::default();
    let dark = render(&scene, 0.8, Theme::Dark.palette());
    let light = render(&scene, 0.8, Theme::Light.palette());
    assert_eq!(dark.len(), light.len());
    assert_ne!(dark, light);
}

#[test]
fn switching_sections_stops_hidden_loops() {
    let mut nav = Navigator::new(Section::Intro);
    let mut network = LoopState::new();
    let mut process = LoopState::new();

    fn sync(nav: &Navigator, network: &mut LoopState, process: &mut LoopState) {
        for (state, owner) in [(network, Section::Neural), (process, Section::Process)] {
            if nav.active() == owner {
                if state.start() {
                    state.scheduled(1);
                }
            } else {
                state.stop();
            }
        }
    }

    nav.select(Section::Neural);
    sync(&nav, &mut network, &mut process);
    assert!(network.is_running());
    assert!(!process.is_running());

    nav.select(Section::Process);
    sync(&nav, &mut network, &mut process);
    assert!(!network.is_running());
    assert!(process.is_running());
    // A callback the host had already queued for the network loop is dropped.
    assert!(!network.on_callback());
}

#[test]
fn page_config_feeds_the_widgets() {
    let config = VizConfig::from_json(
        r#"{ "variant": "mlp", "speed": 9.0, "context_length": 1000, "section": "performance" }"#,
    )
    .unwrap();
    assert_eq!(config.section, Section::Performance);
    assert_eq!(config.speed, 2.0);
    assert_eq!(config.context_length, 1024);

    let scene = NetworkScene::new(NetworkConfig {
        variant: config.variant,
        seed: config.seed,
        ..NetworkConfig::default()
    });
    assert_eq!(scene.config().variant, Variant::Mlp);

    let chart = PerformanceChart { max_context: config.context_length, ..PerformanceChart::default() };
    let frame = chart.frame(0.0);
    assert!(frame.lines.iter().all(|l| l.points.len() == 4));
}
