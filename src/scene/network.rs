//! Hidden-state network with fluctuating link weights.
//!
//! Purely illustrative motion: every displayed weight is
//! `base + 0.3 * sin(1.5 t + 0.5 layer + 0.01 y)`, nothing is learned.

use std::f64::consts::PI;

use serde::Deserialize;

use super::{oscillate, Scene};
use crate::draw::{DisplayList, Paint, Point, Rect};
use crate::prng::Prng;
use crate::theme::Palette;

pub const WEIGHT_AMPLITUDE: f64 = 0.3;
pub const BASE_WEIGHT_RANGE: f64 = 0.4;
const MAX_NODE_RADIUS: f64 = 15.0;

/// Hidden-state model shown in the network widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Linear,
    Mlp,
}

impl Variant {
    pub fn layers(self) -> &'static [usize] {
        match self {
            Variant::Linear => &[4, 4],
            Variant::Mlp => &[4, 6, 4],
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Variant::Linear => "linear",
            Variant::Mlp => "mlp",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Linear => "TTT-Linear",
            Variant::Mlp => "TTT-MLP",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Variant::Linear => {
                "The hidden state is a single weight matrix (W). It is updated with each token \
                 using gradient descent on a self-supervised reconstruction loss, capturing \
                 linear relationships in the sequence efficiently."
            }
            Variant::Mlp => {
                "The hidden state is a 2-layer MLP with weights (W1, W2). It captures more \
                 complex, non-linear patterns, which helps on long contexts at a higher cost \
                 per update step."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkConfig {
    pub variant: Variant,
    pub width: f64,
    pub height: f64,
    pub seed: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Linear,
            width: 600.0,
            height: 350.0,
            seed: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub position: Point,
    pub layer: usize,
    pub radius: f64,
    /// Index into `Palette::layers`, cycled.
    pub color_key: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLink {
    pub source: usize,
    pub target: usize,
    pub base_weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkScene {
    config: NetworkConfig,
    nodes: Vec<SceneNode>,
    links: Vec<SceneLink>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkFrame {
    pub from: Point,
    pub to: Point,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseFrame {
    pub center: Point,
    pub radius: f64,
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkFrame {
    pub links: Vec<LinkFrame>,
    pub pulses: Vec<PulseFrame>,
}

impl NetworkScene {
    pub fn new(config: NetworkConfig) -> Self {
        let (nodes, links) = layout(&config);
        log::debug!(
            "network layout: variant={} nodes={} links={}",
            config.variant.id(),
            nodes.len(),
            links.len()
        );
        Self { config, nodes, links }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[SceneLink] {
        &self.links
    }

    /// Rebuilds the layout when the variant actually changes.
    pub fn set_variant(&mut self, variant: Variant) -> bool {
        if self.config.variant == variant {
            return false;
        }
        *self = Self::new(NetworkConfig { variant, ..self.config });
        true
    }

    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if self.config.width == width && self.config.height == height {
            return false;
        }
        *self = Self::new(NetworkConfig { width, height, ..self.config });
        true
    }

    /// Weight shown for `link` at `time`, before any display clamping.
    pub fn displayed_weight(&self, link: &SceneLink, time: f64) -> f64 {
        let source = &self.nodes[link.source];
        let phase = source.layer as f64 * 0.5 + source.position.y * 0.01;
        oscillate(link.base_weight, WEIGHT_AMPLITUDE, 1.5, time, phase)
    }

    fn is_edge_layer(&self, layer: usize) -> bool {
        layer == 0 || layer + 1 == self.config.variant.layers().len()
    }
}

fn layout(config: &NetworkConfig) -> (Vec<SceneNode>, Vec<SceneLink>) {
    let layers = config.variant.layers();
    let (w, h) = (config.width, config.height);
    let mut nodes = Vec::new();
    let mut layer_start = Vec::with_capacity(layers.len());

    for (layer, &count) in layers.iter().enumerate() {
        layer_start.push(nodes.len());
        let x = w / (layers.len() + 1) as f64 * (layer + 1) as f64;
        let radius = MAX_NODE_RADIUS.min(h / (count as f64 * 2.5));
        for i in 0..count {
            let y = h / (count + 1) as f64 * (i + 1) as f64;
            nodes.push(SceneNode {
                position: Point::new(x, y),
                layer,
                radius,
                color_key: layer % 3,
            });
        }
    }

    let mut rng = Prng::new(config.seed);
    let mut links = Vec::new();
    for layer in 0..layers.len().saturating_sub(1) {
        let sources = layer_start[layer]..layer_start[layer] + layers[layer];
        let targets = layer_start[layer + 1]..layer_start[layer + 1] + layers[layer + 1];
        for source in sources {
            for target in targets.clone() {
                links.push(SceneLink {
                    source,
                    target,
                    base_weight: rng.gen_range_f64(-BASE_WEIGHT_RANGE, BASE_WEIGHT_RANGE),
                });
            }
        }
    }
    (nodes, links)
}

/// Stroke alpha for a displayed weight.
pub fn link_alpha(weight: f64) -> f64 {
    (weight.abs() * 1.5).min(0.8)
}

/// Stroke width for a displayed weight.
pub fn link_width(weight: f64) -> f64 {
    (weight.abs() * 4.0 + 0.3).min(3.0)
}

impl Scene for NetworkScene {
    type Frame = NetworkFrame;

    fn size(&self) -> (f64, f64) {
        (self.config.width, self.config.height)
    }

    fn frame(&self, time: f64) -> NetworkFrame {
        let links = self
            .links
            .iter()
            .map(|link| LinkFrame {
                from: self.nodes[link.source].position,
                to: self.nodes[link.target].position,
                weight: self.displayed_weight(link, time),
            })
            .collect();

        let pulses = self
            .nodes
            .iter()
            .filter(|n| self.is_edge_layer(n.layer))
            .filter_map(|n| {
                let strength = (time * 2.0 + n.layer as f64 * PI).sin();
                (strength > 0.5).then(|| PulseFrame {
                    center: n.position,
                    radius: n.radius + strength * 3.0,
                    strength,
                })
            })
            .collect();

        NetworkFrame { links, pulses }
    }

    fn draw(&self, frame: &NetworkFrame, palette: &Palette, out: &mut DisplayList) {
        let (w, h) = self.size();
        if self.nodes.is_empty() {
            return;
        }
        out.rect(Rect::new(0.0, 0.0, w, h), Paint::fill(palette.base));

        for link in &frame.links {
            let base = if link.weight > 0.0 {
                palette.weight_positive
            } else {
                palette.weight_negative
            };
            out.line(
                link.from,
                link.to,
                base.with_alpha(link_alpha(link.weight)),
                link_width(link.weight),
            );
        }

        for node in &self.nodes {
            out.circle(
                node.position,
                node.radius,
                Paint::both(palette.layers[node.color_key % 3], palette.surface1, 1.0),
            );
        }

        for pulse in &frame.pulses {
            out.circle(
                pulse.center,
                pulse.radius,
                Paint::stroke(palette.pulse.with_alpha(0.4 * pulse.strength), 1.5),
            );
        }
    }
}
