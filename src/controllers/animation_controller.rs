// src/controllers/animation_controller.rs
/// AnimationController couples the NodeChain with its AnimationTicker.
/// A tap arms the active pin and starts the ticker; every tick repaints and
/// advances the pin; the tick that settles it stops the ticker again.
use log::{debug, info, trace};
use nannou::color::Rgb8;
use std::time::Duration;

use crate::animation::{AnimationTicker, ScaleStep};
use crate::config::{parse_hex_color, Config};
use crate::draw::{DrawParams, DrawingSurface};
use crate::error::Result;
use crate::views::{ChainStep, NodeChain, StageLayout};

/// What the surface should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
    /// Repaint; the pin is still moving
    Frame,
    /// Repaint once more; the pin has settled and ticking stopped
    Settle,
}

pub struct AnimationController {
    chain: NodeChain,
    ticker: AnimationTicker,
    layout: StageLayout,
    back_color: Rgb8,
    pin_params: DrawParams,
}

impl AnimationController {
    /// Builds the controller for a surface of `width` x `height`.
    pub fn new(config: &Config, width: f32, height: f32) -> Result<Self> {
        let anim = &config.animation;
        let layout = StageLayout::new(width, height, anim.nodes, &config.style);
        let chain = NodeChain::new(
            anim.nodes,
            anim.lines,
            ScaleStep::new(anim.step_gap, anim.sc_div),
        );
        let pin_params = DrawParams {
            color: parse_hex_color(&config.style.fore_color)?,
            stroke_weight: layout.stroke_weight,
        };
        info!(
            "Stage {}x{}: {} pins, gap {:.1}, pin size {:.1}",
            layout.width, layout.height, anim.nodes, layout.gap, layout.size
        );

        Ok(Self {
            chain,
            ticker: AnimationTicker::new(config.tick_interval()),
            layout,
            back_color: parse_hex_color(&config.style.back_color)?,
            pin_params,
        })
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn layout(&self) -> &StageLayout {
        &self.layout
    }

    pub fn ticker(&self) -> &AnimationTicker {
        &self.ticker
    }

    /// Color and stroke the surface should draw pins with
    pub fn pin_params(&self) -> &DrawParams {
        &self.pin_params
    }

    pub fn is_animating(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn render(&self, surface: &mut dyn DrawingSurface) {
        surface.clear(self.back_color);
        self.chain.draw(surface, &self.layout);
    }

    /// Starts animating the active pin. Taps during an animation are ignored.
    pub fn handle_tap(&mut self) -> bool {
        if !self.chain.start_updating() {
            trace!("Tap ignored, node {} still animating", self.chain.cursor());
            return false;
        }
        debug!(
            "Tap armed node {} heading {:?}",
            self.chain.cursor(),
            self.chain.heading()
        );
        self.ticker.start();
        true
    }

    /// Runs a single tick of the active pin.
    pub fn tick(&mut self) -> Repaint {
        trace!("Tick node {}", self.chain.cursor());
        match self.chain.update() {
            ChainStep::Animating => Repaint::Frame,
            ChainStep::Settled { from, to, heading } => {
                self.ticker.stop();
                debug!(
                    "Node {} settled, next {} heading {:?}",
                    from, to, heading
                );
                Repaint::Settle
            }
        }
    }

    /// Feeds elapsed frame time to the ticker and runs the ticks that came due.
    /// Returns the last repaint request, or None if no tick ran.
    pub fn advance(&mut self, dt: Duration) -> Option<Repaint> {
        let due = self.ticker.poll(dt);
        let mut repaint = None;
        for _ in 0..due {
            let outcome = self.tick();
            repaint = Some(outcome);
            if outcome == Repaint::Settle {
                break;
            }
        }
        repaint
    }
}
