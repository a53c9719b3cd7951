// src/views/node_chain.rs
//
// The chain of pins.
// Nodes live in one Vec and are linked by position: the next node of `i`
// is `i + 1`, the previous one `i - 1`. Only the node under the cursor
// animates; when it settles the cursor moves on in the current heading,
// bouncing off either end of the chain.

use log::debug;
use std::f32::consts::TAU;

use super::layout::StageLayout;
use crate::animation::{divide_scale, NodeState, ScaleStep};
use crate::draw::DrawingSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    #[default]
    Forward,
    Backward,
}

impl Heading {
    pub fn sign(self) -> i32 {
        match self {
            Heading::Forward => 1,
            Heading::Backward => -1,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Heading::Forward => Heading::Backward,
            Heading::Backward => Heading::Forward,
        }
    }
}

/// Result of looking for a neighbor in a given heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// The neighbor exists
    Advanced(usize),
    /// No neighbor that way; carries the node we are stuck on
    Boundary(usize),
}

impl Traversal {
    pub fn index(self) -> usize {
        match self {
            Traversal::Advanced(i) | Traversal::Boundary(i) => i,
        }
    }
}

/// Outcome of one chain tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStep {
    Animating,
    Settled {
        from: usize,    // node that just finished
        to: usize,      // node the cursor now points at
        heading: Heading,
    },
}

#[derive(Debug, Clone)]
pub struct PinNode {
    index: usize,
    pub state: NodeState,
}

impl PinNode {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            state: NodeState::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Draws the pin's lines. The first half of the scale grows the pin,
    /// the second half fans its lines out around the origin.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, layout: &StageLayout, lines: usize) {
        let scale = self.state.scale();
        let grow = divide_scale(scale, 0, 2);
        let turn = divide_scale(scale, 1, 2);
        let origin = layout.node_origin(self.index);
        let spread = TAU / lines as f32;

        for j in 0..lines {
            let rotation = j as f32 * spread * divide_scale(turn, j, lines);
            surface.draw_pin(origin, rotation, layout.size * grow, layout.ball_radius * grow);
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<PinNode>,
    cursor: usize,
    heading: Heading,
    step: ScaleStep,
    lines: usize,
}

impl NodeChain {
    /// Builds a chain of `nodes` pins with the cursor on the head.
    /// Counts are expected to be validated upstream; zero is bumped to one.
    pub fn new(nodes: usize, lines: usize, step: ScaleStep) -> Self {
        Self {
            nodes: (0..nodes.max(1)).map(PinNode::new).collect(),
            cursor: 0,
            heading: Heading::Forward,
            step,
            lines: lines.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn node(&self, index: usize) -> Option<&PinNode> {
        self.nodes.get(index)
    }

    pub fn active(&self) -> &PinNode {
        &self.nodes[self.cursor]
    }

    pub fn is_animating(&self) -> bool {
        !self.active().state.is_idle()
    }

    /// Neighbor of the active node in `heading`.
    pub fn get_next(&self, heading: Heading) -> Traversal {
        self.neighbor(self.cursor, heading)
    }

    pub fn neighbor(&self, index: usize, heading: Heading) -> Traversal {
        let next = match heading {
            Heading::Forward => index.checked_add(1),
            Heading::Backward => index.checked_sub(1),
        };
        match next {
            Some(i) if i < self.nodes.len() => Traversal::Advanced(i),
            _ => Traversal::Boundary(index),
        }
    }

    /// Advances the active node by one tick and moves the cursor if it settled.
    pub fn update(&mut self) -> ChainStep {
        let from = self.cursor;
        if !self.nodes[from].state.update(&self.step, self.lines) {
            return ChainStep::Animating;
        }

        match self.get_next(self.heading) {
            Traversal::Advanced(next) => {
                debug!("Node {} settled, cursor moves to {}", from, next);
                self.cursor = next;
            }
            Traversal::Boundary(_) => {
                self.heading = self.heading.flip();
                debug!(
                    "Node {} settled at chain end, heading now {:?}",
                    from, self.heading
                );
            }
        }

        ChainStep::Settled {
            from,
            to: self.cursor,
            heading: self.heading,
        }
    }

    /// Arms the active node. Returns false if it is already animating.
    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.cursor].state.start_updating()
    }

    /// Draws every pin head to tail at its current scale.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, layout: &StageLayout) {
        for node in &self.nodes {
            node.draw(surface, layout, self.lines);
        }
    }
}
