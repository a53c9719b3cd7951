pub mod node_state;
pub mod scale;
pub mod ticker;

pub use node_state::NodeState;
pub use scale::{divide_scale, max_scale, ScaleStep};
pub use ticker::AnimationTicker;
