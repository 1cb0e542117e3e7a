pub mod aim;
pub mod constants;
pub mod highlight;
pub mod phase;
pub mod presets;
pub mod quiz;
pub mod rotation;
pub mod stage;

pub use aim::*;
pub use highlight::*;
pub use phase::*;
pub use presets::*;
pub use quiz::*;
pub use rotation::*;
pub use stage::*;
