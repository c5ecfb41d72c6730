pub mod constants;

mod anim;
mod flags;
mod math;
mod timer;

pub use anim::*;
pub use flags::*;
pub use math::*;
pub use timer::*;
