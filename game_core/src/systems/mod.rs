pub mod collision;
pub mod effects;
pub mod hoop;
pub mod input;
pub mod movement;
pub mod shadow;
pub mod timer;
pub mod wall;

pub use collision::*;
pub use effects::*;
pub use hoop::*;
pub use input::*;
pub use movement::*;
pub use shadow::*;
pub use timer::*;
pub use wall::*;
