pub mod clock;
pub mod orbit;
pub mod scene;
