pub mod event;
pub mod ground;
pub mod integrator;
pub mod runner;

pub use ground::touchdown;
pub use integrator::heun_step;
pub use runner::{simulate, Flight, Outcome};
