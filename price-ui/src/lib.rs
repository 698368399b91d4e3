pub mod controller;
pub mod logging;
pub mod models;
pub mod outcome;
pub mod render;
pub mod session;
pub mod settings;
pub mod utils;

pub use controller::{FormController, SubmitRejected, Submission};
pub use outcome::Outcome;
