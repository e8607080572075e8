//! Application model used by the UI and the runtime event loop.

mod model;

pub use model::App;

#[cfg(test)]
mod tests;
