pub mod constants;
pub mod errors;
pub mod logging;
pub mod ops;
pub mod providers;
pub mod shapes;

#[cfg(test)]
mod tests;
