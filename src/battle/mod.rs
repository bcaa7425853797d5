pub mod completion;
pub mod selectors;
pub mod services;
pub mod state;

#[cfg(test)]
mod tests;
