pub mod contract;
pub mod error;
pub mod execute;
pub mod index;
pub mod state;

#[cfg(test)]
mod testing;
