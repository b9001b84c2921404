pub mod chart;
pub mod error;
pub mod export;
pub mod figure;
