pub mod aggregate;
pub mod audit;
pub mod branch;
pub mod rank;
pub mod record;
pub mod report;
pub mod source;
