pub mod check;
pub mod entities;
pub mod operation;
pub mod resolve;
pub mod usage;
