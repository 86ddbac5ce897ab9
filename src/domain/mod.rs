pub mod company;
pub mod interview;
