pub mod bo;
pub mod dto;
