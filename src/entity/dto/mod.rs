pub mod device_dto;
