pub mod device_bo;
pub mod server_config_bo;
