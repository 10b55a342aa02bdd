//! control server client
//! - 获取设备列表
//! - 发送开关命令
//! - 保存配置前探测服务器

pub mod client;
pub mod protocol;
pub mod traits;

#[cfg(test)]
pub mod mock_server;
