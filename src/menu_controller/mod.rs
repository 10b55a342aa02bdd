//! 菜单交互模块
//! - 打开菜单时刷新设备列表
//! - 选择设备时发送开关命令
//! - 渲染交给外部的 MenuView

pub mod console_view;
pub mod controller;
pub mod traits;
