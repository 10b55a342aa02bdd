//! 设备目录模块
//! - 保存最近一次成功获取的设备列表
//! - 新旧列表比较
//! - 生成菜单显示项

pub mod directory;
pub mod display;
pub mod reconcile;
