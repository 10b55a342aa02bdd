mod common;
mod device_directory;
mod entity;
mod menu_controller;
mod switch_client;

use std::error::Error;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};

use common::logger::init_logger;
use common::setting::Settings;
use entity::bo::server_config_bo::ServerConfig;
use menu_controller::console_view::ConsoleView;
use menu_controller::controller::MenuController;
use switch_client::client::SwitchClient;

const HELP: &str = "commands: o = open menu, c = close menu, <n> = select entry n, q = quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // 检查 env 文件
    dotenv().ok();

    // 加载 config
    let settings = Settings::load()?;

    // 设置 logger
    init_logger(settings.env.log_level.as_str())?;
    log::info!("{} config loaded, env: {}", settings.meta.application_name, settings.env.env);

    let client = SwitchClient::new(&settings.http)?;
    match client.probe(settings.server.base_address.as_str(), settings.server.secret.as_str()).await {
        Ok(true) => log::info!("control server {} reachable", settings.server.base_address),
        Ok(false) => log::warn!("control server {} rejected the secret", settings.server.base_address),
        Err(e) => log::warn!("control server {} not usable yet: {}", settings.server.base_address, e),
    }

    let config = ServerConfig::new(settings.server.base_address.as_str(), settings.server.secret.as_str())?;
    let view = Arc::new(ConsoleView::new());
    let controller = Arc::new(MenuController::new(config, Arc::new(client), view.clone()));

    run_console(controller, view).await?;
    log::info!("bye");
    Ok(())
}

/// read menu events from stdin until `q` or end of input
async fn run_console(controller: Arc<MenuController>, view: Arc<ConsoleView>) -> Result<(), Box<dyn Error>> {
    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "q" => break,
            "o" => {
                let controller = controller.clone();
                tokio::spawn(async move {
                    let outcome = controller.on_menu_open().await;
                    log::debug!("menu open finished: {:?}", outcome);
                });
            }
            "c" => controller.on_menu_close(),
            other => match other.parse::<usize>() {
                Ok(position) => match view.device_at(position) {
                    Some(device_id) => {
                        // the command task logs its own failure
                        let _ = controller.on_device_selected(device_id.as_str());
                    }
                    None => println!("no selectable entry {}", position),
                },
                Err(_) => println!("{}", HELP),
            },
        }
    }
    Ok(())
}
