//! 菜单交互控制器
//! - 打开菜单：获取设备列表，与缓存比较后交给 view 渲染
//! - 选择设备：发送相反的开关命令，不重新获取列表
//! - 关闭菜单：取消正在进行的获取

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::traits::MenuView;
use crate::common::error::{CommandError, FetchError};
use crate::device_directory::directory::DeviceDirectory;
use crate::device_directory::display::DisplayEntry;
use crate::device_directory::reconcile::ReconcileResult;
use crate::entity::bo::device_bo::DeviceSnapshot;
use crate::entity::bo::server_config_bo::ServerConfig;
use crate::switch_client::traits::SwitchTransport;
use crate::{debug, error, info, warn};

const LOG_TAG: &str = "menu_controller";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Refreshing,
}

/// what happened to one menu-open poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// snapshot stored and rendered
    Applied(ReconcileResult),
    /// fetch failed, devices kept, status message updated
    Failed(FetchError),
    /// menu closed before the fetch finished
    Cancelled,
    /// a newer poll started, this result was dropped
    Superseded,
}

struct ControllerState {
    directory: DeviceDirectory,
    phase: Phase,
    poll_seq: u64,
    poll_cancel: Option<CancellationToken>,
}

pub struct MenuController {
    config: ServerConfig,
    transport: Arc<dyn SwitchTransport>,
    view: Arc<dyn MenuView>,
    state: Mutex<ControllerState>,
    // one lock per device id so commands to the same device never overlap
    device_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl MenuController {
    pub fn new(config: ServerConfig, transport: Arc<dyn SwitchTransport>, view: Arc<dyn MenuView>) -> Self {
        MenuController {
            config,
            transport,
            view,
            state: Mutex::new(ControllerState {
                directory: DeviceDirectory::new(),
                phase: Phase::Idle,
                poll_seq: 0,
                poll_cancel: None,
            }),
            device_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.lock().unwrap().phase
    }

    pub fn status(&self) -> String {
        self.state.lock().unwrap().directory.status().to_string()
    }

    pub fn snapshot(&self) -> DeviceSnapshot {
        self.state.lock().unwrap().directory.snapshot().clone()
    }

    pub fn display_list(&self) -> Vec<DisplayEntry> {
        self.state.lock().unwrap().directory.display_list()
    }

    /// menu is about to open: fetch, reconcile and render
    /// an open while a poll is in flight cancels the older poll
    pub async fn on_menu_open(&self) -> RefreshOutcome {
        let (seq, token) = self.begin_poll();
        debug!(LOG_TAG, "poll {} started", seq);

        let result = tokio::select! {
            _ = token.cancelled() => None,
            r = self.transport.list_devices(&self.config) => Some(r),
        };
        self.finish_poll(seq, &token, result)
    }

    fn begin_poll(&self) -> (u64, CancellationToken) {
        let mut state = self.state.lock().unwrap();
        if let Some(previous) = state.poll_cancel.take() {
            info!(LOG_TAG, "menu opened again while refreshing, superseding poll {}", state.poll_seq);
            previous.cancel();
        }
        state.poll_seq += 1;
        state.phase = Phase::Refreshing;
        let token = CancellationToken::new();
        state.poll_cancel = Some(token.clone());
        (state.poll_seq, token)
    }

    fn finish_poll(
        &self,
        seq: u64,
        token: &CancellationToken,
        result: Option<Result<DeviceSnapshot, FetchError>>,
    ) -> RefreshOutcome {
        let mut state = self.state.lock().unwrap();
        if state.poll_seq != seq {
            debug!(LOG_TAG, "poll {} superseded by poll {}, result dropped", seq, state.poll_seq);
            return RefreshOutcome::Superseded;
        }
        state.phase = Phase::Idle;
        state.poll_cancel = None;

        // the menu may close between the fetch finishing and the lock above
        let result = match result {
            Some(r) if !token.is_cancelled() => r,
            _ => {
                info!(LOG_TAG, "poll {} cancelled", seq);
                return RefreshOutcome::Cancelled;
            }
        };

        match result {
            Ok(snapshot) => {
                let reconciled = state.directory.apply_snapshot(snapshot);
                let entries = state.directory.display_list();
                if reconciled == ReconcileResult::Replaced {
                    self.prune_device_locks(state.directory.snapshot());
                }
                drop(state);
                match reconciled {
                    ReconcileResult::Replaced => self.view.rebuild(&entries),
                    ReconcileResult::Unchanged => self.view.update_labels(&entries),
                }
                RefreshOutcome::Applied(reconciled)
            }
            Err(e) => {
                warn!(LOG_TAG, "poll {} failed: {}", seq, e);
                state.directory.record_failure(e.status_message().as_str());
                let entries = state.directory.display_list();
                drop(state);
                self.view.update_labels(&entries);
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// menu closed, an unfinished poll is cancelled and its result never applied
    pub fn on_menu_close(&self) {
        let mut state = self.state.lock().unwrap();
        if let Some(token) = state.poll_cancel.take() {
            info!(LOG_TAG, "menu closed while refreshing, cancelling poll {}", state.poll_seq);
            token.cancel();
        }
        state.phase = Phase::Idle;
    }

    /// user picked a device entry: send the opposite of its last known state
    /// returns None when the id is not in the current snapshot
    /// the local snapshot is left as is until the next menu open
    pub fn on_device_selected(&self, device_id: &str) -> Option<JoinHandle<Result<(), CommandError>>> {
        let device = match self.state.lock().unwrap().directory.find(device_id) {
            Some(device) => device.clone(),
            None => {
                warn!(LOG_TAG, "selected device {} is not in the device list", device_id);
                return None;
            }
        };
        let turn_on = !device.is_on;
        let device_lock = self.device_lock(device.id.as_str());
        let transport = self.transport.clone();
        let config = self.config.clone();

        Some(tokio::spawn(async move {
            let _guard = device_lock.lock().await;
            info!(LOG_TAG, "switching {} ({}) {}", device.display_name, device.id, if turn_on { "on" } else { "off" });
            let result = transport.set_power(&config, device.id.as_str(), turn_on).await;
            if let Err(e) = &result {
                error!(LOG_TAG, "switching {} failed: {}", device.id, e);
            }
            result
        }))
    }

    fn device_lock(&self, device_id: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.device_locks.lock().unwrap();
        locks
            .entry(device_id.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    /// drop locks of devices that left the list, unless a command still holds one
    fn prune_device_locks(&self, snapshot: &DeviceSnapshot) {
        let mut locks = self.device_locks.lock().unwrap();
        locks.retain(|id, lock| snapshot.find(id).is_some() || Arc::strong_count(lock) > 1);
    }
}
