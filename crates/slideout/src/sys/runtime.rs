use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

/// Runs the socket server and the config watcher on their own thread so the
/// GTK main loop never blocks on them.
pub fn start_background_services(tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async {
            tokio::spawn(crate::sys::server::run_server(tx.clone()));
            tokio::spawn(crate::config::run_async_watcher(tx));
            std::future::pending::<()>().await;
        });
    });
}
