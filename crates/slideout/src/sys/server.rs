use crate::events::AppEvent;
use async_channel::Sender;
use stagger::SOCKET_PATH;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{UnixListener, UnixStream};

pub async fn run_server(tx: Sender<AppEvent>) {
    // stale socket from a previous run
    if fs_err::metadata(SOCKET_PATH).is_ok()
        && let Err(e) = fs_err::remove_file(SOCKET_PATH)
    {
        log::warn!("Failed to remove stale socket: {}", e);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket {}: {}", SOCKET_PATH, e);
            return;
        }
    };
    log::info!("Listening on {}", SOCKET_PATH);

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                tokio::spawn(handle_client(stream, tx.clone()));
            }
            Err(e) => log::error!("Failed to accept connection: {}", e),
        }
    }
}

async fn handle_client(stream: UnixStream, tx: Sender<AppEvent>) {
    let mut lines = BufReader::new(stream).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match AppEvent::from_command(&line) {
                Some(event) => {
                    if tx.send(event).await.is_err() {
                        return;
                    }
                }
                None => log::warn!("Unknown command: {:?}", line.trim()),
            },
            Ok(None) => return,
            Err(e) => {
                log::error!("Failed to read command: {}", e);
                return;
            }
        }
    }
}
