//! Runtime bridge between the UI command queue and backend event intake.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use reqwest::{header::CONTENT_TYPE, Client as HttpClient};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the worker thread. It exits once every command sender is dropped.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::GreetingFailed(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: {err}"),
                )));
                return;
            }
        };
        let client = HttpClient::new();
        let _ = ui_tx.try_send(UiEvent::Info("backend worker started".to_string()));

        for cmd in cmd_rx.iter() {
            match cmd {
                BackendCommand::FetchGreeting { url } => {
                    let event = match runtime.block_on(fetch_greeting(&client, &url)) {
                        Ok(body) => {
                            tracing::info!(%url, %body, "greeting received");
                            UiEvent::GreetingReceived {
                                url: url.to_string(),
                                body,
                            }
                        }
                        Err(err) => {
                            tracing::warn!(%url, error = %err, "greeting request failed");
                            UiEvent::GreetingFailed(UiError::from_fetch(&err))
                        }
                    };
                    let _ = ui_tx.try_send(event);
                }
            }
        }
        tracing::debug!("backend worker stopping: command queue closed");
    })
}

pub async fn fetch_greeting(
    client: &HttpClient,
    url: &Url,
) -> Result<serde_json::Value, reqwest::Error> {
    client
        .get(url.clone())
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?
        .error_for_status()?
        .json::<serde_json::Value>()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};
    use crossbeam_channel::bounded;
    use std::time::Duration;

    use crate::controller::events::UiErrorCategory;

    async fn serve(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });
        Url::parse(&format!("http://{addr}/")).expect("url")
    }

    #[tokio::test]
    async fn fetch_greeting_parses_json_body() {
        let url = serve(Router::new().route(
            "/",
            get(|| async { Json(serde_json::json!({ "abc": "ddd", "bbd": "ccc" })) }),
        ))
        .await;

        let body = fetch_greeting(&HttpClient::new(), &url)
            .await
            .expect("greeting");
        assert_eq!(body["abc"], "ddd");
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let url = serve(Router::new().route("/", get(|| async { "plain text" }))).await;

        let err = fetch_greeting(&HttpClient::new(), &url)
            .await
            .expect_err("not json");
        assert_eq!(UiError::from_fetch(&err).category(), UiErrorCategory::Decode);
    }

    #[test]
    fn worker_reports_unreachable_endpoint_and_stops_when_queue_closes() {
        // Bind then drop to get a port with nothing listening.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .expect("free port")
            .port();
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        let worker = launch(cmd_rx, ui_tx);

        cmd_tx
            .send(BackendCommand::FetchGreeting {
                url: Url::parse(&format!("http://127.0.0.1:{port}/")).expect("url"),
            })
            .expect("queue");

        loop {
            match ui_rx.recv_timeout(Duration::from_secs(10)) {
                Ok(UiEvent::Info(_)) => continue,
                Ok(UiEvent::GreetingFailed(err)) => {
                    assert_eq!(err.category(), UiErrorCategory::Transport);
                    break;
                }
                Ok(UiEvent::GreetingReceived { .. }) => panic!("nothing should be listening"),
                Err(err) => panic!("no event from worker: {err}"),
            }
        }

        drop(cmd_tx);
        worker.join().expect("worker exits");
    }
}
