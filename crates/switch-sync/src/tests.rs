//! Controller Tests
//!
//! Drives the switch controller on a tokio LocalSet with an in-memory label
//! and a transport whose replies are released by the test.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use tokio::sync::oneshot;
    use tokio::task::LocalSet;

    use crate::{
        LocalTask, Spawner, StatusLabel, SwitchController, SyncConfig, SyncError, SyncReply, SyncRequest,
        SyncResult, SyncTransport,
    };

    /// Label that remembers every write
    #[derive(Clone, Default)]
    struct MemoryLabel {
        text: Rc<RefCell<String>>,
        writes: Rc<RefCell<Vec<String>>>,
    }

    impl StatusLabel for MemoryLabel {
        fn text(&self) -> String {
            self.text.borrow().clone()
        }

        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
            self.writes.borrow_mut().push(text.to_string());
        }
    }

    type Reply = oneshot::Sender<SyncResult<SyncReply>>;

    /// Transport that parks every request until the test answers it
    #[derive(Default)]
    struct HeldTransport {
        requests: RefCell<Vec<SyncRequest>>,
        replies: RefCell<Vec<Option<Reply>>>,
    }

    impl HeldTransport {
        fn bodies(&self) -> Vec<String> {
            self.requests.borrow().iter().map(|r| r.body.clone()).collect()
        }

        fn answer(&self, index: usize, outcome: SyncResult<SyncReply>) {
            let sender = self.replies.borrow_mut()[index].take().expect("request already answered");
            let _ = sender.send(outcome);
        }
    }

    #[async_trait(?Send)]
    impl SyncTransport for HeldTransport {
        async fn post(&self, request: &SyncRequest) -> SyncResult<SyncReply> {
            let (tx, rx) = oneshot::channel();
            self.requests.borrow_mut().push(request.clone());
            self.replies.borrow_mut().push(Some(tx));
            rx.await.unwrap_or_else(|_| Err(SyncError::Network("reply dropped".into())))
        }
    }

    fn local_spawner() -> Spawner {
        Rc::new(|task: LocalTask| {
            tokio::task::spawn_local(task);
        })
    }

    fn setup(config: SyncConfig) -> (SwitchController<MemoryLabel, HeldTransport>, MemoryLabel, Rc<HeldTransport>) {
        let label = MemoryLabel::default();
        let transport = Rc::new(HeldTransport::default());
        let controller = SwitchController::new(label.clone(), Rc::clone(&transport), config, local_spawner());
        (controller, label, transport)
    }

    /// Let spawned tasks run until they park again
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    fn ok(body: &str) -> SyncResult<SyncReply> {
        Ok(SyncReply::new(200, "OK", body))
    }

    #[tokio::test]
    async fn test_toggle_on_sets_label_before_reply() {
        LocalSet::new()
            .run_until(async {
                let (controller, label, transport) = setup(SyncConfig::default());

                assert!(controller.on_toggle(true));
                assert_eq!(label.text(), "On");

                settle().await;
                assert_eq!(label.text(), "On");
                assert_eq!(transport.bodies(), vec!["switch=On"]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_toggle_off_sets_label_before_reply() {
        LocalSet::new()
            .run_until(async {
                let (controller, label, transport) = setup(SyncConfig::default());

                assert!(!controller.on_toggle(false));
                assert_eq!(label.text(), "Off");

                settle().await;
                assert_eq!(transport.bodies(), vec!["switch=Off"]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_each_toggle_sends_one_request() {
        LocalSet::new()
            .run_until(async {
                let (controller, _label, transport) = setup(SyncConfig::default());

                controller.on_toggle(true);
                controller.on_toggle(false);
                controller.on_toggle(true);
                settle().await;

                assert_eq!(transport.bodies(), vec!["switch=On", "switch=Off", "switch=On"]);
                let request = &transport.requests.borrow()[0];
                assert_eq!(request.endpoint, "/api");
                assert_eq!(request.header("Content-Type"), Some("application/x-www-form-urlencoded"));
                assert_eq!(request.header("Connection"), Some("close"));
            })
            .await;
    }

    #[tokio::test]
    async fn test_ok_reply_replaces_label() {
        LocalSet::new()
            .run_until(async {
                let (controller, label, transport) = setup(SyncConfig::default());

                controller.on_toggle(true);
                settle().await;
                transport.answer(0, ok("OK"));
                settle().await;

                assert_eq!(label.text(), "OK");
            })
            .await;
    }

    #[tokio::test]
    async fn test_not_found_shows_reason_phrase() {
        LocalSet::new()
            .run_until(async {
                let (controller, label, transport) = setup(SyncConfig::default());

                controller.on_toggle(true);
                controller.on_toggle(false);
                settle().await;
                transport.answer(0, Ok(SyncReply::new(404, "Not Found", "<h1>missing</h1>")));
                settle().await;
                assert_eq!(label.text(), "Not Found");

                // HTTP/2 responses carry no status text
                transport.answer(1, Ok(SyncReply::new(404, "", "")));
                settle().await;
                assert_eq!(label.text(), "Not Found");
            })
            .await;
    }

    #[tokio::test]
    async fn test_last_completion_wins() {
        LocalSet::new()
            .run_until(async {
                let (controller, label, transport) = setup(SyncConfig::default());

                controller.on_toggle(true);
                controller.on_toggle(false);
                assert_eq!(label.text(), "Off");
                settle().await;
                assert_eq!(transport.bodies(), vec!["switch=On", "switch=Off"]);

                // Replies arrive out of order
                transport.answer(1, ok("Off"));
                settle().await;
                assert_eq!(label.text(), "Off");

                transport.answer(0, ok("On"));
                settle().await;
                assert_eq!(label.text(), "On");

                let valid = ["On", "Off"];
                assert!(label.writes.borrow().iter().all(|w| valid.contains(&w.as_str())));
            })
            .await;
    }

    #[tokio::test]
    async fn test_sync_state_encodes_label_text() {
        LocalSet::new()
            .run_until(async {
                let (controller, label, transport) = setup(SyncConfig::default());

                label.set_text("a b&c=d");
                controller.sync_state();
                settle().await;

                assert_eq!(transport.bodies(), vec!["switch=a%20b%26c%3Dd"]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_server_reply_is_resent_verbatim_on_next_sync() {
        LocalSet::new()
            .run_until(async {
                let (controller, label, transport) = setup(SyncConfig::default());

                controller.on_toggle(true);
                settle().await;
                transport.answer(0, ok("Lamp: on"));
                settle().await;

                controller.sync_state();
                settle().await;
                assert_eq!(transport.bodies()[1], "switch=Lamp%3A%20on");
                assert_eq!(label.text(), "Lamp: on");
            })
            .await;
    }

    #[tokio::test]
    async fn test_network_error_leaves_label() {
        LocalSet::new()
            .run_until(async {
                let (controller, label, transport) = setup(SyncConfig::default());

                controller.on_toggle(true);
                settle().await;
                transport.answer(0, Err(SyncError::Network("connection refused".into())));
                settle().await;

                assert_eq!(label.text(), "On");
                assert_eq!(*label.writes.borrow(), vec!["On"]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_timeout_writes_timeout_label() {
        LocalSet::new()
            .run_until(async {
                let config = SyncConfig {
                    timeout_label: "No answer".into(),
                    ..SyncConfig::default()
                };
                let (controller, label, transport) = setup(config);

                controller.on_toggle(false);
                settle().await;
                transport.answer(0, Err(SyncError::TimedOut));
                settle().await;

                assert_eq!(label.text(), "No answer");
            })
            .await;
    }

    #[tokio::test]
    async fn test_unanswered_request_keeps_toggle_label() {
        LocalSet::new()
            .run_until(async {
                let (controller, label, transport) = setup(SyncConfig::default());

                controller.on_toggle(true);
                settle().await;
                settle().await;

                assert_eq!(label.text(), "On");
                assert_eq!(transport.requests.borrow().len(), 1);
            })
            .await;
    }

    #[tokio::test]
    async fn test_custom_endpoint_and_field() {
        LocalSet::new()
            .run_until(async {
                let config = SyncConfig::from_json(r#"{"endpoint": "/lamp", "field": "state"}"#)
                    .expect("config");
                let (controller, _label, transport) = setup(config);

                controller.on_toggle(true);
                settle().await;

                let request = transport.requests.borrow()[0].clone();
                assert_eq!(request.endpoint, "/lamp");
                assert_eq!(request.body, "state=On");
            })
            .await;
    }
}
