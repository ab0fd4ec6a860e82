use the_coach_ipc::{r#pub::IpcPublisher, sub::IpcSubscriber, MatchNotification};

#[tokio::test]
async fn test_publish_and_receive() {
    let url = format!("ipc:///tmp/the-coach-test-{}.ipc", std::process::id());
    let subscriber = IpcSubscriber::<MatchNotification>::new(&url).unwrap();
    let publisher = IpcPublisher::<MatchNotification>::new(&url).unwrap();

    let notification = MatchNotification {
        steam64_id: "76561198000000001".to_string(),
        match_id: "b7d6a3b0-0003".to_string(),
    };
    publisher.publish(&notification).await.unwrap();

    let received = subscriber.recv().await.unwrap();
    assert_eq!(received, notification);
}

#[tokio::test]
async fn test_publish_without_subscriber_times_out() {
    let url = format!("ipc:///tmp/the-coach-test-{}-orphan.ipc", std::process::id());
    let publisher = IpcPublisher::<MatchNotification>::with_send_timeout(
        &url,
        std::time::Duration::from_millis(100),
    )
    .unwrap();

    let notification = MatchNotification {
        steam64_id: "76561198000000001".to_string(),
        match_id: "b7d6a3b0-0003".to_string(),
    };
    assert!(publisher.publish(&notification).await.is_err());
}
