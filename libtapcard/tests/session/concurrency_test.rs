use std::sync::mpsc;
use std::thread;

use libtapcard::Error;
use libtapcard::session::{Reader, SessionState};
use libtapcard::transport::MockTransport;

use crate::common::fixtures;

#[test]
fn second_read_rejected_while_first_in_flight() {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (proceed_tx, proceed_rx) = mpsc::channel();

    let mut mock = MockTransport::new();
    mock.set_gate(entered_tx, proceed_rx);
    mock.push_response(fixtures::full_fci_response());
    let log = mock.log();

    let reader = Reader::new_with_transport(Box::new(mock))
        .initialize()
        .unwrap();

    thread::scope(|s| {
        let first = s.spawn(|| reader.read_card());

        // wait until the first read is blocked inside transceive
        entered_rx.recv().unwrap();
        assert!(reader.is_reading());
        assert_eq!(reader.state(), SessionState::Exchanging);

        // rejected without touching the transport
        assert_eq!(reader.read_card(), Err(Error::ReadInProgress));
        assert_eq!(log.lock().unwrap().acquired, 1);

        proceed_tx.send(()).unwrap();
        let details = first.join().unwrap().unwrap();
        assert_eq!(details.card_number(), fixtures::SAMPLE_PAN);
    });

    assert!(!reader.is_reading());
    assert_eq!(reader.state(), SessionState::Idle);
    let log = log.lock().unwrap();
    assert_eq!((log.acquired, log.released), (1, 1));
}

#[test]
fn reader_accepts_new_read_after_rejection() {
    let reader = libtapcard::test_support::initialized_mock_reader(vec![
        fixtures::full_fci_response(),
        fixtures::full_fci_response(),
    ])
    .unwrap();
    assert!(reader.read_card().is_ok());
    assert!(reader.read_card().is_ok());
}
