use libtapcard::Error;
use libtapcard::constants::SELECT_COMMAND;
use libtapcard::session::{ReaderBuilder, SessionState};
use libtapcard::test_support::initialized_mock_reader;
use libtapcard::transport::MockTransport;

use crate::common::{fixtures, init_logger};

#[test]
fn read_full_fci_via_mock_reader() {
    init_logger();
    let reader = initialized_mock_reader(vec![fixtures::full_fci_response()]).unwrap();
    let d = reader.read_card().unwrap();
    assert_eq!(d.card_number(), fixtures::SAMPLE_PAN);
    assert_eq!(d.expiration_date(), fixtures::SAMPLE_EXPIRY);
    assert_eq!(d.holder_name(), fixtures::SAMPLE_HOLDER);
    assert_eq!(reader.state(), SessionState::Idle);
}

#[test]
fn consecutive_reads_each_release_once() {
    let mut mock = MockTransport::new();
    mock.push_response(fixtures::full_fci_response());
    mock.push_error(Error::NoCard);
    mock.push_response(fixtures::unstructured_response());
    let log = mock.log();

    let reader = ReaderBuilder::new()
        .with_transport(Box::new(mock))
        .transceive_timeout_ms(750)
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();

    assert!(reader.read_card().is_ok());
    assert_eq!(reader.read_card(), Err(Error::NoCard));
    let d = reader.read_card().unwrap();
    assert_eq!(d.card_number(), fixtures::SAMPLE_PAN);

    let log = log.lock().unwrap();
    assert_eq!((log.acquired, log.released), (3, 3));
    assert_eq!(log.sent, vec![SELECT_COMMAND.to_vec(); 3]);
    assert_eq!(log.timeouts, vec![750; 3]);
}

#[test]
fn decode_problems_are_not_read_failures() {
    // status 6A82 (file not found) with no data
    let reader = initialized_mock_reader(vec![vec![0x6a, 0x82]]).unwrap();
    let d = reader.read_card().unwrap();
    assert!(d.is_empty());
}

#[test]
fn only_hardware_errors_surface() {
    let mut mock = MockTransport::new();
    mock.push_error(Error::Transport("rf field lost".into()));
    let reader = ReaderBuilder::new()
        .with_transport(Box::new(mock))
        .build_uninitialized()
        .unwrap()
        .initialize()
        .unwrap();
    let err = reader.read_card().unwrap_err();
    assert!(err.is_hardware());
}
