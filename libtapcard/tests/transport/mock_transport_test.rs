use libtapcard::Error;
use libtapcard::transport::{MockTransport, Transport};

#[test]
fn mock_transport_transceive_and_log() {
    let mut m = MockTransport::new();
    let log = m.log();
    m.push_response(vec![0x90, 0x00]);
    m.start().unwrap();
    m.request_technology().unwrap();
    assert_eq!(m.transceive(&[0x00, 0xA4], 1000).unwrap(), vec![0x90, 0x00]);
    m.release_technology().unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log.started, 1);
    assert_eq!(log.sent.len(), 1);
    assert_eq!((log.acquired, log.released), (1, 1));
}

#[test]
fn technology_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.set_technology_failures(1);

    // First request fails (simulated)
    assert_eq!(m.request_technology(), Err(Error::TechnologyUnavailable));

    // Second request succeeds
    assert!(m.request_technology().is_ok());
}

#[test]
fn empty_queue_times_out() {
    let mut m = MockTransport::new();
    assert_eq!(m.transceive(&[0x00], 10), Err(Error::Timeout));
}
