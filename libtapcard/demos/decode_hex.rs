// Decode a captured SELECT response given as hex on the command line.
//
//   cargo run --example decode_hex -- 6f14a5125a1034313131...9000
//
// Set RUST_LOG=debug to see template lookups and field resolution.

use anyhow::{Context, bail};
use libtapcard::prelude::*;
use libtapcard::session::Reader;
use libtapcard::transport::MockTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        bail!("usage: decode_hex <response hex>");
    }
    let raw = parse_hex(&args.join("")).context("response is not valid hex")?;

    // Replay the capture through a reader so the full session path runs.
    let mut transport = MockTransport::new();
    transport.push_response(raw);
    let reader = Reader::new_with_transport(Box::new(transport)).initialize()?;
    let details = reader.read_card()?;
    reader.shutdown()?;

    if details.is_empty() {
        println!("no card fields found");
    } else {
        println!("card number : {}", details.masked_card_number());
        println!("expires     : {}", details.expiration_date());
        println!("holder      : {}", details.holder_name());
    }
    Ok(())
}
