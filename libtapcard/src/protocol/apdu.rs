//! Response APDU handling: split the trailing status word from the data.

use derive_more::Display;

use crate::constants::SW_SUCCESS;

/// Two-byte status word trailing a response APDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{:02X}{:02X}", sw1, sw2)]
pub struct StatusWord {
    /// First status byte.
    pub sw1: u8,
    /// Second status byte.
    pub sw2: u8,
}

impl StatusWord {
    /// Interpret two bytes as a status word. SW1 must fall in the ISO 7816
    /// ranges `61..=6F` or `90..=9F`; anything else is ordinary data.
    pub fn from_bytes(sw1: u8, sw2: u8) -> Option<Self> {
        match sw1 {
            0x61..=0x6f | 0x90..=0x9f => Some(Self { sw1, sw2 }),
            _ => None,
        }
    }

    /// `90 00`.
    pub fn is_success(&self) -> bool {
        [self.sw1, self.sw2] == SW_SUCCESS
    }

    /// Both bytes as one big-endian value.
    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes([self.sw1, self.sw2])
    }
}

/// Borrowed view of a raw card response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseApdu<'a> {
    data: &'a [u8],
    status: Option<StatusWord>,
}

impl<'a> ResponseApdu<'a> {
    /// Split `raw` into data and status word. Responses whose last two bytes
    /// are not a plausible status word are treated as data only.
    pub fn from_raw(raw: &'a [u8]) -> Self {
        if let [data @ .., sw1, sw2] = raw {
            if let Some(status) = StatusWord::from_bytes(*sw1, *sw2) {
                return Self {
                    data,
                    status: Some(status),
                };
            }
        }
        Self {
            data: raw,
            status: None,
        }
    }

    /// Response body without the status word.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Trailing status word, if the response carried one.
    pub fn status(&self) -> Option<StatusWord> {
        self.status
    }
}
