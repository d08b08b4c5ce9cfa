//! Application-defined connection close reasons.

/// First close code reserved for applications by the transport.
pub const APP_CLOSE_CODE_BASE: u32 = 1000;

/// Why one side closed the connection.
///
/// Carried by the transport's close notification, not by a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum DisconnectReason {
    ClientDisconnect = APP_CLOSE_CODE_BASE + 1,
    ServerClosed = APP_CLOSE_CODE_BASE + 2,
    ServerReject = APP_CLOSE_CODE_BASE + 3,
    ServerFull = APP_CLOSE_CODE_BASE + 4,
    ClientKicked = APP_CLOSE_CODE_BASE + 5,
}

impl DisconnectReason {
    /// Returns the transport close code.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Parses a transport close code, `None` if it is not one of ours.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1001 => Some(Self::ClientDisconnect),
            1002 => Some(Self::ServerClosed),
            1003 => Some(Self::ServerReject),
            1004 => Some(Self::ServerFull),
            1005 => Some(Self::ClientKicked),
            _ => None,
        }
    }
}
