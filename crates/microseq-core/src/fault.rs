use thiserror::Error;

use crate::{interrupt::RequestVector, pla::TableError, state::Microstate};

/// Fault classes used for diagnostics aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum FaultClass {
    /// Term or wiring table rejected by integrity checks.
    Table,
    /// Priority matrix returned the no-match sentinel.
    Interrupt,
    /// Selected vector has no address.
    Vector,
    /// Snapshot could not be restored.
    Snapshot,
    /// Instruction exceeded the configured cycle bound.
    Budget,
}

/// Stable engine fault taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum EngineFault {
    /// Matrix tables failed validation.
    #[error("matrix table failed integrity checks")]
    TableIntegrity = 0x01,
    /// No priority rung matched a request snapshot.
    #[error("no interrupt priority term matched")]
    NoInterruptTermMatched = 0x02,
    /// Vector selector resolved to no address.
    #[error("vector has no address for the processor base")]
    UnmappedVector = 0x03,
    /// Snapshot carried an unknown version.
    #[error("unsupported snapshot version")]
    UnsupportedSnapshot = 0x04,
    /// Snapshot bytes were malformed.
    #[error("malformed snapshot layout")]
    SnapshotLayout = 0x05,
    /// Instruction did not reach its end strobe within the cycle bound.
    #[error("cycle bound exceeded before end of instruction")]
    CycleBoundExceeded = 0x06,
}

impl EngineFault {
    /// Stable low-byte fault code.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a stable fault code back into a fault.
    #[must_use]
    pub const fn from_u8(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(Self::TableIntegrity),
            0x02 => Some(Self::NoInterruptTermMatched),
            0x03 => Some(Self::UnmappedVector),
            0x04 => Some(Self::UnsupportedSnapshot),
            0x05 => Some(Self::SnapshotLayout),
            0x06 => Some(Self::CycleBoundExceeded),
            _ => None,
        }
    }

    /// Returns the diagnostics fault class for this fault.
    #[must_use]
    pub const fn class(self) -> FaultClass {
        match self {
            Self::TableIntegrity => FaultClass::Table,
            Self::NoInterruptTermMatched => FaultClass::Interrupt,
            Self::UnmappedVector => FaultClass::Vector,
            Self::UnsupportedSnapshot | Self::SnapshotLayout => FaultClass::Snapshot,
            Self::CycleBoundExceeded => FaultClass::Budget,
        }
    }
}

/// Snapshot parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum SnapshotError {
    /// Byte count differs from the wire form.
    #[error("snapshot is {actual} bytes, expected {expected}")]
    Length {
        /// Required byte count.
        expected: usize,
        /// Supplied byte count.
        actual: usize,
    },
    /// Version field is not a known [`crate::SnapshotVersion`].
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u16),
    /// Register value has bits set above the microstate width.
    #[error("microstate {0:#06x} sets reserved bits")]
    ReservedBits(u16),
}

impl SnapshotError {
    /// Engine fault recorded for this error.
    #[must_use]
    pub const fn fault(self) -> EngineFault {
        match self {
            Self::UnsupportedVersion(_) => EngineFault::UnsupportedSnapshot,
            Self::Length { .. } | Self::ReservedBits(_) => EngineFault::SnapshotLayout,
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Priority matrix returned the sentinel with consistency checks on.
    #[error("no interrupt priority term matched request {request:?} at {microstate:?}")]
    NoInterruptTermMatched {
        /// Request snapshot that matched no rung.
        request: RequestVector,
        /// Register value of the failing cycle; left uncommitted.
        microstate: Microstate,
    },
    /// `run` stopped before the end strobe.
    #[error("instruction {ir:#08o} did not end within {cycles} cycles")]
    CycleBoundExceeded {
        /// Opcode held during the run.
        ir: u16,
        /// Cycles executed.
        cycles: u16,
    },
    /// The selected vector has no address.
    #[error(transparent)]
    Vector(#[from] crate::vector::VectorError),
    /// Snapshot restore failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// Matrix tables failed validation.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl EngineError {
    /// Engine fault recorded for this error.
    #[must_use]
    pub const fn fault(&self) -> EngineFault {
        match self {
            Self::NoInterruptTermMatched { .. } => EngineFault::NoInterruptTermMatched,
            Self::CycleBoundExceeded { .. } => EngineFault::CycleBoundExceeded,
            Self::Vector(_) => EngineFault::UnmappedVector,
            Self::Snapshot(error) => error.fault(),
            Self::Table(_) => EngineFault::TableIntegrity,
        }
    }
}
