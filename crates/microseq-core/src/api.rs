//! Host-facing configuration, tracing and snapshot contracts.

use crate::{
    control::ControlVector,
    interrupt::{PriorityOutput, RequestVector},
    state::Microstate,
    vector::{VectorError, VectorSelect},
    EngineFault, SnapshotError,
};

/// Default upper bound on cycles spent in one instruction by `run`.
pub const DEFAULT_MAX_CYCLES_PER_INSTRUCTION: u16 = 64;

/// Matrix table set. Both variants share one evaluation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum MatrixVariant {
    /// Variant A tables.
    #[default]
    A,
    /// Variant G tables: merged `RTI`/`RTT`, `SPL`, timer event rung.
    G,
}

/// Top-level immutable configuration for an engine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct EngineConfig {
    /// Decode and priority table set.
    pub variant: MatrixVariant,
    /// Treat a priority no-match as an error instead of counting it.
    pub consistency_checks: bool,
    /// Enables trace callback dispatch from `step_traced`.
    pub tracing_enabled: bool,
    /// Cycle bound for one instruction in `run`.
    pub max_cycles_per_instruction: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variant: MatrixVariant::A,
            consistency_checks: cfg!(debug_assertions),
            tracing_enabled: false,
            max_cycles_per_instruction: DEFAULT_MAX_CYCLES_PER_INSTRUCTION,
        }
    }
}

impl EngineConfig {
    /// Default configuration for `variant`.
    #[must_use]
    pub fn for_variant(variant: MatrixVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }
}

/// Stable snapshot wire-version identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u16)]
pub enum SnapshotVersion {
    /// Microstate register only.
    V1 = 1,
}

impl SnapshotVersion {
    /// Converts wire value to known snapshot version.
    #[must_use]
    pub const fn from_u16(version: u16) -> Option<Self> {
        match version {
            1 => Some(Self::V1),
            _ => None,
        }
    }

    /// Wire value.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Byte length of the snapshot wire form.
pub const SNAPSHOT_BYTES: usize = 4;

/// Checkpoint of the only cross-cycle engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct EngineSnapshot {
    /// Snapshot schema version.
    pub version: SnapshotVersion,
    /// Microstate register.
    pub microstate: Microstate,
}

impl EngineSnapshot {
    /// Wire form: version then register, both little-endian `u16`.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; SNAPSHOT_BYTES] {
        let [v0, v1] = self.version.as_u16().to_le_bytes();
        let [m0, m1] = self.microstate.bits().to_le_bytes();
        [v0, v1, m0, m1]
    }

    /// Parses the wire form.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] for a wrong length, an unknown version, or a
    /// register value with bit 15 set.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let [v0, v1, m0, m1] = <[u8; SNAPSHOT_BYTES]>::try_from(bytes).map_err(|_| {
            SnapshotError::Length {
                expected: SNAPSHOT_BYTES,
                actual: bytes.len(),
            }
        })?;
        let raw_version = u16::from_le_bytes([v0, v1]);
        let version = SnapshotVersion::from_u16(raw_version)
            .ok_or(SnapshotError::UnsupportedVersion(raw_version))?;
        let raw_state = u16::from_le_bytes([m0, m1]);
        let microstate =
            Microstate::from_bits(raw_state).ok_or(SnapshotError::ReservedBits(raw_state))?;
        Ok(Self {
            version,
            microstate,
        })
    }
}

/// Trace events emitted by `step_traced` when tracing is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceEvent {
    /// Decode evaluated for the current cycle.
    CycleStart {
        /// Cycle index since reset.
        cycle: u64,
        /// Microstate register sampled this cycle.
        microstate: Microstate,
        /// Opcode sampled this cycle.
        ir: u16,
        /// Published control vector.
        control: ControlVector,
    },
    /// Interrupt priority matrix evaluated.
    InterruptEvaluated {
        /// Request snapshot supplied.
        request: RequestVector,
        /// Published output.
        output: PriorityOutput,
    },
    /// Priority output selected a vector.
    VectorSelected {
        /// Selector class.
        select: VectorSelect,
        /// Resolved address or resolution failure.
        address: Result<u16, VectorError>,
    },
    /// Decode reported an unrecognized `(ir, mr)` pair.
    InvalidOpcode {
        /// Opcode sampled this cycle.
        ir: u16,
        /// Microstate register sampled this cycle.
        microstate: Microstate,
    },
    /// Engine fault raised this cycle.
    FaultRaised {
        /// Fault code.
        fault: EngineFault,
        /// Cycle index since reset.
        cycle: u64,
    },
    /// Microstate register written for the next cycle.
    MicrostateCommitted {
        /// New register value.
        next: Microstate,
        /// True when this cycle ended the instruction.
        end_of_instruction: bool,
    },
}

/// Host callback sink for deterministic trace events.
pub trait TraceSink {
    /// Receives one trace event.
    fn on_event(&mut self, event: TraceEvent);
}

impl TraceSink for Vec<TraceEvent> {
    fn on_event(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
