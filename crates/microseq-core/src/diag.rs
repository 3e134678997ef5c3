//! Engine diagnostics counters.

use crate::{EngineFault, FaultClass};

/// Saturating counters and last-fault record maintained by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct EngineDiag {
    /// Committed cycles since construction or reset.
    pub cycle_count: u64,
    /// Cycles that asserted the end-of-instruction strobe.
    pub instruction_count: u32,
    /// Cycles whose control vector carried the invalid-opcode flag.
    pub invalid_opcode_count: u32,
    /// Priority matrix evaluations.
    pub priority_evaluation_count: u32,
    /// Priority evaluations that returned the no-match sentinel.
    pub no_match_count: u32,
    /// Vector selections with no address for the processor base.
    pub unresolved_vector_count: u32,
    /// Most recent engine fault, if any.
    pub last_fault: Option<EngineFault>,
    /// Cycle index at which `last_fault` was recorded.
    pub last_fault_cycle: u64,
    /// Saturating counter for table-class faults.
    pub fault_count_table: u16,
    /// Saturating counter for interrupt-class faults.
    pub fault_count_interrupt: u16,
    /// Saturating counter for vector-class faults.
    pub fault_count_vector: u16,
    /// Saturating counter for snapshot-class faults.
    pub fault_count_snapshot: u16,
    /// Saturating counter for budget-class faults.
    pub fault_count_budget: u16,
}

impl EngineDiag {
    /// Creates zeroed diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fault occurrence, updating the last fault info and incrementing
    /// the fault class counter.
    #[allow(clippy::missing_const_for_fn)]
    pub fn record_fault(&mut self, fault: EngineFault, cycle: u64) {
        self.last_fault = Some(fault);
        self.last_fault_cycle = cycle;
        let counter = match fault.class() {
            FaultClass::Table => &mut self.fault_count_table,
            FaultClass::Interrupt => &mut self.fault_count_interrupt,
            FaultClass::Vector => &mut self.fault_count_vector,
            FaultClass::Snapshot => &mut self.fault_count_snapshot,
            FaultClass::Budget => &mut self.fault_count_budget,
        };
        *counter = counter.saturating_add(1);
    }

    /// Total faults across every class.
    #[must_use]
    pub fn fault_count(&self) -> u32 {
        [
            self.fault_count_table,
            self.fault_count_interrupt,
            self.fault_count_vector,
            self.fault_count_snapshot,
            self.fault_count_budget,
        ]
        .into_iter()
        .map(u32::from)
        .sum()
    }

    /// Resets all diagnostic fields to their default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
