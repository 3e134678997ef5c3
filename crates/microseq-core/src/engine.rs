//! Cycle sequencer composing the decode and priority matrices around the
//! microstate register.
//!
//! One cycle samples the register and the caller's inputs, evaluates the
//! decode matrix, evaluates the priority matrix when the control vector polls
//! it, fetches a vector, or a request is pending, then writes the next
//! register value. The write happens only after both evaluations; a failed
//! cycle leaves the register untouched.

use crate::{
    api::{
        EngineConfig, EngineSnapshot, MatrixVariant, SnapshotVersion, TraceEvent, TraceSink,
    },
    control::{ControlVector, FeedbackSource},
    decode::DecodeMatrix,
    diag::EngineDiag,
    fault::{EngineError, EngineFault},
    interrupt::{InterruptMatrix, PriorityFeedback, PriorityOutput, RequestVector},
    state::{ConditionCodes, Microstate},
    vector::{resolve_vector, VectorContext, VectorError, VectorSelect},
};

/// Caller-supplied inputs sampled by one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CycleInputs {
    /// Instruction register.
    pub ir: u16,
    /// Condition codes latched into the next register value.
    pub flags: ConditionCodes,
    /// Request snapshot for the priority matrix.
    pub request: RequestVector,
    /// Vector resolution context.
    pub vectors: VectorContext,
}

impl CycleInputs {
    /// Inputs for `ir` with clear flags and a quiescent request.
    #[must_use]
    pub const fn new(ir: u16) -> Self {
        Self {
            ir,
            flags: ConditionCodes::from_bits(0),
            request: RequestVector::QUIESCENT,
            vectors: VectorContext {
                base: 0,
                vector_register: 0,
                start_address: 0,
            },
        }
    }

    /// Returns a copy with `flags`.
    #[must_use]
    pub const fn with_flags(self, flags: ConditionCodes) -> Self {
        Self { flags, ..self }
    }

    /// Returns a copy with `request`.
    #[must_use]
    pub const fn with_request(self, request: RequestVector) -> Self {
        Self { request, ..self }
    }

    /// Returns a copy with `vectors`.
    #[must_use]
    pub const fn with_vectors(self, vectors: VectorContext) -> Self {
        Self { vectors, ..self }
    }
}

/// Vector selected by the priority output of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectedVector {
    /// Selector class.
    pub select: VectorSelect,
    /// Resolved address, or why none exists.
    pub address: Result<u16, VectorError>,
}

/// Everything one cycle published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleOutcome {
    /// Register value sampled at the start of the cycle.
    pub microstate: Microstate,
    /// Published control vector.
    pub control: ControlVector,
    /// Priority output, when the matrix was evaluated.
    pub priority: Option<PriorityOutput>,
    /// Vector selected by the priority output.
    pub vector: Option<SelectedVector>,
    /// Register value committed for the next cycle.
    pub next: Microstate,
}

impl CycleOutcome {
    /// True when the cycle asserted the end-of-instruction strobe.
    #[must_use]
    pub const fn ends_instruction(&self) -> bool {
        self.control.ends_instruction()
    }

    /// True when decode recognized no row.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.control.is_invalid()
    }

    /// Resolved vector address, if any vector was selected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Vector`] when the selected vector has no address.
    pub fn vector_address(&self) -> Result<Option<u16>, EngineError> {
        self.vector
            .map(|selected| selected.address)
            .transpose()
            .map_err(EngineError::from)
    }
}

/// Result of running one instruction to its end strobe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunOutcome {
    /// Cycles executed, including the ending cycle.
    pub cycles: u16,
    /// Outcome of the ending cycle.
    pub last: CycleOutcome,
}

/// Microcode sequencer owning the microstate register.
#[derive(Debug, Clone)]
pub struct MicrocodeEngine {
    config: EngineConfig,
    decode: DecodeMatrix,
    interrupt: InterruptMatrix,
    microstate: Microstate,
    diag: EngineDiag,
}

impl Default for MicrocodeEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn emit(sink: Option<&mut (dyn TraceSink + '_)>, event: TraceEvent) {
    if let Some(sink) = sink {
        sink.on_event(event);
    }
}

impl MicrocodeEngine {
    /// Engine in the reset state.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_microstate(config, Microstate::RESET)
    }

    /// Engine starting from an arbitrary register value.
    #[must_use]
    pub fn with_microstate(config: EngineConfig, microstate: Microstate) -> Self {
        let decode = DecodeMatrix::new(config.variant);
        let interrupt = InterruptMatrix::new(config.variant);
        Self {
            config,
            decode,
            interrupt,
            microstate,
            diag: EngineDiag::new(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Selected table variant.
    #[must_use]
    pub const fn variant(&self) -> MatrixVariant {
        self.config.variant
    }

    /// Decode matrix in use.
    #[must_use]
    pub const fn decode_matrix(&self) -> DecodeMatrix {
        self.decode
    }

    /// Priority matrix in use.
    #[must_use]
    pub const fn interrupt_matrix(&self) -> InterruptMatrix {
        self.interrupt
    }

    /// Current register value.
    #[must_use]
    pub const fn microstate(&self) -> Microstate {
        self.microstate
    }

    /// Diagnostics counters.
    #[must_use]
    pub const fn diag(&self) -> &EngineDiag {
        &self.diag
    }

    /// Returns the register to its power-up value and clears diagnostics.
    pub fn reset(&mut self) {
        self.microstate = Microstate::RESET;
        self.diag.reset();
    }

    /// Validates both matrix tables of the selected variant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Table`] for the first integrity violation.
    pub fn verify_tables(&mut self) -> Result<(), EngineError> {
        let checked = self
            .decode
            .table()
            .validate()
            .and_then(|()| self.interrupt.table().validate());
        checked.map_err(|error| {
            let error = EngineError::from(error);
            self.diag
                .record_fault(error.fault(), self.diag.cycle_count);
            error
        })
    }

    /// Executes one cycle.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoInterruptTermMatched`] when consistency checks
    /// are on and the priority matrix matched no rung. The register is not
    /// written in that case.
    pub fn step(&mut self, inputs: &CycleInputs) -> Result<CycleOutcome, EngineError> {
        self.cycle(inputs, None)
    }

    /// Executes one cycle, reporting trace events when tracing is enabled.
    ///
    /// # Errors
    ///
    /// Same as [`Self::step`].
    pub fn step_traced(
        &mut self,
        inputs: &CycleInputs,
        sink: &mut dyn TraceSink,
    ) -> Result<CycleOutcome, EngineError> {
        if self.config.tracing_enabled {
            self.cycle(inputs, Some(sink))
        } else {
            self.cycle(inputs, None)
        }
    }

    /// Steps with fixed inputs until a cycle asserts the end strobe.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::step`] errors and returns
    /// [`EngineError::CycleBoundExceeded`] when no cycle within
    /// `max_cycles_per_instruction` ends the instruction.
    pub fn run(&mut self, inputs: &CycleInputs) -> Result<RunOutcome, EngineError> {
        let mut cycles: u16 = 0;
        while cycles < self.config.max_cycles_per_instruction {
            let outcome = self.step(inputs)?;
            cycles += 1;
            if outcome.ends_instruction() {
                return Ok(RunOutcome {
                    cycles,
                    last: outcome,
                });
            }
        }
        let error = EngineError::CycleBoundExceeded {
            ir: inputs.ir,
            cycles,
        };
        self.diag.record_fault(error.fault(), self.diag.cycle_count);
        Err(error)
    }

    /// Captures the register.
    #[must_use]
    pub const fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            version: SnapshotVersion::V1,
            microstate: self.microstate,
        }
    }

    /// Restores a captured register.
    #[allow(clippy::missing_const_for_fn)]
    pub fn restore(&mut self, snapshot: &EngineSnapshot) {
        self.microstate = snapshot.microstate;
    }

    /// Restores a register from its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Snapshot`] for malformed bytes; the register is
    /// left unchanged.
    pub fn restore_from_bytes(&mut self, bytes: &[u8]) -> Result<(), EngineError> {
        match EngineSnapshot::from_bytes(bytes) {
            Ok(snapshot) => {
                self.restore(&snapshot);
                Ok(())
            }
            Err(error) => {
                self.diag.record_fault(error.fault(), self.diag.cycle_count);
                Err(error.into())
            }
        }
    }

    fn cycle(
        &mut self,
        inputs: &CycleInputs,
        mut sink: Option<&mut (dyn TraceSink + '_)>,
    ) -> Result<CycleOutcome, EngineError> {
        let cycle = self.diag.cycle_count;
        let microstate = self.microstate;
        let control = self.decode.evaluate(inputs.ir, microstate.bits());
        emit(
            sink.as_deref_mut(),
            TraceEvent::CycleStart {
                cycle,
                microstate,
                ir: inputs.ir,
                control,
            },
        );
        if control.is_invalid() {
            emit(
                sink.as_deref_mut(),
                TraceEvent::InvalidOpcode {
                    ir: inputs.ir,
                    microstate,
                },
            );
        }

        let priority = self.evaluate_priority(control, inputs.request, sink.as_deref_mut())?;
        let vector = priority
            .and_then(PriorityOutput::vector_select)
            .map(|select| self.select_vector(select, inputs.vectors, sink.as_deref_mut()));

        let feedback = match control.feedback_source() {
            FeedbackSource::Priority => priority.map_or(
                PriorityFeedback::Continue.code(),
                PriorityOutput::feedback_bits,
            ),
            FeedbackSource::Decode => control.feedback(),
        };
        let next = Microstate::compose(control.next_address(), inputs.flags, feedback);

        self.microstate = next;
        self.diag.cycle_count = self.diag.cycle_count.saturating_add(1);
        if control.ends_instruction() {
            self.diag.instruction_count = self.diag.instruction_count.saturating_add(1);
        }
        if control.is_invalid() {
            self.diag.invalid_opcode_count = self.diag.invalid_opcode_count.saturating_add(1);
        }
        emit(
            sink,
            TraceEvent::MicrostateCommitted {
                next,
                end_of_instruction: control.ends_instruction(),
            },
        );

        Ok(CycleOutcome {
            microstate,
            control,
            priority,
            vector,
            next,
        })
    }

    fn evaluate_priority(
        &mut self,
        control: ControlVector,
        request: RequestVector,
        mut sink: Option<&mut (dyn TraceSink + '_)>,
    ) -> Result<Option<PriorityOutput>, EngineError> {
        if !(control.polls_priority()
            || control.fetches_vector()
            || request.has_pending_condition())
        {
            return Ok(None);
        }
        let output = self.interrupt.evaluate(request);
        self.diag.priority_evaluation_count =
            self.diag.priority_evaluation_count.saturating_add(1);
        emit(
            sink.as_deref_mut(),
            TraceEvent::InterruptEvaluated { request, output },
        );
        if output.is_no_match() {
            let cycle = self.diag.cycle_count;
            self.diag.no_match_count = self.diag.no_match_count.saturating_add(1);
            self.diag
                .record_fault(EngineFault::NoInterruptTermMatched, cycle);
            emit(
                sink,
                TraceEvent::FaultRaised {
                    fault: EngineFault::NoInterruptTermMatched,
                    cycle,
                },
            );
            if self.config.consistency_checks {
                return Err(EngineError::NoInterruptTermMatched {
                    request,
                    microstate: self.microstate,
                });
            }
        }
        Ok(Some(output))
    }

    fn select_vector(
        &mut self,
        select: VectorSelect,
        context: VectorContext,
        mut sink: Option<&mut (dyn TraceSink + '_)>,
    ) -> SelectedVector {
        let address = resolve_vector(select, &context);
        if address.is_err() {
            let cycle = self.diag.cycle_count;
            self.diag.unresolved_vector_count =
                self.diag.unresolved_vector_count.saturating_add(1);
            self.diag.record_fault(EngineFault::UnmappedVector, cycle);
            emit(
                sink.as_deref_mut(),
                TraceEvent::FaultRaised {
                    fault: EngineFault::UnmappedVector,
                    cycle,
                },
            );
        }
        emit(sink, TraceEvent::VectorSelected { select, address });
        SelectedVector { select, address }
    }
}

#[cfg(test)]
mod tests {
    use super::{CycleInputs, MicrocodeEngine};
    use crate::{
        api::{EngineConfig, MatrixVariant, TraceEvent},
        fault::{EngineError, EngineFault},
        interrupt::{InstructionTrap, PriorityOutput, RequestLine, RequestVector},
        state::{
            address, ConditionCodes, Microstate, FEEDBACK_FIRST_CYCLE,
            FEEDBACK_REGISTER_DESTINATION,
        },
        vector::{VectorContext, VectorError, VectorSelect},
    };

    const MOV_R0_R1: u16 = 0o010001;

    fn config(variant: MatrixVariant, consistency_checks: bool) -> EngineConfig {
        EngineConfig {
            variant,
            consistency_checks,
            tracing_enabled: true,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn register_move_walks_fetch_decode_source_destination_execute() {
        for variant in [MatrixVariant::A, MatrixVariant::G] {
            let mut engine = MicrocodeEngine::new(config(variant, true));
            let inputs = CycleInputs::new(MOV_R0_R1);
            let expected = [
                (address::DECODE, FEEDBACK_FIRST_CYCLE, false),
                (address::SOURCE, 0b111, false),
                (address::DESTINATION, 0b111, false),
                (address::EXECUTE, FEEDBACK_REGISTER_DESTINATION, false),
                (address::FETCH, 0b110, true),
            ];
            for (next_address, feedback, ends) in expected {
                let outcome = engine.step(&inputs).expect("well-formed request");
                assert_eq!(outcome.next.address(), next_address);
                assert_eq!(outcome.next.feedback(), feedback);
                assert_eq!(outcome.ends_instruction(), ends);
                assert!(!outcome.is_invalid());
            }
            assert_eq!(engine.diag().cycle_count, 5);
            assert_eq!(engine.diag().instruction_count, 1);
        }
    }

    #[test]
    fn run_stops_at_end_strobe() {
        let mut engine = MicrocodeEngine::new(config(MatrixVariant::A, true));
        let run = engine.run(&CycleInputs::new(MOV_R0_R1)).expect("ends");
        assert_eq!(run.cycles, 5);
        assert_eq!(run.last.microstate.address(), address::EXECUTE);
        assert_eq!(engine.microstate().address(), address::FETCH);
    }

    #[test]
    fn run_reports_cycle_bound() {
        let mut engine = MicrocodeEngine::new(EngineConfig {
            max_cycles_per_instruction: 3,
            ..config(MatrixVariant::A, true)
        });
        let error = engine.run(&CycleInputs::new(MOV_R0_R1)).expect_err("bounded");
        assert_eq!(
            error,
            EngineError::CycleBoundExceeded {
                ir: MOV_R0_R1,
                cycles: 3
            }
        );
        assert_eq!(engine.diag().last_fault, Some(EngineFault::CycleBoundExceeded));
        assert_eq!(engine.microstate().address(), address::DESTINATION);
    }

    #[test]
    fn malformed_trap_code_is_an_error_under_consistency_checks() {
        let request = RequestVector::from_bits(RequestVector::QUIESCENT.bits() | (6 << 17));
        let inputs = CycleInputs::new(MOV_R0_R1).with_request(request);

        let mut strict = MicrocodeEngine::new(config(MatrixVariant::A, true));
        let error = strict.step(&inputs).expect_err("sentinel");
        assert_eq!(error.fault(), EngineFault::NoInterruptTermMatched);
        assert_eq!(strict.microstate(), Microstate::RESET);
        assert_eq!(strict.diag().cycle_count, 0);
        assert_eq!(strict.diag().no_match_count, 1);

        let mut lenient = MicrocodeEngine::new(config(MatrixVariant::A, false));
        let outcome = lenient.step(&inputs).expect("counted, not raised");
        assert_eq!(outcome.priority, Some(PriorityOutput::NO_MATCH));
        assert_eq!(outcome.next.address(), address::DECODE);
        assert_eq!(lenient.diag().no_match_count, 1);
        assert_eq!(lenient.diag().fault_count_interrupt, 1);
    }

    #[test]
    fn bus_timeout_with_base_three_has_no_vector() {
        let inputs = CycleInputs::new(MOV_R0_R1)
            .with_request(RequestVector::QUIESCENT.with_line(RequestLine::BusTimeout, true))
            .with_vectors(VectorContext {
                base: 0b11,
                ..VectorContext::default()
            });
        let mut engine = MicrocodeEngine::new(config(MatrixVariant::A, true));
        let outcome = engine.step(&inputs).expect("well-formed request");
        let selected = outcome.vector.expect("bus timeout selects a vector");
        assert_eq!(selected.select, VectorSelect::QbusTimeout);
        assert_eq!(
            outcome.vector_address(),
            Err(EngineError::Vector(VectorError::UnmappedBase {
                select: VectorSelect::QbusTimeout,
                base: 0b11
            }))
        );
        assert_eq!(engine.diag().unresolved_vector_count, 1);
        assert_eq!(engine.diag().last_fault, Some(EngineFault::UnmappedVector));
    }

    #[test]
    fn priority_is_not_evaluated_without_poll_or_pending_request() {
        let mut engine = MicrocodeEngine::new(config(MatrixVariant::A, true));
        let outcome = engine.step(&CycleInputs::new(MOV_R0_R1)).expect("quiet");
        assert_eq!(outcome.priority, None);
        assert_eq!(outcome.vector, None);
    }

    #[test]
    fn flags_are_latched_into_the_next_register_value() {
        let flags = ConditionCodes {
            zero: true,
            ..ConditionCodes::default()
        };
        let mut engine = MicrocodeEngine::new(config(MatrixVariant::G, true));
        let outcome = engine
            .step(&CycleInputs::new(MOV_R0_R1).with_flags(flags))
            .expect("quiet");
        assert_eq!(outcome.next.condition_codes(), flags);
    }

    #[test]
    fn tracing_reports_cycle_and_commit_events() {
        let mut engine = MicrocodeEngine::new(config(MatrixVariant::A, true));
        let mut events: Vec<TraceEvent> = Vec::new();
        let inputs = CycleInputs::new(0).with_request(
            RequestVector::QUIESCENT.with_trap(InstructionTrap::classify(0)),
        );
        engine.step_traced(&inputs, &mut events).expect("halt trap");
        assert!(matches!(events.first(), Some(TraceEvent::CycleStart { cycle: 0, .. })));
        assert!(events
            .iter()
            .any(|event| matches!(event, TraceEvent::InterruptEvaluated { .. })));
        assert!(events.iter().any(|event| matches!(
            event,
            TraceEvent::VectorSelected {
                select: VectorSelect::HaltTrap,
                ..
            }
        )));
        assert!(matches!(
            events.last(),
            Some(TraceEvent::MicrostateCommitted {
                end_of_instruction: false,
                ..
            })
        ));

        let mut silent = MicrocodeEngine::new(EngineConfig {
            tracing_enabled: false,
            ..config(MatrixVariant::A, true)
        });
        let mut none: Vec<TraceEvent> = Vec::new();
        silent.step_traced(&inputs, &mut none).expect("halt trap");
        assert!(none.is_empty());
    }

    #[test]
    fn snapshot_restore_round_trips_register() {
        let mut engine = MicrocodeEngine::new(config(MatrixVariant::A, true));
        let inputs = CycleInputs::new(MOV_R0_R1);
        engine.step(&inputs).expect("quiet");
        let snapshot = engine.snapshot();
        engine.step(&inputs).expect("quiet");
        engine.restore(&snapshot);
        assert_eq!(engine.microstate().address(), address::DECODE);

        let bytes = snapshot.to_bytes();
        engine.reset();
        engine.restore_from_bytes(&bytes).expect("valid snapshot");
        assert_eq!(engine.microstate(), snapshot.microstate);
        assert!(engine.restore_from_bytes(&bytes[..2]).is_err());
        assert_eq!(engine.microstate(), snapshot.microstate);
        assert_eq!(engine.diag().fault_count_snapshot, 1);
    }

    #[test]
    fn verify_tables_accepts_shipped_tables() {
        for variant in [MatrixVariant::A, MatrixVariant::G] {
            let mut engine = MicrocodeEngine::new(config(variant, true));
            assert_eq!(engine.verify_tables(), Ok(()));
            assert_eq!(engine.variant(), variant);
        }
    }
}
