use contracts::domain::a001_training_catalog::{TrainingProgram, TrainingProgramId, TrainingTypeId};
use contracts::usecases::u001_submit_application::ServiceEntry;
use std::fmt;
use std::num::NonZeroU32;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор блока услуги
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceBlockId(pub Uuid);

impl ServiceBlockId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// Prefix for DOM ids of the block's fields
    pub fn dom_prefix(&self) -> String {
        format!("service-{}", self.0)
    }
}

impl fmt::Display for ServiceBlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Program select state
// ============================================================================

/// Contents of the dependent program select
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProgramOptions {
    /// No category chosen: disabled, placeholder only
    #[default]
    Placeholder,
    /// Request in flight: disabled, options cleared
    Loading,
    /// The category has no programs (or the lookup failed): disabled
    Empty,
    Ready(Vec<TrainingProgram>),
}

/// A program lookup issued by one block
///
/// `seq` is the block's request counter at issue time; only the latest one
/// may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramRequest {
    pub block_id: ServiceBlockId,
    pub type_id: TrainingTypeId,
    pub seq: u64,
}

// ============================================================================
// Service block
// ============================================================================

/// One repeatable "service" entry of the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBlock {
    pub id: ServiceBlockId,
    pub category: Option<TrainingTypeId>,
    pub programs: ProgramOptions,
    program: Option<TrainingProgramId>,
    /// Разряд, свободный текст
    pub rank: String,
    /// Raw value of the headcount input
    pub headcount: String,
    request_seq: u64,
}

impl ServiceBlock {
    /// Factory: an empty block with a fresh id and a disabled program select
    pub fn new() -> Self {
        Self {
            id: ServiceBlockId::new_v4(),
            category: None,
            programs: ProgramOptions::Placeholder,
            program: None,
            rank: String::new(),
            headcount: String::new(),
            request_seq: 0,
        }
    }

    pub fn is_program_select_enabled(&self) -> bool {
        matches!(self.programs, ProgramOptions::Ready(_))
    }

    /// Selected program, only while the program select is enabled
    pub fn program(&self) -> Option<TrainingProgramId> {
        if self.is_program_select_enabled() {
            self.program
        } else {
            None
        }
    }

    pub fn program_list(&self) -> &[TrainingProgram] {
        match &self.programs {
            ProgramOptions::Ready(list) => list,
            _ => &[],
        }
    }

    /// Change the category.
    ///
    /// Any earlier lookup becomes stale. An empty category resets the program
    /// select to its placeholder and needs no lookup.
    pub fn select_category(&mut self, category: Option<TrainingTypeId>) -> Option<ProgramRequest> {
        self.request_seq += 1;
        self.category = category;
        self.program = None;

        match category {
            None => {
                self.programs = ProgramOptions::Placeholder;
                None
            }
            Some(type_id) => {
                self.programs = ProgramOptions::Loading;
                Some(ProgramRequest {
                    block_id: self.id,
                    type_id,
                    seq: self.request_seq,
                })
            }
        }
    }

    /// Apply a lookup result; returns `false` if it was stale and dropped.
    ///
    /// The first program becomes the selection, as a freshly filled select
    /// shows its first option.
    pub fn apply_programs(&mut self, request: ProgramRequest, programs: Vec<TrainingProgram>) -> bool {
        if request.block_id != self.id
            || request.seq != self.request_seq
            || self.category != Some(request.type_id)
        {
            return false;
        }

        self.program = programs.first().map(|p| p.id);
        self.programs = if programs.is_empty() {
            ProgramOptions::Empty
        } else {
            ProgramOptions::Ready(programs)
        };
        true
    }

    /// Select a program; ignored unless it belongs to the loaded list
    pub fn select_program(&mut self, program: Option<TrainingProgramId>) {
        if !self.is_program_select_enabled() {
            return;
        }
        let known = program.is_some_and(|id| self.program_list().iter().any(|p| p.id == id));
        if known {
            self.program = program;
        }
    }

    /// Current field values as a wire record
    pub fn to_entry(&self) -> ServiceEntry {
        ServiceEntry {
            training_type_id: self.category,
            training_program_id: self.program(),
            training_rank: self.rank.clone(),
            people_count: self.headcount.trim().parse::<NonZeroU32>().ok(),
        }
    }
}

impl Default for ServiceBlock {
    fn default() -> Self {
        Self::new()
    }
}
