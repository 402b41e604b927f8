use crate::catalog::ActionTemplate;
use crate::derive;
use crate::instruction::Instruction;
use crate::reindex::reindex;
use crate::settings::SettingsPatch;

// ---------------------------------------------------------------------------
// RouteProgram
// ---------------------------------------------------------------------------

/// The editable, priority-ordered instruction list of one outbound route.
///
/// Operations are pure transitions: each takes `&self` and returns the next
/// program value. The hosting surface owns the single current value and
/// replaces it wholesale after every edit, so what it renders is always a
/// program whose priorities are `1..=N` and whose derived instructions match
/// their triggers.
///
/// Referencing a transient id that is not in the program is a precondition
/// violation, not a runtime error: the operation returns an equal program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteProgram {
    instructions: Vec<Instruction>,
}

impl RouteProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-derived instruction list, renumbering priorities.
    /// Used by the deserializer; the list is taken as-is otherwise.
    pub(crate) fn from_instructions(mut instructions: Vec<Instruction>) -> Self {
        reindex(&mut instructions);
        Self { instructions }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, transient_id: &str) -> Option<&Instruction> {
        self.instructions
            .iter()
            .find(|instruction| instruction.transient_id == transient_id)
    }

    pub fn at(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    // ---------------------------------------------------------------------------
    // Operations
    // ---------------------------------------------------------------------------

    /// Insert a new instruction built from `template` at `index` (clamped to
    /// the end of the list).
    pub fn insert_at(&self, index: usize, template: &ActionTemplate) -> Self {
        let mut next = self.instructions.clone();
        let at = index.min(next.len());
        next.insert(at, Instruction::user(template.default_settings()));
        Self::normalized(next)
    }

    /// Move the instruction at `from` to `to` (clamped). Derivation is keyed
    /// by id, so a position change alone never re-derives.
    pub fn move_instruction(&self, from: usize, to: usize) -> Self {
        if from >= self.instructions.len() {
            return self.clone();
        }
        let mut next = self.instructions.clone();
        let instruction = next.remove(from);
        let at = to.min(next.len());
        next.insert(at, instruction);
        reindex(&mut next);
        Self { instructions: next }
    }

    /// Merge `patch` into the settings of the instruction with
    /// `transient_id`, then re-derive and reindex. A patch whose variant
    /// does not match the instruction's type leaves the program unchanged.
    pub fn update_settings(&self, transient_id: &str, patch: &SettingsPatch) -> Self {
        let mut next = self.instructions.clone();
        let Some(target) = next
            .iter_mut()
            .find(|instruction| instruction.transient_id == transient_id)
        else {
            return self.clone();
        };
        if !target.settings.apply(patch) {
            return self.clone();
        }
        Self::normalized(next)
    }

    /// Remove the instruction with `transient_id` and, when it was a
    /// trigger, its derived counterpart.
    pub fn remove(&self, transient_id: &str) -> Self {
        if self.get(transient_id).is_none() {
            return self.clone();
        }
        let counterpart = derive::derived_key(transient_id);
        let next: Vec<Instruction> = self
            .instructions
            .iter()
            .filter(|instruction| {
                instruction.transient_id != transient_id
                    && instruction.transient_id != counterpart
            })
            .cloned()
            .collect();
        Self::normalized(next)
    }

    fn normalized(mut instructions: Vec<Instruction>) -> Self {
        derive::recompute(&mut instructions);
        reindex(&mut instructions);
        Self { instructions }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
