use crate::instruction::Instruction;

/// Renumber priorities to `position + 1` in list order. Runs as the last
/// step of every structural change so priorities are always the contiguous
/// range `1..=N`.
pub fn reindex(instructions: &mut [Instruction]) {
    for (index, instruction) in instructions.iter_mut().enumerate() {
        instruction.priority = (index + 1) as u32;
    }
}
