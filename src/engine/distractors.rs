use rand::Rng;

use super::EngineError;
use crate::models::{Assignment, ValidationError};

/// Answers laid out in display slots for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownOptions {
    /// Answer text per slot; the index is the slot label.
    pub options: Vec<String>,
    pub correct_slot: usize,
}

impl ShownOptions {
    /// A selection is correct only when it names the designated slot, even
    /// if another slot happens to carry the same text.
    pub fn is_correct(&self, selected: i64) -> bool {
        usize::try_from(selected).is_ok_and(|slot| slot == self.correct_slot)
    }
}

/// Pick the options shown for a question whose answer is `correct_answer`.
///
/// The correct answer lands in one uniformly chosen slot. Every other slot
/// gets the answer of a random question whose answer differs from the
/// correct one; the same distractor may appear in several slots.
pub fn select_distractors<G>(
    assignment: &Assignment,
    correct_answer: &str,
    rng: &mut G,
) -> Result<ShownOptions, EngineError>
where
    G: Rng + ?Sized,
{
    let slots = assignment.options_per_question;
    if slots == 0 {
        return Err(ValidationError::ZeroOptions.into());
    }

    let pool: Vec<&str> = assignment.distractor_pool(correct_answer).collect();
    if slots > 1 && pool.is_empty() {
        return Err(EngineError::NoDistractors {
            answer: correct_answer.to_string(),
        });
    }

    let correct_slot = rng.gen_range(0..slots);
    let mut options = Vec::with_capacity(slots);
    for slot in 0..slots {
        if slot == correct_slot {
            options.push(correct_answer.to_string());
        } else {
            options.push(pool[rng.gen_range(0..pool.len())].to_string());
        }
    }

    Ok(ShownOptions {
        options,
        correct_slot,
    })
}
