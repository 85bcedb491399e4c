use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::{
    error::{SequenceError, SessionError},
    model::{Factor, ItemId, Operation, Sequence, SequenceItem},
    question::Question,
    sequence::{
        evaluator::{EvalResult, evaluate},
        validator::{ValidationState, diagnose, validate},
    },
};

/// The state of one learner session.
///
/// A session owns the question being answered, the sequence assembled so far
/// and the validator's verdict for it. The mutation methods are the only
/// writers of the sequence; each structural mutation re-runs the validator
/// exactly once, so [`Session::state`] always describes [`Session::items`].
///
/// # Example
/// ```
/// use tilecalc::{
///     model::{Factor, Operation, OperationKind},
///     question::Question,
///     sequence::ValidationState,
///     session::Session,
/// };
///
/// let question = Question::new("How many?", vec![Factor::new("Six", "", 6.0)]);
/// let mut session = Session::new(question);
/// assert_eq!(session.state(), ValidationState::Init);
///
/// let six = session.factor_bank()[0].clone();
/// session.add_factor(six.clone());
/// session.add_operation(Operation::standard(OperationKind::Multiply));
/// assert_eq!(session.state(), ValidationState::Invalid);
///
/// session.add_factor(six);
/// assert_eq!(session.submit().unwrap(), 36.0);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    question:    Question,
    operations:  Vec<Operation>,
    items:       Sequence,
    state:       ValidationState,
    validations: usize,
}

impl Session {
    /// Starts a session with an empty sequence and the standard operation
    /// bank.
    #[must_use]
    pub fn new(question: Question) -> Self {
        Self { question,
               operations: Operation::bank(),
               items: Vec::new(),
               state: ValidationState::Init,
               validations: 0 }
    }

    /// The question this session answers.
    #[must_use]
    pub const fn question(&self) -> &Question {
        &self.question
    }

    /// The factors the learner can choose from.
    #[must_use]
    pub fn factor_bank(&self) -> &[Factor] {
        &self.question.factors
    }

    /// The operations the learner can choose from.
    #[must_use]
    pub fn operation_bank(&self) -> &[Operation] {
        &self.operations
    }

    /// The current sequence, in display order.
    #[must_use]
    pub fn items(&self) -> &[SequenceItem] {
        &self.items
    }

    /// The validator's verdict for the current sequence.
    #[must_use]
    pub const fn state(&self) -> ValidationState {
        self.state
    }

    /// How many times the validator has run in this session.
    #[must_use]
    pub const fn validations(&self) -> usize {
        self.validations
    }

    /// Appends a factor under a new id and re-validates.
    pub fn add_factor(&mut self, factor: Factor) -> ItemId {
        let item = SequenceItem::factor(factor);
        let id = item.id();
        debug!(%id, "append factor");
        self.items.push(item);
        self.revalidate();
        id
    }

    /// Appends an operation under a new id and re-validates.
    pub fn add_operation(&mut self, operation: Operation) -> ItemId {
        let item = SequenceItem::operation(operation);
        let id = item.id();
        debug!(%id, "append operation");
        self.items.push(item);
        self.revalidate();
        id
    }

    /// Removes the item with `id` and re-validates.
    ///
    /// # Errors
    /// [`SessionError::UnknownItem`] if no item has this id. The sequence is
    /// left untouched and the validator does not run.
    pub fn remove_item(&mut self, id: ItemId) -> Result<SequenceItem, SessionError> {
        let Some(position) = self.position(id) else {
            warn!(%id, "remove of unknown item");
            return Err(SessionError::UnknownItem { id });
        };

        let removed = self.items.remove(position);
        debug!(%id, position, "removed item");
        self.revalidate();
        Ok(removed)
    }

    /// Rearranges the sequence into `order` and re-validates once.
    ///
    /// # Errors
    /// [`SessionError::ReorderMismatch`] if `order` is not a permutation of
    /// the current ids. The sequence is left untouched.
    pub fn reorder(&mut self, order: &[ItemId]) -> Result<(), SessionError> {
        let mismatch = SessionError::ReorderMismatch { expected: self.items.len(),
                                                       found:    order.len(), };
        if order.len() != self.items.len() {
            warn!(expected = self.items.len(), found = order.len(), "reorder length mismatch");
            return Err(mismatch);
        }

        let distinct: HashSet<&ItemId> = order.iter().collect();
        if distinct.len() != order.len() {
            warn!("reorder repeats an id");
            return Err(mismatch);
        }

        let mut reordered = Vec::with_capacity(order.len());
        for id in order {
            let Some(item) = self.items.iter().find(|item| item.id() == *id) else {
                warn!(%id, "reorder names an unknown item");
                return Err(mismatch);
            };
            reordered.push(item.clone());
        }

        self.items = reordered;
        debug!(len = self.items.len(), "reordered sequence");
        self.revalidate();
        Ok(())
    }

    /// Overwrites the value of the factor with `id`, keeping its identity and
    /// position. Structure is unchanged, so the validator does not run.
    ///
    /// # Errors
    /// [`SessionError::UnknownItem`] if no item has this id,
    /// [`SessionError::NotAFactor`] if the item is an operation.
    pub fn change_factor_value(&mut self, id: ItemId, value: f64) -> Result<(), SessionError> {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            warn!(%id, "value change for unknown item");
            return Err(SessionError::UnknownItem { id });
        };

        match item {
            SequenceItem::Factor(_, factor) => {
                debug!(%id, old = factor.value, new = value, "changed factor value");
                *factor = factor.with_value(value);
                Ok(())
            },
            SequenceItem::Operation(..) => {
                warn!(%id, "value change for an operation");
                Err(SessionError::NotAFactor { id })
            },
        }
    }

    /// Empties the sequence.
    pub fn clear(&mut self) {
        self.items.clear();
        self.revalidate();
    }

    /// Evaluates the sequence if it is valid.
    ///
    /// # Errors
    /// [`SequenceError::InvalidSequence`] if the current state is not
    /// [`ValidationState::Valid`].
    pub fn submit(&self) -> EvalResult<f64> {
        if !self.state.is_valid() {
            warn!(state = %self.state, "submission blocked");
            return Err(SequenceError::InvalidSequence { state:  self.state,
                                                        reason: diagnose(&self.items).err(), });
        }

        let result = evaluate(&self.items)?;
        info!(result, items = self.items.len(), "submitted");
        Ok(result)
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn revalidate(&mut self) {
        self.state = validate(&self.items);
        self.validations += 1;
        debug!(state = %self.state, len = self.items.len(), "validated");
    }
}
