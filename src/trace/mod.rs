// Trace recording for step-through replay of a translation

use crate::translator::machine::State;

/// One recorded state-machine action.
///
/// Captures the buffer as it looks after the action's erase-and-compact, so
/// stepping through a trace replays the declarator shrinking construct by
/// construct.
#[derive(Debug, Clone)]
pub struct TraceStep {
    /// State that performed the action.
    pub state: State,
    /// Short human-readable description of what was consumed.
    pub action: String,
    /// English fragment emitted by this action, if any.
    pub fragment: Option<String>,
    /// Buffer contents after compaction.
    pub buffer: String,
    /// Cursor boundary position within `buffer`.
    pub cursor: usize,
}

/// Ordered history of a translation, one step per action.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn new() -> Self {
        Trace { steps: Vec::new() }
    }

    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    pub fn get(&self, index: usize) -> Option<&TraceStep> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// The emitted fragments of the first `count` steps, joined into the
    /// partial sentence a reader would have built up so far.
    pub fn sentence_through(&self, count: usize) -> String {
        self.steps
            .iter()
            .take(count)
            .filter_map(|step| step.fragment.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::machine::Translator;

    #[test]
    fn test_trace_records_every_consumed_construct() {
        let mut translator = Translator::new("int (*x)[]");
        translator.run().expect("translation failed");
        let trace = translator.into_trace();

        // start, name, pointer, grouping, array, base type
        assert_eq!(trace.len(), 6);
        assert_eq!(trace.sentence_through(trace.len()), "x is pointer to array of int");
    }

    #[test]
    fn test_partial_sentence_grows_in_emission_order() {
        let mut translator = Translator::new("int *x[]");
        translator.run().expect("translation failed");
        let trace = translator.into_trace();

        let sentences: Vec<String> = (0..=trace.len()).map(|n| trace.sentence_through(n)).collect();
        assert!(sentences.contains(&"x is".to_string()));
        assert!(sentences.contains(&"x is array of".to_string()));
        assert!(sentences.contains(&"x is array of pointer to".to_string()));
        assert_eq!(sentences.last().unwrap(), "x is array of pointer to int");
    }

    #[test]
    fn test_failed_translation_keeps_steps_up_to_failure() {
        let mut translator = Translator::new("int x[");
        assert!(translator.run().is_err());
        let trace = translator.into_trace();

        // The declared name was found before the unmatched '[' was hit.
        assert!(trace.len() >= 2);
        assert_eq!(trace.sentence_through(trace.len()), "x is");
    }
}
