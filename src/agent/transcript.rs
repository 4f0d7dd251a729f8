//! Episode transcripts
//!
//! A transcript is the growing record of one reasoning episode: the original
//! query, every completed step, and the final answer once one exists. The
//! executor re-renders the whole transcript into the prompt on every
//! reasoning step, so this is also the loop's only working memory.

/// One completed reasoning step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The model's reasoning text preceding its directive.
    pub thought: String,
    /// Name of the tool the model asked for. Empty for the synthetic step
    /// recorded when a response could not be parsed.
    pub action: String,
    /// Input the tool was given.
    pub action_input: String,
    /// Result text fed back to the model on the next reasoning step.
    pub observation: String,
}

impl Step {
    /// Whether this step records an unparsable response rather than a tool
    /// call.
    pub fn is_synthetic(&self) -> bool {
        self.action.is_empty()
    }
}

/// The record one episode accumulates.
///
/// Steps are append-only and the final answer is set at most once, when the
/// episode reaches DONE.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    query: String,
    steps: Vec<Step>,
    final_answer: Option<String>,
}

impl Transcript {
    pub(crate) fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            steps: Vec::new(),
            final_answer: None,
        }
    }

    /// The user query that started the episode.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Completed steps, oldest first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The final answer, if the episode produced one.
    pub fn final_answer(&self) -> Option<&str> {
        self.final_answer.as_deref()
    }

    pub(crate) fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn set_final_answer(&mut self, answer: &str) {
        self.final_answer = Some(answer.to_string());
    }
}
