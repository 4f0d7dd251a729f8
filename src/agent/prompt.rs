//! Reasoning prompt construction
//!
//! Renders the tool list, the format instructions and the transcript so far
//! into the single prompt one REASONING step sends to the gateway. The
//! format taught here is the format [`crate::agent::directive`] parses.

use super::transcript::Transcript;
use crate::tools::ToolRegistry;
use std::fmt::Write;

pub(crate) fn build_reasoning_prompt(tools: &ToolRegistry, transcript: &Transcript) -> String {
    let mut tool_lines = String::new();
    for tool in tools.describe_all() {
        let _ = writeln!(tool_lines, "{}: {}", tool.name, tool.description);
    }
    let tool_names = tools.tool_names().join(", ");

    let mut prompt = format!(
        "Answer the following question as best you can. You have access to the following tools:\n\n\
         {tool_lines}\n\
         Use the following format:\n\n\
         Question: the input question you must answer\n\
         Thought: you should always think about what to do\n\
         Action: the action to take, must be one of [{tool_names}]\n\
         Action Input: the input to the action\n\
         Observation: the result of the action\n\
         ... (this Thought/Action/Action Input/Observation can repeat N times)\n\
         Thought: I now know the final answer\n\
         Final Answer: the final answer to the original question\n\n\
         Begin!\n\n\
         Question: {question}\n",
        tool_lines = tool_lines,
        tool_names = tool_names,
        question = transcript.query(),
    );

    for step in transcript.steps() {
        if step.is_synthetic() {
            // Unparsable responses are replayed verbatim, followed by the
            // corrective observation.
            let _ = writeln!(prompt, "{}\nObservation: {}", step.thought, step.observation);
        } else {
            let _ = writeln!(
                prompt,
                "Thought: {}\nAction: {}\nAction Input: {}\nObservation: {}",
                step.thought, step.action, step.action_input, step.observation
            );
        }
    }

    prompt.push_str("Thought:");
    prompt
}
