//! Directive parsing
//!
//! The reasoning prompt instructs the model to answer in a fixed text format;
//! this module is the only place that format is matched.
//!
//! Grammar, case-sensitive:
//!
//! ```text
//! Thought: <free text>
//! Action: <tool name>
//! Action Input: <input, runs to an Observation: line or end of text>
//! ```
//!
//! or
//!
//! ```text
//! Thought: <free text>
//! Final Answer: <answer, runs to end of text>
//! ```
//!
//! `Action:` and `Action Input:` must each start their own line;
//! `Action Input:` belongs on a line after the `Action:` line. A response
//! containing both an `Action:` and a `Final Answer:`, an `Action:` with no
//! `Action Input:` on a later line, or neither marker, does not parse.
//! The parser never guesses: anything outside the grammar is reported as
//! [`Directive::Unparsable`] and the loop decides what to do with it.

const FINAL_ANSWER_MARKER: &str = "Final Answer:";
const ACTION_MARKER: &str = "Action:";
const ACTION_INPUT_MARKER: &str = "Action Input:";
const OBSERVATION_MARKER: &str = "Observation:";

/// A parsed model response: answer, tool request, or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Terminal: the text following `Final Answer:`.
    FinalAnswer(String),
    /// Invoke `tool` with `input`.
    ToolCall {
        /// Name of the requested tool, as the model wrote it.
        tool: String,
        /// Input text for the tool, with wrapping quotes stripped.
        input: String,
    },
    /// The response matched neither directive shape.
    Unparsable,
}

/// Parse one raw model response into a [`Directive`].
pub fn parse(response: &str) -> Directive {
    let has_final = response.contains(FINAL_ANSWER_MARKER);
    let has_action = response
        .lines()
        .any(|line| line.trim_start().starts_with(ACTION_MARKER));

    // Ambiguous responses are refused rather than guessed at.
    if has_final && has_action {
        return Directive::Unparsable;
    }

    if has_final {
        return parse_final_answer(response);
    }
    if has_action {
        return parse_tool_call(response);
    }
    Directive::Unparsable
}

/// The reasoning text preceding the directive, with the `Thought:` label
/// stripped. Used by the executor when recording a transcript step.
pub(crate) fn extract_thought(response: &str) -> String {
    let mut collected: Vec<&str> = Vec::new();
    for line in response.lines() {
        if line.trim_start().starts_with(ACTION_MARKER) {
            break;
        }
        if let Some(pos) = line.find(FINAL_ANSWER_MARKER) {
            collected.push(&line[..pos]);
            break;
        }
        collected.push(line);
    }

    let joined = collected.join("\n");
    let trimmed = joined.trim();
    trimmed
        .strip_prefix("Thought:")
        .map(str::trim)
        .unwrap_or(trimmed)
        .to_string()
}

fn parse_final_answer(response: &str) -> Directive {
    // contains() was checked by the caller
    match response.find(FINAL_ANSWER_MARKER) {
        Some(idx) => {
            let answer = response[idx + FINAL_ANSWER_MARKER.len()..].trim();
            Directive::FinalAnswer(answer.to_string())
        }
        None => Directive::Unparsable,
    }
}

fn parse_tool_call(response: &str) -> Directive {
    let lines: Vec<&str> = response.lines().collect();
    let Some(action_idx) = lines
        .iter()
        .position(|line| line.trim_start().starts_with(ACTION_MARKER))
    else {
        return Directive::Unparsable;
    };

    // The rest of the Action: line is the tool name; the input has to start
    // a later line. Both markers crammed onto one line do not parse.
    let name_part = &lines[action_idx].trim_start()[ACTION_MARKER.len()..];

    let mut input = None;
    for (i, line) in lines.iter().enumerate().skip(action_idx + 1) {
        if let Some(first) = line.trim_start().strip_prefix(ACTION_INPUT_MARKER) {
            let mut collected = vec![first.to_string()];
            for continuation in &lines[i + 1..] {
                if continuation.trim_start().starts_with(OBSERVATION_MARKER) {
                    break;
                }
                collected.push(continuation.to_string());
            }
            input = Some(collected.join("\n"));
            break;
        }
    }

    let tool = clean_tool_name(name_part);
    let Some(input) = input else {
        return Directive::Unparsable;
    };
    if tool.is_empty() {
        return Directive::Unparsable;
    }

    Directive::ToolCall {
        tool,
        input: strip_wrapping_quotes(&input).to_string(),
    }
}

/// Models decorate tool names with backticks, quotes or emphasis markers.
fn clean_tool_name(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| c == '`' || c == '"' || c == '\'' || c == '*')
        .trim()
        .to_string()
}

fn strip_wrapping_quotes(s: &str) -> &str {
    let trimmed = s.trim();
    let bytes = trimmed.as_bytes();
    if trimmed.len() >= 2 {
        let wrapped = (bytes[0] == b'"' && bytes[trimmed.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[trimmed.len() - 1] == b'\'');
        if wrapped {
            return trimmed[1..trimmed.len() - 1].trim();
        }
    }
    trimmed
}
