//! Prompt templates for both attributes.
//!
//! Category and time type share one template shape and differ only in task
//! wording and the vocabulary substituted, so both answers go through the same
//! resolution path.

use std::fmt::Write as _;

use tempo_core::entities::Vocabulary;
use tempo_core::enums::Attribute;

struct Template {
    task: &'static str,
    heading: &'static str,
    instructions: &'static [&'static str],
    trailer: &'static str,
}

const CATEGORY: Template = Template {
    task: "Please classify the following time tracking record into one of the exact categories listed below.",
    heading: "Available Categories:",
    instructions: &[
        "Analyze the content of the time record",
        "Choose the most appropriate category from the list above",
        "Respond with ONLY the exact category name, nothing else",
        "If none of the categories fit perfectly, choose the closest one",
    ],
    trailer: "Classification:",
};

const TIME_TYPE: Template = Template {
    task: "Please determine the time type of the following time tracking record. Choose from one of the exact time types listed below.",
    heading: "Available Time Types:",
    instructions: &[
        "Analyze the content of the time record",
        "Determine what type of work this represents",
        "Choose the most appropriate time type from the list above",
        "Respond with ONLY the exact time type name, nothing else",
        "If none of the time types fit perfectly, choose the closest one",
    ],
    trailer: "Time Type:",
};

const fn template(attribute: Attribute) -> &'static Template {
    match attribute {
        Attribute::Category => &CATEGORY,
        Attribute::TimeType => &TIME_TYPE,
    }
}

/// Build the prompt asking for one `attribute` label for `content`.
///
/// `content` is embedded verbatim and every label is listed as a bullet.
#[must_use]
pub fn build_prompt(attribute: Attribute, content: &str, vocabulary: &Vocabulary) -> String {
    let template = template(attribute);

    let options = vocabulary
        .iter()
        .map(|label| format!("- {label}"))
        .collect::<Vec<_>>()
        .join("\n");

    let mut instructions = String::new();
    for (i, line) in template.instructions.iter().enumerate() {
        if i > 0 {
            instructions.push('\n');
        }
        let _ = write!(instructions, "{}. {line}", i + 1);
    }

    format!(
        "{task}\n\nTime Record: {content}\n\n{heading}\n{options}\n\nInstructions:\n{instructions}\n\n{trailer}",
        task = template.task,
        heading = template.heading,
        trailer = template.trailer,
    )
}
