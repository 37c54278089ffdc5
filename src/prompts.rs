//! Writer's reflection prompts shown under each dashboard section.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Sentences,
    Vocabulary,
    Frequency,
    Sentiment,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Sentences,
        Section::Vocabulary,
        Section::Frequency,
        Section::Sentiment,
    ];
}

pub fn prompts_for(section: Section) -> &'static [&'static str] {
    match section {
        Section::Sentences => &[
            "What does the sentence length tell you about your pacing? Are there moments where longer or shorter sentences might better reflect the action or emotion?",
            "Does your sentence length mirror the emotional intensity of the scene? Could you adjust it to create a different effect?",
        ],
        Section::Vocabulary => &[
            "How varied is your vocabulary? How might this affect the voice or tone you are creating?",
        ],
        Section::Frequency => &[
            "What do the most frequently used words say about your piece? Are they intentional or could they be improved?",
            "Are there any repetitive words that stand out? How could you diversify them?",
        ],
        Section::Sentiment => &[
            "How does the emotional tone of your writing evolve over time? Does the graph match the intended emotional journey?",
            "Try shifting the sentiment of a piece of text. How does the story change when the sentiment is altered?",
            "Does the sentiment analysis align with what you intended to convey? If not, how could you adjust your language to achieve your goals?",
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionPrompts {
    pub section: Section,
    pub prompts: &'static [&'static str],
}

pub fn all_prompts() -> Vec<SectionPrompts> {
    Section::ALL
        .iter()
        .map(|&section| SectionPrompts {
            section,
            prompts: prompts_for(section),
        })
        .collect()
}
