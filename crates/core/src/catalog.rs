//! Built-in content: the woodland quiz and the virtual tour slides.

use crate::model::{ImageSource, Question, QuestionDraft, Slide, SlideId};

/// Directory the desktop shell serves the bundled tour images from.
pub const TOUR_ASSET_DIR: &str = "/assets/tour";

const TOUR_CAPTIONS: [&str; 8] = [
    "Lush canopy of the woodland.",
    "Dense green foliage shining in sunlight.",
    "The harmony of forest life.",
    "A wooden trail leading deep into nature.",
    "Majestic maple tree glowing in autumn red.",
    "Rare star-nosed mole, symbol of biodiversity.",
    "Golden mushrooms thriving in the shade.",
    "Peaceful stream flowing through the mossy forest.",
];

/// The Halifax woodlands quiz as authored drafts.
#[must_use]
pub fn default_question_drafts() -> Vec<QuestionDraft> {
    vec![
        QuestionDraft::new(
            "What is one of the most common tree species in the Halifax woodlands?",
            ["Maple", "Oak", "Spruce", "Palm"],
            "Spruce",
        ),
        QuestionDraft::new(
            "Which protected area is known for its forest trails near Halifax?",
            [
                "Point Pleasant Park",
                "Peggy’s Cove",
                "Citadel Hill",
                "Halifax Harbour",
            ],
            "Point Pleasant Park",
        ),
        QuestionDraft::new(
            "Why are Halifax’s woodlands important to the ecosystem?",
            [
                "They provide shade for tourists",
                "They filter air and store carbon",
                "They are mainly used for farming",
                "They prevent snow buildup",
            ],
            "They filter air and store carbon",
        ),
        QuestionDraft::new(
            "What kind of wildlife can often be found in Halifax forests?",
            [
                "Deer and red squirrels",
                "Camels and scorpions",
                "Penguins and seals",
                "Tigers and elephants",
            ],
            "Deer and red squirrels",
        ),
    ]
}

/// The Halifax woodlands quiz.
///
/// # Panics
///
/// Panics if a built-in question fails validation.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    default_question_drafts()
        .into_iter()
        .map(|draft| draft.validate().expect("built-in question should be valid"))
        .collect()
}

/// Image path of the n-th bundled tour image (1-based, as shipped).
#[must_use]
pub fn tour_asset_path(number: usize) -> String {
    format!("{TOUR_ASSET_DIR}/download-{number}.jpg")
}

/// The eight bundled tour slides, ids 1 through 8.
#[must_use]
pub fn default_slides() -> Vec<Slide> {
    TOUR_CAPTIONS
        .iter()
        .enumerate()
        .map(|(index, caption)| {
            let number = index + 1;
            Slide::new(
                SlideId::new(number as u64),
                ImageSource::Asset(tour_asset_path(number)),
                *caption,
            )
        })
        .collect()
}
