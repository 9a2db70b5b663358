//! Built-in sample decks.
//!
//! Used when no deck file is configured, so the app is usable out of the box.

use super::CardProvider;
use crate::model::card::RawCardId;
use crate::model::{CardRecord, Category, SourceError};

/// (id, question, answer, explanation, code)
type SampleCard = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
);

const GENERAL: &[SampleCard] = &[
    (
        "g1",
        "What is the capital of France?",
        "Paris",
        "Paris is the capital and most populous city of France.",
        None,
    ),
    (
        "g2",
        "Who wrote 'Romeo and Juliet'?",
        "William Shakespeare",
        "William Shakespeare was an English poet, playwright, and actor, widely regarded as the greatest writer in the English language.",
        None,
    ),
    (
        "g3",
        "What is the chemical symbol for gold?",
        "Au",
        "The symbol Au comes from the Latin word for gold, 'aurum'.",
        None,
    ),
    (
        "g4",
        "What is the largest planet in our solar system?",
        "Jupiter",
        "Jupiter is the fifth planet from the Sun and the largest in the Solar System.",
        None,
    ),
    (
        "g5",
        "What year did the Titanic sink?",
        "1912",
        "The RMS Titanic sank in the North Atlantic Ocean on April 15, 1912, after colliding with an iceberg.",
        None,
    ),
];

const CODING: &[SampleCard] = &[
    (
        "c1",
        "What does HTML stand for?",
        "HyperText Markup Language",
        "HTML is the standard markup language for documents designed to be displayed in a web browser.",
        None,
    ),
    (
        "c2",
        "What is a closure in JavaScript?",
        "A function that has access to its own scope, the outer function's scope, and the global scope",
        "Closures are created every time a function is created, at function creation time.",
        None,
    ),
    (
        "c3",
        "What does the following code do?",
        "It creates a new array with each number doubled",
        "The map() method creates a new array populated with the results of calling a provided function on every element in the calling array.",
        Some("const numbers = [1, 2, 3, 4, 5];\nconst doubled = numbers.map(num => num * 2);"),
    ),
    (
        "c4",
        "What is the difference between '==' and '===' in JavaScript?",
        "'==' compares values, '===' compares values and types",
        "The '==' operator performs type coercion, while the '===' operator does not perform type coercion.",
        None,
    ),
    (
        "c5",
        "What is the time complexity of binary search?",
        "O(log n)",
        "Binary search is an efficient algorithm for finding an item from a sorted list of items. It works by repeatedly dividing in half the portion of the list that could contain the item.",
        None,
    ),
];

/// Provider for the compiled-in sample decks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl CardProvider for BuiltinProvider {
    fn fetch(&self, category: Category) -> Result<Vec<CardRecord>, SourceError> {
        let table = match category {
            Category::General => GENERAL,
            Category::Coding => CODING,
        };

        Ok(table
            .iter()
            .map(|&(id, question, answer, explanation, code)| CardRecord {
                id: Some(RawCardId::Text(id.to_string())),
                question: Some(question.to_string()),
                answer: Some(answer.to_string()),
                explanation: Some(explanation.to_string()),
                code: code.map(str::to_string),
                category: Some(category.as_str().to_string()),
                difficulty: None,
                tags: None,
            })
            .collect())
    }
}
