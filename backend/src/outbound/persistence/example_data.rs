//! Bundled example catalog for local runs and demos.

use crate::domain::{Category, CategoryId, QuestionDraft};

/// The six stock categories, in store order.
pub fn example_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
        Category::new(4, "History"),
        Category::new(5, "Entertainment"),
        Category::new(6, "Sports"),
    ]
}

fn draft(text: &str, answer: &str, category: i64, difficulty: u8) -> QuestionDraft {
    QuestionDraft {
        text: text.to_owned(),
        answer: answer.to_owned(),
        category_id: CategoryId::new(category),
        difficulty,
    }
}

/// A dozen starter questions spread across the stock categories.
///
/// Categories are seeded before questions, so every draft here references an
/// existing category.
pub fn example_questions() -> Vec<QuestionDraft> {
    vec![
        draft(
            "What is the heaviest organ in the human body?",
            "The Liver",
            1,
            4,
        ),
        draft("Who discovered penicillin?", "Alexander Fleming", 1, 3),
        draft("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        draft(
            "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
            "Escher",
            2,
            1,
        ),
        draft("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        draft(
            "In which royal palace would you find the Hall of Mirrors?",
            "The Palace of Versailles",
            3,
            3,
        ),
        draft(
            "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "Maya Angelou",
            4,
            2,
        ),
        draft(
            "What boxer's original name is Cassius Clay?",
            "Muhammad Ali",
            4,
            1,
        ),
        draft("Who invented peanut butter?", "George Washington Carver", 4, 2),
        draft(
            "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
            "Apollo 13",
            5,
            4,
        ),
        draft(
            "What was the title of the 1990 fantasy directed by Tim Burton about a man with multi-bladed appendages?",
            "Edward Scissorhands",
            5,
            3,
        ),
        draft(
            "Which country won the first ever soccer World Cup in 1930?",
            "Uruguay",
            6,
            4,
        ),
    ]
}
