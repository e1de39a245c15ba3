//! Seed data loaded into a fresh store at process start.

use super::Note;

/// Owner of every seeded note.
const SEED_USER_ID: i64 = 1;

/// The fixed collection a new process starts with.
pub fn seed_notes() -> Vec<Note> {
    [
        (
            1,
            "delectus aut autem",
            "Lorem ipsum dolor sit amet consectetur adipisicing elit. Ipsam, quam.",
        ),
        (
            2,
            "quis ut nam facilis et officia qui",
            "...Lorem ipsum dolor sit amet consectetur.",
        ),
        (
            3,
            "quis ut nam facilis et officia qui",
            "amet consectetur adipisicing elit. Ipsam, quam.",
        ),
        (4, "fugiat veniam minus", "Lorem ipsum dolor sit amet."),
    ]
    .into_iter()
    .map(|(id, title, body)| Note {
        user_id: Some(SEED_USER_ID),
        id,
        title: title.to_string(),
        body: Some(body.to_string()),
        completed: false,
    })
    .collect()
}
