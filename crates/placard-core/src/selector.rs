use rand::Rng;

use crate::models::document::DocumentData;

/// Candidate document titles.
pub const TITLES: [&str; 3] = ["Random Title 1", "Random Title 2", "Random Title 3"];

/// Candidate document bodies.
pub const CONTENTS: [&str; 3] = [
    "This is some random content to be converted to PDF.",
    "Here is another set of random content for the PDF generation.",
    "Yet another random content example for PDF conversion.",
];

/// Pick a title and a body uniformly at random.
///
/// Uses the thread-local generator, which is seeded once from OS entropy,
/// so concurrent requests never share or re-derive a seed.
pub fn random_document() -> DocumentData {
    random_document_with(&mut rand::thread_rng())
}

/// Same as [`random_document`], drawing from the given generator.
///
/// Title and body are drawn independently.
pub fn random_document_with<R: Rng + ?Sized>(rng: &mut R) -> DocumentData {
    let title = TITLES[rng.gen_range(0..TITLES.len())];
    let content = CONTENTS[rng.gen_range(0..CONTENTS.len())];
    DocumentData::new(title, content)
}
