//! crates/bookhaven_core/src/seed.rs
//!
//! The built-in book list used to initialize the catalog when no persisted
//! state exists. Book ids are "1".."8"; seed review ids live in the
//! disjoint "101".."112" space so generated ids can never shadow them.

use crate::domain::{Book, Review};

fn review(id: &str, user_name: &str, rating: u8, comment: &str, date: &str) -> Review {
    Review {
        id: id.to_string(),
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    author: &str,
    year: &str,
    cover_url: &str,
    genre: &str,
    description: &str,
    reviews: Vec<Review>,
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        year: year.to_string(),
        cover_url: cover_url.to_string(),
        genre: genre.to_string(),
        description: description.to_string(),
        reviews,
    }
}

/// Returns the initial catalog, in display order.
pub fn initial_books() -> Vec<Book> {
    vec![
        book(
            "1",
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "1925",
            "https://m.media-amazon.com/images/I/71FTb9X6wsL._AC_UF1000,1000_QL80_.jpg",
            "Classic",
            "Set in the Jazz Age on Long Island, the novel depicts narrator Nick Carraway's \
             interactions with mysterious millionaire Jay Gatsby and Gatsby's obsession to \
             reunite with his former lover, Daisy Buchanan.",
            vec![
                review(
                    "101",
                    "Ayesha Khan",
                    5,
                    "A timeless classic that captures the essence of the Roaring Twenties.",
                    "2023-04-15",
                ),
                review(
                    "109",
                    "Nadia Hussain",
                    4,
                    "Beautiful prose, though Gatsby himself remains frustratingly out of reach.",
                    "2023-08-02",
                ),
            ],
        ),
        book(
            "2",
            "To Kill a Mockingbird",
            "Harper Lee",
            "1960",
            "https://m.media-amazon.com/images/I/81aY1lxk+9L._AC_UF1000,1000_QL80_.jpg",
            "Classic",
            "The story of a young girl confronting racial injustice in a small Southern town \
             during the Great Depression as she observes her father, a lawyer, defend a Black \
             man falsely accused of raping a white woman.",
            vec![review(
                "102",
                "Ahmed Raza",
                5,
                "One of the most impactful novels about social justice ever written.",
                "2023-05-20",
            )],
        ),
        book(
            "3",
            "1984",
            "George Orwell",
            "1949",
            "https://m.media-amazon.com/images/I/91SZSW8qSsL._AC_UF1000,1000_QL80_.jpg",
            "Dystopian",
            "A dystopian novel set in a totalitarian society where independent thinking is \
             persecuted and there is constant surveillance of citizens.",
            vec![
                review(
                    "103",
                    "Sana Malik",
                    4,
                    "Eerily prescient in many ways. A must-read for understanding modern \
                     surveillance issues.",
                    "2023-03-10",
                ),
                review(
                    "110",
                    "Imran Sheikh",
                    5,
                    "Newspeak alone makes this worth rereading every few years.",
                    "2023-07-22",
                ),
            ],
        ),
        book(
            "4",
            "The Hobbit",
            "J.R.R. Tolkien",
            "1937",
            "https://m.media-amazon.com/images/I/710+HcoP38L._AC_UF1000,1000_QL80_.jpg",
            "Fantasy",
            "Bilbo Baggins, a comfort-loving hobbit, is whisked away on an unexpected journey \
             by Gandalf the Grey and a company of dwarves seeking to reclaim their ancestral \
             home from the dragon Smaug.",
            vec![
                review(
                    "104",
                    "Bilal Ahmed",
                    5,
                    "The perfect gateway into fantasy literature. Tolkien's world-building is \
                     unmatched.",
                    "2023-01-05",
                ),
                review(
                    "111",
                    "Mariam Baig",
                    4,
                    "Read it aloud to my kids; the riddle chapter is still the best part.",
                    "2023-09-11",
                ),
            ],
        ),
        book(
            "5",
            "Artificial Intelligence: A Modern Approach",
            "Stuart Russell, Peter Norvig",
            "2020",
            "https://m.media-amazon.com/images/I/51-S9Z+w96L._SX440_BO1,204,203,200_.jpg",
            "Computer Science",
            "The leading textbook in Artificial Intelligence, used in over 1500 universities. \
             It provides a comprehensive overview of the field, from machine learning to \
             robotics, computer vision, and beyond.",
            vec![review(
                "105",
                "Fatima Ali",
                5,
                "The definitive AI textbook. Comprehensive, well-structured, and accessible to \
                 both beginners and experts.",
                "2023-06-12",
            )],
        ),
        book(
            "6",
            "Deep Learning",
            "Ian Goodfellow, Yoshua Bengio, Aaron Courville",
            "2016",
            "https://m.media-amazon.com/images/I/615uJgswMHL._SX258_BO1,204,203,200_.jpg",
            "Computer Science",
            "The first comprehensive textbook on deep learning, written by leading experts in \
             the field. It covers mathematical and conceptual background, deep learning \
             techniques, and research perspectives.",
            vec![
                review(
                    "106",
                    "Umar Farooq",
                    5,
                    "Essential reading for anyone serious about deep learning. The best balance \
                     of theory and practical insights available.",
                    "2023-07-18",
                ),
                review(
                    "112",
                    "Omar Javed",
                    4,
                    "Dense but rewarding. Keep a linear algebra reference within arm's reach.",
                    "2023-10-03",
                ),
            ],
        ),
        book(
            "7",
            "The Age of AI: And Our Human Future",
            "Henry Kissinger, Eric Schmidt, Daniel Huttenlocher",
            "2021",
            "https://m.media-amazon.com/images/I/71zRkpn+MYL._SY160.jpg",
            "Computer Science",
            "An essential roadmap to our present and our future, The Age of AI explores how AI \
             is challenging the very essence of what it means to be human, transforming our \
             societies, our politics, and our economies.",
            vec![review(
                "107",
                "Zara Siddiqui",
                4,
                "A thoughtful analysis of AI's societal implications, written from a policy and \
                 strategic perspective rather than a technical one.",
                "2023-09-02",
            )],
        ),
        book(
            "8",
            "Human Compatible: Artificial Intelligence and the Problem of Control",
            "Stuart Russell",
            "2019",
            "https://m.media-amazon.com/images/I/71cSl7jGZ9L._SY160.jpg",
            "Computer Science",
            "In the popular imagination, AI systems are racing toward superintelligence, humans \
             will be overtaken, and a sci-fi dystopia will follow. Russell argues that this \
             scenario can be avoided and outlines a path to a more harmonious future.",
            vec![review(
                "108",
                "Hassan Qureshi",
                5,
                "A profound book that tackles the existential questions of AI with clarity and \
                 depth. Essential reading for understanding AI safety.",
                "2023-05-14",
            )],
        ),
    ]
}
