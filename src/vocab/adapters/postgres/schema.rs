//! Diesel schema for the vocabulary lookup table.

diesel::table! {
    /// Vocabulary lookup table searched by autocomplete.
    vocab_words (id) {
        /// Serial identifier.
        id -> Int4,
        /// The vocabulary word.
        word -> Text,
    }
}
