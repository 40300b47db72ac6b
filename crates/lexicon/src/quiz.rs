//! Interactive recall quiz over the vocabulary.

use std::io::{self, BufRead, Write};

use crate::store::VocabStore;

/// Default guess attempts per quizzed word.
pub const DEFAULT_TRIES: usize = 7;

/// Configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// How many words to quiz (clamped to the store size).
    pub num_words: usize,
    /// Guess attempts allowed per word.
    pub max_tries: usize,
}

impl QuizConfig {
    /// Quiz `num_words` words with the default try budget.
    pub fn new(num_words: usize) -> Self {
        Self {
            num_words,
            max_tries: DEFAULT_TRIES,
        }
    }
}

/// Aggregate outcome of a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    /// Words actually quizzed (after clamping).
    pub words_attempted: usize,
    /// Words guessed within the try budget.
    pub words_guessed: usize,
    /// Sum over guessed words of the tries remaining at the correct guess,
    /// the successful try included.
    pub score: usize,
}

/// Run a quiz with a fresh random source.
pub fn run_quiz<R: BufRead, W: Write>(
    store: &VocabStore,
    config: &QuizConfig,
    input: &mut R,
    output: &mut W,
) -> io::Result<QuizResult> {
    let mut rng = fastrand::Rng::new();
    run_quiz_with_rng(store, config, input, output, &mut rng)
}

/// Run a quiz with a caller-supplied random source.
///
/// The word list is sorted before shuffling, so the quiz order is a pure
/// function of the RNG state. Selection is without replacement; the quiz
/// asks words in selection order.
pub fn run_quiz_with_rng<R: BufRead, W: Write>(
    store: &VocabStore,
    config: &QuizConfig,
    input: &mut R,
    output: &mut W,
    rng: &mut fastrand::Rng,
) -> io::Result<QuizResult> {
    let mut num_words = config.num_words;
    if num_words > store.len() {
        writeln!(
            output,
            "Only {} words available, quizzing all of them.",
            store.len()
        )?;
        num_words = store.len();
    }

    let mut words: Vec<&str> = store.words().collect();
    words.sort_unstable();
    rng.shuffle(&mut words);
    words.truncate(num_words);

    writeln!(output, "Time for a quiz!")?;

    let mut result = QuizResult {
        words_attempted: num_words,
        words_guessed: 0,
        score: 0,
    };

    for word in words {
        let description = store.get(word).unwrap_or_default();
        writeln!(output, "Guess the word with meaning: {description}")?;

        let mut guessed = false;
        for tries_left in (1..=config.max_tries).rev() {
            write!(output, "Your guess: ")?;
            output.flush()?;

            let guess = read_guess(input)?;
            if guess == word {
                writeln!(output, "Excellent, correct!")?;
                result.score += tries_left;
                result.words_guessed += 1;
                guessed = true;
                break;
            }
            writeln!(output, "No, try again...")?;
        }
        if !guessed {
            writeln!(output, "Out of tries! The word was: {word}")?;
        }
        writeln!(output)?;
    }

    Ok(result)
}

/// Read one guess line, stripping only the trailing newline.
///
/// The guess is otherwise compared raw: case-sensitive and untrimmed. End
/// of input reads as an empty (wrong) guess.
fn read_guess<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
