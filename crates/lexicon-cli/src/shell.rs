//! Interactive menu shell owning the session vocabulary.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use lexicon::quiz::{QuizConfig, run_quiz};
use lexicon::render::{RenderOptions, render};
use lexicon::store::is_valid_word;
use lexicon::{LexiconError, VocabStore, persist};

/// Session configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Vocabulary file used for load and save.
    pub file: PathBuf,
    /// Load the file when the session starts.
    pub autoload: bool,
    /// Save the store when the session ends.
    pub save_on_exit: bool,
    /// Quiz try budget per word.
    pub tries: usize,
    /// Entries shown in the short listing above the menu.
    pub short_listing: usize,
    /// Column width words are right-aligned into.
    pub word_width: usize,
    /// Extra detail on file operations.
    pub verbose: bool,
}

const MENU: &str = "\
Please make a choice:
1. Show the full vocabulary
2. Add a word
3. Remove a word
4. Run a quiz
5. Save vocabulary to file
6. Load vocabulary from file
7. Exit
";

/// The interactive session: owns the store and the I/O handles.
///
/// Generic over its input and output so tests can script whole sessions
/// with in-memory readers and writers.
pub struct Shell<R, W> {
    config: ShellConfig,
    store: VocabStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        Self {
            config,
            store: VocabStore::new(),
            input,
            output,
        }
    }

    /// The session vocabulary.
    pub fn store(&self) -> &VocabStore {
        &self.store
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// Recoverable problems (bad input, file errors, format errors) are
    /// reported and the loop continues; only an I/O failure on the
    /// interaction surface itself ends the session with an error.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            "Welcome to the lexicon vocabulary builder".cyan().bold()
        )?;

        if self.config.autoload {
            writeln!(self.output, "Autoload is on, loading...")?;
            self.load_store()?;
        }

        loop {
            let short = RenderOptions {
                limit: self.config.short_listing,
                word_width: self.config.word_width,
            };
            write!(self.output, "{}", render(&self.store, &short))?;
            writeln!(self.output, "----")?;
            write!(self.output, "{MENU}")?;

            // End of input behaves like Exit.
            let Some(choice) = self.prompt("Your choice: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.show_all()?,
                "2" => self.add_word()?,
                "3" => self.remove_word()?,
                "4" => self.quiz()?,
                "5" => self.save_store()?,
                "6" => self.load_store()?,
                "7" => break,
                _ => writeln!(self.output, "{}", "Please make a valid choice".red())?,
            }
            self.store.assert_invariants();
        }

        if self.config.save_on_exit {
            self.save_store()?;
        }
        writeln!(self.output, "Thank you for using the vocabulary builder")?;
        Ok(())
    }

    fn show_all(&mut self) -> io::Result<()> {
        let full = RenderOptions {
            limit: 0,
            word_width: self.config.word_width,
        };
        write!(self.output, "{}", render(&self.store, &full))?;
        writeln!(self.output)?;
        self.prompt("Press ENTER to return to the menu")?;
        writeln!(self.output)
    }

    /// Add a word, re-prompting until the word is alphabetic and not yet
    /// present. Duplicates are rejected, never overwritten.
    fn add_word(&mut self) -> io::Result<()> {
        let word = loop {
            let Some(entered) = self.prompt("New word to add: ")? else {
                return Ok(());
            };
            if !is_valid_word(&entered) {
                writeln!(self.output, "{}", "Please use letters only".red())?;
                continue;
            }
            let word = entered.to_lowercase();
            if self.store.contains(&word) {
                writeln!(
                    self.output,
                    "{}",
                    "Word is already in the vocabulary".yellow()
                )?;
                continue;
            }
            break word;
        };

        let message = format!("Enter a description for {word}: ");
        let Some(description) = self.prompt(&message)? else {
            return Ok(());
        };
        if let Err(e) = self.store.add(word, description) {
            writeln!(self.output, "{} {e}", "Error:".red())?;
        }
        Ok(())
    }

    fn remove_word(&mut self) -> io::Result<()> {
        let word = loop {
            let Some(entered) = self.prompt("Word to remove: ")? else {
                return Ok(());
            };
            if is_valid_word(&entered) {
                break entered.to_lowercase();
            }
            writeln!(self.output, "{}", "Please use letters only".red())?;
        };

        match self.store.remove(&word) {
            Ok(_) => writeln!(self.output, "Removed {word}"),
            Err(_) => writeln!(self.output, "{}", "Word is not in the vocabulary".yellow()),
        }
    }

    fn quiz(&mut self) -> io::Result<()> {
        let num_words = loop {
            let Some(entered) = self.prompt("How many words to quiz: ")? else {
                return Ok(());
            };
            match entered.trim().parse::<usize>() {
                Ok(n) if n > 0 => break n,
                _ => writeln!(self.output, "{}", "Please enter a positive number".red())?,
            }
        };

        let config = QuizConfig {
            num_words,
            max_tries: self.config.tries,
        };
        let result = run_quiz(&self.store, &config, &mut self.input, &mut self.output)?;
        writeln!(
            self.output,
            "Quiz completed. You guessed {} of {} with a score of {}",
            result.words_guessed.to_string().green().bold(),
            result.words_attempted,
            result.score.to_string().cyan().bold(),
        )
    }

    fn save_store(&mut self) -> io::Result<()> {
        match persist::save(&self.config.file, &self.store) {
            Ok(()) => {
                writeln!(self.output, "{}", "Vocabulary saved to file".green())?;
                if self.config.verbose {
                    writeln!(
                        self.output,
                        "Wrote {} words to {}",
                        self.store.len(),
                        self.config.file.display()
                    )?;
                }
            }
            Err(e) => {
                writeln!(self.output, "{} {e}", "Could not save vocabulary:".red())?;
            }
        }
        Ok(())
    }

    /// Load the vocabulary file, replacing the session store.
    ///
    /// Any failure leaves the session with an empty store and a message
    /// naming the reason; a load is never partial.
    fn load_store(&mut self) -> io::Result<()> {
        self.store = match persist::load(&self.config.file) {
            Ok(store) => {
                writeln!(self.output, "{}", "Vocabulary loaded from file".green())?;
                if self.config.verbose {
                    writeln!(
                        self.output,
                        "Read {} words from {}",
                        store.len(),
                        self.config.file.display()
                    )?;
                }
                store
            }
            Err(e) => {
                let reason = match &e {
                    LexiconError::Io { .. } => "could not read file",
                    LexiconError::WrongFormat { .. } => "wrong file format",
                    LexiconError::DuplicateEntry { .. } => "duplicate words in file",
                    _ => "load failed",
                };
                writeln!(
                    self.output,
                    "{} {reason} ({e}); starting with an empty vocabulary",
                    "Load failed:".red()
                )?;
                VocabStore::new()
            }
        };
        Ok(())
    }

    /// Print a prompt and read one line, stripping the trailing newline.
    /// Returns `None` when input is exhausted.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn test_config(file: PathBuf) -> ShellConfig {
        ShellConfig {
            file,
            autoload: false,
            save_on_exit: false,
            tries: 7,
            short_listing: 5,
            word_width: 15,
            verbose: false,
        }
    }

    /// Run a scripted session and return the final store and transcript.
    fn run_session(config: ShellConfig, script: &str) -> (VocabStore, String) {
        colored::control::set_override(false);

        let mut output = Vec::new();
        let mut shell = Shell::new(config, Cursor::new(script.to_string()), &mut output);
        shell.run().expect("session failed");
        let store = shell.store().clone();
        drop(shell);

        (store, String::from_utf8(output).unwrap())
    }

    fn throwaway_path() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("voc.txt");
        (dir, path)
    }

    #[test]
    fn add_word_then_exit() {
        let (_dir, path) = throwaway_path();
        let script = "2\ncat\nVery good home tiger\n7\n";
        let (store, _) = run_session(test_config(path), script);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("cat"), Some("Very good home tiger"));
    }

    #[test]
    fn add_rejects_non_alphabetic_and_duplicate_words() {
        let (_dir, path) = throwaway_path();
        // c4t is rejected, CAT collides with cat, dog finally goes in.
        let script = "2\ncat\na feline\n2\nc4t\nCAT\ndog\na canine\n7\n";
        let (store, text) = run_session(test_config(path), script);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("cat"), Some("a feline"));
        assert_eq!(store.get("dog"), Some("a canine"));
        assert!(text.contains("Please use letters only"));
        assert!(text.contains("Word is already in the vocabulary"));
    }

    #[test]
    fn remove_absent_word_reports_and_noops() {
        let (_dir, path) = throwaway_path();
        let script = "3\ncat\n7\n";
        let (store, text) = run_session(test_config(path), script);

        assert!(store.is_empty());
        assert!(text.contains("Word is not in the vocabulary"));
    }

    #[test]
    fn remove_deletes_present_word() {
        let (_dir, path) = throwaway_path();
        let script = "2\ncat\na feline\n3\nCat\n7\n";
        let (store, text) = run_session(test_config(path), script);

        assert!(store.is_empty());
        assert!(text.contains("Removed cat"));
    }

    #[test]
    fn invalid_menu_choice_reprompts() {
        let (_dir, path) = throwaway_path();
        let script = "9\n7\n";
        let (_, text) = run_session(test_config(path), script);

        assert!(text.contains("Please make a valid choice"));
        assert!(text.contains("Thank you for using the vocabulary builder"));
    }

    #[test]
    fn end_of_input_behaves_like_exit() {
        let (_dir, path) = throwaway_path();
        let (_, text) = run_session(test_config(path), "");

        assert!(text.contains("Thank you for using the vocabulary builder"));
    }

    #[test]
    fn quiz_reprompts_until_positive_count() {
        let (_dir, path) = throwaway_path();
        // One word in the store, so a 1-word quiz is deterministic.
        let script = "2\ncat\na feline\n4\n0\nx\n1\ncat\n7\n";
        let (_, text) = run_session(test_config(path), script);

        assert!(text.contains("Please enter a positive number"));
        assert!(text.contains("Quiz completed. You guessed 1 of 1 with a score of 7"));
    }

    #[test]
    fn save_then_autoload_round_trips() {
        let (_dir, path) = throwaway_path();

        let script = "2\ncat\na feline\n5\n7\n";
        let (_, text) = run_session(test_config(path.clone()), script);
        assert!(text.contains("Vocabulary saved to file"));

        let mut config = test_config(path);
        config.autoload = true;
        let (store, text) = run_session(config, "7\n");

        assert!(text.contains("Vocabulary loaded from file"));
        assert_eq!(store.get("cat"), Some("a feline"));
    }

    #[test]
    fn save_on_exit_persists_without_menu_save() {
        let (_dir, path) = throwaway_path();

        let mut config = test_config(path.clone());
        config.save_on_exit = true;
        run_session(config, "2\ncat\na feline\n7\n");

        let loaded = lexicon::persist::load(&path).unwrap();
        assert_eq!(loaded.get("cat"), Some("a feline"));
    }

    #[test]
    fn autoload_failure_reports_and_starts_empty() {
        let (_dir, path) = throwaway_path();

        let mut config = test_config(path);
        config.autoload = true;
        let (store, text) = run_session(config, "7\n");

        assert!(store.is_empty());
        assert!(text.contains("could not read file"));
        assert!(text.contains("starting with an empty vocabulary"));
    }

    #[test]
    fn menu_load_replaces_store_with_empty_on_format_error() {
        let (_dir, path) = throwaway_path();
        std::fs::write(&path, "not a vocabulary line\n").unwrap();

        let script = "2\ncat\na feline\n6\n7\n";
        let (store, text) = run_session(test_config(path), script);

        assert!(store.is_empty());
        assert!(text.contains("wrong file format"));
    }

    #[test]
    fn menu_load_reports_duplicates() {
        let (_dir, path) = throwaway_path();
        std::fs::write(&path, "cat,one\ncat,two\n").unwrap();

        let (store, text) = run_session(test_config(path), "6\n7\n");

        assert!(store.is_empty());
        assert!(text.contains("duplicate words in file"));
    }

    #[test]
    fn short_listing_appears_above_menu() {
        let (_dir, path) = throwaway_path();
        let (_, text) = run_session(test_config(path), "7\n");

        assert!(text.contains("The vocabulary contains 0 words:"));
        assert!(text.contains("Please make a choice:"));
    }
}
