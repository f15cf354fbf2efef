use rustyline::Editor;
use rustyline::error::ReadlineError;

use crate::util::errors::InputError;


pub struct InteractiveShell {
    prompt: String,
    editor: Editor<()>,
}

impl InteractiveShell {
    pub fn new(prompt: Option<&str>) -> InteractiveShell {
        let default_prompt = ">>> ";
        return InteractiveShell {
            prompt: String::from( match prompt { Some(x) => x, None => default_prompt } ),
            editor: Editor::<()>::new(),
        }
    }

    pub fn empty_line(&self) {
        println!();
    }

    pub fn output(&self, output: &str) {
        println!("{}", output);
    }

    // None means the session ended (EOF or interrupt).
    pub fn input(&mut self, prompt: &str) -> Option<String> {
        return match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = String::from(line.trim());
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(&trimmed);
                }
                Some(trimmed)
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(_) => None,
        }
    }

    pub fn get_command(&mut self) -> Result<Option<Vec<String>>, InputError> {
        let prompt = self.prompt.clone();
        return match self.input(&prompt) {
            None => Ok(None),
            Some(line) => match shell_words::split(&line) {
                Ok(words) => Ok(Some(words)),
                Err(e) => Err(InputError::new(&e.to_string())),
            }
        }
    }
}
