use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};

/// Line-oriented user input.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<String>;
}

pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{question}")?;
        stdout.flush()?;
        read_answer(&mut io::stdin().lock())
    }
}

fn read_answer(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line).context("Failed to read input")? == 0 {
        bail!("Input closed before an answer was given");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn ask_i64(prompt: &mut dyn Prompt, question: &str) -> Result<i64> {
    let answer = prompt.ask(question)?;
    answer
        .trim()
        .parse()
        .with_context(|| format!("Expected a whole number, got {answer:?}"))
}

/// Ask until the answer is not blank.
pub fn ask_text(prompt: &mut dyn Prompt, question: &str) -> Result<String> {
    loop {
        let answer = prompt.ask(question)?;
        let trimmed = answer.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}

#[cfg(test)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("no scripted answer for {question:?}"),
        }
    }
}
