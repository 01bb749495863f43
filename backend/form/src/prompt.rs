use std::io::{self, BufRead, ErrorKind, Write};

use payloads::{IMPORTANT_COUNT, INTERESTING_COUNT};
use thiserror::Error;

use crate::{
    field::{FieldError, validate, wrap_rows},
    questions::{FieldId, QUESTIONS},
    state::{FeedbackForm, FormError},
};

/// Indent of answer rows under a question.
const INDENT: &str = "    ";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Question {question} takes at most {max} answers, got {given}")]
    TooMany {
        question: usize,
        max: usize,
        given: usize,
    },

    #[error("{} answer(s) are invalid", .0.len())]
    Invalid(Vec<(FieldId, FieldError)>),

    #[error(transparent)]
    Form(#[from] FormError),
}

/// Puts answers given up front into the form.
///
/// Returns the inputs still left to ask for, in form order. Nothing is kept when any answer is
/// rejected.
pub fn apply_answers(
    form: &mut FeedbackForm,
    important: Vec<String>,
    interesting: Vec<String>,
    difficult: Option<String>,
) -> Result<Vec<FieldId>, AnswerError> {
    for (question, max, given) in [
        (1, IMPORTANT_COUNT, important.len()),
        (2, INTERESTING_COUNT, interesting.len()),
    ] {
        if given > max {
            return Err(AnswerError::TooMany {
                question,
                max,
                given,
            });
        }
    }

    let answers: Vec<(FieldId, String)> = important
        .into_iter()
        .enumerate()
        .map(|(index, text)| (FieldId::Important(index), text))
        .chain(
            interesting
                .into_iter()
                .enumerate()
                .map(|(index, text)| (FieldId::Interesting(index), text)),
        )
        .chain(difficult.map(|text| (FieldId::Difficult, text)))
        .collect();

    let invalid: Vec<(FieldId, FieldError)> = answers
        .iter()
        .filter_map(|(id, text)| validate(text).err().map(|error| (*id, error)))
        .collect();

    if !invalid.is_empty() {
        return Err(AnswerError::Invalid(invalid));
    }

    let given: Vec<FieldId> = answers.iter().map(|(id, _)| *id).collect();

    for (id, text) in answers {
        form.set(id, text)?;
    }

    Ok(FieldId::all().filter(|id| !given.contains(id)).collect())
}

/// Asks for every input in `missing`, question by question, until each answer validates.
///
/// Accepted answers longer than a row are echoed back wrapped to `width` columns.
/// Input ends on EOF, which is reported as [`ErrorKind::UnexpectedEof`].
pub fn fill_missing<R, W>(
    form: &mut FeedbackForm,
    missing: &[FieldId],
    width: usize,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for question in &QUESTIONS {
        let pending: Vec<FieldId> = question
            .fields()
            .filter(|id| missing.contains(id))
            .collect();

        if pending.is_empty() {
            continue;
        }

        writeln!(output, "{}. {}", question.number, question.prompt)?;

        for id in pending {
            let answer = ask(id, width, input, output)?;
            form.set(id, answer)
                .map_err(|e| io::Error::new(ErrorKind::InvalidInput, e))?;
        }
    }

    Ok(())
}

fn ask<R, W>(id: FieldId, width: usize, input: &mut R, output: &mut W) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "  {}: ", id.placeholder())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                "input closed before the form was complete",
            ));
        }

        let answer = line.trim_end_matches(['\r', '\n']).to_string();

        match validate(&answer) {
            Ok(()) => {
                let rows = wrap_rows(&answer, width.saturating_sub(INDENT.len()));
                if rows.len() > 1 {
                    for row in rows {
                        writeln!(output, "{INDENT}{row}")?;
                    }
                }

                return Ok(answer);
            }
            Err(e) => writeln!(output, "  {e}")?,
        }
    }
}
