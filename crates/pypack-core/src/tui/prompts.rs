//! Interactive prompt helpers built on cliclack

use anyhow::Result;

/// Default for a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNoDefault {
    Yes,
    No,
    /// No default; the user has to answer.
    Required,
}

impl YesNoDefault {
    fn hint(self) -> &'static str {
        match self {
            YesNoDefault::Yes => "Y/n",
            YesNoDefault::No => "y/N",
            YesNoDefault::Required => "y/n",
        }
    }
}

/// Decide what a yes/no answer means. Empty input resolves to the default
/// when one exists; anything not starting with y or n means ask again
/// (None).
fn parse_yes_no(answer: &str, default: YesNoDefault) -> Option<bool> {
    let answer = answer.trim();

    if answer.is_empty() {
        return match default {
            YesNoDefault::Yes => Some(true),
            YesNoDefault::No => Some(false),
            YesNoDefault::Required => None,
        };
    }

    match answer.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => Some(true),
        Some('n') => Some(false),
        _ => None,
    }
}

/// Ask for one line of text, whitespace-trimmed. Empty input returns
/// `default`; without a default the prompt repeats until something
/// non-blank is entered.
pub fn prompt(message: &str, default: Option<&str>) -> Result<String> {
    let mut input = cliclack::input(message);

    match default {
        // An empty default still counts as a default: empty input is a
        // valid answer meaning "empty value".
        Some("") => {
            input = input.required(false);
        }
        Some(default) => {
            input = input.default_input(default).placeholder(default);
        }
        None => {
            input = input.validate(|answer: &String| {
                if answer.trim().is_empty() {
                    Err("A value is required")
                } else {
                    Ok(())
                }
            });
        }
    }

    let answer: String = input.interact()?;
    Ok(answer.trim().to_string())
}

/// Ask a yes/no question. Any answer starting with y or n (either case)
/// decides; everything else re-asks.
pub fn yes_or_no(message: &str, default: YesNoDefault) -> Result<bool> {
    // Explicit loop rather than recursion; a stubborn answer must not grow
    // the stack.
    loop {
        let answer: String = cliclack::input(message)
            .placeholder(default.hint())
            .required(false)
            .interact()?;

        match parse_yes_no(&answer, default) {
            Some(value) => return Ok(value),
            None => cliclack::log::warning("Please answer y or n")?,
        }
    }
}
