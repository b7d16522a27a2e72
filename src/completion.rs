use crate::parser::VERBS;
use once_cell::sync::Lazy;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Verb table sorted for completion display.
static SORTED_VERBS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut verbs = VERBS.to_vec();
    verbs.sort_unstable();
    verbs
});

/// Tab completion for the command vocabulary.
#[derive(Clone)]
pub struct VerbCompleter;

impl Completer for VerbCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];
        let parts: Vec<&str> = input.split_whitespace().collect();

        // Only complete the first word (the verb)
        if parts.len() <= 1 && !input.ends_with(' ') {
            let prefix = parts.first().copied().unwrap_or("");
            let mut candidates: Vec<Pair> = SORTED_VERBS
                .iter()
                .filter(|verb| verb.starts_with(prefix))
                .map(|verb| Pair {
                    display: verb.to_string(),
                    replacement: verb.to_string(),
                })
                .collect();

            // If there's exactly one match, add a trailing space
            if candidates.len() == 1 {
                candidates[0].replacement.push(' ');
            }

            Ok((pos - prefix.len(), candidates))
        } else {
            Ok((pos, vec![]))
        }
    }
}

impl Hinter for VerbCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for VerbCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> std::borrow::Cow<'l, str> {
        std::borrow::Cow::Borrowed(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> std::borrow::Cow<'b, str> {
        std::borrow::Cow::Borrowed(prompt)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Borrowed(hint)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: CmdKind) -> bool {
        false
    }
}

impl Validator for VerbCompleter {}

impl Helper for VerbCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_verbs_cover_the_vocabulary() {
        assert_eq!(SORTED_VERBS.len(), VERBS.len());
        assert!(SORTED_VERBS.windows(2).all(|w| w[0] < w[1]));
        assert!(SORTED_VERBS.contains(&"decompress"));
    }
}
