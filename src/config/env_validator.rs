//! Environment variable validation
//!
//! An override that does not parse keeps the value from the settings file
//! and yields an `EnvWarning` naming the valid values, with a typo
//! suggestion when one is close enough.

use std::fmt;

/// An environment override that was not applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWarning {
    pub var: String,
    pub value: String,
    pub valid_values: Vec<String>,
    pub suggestion: Option<String>,
}

impl fmt::Display for EnvWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {} value '{}'", self.var, self.value)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, ". Did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, or describe why it was rejected.
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, EnvWarning>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| EnvWarning {
            var: self.var_name.to_string(),
            value: value.to_string(),
            valid_values: self.valid_values.iter().map(|v| v.to_string()).collect(),
            suggestion: self.suggest(value),
        })
    }

    fn suggest(&self, value: &str) -> Option<String> {
        let input = value.trim().to_lowercase();
        let mut best: Option<(&str, usize)> = None;

        for &valid in self.valid_values {
            let dist = levenshtein(&input, valid);
            match best {
                None => best = Some((valid, dist)),
                Some((_, best_dist)) if dist < best_dist => best = Some((valid, dist)),
                _ => {}
            }
        }

        match best {
            Some((suggested, dist)) if dist <= 2 && dist > 0 => Some(suggested.to_string()),
            _ => None,
        }
    }
}

/// Edit distance used for typo suggestions on keys and values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
