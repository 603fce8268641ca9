//! Argument schema for demo commands.
//!
//! Input is split on whitespace. Tokens starting with `--` or `-` (but not a
//! lone `-`) are flags; everything else is positional. A flag takes the next
//! token as its value unless that token looks like a flag itself:
//! long flags only stop at `--`-prefixed tokens, short flags stop at any
//! `-`-prefixed token. A flag with no value reads as `true`.
//!
//! When both spellings of a flag are given, the long one wins.

/// Flags understood by `card update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    /// `--column` / `-c`: move the card to another column
    Column,
    /// `--description` / `-d`: set the card description
    Description,
}

impl Flag {
    const ALL: [Flag; 2] = [Flag::Column, Flag::Description];

    pub fn long(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Description => "description",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Self::Column => "c",
            Self::Description => "d",
        }
    }

    fn from_long(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.long() == name)
    }

    fn from_short(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.short() == name)
    }
}

/// Value attached to a flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlagValue {
    Text(String),
    /// Flag given without a value
    Bare,
}

impl FlagValue {
    /// Text form; a bare flag reads as `"true"`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Bare => "true",
        }
    }
}

/// Tokenized command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Non-flag tokens in order, including the command word itself.
    pub positional: Vec<String>,
    flags: Vec<FlagEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct FlagEntry {
    flag: Flag,
    long: bool,
    value: FlagValue,
}

impl ParsedArgs {
    /// Tokenize a raw command line.
    ///
    /// Unknown flags are consumed (with their value) and dropped.
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mut args = Self::default();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i];
            let next = tokens.get(i + 1).copied();

            let (flag, long, takes_next) = if let Some(name) = token.strip_prefix("--") {
                (
                    Flag::from_long(name),
                    true,
                    next.is_some_and(|n| !n.starts_with("--")),
                )
            } else if token.len() > 1 && token.starts_with('-') {
                (
                    Flag::from_short(&token[1..]),
                    false,
                    next.is_some_and(|n| !n.starts_with('-')),
                )
            } else {
                args.positional.push(token.to_string());
                i += 1;
                continue;
            };

            let value = match next {
                Some(n) if takes_next => FlagValue::Text(n.to_string()),
                _ => FlagValue::Bare,
            };
            if let Some(flag) = flag {
                args.flags.push(FlagEntry { flag, long, value });
            }
            i += if takes_next { 2 } else { 1 };
        }

        args
    }

    /// Value of a flag. Any long-form value beats any short-form one;
    /// within one spelling the last occurrence wins.
    pub fn flag(&self, flag: Flag) -> Option<&FlagValue> {
        self.last_spelled(flag, true)
            .or_else(|| self.last_spelled(flag, false))
    }

    fn last_spelled(&self, flag: Flag, long: bool) -> Option<&FlagValue> {
        self.flags
            .iter()
            .rev()
            .find(|e| e.flag == flag && e.long == long)
            .map(|e| &e.value)
    }

    /// Positional token at `index`.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Positional tokens from `start` joined by single spaces.
    pub fn rest(&self, start: usize) -> String {
        self.positional
            .get(start..)
            .map(|words| words.join(" "))
            .unwrap_or_default()
    }
}

/// Parse a leading integer the way a lenient CLI does: optional sign, then
/// digits; anything after the digits is ignored. `"12abc"` is 12, `"abc"` is
/// `None`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, body) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    if end == 0 {
        return None;
    }
    body[..end].parse::<i64>().ok().map(|n| sign * n)
}
