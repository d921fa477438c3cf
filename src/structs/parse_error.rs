use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    BlankReply,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BlankReply => {
                write!(f, "reply contains no text")
            }
        }
    }
}

impl std::error::Error for ParseError {}
