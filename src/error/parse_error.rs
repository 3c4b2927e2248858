#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the original input text.
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    EmptyInput,
    /// Found a character outside the accepted lexical set.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of what the parser was expecting.
        expected: String,
        /// A description of the token actually found.
        found:    String,
        /// Byte offset of the offending token.
        position: usize,
    },
    /// Reached the end of input while an expression was still incomplete.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched opening parenthesis.
        position: usize,
    },
    /// An identifier did not name a known function or constant.
    UnknownIdentifier {
        /// The unknown name as written.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// A function was called with the wrong number of arguments.
    WrongArgumentCount {
        /// The function name as written.
        name:     String,
        /// A description of the registered arity (e.g. `exactly 2`).
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
        /// Byte offset of the call.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// A description of the first extra token.
        found:    String,
        /// Byte offset of the first extra token.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Empty expression."),

            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at offset {position}.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Expected {expected} but found {found} at offset {position}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Expected closing parenthesis ')' for the parenthesis opened at offset {position}."),

            Self::UnknownIdentifier { name, position } => {
                write!(f, "Unknown function or constant '{name}' at offset {position}.")
            },

            Self::WrongArgumentCount { name,
                                       expected,
                                       found,
                                       position, } => write!(f,
                                                             "Function '{name}' at offset {position} takes {expected} argument(s), but {found} were supplied."),

            Self::TrailingTokens { found, position } => {
                write!(f, "Extra input after the expression: {found} at offset {position}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
