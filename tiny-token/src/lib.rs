use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

/// Longest lexeme the scanner accepts. Longer identifier or digit runs are
/// rejected instead of being truncated.
pub const MAX_LEXEME_LEN: usize = 63;

/// Lexeme of the synthesized end-of-input token.
pub const EOF_LEXEME: &str = "EOF";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyWords {
    Program,
    Begin,
    End,
    If,
    Else,
    ElseIf,
    While,
    Do,
    For,
    Function,
    Int,
    Float,
    Char,
    Void,
}

impl KeyWords {
    const ALL: &'static [KeyWords] = &[
        KeyWords::Program,
        KeyWords::Begin,
        KeyWords::End,
        KeyWords::If,
        KeyWords::Else,
        KeyWords::ElseIf,
        KeyWords::While,
        KeyWords::Do,
        KeyWords::For,
        KeyWords::Function,
        KeyWords::Int,
        KeyWords::Float,
        KeyWords::Char,
        KeyWords::Void,
    ];

    pub fn spelling(&self) -> &'static str {
        match self {
            KeyWords::Program => "PROGRAM",
            KeyWords::Begin => "BEGIN",
            KeyWords::End => "END",
            KeyWords::If => "if",
            KeyWords::Else => "else",
            KeyWords::ElseIf => "elseif",
            KeyWords::While => "while",
            KeyWords::Do => "do",
            KeyWords::For => "for",
            KeyWords::Function => "function",
            KeyWords::Int => "int",
            KeyWords::Float => "float",
            KeyWords::Char => "char",
            KeyWords::Void => "void",
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(
            self,
            KeyWords::Int | KeyWords::Float | KeyWords::Char | KeyWords::Void
        )
    }

    /// Whether the scanner reserves this spelling. `elseif` is part of the
    /// token contract but is still scanned as an identifier.
    pub fn is_reserved(&self) -> bool {
        *self != KeyWords::ElseIf
    }

    /// Exact, case-sensitive lookup over the reserved words.
    pub fn from_spelling(s: &str) -> Option<KeyWords> {
        KeyWords::ALL
            .iter()
            .copied()
            .filter(KeyWords::is_reserved)
            .find(|k| k.spelling() == s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operators {
    Assign,
    Add,
    Minus,
    Mul,
    Division,
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Equal,
    NotEqual,
    And,
    Or,
    Not,
}

impl Operators {
    const ALL: &'static [Operators] = &[
        Operators::Assign,
        Operators::Add,
        Operators::Minus,
        Operators::Mul,
        Operators::Division,
        Operators::Greater,
        Operators::Less,
        Operators::GreaterEqual,
        Operators::LessEqual,
        Operators::Equal,
        Operators::NotEqual,
        Operators::And,
        Operators::Or,
        Operators::Not,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operators::Assign => "=",
            Operators::Add => "+",
            Operators::Minus => "-",
            Operators::Mul => "*",
            Operators::Division => "/",
            Operators::Greater => ">",
            Operators::Less => "<",
            Operators::GreaterEqual => ">=",
            Operators::LessEqual => "<=",
            Operators::Equal => "==",
            Operators::NotEqual => "!=",
            Operators::And => "&&",
            Operators::Or => "||",
            Operators::Not => "!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Brackets {
    LeftParenthesis,
    RightParenthesis,
    LeftCurlyBracket,
    RightCurlyBracket,
}

impl Brackets {
    const ALL: &'static [Brackets] = &[
        Brackets::LeftParenthesis,
        Brackets::RightParenthesis,
        Brackets::LeftCurlyBracket,
        Brackets::RightCurlyBracket,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Brackets::LeftParenthesis => "(",
            Brackets::RightParenthesis => ")",
            Brackets::LeftCurlyBracket => "{",
            Brackets::RightCurlyBracket => "}",
        }
    }
}

/// Lexical category of a token. This is the contract shared with the parser:
/// `KeyWords::ElseIf`, `Operators::Greater`, `Operators::Less`,
/// `Operators::Not` and `TokenType::Error` are part of it even though the
/// scanner does not currently produce them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    KeyWord(KeyWords),
    Identifier,
    Number,
    Operator(Operators),
    Bracket(Brackets),
    Semicolon,
    Comma,
    Colon,
    Quote,
    Newline,
    Eof,
    Unknown,
    Error,
}

impl TokenType {
    /// Token type produced for a single character, if the character is in the
    /// one-character table. Two-character operators are not covered here.
    pub fn from_single_char(ch: u8) -> Option<TokenType> {
        let kind = match ch {
            b'=' => TokenType::Operator(Operators::Assign),
            b'+' => TokenType::Operator(Operators::Add),
            b'-' => TokenType::Operator(Operators::Minus),
            b'*' => TokenType::Operator(Operators::Mul),
            b'/' => TokenType::Operator(Operators::Division),
            b'(' => TokenType::Bracket(Brackets::LeftParenthesis),
            b')' => TokenType::Bracket(Brackets::RightParenthesis),
            b'{' => TokenType::Bracket(Brackets::LeftCurlyBracket),
            b'}' => TokenType::Bracket(Brackets::RightCurlyBracket),
            b';' => TokenType::Semicolon,
            b',' => TokenType::Comma,
            b':' => TokenType::Colon,
            b'"' => TokenType::Quote,
            b'\n' => TokenType::Newline,
            _ => return None,
        };

        Some(kind)
    }

    /// Token type for a recognized two-character operator.
    pub fn from_char_pair(first: u8, second: u8) -> Option<TokenType> {
        let op = match (first, second) {
            (b'&', b'&') => Operators::And,
            (b'|', b'|') => Operators::Or,
            (b'=', b'=') => Operators::Equal,
            (b'!', b'=') => Operators::NotEqual,
            (b'>', b'=') => Operators::GreaterEqual,
            (b'<', b'=') => Operators::LessEqual,
            _ => return None,
        };

        Some(TokenType::Operator(op))
    }

    fn all() -> impl Iterator<Item = TokenType> {
        let keywords = KeyWords::ALL.iter().map(|&k| TokenType::KeyWord(k));
        let operators = Operators::ALL.iter().map(|&o| TokenType::Operator(o));
        let brackets = Brackets::ALL.iter().map(|&b| TokenType::Bracket(b));
        let rest = [
            TokenType::Identifier,
            TokenType::Number,
            TokenType::Semicolon,
            TokenType::Comma,
            TokenType::Colon,
            TokenType::Quote,
            TokenType::Newline,
            TokenType::Eof,
            TokenType::Unknown,
            TokenType::Error,
        ];

        keywords.chain(operators).chain(brackets).chain(rest)
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TokenType::KeyWord(k) => write!(f, "{}", k.spelling()),
            TokenType::Identifier => write!(f, "identifier"),
            TokenType::Number => write!(f, "number"),
            TokenType::Operator(o) => write!(f, "{}", o.symbol()),
            TokenType::Bracket(b) => write!(f, "{}", b.symbol()),
            TokenType::Semicolon => write!(f, ";"),
            TokenType::Comma => write!(f, ","),
            TokenType::Colon => write!(f, ":"),
            TokenType::Quote => write!(f, "quote"),
            TokenType::Newline => write!(f, "newline"),
            TokenType::Eof => write!(f, "{}", EOF_LEXEME),
            TokenType::Unknown => write!(f, "unknown"),
            TokenType::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTokenType(pub String);

impl Display for UnknownTokenType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "unknown token type name '{}'", self.0)
    }
}

impl std::error::Error for UnknownTokenType {}

/// Parses the names printed by `Display`, so `kind.to_string().parse()` gives
/// back `kind`.
impl FromStr for TokenType {
    type Err = UnknownTokenType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenType::all()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| UnknownTokenType(s.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenType, lexeme: &str) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_owned(),
        }
    }

    pub fn eof() -> Token {
        Token::new(TokenType::Eof, EOF_LEXEME)
    }

    pub fn ident(v: &str) -> Token {
        Token::new(TokenType::Identifier, v)
    }

    pub fn number(n: &str) -> Token {
        Token::new(TokenType::Number, n)
    }

    /// Keyword token for `k`, or an identifier if `k` is not reserved.
    pub fn key_word_or_ident(k: &str) -> Token {
        match KeyWords::from_spelling(k) {
            Some(key_word) => Token::new(TokenType::KeyWord(key_word), k),
            None => Token::ident(k),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::Eof
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.kind {
            TokenType::KeyWord(k) if k.is_type() => write!(f, "type:\t\t {:?}", k),
            TokenType::KeyWord(k) => write!(f, "keywords:\t {:?}", k),
            TokenType::Identifier => write!(f, "ident:\t\t {}", self.lexeme),
            TokenType::Number => write!(f, "number:\t\t {}", self.lexeme),
            TokenType::Operator(o) => write!(f, "operators:\t {:?}", o),
            TokenType::Bracket(b) => write!(f, "bracket:\t {:?}", b),
            TokenType::Newline => write!(f, "newline:\t '\\n'"),
            TokenType::Eof => write!(f, "eof:\t\t {}", self.lexeme),
            TokenType::Unknown => write!(f, "unknown:\t {:?}", self.lexeme),
            TokenType::Error => write!(f, "error:\t\t {:?}", self.lexeme),
            kind => write!(f, "punctuation:\t '{}'", kind),
        }
    }
}
