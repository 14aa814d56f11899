//! Token table for the modl modeling language.
//!
//! Every terminal the scanner can produce has a fixed numeric code that is
//! part of the front-end contract: a generated or hand-written parser that
//! consumes the token stream relies on exact numeric identity, so codes
//! never change across builds that claim compatibility.
//!
//! Code layout:
//! - `-2` and `0` and `256`/`257` are reserved sentinels (no lookahead,
//!   end of input, error recovery, invalid input),
//! - `1..=255` is reserved for single-character tokens, which carry their
//!   ASCII code,
//! - named terminals start at `258`.

use logos::Logos;

/// Terminal symbols of the modl grammar.
///
/// The scanner patterns live directly on the enum (keywords, operators,
/// literals); variants without a pattern are either sentinels or produced
/// by the scanner's symbol-table classification and never matched
/// lexically.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"#[^\n]*")]
#[repr(i32)]
pub enum TokenKind {
    // Sentinels. `Error` is reserved for a consuming parser's recovery;
    // the scanner itself reports invalid input as `Undefined`.
    Empty = -2,
    EndOfFile = 0,
    Error = 256,
    Undefined = 257,

    // Declaration keywords
    #[token("set")]
    DeclSet = 258,
    #[token("param")]
    DeclPar = 259,
    #[token("var")]
    DeclVar = 260,
    #[token("minimize")]
    DeclMin = 261,
    #[token("maximize")]
    DeclMax = 262,
    #[token("subto")]
    DeclSub = 263,
    #[token("sos")]
    DeclSos = 264,
    #[token("defnumb")]
    DefNumb = 265,
    #[token("defstrg")]
    DefStrg = 266,
    #[token("defbool")]
    DefBool = 267,
    #[token("defset")]
    DefSet = 268,
    #[token("print")]
    Print = 269,
    #[token("check")]
    Check = 270,

    // Variable domains
    #[token("binary")]
    Binary = 271,
    #[token("integer")]
    Integer = 272,
    #[token("real")]
    Real = 273,
    #[token("implicit")]
    Implicit = 274,

    // Statement structure
    #[token(":=")]
    Asgn = 275,
    #[token("do")]
    Do = 276,
    #[token("with")]
    #[token("|")]
    With = 277,
    #[token("in")]
    In = 278,
    #[token("to")]
    #[token("..")]
    To = 279,
    #[token("until")]
    Until = 280,
    #[token("by")]
    By = 281,
    #[token("forall")]
    Forall = 282,
    #[token("exists")]
    Exists = 283,
    #[token("priority")]
    Priority = 284,
    #[token("startval")]
    StartVal = 285,
    #[token("default")]
    Default = 286,

    // Comparison operators
    #[token("<=")]
    CmpLe = 287,
    #[token(">=")]
    CmpGe = 288,
    #[token("==")]
    CmpEq = 289,
    #[token("<")]
    CmpLt = 290,
    #[token(">")]
    CmpGt = 291,
    #[token("!=")]
    CmpNe = 292,

    #[token("infinity")]
    Infty = 293,

    // Boolean operators
    #[token("and")]
    And = 294,
    #[token("or")]
    Or = 295,
    #[token("xor")]
    Xor = 296,
    #[token("not")]
    Not = 297,

    // Quantified expressions
    #[token("sum")]
    Sum = 298,
    #[token("min")]
    Min = 299,
    #[token("max")]
    Max = 300,
    #[token("argmin")]
    ArgMin = 301,
    #[token("argmax")]
    ArgMax = 302,
    #[token("prod")]
    Prod = 303,

    // Conditionals
    #[token("if")]
    If = 304,
    #[token("then")]
    Then = 305,
    #[token("else")]
    Else = 306,
    #[token("end")]
    End = 307,

    // Set operators
    #[token("inter")]
    Inter = 308,
    #[token("union")]
    Union = 309,
    #[token("cross")]
    Cross = 310,
    #[token("symdiff")]
    SymDiff = 311,
    #[token("without")]
    #[token("\\")]
    Without = 312,
    #[token("proj")]
    Proj = 313,

    // Arithmetic operators
    #[token("mod")]
    Mod = 314,
    #[token("div")]
    Div = 315,
    #[token("^")]
    #[token("**")]
    Pow = 316,
    #[token("!")]
    Fac = 317,

    // Mathematical functions
    #[token("card")]
    Card = 318,
    #[token("round")]
    Round = 319,
    #[token("floor")]
    Floor = 320,
    #[token("ceil")]
    Ceil = 321,
    #[token("random")]
    Random = 322,
    #[token("ord")]
    Ord = 323,
    #[token("abs")]
    Abs = 324,
    #[token("sgn")]
    Sgn = 325,
    #[token("log")]
    Log = 326,
    #[token("ln")]
    Ln = 327,
    #[token("exp")]
    Exp = 328,
    #[token("sqrt")]
    Sqrt = 329,
    #[token("sin")]
    Sin = 330,
    #[token("cos")]
    Cos = 331,
    #[token("tan")]
    Tan = 332,
    #[token("asin")]
    Asin = 333,
    #[token("acos")]
    Acos = 334,
    #[token("atan")]
    Atan = 335,
    #[token("power")]
    Power = 336,
    #[token("sgnpow")]
    SgnPow = 337,

    // File input
    #[token("read")]
    Read = 338,
    #[token("as")]
    As = 339,
    #[token("skip")]
    Skip = 340,
    #[token("use")]
    Use = 341,
    #[token("comment")]
    Comment = 342,
    #[token("match")]
    Match = 343,

    // Set generation
    #[token("subsets")]
    Subsets = 344,
    #[token("indexset")]
    IndexSet = 345,
    #[token("powerset")]
    PowerSet = 346,

    // Variable expressions
    #[token("vif")]
    Vif = 347,
    #[token("vabs")]
    Vabs = 348,

    // SOS constraint types
    #[token("type1")]
    Type1 = 349,
    #[token("type2")]
    Type2 = 350,

    // String functions
    #[token("length")]
    Length = 351,
    #[token("substr")]
    Substr = 352,

    // Classified identifiers. Produced by the scanner after consulting
    // the symbol and define tables, never matched lexically.
    NumbSym = 353,
    StrgSym = 354,
    VarSym = 355,
    SetSym = 356,
    NumbDef = 357,
    StrgDef = 358,
    BoolDef = 359,
    SetDef = 360,
    DefName = 361,

    // Literals
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name = 362,
    #[regex(r#""[^"\n]*""#)]
    #[regex(r"'[^'\n]*'")]
    Strg = 363,
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Numb = 364,

    // Constraint attributes
    #[token("scale")]
    Scale = 365,
    #[token("separate")]
    Separate = 366,
    #[token("checkonly")]
    CheckOnly = 367,
    #[token("indicator")]
    Indicator = 368,
    #[token("qubo")]
    Qubo = 369,
    #[token("penalty1")]
    Penalty1 = 370,
    #[token("penalty2")]
    Penalty2 = 371,
    #[token("penalty3")]
    Penalty3 = 372,
    #[token("penalty4")]
    Penalty4 = 373,
    #[token("penalty5")]
    Penalty5 = 374,
    #[token("penalty6")]
    Penalty6 = 375,

    // Single-character tokens, identified by their ASCII code
    #[token("(")]
    LParen = 40,
    #[token(")")]
    RParen = 41,
    #[token("*")]
    Star = 42,
    #[token("+")]
    Plus = 43,
    #[token(",")]
    Comma = 44,
    #[token("-")]
    Minus = 45,
    #[token("/")]
    Slash = 47,
    #[token(":")]
    Colon = 58,
    #[token(";")]
    Semicolon = 59,
    #[token("[")]
    LBracket = 91,
    #[token("]")]
    RBracket = 93,
    #[token("{")]
    LBrace = 123,
    #[token("}")]
    RBrace = 125,
}

/// Coarse classification of token kinds, used for table dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Sentinel,
    Punct,
    Keyword,
    Operator,
    Function,
    Literal,
    Symbol,
    Definition,
}

impl TokenClass {
    pub fn label(&self) -> &'static str {
        match self {
            TokenClass::Sentinel => "sentinel",
            TokenClass::Punct => "punct",
            TokenClass::Keyword => "keyword",
            TokenClass::Operator => "operator",
            TokenClass::Function => "function",
            TokenClass::Literal => "literal",
            TokenClass::Symbol => "symbol",
            TokenClass::Definition => "definition",
        }
    }
}

impl TokenKind {
    /// Every defined token kind, sentinels included.
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::Empty,
        TokenKind::EndOfFile,
        TokenKind::Error,
        TokenKind::Undefined,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Star,
        TokenKind::Plus,
        TokenKind::Comma,
        TokenKind::Minus,
        TokenKind::Slash,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::DeclSet,
        TokenKind::DeclPar,
        TokenKind::DeclVar,
        TokenKind::DeclMin,
        TokenKind::DeclMax,
        TokenKind::DeclSub,
        TokenKind::DeclSos,
        TokenKind::DefNumb,
        TokenKind::DefStrg,
        TokenKind::DefBool,
        TokenKind::DefSet,
        TokenKind::Print,
        TokenKind::Check,
        TokenKind::Binary,
        TokenKind::Integer,
        TokenKind::Real,
        TokenKind::Implicit,
        TokenKind::Asgn,
        TokenKind::Do,
        TokenKind::With,
        TokenKind::In,
        TokenKind::To,
        TokenKind::Until,
        TokenKind::By,
        TokenKind::Forall,
        TokenKind::Exists,
        TokenKind::Priority,
        TokenKind::StartVal,
        TokenKind::Default,
        TokenKind::CmpLe,
        TokenKind::CmpGe,
        TokenKind::CmpEq,
        TokenKind::CmpLt,
        TokenKind::CmpGt,
        TokenKind::CmpNe,
        TokenKind::Infty,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Xor,
        TokenKind::Not,
        TokenKind::Sum,
        TokenKind::Min,
        TokenKind::Max,
        TokenKind::ArgMin,
        TokenKind::ArgMax,
        TokenKind::Prod,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::Else,
        TokenKind::End,
        TokenKind::Inter,
        TokenKind::Union,
        TokenKind::Cross,
        TokenKind::SymDiff,
        TokenKind::Without,
        TokenKind::Proj,
        TokenKind::Mod,
        TokenKind::Div,
        TokenKind::Pow,
        TokenKind::Fac,
        TokenKind::Card,
        TokenKind::Round,
        TokenKind::Floor,
        TokenKind::Ceil,
        TokenKind::Random,
        TokenKind::Ord,
        TokenKind::Abs,
        TokenKind::Sgn,
        TokenKind::Log,
        TokenKind::Ln,
        TokenKind::Exp,
        TokenKind::Sqrt,
        TokenKind::Sin,
        TokenKind::Cos,
        TokenKind::Tan,
        TokenKind::Asin,
        TokenKind::Acos,
        TokenKind::Atan,
        TokenKind::Power,
        TokenKind::SgnPow,
        TokenKind::Read,
        TokenKind::As,
        TokenKind::Skip,
        TokenKind::Use,
        TokenKind::Comment,
        TokenKind::Match,
        TokenKind::Subsets,
        TokenKind::IndexSet,
        TokenKind::PowerSet,
        TokenKind::Vif,
        TokenKind::Vabs,
        TokenKind::Type1,
        TokenKind::Type2,
        TokenKind::Length,
        TokenKind::Substr,
        TokenKind::NumbSym,
        TokenKind::StrgSym,
        TokenKind::VarSym,
        TokenKind::SetSym,
        TokenKind::NumbDef,
        TokenKind::StrgDef,
        TokenKind::BoolDef,
        TokenKind::SetDef,
        TokenKind::DefName,
        TokenKind::Name,
        TokenKind::Strg,
        TokenKind::Numb,
        TokenKind::Scale,
        TokenKind::Separate,
        TokenKind::CheckOnly,
        TokenKind::Indicator,
        TokenKind::Qubo,
        TokenKind::Penalty1,
        TokenKind::Penalty2,
        TokenKind::Penalty3,
        TokenKind::Penalty4,
        TokenKind::Penalty5,
        TokenKind::Penalty6,
    ];

    /// The stable numeric code of this token kind.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a token kind by its numeric code.
    pub fn from_code(code: i32) -> Option<TokenKind> {
        TokenKind::ALL.iter().copied().find(|k| k.code() == code)
    }

    pub fn is_sentinel(self) -> bool {
        matches!(
            self,
            TokenKind::Empty | TokenKind::EndOfFile | TokenKind::Error | TokenKind::Undefined
        )
    }

    pub fn class(self) -> TokenClass {
        use TokenKind::*;
        match self {
            Empty | EndOfFile | Error | Undefined => TokenClass::Sentinel,
            LParen | RParen | Star | Plus | Comma | Minus | Slash | Colon | Semicolon
            | LBracket | RBracket | LBrace | RBrace => TokenClass::Punct,
            CmpLe | CmpGe | CmpEq | CmpLt | CmpGt | CmpNe | And | Or | Xor | Not | Inter
            | Union | Cross | SymDiff | Without | Proj | Mod | Div | Pow | Fac => {
                TokenClass::Operator
            }
            Card | Round | Floor | Ceil | Random | Ord | Abs | Sgn | Log | Ln | Exp | Sqrt
            | Sin | Cos | Tan | Asin | Acos | Atan | Power | SgnPow | Length | Substr | Sum
            | Min | Max | ArgMin | ArgMax | Prod => TokenClass::Function,
            Name | Strg | Numb | DefName => TokenClass::Literal,
            NumbSym | StrgSym | VarSym | SetSym => TokenClass::Symbol,
            NumbDef | StrgDef | BoolDef | SetDef => TokenClass::Definition,
            _ => TokenClass::Keyword,
        }
    }

    /// The stable terminal name, as a parser description would spell it.
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Empty => "EMPTY",
            EndOfFile => "EOF",
            Error => "ERROR",
            Undefined => "UNDEF",
            LParen => "LPAREN",
            RParen => "RPAREN",
            Star => "STAR",
            Plus => "PLUS",
            Comma => "COMMA",
            Minus => "MINUS",
            Slash => "SLASH",
            Colon => "COLON",
            Semicolon => "SEMICOLON",
            LBracket => "LBRACKET",
            RBracket => "RBRACKET",
            LBrace => "LBRACE",
            RBrace => "RBRACE",
            DeclSet => "DECLSET",
            DeclPar => "DECLPAR",
            DeclVar => "DECLVAR",
            DeclMin => "DECLMIN",
            DeclMax => "DECLMAX",
            DeclSub => "DECLSUB",
            DeclSos => "DECLSOS",
            DefNumb => "DEFNUMB",
            DefStrg => "DEFSTRG",
            DefBool => "DEFBOOL",
            DefSet => "DEFSET",
            Print => "PRINT",
            Check => "CHECK",
            Binary => "BINARY",
            Integer => "INTEGER",
            Real => "REAL",
            Implicit => "IMPLICIT",
            Asgn => "ASGN",
            Do => "DO",
            With => "WITH",
            In => "IN",
            To => "TO",
            Until => "UNTIL",
            By => "BY",
            Forall => "FORALL",
            Exists => "EXISTS",
            Priority => "PRIORITY",
            StartVal => "STARTVAL",
            Default => "DEFAULT",
            CmpLe => "CMP_LE",
            CmpGe => "CMP_GE",
            CmpEq => "CMP_EQ",
            CmpLt => "CMP_LT",
            CmpGt => "CMP_GT",
            CmpNe => "CMP_NE",
            Infty => "INFTY",
            And => "AND",
            Or => "OR",
            Xor => "XOR",
            Not => "NOT",
            Sum => "SUM",
            Min => "MIN",
            Max => "MAX",
            ArgMin => "ARGMIN",
            ArgMax => "ARGMAX",
            Prod => "PROD",
            If => "IF",
            Then => "THEN",
            Else => "ELSE",
            End => "END",
            Inter => "INTER",
            Union => "UNION",
            Cross => "CROSS",
            SymDiff => "SYMDIFF",
            Without => "WITHOUT",
            Proj => "PROJ",
            Mod => "MOD",
            Div => "DIV",
            Pow => "POW",
            Fac => "FAC",
            Card => "CARD",
            Round => "ROUND",
            Floor => "FLOOR",
            Ceil => "CEIL",
            Random => "RANDOM",
            Ord => "ORD",
            Abs => "ABS",
            Sgn => "SGN",
            Log => "LOG",
            Ln => "LN",
            Exp => "EXP",
            Sqrt => "SQRT",
            Sin => "SIN",
            Cos => "COS",
            Tan => "TAN",
            Asin => "ASIN",
            Acos => "ACOS",
            Atan => "ATAN",
            Power => "POWER",
            SgnPow => "SGNPOW",
            Read => "READ",
            As => "AS",
            Skip => "SKIP",
            Use => "USE",
            Comment => "COMMENT",
            Match => "MATCH",
            Subsets => "SUBSETS",
            IndexSet => "INDEXSET",
            PowerSet => "POWERSET",
            Vif => "VIF",
            Vabs => "VABS",
            Type1 => "TYPE1",
            Type2 => "TYPE2",
            Length => "LENGTH",
            Substr => "SUBSTR",
            NumbSym => "NUMBSYM",
            StrgSym => "STRGSYM",
            VarSym => "VARSYM",
            SetSym => "SETSYM",
            NumbDef => "NUMBDEF",
            StrgDef => "STRGDEF",
            BoolDef => "BOOLDEF",
            SetDef => "SETDEF",
            DefName => "DEFNAME",
            Name => "NAME",
            Strg => "STRG",
            Numb => "NUMB",
            Scale => "SCALE",
            Separate => "SEPARATE",
            CheckOnly => "CHECKONLY",
            Indicator => "INDICATOR",
            Qubo => "QUBO",
            Penalty1 => "PENALTY1",
            Penalty2 => "PENALTY2",
            Penalty3 => "PENALTY3",
            Penalty4 => "PENALTY4",
            Penalty5 => "PENALTY5",
            Penalty6 => "PENALTY6",
        }
    }
}
