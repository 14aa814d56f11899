//! Scanner for the modl modeling language.
//!
//! Uses the `logos` crate for tokenization; the patterns live on
//! [`TokenKind`]. The wrapper attaches semantic payloads, classifies
//! plain names against the session's symbol and define tables, and turns
//! unrecognized input into `Undefined` tokens with diagnostics.

use logos::Logos;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::session::Session;
use crate::span::Span;
use crate::token::TokenKind;
use crate::value::{con_attr, SemanticValue};

/// A token with its kind, lexeme, optional payload and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub value: Option<SemanticValue>,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        value: Option<SemanticValue>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            value,
            span,
        }
    }
}

/// The attribute bit a constraint-attribute token carries.
fn attribute_bit(kind: TokenKind) -> Option<u32> {
    match kind {
        TokenKind::Scale => Some(con_attr::SCALE),
        TokenKind::Separate => Some(con_attr::SEPARATE),
        TokenKind::CheckOnly => Some(con_attr::CHECKONLY),
        TokenKind::Indicator => Some(con_attr::INDICATOR),
        TokenKind::Qubo => Some(con_attr::QUBO),
        TokenKind::Penalty1 => Some(con_attr::PENALTY1),
        TokenKind::Penalty2 => Some(con_attr::PENALTY2),
        TokenKind::Penalty3 => Some(con_attr::PENALTY3),
        TokenKind::Penalty4 => Some(con_attr::PENALTY4),
        TokenKind::Penalty5 => Some(con_attr::PENALTY5),
        TokenKind::Penalty6 => Some(con_attr::PENALTY6),
        _ => None,
    }
}

/// Scanner producing a [`Token`] stream from model source text.
pub struct Lexer<'a, 's> {
    source: &'a str,
    inner: logos::Lexer<'a, TokenKind>,
    session: &'s mut Session,
    file: String,
    diagnostics: Diagnostics,
    prev_kind: Option<TokenKind>,
    finished: bool,
}

impl<'a, 's> Lexer<'a, 's> {
    pub fn new(source: &'a str, file: impl Into<String>, session: &'s mut Session) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source),
            session,
            file: file.into(),
            diagnostics: Diagnostics::new(),
            prev_kind: None,
            finished: false,
        }
    }

    fn eof_token(&self) -> Token {
        let span = Span::from_range(self.source, self.source.len()..self.source.len());
        Token::new(TokenKind::EndOfFile, "", None, span)
    }

    /// Get the next token. After the end of input this keeps returning
    /// `EndOfFile`.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return self.eof_token();
        }

        let raw = match self.inner.next() {
            Some(raw) => raw,
            None => {
                self.finished = true;
                return self.eof_token();
            }
        };

        let text = self.inner.slice();
        let span = Span::from_range(self.source, self.inner.span());

        let (kind, value) = match raw {
            Err(()) => {
                self.diagnostics.push(
                    Diagnostic::error("L001", format!("unrecognized character `{}`", text))
                        .with_file(&self.file)
                        .with_span(span)
                        .build(),
                );
                (TokenKind::Undefined, None)
            }
            Ok(TokenKind::Numb) => match self.session.numbers.intern(text) {
                Ok(id) => (TokenKind::Numb, Some(SemanticValue::Numb(id))),
                Err(err) => {
                    self.diagnostics.push(
                        Diagnostic::error("L002", err.to_string())
                            .with_file(&self.file)
                            .with_span(span)
                            .build(),
                    );
                    (TokenKind::Undefined, None)
                }
            },
            Ok(TokenKind::Strg) => {
                let inner = &text[1..text.len() - 1];
                let id = self.session.strings.intern(inner);
                (TokenKind::Strg, Some(SemanticValue::Strg(id)))
            }
            Ok(TokenKind::Name) => self.classify_name(text),
            Ok(other) => match attribute_bit(other) {
                Some(bits) => (other, Some(SemanticValue::Bits(bits))),
                None => (other, None),
            },
        };

        self.prev_kind = Some(kind);
        Token::new(kind, text, value, span)
    }

    /// Resolve a plain name against the define and symbol tables.
    ///
    /// The name directly after a `defnumb`/`defstrg`/`defbool`/`defset`
    /// head is the name being defined and is never resolved.
    fn classify_name(&mut self, text: &str) -> (TokenKind, Option<SemanticValue>) {
        let id = self.session.strings.intern(text);
        if matches!(
            self.prev_kind,
            Some(
                TokenKind::DefNumb | TokenKind::DefStrg | TokenKind::DefBool | TokenKind::DefSet
            )
        ) {
            return (TokenKind::DefName, Some(SemanticValue::Name(id)));
        }
        if let Some(def) = self.session.defines.lookup(id) {
            let kind = self.session.defines.get(def).class.token_kind();
            return (kind, Some(SemanticValue::Define(def)));
        }
        if let Some(sym) = self.session.symbols.lookup(id) {
            let kind = self.session.symbols.get(sym).class.token_kind();
            return (kind, Some(SemanticValue::Symbol(sym)));
        }
        (TokenKind::Name, Some(SemanticValue::Name(id)))
    }

    /// Tokenize the entire input, ending with an `EndOfFile` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::EndOfFile;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Tokenize `source`, returning the stream and any diagnostics.
pub fn scan(source: &str, file: &str, session: &mut Session) -> (Vec<Token>, Diagnostics) {
    let mut lexer = Lexer::new(source, file, session);
    let tokens = lexer.tokenize();
    let diagnostics = lexer.into_diagnostics();
    (tokens, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{DefineClass, SymbolClass};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut session = Session::new();
        let (tokens, diagnostics) = scan(source, "test.modl", &mut session);
        assert!(!diagnostics.has_errors(), "unexpected diagnostics");
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn declaration_keywords() {
        assert_eq!(
            kinds("set param var minimize maximize subto sos"),
            vec![
                TokenKind::DeclSet,
                TokenKind::DeclPar,
                TokenKind::DeclVar,
                TokenKind::DeclMin,
                TokenKind::DeclMax,
                TokenKind::DeclSub,
                TokenKind::DeclSos,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn set_declaration_statement() {
        assert_eq!(
            kinds("set I := { 1 .. 5 };"),
            vec![
                TokenKind::DeclSet,
                TokenKind::Name,
                TokenKind::Asgn,
                TokenKind::LBrace,
                TokenKind::Numb,
                TokenKind::To,
                TokenKind::Numb,
                TokenKind::RBrace,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
        // the range dots also bind without spaces
        assert_eq!(
            kinds("1..5"),
            vec![
                TokenKind::Numb,
                TokenKind::To,
                TokenKind::Numb,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn comparison_operators() {
        assert_eq!(
            kinds("<= >= == < > !="),
            vec![
                TokenKind::CmpLe,
                TokenKind::CmpGe,
                TokenKind::CmpEq,
                TokenKind::CmpLt,
                TokenKind::CmpGt,
                TokenKind::CmpNe,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn operator_aliases() {
        assert_eq!(kinds("with")[0], TokenKind::With);
        assert_eq!(kinds("|")[0], TokenKind::With);
        assert_eq!(kinds("without")[0], TokenKind::Without);
        assert_eq!(kinds("\\")[0], TokenKind::Without);
        assert_eq!(kinds("^")[0], TokenKind::Pow);
        assert_eq!(kinds("**")[0], TokenKind::Pow);
        assert_eq!(kinds("to")[0], TokenKind::To);
        assert_eq!(kinds("..")[0], TokenKind::To);
        assert_eq!(kinds("!")[0], TokenKind::Fac);
    }

    #[test]
    fn keywords_do_not_swallow_identifiers() {
        assert_eq!(kinds("settings")[0], TokenKind::Name);
        assert_eq!(kinds("mine")[0], TokenKind::Name);
        assert_eq!(kinds("sets")[0], TokenKind::Name);
    }

    #[test]
    fn string_literal_payload_is_interned_without_quotes() {
        let mut session = Session::new();
        let (tokens, _) = scan("print \"hello\";", "test.modl", &mut session);
        assert_eq!(tokens[0].kind, TokenKind::Print);
        assert_eq!(tokens[1].kind, TokenKind::Strg);
        let id = tokens[1].value.unwrap().as_strg().unwrap();
        assert_eq!(session.strings.resolve(id), "hello");
    }

    #[test]
    fn numeric_literal_payload() {
        let mut session = Session::new();
        let (tokens, _) = scan("2.5e3", "test.modl", &mut session);
        let id = tokens[0].value.unwrap().as_numb().unwrap();
        assert_eq!(session.numbers.resolve(id).as_f64(), 2500.0);
        assert_eq!(session.numbers.resolve(id).text(), "2.5e3");
    }

    #[test]
    fn names_classify_against_symbol_table() {
        let mut session = Session::new();
        session.declare_symbol("I", SymbolClass::Set).unwrap();
        session.declare_symbol("x", SymbolClass::Var).unwrap();
        session.declare_symbol("cost", SymbolClass::Numb).unwrap();
        session.declare_symbol("label", SymbolClass::Strg).unwrap();

        let (tokens, _) = scan("I x cost label other", "test.modl", &mut session);
        assert_eq!(tokens[0].kind, TokenKind::SetSym);
        assert_eq!(tokens[1].kind, TokenKind::VarSym);
        assert_eq!(tokens[2].kind, TokenKind::NumbSym);
        assert_eq!(tokens[3].kind, TokenKind::StrgSym);
        assert_eq!(tokens[4].kind, TokenKind::Name);

        let sym = tokens[1].value.unwrap().as_symbol().unwrap();
        assert_eq!(session.symbols.get(sym).class, SymbolClass::Var);
    }

    #[test]
    fn names_classify_against_define_table() {
        let mut session = Session::new();
        session.declare_define("twice", DefineClass::Numb).unwrap();
        session.declare_define("isbig", DefineClass::Bool).unwrap();

        let (tokens, _) = scan("twice isbig", "test.modl", &mut session);
        assert_eq!(tokens[0].kind, TokenKind::NumbDef);
        assert_eq!(tokens[1].kind, TokenKind::BoolDef);
        let def = tokens[0].value.unwrap().as_define().unwrap();
        assert_eq!(session.defines.get(def).class, DefineClass::Numb);
    }

    #[test]
    fn define_head_introduces_a_def_name() {
        let mut session = Session::new();
        session.declare_define("twice", DefineClass::Numb).unwrap();

        // the name after the head is being defined, not resolved
        let (tokens, _) = scan("defnumb twice(a) := 2 * a;", "test.modl", &mut session);
        assert_eq!(tokens[0].kind, TokenKind::DefNumb);
        assert_eq!(tokens[1].kind, TokenKind::DefName);
        let id = tokens[1].value.unwrap().as_name().unwrap();
        assert_eq!(session.strings.resolve(id), "twice");
        assert_eq!(tokens[2].kind, TokenKind::LParen);
        assert_eq!(tokens[3].kind, TokenKind::Name);
        assert_eq!(tokens[4].kind, TokenKind::RParen);
        assert_eq!(tokens[5].kind, TokenKind::Asgn);
    }

    #[test]
    fn constraint_attributes_carry_bits() {
        let mut session = Session::new();
        let (tokens, _) = scan("scale separate checkonly penalty3", "test.modl", &mut session);
        assert_eq!(tokens[0].value.unwrap().as_bits(), Ok(con_attr::SCALE));
        assert_eq!(tokens[1].value.unwrap().as_bits(), Ok(con_attr::SEPARATE));
        assert_eq!(tokens[2].value.unwrap().as_bits(), Ok(con_attr::CHECKONLY));
        assert_eq!(tokens[3].value.unwrap().as_bits(), Ok(con_attr::PENALTY3));
    }

    #[test]
    fn unrecognized_input_scans_as_undefined() {
        let mut session = Session::new();
        let (tokens, diagnostics) = scan("var x $ y;", "test.modl", &mut session);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::DeclVar,
                TokenKind::Name,
                TokenKind::Undefined,
                TokenKind::Name,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
        assert!(diagnostics.has_errors());
        let error = diagnostics.errors().next().unwrap();
        assert_eq!(error.code, "L001");
        assert_eq!(error.span.start.column, 7);
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        assert_eq!(
            kinds("# model preamble\nset A; # trailing"),
            vec![
                TokenKind::DeclSet,
                TokenKind::Name,
                TokenKind::Semicolon,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn empty_input_yields_end_of_file() {
        let mut session = Session::new();
        let mut lexer = Lexer::new("", "test.modl", &mut session);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EndOfFile);
        // stays at end of input on repeated calls
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
    }

    #[test]
    fn objective_statement_kinds_and_codes() {
        let mut session = Session::new();
        session.declare_symbol("x", SymbolClass::Var).unwrap();
        let (tokens, _) = scan(
            "minimize obj: sum <i> in I: cost[i] * x;",
            "test.modl",
            &mut session,
        );
        assert_eq!(tokens[0].kind, TokenKind::DeclMin);
        assert_eq!(tokens[0].kind.code(), 261);
        assert_eq!(tokens[2].kind, TokenKind::Colon);
        assert_eq!(tokens[3].kind, TokenKind::Sum);
        assert_eq!(tokens[4].kind, TokenKind::CmpLt);
        assert_eq!(tokens[6].kind, TokenKind::CmpGt);
        let x = tokens.iter().find(|t| t.kind == TokenKind::VarSym).unwrap();
        assert!(x.value.unwrap().as_symbol().is_ok());
    }
}
