//! Converter behavior against a scripted parser.
//!
//! The fake parser returns canned tokens, so these tests pin down how the
//! rewriter consumes parser output independently of the built-in scanner.

use std::cell::Cell;
use std::collections::HashMap;

use serde_json::json;
use zbx_convert::{Converter64To70, ExpressionRewriter, ImportConverter};
use zbx_expression::{
    ExpressionParser, Parameter, ParameterKind, ParseError, ParseOptions, ParseResult, Token,
    TokenKind,
};

/// Parser answering from a table of expression -> tokens.
#[derive(Default)]
struct ScriptedParser {
    results: HashMap<String, ParseResult>,
    calls: Cell<usize>,
    last_options: Cell<Option<ParseOptions>>,
}

impl ScriptedParser {
    fn with(mut self, expression: &str, tokens: Vec<Token>) -> Self {
        self.results
            .insert(expression.to_string(), ParseResult { tokens });
        self
    }
}

impl ExpressionParser for ScriptedParser {
    fn parse(&self, text: &str, options: ParseOptions) -> Result<ParseResult, ParseError> {
        self.calls.set(self.calls.get() + 1);
        self.last_options.set(Some(options));
        self.results
            .get(text)
            .cloned()
            .ok_or_else(|| ParseError::new(0, "not scripted"))
    }
}

fn quoted(expression: &str, text: &str) -> Parameter {
    let pos = expression.find(text).expect("parameter text in expression");
    Parameter {
        kind: ParameterKind::Quoted,
        text: text.to_string(),
        pos,
        length: text.len(),
    }
}

fn hist(parameters: Vec<Parameter>) -> Token {
    Token {
        kind: TokenKind::HistFunction,
        text: String::new(),
        pos: 0,
        length: 0,
        name: Some("find".to_string()),
        parameters,
        children: Vec::new(),
    }
}

#[test]
fn test_every_parameter_rewritten_when_lengths_change() {
    // Each rewrite grows the string; offsets of later parameters must
    // still point at the text they were reported for.
    let expression = r#"f("\a",1,"\b\c","\d")"#;
    let parser = ScriptedParser::default().with(
        expression,
        vec![hist(vec![
            quoted(expression, r#""\a""#),
            quoted(expression, r#""\b\c""#),
            quoted(expression, r#""\d""#),
        ])],
    );

    let rewriter = ExpressionRewriter::new(&parser, ParseOptions::default());
    assert_eq!(
        rewriter.convert(expression),
        r#"f("\\a",1,"\\b\\c","\\d")"#
    );
}

#[test]
fn test_parameters_spread_over_tokens_in_reverse_order() {
    let expression = r#"g("\x")+h("\y")"#;
    let first = quoted(expression, r#""\x""#);
    let second = quoted(expression, r#""\y""#);
    // tokens reported last-first; the result must not depend on it
    let parser =
        ScriptedParser::default().with(expression, vec![hist(vec![second]), hist(vec![first])]);

    let rewriter = ExpressionRewriter::new(&parser, ParseOptions::default());
    assert_eq!(rewriter.convert(expression), r#"g("\\x")+h("\\y")"#);
}

#[test]
fn test_only_quoted_hist_parameters_qualify() {
    let expression = r#"f(\u,"\q")"#;
    let unquoted = Parameter {
        kind: ParameterKind::Unquoted,
        text: r"\u".to_string(),
        pos: 2,
        length: 2,
    };
    let mut math = hist(vec![quoted(expression, r#""\q""#)]);
    math.kind = TokenKind::MathFunction;

    let parser = ScriptedParser::default()
        .with(expression, vec![hist(vec![unquoted]), math]);
    let rewriter = ExpressionRewriter::new(&parser, ParseOptions::default());
    assert_eq!(rewriter.convert(expression), expression);
}

#[test]
fn test_parser_failure_keeps_text_and_sees_configured_options() {
    let parser = ScriptedParser::default();
    let options = ParseOptions {
        macros: true,
        no_backslash_escaping: true,
    };
    let rewriter = ExpressionRewriter::new(&parser, options);

    assert_eq!(rewriter.convert(r#"anything "\" goes"#), r#"anything "\" goes"#);
    assert_eq!(parser.calls.get(), 1);
    assert_eq!(parser.last_options.get(), Some(options));
}

#[test]
fn test_converter_uses_injected_parser_for_every_expression() {
    let expression = r#"f("\a")"#;
    let parser = ScriptedParser::default()
        .with(expression, vec![hist(vec![quoted(expression, r#""\a""#)])]);
    let converter = Converter64To70::new(&parser);

    let converted = converter
        .convert(json!({"zabbix_export": {
            "version": "6.4",
            "templates": [{
                "items": [{
                    "type": "CALCULATED",
                    "params": expression,
                    "triggers": [{
                        "expression": expression,
                        "recovery_expression": expression,
                        "description": "text",
                        "event_name": expression
                    }]
                }]
            }]
        }}))
        .unwrap();

    let item = &converted["zabbix_export"]["templates"][0]["items"][0];
    assert_eq!(item["params"], r#"f("\\a")"#);
    assert_eq!(item["triggers"][0]["expression"], r#"f("\\a")"#);
    assert_eq!(item["triggers"][0]["recovery_expression"], r#"f("\\a")"#);
    assert_eq!(item["triggers"][0]["event_name"], r#"f("\\a")"#);
    assert_eq!(item["triggers"][0]["description"], "text");
    assert_eq!(parser.calls.get(), 5);
}
