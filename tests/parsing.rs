use tabula::{parse, types::err::ParseError, Formula};

mod round_trips {
    use super::*;

    fn round_trips(text: &str) {
        let formula = parse(text).unwrap();
        assert_eq!(parse(&formula.to_string()).unwrap(), formula, "on {text}");
    }

    #[test]
    fn classics() {
        for text in [
            "a",
            "a | ~a",
            "a & ~a",
            "((~a) & b) | c",
            "((a -> b) & a) -> b",
            "(a -> b) <-> (~b -> ~a)",
            "~(a & b) <-> (~a | ~b)",
            "(a & (b | c)) <-> ((a & b) | (a & c))",
            "long_name -> (another_1 | third)",
        ] {
            round_trips(text);
        }
    }

    #[test]
    fn canonical_rendering() {
        let formula = parse("((~a) | b) | (c | a)").unwrap();
        assert_eq!(formula.to_string(), "(((¬a) ∨ b) ∨ (c ∨ a))");

        let formula = parse("a -> ~~b").unwrap();
        assert_eq!(formula.to_string(), "(a → (¬(¬b)))");
    }

    #[test]
    fn prefix_rendering() {
        let formula = parse("(a & b) -> ~c").unwrap();
        assert_eq!(formula.prefix(), "→ ∧ a b ¬c");
    }
}

mod structure {
    use super::*;

    #[test]
    fn negation_is_prefix() {
        assert_eq!(
            parse("~a & b").unwrap(),
            Formula::and(Formula::not(Formula::atom("a")), Formula::atom("b")),
        );
    }

    #[test]
    fn spellings_coincide() {
        assert_eq!(parse("a ∧ b"), parse("a & b"));
        assert_eq!(parse("a ∧ b"), parse("a /\\ b"));
        assert_eq!(parse("a ∨ b"), parse("a \\/ b"));
        assert_eq!(parse("a → b"), parse("a >> b"));
        assert_eq!(parse("a ↔ b"), parse("a <-> b"));
        assert_eq!(parse("¬a"), parse("!a"));
    }

    #[test]
    fn whitespace_is_free() {
        assert_eq!(parse("a&b"), parse("  a  &\tb  "));
    }
}

mod rejections {
    use super::*;

    #[test]
    fn implicit_associativity() {
        assert_eq!(parse("a | b | c"), Err(ParseError::AmbiguousConnectives));
        assert_eq!(parse("a & b | c"), Err(ParseError::AmbiguousConnectives));
        assert_eq!(parse("(a -> b -> c)"), Err(ParseError::AmbiguousConnectives));
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(parse("(a | b"), Err(ParseError::UnbalancedParentheses));
        assert_eq!(parse("a)"), Err(ParseError::UnbalancedParentheses));
    }

    #[test]
    fn arity() {
        assert_eq!(parse("a |"), Err(ParseError::MissingOperand));
        assert_eq!(parse("| a"), Err(ParseError::MissingOperand));
        assert_eq!(parse("()"), Err(ParseError::MissingOperand));
        assert_eq!(parse("~"), Err(ParseError::MissingOperand));
    }

    #[test]
    fn stray_tokens() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("a b"), Err(ParseError::TrailingInput));
        assert_eq!(parse("(a b)"), Err(ParseError::TrailingInput));
        assert_eq!(parse("a ? b"), Err(ParseError::UnrecognizedToken(2)));
    }
}
