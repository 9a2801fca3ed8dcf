use failure::Error;
use std::fmt;
use std::vec::IntoIter;

use crate::errors::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Item(String),
    Open(char),
    Close(char),
}

/// a generic syntax tree node: the grammar rule(s) that matched, the text
/// matched by leaves and punctuation, and any children in source order
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: String,
    pub contents: String,
    pub children: Vec<Node>,
}

impl Node {
    fn leaf<T: Into<String>, C: Into<String>>(tag: T, contents: C) -> Node {
        Node {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    fn branch<T: Into<String>>(tag: T, children: Vec<Node>) -> Node {
        Node {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        write!(f, "{:width$}{}", "", self.tag, width = depth * 2)?;
        if !self.contents.is_empty() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f)?;

        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// parse a string of code into individual “bits” of syntax
pub fn tokenize(string: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut item = String::new();

    for c in string.chars() {
        match c {
            '(' | '{' => {
                push_item(&mut item, &mut tokens);
                tokens.push(Token::Open(c));
            }

            ')' | '}' => {
                push_item(&mut item, &mut tokens);
                tokens.push(Token::Close(c));
            }

            ';' => {
                push_item(&mut item, &mut tokens);
                return tokens;
            }

            c if c.is_whitespace() => push_item(&mut item, &mut tokens),

            _ => item.push(c),
        }
    }

    push_item(&mut item, &mut tokens);
    tokens
}

fn push_item(item: &mut String, tokens: &mut Vec<Token>) {
    if !item.is_empty() {
        tokens.push(Token::Item(item.clone()));
        item.clear();
    }
}

/// parse a line into a syntax tree rooted at a `>` node
pub fn parse(line: &str) -> Result<Node, Error> {
    let mut tokens = tokenize(line).into_iter();
    let mut children = vec![Node::leaf("regex", "")];

    while let Some(token) = tokens.next() {
        children.push(parse_expr(token, &mut tokens)?);
    }

    children.push(Node::leaf("regex", ""));
    Ok(Node::branch(">", children))
}

fn parse_expr(token: Token, tokens: &mut IntoIter<Token>) -> Result<Node, Error> {
    match token {
        Token::Open(open) => {
            let (tag, close) = match open {
                '(' => ("expr|sexpr|>", ')'),
                _   => ("expr|qexpr|>", '}'),
            };
            let mut children = vec![Node::leaf("char", open.to_string())];

            loop {
                match tokens.next() {
                    Some(Token::Close(c)) if c == close => break,
                    Some(Token::Close(c)) => {
                        Err(ParseError::MismatchedBrackets { open, close: c })?
                    }
                    Some(token) => children.push(parse_expr(token, tokens)?),
                    None => Err(ParseError::Unclosed(open))?,
                }
            }

            children.push(Node::leaf("char", close.to_string()));
            Ok(Node::branch(tag, children))
        }

        Token::Close(c) => Err(ParseError::ErroneousToken(c.to_string()))?,

        Token::Item(s) => atomize(s),
    }
}

/// classify an item as a number or a symbol leaf
fn atomize(token: String) -> Result<Node, Error> {
    if is_number(&token) {
        Ok(Node::leaf("expr|number|regex", token))
    } else if token.chars().all(is_symbol_char) {
        Ok(Node::leaf("expr|symbol|regex", token))
    } else {
        Err(ParseError::ErroneousToken(token))?
    }
}

/// `-?[0-9]+`
fn is_number(token: &str) -> bool {
    let digits = if token.starts_with('-') { &token[1..] } else { token };
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+-*/\\=<>!&".contains(c)
}

// {{{ tests
#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(tag: &str, contents: &str) -> Node {
        Node::leaf(tag, contents)
    }

    #[test]
    fn tokens() {
        assert_eq!(tokenize("(+ 1 {2}) ; comment"), vec![
            Token::Open('('),
            Token::Item("+".to_owned()),
            Token::Item("1".to_owned()),
            Token::Open('{'),
            Token::Item("2".to_owned()),
            Token::Close('}'),
            Token::Close(')'),
        ]);
    }

    #[test]
    fn tree_shape() {
        let tree = parse("+ 1 {-2 x}").unwrap();
        assert_eq!(tree, Node::branch(">", vec![
            leaf("regex", ""),
            leaf("expr|symbol|regex", "+"),
            leaf("expr|number|regex", "1"),
            Node::branch("expr|qexpr|>", vec![
                leaf("char", "{"),
                leaf("expr|number|regex", "-2"),
                leaf("expr|symbol|regex", "x"),
                leaf("char", "}"),
            ]),
            leaf("regex", ""),
        ]));
    }

    #[test]
    fn empty_line() {
        let tree = parse("   ").unwrap();
        assert_eq!(tree.children, vec![leaf("regex", ""), leaf("regex", "")]);
    }

    #[test]
    fn numbers_and_symbols() {
        assert!(is_number("-42"));
        assert!(is_number("007"));
        assert!(!is_number("-"));
        assert!(!is_number("4-2"));
        assert_eq!(atomize("-".to_owned()).unwrap().tag, "expr|symbol|regex");
        assert_eq!(atomize("head".to_owned()).unwrap().tag, "expr|symbol|regex");
    }

    #[test]
    fn rejected_lines() {
        assert!(parse("(+ 1 2").is_err());
        assert!(parse("+ 1 2)").is_err());
        assert!(parse("(+ 1 2}").is_err());
        assert!(parse("(+ 1 \"two\")").is_err());
    }

    #[test]
    fn tree_display() {
        let tree = parse("(- 3)").unwrap();
        let shown = tree.to_string();
        assert!(shown.starts_with(">\n"));
        assert!(shown.contains("  expr|sexpr|>\n"));
        assert!(shown.contains("    expr|number|regex '3'\n"));
    }
}
// }}}
