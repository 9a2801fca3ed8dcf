use crate::errors::EvalError;
use crate::parser::Node;
use crate::values::Value;

/// turn a syntax tree into a `Value` tree
pub fn read(node: &Node) -> Value {
    if node.tag.contains("number") {
        return read_number(&node.contents);
    }
    if node.tag.contains("symbol") {
        return Value::symbol(node.contents.as_str());
    }

    let mut list = if node.tag == ">" || node.tag.contains("sexpr") {
        Value::expression()
    } else if node.tag.contains("qexpr") {
        Value::literal()
    } else {
        return EvalError::UnknownNode(node.tag.clone()).into();
    };

    for child in node.children.iter().filter(|child| !is_punctuation(child)) {
        if let Err(err) = list.push(read(child)) {
            return err.into();
        }
    }

    list
}

fn read_number(contents: &str) -> Value {
    match contents.parse::<i64>() {
        Ok(n)  => Value::number(n),
        Err(_) => EvalError::InvalidNumber.into(),
    }
}

/// brackets and the root's start/end anchors carry no value
fn is_punctuation(node: &Node) -> bool {
    match node.contents.as_str() {
        "(" | ")" | "{" | "}" => true,
        _ => node.tag == "regex",
    }
}

// {{{ tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::values::Value::*;

    fn read_line(line: &str) -> Value {
        read(&parse(line).unwrap())
    }

    #[test]
    fn leaves() {
        assert_eq!(read_line("42"), Expression(vec![Number(42)]));
        assert_eq!(read_line("-7 tail"),
                   Expression(vec![Number(-7), Symbol("tail".to_owned())]));
    }

    #[test]
    fn nested_lists() {
        assert_eq!(read_line("(+ 1 {2 (3)})"), Expression(vec![
            Expression(vec![
                Symbol("+".to_owned()),
                Number(1),
                Literal(vec![Number(2), Expression(vec![Number(3)])]),
            ]),
        ]));
    }

    #[test]
    fn out_of_range_number() {
        assert_eq!(read_line("99999999999999999999"),
                   Expression(vec![Error("invalid_number".to_owned())]));
        assert_eq!(read_line("-9223372036854775808"),
                   Expression(vec![Number(i64::min_value())]));
    }

    #[test]
    fn empty_root() {
        assert_eq!(read_line(""), Expression(vec![]));
    }

    #[test]
    fn unknown_tag() {
        let node = Node {
            tag: "expr|string|regex".to_owned(),
            contents: "\"hi\"".to_owned(),
            children: vec![],
        };
        assert_eq!(read(&node),
                   Error("unrecognised syntax node 'expr|string|regex'".to_owned()));
    }

    #[test]
    fn deterministic() {
        let tree = parse("{head (list 1 2) {}}").unwrap();
        assert_eq!(read(&tree), read(&tree));
    }
}
// }}}
