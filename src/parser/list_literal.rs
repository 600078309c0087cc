/// Decodes a bracketed, quoted-string list literal into its elements.
///
/// The grammar is deliberately small: optional surrounding `[` `]`,
/// comma-separated elements, each one either a double-quoted string or a
/// bare token, with insignificant whitespace and an optional trailing
/// comma. The input comes straight from an untrusted generator, so
/// anything outside that grammar decodes to an empty list rather than an
/// error, and nothing is ever evaluated.
pub fn decode(raw: &str) -> Vec<String> {
    try_decode(raw).unwrap_or_default()
}

fn try_decode(raw: &str) -> Option<Vec<String>> {
    let trimmed = raw.trim();

    let inner = if let Some(rest) = trimmed.strip_prefix('[') {
        rest.strip_suffix(']')?
    } else if trimmed.ends_with(']') {
        return None;
    } else {
        trimmed
    };

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let Some(&first) = chars.peek() else { break };

        let item = if first == '"' {
            chars.next();
            let mut value = String::new();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some(ch) => value.push(ch),
                    None => return None,
                }
            }
            value
        } else {
            let mut token = String::new();
            while let Some(&ch) = chars.peek() {
                if ch == ',' {
                    break;
                }
                // Quotes and grouping characters inside a bare token mean
                // nested or stray literal syntax, not a plain element.
                if matches!(ch, '"' | '\'' | '[' | ']' | '{' | '}' | '(' | ')') {
                    return None;
                }
                token.push(ch);
                chars.next();
            }
            let token = token.trim().to_string();
            if token.is_empty() {
                return None;
            }
            token
        };

        items.push(item);

        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            Some(',') => continue,
            Some(_) => return None,
            None => break,
        }
    }

    Some(items)
}
