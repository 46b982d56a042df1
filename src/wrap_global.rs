//! Forces generated selectors out of component scoping.

/// At-rules whose bodies hold ordinary style rules
const RULE_CONTAINERS: &[&str] = &["media", "supports", "layer", "container", "document", "scope"];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Block {
    /// At-rule whose body holds more rules
    Container,
    /// Declarations or any other body copied verbatim; tracks nested braces
    Body(usize),
}

/// Wrap every selector of every style rule in `:global(...)`.
///
/// At-rule preludes are left alone; rules nested in `@media`-like blocks are
/// wrapped; `@font-face`, `@keyframes` and other at-rule bodies are copied
/// verbatim. Selectors that are already `:global(...)` stay untouched.
pub fn wrap_selectors_with_global(css: &str) -> String {
    let mut out = String::with_capacity(css.len() + css.len() / 2);
    let mut stack: Vec<Block> = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, ch) in css.char_indices() {
        match stack.last_mut() {
            Some(Block::Body(depth)) => {
                out.push(ch);
                start = i + ch.len_utf8();
                if let Some(q) = quote {
                    if escaped {
                        escaped = false;
                    } else if ch == '\\' {
                        escaped = true;
                    } else if ch == q {
                        quote = None;
                    }
                    continue;
                }
                match ch {
                    '"' | '\'' => quote = Some(ch),
                    '{' => *depth += 1,
                    '}' if *depth == 0 => {
                        stack.pop();
                    }
                    '}' => *depth -= 1,
                    _ => {}
                }
            }
            _ => {
                if let Some(q) = quote {
                    if ch == q {
                        quote = None;
                    }
                    continue;
                }
                match ch {
                    '"' | '\'' => quote = Some(ch),
                    '{' => {
                        let prelude = &css[start..i];
                        if is_container_at_rule(prelude) {
                            out.push_str(prelude);
                            stack.push(Block::Container);
                        } else if prelude.trim_start().starts_with('@') {
                            out.push_str(prelude);
                            stack.push(Block::Body(0));
                        } else {
                            wrap_selector_list(prelude, &mut out);
                            stack.push(Block::Body(0));
                        }
                        out.push('{');
                        start = i + 1;
                    }
                    ';' | '}' => {
                        out.push_str(&css[start..=i]);
                        if ch == '}' {
                            stack.pop();
                        }
                        start = i + 1;
                    }
                    _ => {}
                }
            }
        }
    }

    out.push_str(&css[start.min(css.len())..]);
    out
}

fn is_container_at_rule(prelude: &str) -> bool {
    let Some(rest) = prelude.trim_start().strip_prefix('@') else {
        return false;
    };
    let name: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    RULE_CONTAINERS.contains(&name.to_ascii_lowercase().as_str())
}

/// Wrap each top-level comma-separated selector, keeping surrounding whitespace
fn wrap_selector_list(list: &str, out: &mut String) {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut piece_start = 0;

    for (i, ch) in list.char_indices() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => quote = Some(ch),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                wrap_selector(&list[piece_start..i], out);
                out.push(',');
                piece_start = i + 1;
            }
            _ => {}
        }
    }
    wrap_selector(&list[piece_start..], out);
}

fn wrap_selector(piece: &str, out: &mut String) {
    let selector = piece.trim();
    if selector.is_empty() || selector.starts_with(":global(") {
        out.push_str(piece);
        return;
    }
    let leading = &piece[..piece.len() - piece.trim_start().len()];
    let trailing = &piece[piece.trim_end().len()..];
    out.push_str(leading);
    out.push_str(":global(");
    out.push_str(selector);
    out.push(')');
    out.push_str(trailing);
}
